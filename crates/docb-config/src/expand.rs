//! Environment variable and home directory expansion.

use crate::ConfigError;

/// Expand `~`, `${VAR}` and `${VAR:-default}` in a configuration value.
///
/// Bare `$VAR` is only expanded alongside a braced reference; a value
/// without `${` gets tilde expansion alone.
///
/// `field` names the config key and is reported when a variable is unset.
pub(crate) fn expand_env(value: &str, field: &str) -> Result<String, ConfigError> {
    if !value.contains("${") {
        return Ok(shellexpand::tilde(value).into_owned());
    }

    shellexpand::full(value)
        .map(std::borrow::Cow::into_owned)
        .map_err(|e| ConfigError::EnvVar {
            field: field.to_owned(),
            message: format!("${{{}}} not set", e.var_name),
        })
}
