//! Configuration management for docb.
//!
//! Parses `docb.toml` configuration files with serde and provides
//! auto-discovery of config files in parent directories.
//!
//! CLI settings can be applied during load via [`CliSettings`].
//!
//! ## Environment Variable Expansion
//!
//! Path values support `~`, `${VAR}` (errors if unset) and
//! `${VAR:-default}`. Expanded fields:
//! - `source.search_path`
//! - `docs.dir`

mod expand;

use serde::Deserialize;
use std::path::{Component, Path, PathBuf};

/// CLI settings that override configuration file values.
///
/// All fields are optional. Only non-None values override the loaded config.
#[derive(Debug, Default)]
pub struct CliSettings {
    /// Override the source filename prefix.
    pub prefix: Option<String>,
    /// Override the source search root.
    pub search_path: Option<PathBuf>,
    /// Override the documentation workspace.
    pub doc_dir: Option<PathBuf>,
    /// Override the staging directory name.
    pub staging_dir: Option<String>,
    /// Override the site engine.
    pub engine: Option<String>,
}

/// Configuration filename to search for.
const CONFIG_FILENAME: &str = "docb.toml";

/// Default prefix marking source documents.
pub const DEFAULT_PREFIX: &str = "DOC_";

/// Default staging directory name.
pub const DEFAULT_STAGING_DIR: &str = "temp";

/// The only site engine currently available.
pub const SUPPORTED_ENGINE: &str = "vitepress";

/// Application configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Source configuration (paths are relative strings from TOML).
    source: SourceConfigRaw,
    /// Documentation configuration (paths are relative strings from TOML).
    docs: DocsConfigRaw,
    /// Site engine configuration.
    pub engine: EngineConfig,

    /// Resolved source configuration (set after loading).
    #[serde(skip)]
    pub source_resolved: SourceConfig,
    /// Resolved docs configuration (set after loading).
    #[serde(skip)]
    pub docs_resolved: DocsConfig,
    /// Path to the config file (set after loading).
    #[serde(skip)]
    pub config_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self::default_with_base(Path::new("."))
    }
}

/// Raw source configuration as parsed from TOML.
#[derive(Debug, Deserialize, Default)]
#[serde(default)]
struct SourceConfigRaw {
    prefix: Option<String>,
    search_path: Option<String>,
}

/// Resolved source configuration.
#[derive(Debug, Default)]
pub struct SourceConfig {
    /// Filename prefix of documents to collect.
    pub prefix: String,
    /// Root of the source search. Required before a build.
    pub search_path: Option<PathBuf>,
}

/// Raw docs configuration as parsed from TOML.
#[derive(Debug, Deserialize, Default)]
#[serde(default)]
struct DocsConfigRaw {
    dir: Option<String>,
    staging_dir: Option<String>,
}

/// Resolved documentation workspace configuration.
#[derive(Debug, Default)]
pub struct DocsConfig {
    /// Documentation workspace directory.
    pub dir: PathBuf,
    /// Staging directory name inside `dir`.
    pub staging_dir: String,
}

/// Site engine configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Engine name (case-insensitive).
    pub name: String,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            name: SUPPORTED_ENGINE.to_owned(),
        }
    }
}

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File not found.
    #[error("Configuration file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
    /// Validation error.
    #[error("Configuration error: {0}")]
    Validation(String),
    /// Unknown site engine.
    #[error("unsupported engine '{0}': only 'vitepress' is currently available")]
    UnsupportedEngine(String),
    /// Environment variable error during expansion.
    #[error("Environment variable error in {field}: {message}")]
    EnvVar {
        /// Config field path (e.g., "`docs.dir`").
        field: String,
        /// Error message (e.g., "${`DOCS_ROOT`} not set").
        message: String,
    },
}

/// Require a string field to be non-empty.
fn require_non_empty(value: &str, field: &str) -> Result<(), ConfigError> {
    if value.trim().is_empty() {
        return Err(ConfigError::Validation(format!("{field} cannot be empty")));
    }
    Ok(())
}

/// Require a field to be a single path component (no separators, not `.`/`..`).
fn require_plain_name(value: &str, field: &str) -> Result<(), ConfigError> {
    let mut components = Path::new(value).components();
    let plain = matches!(
        (components.next(), components.next()),
        (Some(Component::Normal(_)), None)
    ) && !value.contains(['/', '\\']);
    if !plain {
        return Err(ConfigError::Validation(format!(
            "{field} must be a plain directory name, got '{value}'"
        )));
    }
    Ok(())
}

impl Config {
    /// Load configuration from file with optional CLI settings.
    ///
    /// If `config_path` is provided, loads from that file.
    /// Otherwise, searches for `docb.toml` in current directory and parents.
    ///
    /// CLI settings are applied after loading and path resolution, allowing CLI
    /// arguments to take precedence over config file values. The merged
    /// result is validated.
    ///
    /// # Errors
    ///
    /// Returns error if explicit `config_path` doesn't exist, parsing fails or
    /// the merged configuration is invalid.
    pub fn load(
        config_path: Option<&Path>,
        cli_settings: Option<&CliSettings>,
    ) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = config_path {
            if !path.exists() {
                return Err(ConfigError::NotFound(path.to_path_buf()));
            }
            Self::load_from_file(path)?
        } else if let Some(discovered) = Self::discover_config() {
            Self::load_from_file(&discovered)?
        } else {
            Self::default_with_cwd()
        };

        if let Some(settings) = cli_settings {
            config.apply_cli_settings(settings);
        }

        config.validate()?;
        Ok(config)
    }

    /// Apply CLI settings to the configuration.
    fn apply_cli_settings(&mut self, settings: &CliSettings) {
        if let Some(prefix) = &settings.prefix {
            self.source_resolved.prefix.clone_from(prefix);
        }
        if let Some(search_path) = &settings.search_path {
            self.source_resolved.search_path = Some(search_path.clone());
        }
        if let Some(doc_dir) = &settings.doc_dir {
            self.docs_resolved.dir.clone_from(doc_dir);
        }
        if let Some(staging_dir) = &settings.staging_dir {
            self.docs_resolved.staging_dir.clone_from(staging_dir);
        }
        if let Some(engine) = &settings.engine {
            self.engine.name.clone_from(engine);
        }
    }

    /// Get the validated search root.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if no search path was configured.
    pub fn require_search_path(&self) -> Result<&Path, ConfigError> {
        self.source_resolved.search_path.as_deref().ok_or_else(|| {
            ConfigError::Validation(
                "source.search_path is required (set it in docb.toml or pass --search)".into(),
            )
        })
    }

    /// Search for config file in current directory and parents.
    fn discover_config() -> Option<PathBuf> {
        let mut current = std::env::current_dir().ok()?;
        loop {
            let candidate = current.join(CONFIG_FILENAME);
            if candidate.exists() {
                return Some(candidate);
            }
            if !current.pop() {
                return None;
            }
        }
    }

    /// Create default config with paths relative to current working directory.
    fn default_with_cwd() -> Self {
        let cwd = std::env::current_dir().unwrap_or_default();
        Self::default_with_base(&cwd)
    }

    /// Create default config with paths relative to given base directory.
    fn default_with_base(base: &Path) -> Self {
        Self {
            source: SourceConfigRaw::default(),
            docs: DocsConfigRaw::default(),
            engine: EngineConfig::default(),
            source_resolved: SourceConfig {
                prefix: DEFAULT_PREFIX.to_owned(),
                search_path: None,
            },
            docs_resolved: DocsConfig {
                dir: base.to_path_buf(),
                staging_dir: DEFAULT_STAGING_DIR.to_owned(),
            },
            config_path: None,
        }
    }

    /// Load configuration from a specific file.
    fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let mut config: Self = toml::from_str(&content)?;

        // Expand environment variables before path resolution
        config.expand_env_vars()?;

        let config_dir = path.parent().unwrap_or(Path::new("."));
        config.resolve_paths(config_dir);
        config.config_path = Some(path.to_path_buf());

        Ok(config)
    }

    /// Validate configuration values.
    ///
    /// Checks that all required fields are properly set and contain valid values.
    /// Called automatically by [`Config::load`].
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` or `ConfigError::UnsupportedEngine` if
    /// any validation fails.
    pub fn validate(&self) -> Result<(), ConfigError> {
        require_non_empty(&self.source_resolved.prefix, "source.prefix")?;
        self.require_search_path()?;
        require_non_empty(&self.docs_resolved.staging_dir, "docs.staging_dir")?;
        require_plain_name(&self.docs_resolved.staging_dir, "docs.staging_dir")?;
        self.validate_engine()?;
        Ok(())
    }

    /// Validate engine configuration.
    fn validate_engine(&self) -> Result<(), ConfigError> {
        require_non_empty(&self.engine.name, "engine.name")?;
        if !self.engine.name.trim().eq_ignore_ascii_case(SUPPORTED_ENGINE) {
            return Err(ConfigError::UnsupportedEngine(self.engine.name.clone()));
        }
        Ok(())
    }

    /// Expand environment variable references in path values.
    fn expand_env_vars(&mut self) -> Result<(), ConfigError> {
        if let Some(ref path) = self.source.search_path {
            self.source.search_path = Some(expand::expand_env(path, "source.search_path")?);
        }
        if let Some(ref dir) = self.docs.dir {
            self.docs.dir = Some(expand::expand_env(dir, "docs.dir")?);
        }
        Ok(())
    }

    /// Resolve relative paths to absolute paths based on config directory.
    fn resolve_paths(&mut self, config_dir: &Path) {
        self.source_resolved = SourceConfig {
            prefix: self
                .source
                .prefix
                .clone()
                .unwrap_or_else(|| DEFAULT_PREFIX.to_owned()),
            search_path: self.source.search_path.as_deref().map(|p| config_dir.join(p)),
        };

        self.docs_resolved = DocsConfig {
            dir: config_dir.join(self.docs.dir.as_deref().unwrap_or(".")),
            staging_dir: self
                .docs
                .staging_dir
                .clone()
                .unwrap_or_else(|| DEFAULT_STAGING_DIR.to_owned()),
        };
    }
}
