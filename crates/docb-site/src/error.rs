//! Build pipeline errors.

use std::io;
use std::path::{Path, PathBuf};

use docb_collect::CollectError;
use docb_sidebar::TemplateError;

/// Error returned by the site builder.
#[derive(Debug, thiserror::Error)]
pub enum BuildError {
    /// Collection pass failed.
    #[error(transparent)]
    Collect(#[from] CollectError),
    /// Config template has no sidebar placeholder.
    #[error("{}: {source}", path.display())]
    Template {
        /// Template file.
        path: PathBuf,
        #[source]
        source: TemplateError,
    },
    /// Neither pass produced a page.
    #[error("no documentation sources found")]
    NoSources,
    /// External command could not be started or exited unsuccessfully.
    #[error("{command} failed: {reason}")]
    Command {
        /// Command line as shown to the user.
        command: String,
        /// Spawn error or exit status.
        reason: String,
    },
    /// Required file or directory is absent.
    #[error("{what} not found: {}", path.display())]
    MissingFile {
        /// What was expected (e.g. "expected file").
        what: &'static str,
        /// Missing path.
        path: PathBuf,
    },
    /// Filesystem operation failed.
    #[error("failed to {action} {}: {source}", path.display())]
    Io {
        /// Operation (e.g. "read", "create directory").
        action: &'static str,
        /// Path the operation was applied to.
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl BuildError {
    pub(crate) fn io(action: &'static str, path: &Path, source: io::Error) -> Self {
        Self::Io {
            action,
            path: path.to_path_buf(),
            source,
        }
    }

    pub(crate) fn missing(what: &'static str, path: &Path) -> Self {
        Self::MissingFile {
            what,
            path: path.to_path_buf(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_display() {
        let err = BuildError::io(
            "write",
            Path::new("/docs/.vitepress/config.js"),
            io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        );

        assert_eq!(
            err.to_string(),
            "failed to write /docs/.vitepress/config.js: denied"
        );
    }

    #[test]
    fn test_missing_display() {
        let err = BuildError::missing("expected file", Path::new("/docs/package.json"));

        assert_eq!(err.to_string(), "expected file not found: /docs/package.json");
    }

    #[test]
    fn test_template_display_names_file() {
        let err = BuildError::Template {
            path: PathBuf::from("/docs/.vitepress/base.config.js"),
            source: TemplateError::PlaceholderMissing,
        };

        let msg = err.to_string();
        assert!(msg.starts_with("/docs/.vitepress/base.config.js: placeholder"));
    }
}
