//! Collection error type.

use std::fmt;
use std::path::{Path, PathBuf};

/// Filesystem operation that failed during collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum CollectErrorKind {
    /// Directory traversal failed.
    Walk,
    /// Reading a source document failed.
    Read,
    /// Creating a staging directory failed.
    CreateDir,
    /// Writing a staged copy or the manifest failed.
    Write,
}

impl CollectErrorKind {
    fn as_str(self) -> &'static str {
        match self {
            Self::Walk => "walk",
            Self::Read => "read",
            Self::CreateDir => "create directory",
            Self::Write => "write",
        }
    }
}

/// Error that aborts a collection run.
///
/// Carries the failed operation, the path it was applied to and the
/// underlying error.
#[derive(Debug)]
pub struct CollectError {
    /// Failed operation.
    pub kind: CollectErrorKind,
    /// Path the operation was applied to.
    pub path: PathBuf,
    source: Box<dyn std::error::Error + Send + Sync>,
}

impl CollectError {
    /// Create a new collection error.
    #[must_use]
    pub fn new(
        kind: CollectErrorKind,
        path: impl Into<PathBuf>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self {
            kind,
            path: path.into(),
            source: Box::new(source),
        }
    }

    pub(crate) fn walk(path: &Path, err: ignore::Error) -> Self {
        Self::new(CollectErrorKind::Walk, path, err)
    }

    pub(crate) fn read(path: &Path, err: std::io::Error) -> Self {
        Self::new(CollectErrorKind::Read, path, err)
    }

    pub(crate) fn create_dir(path: &Path, err: std::io::Error) -> Self {
        Self::new(CollectErrorKind::CreateDir, path, err)
    }

    pub(crate) fn write(path: &Path, err: std::io::Error) -> Self {
        Self::new(CollectErrorKind::Write, path, err)
    }
}

impl fmt::Display for CollectError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "failed to {} {}: {}",
            self.kind.as_str(),
            self.path.display(),
            self.source
        )
    }
}

impl std::error::Error for CollectError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(self.source.as_ref() as &(dyn std::error::Error + 'static))
    }
}
