//! Markdown discovery and staging for docb.
//!
//! A collection run has two passes that share one [`Registry`]:
//!
//! 1. **Source pass**: walks the search root for markdown files whose name
//!    starts with the configured prefix. Category, slug and title come from
//!    front matter and the filename; each file is staged as
//!    `<category>/<slug>.md`.
//! 2. **Workspace pass**: walks the documentation directory for curated
//!    pages. Category is the parent directory, the slug is the file stem,
//!    and each file is staged at its relative path.
//!
//! The first record registered for a `(category, slug)` key wins, so
//! source documents shadow workspace pages with the same key.
//!
//! # Example
//!
//! ```no_run
//! use std::path::PathBuf;
//!
//! use docb_collect::{CollectConfig, Collector};
//!
//! let collector = Collector::new(CollectConfig {
//!     prefix: "DOC_".to_owned(),
//!     search_root: PathBuf::from("/repo"),
//!     doc_dir: PathBuf::from("/repo/docs"),
//!     staging_name: "temp".to_owned(),
//! });
//! let collection = collector.collect()?;
//! println!("{} pages", collection.records.len());
//! # Ok::<(), docb_collect::CollectError>(())
//! ```

mod error;
mod manifest;
mod record;
mod source;
mod walk;
mod workspace;

use std::fs;
use std::path::{Path, PathBuf};

pub use error::{CollectError, CollectErrorKind};
pub use manifest::{MANIFEST_FILENAME, format_manifest, write_manifest};
pub use record::{PageRecord, Registry};

/// Inputs of a collection run.
#[derive(Clone, Debug)]
pub struct CollectConfig {
    /// Filename prefix marking source documents (e.g. `DOC_`).
    pub prefix: String,
    /// Root of the source pass.
    pub search_root: PathBuf,
    /// Documentation workspace root.
    pub doc_dir: PathBuf,
    /// Name of the staging directory inside `doc_dir`.
    pub staging_name: String,
}

impl CollectConfig {
    /// Absolute staging directory (`doc_dir/staging_name`).
    #[must_use]
    pub fn staging_dir(&self) -> PathBuf {
        self.doc_dir.join(&self.staging_name)
    }
}

/// Result of a collection run.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Collection {
    /// Admitted records in admission order.
    pub records: Vec<PageRecord>,
    /// Files read by the source pass, including rejected duplicates.
    pub source_count: usize,
    /// Files read by the workspace pass, including rejected duplicates.
    pub workspace_count: usize,
}

/// Runs both collection passes against a prepared staging directory.
#[derive(Clone, Debug)]
pub struct Collector {
    config: CollectConfig,
}

impl Collector {
    /// Create a collector.
    #[must_use]
    pub fn new(config: CollectConfig) -> Self {
        Self { config }
    }

    /// Run the source pass, then the workspace pass.
    ///
    /// The staging directory must already exist; staged copies are written
    /// as files are discovered.
    ///
    /// # Errors
    ///
    /// Returns [`CollectError`] on the first walk, read or write failure.
    pub fn collect(&self) -> Result<Collection, CollectError> {
        let mut registry = Registry::new();
        let source_count = source::collect(&self.config, &mut registry)?;
        let workspace_count = workspace::collect(&self.config, &mut registry)?;

        tracing::info!(
            source_count,
            workspace_count,
            pages = registry.len(),
            "Collection complete"
        );

        Ok(Collection {
            records: registry.into_records(),
            source_count,
            workspace_count,
        })
    }
}

/// Staging location for `file_name` under a normalized category path.
pub(crate) fn staged_path(staging_dir: &Path, category: &str, file_name: &str) -> PathBuf {
    category
        .split('/')
        .filter(|segment| !segment.is_empty())
        .fold(staging_dir.to_path_buf(), |path, segment| path.join(segment))
        .join(file_name)
}

/// Write `data` to `target`, creating parent directories.
pub(crate) fn stage_file(target: &Path, data: &[u8]) -> Result<(), CollectError> {
    if let Some(parent) = target.parent() {
        fs::create_dir_all(parent).map_err(|e| CollectError::create_dir(parent, e))?;
    }
    fs::write(target, data).map_err(|e| CollectError::write(target, e))
}
