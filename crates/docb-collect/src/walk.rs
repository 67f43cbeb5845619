//! Deterministic directory walking.
//!
//! Both collection passes walk their tree in file-name order so that the
//! admission order (and with it the sidebar tie-breaks) is stable across
//! runs on the same machine. Ignore files are not consulted: a `.gitignore`
//! in the source tree does not hide documentation.

use std::path::{Component, Path, PathBuf};

use ignore::{DirEntry, WalkBuilder};

use crate::error::CollectError;

/// Markdown file extension, without the dot.
const MD_EXTENSION: &str = "md";

/// Rules for pruning directories during a walk.
#[derive(Clone, Debug, Default)]
pub(crate) struct Prune {
    /// Directory names skipped at any depth.
    pub names: Vec<String>,
    /// Absolute directories skipped wherever they appear.
    pub paths: Vec<PathBuf>,
}

impl Prune {
    fn skips(&self, entry: &DirEntry) -> bool {
        if !entry.file_type().is_some_and(|t| t.is_dir()) {
            return false;
        }
        let name = entry.file_name().to_string_lossy();
        self.names.iter().any(|n| *n == name)
            || self.paths.iter().any(|p| same_path(p, entry.path()))
    }
}

/// Walk `root` and return every markdown file, in file-name order.
///
/// Directories matched by `prune` are skipped with their whole subtree. The
/// root itself is never pruned.
pub(crate) fn markdown_files(root: &Path, prune: Prune) -> Result<Vec<PathBuf>, CollectError> {
    let walker = WalkBuilder::new(root)
        .standard_filters(false)
        .follow_links(false)
        .sort_by_file_name(|a, b| a.cmp(b))
        .filter_entry(move |entry| !prune.skips(entry))
        .build();

    let mut files = Vec::new();
    for entry in walker {
        let entry = entry.map_err(|e| CollectError::walk(root, e))?;
        if entry.file_type().is_some_and(|t| t.is_dir()) {
            continue;
        }
        if is_markdown(entry.path()) {
            files.push(entry.into_path());
        }
    }
    Ok(files)
}

/// True if the path has the `.md` extension.
pub(crate) fn is_markdown(path: &Path) -> bool {
    path.extension().is_some_and(|e| e == MD_EXTENSION)
}

/// Compare two paths after lexical cleaning (`.` dropped, `..` applied).
pub(crate) fn same_path(a: &Path, b: &Path) -> bool {
    clean_path(a) == clean_path(b)
}

fn clean_path(path: &Path) -> PathBuf {
    let mut cleaned = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                if !cleaned.pop() {
                    cleaned.push(component);
                }
            }
            other => cleaned.push(other),
        }
    }
    cleaned
}
