//! Workspace pass: curated pages already living in the documentation directory.

use std::fs;

use docb_meta::{derive_title, normalize_category_path};

use crate::error::CollectError;
use crate::record::{PageRecord, Registry};
use crate::walk::{Prune, markdown_files};
use crate::{CollectConfig, stage_file};

/// Site generator and dependency directories inside the workspace.
pub(crate) const SKIPPED_DIRS: &[&str] = &[".vitepress", "node_modules"];

/// Root-level files that never become sidebar entries.
pub(crate) const EXCLUDED_ROOT_FILES: &[&str] = &[ROOT_INDEX, "DOC_BUILD_README.md"];

/// Workspace home page, staged without registration.
pub(crate) const ROOT_INDEX: &str = "index.md";

/// Appended to the title of `index` pages.
const OVERVIEW_SUFFIX: &str = " (overview)";

/// Merge existing workspace markdown into the staging tree.
///
/// Category comes from the directory, the slug is the raw file stem, and
/// front matter titles are not consulted. Returns the number of files read.
pub(crate) fn collect(config: &CollectConfig, registry: &mut Registry) -> Result<usize, CollectError> {
    tracing::info!(dir = %config.doc_dir.display(), "Merging existing documentation");

    let staging_dir = config.staging_dir();
    let mut names: Vec<String> = SKIPPED_DIRS.iter().map(|&n| n.to_owned()).collect();
    names.push(config.staging_name.clone());
    let prune = Prune {
        names,
        paths: Vec::new(),
    };

    let mut count = 0;
    for path in markdown_files(&config.doc_dir, prune)? {
        let Ok(rel) = path.strip_prefix(&config.doc_dir) else {
            continue;
        };
        let rel_str = rel.to_string_lossy().replace('\\', "/");
        if EXCLUDED_ROOT_FILES.contains(&rel_str.as_str()) {
            continue;
        }

        let data = fs::read(&path).map_err(|e| CollectError::read(&path, e))?;
        count += 1;

        let content = String::from_utf8_lossy(&data);
        let category = normalize_category_path(
            &rel.parent()
                .map(|p| p.to_string_lossy().into_owned())
                .unwrap_or_default(),
        );
        let file_name = rel
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        let slug = file_name
            .strip_suffix(".md")
            .unwrap_or(&file_name)
            .to_owned();
        let mut title = derive_title(&content, None, &slug);
        if slug == "index" && !title.is_empty() {
            title.push_str(OVERVIEW_SUFFIX);
        }

        let target = staging_dir.join(rel);
        stage_file(&target, &data)?;

        let admitted = registry.admit(PageRecord::new(category, slug, title));
        tracing::debug!(path = %rel_str, admitted, "Merged workspace document");
    }

    let root_index = config.doc_dir.join(ROOT_INDEX);
    if root_index.exists() {
        let data = fs::read(&root_index).map_err(|e| CollectError::read(&root_index, e))?;
        stage_file(&staging_dir.join(ROOT_INDEX), &data)?;
        tracing::debug!("Copied workspace home page");
    }

    Ok(count)
}
