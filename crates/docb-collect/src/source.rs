//! Source pass: prefixed markdown scattered across a search tree.

use std::fs;

use docb_meta::{FrontMatter, build_slug, derive_title, normalize_category_path};

use crate::error::CollectError;
use crate::record::{PageRecord, Registry};
use crate::walk::{Prune, markdown_files};
use crate::{CollectConfig, stage_file, staged_path};

/// Dependency and version-control directories never searched for sources.
pub(crate) const SKIPPED_DIRS: &[&str] = &["node_modules", "vendor", ".git", ".hg", ".svn"];

/// Category used when front matter does not name one.
pub(crate) const DEFAULT_CATEGORY: &str = "guides";

/// Collect prefixed markdown files from the search root.
///
/// Every match is staged as `<category>/<slug>.md` and offered to the
/// registry. Returns the number of files read.
pub(crate) fn collect(config: &CollectConfig, registry: &mut Registry) -> Result<usize, CollectError> {
    tracing::info!(
        root = %config.search_root.display(),
        prefix = %config.prefix,
        "Scanning for prefixed markdown"
    );

    let staging_dir = config.staging_dir();
    let prune = Prune {
        names: SKIPPED_DIRS.iter().map(|&n| n.to_owned()).collect(),
        paths: vec![staging_dir.clone()],
    };

    let mut count = 0;
    for path in markdown_files(&config.search_root, prune)? {
        let Some(file_name) = path.file_name().map(|n| n.to_string_lossy().into_owned()) else {
            continue;
        };
        if !file_name.starts_with(&config.prefix) {
            continue;
        }

        let data = fs::read(&path).map_err(|e| CollectError::read(&path, e))?;
        count += 1;

        let content = String::from_utf8_lossy(&data);
        let fm = FrontMatter::parse(&content);
        let category = normalize_category_path(fm.category().unwrap_or(DEFAULT_CATEGORY));
        let slug = build_slug(&file_name, &config.prefix);
        let title = derive_title(&content, fm.title(), &slug);

        let target = staged_path(&staging_dir, &category, &format!("{slug}.md"));
        stage_file(&target, &data)?;

        let record = PageRecord::new(category, slug, title);
        let key = record.key();
        let admitted = registry.admit(record);
        if !admitted {
            tracing::warn!(
                source = %path.display(),
                key = %key,
                "Duplicate page key, keeping the first entry"
            );
        }
        tracing::debug!(
            source = %path.display(),
            target = %target.display(),
            admitted,
            "Collected prefixed document"
        );
    }

    Ok(count)
}
