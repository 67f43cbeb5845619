//! Menu manifest (`.menu-items.txt`).

use std::fmt::Write as _;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::CollectError;
use crate::record::PageRecord;

/// Manifest filename, written at the staging root.
pub const MANIFEST_FILENAME: &str = ".menu-items.txt";

/// Format records as `category|slug|title` lines in admission order.
///
/// Each line ends with a newline. Titles are written verbatim.
#[must_use]
pub fn format_manifest(records: &[PageRecord]) -> String {
    let mut out = String::new();
    for record in records {
        let _ = writeln!(
            out,
            "{}|{}|{}",
            record.category_path, record.slug, record.title
        );
    }
    out
}

/// Write the manifest into `staging_dir`, returning its path.
///
/// # Errors
///
/// Returns [`CollectError`] if the file cannot be written.
pub fn write_manifest(staging_dir: &Path, records: &[PageRecord]) -> Result<PathBuf, CollectError> {
    let path = staging_dir.join(MANIFEST_FILENAME);
    fs::write(&path, format_manifest(records)).map_err(|e| CollectError::write(&path, e))?;
    tracing::debug!(path = %path.display(), entries = records.len(), "Wrote menu manifest");
    Ok(path)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_format_manifest() {
        let records = vec![
            PageRecord::new("guides/intro", "getting-started", "Start Here"),
            PageRecord::new("", "faq", "Faq"),
            PageRecord::new("guides", "index", "Guides (overview)"),
        ];

        assert_eq!(
            format_manifest(&records),
            "guides/intro|getting-started|Start Here\n|faq|Faq\nguides|index|Guides (overview)\n"
        );
    }

    #[test]
    fn test_format_manifest_empty() {
        assert_eq!(format_manifest(&[]), "");
    }

    #[test]
    fn test_format_manifest_keeps_pipes_in_titles() {
        let records = vec![PageRecord::new("guides", "a", "A | B")];

        assert_eq!(format_manifest(&records), "guides|a|A | B\n");
    }

    #[test]
    fn test_write_manifest() {
        let temp_dir = tempfile::tempdir().unwrap();
        let records = vec![PageRecord::new("guides", "setup", "Setup")];

        let path = write_manifest(temp_dir.path(), &records).unwrap();

        assert_eq!(path, temp_dir.path().join(MANIFEST_FILENAME));
        assert_eq!(fs::read_to_string(path).unwrap(), "guides|setup|Setup\n");
    }

    #[test]
    fn test_write_manifest_missing_dir() {
        let temp_dir = tempfile::tempdir().unwrap();
        let missing = temp_dir.path().join("missing");

        let err = write_manifest(&missing, &[]).unwrap_err();

        assert_eq!(err.kind, crate::CollectErrorKind::Write);
    }
}
