//! Title derivation for collected documents.

use crate::path::format_title;

/// Level-one heading marker.
const H1_MARKER: &str = "# ";

/// Resolve a document's display title.
///
/// Resolution order:
/// 1. `explicit` if it is `Some` and non-empty (usually the front matter title)
/// 2. The first `# ` heading anywhere in `content`
/// 3. `slug` formatted with [`format_title`]
#[must_use]
pub fn derive_title(content: &str, explicit: Option<&str>, slug: &str) -> String {
    if let Some(title) = explicit.filter(|t| !t.is_empty()) {
        return title.to_owned();
    }
    if let Some(heading) = first_heading(content) {
        return heading.to_owned();
    }
    format_title(slug)
}

/// Text of the first line that starts with `# ` once trimmed.
///
/// The heading text itself is trimmed. The whole document is scanned,
/// front matter included.
#[must_use]
pub fn first_heading(content: &str) -> Option<&str> {
    content
        .lines()
        .map(str::trim)
        .find_map(|line| line.strip_prefix(H1_MARKER))
        .map(str::trim)
}
