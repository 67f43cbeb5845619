//! Category path and slug normalization.

/// Markdown file extension, including the dot.
const MD_EXTENSION: &str = ".md";

/// Canonicalize a category path.
///
/// Trims whitespace, converts `\` separators to `/`, trims leading and
/// trailing slashes, and maps `.` to the empty (uncategorized) path.
///
/// # Examples
///
/// ```
/// use docb_meta::normalize_category_path;
///
/// assert_eq!(normalize_category_path("/guides/advanced/"), "guides/advanced");
/// assert_eq!(normalize_category_path("."), "");
/// ```
#[must_use]
pub fn normalize_category_path(path: &str) -> String {
    let path = path.trim().replace('\\', "/");
    match path.trim_matches('/') {
        "." => String::new(),
        trimmed => trimmed.to_owned(),
    }
}

/// Convert a prefixed markdown filename into a slug.
///
/// Drops the `.md` extension, strips `prefix` when the name starts with it,
/// replaces `_` with `-` and lower-cases the result. No other characters are
/// touched.
///
/// # Examples
///
/// ```
/// use docb_meta::build_slug;
///
/// assert_eq!(build_slug("DOC_Example_Page.md", "DOC_"), "example-page");
/// ```
#[must_use]
pub fn build_slug(file_name: &str, prefix: &str) -> String {
    let stem = file_name.strip_suffix(MD_EXTENSION).unwrap_or(file_name);
    let stem = if prefix.is_empty() {
        stem
    } else {
        stem.strip_prefix(prefix).unwrap_or(stem)
    };
    stem.replace('_', "-").to_lowercase()
}

/// Format a path segment or slug as a display title.
///
/// Replaces `_` and `-` with spaces and capitalizes every word (first
/// character upper-cased, the rest lower-cased). Blank input yields
/// `"Untitled"`.
///
/// # Examples
///
/// ```
/// use docb_meta::format_title;
///
/// assert_eq!(format_title("getting_started"), "Getting Started");
/// assert_eq!(format_title("API-reference"), "Api Reference");
/// assert_eq!(format_title("--"), "Untitled");
/// ```
#[must_use]
pub fn format_title(input: &str) -> String {
    let mut result = String::with_capacity(input.len());
    for word in input.split(['-', '_']).flat_map(str::split_whitespace) {
        if !result.is_empty() {
            result.push(' ');
        }
        capitalize_into(word, &mut result);
    }
    if result.is_empty() {
        "Untitled".to_owned()
    } else {
        result
    }
}

/// Deduplication key for a `(category, slug)` pair.
#[must_use]
pub fn menu_key(category: &str, slug: &str) -> String {
    format!("{category}|{slug}")
}

/// Upper-case the first character and lower-case the rest, appending to `buf`.
fn capitalize_into(word: &str, buf: &mut String) {
    let mut chars = word.chars();
    if let Some(first) = chars.next() {
        buf.extend(first.to_uppercase());
        buf.push_str(&chars.as_str().to_lowercase());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_category_path() {
        assert_eq!(normalize_category_path("/guides/advanced/"), "guides/advanced");
        assert_eq!(normalize_category_path("guides"), "guides");
        assert_eq!(normalize_category_path("  guides/intro  "), "guides/intro");
        assert_eq!(normalize_category_path("."), "");
        assert_eq!(normalize_category_path(""), "");
        assert_eq!(normalize_category_path("///"), "");
    }

    #[test]
    fn test_normalize_category_path_converts_backslashes() {
        assert_eq!(normalize_category_path("guides\\advanced\\"), "guides/advanced");
    }

    #[test]
    fn test_normalize_category_path_keeps_inner_dots() {
        assert_eq!(normalize_category_path("./guides"), "./guides");
        assert_eq!(normalize_category_path("/./"), "");
    }

    #[test]
    fn test_build_slug_strips_prefix() {
        assert_eq!(build_slug("DOC_Example_Page.md", "DOC_"), "example-page");
        assert_eq!(build_slug("DOC_ONLY_HEADING.md", "DOC_"), "only-heading");
    }

    #[test]
    fn test_build_slug_without_matching_prefix() {
        assert_eq!(build_slug("Readme_File.md", "DOC_"), "readme-file");
        assert_eq!(build_slug("doc_lower.md", "DOC_"), "doc-lower");
    }

    #[test]
    fn test_build_slug_empty_prefix() {
        assert_eq!(build_slug("Some_Page.md", ""), "some-page");
    }

    #[test]
    fn test_build_slug_leaves_other_characters() {
        assert_eq!(build_slug("DOC_a b.c.md", "DOC_"), "a b.c");
    }

    #[test]
    fn test_format_title() {
        assert_eq!(format_title("guides"), "Guides");
        assert_eq!(format_title("deep-dive"), "Deep Dive");
        assert_eq!(format_title("doc_fallback"), "Doc Fallback");
        assert_eq!(format_title("MIXED_case"), "Mixed Case");
        assert_eq!(format_title("  spaced  out "), "Spaced Out");
    }

    #[test]
    fn test_format_title_empty_is_untitled() {
        assert_eq!(format_title(""), "Untitled");
        assert_eq!(format_title(" _- "), "Untitled");
    }

    #[test]
    fn test_format_title_unicode() {
        assert_eq!(format_title("über_straße"), "Über Straße");
    }

    #[test]
    fn test_menu_key() {
        assert_eq!(menu_key("guides", "intro"), "guides|intro");
        assert_eq!(menu_key("", "index"), "|index");
    }
}
