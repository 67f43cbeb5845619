//! Page records and the dedup registry.

use std::collections::HashSet;

use docb_meta::menu_key;

/// One navigable document.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PageRecord {
    /// Normalized category path ("" for uncategorized, e.g. "guides/advanced").
    pub category_path: String,
    /// URL slug within the category.
    pub slug: String,
    /// Display title.
    pub title: String,
}

impl PageRecord {
    /// Create a new record.
    #[must_use]
    pub fn new(
        category_path: impl Into<String>,
        slug: impl Into<String>,
        title: impl Into<String>,
    ) -> Self {
        Self {
            category_path: category_path.into(),
            slug: slug.into(),
            title: title.into(),
        }
    }

    /// Display key (`category|slug`) used in log output.
    #[must_use]
    pub fn key(&self) -> String {
        menu_key(&self.category_path, &self.slug)
    }

    /// Site link (`/category/slug`, or `/slug` when uncategorized).
    #[must_use]
    pub fn link(&self) -> String {
        let joined = format!("{}/{}", self.category_path, self.slug);
        format!("/{}", joined.trim_matches('/'))
    }
}

/// Ordered set of admitted records.
///
/// Shared by both collection passes of a single run: the first record seen
/// for a `(category, slug)` pair wins, later ones are rejected.
#[derive(Debug, Default)]
pub struct Registry {
    seen: HashSet<(String, String)>,
    records: Vec<PageRecord>,
}

impl Registry {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Admit a record if its `(category, slug)` pair has not been seen yet.
    ///
    /// Returns `true` if the record was appended.
    pub fn admit(&mut self, record: PageRecord) -> bool {
        let pair = (record.category_path.clone(), record.slug.clone());
        if !self.seen.insert(pair) {
            return false;
        }
        self.records.push(record);
        true
    }

    /// Admitted records in admission order.
    #[must_use]
    pub fn records(&self) -> &[PageRecord] {
        &self.records
    }

    /// Number of admitted records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// True if nothing was admitted.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Consume the registry, returning records in admission order.
    #[must_use]
    pub fn into_records(self) -> Vec<PageRecord> {
        self.records
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_and_link() {
        let record = PageRecord::new("guides/advanced", "deep-dive", "Deep Dive");

        assert_eq!(record.key(), "guides/advanced|deep-dive");
        assert_eq!(record.link(), "/guides/advanced/deep-dive");
    }

    #[test]
    fn test_link_uncategorized() {
        assert_eq!(PageRecord::new("", "overview", "Overview").link(), "/overview");
    }

    #[test]
    fn test_admit_rejects_duplicate_key() {
        let mut registry = Registry::new();

        assert!(registry.admit(PageRecord::new("guides", "intro", "From Source")));
        assert!(!registry.admit(PageRecord::new("guides", "intro", "From Workspace")));

        assert_eq!(registry.len(), 1);
        assert_eq!(registry.records()[0].title, "From Source");
    }

    #[test]
    fn test_same_slug_different_category_both_admitted() {
        let mut registry = Registry::new();

        assert!(registry.admit(PageRecord::new("guides", "index", "Guides")));
        assert!(registry.admit(PageRecord::new("guides/advanced", "index", "Advanced")));
        assert!(registry.admit(PageRecord::new("", "index", "Root")));

        assert_eq!(registry.len(), 3);
    }

    #[test]
    fn test_pairs_with_colliding_display_keys_both_admitted() {
        let mut registry = Registry::new();
        let first = PageRecord::new("a|b", "c", "First");
        let second = PageRecord::new("a", "b|c", "Second");
        assert_eq!(first.key(), second.key());

        assert!(registry.admit(first));
        assert!(registry.admit(second));

        assert_eq!(registry.len(), 2);
        assert_eq!(registry.records()[1].title, "Second");
    }

    #[test]
    fn test_into_records_keeps_admission_order() {
        let mut registry = Registry::new();
        registry.admit(PageRecord::new("b", "two", "Two"));
        registry.admit(PageRecord::new("a", "one", "One"));
        registry.admit(PageRecord::new("b", "two", "Again"));

        let slugs: Vec<_> = registry
            .into_records()
            .into_iter()
            .map(|r| r.slug)
            .collect();
        assert_eq!(slugs, vec!["two", "one"]);
    }

    #[test]
    fn test_empty_registry() {
        let registry = Registry::new();

        assert!(registry.is_empty());
        assert!(registry.records().is_empty());
    }
}
