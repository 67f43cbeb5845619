//! Two-level sidebar tree.
//!
//! Records are grouped by the first segment of their category (the section)
//! and, when present, the second segment (the subsection). Deeper segments
//! do not add nesting: `guides/advanced/tips` lands in `guides/advanced`.

use std::collections::BTreeMap;

use docb_collect::PageRecord;
use docb_meta::{format_title, normalize_category_path};

/// Title of the section holding uncategorized records.
pub const GENERAL_TITLE: &str = "General";

/// Slug that sorts ahead of every other item in a list.
const INDEX_SLUG: &str = "index";

/// Top-level sidebar group.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Section {
    /// First category segment ("" for the general bucket).
    pub key: String,
    /// Display title.
    pub title: String,
    /// Records whose category has a single segment (or none).
    pub items: Vec<PageRecord>,
    /// Nested groups, ordered by key.
    pub subsections: Vec<Subsection>,
}

/// Second-level sidebar group.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Subsection {
    /// Composite key (`first/second`).
    pub key: String,
    /// Display title.
    pub title: String,
    /// Records in this group.
    pub items: Vec<PageRecord>,
}

#[derive(Default)]
struct SectionBuilder {
    items: Vec<PageRecord>,
    subsections: BTreeMap<String, (String, Vec<PageRecord>)>,
}

/// Group records into ordered sections.
///
/// Sections ascend by key, so the general bucket ("") comes first.
/// Subsections ascend by composite key. Item lists are sorted with
/// [`sort_items`].
#[must_use]
pub fn build_sections(records: &[PageRecord]) -> Vec<Section> {
    let mut builders: BTreeMap<String, SectionBuilder> = BTreeMap::new();

    for record in records {
        let category = normalize_category_path(&record.category_path);
        let mut parts = category.split('/');
        let root = parts.next().unwrap_or_default();
        let builder = builders.entry(root.to_owned()).or_default();

        match parts.next() {
            Some(second) => {
                let key = format!("{root}/{second}");
                builder
                    .subsections
                    .entry(key)
                    .or_insert_with(|| (format_title(second), Vec::new()))
                    .1
                    .push(record.clone());
            }
            _ => builder.items.push(record.clone()),
        }
    }

    builders
        .into_iter()
        .map(|(key, builder)| {
            let mut items = builder.items;
            sort_items(&mut items);
            let subsections = builder
                .subsections
                .into_iter()
                .map(|(key, (title, mut items))| {
                    sort_items(&mut items);
                    Subsection { key, title, items }
                })
                .collect();
            let title = if key.is_empty() {
                GENERAL_TITLE.to_owned()
            } else {
                format_title(&key)
            };
            Section {
                key,
                title,
                items,
                subsections,
            }
        })
        .collect()
}

/// Sort items in place: `index` first, then by lower-cased title.
///
/// The sort is stable, so equal titles keep admission order.
pub fn sort_items(items: &mut [PageRecord]) {
    items.sort_by(|a, b| {
        (a.slug != INDEX_SLUG)
            .cmp(&(b.slug != INDEX_SLUG))
            .then_with(|| a.title.to_lowercase().cmp(&b.title.to_lowercase()))
    });
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn titles(items: &[PageRecord]) -> Vec<&str> {
        items.iter().map(|r| r.title.as_str()).collect()
    }

    #[test]
    fn test_end_to_end_grouping() {
        let records = vec![
            PageRecord::new("guides", "intro", "Intro"),
            PageRecord::new("guides/advanced", "deep-dive", "Deep Dive"),
            PageRecord::new("guides/advanced", "index", "Advanced Overview"),
            PageRecord::new("", "faq", "FAQ"),
        ];

        let sections = build_sections(&records);

        assert_eq!(
            sections,
            vec![
                Section {
                    key: String::new(),
                    title: "General".to_owned(),
                    items: vec![PageRecord::new("", "faq", "FAQ")],
                    subsections: vec![],
                },
                Section {
                    key: "guides".to_owned(),
                    title: "Guides".to_owned(),
                    items: vec![PageRecord::new("guides", "intro", "Intro")],
                    subsections: vec![Subsection {
                        key: "guides/advanced".to_owned(),
                        title: "Advanced".to_owned(),
                        items: vec![
                            PageRecord::new("guides/advanced", "index", "Advanced Overview"),
                            PageRecord::new("guides/advanced", "deep-dive", "Deep Dive"),
                        ],
                    }],
                },
            ]
        );
    }

    #[test]
    fn test_deeper_segments_share_subsection() {
        let records = vec![
            PageRecord::new("guides/advanced/topic", "a", "A"),
            PageRecord::new("guides/advanced/other", "b", "B"),
        ];

        let sections = build_sections(&records);

        assert_eq!(sections.len(), 1);
        assert_eq!(sections[0].subsections.len(), 1);
        assert_eq!(sections[0].subsections[0].key, "guides/advanced");
        assert_eq!(titles(&sections[0].subsections[0].items), vec!["A", "B"]);
    }

    #[test]
    fn test_sections_and_subsections_sorted_by_key() {
        let records = vec![
            PageRecord::new("zeta", "a", "A"),
            PageRecord::new("alpha/zz", "b", "B"),
            PageRecord::new("alpha/aa", "c", "C"),
            PageRecord::new("", "d", "D"),
        ];

        let sections = build_sections(&records);

        let keys: Vec<_> = sections.iter().map(|s| s.key.as_str()).collect();
        assert_eq!(keys, vec!["", "alpha", "zeta"]);
        let sub_keys: Vec<_> = sections[1].subsections.iter().map(|s| s.key.as_str()).collect();
        assert_eq!(sub_keys, vec!["alpha/aa", "alpha/zz"]);
        assert!(sections[1].items.is_empty());
    }

    #[test]
    fn test_section_titles_formatted_from_segment() {
        let records = vec![PageRecord::new("platform_ops/on-call", "a", "A")];

        let sections = build_sections(&records);

        assert_eq!(sections[0].title, "Platform Ops");
        assert_eq!(sections[0].subsections[0].title, "On Call");
    }

    #[test]
    fn test_sort_items_index_first_then_case_insensitive() {
        let mut items = vec![
            PageRecord::new("g", "b", "beta"),
            PageRecord::new("g", "a", "Alpha"),
            PageRecord::new("g", "index", "Zed Overview"),
            PageRecord::new("g", "c", "Charlie"),
        ];

        sort_items(&mut items);

        assert_eq!(titles(&items), vec!["Zed Overview", "Alpha", "beta", "Charlie"]);
    }

    #[test]
    fn test_sort_items_is_stable() {
        let mut items = vec![
            PageRecord::new("g", "first", "Same"),
            PageRecord::new("g", "second", "same"),
        ];

        sort_items(&mut items);

        let slugs: Vec<_> = items.iter().map(|r| r.slug.as_str()).collect();
        assert_eq!(slugs, vec!["first", "second"]);
    }

    #[test]
    fn test_empty_records() {
        assert!(build_sections(&[]).is_empty());
    }
}
