//! VitePress sidebar fragment rendering.

use std::fmt::Write;

use docb_collect::PageRecord;

use crate::tree::Section;

/// Render sections as VitePress sidebar entries.
///
/// Lines are joined with `\n` and the fragment has no trailing newline.
/// No sections render to an empty string.
#[must_use]
pub fn render_sidebar(sections: &[Section]) -> String {
    let mut lines: Vec<String> = Vec::new();

    for section in sections {
        lines.push("      {".to_owned());
        lines.push(format!("        text: '{}',", escape_quotes(&section.title)));
        lines.push("        collapsed: true,".to_owned());
        lines.push("        items: [".to_owned());
        for item in &section.items {
            lines.push(render_item(item, 2));
        }
        for sub in &section.subsections {
            lines.push("          {".to_owned());
            lines.push(format!("            text: '{}',", escape_quotes(&sub.title)));
            lines.push("            collapsed: true,".to_owned());
            lines.push("            items: [".to_owned());
            for item in &sub.items {
                lines.push(render_item(item, 3));
            }
            lines.push("            ]".to_owned());
            lines.push("          },".to_owned());
        }
        lines.push("        ]".to_owned());
        lines.push("      },".to_owned());
    }

    lines.join("\n")
}

/// Render one page link, indented two spaces per depth.
fn render_item(item: &PageRecord, depth: usize) -> String {
    let mut line = "  ".repeat(depth);
    let _ = write!(
        line,
        "{{ text: '{}', link: '{}' }},",
        escape_quotes(&item.title),
        item.link()
    );
    line
}

/// Escape single quotes for a JavaScript single-quoted string.
fn escape_quotes(s: &str) -> String {
    s.replace('\'', "\\'")
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::tree::{Subsection, build_sections};

    #[test]
    fn test_render_empty() {
        assert_eq!(render_sidebar(&[]), "");
    }

    #[test]
    fn test_render_section_with_subsection() {
        let sections = vec![Section {
            key: "guides".to_owned(),
            title: "Guides".to_owned(),
            items: vec![PageRecord::new("guides", "intro", "Intro")],
            subsections: vec![Subsection {
                key: "guides/advanced".to_owned(),
                title: "Advanced".to_owned(),
                items: vec![PageRecord::new("guides/advanced", "index", "Overview")],
            }],
        }];

        let expected = "      {
        text: 'Guides',
        collapsed: true,
        items: [
    { text: 'Intro', link: '/guides/intro' },
          {
            text: 'Advanced',
            collapsed: true,
            items: [
      { text: 'Overview', link: '/guides/advanced/index' },
            ]
          },
        ]
      },";
        assert_eq!(render_sidebar(&sections), expected);
    }

    #[test]
    fn test_render_general_section_links() {
        let sections = build_sections(&[PageRecord::new("", "faq", "FAQ")]);

        let expected = "      {
        text: 'General',
        collapsed: true,
        items: [
    { text: 'FAQ', link: '/faq' },
        ]
      },";
        assert_eq!(render_sidebar(&sections), expected);
    }

    #[test]
    fn test_render_escapes_single_quotes() {
        let sections = build_sections(&[PageRecord::new("guides", "faq", "Don't Panic")]);

        let rendered = render_sidebar(&sections);

        assert!(rendered.contains("{ text: 'Don\\'t Panic', link: '/guides/faq' },"));
    }

    #[test]
    fn test_render_multiple_sections_in_order() {
        let sections = build_sections(&[
            PageRecord::new("ops", "run", "Run"),
            PageRecord::new("", "home", "Home"),
        ]);

        let rendered = render_sidebar(&sections);

        let general = rendered.find("text: 'General'").unwrap();
        let ops = rendered.find("text: 'Ops'").unwrap();
        assert!(general < ops);
        assert!(!rendered.ends_with('\n'));
    }

    #[test]
    fn test_escape_quotes() {
        assert_eq!(escape_quotes("it's 'quoted'"), "it\\'s \\'quoted\\'");
        assert_eq!(escape_quotes("plain"), "plain");
    }
}
