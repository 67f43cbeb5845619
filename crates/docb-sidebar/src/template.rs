//! Sidebar substitution into the site config template.

use crate::render::render_sidebar;
use crate::tree::Section;

/// Marker in `base.config.js` replaced by the rendered sidebar.
pub const SIDEBAR_PLACEHOLDER: &str = "// SIDEBAR_ITEMS - will be replaced by build script";

/// Template contract violation.
#[derive(Debug, thiserror::Error)]
pub enum TemplateError {
    /// Sections exist but the template has nowhere to put them.
    #[error("placeholder '{}' not found in config template", SIDEBAR_PLACEHOLDER)]
    PlaceholderMissing,
}

/// Replace the first placeholder in `template` with the rendered sidebar.
///
/// A template without the placeholder is returned unchanged when there is
/// nothing to render.
///
/// # Errors
///
/// Returns [`TemplateError::PlaceholderMissing`] if the placeholder is absent
/// and `sections` is not empty.
pub fn apply_sidebar(template: &str, sections: &[Section]) -> Result<String, TemplateError> {
    if template.contains(SIDEBAR_PLACEHOLDER) {
        return Ok(template.replacen(SIDEBAR_PLACEHOLDER, &render_sidebar(sections), 1));
    }
    if sections.is_empty() {
        return Ok(template.to_owned());
    }
    Err(TemplateError::PlaceholderMissing)
}

#[cfg(test)]
mod tests {
    use docb_collect::PageRecord;
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::tree::build_sections;

    const TEMPLATE: &str = "export default {
  themeConfig: {
    sidebar: [
// SIDEBAR_ITEMS - will be replaced by build script
    ]
  }
}
";

    #[test]
    fn test_apply_sidebar_replaces_placeholder() {
        let sections = build_sections(&[PageRecord::new("", "faq", "FAQ")]);

        let output = apply_sidebar(TEMPLATE, &sections).unwrap();

        assert_eq!(
            output,
            "export default {
  themeConfig: {
    sidebar: [
      {
        text: 'General',
        collapsed: true,
        items: [
    { text: 'FAQ', link: '/faq' },
        ]
      },
    ]
  }
}
"
        );
    }

    #[test]
    fn test_apply_sidebar_replaces_first_occurrence_only() {
        let template = format!("{SIDEBAR_PLACEHOLDER}\n{SIDEBAR_PLACEHOLDER}");
        let sections = build_sections(&[PageRecord::new("", "a", "A")]);

        let output = apply_sidebar(&template, &sections).unwrap();

        assert!(output.ends_with(&format!("\n{SIDEBAR_PLACEHOLDER}")));
        assert_eq!(output.matches(SIDEBAR_PLACEHOLDER).count(), 1);
    }

    #[test]
    fn test_apply_sidebar_empty_sections_clears_placeholder() {
        let output = apply_sidebar(TEMPLATE, &[]).unwrap();

        assert!(!output.contains(SIDEBAR_PLACEHOLDER));
        assert!(output.contains("    sidebar: [\n\n    ]"));
    }

    #[test]
    fn test_apply_sidebar_missing_placeholder_is_error() {
        let sections = build_sections(&[PageRecord::new("", "a", "A")]);

        let err = apply_sidebar("export default {}\n", &sections).unwrap_err();

        assert!(matches!(err, TemplateError::PlaceholderMissing));
        assert!(err.to_string().contains(SIDEBAR_PLACEHOLDER));
    }

    #[test]
    fn test_apply_sidebar_missing_placeholder_without_sections_passes_through() {
        let template = "export default {}\n";

        assert_eq!(apply_sidebar(template, &[]).unwrap(), template);
    }
}
