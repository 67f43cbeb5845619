//! Metadata extraction and path normalization for docb.
//!
//! This crate holds the leaf logic of the documentation pipeline:
//!
//! - [`FrontMatter`]: the `---` delimited `key: value` preamble of a document
//! - [`derive_title`]: title resolution (front matter > `# ` heading > slug)
//! - [`normalize_category_path`], [`build_slug`], [`format_title`]: turning
//!   raw paths and filenames into navigation keys and display names
//!
//! # Example
//!
//! ```
//! use docb_meta::{FrontMatter, build_slug, derive_title, normalize_category_path};
//!
//! let content = "---\ntitle: Getting Started\ncategory: /guides/intro/\n---\n# Body\n";
//! let fm = FrontMatter::parse(content);
//!
//! let slug = build_slug("DOC_getting_started.md", "DOC_");
//! assert_eq!(slug, "getting-started");
//! assert_eq!(normalize_category_path(fm.get("category").unwrap()), "guides/intro");
//! assert_eq!(derive_title(content, fm.title(), &slug), "Getting Started");
//! ```

mod front_matter;
mod path;
mod title;

pub use front_matter::FrontMatter;
pub use path::{build_slug, format_title, menu_key, normalize_category_path};
pub use title::{derive_title, first_heading};
