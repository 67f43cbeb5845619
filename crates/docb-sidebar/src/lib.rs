//! Sidebar generation for docb.
//!
//! Turns the collected page records into a two-level tree
//! ([`build_sections`]), renders it as a VitePress sidebar fragment
//! ([`render_sidebar`]) and substitutes the fragment into the workspace's
//! `base.config.js` ([`apply_sidebar`]).

mod render;
mod template;
mod tree;

pub use render::render_sidebar;
pub use template::{SIDEBAR_PLACEHOLDER, TemplateError, apply_sidebar};
pub use tree::{GENERAL_TITLE, Section, Subsection, build_sections, sort_items};
