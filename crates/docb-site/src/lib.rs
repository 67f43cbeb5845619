//! Documentation site build pipeline for docb.
//!
//! [`SiteBuilder::run`] executes one build:
//!
//! 1. resolve and check the workspace layout ([`Environment`])
//! 2. wipe and recreate the staging directory
//! 3. collect prefixed sources and workspace pages
//! 4. write the menu manifest and the generated VitePress config
//! 5. install dependencies and build through an [`Engine`]
//! 6. publish the built `dist` tree back into the workspace

mod builder;
mod engine;
mod environment;
mod error;
mod publish;
mod staging;

pub use builder::{BuildConfig, BuildSummary, SiteBuilder};
pub use engine::{Engine, NpmEngine};
pub use environment::Environment;
pub use error::BuildError;
pub use publish::publish_dist;
pub use staging::{GITIGNORE_STUB, prepare_staging};
