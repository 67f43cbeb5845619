//! CLI command implementations.

pub(crate) mod build;
pub(crate) mod example_doc;
pub(crate) mod helper;

pub(crate) use build::BuildArgs;
pub(crate) use example_doc::ExampleDocArgs;
