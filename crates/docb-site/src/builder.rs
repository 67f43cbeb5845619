//! One documentation build, from staging to published site.

use std::fs;
use std::path::{Path, PathBuf};

use docb_collect::{CollectConfig, Collector, write_manifest};
use docb_config::Config;
use docb_sidebar::{apply_sidebar, build_sections};

use crate::engine::Engine;
use crate::environment::Environment;
use crate::error::BuildError;
use crate::publish::publish_dist;
use crate::staging::prepare_staging;

/// Inputs of a build, taken from validated configuration.
#[derive(Clone, Debug)]
pub struct BuildConfig {
    /// Filename prefix of source documents.
    pub prefix: String,
    /// Root of the source pass.
    pub search_path: PathBuf,
    /// Documentation workspace.
    pub doc_dir: PathBuf,
    /// Staging directory name inside `doc_dir`.
    pub staging_name: String,
    /// Stop after generating the site config (no engine, no publish).
    pub skip_engine: bool,
}

impl BuildConfig {
    /// Build inputs from a loaded configuration.
    ///
    /// # Errors
    ///
    /// Returns [`docb_config::ConfigError`] if no search path is configured.
    pub fn from_config(config: &Config) -> Result<Self, docb_config::ConfigError> {
        Ok(Self {
            prefix: config.source_resolved.prefix.clone(),
            search_path: config.require_search_path()?.to_path_buf(),
            doc_dir: config.docs_resolved.dir.clone(),
            staging_name: config.docs_resolved.staging_dir.clone(),
            skip_engine: false,
        })
    }
}

/// Outcome of a successful build.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BuildSummary {
    /// Prefixed files read by the source pass.
    pub source_count: usize,
    /// Workspace files read by the workspace pass.
    pub workspace_count: usize,
    /// Pages in the sidebar after deduplication.
    pub page_count: usize,
    /// Written manifest.
    pub manifest_path: PathBuf,
    /// Generated config in the documentation workspace.
    pub config_path: PathBuf,
    /// Published site directory, `None` when the engine was skipped.
    pub output_dir: Option<PathBuf>,
}

/// Runs the documentation pipeline against one workspace.
pub struct SiteBuilder {
    config: BuildConfig,
    engine: Box<dyn Engine>,
}

impl SiteBuilder {
    /// Create a builder that drives `engine`.
    #[must_use]
    pub fn new(config: BuildConfig, engine: Box<dyn Engine>) -> Self {
        Self { config, engine }
    }

    /// Run the build.
    ///
    /// # Errors
    ///
    /// Returns [`BuildError`] from the first failing stage. A run that finds
    /// no pages fails with [`BuildError::NoSources`] before anything is
    /// generated.
    pub fn run(&self) -> Result<BuildSummary, BuildError> {
        let env = Environment::resolve(
            &self.config.doc_dir,
            &self.config.search_path,
            &self.config.staging_name,
        )?;
        prepare_staging(&env.staging_dir)?;

        let collector = Collector::new(CollectConfig {
            prefix: self.config.prefix.clone(),
            search_root: env.search_root.clone(),
            doc_dir: env.doc_dir.clone(),
            staging_name: self.config.staging_name.clone(),
        });
        let collection = collector.collect()?;
        if collection.records.is_empty() {
            return Err(BuildError::NoSources);
        }

        let manifest_path = write_manifest(&env.staging_dir, &collection.records)?;
        Self::generate_config(&env, &collection.records)?;

        let output_dir = if self.config.skip_engine {
            tracing::info!("Skipping site engine");
            None
        } else {
            self.engine.install(&env)?;
            self.engine.build(&env)?;
            publish_dist(&env)?;
            Some(env.dist_dst.clone())
        };

        Ok(BuildSummary {
            source_count: collection.source_count,
            workspace_count: collection.workspace_count,
            page_count: collection.records.len(),
            manifest_path,
            config_path: env.output_config,
            output_dir,
        })
    }

    /// Render the sidebar into the config template and write both copies.
    fn generate_config(
        env: &Environment,
        records: &[docb_collect::PageRecord],
    ) -> Result<(), BuildError> {
        tracing::info!("Generating sidebar configuration");

        let sections = build_sections(records);
        let template = fs::read_to_string(&env.base_config)
            .map_err(|e| BuildError::io("read", &env.base_config, e))?;
        let output =
            apply_sidebar(&template, &sections).map_err(|source| BuildError::Template {
                path: env.base_config.clone(),
                source,
            })?;

        let staging_config = env.staging_config();
        write_config(&staging_config, &output)?;
        write_config(&env.output_config, &output)?;

        tracing::debug!(sections = sections.len(), "Wrote site config");
        Ok(())
    }
}

fn write_config(path: &Path, content: &str) -> Result<(), BuildError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| BuildError::io("create directory", parent, e))?;
    }
    fs::write(path, content).map_err(|e| BuildError::io("write", path, e))
}
