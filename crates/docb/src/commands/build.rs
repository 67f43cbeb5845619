//! `docb build` command implementation.

use std::path::PathBuf;

use clap::Args;
use docb_config::{CliSettings, Config};
use docb_site::{BuildConfig, BuildSummary, NpmEngine, SiteBuilder};

use crate::error::CliError;
use crate::output::Output;

/// Arguments for the build command.
#[derive(Args)]
pub(crate) struct BuildArgs {
    /// Path to configuration file (default: auto-discover docb.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// File name prefix marking documentation sources [default: DOC_].
    #[arg(long)]
    prefix: Option<String>,

    /// Root path where prefixed markdown files are discovered.
    #[arg(long)]
    search: Option<PathBuf>,

    /// Documentation workspace containing the .vitepress setup [default: .].
    #[arg(long)]
    doc_dir: Option<PathBuf>,

    /// Name of the staging directory inside the workspace [default: temp].
    #[arg(long)]
    temp_dir: Option<String>,

    /// Documentation engine (currently only "vitepress").
    #[arg(long)]
    engine: Option<String>,

    /// Stop after generating the VitePress config (no npm, no publish).
    #[arg(long)]
    skip_build: bool,

    /// Enable verbose output.
    #[arg(short, long)]
    pub verbose: bool,
}

impl BuildArgs {
    /// Execute the build command.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration is invalid or any build stage fails.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();

        let cli_settings = CliSettings {
            prefix: self.prefix,
            search_path: self.search,
            doc_dir: self.doc_dir,
            staging_dir: self.temp_dir,
            engine: self.engine,
        };
        let config = Config::load(self.config.as_deref(), Some(&cli_settings))?;
        if let Some(path) = &config.config_path {
            tracing::info!(path = %path.display(), "Loaded configuration");
        }

        let mut build_config = BuildConfig::from_config(&config)?;
        build_config.skip_engine = self.skip_build;

        output.info(&format!(
            "Documentation directory: {}",
            build_config.doc_dir.display()
        ));
        output.info(&format!(
            "Search path: {}",
            build_config.search_path.display()
        ));

        let summary = SiteBuilder::new(build_config, Box::new(NpmEngine::new())).run()?;
        print_summary(&output, &summary);
        Ok(())
    }
}

fn print_summary(output: &Output, summary: &BuildSummary) {
    output.success("Build complete.");
    output.info(&format!(
        "  Found {} prefixed markdown files",
        summary.source_count
    ));
    output.info(&format!(
        "  Merged {} existing documentation files",
        summary.workspace_count
    ));
    output.info(&format!("  Sidebar entries: {}", summary.page_count));
    match &summary.output_dir {
        Some(dir) => output.info(&format!("  Output directory: {}", dir.display())),
        None => output.info(&format!(
            "  Generated config: {}",
            summary.config_path.display()
        )),
    }
}
