//! docb CLI - prefixed markdown to VitePress documentation builder.
//!
//! Provides commands for:
//! - `build`: Collect documents, generate the sidebar and build the site
//! - `helper`: Describe the build workflow
//! - `example-doc`: Create an example prefixed document

mod commands;
mod error;
mod output;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::{BuildArgs, ExampleDocArgs, helper};
use output::Output;

/// docb - Documentation builder.
#[derive(Parser)]
#[command(name = "docb", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build the documentation site.
    Build(BuildArgs),
    /// Show the build workflow.
    Helper,
    /// Create an example prefixed markdown document.
    ExampleDoc(ExampleDocArgs),
}

fn main() {
    let cli = Cli::parse();
    let output = Output::new();

    let verbose = matches!(&cli.command, Commands::Build(args) if args.verbose);

    // --verbose enables INFO level, otherwise use RUST_LOG
    let filter = if verbose {
        EnvFilter::new("info")
    } else {
        EnvFilter::from_default_env()
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let result = match cli.command {
        Commands::Build(args) => args.execute(),
        Commands::Helper => {
            helper::execute();
            Ok(())
        }
        Commands::ExampleDoc(args) => args.execute(),
    };

    if let Err(err) = result {
        output.error(&format!("Error: {err}"));
        std::process::exit(1);
    }
}
