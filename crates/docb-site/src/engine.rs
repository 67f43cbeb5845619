//! External site generator.

use std::path::Path;
use std::process::{Command, ExitStatus};

use crate::environment::{Environment, PACKAGE_JSON};
use crate::error::BuildError;
use crate::staging::copy_file;

/// Package manifests copied into staging when present.
const PACKAGE_FILES: &[&str] = &[PACKAGE_JSON, "package-lock.json", "yarn.lock", "pnpm-lock.yaml"];

/// Static site generator driven from the staging directory.
pub trait Engine {
    /// Prepare the staging directory for building (dependencies, manifests).
    fn install(&self, env: &Environment) -> Result<(), BuildError>;

    /// Build the site into `env.dist_src`.
    fn build(&self, env: &Environment) -> Result<(), BuildError>;
}

/// VitePress through npm.
#[derive(Clone, Copy, Debug, Default)]
pub struct NpmEngine;

impl NpmEngine {
    /// Create the npm engine.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Engine for NpmEngine {
    fn install(&self, env: &Environment) -> Result<(), BuildError> {
        tracing::info!("Preparing Node.js dependencies");

        for name in PACKAGE_FILES {
            let src = env.doc_dir.join(name);
            if src.exists() {
                copy_file(&src, &env.staging_dir.join(name))?;
                tracing::debug!(file = *name, "Copied package file");
            }
        }

        if env.staging_dir.join("node_modules").exists() {
            tracing::info!("node_modules already present, skipping npm install");
            return Ok(());
        }

        tracing::info!("Running npm install");
        run_npm(&["install"], &env.staging_dir)
    }

    fn build(&self, env: &Environment) -> Result<(), BuildError> {
        tracing::info!("Running npm run docs:build");
        run_npm(&["run", "docs:build"], &env.staging_dir)
    }
}

/// Run npm with inherited stdio and require a zero exit status.
fn run_npm(args: &[&str], cwd: &Path) -> Result<(), BuildError> {
    let command = format!("npm {}", args.join(" "));
    let status = spawn_npm(args, cwd).map_err(|e| BuildError::Command {
        command: command.clone(),
        reason: e.to_string(),
    })?;
    if !status.success() {
        return Err(BuildError::Command {
            command,
            reason: status.to_string(),
        });
    }
    Ok(())
}

fn spawn_npm(args: &[&str], cwd: &Path) -> std::io::Result<ExitStatus> {
    #[cfg(target_os = "windows")]
    {
        Command::new("cmd")
            .args(["/C", "npm"])
            .args(args)
            .current_dir(cwd)
            .status()
    }
    #[cfg(not(target_os = "windows"))]
    {
        Command::new("npm").args(args).current_dir(cwd).status()
    }
}
