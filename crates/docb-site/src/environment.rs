//! Resolved filesystem layout of a build.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::error::BuildError;

/// Site generator directory inside the documentation workspace.
pub const VITEPRESS_DIR: &str = ".vitepress";

/// Config template the sidebar is substituted into.
pub const BASE_CONFIG: &str = "base.config.js";

/// Generated config name.
pub const OUTPUT_CONFIG: &str = "config.js";

/// Node package manifest.
pub const PACKAGE_JSON: &str = "package.json";

/// Site generator output directory.
const DIST_DIR: &str = "dist";

/// Absolute paths used by one build.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Environment {
    /// Documentation workspace.
    pub doc_dir: PathBuf,
    /// Root of the source pass.
    pub search_root: PathBuf,
    /// Staging directory (`doc_dir/<staging>`).
    pub staging_dir: PathBuf,
    /// `doc_dir/.vitepress/base.config.js`.
    pub base_config: PathBuf,
    /// `doc_dir/.vitepress/config.js`.
    pub output_config: PathBuf,
    /// `staging_dir/.vitepress/dist`.
    pub dist_src: PathBuf,
    /// `doc_dir/.vitepress/dist`.
    pub dist_dst: PathBuf,
}

impl Environment {
    /// Resolve and check the build layout.
    ///
    /// Both directories are canonicalized, so relative inputs are taken from
    /// the current directory.
    ///
    /// # Errors
    ///
    /// Returns [`BuildError::MissingFile`] if the documentation directory, the
    /// search root, the config template or `package.json` is absent.
    pub fn resolve(
        doc_dir: &Path,
        search_root: &Path,
        staging_name: &str,
    ) -> Result<Self, BuildError> {
        let doc_dir = canonical_dir(doc_dir, "documentation directory")?;
        let search_root = canonical_dir(search_root, "search path")?;

        let staging_dir = doc_dir.join(staging_name);
        let vitepress = doc_dir.join(VITEPRESS_DIR);
        let env = Self {
            base_config: vitepress.join(BASE_CONFIG),
            output_config: vitepress.join(OUTPUT_CONFIG),
            dist_src: staging_dir.join(VITEPRESS_DIR).join(DIST_DIR),
            dist_dst: vitepress.join(DIST_DIR),
            staging_dir,
            search_root,
            doc_dir,
        };

        require_file(&env.base_config)?;
        require_file(&env.doc_dir.join(PACKAGE_JSON))?;

        tracing::debug!(
            doc_dir = %env.doc_dir.display(),
            search_root = %env.search_root.display(),
            staging_dir = %env.staging_dir.display(),
            "Resolved build environment"
        );
        Ok(env)
    }

    /// Generated config inside the staging tree.
    #[must_use]
    pub fn staging_config(&self) -> PathBuf {
        self.staging_dir.join(VITEPRESS_DIR).join(OUTPUT_CONFIG)
    }
}

fn canonical_dir(path: &Path, what: &'static str) -> Result<PathBuf, BuildError> {
    fs::canonicalize(path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => BuildError::missing(what, path),
        _ => BuildError::io("access", path, e),
    })
}

fn require_file(path: &Path) -> Result<(), BuildError> {
    match fs::metadata(path) {
        Ok(_) => Ok(()),
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            Err(BuildError::missing("expected file", path))
        }
        Err(e) => Err(BuildError::io("access", path, e)),
    }
}
