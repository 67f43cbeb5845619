//! Publishing the built site back into the workspace.

use std::fs;
use std::io;

use crate::environment::Environment;
use crate::error::BuildError;
use crate::staging::copy_directory;

/// Replace `env.dist_dst` with a copy of `env.dist_src`.
///
/// Returns the number of files published.
pub fn publish_dist(env: &Environment) -> Result<usize, BuildError> {
    tracing::info!(dir = %env.dist_dst.display(), "Publishing site output");

    if !env.dist_src.is_dir() {
        return Err(BuildError::missing("expected directory", &env.dist_src));
    }

    match fs::remove_dir_all(&env.dist_dst) {
        Ok(()) => {}
        Err(e) if e.kind() == io::ErrorKind::NotFound => {}
        Err(e) => return Err(BuildError::io("clean", &env.dist_dst, e)),
    }

    let count = copy_directory(&env.dist_src, &env.dist_dst)?;
    tracing::debug!(files = count, "Published site output");
    Ok(count)
}
