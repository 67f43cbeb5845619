//! Staging directory lifecycle.

use std::fs;
use std::io;
use std::path::Path;

use crate::error::BuildError;

/// Keeps the staging tree out of version control.
pub const GITIGNORE_STUB: &str = "*\n!.gitignore\n";

/// Wipe and recreate the staging directory, then write the `.gitignore` stub.
///
/// A missing staging directory is not an error.
pub fn prepare_staging(staging_dir: &Path) -> Result<(), BuildError> {
    tracing::info!(dir = %staging_dir.display(), "Cleaning staging directory");

    match fs::remove_dir_all(staging_dir) {
        Ok(()) => {}
        Err(e) if e.kind() == io::ErrorKind::NotFound => {}
        Err(e) => return Err(BuildError::io("clean", staging_dir, e)),
    }
    fs::create_dir_all(staging_dir)
        .map_err(|e| BuildError::io("create directory", staging_dir, e))?;

    let gitignore = staging_dir.join(".gitignore");
    fs::write(&gitignore, GITIGNORE_STUB).map_err(|e| BuildError::io("write", &gitignore, e))
}

/// Copy a single file, creating parent directories of `dst`.
pub(crate) fn copy_file(src: &Path, dst: &Path) -> Result<(), BuildError> {
    if let Some(parent) = dst.parent() {
        fs::create_dir_all(parent).map_err(|e| BuildError::io("create directory", parent, e))?;
    }
    fs::copy(src, dst).map_err(|e| BuildError::io("copy", src, e))?;
    Ok(())
}

/// Recursively copy `src` into `dst`. Returns the number of files copied.
///
/// Symlinks are not traversed: a link to a file is copied as that file, a
/// link to a directory is skipped.
pub(crate) fn copy_directory(src: &Path, dst: &Path) -> Result<usize, BuildError> {
    fs::create_dir_all(dst).map_err(|e| BuildError::io("create directory", dst, e))?;

    let mut entries: Vec<fs::DirEntry> = fs::read_dir(src)
        .map_err(|e| BuildError::io("read directory", src, e))?
        .collect::<Result<_, _>>()
        .map_err(|e| BuildError::io("read directory", src, e))?;
    entries.sort_by_key(fs::DirEntry::file_name);

    let mut count = 0;
    for entry in entries {
        let path = entry.path();
        let target = dst.join(entry.file_name());
        let file_type = entry
            .file_type()
            .map_err(|e| BuildError::io("inspect", &path, e))?;

        if file_type.is_dir() {
            count += copy_directory(&path, &target)?;
        } else if file_type.is_symlink() && path.is_dir() {
            tracing::warn!(path = %path.display(), "Skipping symlinked directory");
        } else {
            copy_file(&path, &target)?;
            count += 1;
        }
    }
    Ok(count)
}
