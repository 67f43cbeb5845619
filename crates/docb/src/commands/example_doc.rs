//! `docb example-doc` command implementation.

use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use chrono::{Local, SecondsFormat};
use clap::Args;

use crate::error::CliError;
use crate::output::Output;

/// Arguments for the example-doc command.
#[derive(Args)]
pub(crate) struct ExampleDocArgs {
    /// Directory where the example markdown file is created.
    #[arg(long, default_value = ".")]
    doc_dir: PathBuf,

    /// Prefix applied to the generated file name.
    #[arg(long, default_value = "DOC_")]
    prefix: String,
}

impl ExampleDocArgs {
    /// Execute the example-doc command.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory is missing or the file already exists.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();
        let created_at = Local::now().to_rfc3339_opts(SecondsFormat::Secs, true);

        let path = create_example_doc(&self.doc_dir, &self.prefix, &created_at)?;

        output.success(&format!("Example markdown created at {}", path.display()));
        Ok(())
    }
}

/// Write `<prefix>this_is_example.md` into `dir` without overwriting.
fn create_example_doc(dir: &Path, prefix: &str, created_at: &str) -> Result<PathBuf, CliError> {
    let dir = if dir.as_os_str().is_empty() {
        Path::new(".")
    } else {
        dir
    };
    let dir = std::path::absolute(dir)
        .map_err(|e| CliError::ExampleDoc(format!("unable to resolve directory: {e}")))?;

    match fs::metadata(&dir) {
        Ok(meta) if !meta.is_dir() => {
            return Err(CliError::ExampleDoc(format!(
                "target path is not a directory: {}",
                dir.display()
            )));
        }
        Ok(_) => {}
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            return Err(CliError::ExampleDoc(format!(
                "target directory not found: {}",
                dir.display()
            )));
        }
        Err(e) => {
            return Err(CliError::ExampleDoc(format!(
                "failed to access target directory: {e}"
            )));
        }
    }

    let path = dir.join(format!("{prefix}this_is_example.md"));
    let mut file = OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(&path)
        .map_err(|e| match e.kind() {
            io::ErrorKind::AlreadyExists => {
                CliError::ExampleDoc(format!("example file already exists: {}", path.display()))
            }
            _ => CliError::ExampleDoc(format!(
                "failed to create example file {}: {e}",
                path.display()
            )),
        })?;
    file.write_all(example_content(created_at).as_bytes())
        .map_err(|e| {
            CliError::ExampleDoc(format!(
                "failed to write example file {}: {e}",
                path.display()
            ))
        })?;

    Ok(path)
}

fn example_content(created_at: &str) -> String {
    format!(
        "---
title: This Is Example
category: guides/example
description: Short note describing the purpose of this document.
last_updated: {created_at}
---

# This Is Example

The front matter at the top defines metadata used by docb:

- \"title\" is shown in navigation menus and as the page heading.
- \"category\" determines the folder hierarchy inside the generated site.
- \"description\" is optional but helps with search and previews.
- \"last_updated\" can be any string; ISO timestamps work well.

## Writing Content

Start the body with a level-one heading that repeats the title. Continue with
guides, notes, code snippets, and any additional sections required by your
documentation.

## Tips

- Place screenshots and assets next to the markdown file when possible.
- Keep the filename descriptive: docb converts underscores to hyphens for
  links.
- You can add more keys to the front matter if the theme supports them.
"
    )
}

#[cfg(test)]
mod tests {
    use docb_meta::{FrontMatter, build_slug};
    use pretty_assertions::assert_eq;

    use super::*;

    const CREATED_AT: &str = "2024-05-01T12:00:00Z";

    #[test]
    fn test_create_example_doc() {
        let temp_dir = tempfile::tempdir().unwrap();

        let path = create_example_doc(temp_dir.path(), "DOC_", CREATED_AT).unwrap();

        assert_eq!(path.file_name().unwrap(), "DOC_this_is_example.md");
        let content = fs::read_to_string(&path).unwrap();
        let fm = FrontMatter::parse(&content);
        assert_eq!(fm.title(), Some("This Is Example"));
        assert_eq!(fm.category(), Some("guides/example"));
        assert_eq!(fm.get("last_updated"), Some(CREATED_AT));
        assert_eq!(build_slug("DOC_this_is_example.md", "DOC_"), "this-is-example");
    }

    #[test]
    fn test_create_example_doc_custom_prefix() {
        let temp_dir = tempfile::tempdir().unwrap();

        let path = create_example_doc(temp_dir.path(), "KB_", CREATED_AT).unwrap();

        assert_eq!(path.file_name().unwrap(), "KB_this_is_example.md");
    }

    #[test]
    fn test_create_example_doc_refuses_overwrite() {
        let temp_dir = tempfile::tempdir().unwrap();
        let existing = temp_dir.path().join("DOC_this_is_example.md");
        fs::write(&existing, "keep me").unwrap();

        let err = create_example_doc(temp_dir.path(), "DOC_", CREATED_AT).unwrap_err();

        assert!(err.to_string().contains("example file already exists"));
        assert_eq!(fs::read_to_string(existing).unwrap(), "keep me");
    }

    #[test]
    fn test_create_example_doc_missing_dir() {
        let temp_dir = tempfile::tempdir().unwrap();

        let err = create_example_doc(&temp_dir.path().join("missing"), "DOC_", CREATED_AT)
            .unwrap_err();

        assert!(err.to_string().contains("target directory not found"));
    }

    #[test]
    fn test_create_example_doc_not_a_directory() {
        let temp_dir = tempfile::tempdir().unwrap();
        let file = temp_dir.path().join("file.md");
        fs::write(&file, "").unwrap();

        let err = create_example_doc(&file, "DOC_", CREATED_AT).unwrap_err();

        assert!(err.to_string().contains("target path is not a directory"));
    }
}
