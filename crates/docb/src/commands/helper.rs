//! `docb helper` command implementation.

use crate::output::Output;

const WORKFLOW: &str = "\
This CLI turns markdown files that share a filename prefix into a
ready-to-ship VitePress site. The workflow is:
  1. Scan the search path for markdown files starting with the prefix
     (default DOC_), skipping node_modules, vendor and VCS directories.
  2. Copy matching files into a clean staging directory inside the docs
     workspace, deriving slugs, titles and categories from front matter.
  3. Merge markdown that already lives in the documentation workspace
     (for example curated guides) so hand-written content is preserved.
  4. Compose the sidebar from the collected metadata and substitute it for
     the // SIDEBAR_ITEMS placeholder in .vitepress/base.config.js.
  5. Install Node.js dependencies in the staging directory when needed and
     run 'npm run docs:build' (currently only VitePress is supported).
  6. Copy the generated .vitepress/dist output back into the docs workspace.

Typical usage:
  docb build --search ../ --doc-dir . --prefix DOC_ --engine vitepress

Settings can also live in a docb.toml next to the docs workspace:
  [source]
  prefix = \"DOC_\"
  search_path = \"../\"

The build stops with a descriptive error if expected files such as
.vitepress/base.config.js or package.json cannot be found.";

/// Print the workflow description to stdout.
pub(crate) fn execute() {
    let output = Output::stdout();
    output.highlight("docb helper");
    output.info("");
    output.info(WORKFLOW);
}
