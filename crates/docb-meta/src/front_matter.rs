//! Front matter parsing.
//!
//! Documents may start with a metadata block:
//!
//! ```text
//! ---
//! title: Getting Started
//! category: guides/intro
//! # comments are skipped
//! ---
//! ```
//!
//! The block is not YAML: every accepted line is a flat
//! `key: value` pair, and anything else inside the block is ignored.

/// Delimiter line that opens and closes the block.
const DELIMITER: &str = "---";

/// Metadata parsed from the top of a document.
///
/// Keys are lower-cased and trimmed, values are trimmed and unquoted.
/// Insertion order is preserved; a repeated key keeps its first position
/// and takes the last value.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FrontMatter {
    entries: Vec<(String, String)>,
}

impl FrontMatter {
    /// Parse the metadata block at the start of `content`.
    ///
    /// Returns an empty mapping if the first line is not `---`. An
    /// unterminated block is read to the end of the input.
    #[must_use]
    pub fn parse(content: &str) -> Self {
        let mut fm = Self::default();
        let mut lines = content.lines();

        match lines.next() {
            Some(first) if first.trim() == DELIMITER => {}
            _ => return fm,
        }

        for line in lines {
            let line = line.trim();
            if line == DELIMITER {
                break;
            }
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let Some((key, value)) = line.split_once(':') else {
                continue;
            };
            fm.insert(key.trim().to_lowercase(), unquote(value.trim()).to_owned());
        }

        fm
    }

    /// Get a value by lower-case key.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// The `title` value, if present and non-empty.
    #[must_use]
    pub fn title(&self) -> Option<&str> {
        self.get("title").filter(|t| !t.is_empty())
    }

    /// The `category` value, if present and not blank.
    #[must_use]
    pub fn category(&self) -> Option<&str> {
        self.get("category").filter(|c| !c.trim().is_empty())
    }

    /// Number of parsed entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True if no entries were parsed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn insert(&mut self, key: String, value: String) {
        if let Some(entry) = self.entries.iter_mut().find(|(k, _)| *k == key) {
            entry.1 = value;
        } else {
            self.entries.push((key, value));
        }
    }
}

/// Strip one layer of surrounding `'` / `"` characters.
fn unquote(value: &str) -> &str {
    let is_quote = |c: char| c == '"' || c == '\'';
    let value = value.strip_prefix(is_quote).unwrap_or(value);
    value.strip_suffix(is_quote).unwrap_or(value)
}
