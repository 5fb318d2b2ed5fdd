//! Shallow, regex-based extraction of function and class definitions.
//!
//! This is a lexical approximation for C-family brace syntax (JavaScript
//! style), not a parser. Every pattern matches a single level of braces: the
//! body ends at the first `}`, so a nested block truncates the match. The same
//! patterns are applied whatever the file extension is.

use crate::corpus::{path_identifier, read_source};
use lazy_static::lazy_static;
use regex::Regex;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

lazy_static! {
    /// Scanned in this order; matches of each pattern are appended after the
    /// previous pattern's matches.
    static ref PATTERNS: [Regex; 3] = [
        // function name(args) { body }
        Regex::new(r"function\s+\w+\s*\([^)]*\)\s*\{[^}]*\}").expect("valid regex"),
        // name = (args) => { body }
        Regex::new(r"\w+\s*=\s*\([^)]*\)\s*=>\s*\{[^}]*\}").expect("valid regex"),
        // class Name { body }
        Regex::new(r"class\s+\w+\s*\{[^}]*\}").expect("valid regex"),
    ];
}

/// A function or class span found in a file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Definition {
    pub owner_file: PathBuf,
    /// 0-based position among the definitions found in `owner_file`.
    pub ordinal: usize,
    pub text: String,
}

impl Definition {
    /// Document identifier: `<owner_file> - item <ordinal>`.
    pub fn identifier(&self) -> String {
        format!("{} - item {}", path_identifier(&self.owner_file), self.ordinal)
    }
}

/// Raw definition texts found in `text`, in pattern order.
pub fn definitions_in(text: &str) -> Vec<&str> {
    PATTERNS
        .iter()
        .flat_map(|re| re.find_iter(text).map(|m| m.as_str()))
        .collect()
}

/// Definitions per file. Files that cannot be read, or that contain no
/// definitions, are absent from the result.
pub fn extract_definitions<P: AsRef<Path>>(paths: &[P]) -> HashMap<PathBuf, Vec<Definition>> {
    let mut out = HashMap::new();
    for path in paths {
        let path = path.as_ref();
        let content = match read_source(path) {
            Ok(content) => content,
            Err(err) => {
                tracing::warn!(error = %err, "definition extraction skipped");
                continue;
            }
        };
        let definitions: Vec<Definition> = definitions_in(&content)
            .into_iter()
            .enumerate()
            .map(|(ordinal, text)| Definition {
                owner_file: path.to_path_buf(),
                ordinal,
                text: text.to_string(),
            })
            .collect();
        if definitions.is_empty() {
            continue;
        }
        tracing::debug!(path = %path.display(), count = definitions.len(), "definitions extracted");
        out.insert(path.to_path_buf(), definitions);
    }
    out
}
