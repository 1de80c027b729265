//! Extension allow-set parsing and matching.

use std::collections::BTreeSet;

/// Set of lowercased, dot-prefixed extensions a run is restricted to.
///
/// An empty set matches every file, including files without an extension.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AllowSet {
    extensions: BTreeSet<String>,
}

impl AllowSet {
    /// Parses a user reply such as `py java`, `.py,.java` or `PY, Java`.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        let extensions = raw
            .replace(',', " ")
            .split_whitespace()
            .map(|ext| {
                if ext.starts_with('.') {
                    ext.to_lowercase()
                } else {
                    format!(".{ext}").to_lowercase()
                }
            })
            .collect();
        Self { extensions }
    }

    /// Returns `true` when no restriction applies.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.extensions.is_empty()
    }

    /// Returns `true` if a file with this extension should be bundled.
    #[must_use]
    pub fn allows(&self, extension: &str) -> bool {
        self.is_empty() || self.extensions.contains(extension)
    }

    /// Iterates over the allowed extensions in sorted order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.extensions.iter().map(String::as_str)
    }
}

/// Returns the lowercased extension of a file name, including its dot.
///
/// Leading dots belong to the name, so `.bashrc` has no extension, while a
/// trailing dot is an extension of its own (`name.` gives `.`).
#[must_use]
pub fn extension_of(file_name: &str) -> String {
    let stem_start = file_name.len() - file_name.trim_start_matches('.').len();
    file_name[stem_start..]
        .rfind('.')
        .map(|dot| file_name[stem_start + dot..].to_lowercase())
        .unwrap_or_default()
}
