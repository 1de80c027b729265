//! Directory bundling: which files go in, and how they are written out.

pub mod extensions;
pub mod output;
pub mod traverse;

use std::collections::BTreeSet;
use std::path::{Component, Path, PathBuf};

pub use extensions::{extension_of, AllowSet};
pub use output::{render_section, OutputDocument, LINE_ENDING};
pub use traverse::{traverse, TraversalStats};

use crate::config::BundleConfig;

/// Immutable settings for one traversal.
#[derive(Debug, Clone)]
pub struct TraversalState {
    /// Absolute root directory.
    pub root: PathBuf,
    /// Extensions to include; empty includes everything.
    pub allowed: AllowSet,
    /// Directory names that are never entered.
    pub skip_dirs: BTreeSet<String>,
    /// Prefixes of lines dropped as imports.
    pub import_prefixes: Vec<String>,
    /// Absolute path of the output file, never bundled itself.
    pub output: Option<PathBuf>,
}

impl TraversalState {
    /// Builds the state for walking `root` with the given config.
    ///
    /// # Errors
    ///
    /// Returns an error if `root` cannot be made absolute.
    pub fn new(root: &Path, allowed: AllowSet, config: &BundleConfig) -> std::io::Result<Self> {
        Ok(Self {
            root: absolute_normalized(root)?,
            allowed,
            skip_dirs: config.skip_dirs.iter().cloned().collect(),
            import_prefixes: config.import_prefixes.clone(),
            output: absolute_normalized(&config.output_file).ok(),
        })
    }

    /// Path of `path` relative to the root, without a leading separator.
    #[must_use]
    pub fn relative_path(&self, path: &Path) -> String {
        path.strip_prefix(&self.root).unwrap_or(path).display().to_string()
    }

    /// Builds the per-file record for a file under the root.
    #[must_use]
    pub fn file_record(&self, path: &Path, name: &str) -> FileRecord {
        FileRecord {
            path: path.to_path_buf(),
            relative: self.relative_path(path),
            extension: extension_of(name),
        }
    }
}

/// Makes `path` absolute and folds `.` and `..` components without
/// touching the filesystem, so symlinks are not resolved.
///
/// # Errors
///
/// Returns an error if the working directory cannot be read.
pub fn absolute_normalized(path: &Path) -> std::io::Result<PathBuf> {
    let absolute = std::path::absolute(path)?;
    let mut normalized = PathBuf::new();
    for component in absolute.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                normalized.pop();
            }
            other => normalized.push(other),
        }
    }
    Ok(normalized)
}

/// A file being considered for the bundle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileRecord {
    /// Absolute path.
    pub path: PathBuf,
    /// Path relative to the traversal root.
    pub relative: String,
    /// Lowercased extension including its dot, or empty.
    pub extension: String,
}
