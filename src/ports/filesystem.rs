//! Filesystem port for directory walking and output writing.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize, Serializer};

/// What a directory entry resolves to, following symlinks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntryKind {
    /// A regular file.
    File,
    /// A directory.
    Dir,
    /// Anything else, including dangling symlinks.
    Other,
}

/// One immediate child of a listed directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DirEntry {
    /// File name of the entry, with non UTF-8 bytes replaced.
    pub name: String,
    /// Full path of the entry (the listed directory joined with the raw
    /// file name). `name` may be lossy; this path never is.
    #[serde(serialize_with = "serialize_path_lossy")]
    pub path: PathBuf,
    /// Resolved kind of the entry.
    pub kind: EntryKind,
}

/// Writes a path as a string, replacing bytes that are not UTF-8.
///
/// Recorded paths only need to identify a call, so lossy text is enough.
pub(crate) fn serialize_path_lossy<P, S>(path: &P, serializer: S) -> Result<S::Ok, S::Error>
where
    P: AsRef<Path>,
    S: Serializer,
{
    serializer.serialize_str(&path.as_ref().to_string_lossy())
}

/// Provides the filesystem operations a bundling run needs.
///
/// Errors from live implementations are `std::io::Error` values so callers
/// can distinguish missing paths from permission failures.
pub trait FileSystem: Send + Sync {
    /// Returns `true` if the path exists and is a directory.
    fn is_dir(&self, path: &Path) -> bool;

    /// Returns `true` if the path exists.
    fn exists(&self, path: &Path) -> bool;

    /// Lists the immediate entries of a directory, sorted by `name`.
    ///
    /// Every implementation returns the same order for the same listing so
    /// walks are reproducible across live, recorded and replayed runs.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory is missing or cannot be read.
    fn list_dir(
        &self,
        path: &Path,
    ) -> Result<Vec<DirEntry>, Box<dyn std::error::Error + Send + Sync>>;

    /// Reads a whole file as raw bytes.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be opened or read.
    fn read_bytes(&self, path: &Path) -> Result<Vec<u8>, Box<dyn std::error::Error + Send + Sync>>;

    /// Appends text to a file, creating it if needed. The file is closed
    /// again before returning.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be opened or written.
    fn append(
        &self,
        path: &Path,
        contents: &str,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>>;

    /// Deletes a file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be removed.
    fn remove_file(&self, path: &Path) -> Result<(), Box<dyn std::error::Error + Send + Sync>>;

    /// Returns the last `len` bytes of a file, or the whole file if shorter.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be opened or read.
    fn read_tail(
        &self,
        path: &Path,
        len: u64,
    ) -> Result<Vec<u8>, Box<dyn std::error::Error + Send + Sync>>;

    /// Truncates a file to `len` bytes.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be opened or resized.
    fn set_len(&self, path: &Path, len: u64) -> Result<(), Box<dyn std::error::Error + Send + Sync>>;

    /// Returns the size of a file in bytes.
    ///
    /// # Errors
    ///
    /// Returns an error if the file metadata cannot be read.
    fn file_len(&self, path: &Path) -> Result<u64, Box<dyn std::error::Error + Send + Sync>>;
}
