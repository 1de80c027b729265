//! Port traits defining external boundaries.
//!
//! The bundler touches the outside world in exactly two places: the
//! filesystem it walks and writes to, and the console it prompts and
//! reports on. Implementations live in `src/adapters/`.

pub mod console;
pub mod filesystem;

pub use console::Console;
pub use filesystem::{DirEntry, EntryKind, FileSystem};

/// Returns the I/O error kind behind a boxed port error, if there is one.
#[must_use]
pub fn io_error_kind(
    err: &(dyn std::error::Error + Send + Sync + 'static),
) -> Option<std::io::ErrorKind> {
    err.downcast_ref::<std::io::Error>().map(std::io::Error::kind)
}
