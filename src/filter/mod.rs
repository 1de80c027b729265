//! Text cleaning applied to every bundled file.
//!
//! [`clean_source`] is the whole per-file pipeline: permissive decode,
//! comment stripping, import and blank line removal, join and trim.

pub mod comments;
pub mod imports;

use std::borrow::Cow;

pub use comments::{filter_comments, CommentState};
pub use imports::{is_import_line, retain_code_lines, DEFAULT_IMPORT_PREFIXES};

/// Decodes raw file bytes, replacing invalid UTF-8 and normalizing line
/// terminators to `\n`.
#[must_use]
pub fn decode_text(bytes: &[u8]) -> String {
    let text = String::from_utf8_lossy(bytes);
    if text.contains('\r') {
        text.replace("\r\n", "\n").replace('\r', "\n")
    } else {
        text.into_owned()
    }
}

/// Produces the bundled form of a file's contents.
///
/// An empty result means nothing worth bundling was left.
#[must_use]
pub fn clean_source<S: AsRef<str>>(bytes: &[u8], import_prefixes: &[S]) -> String {
    let text = decode_text(bytes);
    let code_lines: Vec<Cow<'_, str>> = filter_comments(text.split_inclusive('\n'));
    let kept = retain_code_lines(code_lines, import_prefixes);
    kept.concat().trim().to_string()
}
