//! Human-readable progress lines written to the console.

use std::fmt;
use std::path::{Path, MAIN_SEPARATOR};

/// Why a file was left out of the bundle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    /// Extension not in the allow-set.
    Extension,
    /// File could not be opened for lack of permission.
    Permission,
    /// File could not be read for another reason, named by error kind.
    Error(String),
    /// Nothing was left after comment and import stripping.
    Empty,
    /// The file is the bundle output itself.
    Output,
}

/// One console progress or diagnostic line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Progress<'a> {
    /// A directory is about to be walked.
    Entering(&'a str),
    /// A directory was skipped by name.
    SkippingDir(&'a str),
    /// A file section was appended to the output.
    Processed(&'a str),
    /// A file was not bundled.
    Skipped(&'a str, SkipReason),
    /// A directory does not exist.
    DirNotFound(&'a Path),
    /// A directory could not be listed for lack of permission.
    DirPermissionDenied(&'a Path),
    /// A directory could not be listed for another reason.
    DirUnreadable(&'a Path, String),
    /// A file's section could not be appended to the output.
    AppendFailed(&'a str, &'a Path, String),
    /// The previous output file was deleted.
    RemovedExisting(&'a Path),
    /// The previous output file could not be deleted.
    RemoveFailed(&'a Path, String),
    /// Traversal is starting at the given absolute root.
    Starting(&'a Path),
    /// Traversal finished.
    Complete(&'a Path),
    /// The doubled final line terminator was trimmed.
    TrimmedTrailing(&'a Path, usize),
    /// The final trim could not be performed.
    CleanupFailed(&'a Path, String),
}

const RULE: &str = "------------------------------";

impl fmt::Display for Progress<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Entering(rel) => write!(f, "Entering: {rel}{MAIN_SEPARATOR}"),
            Self::SkippingDir(rel) => write!(f, "Skipping dir: {rel}{MAIN_SEPARATOR}"),
            Self::Processed(rel) => write!(f, "Processed: {rel}"),
            Self::Skipped(rel, reason) => match reason {
                SkipReason::Extension => write!(f, "Skipped (ext): {rel}"),
                SkipReason::Permission => write!(f, "Skipped (permission): {rel}"),
                SkipReason::Error(kind) => write!(f, "Skipped (error: {kind}): {rel}"),
                SkipReason::Empty => write!(f, "Skipped (empty/filtered): {rel}"),
                SkipReason::Output => write!(f, "Skipped (output): {rel}"),
            },
            Self::DirNotFound(dir) => write!(f, "Error: Directory not found: {}", dir.display()),
            Self::DirPermissionDenied(dir) => {
                write!(f, "Error: Permission denied for directory: {}", dir.display())
            }
            Self::DirUnreadable(dir, err) => {
                write!(f, "Error: Cannot list directory {}: {err}", dir.display())
            }
            Self::AppendFailed(rel, out, err) => {
                write!(f, "Error: Cannot write {rel} to {}: {err}", out.display())
            }
            Self::RemovedExisting(out) => write!(f, "Removed existing {}", out.display()),
            Self::RemoveFailed(out, err) => {
                write!(f, "Error removing existing {}: {err}", out.display())
            }
            Self::Starting(root) => write!(f, "\nStarting processing in: {}\n{RULE}", root.display()),
            Self::Complete(out) => {
                write!(f, "{RULE}\nProcessing complete. Output written to {}", out.display())
            }
            Self::TrimmedTrailing(out, len) => write!(
                f,
                "Removed final OS-specific newline (length {len}) from {}",
                out.display()
            ),
            Self::CleanupFailed(out, err) => {
                write!(f, "Error during final cleanup of {}: {err}", out.display())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn directory_lines_end_with_separator() {
        assert_eq!(Progress::Entering("src").to_string(), format!("Entering: src{MAIN_SEPARATOR}"));
        assert_eq!(
            Progress::SkippingDir(".git").to_string(),
            format!("Skipping dir: .git{MAIN_SEPARATOR}")
        );
    }

    #[test]
    fn skip_reasons_are_distinguished() {
        assert_eq!(Progress::Skipped("a.md", SkipReason::Extension).to_string(), "Skipped (ext): a.md");
        assert_eq!(
            Progress::Skipped("a.rs", SkipReason::Empty).to_string(),
            "Skipped (empty/filtered): a.rs"
        );
        assert_eq!(
            Progress::Skipped("a.rs", SkipReason::Error("InvalidData".into())).to_string(),
            "Skipped (error: InvalidData): a.rs"
        );
    }

    #[test]
    fn write_failure_names_the_output() {
        let line = Progress::AppendFailed("a.rs", Path::new("out.txt"), "disk full".into());
        assert_eq!(line.to_string(), "Error: Cannot write a.rs to out.txt: disk full");
    }

    #[test]
    fn banner_lines() {
        let root = Path::new("/work/project");
        assert_eq!(
            Progress::Starting(root).to_string(),
            "\nStarting processing in: /work/project\n------------------------------"
        );
        assert!(Progress::Complete(Path::new("output.txt"))
            .to_string()
            .ends_with("Processing complete. Output written to output.txt"));
    }
}
