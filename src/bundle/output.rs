//! The aggregate output document: one fenced section per bundled file.

use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::context::ServiceContext;
use crate::report::Progress;

/// Line terminator written to the output file.
pub const LINE_ENDING: &str = if cfg!(windows) { "\r\n" } else { "\n" };

/// Renders one fenced section: path header, code, closing fence, blank line.
#[must_use]
pub fn render_section(relative_path: &str, code: &str) -> String {
    let nl = LINE_ENDING;
    let code = if nl == "\n" { code.to_string() } else { code.replace('\n', nl) };
    format!("```{relative_path}{nl}{code}{nl}```{nl}{nl}")
}

/// Append-only output file rebuilt on every run.
pub struct OutputDocument<'a> {
    ctx: &'a ServiceContext,
    path: PathBuf,
}

impl<'a> OutputDocument<'a> {
    /// Creates a handle on the output file at `path`.
    #[must_use]
    pub fn new(ctx: &'a ServiceContext, path: &Path) -> Self {
        Self { ctx, path: path.to_path_buf() }
    }

    /// Path of the output file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Deletes the output left by a previous run. Failure is reported but
    /// not fatal.
    pub fn reset(&self) {
        if !self.ctx.fs.exists(&self.path) {
            return;
        }
        match self.ctx.fs.remove_file(&self.path) {
            Ok(()) => self.ctx.console.report(&Progress::RemovedExisting(&self.path).to_string()),
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "could not remove previous output");
                self.ctx
                    .console
                    .report(&Progress::RemoveFailed(&self.path, e.to_string()).to_string());
            }
        }
    }

    /// Appends the section for one file, opening and closing the file.
    ///
    /// # Errors
    ///
    /// Returns the filesystem error if the append fails.
    pub fn append_section(
        &self,
        relative_path: &str,
        code: &str,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        self.ctx.fs.append(&self.path, &render_section(relative_path, code))
    }

    /// Turns a doubled final line terminator into a single one. Failure is
    /// reported but not fatal.
    pub fn trim_trailing_terminator(&self) {
        if !self.ctx.fs.exists(&self.path) {
            debug!(path = %self.path.display(), "no output written, nothing to trim");
            return;
        }
        match self.try_trim() {
            Ok(Some(removed)) => self
                .ctx
                .console
                .report(&Progress::TrimmedTrailing(&self.path, removed).to_string()),
            Ok(None) => {}
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "final cleanup failed");
                self.ctx
                    .console
                    .report(&Progress::CleanupFailed(&self.path, e.to_string()).to_string());
            }
        }
    }

    fn try_trim(&self) -> Result<Option<usize>, Box<dyn std::error::Error + Send + Sync>> {
        let doubled = LINE_ENDING.repeat(2);
        let doubled_len = doubled.len() as u64;
        let size = self.ctx.fs.file_len(&self.path)?;
        if size < doubled_len {
            return Ok(None);
        }
        if self.ctx.fs.read_tail(&self.path, doubled_len)? != doubled.as_bytes() {
            return Ok(None);
        }
        self.ctx.fs.set_len(&self.path, size - LINE_ENDING.len() as u64)?;
        Ok(Some(LINE_ENDING.len()))
    }
}
