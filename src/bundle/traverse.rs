//! Depth-first directory walk feeding files into the output document.
//!
//! Each directory is visited in listing order and fully walked before its
//! next sibling. Failures stay local: an unlistable directory or unreadable
//! file is reported and the walk continues.

use std::io::ErrorKind;
use std::path::Path;

use tracing::{debug, info, warn};

use super::output::OutputDocument;
use super::{FileRecord, TraversalState};
use crate::context::ServiceContext;
use crate::filter::clean_source;
use crate::ports::filesystem::{DirEntry, EntryKind};
use crate::ports::io_error_kind;
use crate::report::{Progress, SkipReason};

/// Counts collected over one traversal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TraversalStats {
    /// Directories walked, the root included.
    pub dirs_entered: usize,
    /// Directories skipped by name.
    pub dirs_skipped: usize,
    /// Files written to the output.
    pub files_processed: usize,
    /// Files left out for any reason.
    pub files_skipped: usize,
    /// Directories or files that could not be read, plus failed appends.
    pub errors: usize,
}

/// Walks `state.root` and appends every accepted file to `output`.
pub fn traverse(
    ctx: &ServiceContext,
    state: &TraversalState,
    output: &OutputDocument<'_>,
) -> TraversalStats {
    let mut walker = Walker { ctx, state, output, stats: TraversalStats::default() };
    walker.run();
    info!(
        processed = walker.stats.files_processed,
        skipped = walker.stats.files_skipped,
        dirs = walker.stats.dirs_entered,
        errors = walker.stats.errors,
        "traversal finished"
    );
    walker.stats
}

struct Walker<'a> {
    ctx: &'a ServiceContext,
    state: &'a TraversalState,
    output: &'a OutputDocument<'a>,
    stats: TraversalStats,
}

impl Walker<'_> {
    fn report(&self, progress: &Progress<'_>) {
        self.ctx.console.report(&progress.to_string());
    }

    fn run(&mut self) {
        let state = self.state;
        let mut stack = Vec::new();
        if let Some(entries) = self.list(&state.root) {
            stack.push(entries.into_iter());
        }

        while let Some(frame) = stack.last_mut() {
            let Some(entry) = frame.next() else {
                stack.pop();
                continue;
            };
            match entry.kind {
                EntryKind::File => self.visit_file(&entry),
                EntryKind::Dir => {
                    if let Some(children) = self.enter_dir(&entry) {
                        stack.push(children.into_iter());
                    }
                }
                EntryKind::Other => {
                    debug!(path = %entry.path.display(), "ignoring entry that is neither file nor directory");
                }
            }
        }
    }

    fn list(&mut self, dir: &Path) -> Option<Vec<DirEntry>> {
        match self.ctx.fs.list_dir(dir) {
            Ok(entries) => {
                self.stats.dirs_entered += 1;
                Some(entries)
            }
            Err(e) => {
                self.stats.errors += 1;
                warn!(dir = %dir.display(), error = %e, "cannot list directory");
                match io_error_kind(e.as_ref()) {
                    Some(ErrorKind::NotFound) => self.report(&Progress::DirNotFound(dir)),
                    Some(ErrorKind::PermissionDenied) => {
                        self.report(&Progress::DirPermissionDenied(dir));
                    }
                    _ => self.report(&Progress::DirUnreadable(dir, e.to_string())),
                }
                None
            }
        }
    }

    fn enter_dir(&mut self, entry: &DirEntry) -> Option<Vec<DirEntry>> {
        let relative = self.state.relative_path(&entry.path);
        if self.state.skip_dirs.contains(&entry.name) {
            self.stats.dirs_skipped += 1;
            self.report(&Progress::SkippingDir(&relative));
            return None;
        }
        self.report(&Progress::Entering(&relative));
        self.list(&entry.path)
    }

    fn skip(&mut self, record: &FileRecord, reason: SkipReason) {
        debug!(file = %record.relative, ?reason, "file skipped");
        self.stats.files_skipped += 1;
        self.report(&Progress::Skipped(&record.relative, reason));
    }

    fn visit_file(&mut self, entry: &DirEntry) {
        let record = self.state.file_record(&entry.path, &entry.name);

        if self.state.output.as_deref() == Some(record.path.as_path()) {
            self.skip(&record, SkipReason::Output);
            return;
        }
        if !self.state.allowed.allows(&record.extension) {
            self.skip(&record, SkipReason::Extension);
            return;
        }

        let bytes = match self.ctx.fs.read_bytes(&record.path) {
            Ok(bytes) => bytes,
            Err(e) => {
                self.stats.errors += 1;
                let reason = read_failure(e.as_ref());
                self.skip(&record, reason);
                return;
            }
        };

        let code = clean_source(&bytes, &self.state.import_prefixes);
        if code.is_empty() {
            self.skip(&record, SkipReason::Empty);
            return;
        }

        match self.output.append_section(&record.relative, &code) {
            Ok(()) => {
                self.stats.files_processed += 1;
                self.report(&Progress::Processed(&record.relative));
            }
            Err(e) => {
                self.stats.errors += 1;
                self.stats.files_skipped += 1;
                warn!(output = %self.output.path().display(), error = %e, "cannot append section");
                self.report(&Progress::AppendFailed(
                    &record.relative,
                    self.output.path(),
                    e.to_string(),
                ));
            }
        }
    }
}

fn read_failure(err: &(dyn std::error::Error + Send + Sync + 'static)) -> SkipReason {
    match io_error_kind(err) {
        Some(ErrorKind::PermissionDenied) => SkipReason::Permission,
        Some(kind) => SkipReason::Error(format!("{kind:?}")),
        None => SkipReason::Error("Other".to_string()),
    }
}
