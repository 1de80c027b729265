//! Service context bundling the port trait objects.

use crate::adapters::live::console::LiveConsole;
use crate::adapters::live::filesystem::LiveFileSystem;
use crate::adapters::recording::console::RecordingConsole;
use crate::adapters::recording::filesystem::RecordingFileSystem;
use crate::adapters::replaying::{ReplayingConsole, ReplayingFileSystem};
use crate::cassette::config::CassetteConfig;
use crate::cassette::session::RecordingSession;
use crate::ports::console::Console;
use crate::ports::filesystem::FileSystem;

/// Bundles every port a run talks to.
///
/// Constructors wire up live, recording or replaying adapters.
pub struct ServiceContext {
    /// Filesystem that is walked and written to.
    pub fs: Box<dyn FileSystem>,
    /// Console for prompts and progress lines.
    pub console: Box<dyn Console>,
}

impl ServiceContext {
    /// Creates a context backed by the real disk and terminal.
    #[must_use]
    pub fn live() -> Self {
        Self { fs: Box::new(LiveFileSystem), console: Box::new(LiveConsole) }
    }

    /// Creates a live context whose calls are captured by `session`.
    ///
    /// The context must be dropped before the session is finished.
    #[must_use]
    pub fn recording(session: &RecordingSession) -> Self {
        use std::sync::Arc;

        Self {
            fs: Box::new(RecordingFileSystem::new(Box::new(LiveFileSystem), Arc::clone(&session.fs))),
            console: Box::new(RecordingConsole::new(
                Box::new(LiveConsole),
                Arc::clone(&session.console),
            )),
        }
    }

    /// Creates a context served from recorded cassettes.
    ///
    /// Without a console cassette, prompts and progress go to the live
    /// terminal.
    ///
    /// # Errors
    ///
    /// Returns an error if no filesystem cassette is configured or a
    /// configured cassette cannot be loaded.
    pub fn replaying_from(config: &CassetteConfig) -> Result<Self, String> {
        let fs_path =
            config.fs.as_deref().ok_or("No filesystem cassette configured for replay")?;
        let fs = ReplayingFileSystem::new(CassetteConfig::load(fs_path)?);

        let console: Box<dyn Console> = match config.console.as_deref() {
            Some(path) => Box::new(ReplayingConsole::new(CassetteConfig::load(path)?)),
            None => Box::new(LiveConsole),
        };

        Ok(Self { fs: Box::new(fs), console })
    }
}
