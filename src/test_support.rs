//! Shared helpers for unit tests.

use std::collections::VecDeque;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use crate::adapters::live::filesystem::LiveFileSystem;
use crate::context::ServiceContext;
use crate::ports::console::Console;

/// Console that answers prompts from a script and keeps every line.
#[derive(Clone, Default)]
pub(crate) struct ScriptedConsole {
    replies: Arc<Mutex<VecDeque<String>>>,
    lines: Arc<Mutex<Vec<String>>>,
}

impl ScriptedConsole {
    pub(crate) fn with_replies(replies: &[&str]) -> Self {
        let console = Self::default();
        console.replies.lock().unwrap().extend(replies.iter().map(ToString::to_string));
        console
    }

    pub(crate) fn lines(&self) -> Vec<String> {
        self.lines.lock().unwrap().clone()
    }
}

impl Console for ScriptedConsole {
    fn prompt(&self, message: &str) -> Result<String, Box<dyn std::error::Error + Send + Sync>> {
        self.lines.lock().unwrap().push(message.to_string());
        Ok(self.replies.lock().unwrap().pop_front().unwrap_or_default())
    }

    fn report(&self, line: &str) {
        self.lines.lock().unwrap().push(line.to_string());
    }
}

/// Live filesystem plus a scripted console.
pub(crate) fn scripted_context(replies: &[&str]) -> (ServiceContext, ScriptedConsole) {
    let console = ScriptedConsole::with_replies(replies);
    let ctx = ServiceContext { fs: Box::new(LiveFileSystem), console: Box::new(console.clone()) };
    (ctx, console)
}

/// Fresh scratch directory under the system temp dir.
pub(crate) fn scratch_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("codebundle_{name}"));
    let _ = std::fs::remove_dir_all(&dir);
    std::fs::create_dir_all(&dir).unwrap();
    dir
}

/// Writes `contents` at `root/relative`, creating parent directories.
pub(crate) fn write_file(root: &Path, relative: &str, contents: &[u8]) {
    let path = root.join(relative);
    std::fs::create_dir_all(path.parent().unwrap()).unwrap();
    std::fs::write(path, contents).unwrap();
}
