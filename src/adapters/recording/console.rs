//! Recording adapter for the `Console` port.

use std::sync::{Arc, Mutex};

use serde::Serialize;

use super::{record_interaction, record_result};
use crate::cassette::recorder::CassetteRecorder;
use crate::ports::console::Console;

/// Records prompts and progress lines while delegating to an inner console.
pub struct RecordingConsole {
    inner: Box<dyn Console>,
    recorder: Arc<Mutex<CassetteRecorder>>,
}

impl RecordingConsole {
    /// Creates a new recording console wrapping the given implementation.
    pub fn new(inner: Box<dyn Console>, recorder: Arc<Mutex<CassetteRecorder>>) -> Self {
        Self { inner, recorder }
    }
}

#[derive(Serialize)]
struct PromptInput<'a> {
    message: &'a str,
}

#[derive(Serialize)]
struct ReportInput<'a> {
    line: &'a str,
}

impl Console for RecordingConsole {
    fn prompt(&self, message: &str) -> Result<String, Box<dyn std::error::Error + Send + Sync>> {
        let result = self.inner.prompt(message);
        record_result(&self.recorder, "console", "prompt", &PromptInput { message }, &result);
        result
    }

    fn report(&self, line: &str) {
        self.inner.report(line);
        record_interaction(&self.recorder, "console", "report", &ReportInput { line }, &());
    }
}
