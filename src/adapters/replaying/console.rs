//! Replaying adapter for the `Console` port.

use std::sync::Mutex;

use serde_json::json;

use super::{expect_input, next_interaction, replay_result};
use crate::cassette::replayer::CassetteReplayer;
use crate::ports::console::Console;

/// Answers prompts with recorded replies and checks every progress line
/// against the recording.
pub struct ReplayingConsole {
    replayer: Mutex<CassetteReplayer>,
}

impl ReplayingConsole {
    /// Creates a new replaying console from a cassette replayer.
    #[must_use]
    pub fn new(replayer: CassetteReplayer) -> Self {
        Self { replayer: Mutex::new(replayer) }
    }
}

impl Console for ReplayingConsole {
    fn prompt(&self, _message: &str) -> Result<String, Box<dyn std::error::Error + Send + Sync>> {
        let interaction = next_interaction(&self.replayer, "console", "prompt");
        replay_result(&interaction.output, "console::prompt")
    }

    fn report(&self, line: &str) {
        let interaction = next_interaction(&self.replayer, "console", "report");
        expect_input(&interaction, &json!({ "line": line }));
    }
}
