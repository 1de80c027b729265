//! Replaying adapters that serve port calls from recorded cassettes.

pub mod console;
pub mod filesystem;

pub use console::ReplayingConsole;
pub use filesystem::ReplayingFileSystem;

use std::io;
use std::sync::Mutex;

use serde::de::DeserializeOwned;

use crate::cassette::format::Interaction;
use crate::cassette::replayer::CassetteReplayer;

/// Takes the next interaction for a port method from a shared replayer.
pub(crate) fn next_interaction(
    replayer: &Mutex<CassetteReplayer>,
    port: &str,
    method: &str,
) -> Interaction {
    let mut guard = replayer.lock().expect("replayer lock poisoned");
    guard.next_interaction(port, method)
}

/// Panics unless the replayed call was made with the recorded arguments.
pub(crate) fn expect_input(interaction: &Interaction, actual: &serde_json::Value) {
    assert!(
        interaction.input == *actual,
        "Replay diverged at {}::{} seq={}: recorded input {} but got {}",
        interaction.port,
        interaction.method,
        interaction.seq,
        interaction.input,
        actual,
    );
}

/// Maps a recorded `io::ErrorKind` name back to the kind.
fn error_kind_from_name(name: &str) -> io::ErrorKind {
    match name {
        "NotFound" => io::ErrorKind::NotFound,
        "PermissionDenied" => io::ErrorKind::PermissionDenied,
        "AlreadyExists" => io::ErrorKind::AlreadyExists,
        "InvalidInput" => io::ErrorKind::InvalidInput,
        "InvalidData" => io::ErrorKind::InvalidData,
        "Interrupted" => io::ErrorKind::Interrupted,
        "UnexpectedEof" => io::ErrorKind::UnexpectedEof,
        "IsADirectory" => io::ErrorKind::IsADirectory,
        "NotADirectory" => io::ErrorKind::NotADirectory,
        _ => io::ErrorKind::Other,
    }
}

/// Rebuilds a `Result` from a recorded `{"ok": ..}` / `{"err": .., "kind": ..}` output.
pub(crate) fn replay_result<T: DeserializeOwned>(
    output: &serde_json::Value,
    context: &str,
) -> Result<T, Box<dyn std::error::Error + Send + Sync>> {
    if let Some(err) = output.get("err") {
        let message = err.as_str().unwrap_or("unknown error").to_string();
        let kind = output.get("kind").and_then(serde_json::Value::as_str).unwrap_or("Other");
        return Err(Box::new(io::Error::new(error_kind_from_name(kind), message)));
    }
    let value = output.get("ok").unwrap_or(output);
    serde_json::from_value(value.clone())
        .map_err(|e| format!("{context}: failed to deserialize: {e}").into())
}
