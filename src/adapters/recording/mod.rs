//! Recording adapters that capture interactions to cassettes.

pub mod console;
pub mod filesystem;

use std::sync::{Arc, Mutex};

use serde::Serialize;

use crate::cassette::recorder::CassetteRecorder;
use crate::ports::io_error_kind;

/// Record a call whose return value is not a `Result`.
pub(crate) fn record_interaction<I, O>(
    recorder: &Arc<Mutex<CassetteRecorder>>,
    port: &str,
    method: &str,
    input: &I,
    output: &O,
) where
    I: Serialize,
    O: Serialize,
{
    let input_json = serde_json::to_value(input).expect("failed to serialize recording input");
    let output_json = serde_json::to_value(output).expect("failed to serialize recording output");

    let mut guard = recorder.lock().expect("recorder lock poisoned");
    guard.record(port, method, input_json, output_json);
}

/// Record a fallible call.
///
/// `Ok(v)` is stored as `{"ok": v}`. `Err(e)` is stored as
/// `{"err": "<message>", "kind": "<io::ErrorKind>"}` so the replaying side
/// can rebuild an error of the same kind.
pub(crate) fn record_result<T, I>(
    recorder: &Arc<Mutex<CassetteRecorder>>,
    port: &str,
    method: &str,
    input: &I,
    result: &Result<T, Box<dyn std::error::Error + Send + Sync>>,
) where
    T: Serialize,
    I: Serialize,
{
    let input_json = serde_json::to_value(input).expect("failed to serialize recording input");

    let output_json = match result {
        Ok(v) => {
            let inner = serde_json::to_value(v).expect("failed to serialize Ok value");
            serde_json::json!({ "ok": inner })
        }
        Err(e) => {
            let kind = io_error_kind(e.as_ref()).unwrap_or(std::io::ErrorKind::Other);
            serde_json::json!({ "err": e.to_string(), "kind": format!("{kind:?}") })
        }
    };

    let mut guard = recorder.lock().expect("recorder lock poisoned");
    guard.record(port, method, input_json, output_json);
}
