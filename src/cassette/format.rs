//! Cassette data structures for recording and replaying port calls.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single recorded call on a port.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Interaction {
    /// Sequence number within the cassette, assigned by the recorder.
    pub seq: u64,
    /// Port name (`fs` or `console`).
    pub port: String,
    /// Method name invoked on the port.
    pub method: String,
    /// Arguments of the call.
    pub input: serde_json::Value,
    /// Value the call returned.
    pub output: serde_json::Value,
}

/// An ordered recording of port calls from one run.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Cassette {
    /// Human-readable name for this cassette.
    pub name: String,
    /// When this cassette was recorded.
    pub recorded_at: DateTime<Utc>,
    /// Version of the tool that produced the recording.
    pub tool_version: String,
    /// Interactions in call order.
    pub interactions: Vec<Interaction>,
}
