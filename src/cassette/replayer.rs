//! Serves recorded interactions back in order.

use std::collections::{HashMap, VecDeque};

use super::format::{Cassette, Interaction};

/// Replays a cassette, one queue per `(port, method)` pair.
///
/// Calls of different methods may interleave freely; calls of the same
/// method are served in recorded order.
pub struct CassetteReplayer {
    queues: HashMap<(String, String), VecDeque<Interaction>>,
}

impl CassetteReplayer {
    /// Create a replayer from a loaded cassette.
    #[must_use]
    pub fn new(cassette: &Cassette) -> Self {
        let mut queues: HashMap<(String, String), VecDeque<Interaction>> = HashMap::new();
        for interaction in &cassette.interactions {
            queues
                .entry((interaction.port.clone(), interaction.method.clone()))
                .or_default()
                .push_back(interaction.clone());
        }
        Self { queues }
    }

    /// Take the next interaction recorded for `port` and `method`.
    ///
    /// # Panics
    ///
    /// Panics if no interaction is left for the pair; the run being
    /// replayed has diverged from the recording.
    pub fn next_interaction(&mut self, port: &str, method: &str) -> Interaction {
        let key = (port.to_string(), method.to_string());
        if let Some(interaction) = self.queues.get_mut(&key).and_then(VecDeque::pop_front) {
            return interaction;
        }
        let mut remaining: Vec<String> = self
            .queues
            .iter()
            .filter(|(_, queue)| !queue.is_empty())
            .map(|((p, m), queue)| format!("{p}::{m} x{}", queue.len()))
            .collect();
        remaining.sort();
        panic!(
            "Cassette exhausted: no interaction left for port={port:?} method={method:?}. \
             Remaining: [{}]",
            remaining.join(", ")
        );
    }

    /// Number of interactions not yet served.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.queues.values().map(VecDeque::len).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use serde_json::json;

    fn interaction(seq: u64, method: &str, output: serde_json::Value) -> Interaction {
        Interaction {
            seq,
            port: "fs".into(),
            method: method.into(),
            input: json!({}),
            output,
        }
    }

    fn cassette(interactions: Vec<Interaction>) -> Cassette {
        Cassette {
            name: "test".into(),
            recorded_at: Utc::now(),
            tool_version: "0.0.0".into(),
            interactions,
        }
    }

    #[test]
    fn serves_each_method_in_recorded_order() {
        let mut replayer = CassetteReplayer::new(&cassette(vec![
            interaction(0, "is_dir", json!(true)),
            interaction(1, "list_dir", json!({"ok": []})),
            interaction(2, "is_dir", json!(false)),
        ]));
        assert_eq!(replayer.remaining(), 3);

        assert_eq!(replayer.next_interaction("fs", "list_dir").seq, 1);
        assert_eq!(replayer.next_interaction("fs", "is_dir").output, json!(true));
        assert_eq!(replayer.next_interaction("fs", "is_dir").output, json!(false));
        assert_eq!(replayer.remaining(), 0);
    }

    #[test]
    #[should_panic(expected = "Cassette exhausted")]
    fn exhausted_method_panics() {
        let mut replayer = CassetteReplayer::new(&cassette(vec![interaction(0, "is_dir", json!(true))]));
        let _ = replayer.next_interaction("fs", "is_dir");
        let _ = replayer.next_interaction("fs", "is_dir");
    }

    #[test]
    #[should_panic(expected = "fs::is_dir x1")]
    fn panic_lists_remaining_pairs() {
        let mut replayer = CassetteReplayer::new(&cassette(vec![interaction(0, "is_dir", json!(true))]));
        let _ = replayer.next_interaction("console", "report");
    }
}
