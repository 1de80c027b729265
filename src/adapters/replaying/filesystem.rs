//! Replaying adapter for the `FileSystem` port.

use std::path::Path;
use std::sync::Mutex;

use serde_json::json;

use super::{expect_input, next_interaction, replay_result};
use crate::cassette::replayer::CassetteReplayer;
use crate::ports::filesystem::{DirEntry, FileSystem};

/// Replays recorded filesystem operations from a cassette.
///
/// Reads return what was recorded. Appends must carry the recorded
/// contents, otherwise the replay panics.
pub struct ReplayingFileSystem {
    replayer: Mutex<CassetteReplayer>,
}

impl ReplayingFileSystem {
    /// Creates a new replaying filesystem from a cassette replayer.
    #[must_use]
    pub fn new(replayer: CassetteReplayer) -> Self {
        Self { replayer: Mutex::new(replayer) }
    }

    fn flag(&self, method: &str) -> bool {
        let interaction = next_interaction(&self.replayer, "fs", method);
        interaction
            .output
            .as_bool()
            .unwrap_or_else(|| panic!("fs::{method}: expected boolean output"))
    }
}

impl FileSystem for ReplayingFileSystem {
    fn is_dir(&self, _path: &Path) -> bool {
        self.flag("is_dir")
    }

    fn exists(&self, _path: &Path) -> bool {
        self.flag("exists")
    }

    fn list_dir(
        &self,
        _path: &Path,
    ) -> Result<Vec<DirEntry>, Box<dyn std::error::Error + Send + Sync>> {
        let interaction = next_interaction(&self.replayer, "fs", "list_dir");
        replay_result(&interaction.output, "fs::list_dir")
    }

    fn read_bytes(&self, _path: &Path) -> Result<Vec<u8>, Box<dyn std::error::Error + Send + Sync>> {
        let interaction = next_interaction(&self.replayer, "fs", "read_bytes");
        replay_result(&interaction.output, "fs::read_bytes")
    }

    fn append(
        &self,
        path: &Path,
        contents: &str,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let interaction = next_interaction(&self.replayer, "fs", "append");
        expect_input(
            &interaction,
            &json!({"path": path.to_string_lossy(), "contents": contents}),
        );
        replay_result(&interaction.output, "fs::append")
    }

    fn remove_file(&self, _path: &Path) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let interaction = next_interaction(&self.replayer, "fs", "remove_file");
        replay_result(&interaction.output, "fs::remove_file")
    }

    fn read_tail(
        &self,
        _path: &Path,
        _len: u64,
    ) -> Result<Vec<u8>, Box<dyn std::error::Error + Send + Sync>> {
        let interaction = next_interaction(&self.replayer, "fs", "read_tail");
        replay_result(&interaction.output, "fs::read_tail")
    }

    fn set_len(&self, path: &Path, len: u64) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let interaction = next_interaction(&self.replayer, "fs", "set_len");
        expect_input(&interaction, &json!({"path": path.to_string_lossy(), "len": len}));
        replay_result(&interaction.output, "fs::set_len")
    }

    fn file_len(&self, _path: &Path) -> Result<u64, Box<dyn std::error::Error + Send + Sync>> {
        let interaction = next_interaction(&self.replayer, "fs", "file_len");
        replay_result(&interaction.output, "fs::file_len")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cassette::format::{Cassette, Interaction};
    use crate::ports::filesystem::EntryKind;
    use chrono::Utc;

    fn replaying(interactions: Vec<(&str, serde_json::Value, serde_json::Value)>) -> ReplayingFileSystem {
        let interactions = interactions
            .into_iter()
            .enumerate()
            .map(|(seq, (method, input, output))| Interaction {
                seq: seq as u64,
                port: "fs".into(),
                method: method.into(),
                input,
                output,
            })
            .collect();
        let cassette = Cassette {
            name: "test".into(),
            recorded_at: Utc::now(),
            tool_version: "0.0.0".into(),
            interactions,
        };
        ReplayingFileSystem::new(CassetteReplayer::new(&cassette))
    }

    #[test]
    fn replays_directory_listing() {
        let fs = replaying(vec![(
            "list_dir",
            json!({"path": "/src"}),
            json!({"ok": [{"name": "main.rs", "path": "/src/main.rs", "kind": "file"}]}),
        )]);
        let entries = fs.list_dir(Path::new("/src")).unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].name, "main.rs");
        assert_eq!(entries[0].kind, EntryKind::File);
    }

    #[test]
    fn replays_flags_and_lengths() {
        let fs = replaying(vec![
            ("is_dir", json!({"path": "/src"}), json!(true)),
            ("file_len", json!({"path": "/out"}), json!({"ok": 42})),
        ]);
        assert!(fs.is_dir(Path::new("/src")));
        assert_eq!(fs.file_len(Path::new("/out")).unwrap(), 42);
    }

    #[test]
    fn matching_append_succeeds() {
        let fs = replaying(vec![(
            "append",
            json!({"path": "/out.txt", "contents": "```a.rs\nfn a() {}\n```\n\n"}),
            json!({"ok": null}),
        )]);
        fs.append(Path::new("/out.txt"), "```a.rs\nfn a() {}\n```\n\n").unwrap();
    }

    #[test]
    #[should_panic(expected = "Replay diverged at fs::append")]
    fn diverging_append_panics() {
        let fs = replaying(vec![(
            "append",
            json!({"path": "/out.txt", "contents": "old"}),
            json!({"ok": null}),
        )]);
        let _ = fs.append(Path::new("/out.txt"), "new");
    }
}
