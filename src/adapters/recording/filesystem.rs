//! Recording adapter for the `FileSystem` port.

use std::path::Path;
use std::sync::{Arc, Mutex};

use serde::Serialize;

use super::{record_interaction, record_result};
use crate::cassette::recorder::CassetteRecorder;
use crate::ports::filesystem::{serialize_path_lossy, DirEntry, FileSystem};

/// Records filesystem interactions while delegating to an inner implementation.
pub struct RecordingFileSystem {
    inner: Box<dyn FileSystem>,
    recorder: Arc<Mutex<CassetteRecorder>>,
}

impl RecordingFileSystem {
    /// Creates a new recording filesystem wrapping the given implementation.
    pub fn new(inner: Box<dyn FileSystem>, recorder: Arc<Mutex<CassetteRecorder>>) -> Self {
        Self { inner, recorder }
    }
}

#[derive(Serialize)]
struct PathInput<'a> {
    #[serde(serialize_with = "serialize_path_lossy")]
    path: &'a Path,
}

#[derive(Serialize)]
struct AppendInput<'a> {
    #[serde(serialize_with = "serialize_path_lossy")]
    path: &'a Path,
    contents: &'a str,
}

#[derive(Serialize)]
struct LenInput<'a> {
    #[serde(serialize_with = "serialize_path_lossy")]
    path: &'a Path,
    len: u64,
}

impl FileSystem for RecordingFileSystem {
    fn is_dir(&self, path: &Path) -> bool {
        let result = self.inner.is_dir(path);
        record_interaction(&self.recorder, "fs", "is_dir", &PathInput { path }, &result);
        result
    }

    fn exists(&self, path: &Path) -> bool {
        let result = self.inner.exists(path);
        record_interaction(&self.recorder, "fs", "exists", &PathInput { path }, &result);
        result
    }

    fn list_dir(
        &self,
        path: &Path,
    ) -> Result<Vec<DirEntry>, Box<dyn std::error::Error + Send + Sync>> {
        let result = self.inner.list_dir(path);
        record_result(&self.recorder, "fs", "list_dir", &PathInput { path }, &result);
        result
    }

    fn read_bytes(&self, path: &Path) -> Result<Vec<u8>, Box<dyn std::error::Error + Send + Sync>> {
        let result = self.inner.read_bytes(path);
        record_result(&self.recorder, "fs", "read_bytes", &PathInput { path }, &result);
        result
    }

    fn append(
        &self,
        path: &Path,
        contents: &str,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let result = self.inner.append(path, contents);
        let input = AppendInput { path, contents };
        record_result(&self.recorder, "fs", "append", &input, &result);
        result
    }

    fn remove_file(&self, path: &Path) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let result = self.inner.remove_file(path);
        record_result(&self.recorder, "fs", "remove_file", &PathInput { path }, &result);
        result
    }

    fn read_tail(
        &self,
        path: &Path,
        len: u64,
    ) -> Result<Vec<u8>, Box<dyn std::error::Error + Send + Sync>> {
        let result = self.inner.read_tail(path, len);
        record_result(&self.recorder, "fs", "read_tail", &LenInput { path, len }, &result);
        result
    }

    fn set_len(&self, path: &Path, len: u64) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let result = self.inner.set_len(path, len);
        record_result(&self.recorder, "fs", "set_len", &LenInput { path, len }, &result);
        result
    }

    fn file_len(&self, path: &Path) -> Result<u64, Box<dyn std::error::Error + Send + Sync>> {
        let result = self.inner.file_len(path);
        record_result(&self.recorder, "fs", "file_len", &PathInput { path }, &result);
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::live::filesystem::LiveFileSystem;
    use crate::cassette::format::Cassette;

    #[test]
    fn records_errors_with_their_kind() {
        let dir = std::env::temp_dir().join("codebundle_rec_fs_test");
        let _ = std::fs::remove_dir_all(&dir);
        std::fs::create_dir_all(&dir).unwrap();
        let cassette_path = dir.join("fs.cassette.yaml");

        let recorder = Arc::new(Mutex::new(CassetteRecorder::new(&cassette_path, "test")));
        {
            let fs = RecordingFileSystem::new(Box::new(LiveFileSystem), Arc::clone(&recorder));
            assert!(fs.is_dir(&dir));
            assert!(fs.read_bytes(&dir.join("missing.txt")).is_err());
        }

        let recorder = Arc::try_unwrap(recorder).unwrap().into_inner().unwrap();
        recorder.finish().unwrap();

        let cassette: Cassette =
            serde_yaml::from_str(&std::fs::read_to_string(&cassette_path).unwrap()).unwrap();
        assert_eq!(cassette.interactions.len(), 2);
        assert_eq!(cassette.interactions[0].output, serde_json::json!(true));
        assert_eq!(cassette.interactions[1].method, "read_bytes");
        assert_eq!(cassette.interactions[1].output["kind"], "NotFound");

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn records_non_utf8_paths_lossily() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        let dir = std::env::temp_dir().join("codebundle_rec_fs_lossy_test");
        let _ = std::fs::remove_dir_all(&dir);
        std::fs::create_dir_all(&dir).unwrap();
        let file = dir.join(OsStr::from_bytes(b"caf\xe9.rs"));
        std::fs::write(&file, "x").unwrap();

        let recorder = Arc::new(Mutex::new(CassetteRecorder::new(dir.join("fs.yaml"), "test")));
        {
            let fs = RecordingFileSystem::new(Box::new(LiveFileSystem), Arc::clone(&recorder));
            assert_eq!(fs.list_dir(&dir).unwrap().len(), 1);
            assert_eq!(fs.read_bytes(&file).unwrap(), b"x");
        }

        let recorder = Arc::try_unwrap(recorder).unwrap().into_inner().unwrap();
        let listed = &recorder.interactions()[0].output["ok"][0];
        assert_eq!(listed["name"], "caf\u{FFFD}.rs");
        let lossy = file.to_string_lossy().into_owned();
        assert_eq!(listed["path"], lossy.as_str());
        assert_eq!(recorder.interactions()[1].input["path"], lossy.as_str());

        let _ = std::fs::remove_dir_all(&dir);
    }
}
