//! Live filesystem adapter using `std::fs`.

use std::fs::{self, OpenOptions};
use std::io::{Read, Seek, SeekFrom, Write};
use std::path::Path;

use tracing::debug;

use crate::ports::filesystem::{DirEntry, EntryKind, FileSystem};

/// Live filesystem adapter backed by real disk I/O.
pub struct LiveFileSystem;

fn entry_kind(path: &Path) -> EntryKind {
    match fs::metadata(path) {
        Ok(meta) if meta.is_file() => EntryKind::File,
        Ok(meta) if meta.is_dir() => EntryKind::Dir,
        _ => EntryKind::Other,
    }
}

impl FileSystem for LiveFileSystem {
    fn is_dir(&self, path: &Path) -> bool {
        path.is_dir()
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn list_dir(
        &self,
        path: &Path,
    ) -> Result<Vec<DirEntry>, Box<dyn std::error::Error + Send + Sync>> {
        let mut entries = Vec::new();
        for entry in fs::read_dir(path)? {
            let entry = entry?;
            let file_name = entry.file_name();
            let name = file_name.to_string_lossy().into_owned();
            if file_name.to_str().is_none() {
                debug!(name = %name, "entry name is not UTF-8, reporting it lossily");
            }
            let path = entry.path();
            let kind = entry_kind(&path);
            entries.push(DirEntry { name, path, kind });
        }
        entries.sort_by(|a, b| a.name.cmp(&b.name).then_with(|| a.path.cmp(&b.path)));
        Ok(entries)
    }

    fn read_bytes(&self, path: &Path) -> Result<Vec<u8>, Box<dyn std::error::Error + Send + Sync>> {
        Ok(fs::read(path)?)
    }

    fn append(
        &self,
        path: &Path,
        contents: &str,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let mut file = OpenOptions::new().create(true).append(true).open(path)?;
        file.write_all(contents.as_bytes())?;
        Ok(())
    }

    fn remove_file(&self, path: &Path) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        Ok(fs::remove_file(path)?)
    }

    fn read_tail(
        &self,
        path: &Path,
        len: u64,
    ) -> Result<Vec<u8>, Box<dyn std::error::Error + Send + Sync>> {
        let mut file = fs::File::open(path)?;
        let size = file.metadata()?.len();
        file.seek(SeekFrom::Start(size.saturating_sub(len)))?;
        let mut tail = Vec::new();
        file.read_to_end(&mut tail)?;
        Ok(tail)
    }

    fn set_len(&self, path: &Path, len: u64) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let file = OpenOptions::new().write(true).open(path)?;
        file.set_len(len)?;
        Ok(())
    }

    fn file_len(&self, path: &Path) -> Result<u64, Box<dyn std::error::Error + Send + Sync>> {
        Ok(fs::metadata(path)?.len())
    }
}
