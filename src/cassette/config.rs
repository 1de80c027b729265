//! Per-port cassette selection for replay.

use std::path::{Path, PathBuf};

use super::format::Cassette;
use super::replayer::CassetteReplayer;

/// File name of the filesystem cassette inside a session directory.
pub const FS_CASSETTE: &str = "fs.cassette.yaml";
/// File name of the console cassette inside a session directory.
pub const CONSOLE_CASSETTE: &str = "console.cassette.yaml";

/// Cassette files to replay, one per port.
#[derive(Debug, Clone, Default)]
pub struct CassetteConfig {
    /// Cassette for the filesystem port. Required for replay.
    pub fs: Option<PathBuf>,
    /// Cassette for the console port. Without one the live console is used.
    pub console: Option<PathBuf>,
}

impl CassetteConfig {
    /// Picks up whichever per-port cassettes exist in a session directory.
    #[must_use]
    pub fn from_session_dir(dir: &Path) -> Self {
        let existing = |name: &str| Some(dir.join(name)).filter(|p| p.is_file());
        Self { fs: existing(FS_CASSETTE), console: existing(CONSOLE_CASSETTE) }
    }

    /// Loads one cassette file into a replayer.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<CassetteReplayer, String> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| format!("Failed to read cassette file {}: {e}", path.display()))?;
        let cassette: Cassette = serde_yaml::from_str(&content)
            .map_err(|e| format!("Failed to parse cassette file {}: {e}", path.display()))?;
        Ok(CassetteReplayer::new(&cassette))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn session_dir_lookup_only_returns_existing_files() {
        let dir = std::env::temp_dir().join("codebundle_cassette_config_test");
        let _ = std::fs::remove_dir_all(&dir);
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(dir.join(FS_CASSETTE), "").unwrap();

        let config = CassetteConfig::from_session_dir(&dir);
        assert_eq!(config.fs, Some(dir.join(FS_CASSETTE)));
        assert!(config.console.is_none());

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn load_reports_unparseable_cassette() {
        let dir = std::env::temp_dir().join("codebundle_cassette_config_bad");
        let _ = std::fs::remove_dir_all(&dir);
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join(FS_CASSETTE);
        std::fs::write(&path, "interactions: [unterminated").unwrap();

        let err = CassetteConfig::load(&path).err().expect("should fail");
        assert!(err.contains("Failed to parse cassette file"));

        let _ = std::fs::remove_dir_all(&dir);
    }
}
