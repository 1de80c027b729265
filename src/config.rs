//! Run configuration loaded from an optional YAML file.
//!
//! ```yaml
//! output_file: output.txt
//! skip_dirs: [".git"]
//! import_prefixes: ["import ", "from ", "package "]
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::filter::DEFAULT_IMPORT_PREFIXES;

/// Config file picked up from the working directory when present.
pub const CONFIG_FILE: &str = "codebundle.yaml";

/// Default name of the bundle output file.
pub const DEFAULT_OUTPUT_FILE: &str = "output.txt";

/// Directory names that are never entered by default.
pub const DEFAULT_SKIP_DIRS: [&str; 1] = [".git"];

/// Settings that shape a bundling run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BundleConfig {
    /// Output file, relative to the working directory.
    pub output_file: PathBuf,
    /// Directory names skipped at any depth.
    pub skip_dirs: Vec<String>,
    /// Line prefixes (after trimming) that mark import-like lines.
    pub import_prefixes: Vec<String>,
}

impl Default for BundleConfig {
    fn default() -> Self {
        Self {
            output_file: PathBuf::from(DEFAULT_OUTPUT_FILE),
            skip_dirs: DEFAULT_SKIP_DIRS.iter().map(ToString::to_string).collect(),
            import_prefixes: DEFAULT_IMPORT_PREFIXES.iter().map(ToString::to_string).collect(),
        }
    }
}

impl BundleConfig {
    /// Parses a YAML config document.
    ///
    /// # Errors
    ///
    /// Returns an error for malformed YAML or unknown keys.
    pub fn from_yaml(yaml: &str) -> Result<Self, String> {
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(yaml).map_err(|e| format!("Invalid configuration: {e}"))
    }

    /// Loads the configuration for a run.
    ///
    /// An explicit path must exist. Otherwise [`CONFIG_FILE`] in the working
    /// directory is used when present, and the defaults when it is not.
    ///
    /// # Errors
    ///
    /// Returns an error if a config file cannot be read or parsed.
    pub fn load(explicit: Option<&Path>) -> Result<Self, String> {
        let path = match explicit {
            Some(path) => path.to_path_buf(),
            None => {
                let implicit = PathBuf::from(CONFIG_FILE);
                if !implicit.is_file() {
                    return Ok(Self::default());
                }
                implicit
            }
        };
        let yaml = std::fs::read_to_string(&path)
            .map_err(|e| format!("Failed to read config file {}: {e}", path.display()))?;
        Self::from_yaml(&yaml).map_err(|e| format!("{}: {e}", path.display()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_fixed_literals() {
        let config = BundleConfig::default();
        assert_eq!(config.output_file, PathBuf::from("output.txt"));
        assert_eq!(config.skip_dirs, vec![".git"]);
        assert_eq!(config.import_prefixes, vec!["import ", "from ", "package "]);
    }

    #[test]
    fn partial_yaml_keeps_other_defaults() {
        let config = BundleConfig::from_yaml("skip_dirs: [\".git\", target]\n").unwrap();
        assert_eq!(config.skip_dirs, vec![".git", "target"]);
        assert_eq!(config.output_file, PathBuf::from("output.txt"));
        assert_eq!(config.import_prefixes.len(), 3);
    }

    #[test]
    fn empty_document_is_default() {
        assert_eq!(BundleConfig::from_yaml("  \n").unwrap(), BundleConfig::default());
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let err = BundleConfig::from_yaml("skip_dir: [x]\n").unwrap_err();
        assert!(err.contains("Invalid configuration"));
    }

    #[test]
    fn explicit_missing_file_is_an_error() {
        let missing = std::env::temp_dir().join("codebundle_no_such_config.yaml");
        let err = BundleConfig::load(Some(&missing)).unwrap_err();
        assert!(err.contains("Failed to read config file"));
    }

    #[test]
    fn explicit_file_is_loaded() {
        let dir = std::env::temp_dir().join("codebundle_config_load_test");
        let _ = std::fs::remove_dir_all(&dir);
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("bundle.yaml");
        std::fs::write(&path, "output_file: bundle.txt\n").unwrap();

        let config = BundleConfig::load(Some(&path)).unwrap();
        assert_eq!(config.output_file, PathBuf::from("bundle.txt"));

        let _ = std::fs::remove_dir_all(&dir);
    }
}
