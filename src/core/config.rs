//! Journal configuration
//!
//! A JSON file holding at least `log_dir` and `editor`. It is validated once,
//! before anything touches the journal directory.

use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::core::error::{JourneyError, Result};
use crate::core::paths::{EntryPattern, DEFAULT_EXTENSION};
use crate::core::util::HashAlgorithm;

/// Default config file location, relative to the working directory
pub const DEFAULT_CONFIG_PATH: &str = "./journey_config.json";

/// Raw file contents; required fields are optional here so that a missing
/// field gets its own message instead of a serde error
#[derive(Debug, Default, Deserialize)]
struct RawConfig {
    log_dir: Option<PathBuf>,
    editor: Option<String>,
    extension: Option<String>,
    #[serde(default)]
    fingerprint: HashAlgorithm,
}

/// Validated configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Journal directory (exists, is a directory)
    pub log_dir: PathBuf,

    /// Editor executable name or path
    pub editor: String,

    /// Entry file extension, without the dot
    pub extension: String,

    /// Digest used for change detection
    pub fingerprint: HashAlgorithm,
}

impl Config {
    /// Load and validate the config file at `path`
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(JourneyError::ConfigMissing {
                path: path.to_path_buf(),
            });
        }
        let content = fs::read_to_string(path).map_err(|source| JourneyError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        let raw: RawConfig =
            serde_json::from_str(&content).map_err(|source| JourneyError::ConfigParse {
                path: path.to_path_buf(),
                source,
            })?;
        Self::validate(raw)
    }

    fn validate(raw: RawConfig) -> Result<Self> {
        let log_dir = raw.log_dir.ok_or_else(|| {
            JourneyError::Config("Please specify a log_dir in the config file.".to_string())
        })?;
        if !log_dir.is_dir() {
            return Err(JourneyError::Config(
                "log_dir must be a folder, recheck the path or create one.".to_string(),
            ));
        }

        let editor = raw
            .editor
            .filter(|e| !e.trim().is_empty())
            .ok_or_else(|| {
                JourneyError::Config("Please specify an editor in the config file.".to_string())
            })?;

        let extension = raw
            .extension
            .unwrap_or_else(|| DEFAULT_EXTENSION.to_string());
        if extension.is_empty() || !extension.chars().all(|c| c.is_ascii_alphanumeric()) {
            return Err(JourneyError::Config(format!(
                "extension must be alphanumeric without a leading dot, got '{}'.",
                extension
            )));
        }

        Ok(Self {
            log_dir,
            editor,
            extension,
            fingerprint: raw.fingerprint,
        })
    }

    /// Entry filename matcher for the configured extension
    pub fn entry_pattern(&self) -> EntryPattern {
        EntryPattern::new(&self.extension)
    }
}
