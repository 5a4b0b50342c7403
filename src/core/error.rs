//! Error taxonomy
//!
//! Core components return `JourneyError`; only the CLI layer decides whether a
//! failure terminates the process.

use std::path::PathBuf;
use thiserror::Error;

/// Errors surfaced by the journal core
#[derive(Debug, Error)]
pub enum JourneyError {
    /// Missing or invalid configuration field
    #[error("{0}")]
    Config(String),

    #[error("Cannot find the config file: {}", .path.display())]
    ConfigMissing { path: PathBuf },

    #[error("Cannot read config file {}: {source}", .path.display())]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Config file {} is not valid JSON: {source}", .path.display())]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Cannot read index file {}: {source}", .path.display())]
    IndexRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Index file {} is corrupt: {source}", .path.display())]
    IndexParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Cannot write data into: {}, check if path exists.", .path.display())]
    IndexWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Cannot list journal directory {}: {source}", .path.display())]
    DirRead {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },

    #[error("Cannot read entry {}: {source}", .path.display())]
    EntryRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Pagination requested before any search was run
    #[error("No search results to open, run a search first.")]
    NoSearch,

    /// Pagination requested against an empty result list
    #[error("The last search had no results to open.")]
    NoResults,

    #[error("Invalid index '{0}': use a number, \"n\" or \"p\".")]
    InvalidSelector(String),

    #[error("Cannot launch editor '{editor}': {source}")]
    EditorLaunch {
        editor: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Editor '{editor}' exited with {status}")]
    EditorFailed { editor: String, status: String },
}

pub type Result<T, E = JourneyError> = std::result::Result<T, E>;
