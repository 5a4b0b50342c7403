//! Index store - Read/write the persisted `.journey_db.json`
//!
//! The store holds per-entry digests and tags plus the state of the last
//! search. A missing file bootstraps an empty store; a corrupt one is an error
//! and is never repaired automatically.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::fs;
use std::path::Path;
use tracing::debug;

use crate::core::error::{JourneyError, Result};
use crate::core::paths::index_path;

/// Cursor value meaning "nothing opened from the results yet"
pub const NO_CURSOR: i64 = -1;

fn no_cursor() -> i64 {
    NO_CURSOR
}

/// Persisted state of one journal entry
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexRecord {
    /// Content digest at the time tags were extracted
    #[serde(rename = "hash")]
    pub digest: String,

    /// Normalized tags; serialized sorted
    #[serde(default)]
    pub tags: BTreeSet<String>,
}

/// Full persisted index for one journal directory
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexStore {
    /// Filenames from the last search, in display order
    #[serde(default, alias = "lastSearchResults")]
    pub last_search_results: Vec<String>,

    /// Cursor into `last_search_results`
    #[serde(default = "no_cursor", alias = "lastSearchIndex")]
    pub last_search_index: i64,

    /// Query that produced `last_search_results`, if any search ran
    #[serde(default, skip_serializing_if = "Option::is_none", alias = "lastQuery")]
    pub last_query: Option<String>,

    /// Known entries keyed by filename
    #[serde(rename = "files", default)]
    pub entries: BTreeMap<String, IndexRecord>,
}

impl Default for IndexStore {
    fn default() -> Self {
        Self {
            last_search_results: Vec::new(),
            last_search_index: NO_CURSOR,
            last_query: None,
            entries: BTreeMap::new(),
        }
    }
}

impl IndexStore {
    /// Load the index of `log_dir`, or an empty store if none was saved yet.
    /// The empty store is not written back here.
    pub fn load(log_dir: &Path) -> Result<Self> {
        let path = index_path(log_dir);
        if !path.exists() {
            debug!(path = %path.display(), "no index file, starting empty");
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path).map_err(|source| JourneyError::IndexRead {
            path: path.clone(),
            source,
        })?;
        let store: IndexStore = serde_json::from_str(&content)
            .map_err(|source| JourneyError::IndexParse { path: path.clone(), source })?;
        debug!(path = %path.display(), entries = store.entries.len(), "loaded index");
        Ok(store)
    }

    /// Write the index of `log_dir` as indented JSON
    pub fn save(&self, log_dir: &Path) -> Result<()> {
        let path = index_path(log_dir);
        let json = to_indented_json(self).map_err(|e| JourneyError::IndexWrite {
            path: path.clone(),
            source: std::io::Error::other(e),
        })?;
        fs::write(&path, json).map_err(|source| JourneyError::IndexWrite {
            path: path.clone(),
            source,
        })?;
        debug!(path = %path.display(), entries = self.entries.len(), "saved index");
        Ok(())
    }

    /// Whether a search has ever been recorded.
    ///
    /// Indexes written before `last_query` existed always carry
    /// `last_search_results`, searched or not, so an empty list there reads
    /// as "never searched".
    pub fn has_searched(&self) -> bool {
        self.last_query.is_some() || !self.last_search_results.is_empty()
    }
}

/// Pretty JSON with 4-space indentation
fn to_indented_json<T: Serialize>(value: &T) -> serde_json::Result<String> {
    let mut buf = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
    value.serialize(&mut ser)?;
    // serde_json only ever emits UTF-8
    Ok(String::from_utf8_lossy(&buf).into_owned())
}
