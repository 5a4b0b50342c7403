//! Flows module - One handler per CLI action
//!
//! Provides:
//! - today: open the dated entry in the editor
//! - search: tag search over the index
//! - open: open an entry from the last search results
//! - update: force a reconciliation of the index
//! - tags: list every known tag

pub mod open;
pub mod search;
pub mod tags;
pub mod today;
pub mod update;

use std::path::{Path, PathBuf};

use crate::core::config::Config;
use crate::core::paths::EntryPattern;
use crate::core::render::Renderer;
use crate::index::sync::SyncOptions;

/// Application context threaded through every handler
#[derive(Debug, Clone)]
pub struct Journal {
    pub config: Config,
    pub pattern: EntryPattern,
    pub renderer: Renderer,
    /// Suppress informational output
    pub quiet: bool,
}

impl Journal {
    pub fn new(config: Config, renderer: Renderer, quiet: bool) -> Self {
        let pattern = config.entry_pattern();
        Self {
            config,
            pattern,
            renderer,
            quiet,
        }
    }

    pub fn log_dir(&self) -> &Path {
        &self.config.log_dir
    }

    /// Absolute path of an entry file, which need not exist yet
    pub fn entry_path(&self, filename: &str) -> PathBuf {
        let path = self.config.log_dir.join(filename);
        path.canonicalize()
            .or_else(|_| std::path::absolute(&path))
            .unwrap_or(path)
    }

    pub fn sync_options(&self) -> SyncOptions {
        SyncOptions {
            pattern: self.pattern.clone(),
            fingerprint: self.config.fingerprint,
        }
    }

    /// Print an informational line unless quiet
    pub fn note(&self, message: impl AsRef<str>) {
        if !self.quiet {
            println!("{}", message.as_ref());
        }
    }
}
