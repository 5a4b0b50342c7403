//! Synchronizer - Reconcile the index store with the journal directory
//!
//! Every entry file is hashed on each run, but tags are only re-extracted for
//! files whose digest differs from the stored one. Entries that disappeared
//! from the directory are pruned.

use std::collections::BTreeSet;
use std::path::Path;
use tracing::{debug, info};
use walkdir::WalkDir;

use crate::core::error::{JourneyError, Result};
use crate::core::paths::EntryPattern;
use crate::core::util::{read_and_hash, HashAlgorithm};
use crate::index::store::{IndexRecord, IndexStore};
use crate::index::tags::extract_tags;

/// Options controlling which files are indexed and how they are hashed
#[derive(Debug, Clone, Default)]
pub struct SyncOptions {
    pub pattern: EntryPattern,
    pub fingerprint: HashAlgorithm,
}

/// What a reconciliation changed
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SyncReport {
    pub added: Vec<String>,
    pub updated: Vec<String>,
    pub removed: Vec<String>,
}

impl SyncReport {
    /// Whether the store was mutated
    pub fn changed(&self) -> bool {
        !(self.added.is_empty() && self.updated.is_empty() && self.removed.is_empty())
    }
}

/// List entry filenames directly inside `log_dir`
pub fn list_entries(log_dir: &Path, pattern: &EntryPattern) -> Result<BTreeSet<String>> {
    let mut names = BTreeSet::new();

    for entry in WalkDir::new(log_dir)
        .min_depth(1)
        .max_depth(1)
        .follow_links(true)
    {
        let entry = entry.map_err(|source| JourneyError::DirRead {
            path: log_dir.to_path_buf(),
            source,
        })?;
        if !entry.file_type().is_file() {
            continue;
        }
        let Some(name) = entry.file_name().to_str() else {
            continue;
        };
        if pattern.is_match(name) {
            names.insert(name.to_string());
        }
    }

    Ok(names)
}

/// Reconcile `store` against `log_dir` using the standard tag extractor
pub fn reconcile(log_dir: &Path, options: &SyncOptions, store: &mut IndexStore) -> Result<SyncReport> {
    reconcile_with(log_dir, options, store, extract_tags)
}

/// Reconcile `store` against `log_dir`, calling `extract` only for new or
/// changed entries
pub fn reconcile_with<F>(
    log_dir: &Path,
    options: &SyncOptions,
    store: &mut IndexStore,
    mut extract: F,
) -> Result<SyncReport>
where
    F: FnMut(&str) -> BTreeSet<String>,
{
    let mut report = SyncReport::default();
    let present = list_entries(log_dir, &options.pattern)?;

    for name in &present {
        let path = log_dir.join(name);
        let (data, digest) =
            read_and_hash(&path, options.fingerprint).map_err(|source| JourneyError::EntryRead {
                path: path.clone(),
                source,
            })?;

        let known = store.entries.get(name);
        if known.is_some_and(|record| record.digest == digest) {
            continue;
        }
        let is_new = known.is_none();

        let content = String::from_utf8_lossy(&data);
        let tags = extract(&*content);
        debug!(entry = %name, tags = tags.len(), new = is_new, "indexed entry");
        store.entries.insert(name.clone(), IndexRecord { digest, tags });

        if is_new {
            report.added.push(name.clone());
        } else {
            report.updated.push(name.clone());
        }
    }

    let stale: Vec<String> = store
        .entries
        .keys()
        .filter(|name| !present.contains(*name))
        .cloned()
        .collect();
    for name in stale {
        debug!(entry = %name, "pruned missing entry");
        store.entries.remove(&name);
        report.removed.push(name);
    }

    if report.changed() {
        info!(
            added = report.added.len(),
            updated = report.updated.len(),
            removed = report.removed.len(),
            "index changed"
        );
    }
    Ok(report)
}

/// Reconcile and save the store only if something changed
pub fn sync_and_save(log_dir: &Path, options: &SyncOptions, store: &mut IndexStore) -> Result<SyncReport> {
    let report = reconcile(log_dir, options, store)?;
    if report.changed() {
        store.save(log_dir)?;
    }
    Ok(report)
}
