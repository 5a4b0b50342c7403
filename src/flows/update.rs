//! Force a reconciliation of the index with the journal directory

use anyhow::Result;

use crate::flows::Journal;
use crate::index::store::IndexStore;
use crate::index::sync::{sync_and_save, SyncReport};

/// Reconcile the index and save it if anything changed
pub fn update_index(journal: &Journal) -> Result<SyncReport> {
    let log_dir = journal.log_dir();
    let mut store = IndexStore::load(log_dir)?;
    Ok(sync_and_save(log_dir, &journal.sync_options(), &mut store)?)
}

/// Run the force-update command
pub fn run_update(journal: &Journal) -> Result<()> {
    let report = update_index(journal)?;
    if report.changed() {
        println!(
            "Updated the database! ({} added, {} changed, {} removed)",
            report.added.len(),
            report.updated.len(),
            report.removed.len()
        );
    } else {
        println!("There was nothing to be updated.");
    }
    Ok(())
}
