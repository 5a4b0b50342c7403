//! Search flow - sync the index, run a tag search, record and print it

use anyhow::Result;

use crate::core::model::SearchHit;
use crate::flows::Journal;
use crate::index::search::search;
use crate::index::store::IndexStore;
use crate::index::sync::sync_and_save;

/// Search `query` and return the hits with 1-based indices.
/// The store is always saved afterwards.
pub fn search_entries(journal: &Journal, query: &str) -> Result<Vec<SearchHit>> {
    let log_dir = journal.log_dir();
    let mut store = IndexStore::load(log_dir)?;
    sync_and_save(log_dir, &journal.sync_options(), &mut store)?;

    let results = search(query, &mut store);
    store.save(log_dir)?;

    Ok(results
        .iter()
        .enumerate()
        .map(|(i, entry)| SearchHit {
            index: i + 1,
            entry: entry.clone(),
            date: journal.pattern.display_name(entry).to_string(),
        })
        .collect())
}

/// Run the search command
pub fn run_search(journal: &Journal, query: &str) -> Result<()> {
    let hits = search_entries(journal, query)?;
    println!("{}", journal.renderer.render_hits(&hits));
    Ok(())
}
