//! Open an entry from the last search results
//!
//! The selector is `n`, `p`, or a 1-based index as printed by search. The new
//! cursor is always written back, even if it did not move.

use anyhow::Result;
use std::path::PathBuf;
use tracing::info;

use crate::backends::editor::open_in_editor;
use crate::core::error::JourneyError;
use crate::flows::Journal;
use crate::index::pager::{resolve, Selector};
use crate::index::store::IndexStore;
use crate::index::sync::sync_and_save;

/// An entry picked from the last search
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    pub entry: String,
    pub path: PathBuf,
    /// 0-based cursor now stored in the index
    pub cursor: i64,
    pub total: usize,
}

/// Resolve `selector` against the last search and persist the new cursor
pub fn select_entry(journal: &Journal, selector: &str) -> Result<Selection> {
    let selector = Selector::from_user(selector)?;
    let log_dir = journal.log_dir();
    let mut store = IndexStore::load(log_dir)?;
    sync_and_save(log_dir, &journal.sync_options(), &mut store)?;

    if store.last_search_results.is_empty() {
        let err = if store.has_searched() {
            JourneyError::NoResults
        } else {
            JourneyError::NoSearch
        };
        return Err(err.into());
    }

    let (entry, cursor) = resolve(selector, &store.last_search_results, store.last_search_index)?;
    let entry = entry.to_string();
    store.last_search_index = cursor;
    store.save(log_dir)?;

    Ok(Selection {
        path: journal.entry_path(&entry),
        entry,
        cursor,
        total: store.last_search_results.len(),
    })
}

/// Run the open command
pub fn run_open(journal: &Journal, selector: &str) -> Result<()> {
    let selection = select_entry(journal, selector)?;
    journal.note(format!(
        "Opening {} ({}/{})",
        journal.pattern.display_name(&selection.entry),
        selection.cursor + 1,
        selection.total
    ));
    info!(entry = %selection.entry, cursor = selection.cursor, "opening search result");
    open_in_editor(&journal.config.editor, &selection.path)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::flows::search::search_entries;
    use crate::flows::testing::journal;
    use std::fs;
    use tempfile::tempdir;

    fn journal_with_entries(dir: &std::path::Path) -> Journal {
        for day in 1..=3 {
            fs::write(dir.join(format!("2024-01-0{}.md", day)), "tags: idea").unwrap();
        }
        journal(dir)
    }

    fn error_of(err: anyhow::Error) -> JourneyError {
        err.downcast::<JourneyError>().unwrap()
    }

    #[test]
    fn test_open_before_any_search() {
        let temp = tempdir().unwrap();
        let journal = journal_with_entries(temp.path());

        let err = error_of(select_entry(&journal, "1").unwrap_err());
        assert!(matches!(err, JourneyError::NoSearch));
    }

    #[test]
    fn test_open_after_empty_search() {
        let temp = tempdir().unwrap();
        let journal = journal_with_entries(temp.path());
        search_entries(&journal, "missing").unwrap();

        let err = error_of(select_entry(&journal, "n").unwrap_err());
        assert!(matches!(err, JourneyError::NoResults));
    }

    #[test]
    fn test_open_by_one_based_index() {
        let temp = tempdir().unwrap();
        let journal = journal_with_entries(temp.path());
        search_entries(&journal, "idea").unwrap();

        let selection = select_entry(&journal, "2").unwrap();
        assert_eq!(selection.entry, "2024-01-02.md");
        assert_eq!(selection.cursor, 1);
        assert_eq!(IndexStore::load(temp.path()).unwrap().last_search_index, 1);
    }

    #[test]
    fn test_next_and_previous_walk_results() {
        let temp = tempdir().unwrap();
        let journal = journal_with_entries(temp.path());
        search_entries(&journal, "idea").unwrap();

        assert_eq!(select_entry(&journal, "n").unwrap().entry, "2024-01-01.md");
        assert_eq!(select_entry(&journal, "n").unwrap().entry, "2024-01-02.md");
        assert_eq!(select_entry(&journal, "p").unwrap().entry, "2024-01-01.md");
        assert_eq!(select_entry(&journal, "p").unwrap().entry, "2024-01-03.md");
    }

    #[test]
    fn test_cursor_survives_new_search() {
        let temp = tempdir().unwrap();
        let journal = journal_with_entries(temp.path());
        search_entries(&journal, "idea").unwrap();
        select_entry(&journal, "2").unwrap();

        // a new search keeps the cursor, so "n" continues from index 1
        search_entries(&journal, "idea").unwrap();
        assert_eq!(select_entry(&journal, "n").unwrap().cursor, 2);
    }

    #[test]
    fn test_cursor_saved_even_when_unchanged() {
        let temp = tempdir().unwrap();
        let journal = journal_with_entries(temp.path());
        search_entries(&journal, "idea").unwrap();
        select_entry(&journal, "1").unwrap();

        // rewrite the index compactly; a forced save restores the indented layout
        let index = crate::core::paths::index_path(temp.path());
        let store = IndexStore::load(temp.path()).unwrap();
        fs::write(&index, serde_json::to_string(&store).unwrap()).unwrap();

        select_entry(&journal, "1").unwrap();
        let text = fs::read_to_string(&index).unwrap();
        assert!(text.contains("\n    \"last_search_index\": 0,"));
    }

    #[test]
    fn test_invalid_selector() {
        let temp = tempdir().unwrap();
        let journal = journal_with_entries(temp.path());

        let err = error_of(select_entry(&journal, "last").unwrap_err());
        assert!(matches!(err, JourneyError::InvalidSelector(_)));
    }

    #[cfg(unix)]
    #[test]
    fn test_run_open_launches_editor() {
        let temp = tempdir().unwrap();
        let journal = journal_with_entries(temp.path());
        search_entries(&journal, "idea").unwrap();

        run_open(&journal, "3").unwrap();
        assert_eq!(IndexStore::load(temp.path()).unwrap().last_search_index, 2);
    }
}
