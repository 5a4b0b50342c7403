//! Open the entry for today (or a given date) in the editor

use anyhow::Result;
use chrono::{Local, NaiveDate};
use std::path::PathBuf;
use tracing::info;

use crate::backends::editor::open_in_editor;
use crate::flows::Journal;

/// Path of the entry for `date`
pub fn dated_entry_path(journal: &Journal, date: NaiveDate) -> PathBuf {
    journal.entry_path(&journal.pattern.filename_for(date))
}

/// Open the entry for `date`, defaulting to today's local date
pub fn run_today(journal: &Journal, date: Option<NaiveDate>) -> Result<()> {
    let date = date.unwrap_or_else(|| Local::now().date_naive());
    let path = dated_entry_path(journal, date);
    info!(path = %path.display(), "opening dated entry");
    open_in_editor(&journal.config.editor, &path)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::flows::testing::journal;
    use tempfile::tempdir;

    #[test]
    fn test_dated_entry_path() {
        let temp = tempdir().unwrap();
        let journal = journal(temp.path());
        let date = NaiveDate::from_ymd_opt(2024, 1, 2).unwrap();

        let path = dated_entry_path(&journal, date);
        assert!(path.ends_with("2024-01-02.md"));
        assert!(path.is_absolute());
    }

    #[test]
    fn test_dated_entry_path_with_relative_log_dir() {
        let journal = journal(std::path::Path::new("journal"));
        let date = NaiveDate::from_ymd_opt(2024, 1, 3).unwrap();

        let path = dated_entry_path(&journal, date);
        assert!(path.is_absolute());
        assert!(path.ends_with("journal/2024-01-03.md"));
    }

    #[cfg(unix)]
    #[test]
    fn test_run_today_does_not_touch_index() {
        let temp = tempdir().unwrap();
        let journal = journal(temp.path());

        run_today(&journal, None).unwrap();
        assert!(!crate::core::paths::index_path(temp.path()).exists());
    }
}
