//! Journal path conventions
//!
//! Entries live flat in the journal directory as `YYYY-MM-DD.<ext>`; the index
//! sits next to them under a reserved dotfile name.

use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;
use std::path::{Path, PathBuf};

/// Reserved index filename inside the journal directory
pub const INDEX_FILE_NAME: &str = ".journey_db.json";

/// Default entry extension
pub const DEFAULT_EXTENSION: &str = "md";

/// Date format used in entry filenames
pub const DATE_FORMAT: &str = "%Y-%m-%d";

static DEFAULT_PATTERN: Lazy<EntryPattern> = Lazy::new(|| EntryPattern::new(DEFAULT_EXTENSION));

/// Matches entry filenames for one configured extension
#[derive(Debug, Clone)]
pub struct EntryPattern {
    extension: String,
    re: Regex,
}

impl EntryPattern {
    pub fn new(extension: &str) -> Self {
        let re = Regex::new(&format!(r"^\d{{4}}-\d{{2}}-\d{{2}}\.{}$", regex::escape(extension)))
            .expect("Invalid entry filename regex");
        Self {
            extension: extension.to_string(),
            re,
        }
    }

    /// Whether a bare filename names a journal entry
    pub fn is_match(&self, filename: &str) -> bool {
        self.re.is_match(filename)
    }

    /// Filename of the entry for a given date
    pub fn filename_for(&self, date: NaiveDate) -> String {
        format!("{}.{}", date.format(DATE_FORMAT), self.extension)
    }

    /// Strip the extension for display (`2024-01-01.md` -> `2024-01-01`)
    pub fn display_name<'a>(&self, filename: &'a str) -> &'a str {
        filename
            .strip_suffix(self.extension.as_str())
            .and_then(|rest| rest.strip_suffix('.'))
            .unwrap_or(filename)
    }
}

impl Default for EntryPattern {
    fn default() -> Self {
        DEFAULT_PATTERN.clone()
    }
}

/// Path of the persisted index for a journal directory
pub fn index_path(log_dir: &Path) -> PathBuf {
    log_dir.join(INDEX_FILE_NAME)
}

/// Parse a `YYYY-MM-DD` date argument
pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), DATE_FORMAT).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_pattern_matches_dated_files() {
        let pattern = EntryPattern::default();
        assert!(pattern.is_match("2024-01-01.md"));
        assert!(pattern.is_match("1999-12-31.md"));
    }

    #[test]
    fn test_entry_pattern_rejects_other_files() {
        let pattern = EntryPattern::default();
        assert!(!pattern.is_match(".journey_db.json"));
        assert!(!pattern.is_match("2024-01-01.txt"));
        assert!(!pattern.is_match("2024-1-01.md"));
        assert!(!pattern.is_match("2024-01-01.md.bak"));
        assert!(!pattern.is_match("x2024-01-01.md"));
        // the dot before the extension is literal
        assert!(!pattern.is_match("2024-01-01xmd"));
    }

    #[test]
    fn test_entry_pattern_custom_extension() {
        let pattern = EntryPattern::new("txt");
        assert!(pattern.is_match("2024-01-01.txt"));
        assert!(!pattern.is_match("2024-01-01.md"));
    }

    #[test]
    fn test_filename_for_date() {
        let pattern = EntryPattern::default();
        let date = NaiveDate::from_ymd_opt(2024, 3, 7).unwrap();
        assert_eq!(pattern.filename_for(date), "2024-03-07.md");
    }

    #[test]
    fn test_display_name() {
        let pattern = EntryPattern::default();
        assert_eq!(pattern.display_name("2024-03-07.md"), "2024-03-07");
        assert_eq!(pattern.display_name("notes"), "notes");
    }

    #[test]
    fn test_index_path() {
        let root = Path::new("/journal");
        assert_eq!(index_path(root), PathBuf::from("/journal/.journey_db.json"));
    }

    #[test]
    fn test_parse_date() {
        assert_eq!(parse_date("2024-02-29"), NaiveDate::from_ymd_opt(2024, 2, 29));
        assert_eq!(parse_date("2023-02-29"), None);
        assert_eq!(parse_date("yesterday"), None);
    }
}
