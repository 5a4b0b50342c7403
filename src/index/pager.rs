//! Pagination over the last search results
//!
//! A selector is `n` (next), `p` (previous) or a raw integer index. All three
//! wrap around the result list with true modulo, so a cursor of -1 followed by
//! `n` lands on the first entry and `p` lands on the last.

use std::str::FromStr;

use crate::core::error::{JourneyError, Result};

/// Parsed selector
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selector {
    Next,
    Previous,
    /// Raw 0-based index, may be negative or out of range
    Index(i64),
}

impl FromStr for Selector {
    type Err = JourneyError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim() {
            "n" => Ok(Selector::Next),
            "p" => Ok(Selector::Previous),
            other => other
                .parse::<i64>()
                .map(Selector::Index)
                .map_err(|_| JourneyError::InvalidSelector(s.to_string())),
        }
    }
}

impl Selector {
    /// Parse a selector given by a user who sees 1-based indices
    pub fn from_user(s: &str) -> Result<Self> {
        match s.parse()? {
            Selector::Index(i) => Ok(Selector::Index(i.saturating_sub(1))),
            other => Ok(other),
        }
    }
}

/// Resolve a selector against `results` and the current `cursor`.
///
/// Returns the selected filename and the new cursor. Fails with
/// `JourneyError::NoResults` when `results` is empty.
pub fn resolve<'a>(selector: Selector, results: &'a [String], cursor: i64) -> Result<(&'a str, i64)> {
    if results.is_empty() {
        return Err(JourneyError::NoResults);
    }
    let len = results.len() as i64;
    let target = match selector {
        Selector::Next => cursor.wrapping_add(1),
        Selector::Previous => cursor.wrapping_sub(1),
        Selector::Index(i) => i,
    };
    let index = target.rem_euclid(len);
    Ok((results[index as usize].as_str(), index))
}
