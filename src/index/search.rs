//! Tag search over the inverted index
//!
//! A query is a space-separated list of tags; the result is the union of the
//! entries carrying any of them, ordered by filename.

use std::collections::BTreeSet;

use crate::index::inverted;
use crate::index::store::IndexStore;

/// Split a query into tag tokens
pub fn parse_query(query: &str) -> Vec<&str> {
    query.trim().split(' ').map(str::trim).collect()
}

/// Entries matching any tag of `query`, ordered by filename
pub fn find(query: &str, store: &IndexStore) -> Vec<String> {
    let index = inverted::build(store);
    let mut matches = BTreeSet::new();
    for tag in parse_query(query) {
        if let Some(files) = index.get(tag) {
            matches.extend(files.iter().cloned());
        }
    }
    matches.into_iter().collect()
}

/// Run a search and record it as the last search.
///
/// The cursor is deliberately left where it was, so `n`/`p` continue from the
/// previous position even against a new result list.
pub fn search(query: &str, store: &mut IndexStore) -> Vec<String> {
    let results = find(query, store);
    store.last_search_results = results.clone();
    store.last_query = Some(query.trim().to_string());
    results
}
