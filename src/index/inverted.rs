//! Inverted index - tag to entry filenames, derived from the store on demand

use std::collections::{BTreeMap, BTreeSet};

use crate::core::model::TagCount;
use crate::index::store::IndexStore;

/// Tag -> filenames carrying it
pub type InvertedIndex = BTreeMap<String, BTreeSet<String>>;

/// Build the inverted index from every entry in the store
pub fn build(store: &IndexStore) -> InvertedIndex {
    let mut index = InvertedIndex::new();
    for (name, record) in &store.entries {
        for tag in &record.tags {
            index.entry(tag.clone()).or_default().insert(name.clone());
        }
    }
    index
}

/// All known tags with their entry counts, in tag order
pub fn tag_counts(index: &InvertedIndex) -> Vec<TagCount> {
    index
        .iter()
        .map(|(tag, files)| TagCount {
            tag: tag.clone(),
            count: files.len(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::index::store::IndexRecord;

    fn store(entries: &[(&str, Vec<&str>)]) -> IndexStore {
        let mut store = IndexStore::default();
        for (name, tags) in entries {
            store.entries.insert(
                name.to_string(),
                IndexRecord {
                    digest: "d".to_string(),
                    tags: tags.iter().map(|t| t.to_string()).collect(),
                },
            );
        }
        store
    }

    #[test]
    fn test_build_groups_files_by_tag() {
        let store = store(&[
            ("2024-01-01.md", vec!["work", "idea"]),
            ("2024-01-02.md", vec!["idea"]),
            ("2024-01-03.md", vec![]),
        ]);

        let index = build(&store);
        assert_eq!(index.len(), 2);
        assert_eq!(index["idea"].len(), 2);
        assert!(index["work"].contains("2024-01-01.md"));
        assert!(!index.values().any(|files| files.contains("2024-01-03.md")));
    }

    #[test]
    fn test_build_empty_store() {
        assert!(build(&IndexStore::default()).is_empty());
    }

    #[test]
    fn test_tag_counts_sorted() {
        let store = store(&[("2024-01-01.md", vec!["b", "a"]), ("2024-01-02.md", vec!["b"])]);
        let counts = tag_counts(&build(&store));
        let flat: Vec<_> = counts.iter().map(|c| (c.tag.as_str(), c.count)).collect();
        assert_eq!(flat, vec![("a", 1), ("b", 2)]);
    }
}
