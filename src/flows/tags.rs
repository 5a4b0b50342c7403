//! List every tag known to the index

use anyhow::Result;

use crate::core::model::TagCount;
use crate::flows::Journal;
use crate::index::inverted::{build, tag_counts};
use crate::index::store::IndexStore;
use crate::index::sync::sync_and_save;

/// All tags with entry counts, after syncing the index
pub fn list_tags(journal: &Journal) -> Result<Vec<TagCount>> {
    let log_dir = journal.log_dir();
    let mut store = IndexStore::load(log_dir)?;
    sync_and_save(log_dir, &journal.sync_options(), &mut store)?;
    Ok(tag_counts(&build(&store)))
}

/// Run the list-tags command
pub fn run_tags(journal: &Journal) -> Result<()> {
    let tags = list_tags(journal)?;
    println!("{}", journal.renderer.render_tags(&tags));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::flows::testing::journal;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_list_tags() {
        let temp = tempdir().unwrap();
        fs::write(temp.path().join("2024-01-01.md"), "tags: work, idea").unwrap();
        fs::write(temp.path().join("2024-01-02.md"), "Tags: idea").unwrap();
        fs::write(temp.path().join("draft.md"), "tags: ignored").unwrap();
        let journal = journal(temp.path());

        let tags = list_tags(&journal).unwrap();
        let flat: Vec<_> = tags.iter().map(|t| (t.tag.as_str(), t.count)).collect();
        assert_eq!(flat, vec![("idea", 2), ("work", 1)]);
    }
}
