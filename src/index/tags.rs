//! Tag extraction
//!
//! An entry declares tags on one or more lines of the form
//! `tags: a, b, some tag`. The keyword is case-insensitive; tags keep their
//! case, have internal spaces replaced by `-`, and are deduplicated.

use std::collections::BTreeSet;

/// Keyword introducing a tag declaration line
pub const TAGS_KEYWORD: &str = "tags";

/// Replacement for whitespace inside a tag
pub const TAG_JOIN_CHAR: &str = "-";

/// Extract the set of tags declared anywhere in `content`
pub fn extract_tags(content: &str) -> BTreeSet<String> {
    let mut tags = BTreeSet::new();

    for line in content.lines() {
        let mut parts = line.trim().split(':');
        let keyword = parts.next().unwrap_or_default();
        let Some(rest) = parts.next() else {
            continue;
        };
        if !keyword.trim().eq_ignore_ascii_case(TAGS_KEYWORD) {
            continue;
        }

        tags.extend(rest.split(',').filter_map(normalize_tag));
    }

    tags
}

/// Trim a raw tag and join internal spaces; `None` for empty segments
pub fn normalize_tag(raw: &str) -> Option<String> {
    let tag = raw.trim().replace(' ', TAG_JOIN_CHAR);
    if tag.is_empty() {
        None
    } else {
        Some(tag)
    }
}
