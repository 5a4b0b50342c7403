//! Result records emitted by the CLI

use serde::Serialize;

/// One line of a search listing
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchHit {
    /// 1-based index accepted by `--open`
    pub index: usize,
    /// Entry filename
    pub entry: String,
    /// Entry date (filename without extension)
    pub date: String,
}

/// One line of a tag listing
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TagCount {
    pub tag: String,
    /// Number of entries carrying the tag
    pub count: usize,
}
