//! Index module - Tag index over the journal directory
//!
//! Provides:
//! - tags: tag line extraction
//! - store: persisted index (.journey_db.json)
//! - sync: digest-based reconciliation with the directory
//! - inverted: tag -> entries mapping
//! - search: tag union search
//! - pager: next/previous/index selection over the last results

pub mod inverted;
pub mod pager;
pub mod search;
pub mod store;
pub mod sync;
pub mod tags;
