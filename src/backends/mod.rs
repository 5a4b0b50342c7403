//! Backends module - External process integrations
//!
//! Provides:
//! - editor: launching the configured editor on an entry

pub mod editor;
