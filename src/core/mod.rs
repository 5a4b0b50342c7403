//! Core module - Shared types and utilities
//!
//! This module provides:
//! - Configuration loading and validation
//! - The error taxonomy
//! - Journal path conventions
//! - Content fingerprinting
//! - Output records and rendering

pub mod config;
pub mod error;
pub mod model;
pub mod paths;
pub mod render;
pub mod util;
