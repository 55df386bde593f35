//! Core module - Contains the fundamental data structures and utilities
//!
//! This module provides:
//! - Search result model (MatchRecord, ScanWarning, ScanOutcome)
//! - Path normalization utilities

pub mod model;
pub mod paths;
