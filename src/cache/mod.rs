//! Cache module - Manages the on-disk search cache
//!
//! Provides:
//! - Result storage (`<change_id>_results.csv`, `<change_id>_metadata.json`)
//! - Run metadata management

pub mod meta;
pub mod store;
