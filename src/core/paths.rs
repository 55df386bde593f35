//! Path normalization utilities
//!
//! Ensures all paths the tool emits are relative to the workspace root and
//! use '/' as separator, and locates the on-disk search cache.

use std::path::{Path, PathBuf};

/// Cache location under the workspace root, as a '/'-separated relative path
pub const CACHE_DIR: &str = "copilot_impact_analysis/search_cache";

/// Normalize a path to use '/' as separator (for cross-platform consistency)
pub fn normalize_path(path: &Path) -> String {
    path.to_string_lossy().replace('\\', "/")
}

/// Make a path relative to the root directory
pub fn make_relative(path: &Path, root: &Path) -> Option<String> {
    path.strip_prefix(root).ok().map(normalize_path)
}

/// Join a '/'-separated relative path onto a base directory
pub fn join_normalized(base: &Path, relative: &str) -> PathBuf {
    base.join(relative.replace('/', std::path::MAIN_SEPARATOR_STR))
}

/// Get the search cache directory for a given workspace root
pub fn cache_dir(root: &Path) -> PathBuf {
    join_normalized(root, CACHE_DIR)
}

/// Results CSV file name for a run
pub fn results_file_name(change_id: &str) -> String {
    format!("{}_results.csv", change_id)
}

/// Metadata JSON file name for a run
pub fn metadata_file_name(change_id: &str) -> String {
    format!("{}_metadata.json", change_id)
}
