//! Run metadata management

use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::core::model::ScanOutcome;
use crate::core::paths::{metadata_file_name, results_file_name, CACHE_DIR};

/// Phase label recorded in every run's metadata
pub const SEARCH_PHASE: &str = "comprehensive";

/// Metadata document stored next to each run's results CSV
///
/// Field order matters: the document is consumed by tooling that also reads
/// the bounded editor-search output, so the shape stays identical, with
/// `limit_reached` and `timeout` permanently false.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunMetadata {
    /// Always `"comprehensive"`
    pub search_phase: String,

    /// The regex that was searched
    pub pattern: String,

    /// Total number of match rows written
    pub result_count: usize,

    /// Files examined, including files with no matches
    pub files_searched: usize,

    /// Distinct files with at least one match
    pub files_matched: usize,

    /// Never true: this tool has no result cap
    pub limit_reached: bool,

    /// Never true: this tool has no deadline
    pub timeout: bool,

    /// Workspace-relative path of the results CSV
    pub results_file: String,

    /// Workspace-relative path of this document
    pub metadata_file: String,

    /// The search paths that were resolved for the run
    pub search_scope: Vec<String>,

    /// Filename glob applied during enumeration
    pub file_glob: String,

    /// Whether matching was case-sensitive
    pub case_sensitive: bool,

    /// Wall-clock duration of the scan, rounded to 2 decimal places
    pub duration_seconds: f64,
}

impl RunMetadata {
    pub fn new(
        pattern: &str,
        change_id: &str,
        outcome: &ScanOutcome,
        search_scope: Vec<String>,
        file_glob: &str,
        case_sensitive: bool,
        duration: Duration,
    ) -> Self {
        Self {
            search_phase: SEARCH_PHASE.to_string(),
            pattern: pattern.to_string(),
            result_count: outcome.matches.len(),
            files_searched: outcome.files_searched,
            files_matched: outcome.files_matched(),
            limit_reached: false,
            timeout: false,
            results_file: format!("{}/{}", CACHE_DIR, results_file_name(change_id)),
            metadata_file: format!("{}/{}", CACHE_DIR, metadata_file_name(change_id)),
            search_scope,
            file_glob: file_glob.to_string(),
            case_sensitive,
            duration_seconds: round2(duration.as_secs_f64()),
        }
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
