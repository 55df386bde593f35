//! Search result model
//!
//! Every matching line the scanner finds maps to a `MatchRecord` row before
//! being written to the result cache, and every non-fatal problem maps to a
//! `ScanWarning`. The CLI layer decides how both are surfaced.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::PathBuf;
use thiserror::Error;

/// Longest `match_content` stored for a single match, in characters
pub const MAX_MATCH_CONTENT: usize = 200;

/// A single matching line, one row of the results CSV
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchRecord {
    /// Path relative to the workspace root, using '/' as separator
    pub file_path: String,

    /// 1-based line number of the match
    pub line_number: u64,

    /// The matching line, trimmed and capped at `MAX_MATCH_CONTENT` characters
    pub match_content: String,
}

impl MatchRecord {
    /// Create a record from a raw line, applying the trim and length cap
    pub fn new(file_path: impl Into<String>, line_number: u64, line: &str) -> Self {
        Self {
            file_path: file_path.into(),
            line_number,
            match_content: cap_chars(line.trim(), MAX_MATCH_CONTENT),
        }
    }
}

/// Truncate to at most `max` characters, never splitting a multi-byte char
fn cap_chars(s: &str, max: usize) -> String {
    s.chars().take(max).collect()
}

/// Non-fatal conditions encountered during a scan
///
/// Collected instead of printed in place so the caller controls where and
/// how they are reported.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScanWarning {
    /// A configured search path is absent from the workspace
    #[error("Path does not exist: {}", .path.display())]
    MissingPath { path: PathBuf },

    /// A file or directory entry could not be read
    #[error("Could not read {}: {}", .path.display(), .reason)]
    UnreadableFile { path: PathBuf, reason: String },
}

/// Everything a scan produces: ordered matches, the number of files
/// examined, and the warnings raised along the way
#[derive(Debug, Default)]
pub struct ScanOutcome {
    pub matches: Vec<MatchRecord>,
    pub files_searched: usize,
    pub warnings: Vec<ScanWarning>,
}

impl ScanOutcome {
    /// Number of distinct files with at least one match
    pub fn files_matched(&self) -> usize {
        self.matches
            .iter()
            .map(|m| m.file_path.as_str())
            .collect::<HashSet<_>>()
            .len()
    }
}
