//! Regex scanning over directory trees
//!
//! The scanner is deliberately unbounded: every file under every search
//! path is visited, every line of every candidate file is tested, and every
//! match is kept. Result caps and timeouts belong to the editor tools this
//! one replaces.

use anyhow::{Context, Result};
use glob::Pattern;
use regex::{Regex, RegexBuilder};
use std::fs;
use std::path::Path;
use walkdir::WalkDir;

use crate::core::model::{MatchRecord, ScanOutcome, ScanWarning};
use crate::core::paths;

/// Compile the search pattern, case-insensitive unless asked otherwise
pub fn compile_pattern(pattern: &str, case_sensitive: bool) -> Result<Regex> {
    RegexBuilder::new(pattern)
        .case_insensitive(!case_sensitive)
        .build()
        .with_context(|| format!("Invalid regex pattern: {}", pattern))
}

/// Compile the filename glob
pub fn compile_glob(file_glob: &str) -> Result<Pattern> {
    Pattern::new(file_glob).with_context(|| format!("Invalid file glob: {}", file_glob))
}

/// Search every file under `paths` (relative to `root`) for `regex`
///
/// Missing paths and unreadable files become warnings in the outcome
/// rather than aborting the scan.
pub fn search_paths(
    root: &Path,
    paths: &[String],
    regex: &Regex,
    file_glob: &Pattern,
) -> ScanOutcome {
    let mut outcome = ScanOutcome::default();

    for rel in paths {
        let search_path = paths::join_normalized(root, rel);
        if !search_path.exists() {
            outcome
                .warnings
                .push(ScanWarning::MissingPath { path: search_path });
            continue;
        }
        scan_tree(root, &search_path, regex, file_glob, &mut outcome);
    }

    outcome
}

/// Walk one search path, scanning every file the glob admits
fn scan_tree(
    root: &Path,
    search_path: &Path,
    regex: &Regex,
    file_glob: &Pattern,
    outcome: &mut ScanOutcome,
) {
    for entry in WalkDir::new(search_path).follow_links(false) {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) => {
                let path = err.path().unwrap_or(search_path).to_path_buf();
                let reason = match err.io_error() {
                    Some(io_err) => io_err.to_string(),
                    None => err.to_string(),
                };
                outcome
                    .warnings
                    .push(ScanWarning::UnreadableFile { path, reason });
                continue;
            }
        };

        if !entry.file_type().is_file() {
            continue;
        }
        if !glob_matches(file_glob, entry.path(), search_path) {
            continue;
        }

        outcome.files_searched += 1;
        match scan_file(root, entry.path(), regex) {
            Ok(mut records) => outcome.matches.append(&mut records),
            Err(warning) => outcome.warnings.push(warning),
        }
    }
}

/// Apply the filename glob: name-only for plain globs, against the
/// search-path-relative path for globs with directory components
fn glob_matches(pattern: &Pattern, path: &Path, search_path: &Path) -> bool {
    if pattern.as_str().contains('/') {
        path.strip_prefix(search_path)
            .map(|rel| pattern.matches_path(rel))
            .unwrap_or(false)
    } else {
        path.file_name()
            .and_then(|name| name.to_str())
            .map(|name| pattern.matches(name))
            .unwrap_or(false)
    }
}

/// Scan one file, returning its match records or the warning to report
///
/// Content is decoded lossily so undecodable bytes never fail the file.
fn scan_file(root: &Path, path: &Path, regex: &Regex) -> Result<Vec<MatchRecord>, ScanWarning> {
    let bytes = fs::read(path).map_err(|err| ScanWarning::UnreadableFile {
        path: path.to_path_buf(),
        reason: err.to_string(),
    })?;
    let content = String::from_utf8_lossy(&bytes);

    let rel = paths::make_relative(path, root).unwrap_or_else(|| paths::normalize_path(path));

    let mut records = Vec::new();
    for (idx, line) in content.lines().enumerate() {
        if regex.is_match(line) {
            records.push(MatchRecord::new(rel.clone(), (idx + 1) as u64, line));
        }
    }
    Ok(records)
}
