//! Cache store - Read/write search-cache files
//!
//! Each run leaves two files in the cache: `<change_id>_results.csv` with
//! every match, and `<change_id>_metadata.json` describing the run.

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

use crate::cache::meta::RunMetadata;
use crate::core::model::MatchRecord;
use crate::core::paths::{cache_dir, metadata_file_name, results_file_name};

/// Column header of every results CSV
pub const RESULTS_HEADER: [&str; 3] = ["file_path", "line_number", "match_content"];

/// Ensure the search cache directory exists under the workspace root
pub fn ensure_cache_dir(root: &Path) -> Result<PathBuf> {
    let cache = cache_dir(root);
    if !cache.exists() {
        fs::create_dir_all(&cache).context("Failed to create search cache directory")?;
    }
    Ok(cache)
}

/// Write match records to the run's results CSV
///
/// The header row is written even when there are no matches.
pub fn write_results_csv(
    cache_path: &Path,
    change_id: &str,
    records: &[MatchRecord],
) -> Result<PathBuf> {
    let file_path = cache_path.join(results_file_name(change_id));
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_path(&file_path)
        .with_context(|| format!("Failed to create results file: {:?}", file_path))?;

    writer.write_record(RESULTS_HEADER)?;
    for record in records {
        writer.serialize(record)?;
    }
    writer.flush()?;

    Ok(file_path)
}

/// Read match records back from a run's results CSV
#[allow(dead_code)]
pub fn read_results_csv(cache_path: &Path, change_id: &str) -> Result<Vec<MatchRecord>> {
    let file_path = cache_path.join(results_file_name(change_id));
    let mut reader = csv::Reader::from_path(&file_path)
        .with_context(|| format!("Failed to open results file: {:?}", file_path))?;

    let mut records = Vec::new();
    for record in reader.deserialize() {
        records.push(record?);
    }

    Ok(records)
}

/// Write the run's metadata document
pub fn write_metadata(cache_path: &Path, change_id: &str, meta: &RunMetadata) -> Result<PathBuf> {
    let file_path = cache_path.join(metadata_file_name(change_id));
    let json = serde_json::to_string_pretty(meta)?;
    fs::write(&file_path, json)
        .with_context(|| format!("Failed to write metadata file: {:?}", file_path))?;
    Ok(file_path)
}

/// Read a run's metadata document
#[allow(dead_code)]
pub fn read_metadata(cache_path: &Path, change_id: &str) -> Result<RunMetadata> {
    let file_path = cache_path.join(metadata_file_name(change_id));
    let content = fs::read_to_string(&file_path)
        .with_context(|| format!("Failed to read metadata file: {:?}", file_path))?;
    let meta = serde_json::from_str(&content)?;
    Ok(meta)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::model::ScanOutcome;
    use std::time::Duration;
    use tempfile::tempdir;

    #[test]
    fn test_ensure_cache_dir() {
        let temp = tempdir().unwrap();
        let cache = ensure_cache_dir(temp.path()).unwrap();
        assert!(cache.exists());
        assert!(cache.ends_with("copilot_impact_analysis/search_cache"));

        // Second call is a no-op on an existing directory
        let again = ensure_cache_dir(temp.path()).unwrap();
        assert_eq!(cache, again);
    }

    #[test]
    fn test_write_read_results_round_trip() {
        let temp = tempdir().unwrap();
        let cache = ensure_cache_dir(temp.path()).unwrap();

        let records = vec![
            MatchRecord::new("patches/claims/a.sql", 3, "SELECT * FROM claims_v2"),
            MatchRecord::new("b.sql", 12, r#"WHERE note = "a, b""#),
        ];
        write_results_csv(&cache, "chg-1", &records).unwrap();

        let read = read_results_csv(&cache, "chg-1").unwrap();
        assert_eq!(read, records);
    }

    #[test]
    fn test_results_header_written_without_matches() {
        let temp = tempdir().unwrap();
        let cache = ensure_cache_dir(temp.path()).unwrap();

        let path = write_results_csv(&cache, "chg-2", &[]).unwrap();
        let content = fs::read_to_string(path).unwrap();
        assert_eq!(content, "file_path,line_number,match_content\n");
    }

    #[test]
    fn test_write_read_metadata() {
        let temp = tempdir().unwrap();
        let cache = ensure_cache_dir(temp.path()).unwrap();

        let meta = RunMetadata::new(
            "FROM claims",
            "chg-3",
            &ScanOutcome::default(),
            vec!["patches".to_string()],
            "*.sql",
            true,
            Duration::from_secs(2),
        );
        write_metadata(&cache, "chg-3", &meta).unwrap();

        let read = read_metadata(&cache, "chg-3").unwrap();
        assert_eq!(read.pattern, "FROM claims");
        assert_eq!(read.search_scope, vec!["patches".to_string()]);
        assert!(read.case_sensitive);
        assert_eq!(read.duration_seconds, 2.0);
    }
}
