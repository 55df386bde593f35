//! CLI module - Command-line interface definition and run orchestration

use anyhow::{bail, Result};
use clap::Parser;
use std::path::PathBuf;
use std::time::Instant;

use crate::cache::meta::RunMetadata;
use crate::cache::store;
use crate::context;
use crate::search;

/// trawl - unbounded regex search with an on-disk result cache.
#[derive(Parser, Debug)]
#[command(name = "trawl")]
#[command(
    author,
    version,
    about,
    long_about = r#"trawl runs a regex over every file the glob admits under the configured
search paths, with no result cap and no deadline, and spools every match to
an on-disk cache instead of printing a truncated list.

Each run writes two files under <workspace>/copilot_impact_analysis/search_cache/:
- <change-id>_results.csv    one row per matching line
- <change-id>_metadata.json  a summary document describing the run

Search paths come from --paths, or from the modules: list in the workspace's
.copilot-context.md when --paths is omitted.

Examples:
    trawl --pattern "customer_email" --change-id "rename-email-2026-02-01"
    trawl --pattern "FROM\s+claims" --change-id claims-v2 --paths patches/claims patches/shared
    trawl --pattern "claims_v2" --change-id probe --json-output
"#
)]
pub struct Cli {
    /// Regex pattern to search for.
    #[arg(
        short,
        long,
        value_name = "REGEX",
        long_help = "Regex pattern to search for.\n\n\
Matching is case-insensitive unless --case-sensitive is given. An invalid\n\
pattern aborts the run before anything is written."
    )]
    pub pattern: String,

    /// Identifier for this analysis (used in output filenames).
    #[arg(
        short,
        long,
        value_name = "ID",
        long_help = "Identifier for this analysis.\n\n\
Names the two cache files: <ID>_results.csv and <ID>_metadata.json.\n\
Re-running with the same ID overwrites the previous run's files."
    )]
    pub change_id: String,

    /// File pattern to search (default: *.sql).
    #[arg(
        short = 'g',
        long,
        default_value = "*.sql",
        value_name = "GLOB",
        long_help = "Filename glob deciding which files are scanned.\n\n\
Plain globs match the file name; globs containing '/' match the path\n\
relative to each search path."
    )]
    pub file_glob: String,

    /// Paths to search (default: from .copilot-context.md).
    #[arg(
        long,
        value_name = "PATH",
        num_args = 0..,
        long_help = "Workspace-relative paths to search, in order.\n\n\
When omitted, the search scope is read from the modules: list of the\n\
workspace's .copilot-context.md. Having neither is an error."
    )]
    pub paths: Vec<String>,

    /// Workspace root directory (default: current directory).
    #[arg(
        short,
        long,
        default_value = ".",
        value_name = "DIR",
        long_help = "Workspace root directory.\n\n\
Search paths are interpreted relative to it, all emitted file paths are\n\
relative to it, and the cache lives under it."
    )]
    pub workspace: PathBuf,

    /// Enable case-sensitive search.
    #[arg(long)]
    pub case_sensitive: bool,

    /// Output metadata as JSON to stdout.
    #[arg(
        long,
        long_help = "Print the run's metadata document to stdout as JSON instead of the\n\
human-readable summary. The cache files are written either way."
    )]
    pub json_output: bool,
}

/// Run the CLI with parsed arguments
pub fn run(cli: Cli) -> Result<()> {
    // Get absolute workspace root
    let root = cli.workspace.canonicalize().unwrap_or(cli.workspace);

    // Resolve the search scope: explicit paths win over context discovery
    let search_scope = if !cli.paths.is_empty() {
        cli.paths
    } else {
        context::load_modules(&root.join(context::CONTEXT_FILE))?
    };
    if search_scope.is_empty() {
        bail!("No paths specified and .copilot-context.md not found or has no modules");
    }

    // Both compile failures are fatal before any scanning
    let regex = search::compile_pattern(&cli.pattern, cli.case_sensitive)?;
    let file_glob = search::compile_glob(&cli.file_glob)?;

    // Execute the scan
    let start = Instant::now();
    let outcome = search::search_paths(&root, &search_scope, &regex, &file_glob);
    let duration = start.elapsed();

    for warning in &outcome.warnings {
        eprintln!("Warning: {}", warning);
    }

    // Build metadata, then persist both cache files
    let metadata = RunMetadata::new(
        &cli.pattern,
        &cli.change_id,
        &outcome,
        search_scope,
        &cli.file_glob,
        cli.case_sensitive,
        duration,
    );

    let cache_path = store::ensure_cache_dir(&root)?;
    let csv_path = store::write_results_csv(&cache_path, &cli.change_id, &outcome.matches)?;
    let json_path = store::write_metadata(&cache_path, &cli.change_id, &metadata)?;

    if cli.json_output {
        println!("{}", serde_json::to_string_pretty(&metadata)?);
    } else {
        println!("Search completed in {:.2}s", duration.as_secs_f64());
        println!("Pattern: {}", cli.pattern);
        println!("Files searched: {}", metadata.files_searched);
        println!("Files matched: {}", metadata.files_matched);
        println!("Total matches: {}", metadata.result_count);
        println!("Results: {}", csv_path.display());
        println!("Metadata: {}", json_path.display());
    }

    Ok(())
}
