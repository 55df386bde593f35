//! trawl - Unbounded regex search with an on-disk result cache
//!
//! trawl provides:
//! - Recursive regex search over configured workspace paths
//! - Search scope discovery from the workspace's .copilot-context.md
//! - CSV results plus a JSON metadata document per run, keyed by change id

use anyhow::Result;
use clap::Parser;

mod cache;
mod cli;
mod context;
mod core;
mod search;

fn main() -> Result<()> {
    let cli = cli::Cli::parse();
    cli::run(cli)
}
