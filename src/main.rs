// src/main.rs
// =============================================================================
// This is the entry point of our CLI application.
//
// What happens here:
// 1. Parse command-line arguments using clap and initialize logging
// 2. Read the README; a missing file aborts the run before any network call
// 3. Extract the currently-displayed stats as a fallback
// 4. Aggregate releases and stats from the GitHub API (serially)
// 5. Substitute both marker regions and overwrite the README in place
//
// All API failures are contained inside the aggregators; the only fatal
// errors are file I/O on the README itself.
// =============================================================================

// Module declarations - tells Rust about our other source files
mod aggregate; // src/aggregate/ - release and stats aggregation
mod cli; // src/cli.rs - command-line parsing
mod github; // src/github/ - GitHub API client
mod readme; // src/readme/ - marker substitution and stats parsing

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use cli::Cli;
use github::GithubClient;

#[tokio::main]
async fn main() {
    // RUST_LOG controls verbosity; default to info for this batch job
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    if let Err(e) = run().await {
        tracing::error!("{:#}", e);
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    let cli = Cli::parse();

    tracing::info!("updating {}", cli.readme.display());

    let contents = std::fs::read_to_string(&cli.readme)
        .with_context(|| format!("failed to read {}", cli.readme.display()))?;

    // Previously-displayed numbers, reused if the live fetch fails
    let fallback = readme::extract_current_stats(&contents);

    let client = GithubClient::with_base_url(&cli.token, &cli.api_url)?;

    let entries = aggregate::latest_per_repo(aggregate::fetch_releases(&client).await);
    let releases_md = aggregate::render_releases(&entries);
    let rewritten = readme::replace_chunk(&contents, "recent_releases", &releases_md, false);

    let stats = aggregate::fetch_stats(&client, fallback).await;
    let rewritten = readme::replace_chunk(&rewritten, "github_stats", &stats.to_string(), true);

    std::fs::write(&cli.readme, rewritten)
        .with_context(|| format!("failed to write {}", cli.readme.display()))?;

    tracing::info!("README update complete");
    Ok(())
}
