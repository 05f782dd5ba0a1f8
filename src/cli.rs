// src/cli.rs
// =============================================================================
// This file defines our command-line interface using the `clap` crate.
//
// The tool has exactly one job, so there are no subcommands: every flag has
// a default and a bare `readme-refresh` run updates ./README.md using the
// GH_TOKEN environment variable.
// =============================================================================

use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(
    name = "readme-refresh",
    version,
    about = "Refreshes the release and stats sections of a GitHub profile README",
    long_about = "readme-refresh queries the GitHub API for your repositories' releases and \
                  star/fork/follower counts, then rewrites the marked regions of your profile \
                  README in place. On API failures the previously-displayed stats are kept."
)]
pub struct Cli {
    /// Path to the README to update in place
    #[arg(long, default_value = "README.md")]
    pub readme: PathBuf,

    /// GitHub bearer token; read from GH_TOKEN when the flag is absent.
    /// An empty token makes authenticated calls fail, which keeps the
    /// previously-displayed values.
    #[arg(long, env = "GH_TOKEN", default_value = "", hide_env_values = true)]
    pub token: String,

    /// GitHub API base URL (override for GitHub Enterprise)
    #[arg(long, default_value = "https://api.github.com")]
    pub api_url: String,
}
