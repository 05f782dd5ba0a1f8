// src/aggregate/mod.rs
// =============================================================================
// This module turns GitHub API results into the display values the README
// regions need.
//
// Submodules:
// - releases: Collects, dedups, and renders recent releases
// - stats: Sums stars/forks and reads followers, with fallback on failure
//
// Both aggregators contain their own failures: a caller always gets a usable
// value back, never an error.
// =============================================================================

mod releases;
mod stats;

// Re-export the public API
pub use releases::{fetch_releases, latest_per_repo, render_releases, ReleaseEntry};
pub use stats::fetch_stats;
