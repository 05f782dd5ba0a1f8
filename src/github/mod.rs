// src/github/mod.rs
// =============================================================================
// This module handles talking to the GitHub REST API.
//
// Currently implements:
// - An authenticated client (bearer token, API version header, timeout)
// - Listing repositories owned by the authenticated user (paginated)
// - Reading the authenticated user's follower count
// - Listing recent releases for a repository
//
// Submodules:
// - client: The reqwest-based API client
// - types: serde models for the API payloads we consume
// =============================================================================

mod client;
mod types;

// Re-export the public API
pub use client::GithubClient;
pub use types::{AuthenticatedUser, Release, Repository};
