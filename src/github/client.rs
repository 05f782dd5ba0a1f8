// src/github/client.rs
// =============================================================================
// This module implements the authenticated GitHub REST API client.
//
// Strategy:
// - One reqwest Client built up front with a timeout (connection pooling)
// - Bearer token auth plus the User-Agent and API version headers GitHub
//   requires
// - Explicit pagination for repository listing: per_page=100 until a short
//   page comes back
//
// All requests are made serially by the callers; the client itself holds no
// mutable state.
// =============================================================================

use std::time::Duration;

use anyhow::{anyhow, Context, Result};
use reqwest::Client;
use serde::de::DeserializeOwned;

use super::types::{AuthenticatedUser, Release, Repository};

/// Repositories are listed in pages of this size until a short page signals
/// the end
const REPOS_PER_PAGE: usize = 100;

/// At most this many releases are read per repository
const RELEASES_PER_REPO: usize = 5;

/// Authenticated handle to the GitHub REST API
pub struct GithubClient {
    http: Client,
    token: String,
    base_url: String,
}

impl GithubClient {
    /// Creates a client against the public GitHub API.
    ///
    /// An empty token is allowed; authenticated endpoints will then fail and
    /// the aggregators fall back as designed.
    pub fn new(token: &str) -> Result<Self> {
        Self::with_base_url(token, "https://api.github.com")
    }

    /// Creates a client against an alternate API base URL (GitHub Enterprise,
    /// or a local stand-in under test).
    pub fn with_base_url(token: &str, base_url: &str) -> Result<Self> {
        let http = Client::builder()
            .timeout(Duration::from_secs(10))
            .build()
            .context("failed to create HTTP client")?;

        Ok(Self {
            http,
            token: token.to_string(),
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Fetches the authenticated user's profile (login and follower count)
    pub async fn authenticated_user(&self) -> Result<AuthenticatedUser> {
        self.get_json("/user").await
    }

    /// Lists every repository owned by the authenticated user.
    ///
    /// Fork filtering is left to the callers so the same listing serves both
    /// aggregators.
    pub async fn owned_repositories(&self) -> Result<Vec<Repository>> {
        let mut repos = Vec::new();
        let mut page = 1;

        loop {
            let path = format!("/user/repos?type=owner&per_page={REPOS_PER_PAGE}&page={page}");
            let batch: Vec<Repository> = self.get_json(&path).await?;
            let last_page = batch.len() < REPOS_PER_PAGE;
            repos.extend(batch);

            if last_page {
                break;
            }
            page += 1;
        }

        Ok(repos)
    }

    /// Lists the most recent releases of a repository, newest first per the
    /// API's native ordering, capped at 5.
    pub async fn recent_releases(&self, full_name: &str) -> Result<Vec<Release>> {
        let path = format!("/repos/{full_name}/releases?per_page={RELEASES_PER_REPO}");
        self.get_json(&path).await
    }

    // Performs a GET against the API and deserializes the JSON response.
    //
    // Non-2xx responses become errors carrying the path and status, so the
    // aggregators can log something actionable before falling back.
    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let url = format!("{}{}", self.base_url, path);

        let response = self
            .http
            .get(&url)
            .bearer_auth(&self.token)
            .header("User-Agent", "readme-refresh")
            .header("Accept", "application/vnd.github+json")
            .header("X-GitHub-Api-Version", "2022-11-28")
            .send()
            .await
            .with_context(|| format!("request to {} failed", path))?;

        let status = response.status();
        if !status.is_success() {
            return Err(anyhow!("GitHub API request to {} failed: HTTP {}", path, status));
        }

        response
            .json()
            .await
            .with_context(|| format!("invalid JSON from {}", path))
    }
}
