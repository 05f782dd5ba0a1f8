// src/aggregate/stats.rs
// =============================================================================
// This module builds the `github_stats` value.
//
// Followers come straight from the authenticated user's profile; stars and
// forks are summed across owned, non-fork repositories.
//
// The aggregation is all-or-nothing: any failure (network, auth, rate limit)
// discards partial sums and returns the caller-supplied fallback unchanged,
// so the README keeps showing its previous numbers instead of zeros.
// =============================================================================

use anyhow::Result;

use crate::github::GithubClient;
use crate::readme::ProfileStats;

/// Aggregates profile statistics, falling back to `fallback` on any failure.
pub async fn fetch_stats(client: &GithubClient, fallback: ProfileStats) -> ProfileStats {
    tracing::info!("fetching profile stats");

    match try_fetch_stats(client).await {
        Ok(stats) => {
            tracing::info!("stats: {}", stats);
            stats
        }
        Err(e) => {
            tracing::error!("failed to fetch stats, using previous values: {:#}", e);
            fallback
        }
    }
}

async fn try_fetch_stats(client: &GithubClient) -> Result<ProfileStats> {
    let user = client.authenticated_user().await?;
    tracing::info!("authenticated as {}", user.login);

    let repos = client.owned_repositories().await?;

    let mut stars = 0;
    let mut forks = 0;
    for repo in repos.iter().filter(|r| !r.fork) {
        stars += repo.stargazers_count;
        forks += repo.forks_count;
    }

    Ok(ProfileStats {
        followers: user.followers,
        stars,
        forks,
    })
}
