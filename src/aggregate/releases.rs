// src/aggregate/releases.rs
// =============================================================================
// This module builds the `recent_releases` section.
//
// Pipeline:
// 1. Walk owned, non-fork repositories serially
// 2. Take at most the first 5 releases of each (API order, newest first)
// 3. Sort all collected entries by publish date descending
// 4. Keep only the most recent entry per repository
// 5. Truncate to 6 and render as a <br>-joined bullet list
//
// A failure on one repository skips that repository and keeps going; a
// failure listing repositories yields an empty collection. Either way the
// caller gets a list, never an error.
// =============================================================================

use std::collections::HashSet;

use crate::github::{GithubClient, Release, Repository};

/// The rendered list shows at most this many repositories
const MAX_DISPLAYED: usize = 6;

/// Rendered when no repository has any release
const EMPTY_PLACEHOLDER: &str = "• No releases yet";

/// One release shaped for display
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReleaseEntry {
    /// Repository name (no owner prefix)
    pub repo: String,
    /// Browser URL of the repository
    pub repo_url: String,
    /// Repository description, empty when unset
    pub description: String,
    /// Release title with the repository name stripped, or the tag name when
    /// there is no title
    pub label: String,
    /// Publish date as YYYY-MM-DD, empty when the release has none
    pub published_at: String,
    /// Browser URL of the release page
    pub url: String,
}

/// Collects release entries across every owned, non-fork repository.
///
/// Per-repository failures are logged and skipped; a failure enumerating the
/// repositories themselves yields an empty list.
pub async fn fetch_releases(client: &GithubClient) -> Vec<ReleaseEntry> {
    tracing::info!("fetching releases");

    let repos = match client.owned_repositories().await {
        Ok(repos) => repos,
        Err(e) => {
            tracing::error!("failed to list repositories for releases: {:#}", e);
            return Vec::new();
        }
    };

    let mut entries = Vec::new();

    for repo in repos.iter().filter(|r| !r.fork) {
        match client.recent_releases(&repo.full_name).await {
            Ok(releases) => {
                if !releases.is_empty() {
                    tracing::info!("{}: {} release(s)", repo.name, releases.len());
                }
                entries.extend(releases.iter().map(|release| entry_for(repo, release)));
            }
            Err(e) => {
                tracing::warn!("skipping releases for {}: {:#}", repo.name, e);
            }
        }
    }

    tracing::info!("collected {} release entries", entries.len());
    entries
}

// Shapes one API release into a display entry.
//
// The label keeps the "strip, then fall back only when the title is absent"
// rule: a title that strips down to nothing stays empty rather than falling
// back to the tag.
fn entry_for(repo: &Repository, release: &Release) -> ReleaseEntry {
    let label = match release.name.as_deref() {
        Some(title) if !title.is_empty() => title.replace(&repo.name, "").trim().to_string(),
        _ => release.tag_name.clone(),
    };

    let published_at = release
        .published_at
        .map(|dt| dt.format("%Y-%m-%d").to_string())
        .unwrap_or_default();

    ReleaseEntry {
        repo: repo.name.clone(),
        repo_url: repo.html_url.clone(),
        description: repo.description.clone().unwrap_or_default(),
        label,
        published_at,
        url: release.html_url.clone(),
    }
}

/// Sorts entries newest first, keeps one entry per repository, and truncates
/// to the display limit.
///
/// Lexicographic order on YYYY-MM-DD strings is chronological, and the sort
/// is stable, so ties keep their collection order.
pub fn latest_per_repo(mut entries: Vec<ReleaseEntry>) -> Vec<ReleaseEntry> {
    entries.sort_by(|a, b| b.published_at.cmp(&a.published_at));

    let mut seen = HashSet::new();
    entries.retain(|entry| seen.insert(entry.repo.clone()));
    entries.truncate(MAX_DISPLAYED);
    entries
}

/// Renders entries as the `recent_releases` region body: one bullet per
/// repository, joined by `<br>`, or a placeholder when there is nothing to
/// show.
pub fn render_releases(entries: &[ReleaseEntry]) -> String {
    if entries.is_empty() {
        return EMPTY_PLACEHOLDER.to_string();
    }

    entries
        .iter()
        .map(|e| {
            format!(
                "• [{repo} {label}]({url}) - {published}",
                repo = e.repo,
                label = e.label,
                url = e.url,
                published = e.published_at
            )
        })
        .collect::<Vec<_>>()
        .join("<br>")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn repo(name: &str) -> Repository {
        Repository {
            name: name.to_string(),
            full_name: format!("octocat/{name}"),
            html_url: format!("https://github.com/octocat/{name}"),
            description: Some(format!("{name} description")),
            fork: false,
            stargazers_count: 0,
            forks_count: 0,
        }
    }

    fn release(title: Option<&str>, tag: &str, published: Option<&str>) -> Release {
        Release {
            name: title.map(String::from),
            tag_name: tag.to_string(),
            published_at: published.map(|d| {
                format!("{d}T12:00:00Z")
                    .parse()
                    .expect("test timestamp parses")
            }),
            html_url: format!("https://github.com/octocat/widget/releases/tag/{tag}"),
        }
    }

    fn entry(repo: &str, published: &str) -> ReleaseEntry {
        ReleaseEntry {
            repo: repo.to_string(),
            repo_url: format!("https://github.com/octocat/{repo}"),
            description: String::new(),
            label: "v1".to_string(),
            published_at: published.to_string(),
            url: format!("https://github.com/octocat/{repo}/releases/tag/v1"),
        }
    }

    #[test]
    fn test_label_strips_repo_name_from_title() {
        let e = entry_for(&repo("widget"), &release(Some("widget v2.0"), "v2.0", None));
        assert_eq!(e.label, "v2.0");
    }

    #[test]
    fn test_label_falls_back_to_tag_without_title() {
        let e = entry_for(&repo("widget"), &release(None, "v1.2.3", None));
        assert_eq!(e.label, "v1.2.3");
    }

    #[test]
    fn test_label_empty_title_falls_back_to_tag() {
        let e = entry_for(&repo("widget"), &release(Some(""), "v1.2.3", None));
        assert_eq!(e.label, "v1.2.3");
    }

    #[test]
    fn test_label_stripped_to_empty_stays_empty() {
        // The tag fallback applies only when the title itself is missing,
        // not when stripping the repo name leaves nothing
        let e = entry_for(&repo("widget"), &release(Some("widget"), "v1.0", None));
        assert_eq!(e.label, "");
    }

    #[test]
    fn test_publish_date_formats_as_calendar_date() {
        let e = entry_for(
            &repo("widget"),
            &release(Some("v1"), "v1", Some("2025-03-14")),
        );
        assert_eq!(e.published_at, "2025-03-14");
    }

    #[test]
    fn test_missing_publish_date_renders_empty() {
        let e = entry_for(&repo("widget"), &release(Some("v1"), "v1", None));
        assert_eq!(e.published_at, "");
    }

    #[test]
    fn test_dedup_keeps_latest_release_per_repo() {
        let entries = vec![entry("widget", "2025-01-10"), entry("widget", "2025-06-01")];
        let deduped = latest_per_repo(entries);
        assert_eq!(deduped.len(), 1);
        assert_eq!(deduped[0].published_at, "2025-06-01");
    }

    #[test]
    fn test_sort_is_newest_first_across_repos() {
        let entries = vec![
            entry("alpha", "2024-12-31"),
            entry("beta", "2025-05-05"),
            entry("gamma", "2025-01-01"),
        ];
        let sorted = latest_per_repo(entries);
        let repos: Vec<_> = sorted.iter().map(|e| e.repo.as_str()).collect();
        assert_eq!(repos, vec!["beta", "gamma", "alpha"]);
    }

    #[test]
    fn test_truncates_to_six_entries() {
        let entries: Vec<_> = (0..10)
            .map(|i| entry(&format!("repo{i}"), &format!("2025-01-{:02}", i + 1)))
            .collect();
        let limited = latest_per_repo(entries);
        assert_eq!(limited.len(), 6);
        // Newest dates survive the cut
        assert_eq!(limited[0].published_at, "2025-01-10");
        assert_eq!(limited[5].published_at, "2025-01-05");
    }

    #[test]
    fn test_render_bullet_list() {
        let entries = vec![entry("widget", "2025-03-14")];
        assert_eq!(
            render_releases(&entries),
            "• [widget v1](https://github.com/octocat/widget/releases/tag/v1) - 2025-03-14"
        );
    }

    #[test]
    fn test_render_joins_with_br() {
        let entries = vec![entry("a", "2025-02-01"), entry("b", "2025-01-01")];
        let rendered = render_releases(&entries);
        assert_eq!(rendered.matches("<br>").count(), 1);
        assert!(rendered.starts_with("• [a "));
    }

    #[test]
    fn test_render_empty_placeholder() {
        assert_eq!(render_releases(&[]), "• No releases yet");
    }

    #[tokio::test]
    async fn test_fetch_releases_returns_empty_when_api_unreachable() {
        let client = GithubClient::with_base_url("", "http://127.0.0.1:9").unwrap();
        assert!(fetch_releases(&client).await.is_empty());
    }
}
