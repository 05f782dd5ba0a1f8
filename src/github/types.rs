// src/github/types.rs
// =============================================================================
// serde models for the slices of the GitHub REST API we consume.
//
// Only the fields the aggregators read are declared; serde ignores the rest
// of each payload.
// =============================================================================

use chrono::{DateTime, Utc};
use serde::Deserialize;

/// The authenticated user, from `GET /user`
#[derive(Debug, Clone, Deserialize)]
pub struct AuthenticatedUser {
    pub login: String,
    pub followers: u64,
}

/// A repository owned by the authenticated user, from `GET /user/repos`
#[derive(Debug, Clone, Deserialize)]
pub struct Repository {
    /// Repository name (no owner prefix)
    pub name: String,
    /// Full name in "owner/name" format, used to build release requests
    pub full_name: String,
    /// Browser URL of the repository
    pub html_url: String,
    pub description: Option<String>,
    /// True when this repository is a fork; forks are excluded from all
    /// aggregation
    pub fork: bool,
    pub stargazers_count: u64,
    pub forks_count: u64,
}

/// A release, from `GET /repos/{owner}/{repo}/releases`
#[derive(Debug, Clone, Deserialize)]
pub struct Release {
    /// Release title; may be absent or empty
    pub name: Option<String>,
    pub tag_name: String,
    /// Publish time; drafts have none
    pub published_at: Option<DateTime<Utc>>,
    /// Browser URL of the release page
    pub html_url: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repository_deserializes_from_api_payload() {
        let json = r#"{
            "name": "widget",
            "full_name": "octocat/widget",
            "html_url": "https://github.com/octocat/widget",
            "description": "A widget",
            "fork": false,
            "stargazers_count": 42,
            "forks_count": 7,
            "open_issues_count": 3
        }"#;
        let repo: Repository = serde_json::from_str(json).unwrap();
        assert_eq!(repo.full_name, "octocat/widget");
        assert_eq!(repo.stargazers_count, 42);
        assert!(!repo.fork);
    }

    #[test]
    fn test_release_tolerates_missing_title_and_date() {
        let json = r#"{
            "name": null,
            "tag_name": "v1.2.3",
            "published_at": null,
            "html_url": "https://github.com/octocat/widget/releases/tag/v1.2.3"
        }"#;
        let release: Release = serde_json::from_str(json).unwrap();
        assert_eq!(release.name, None);
        assert_eq!(release.tag_name, "v1.2.3");
        assert!(release.published_at.is_none());
    }

    #[test]
    fn test_release_parses_publish_timestamp() {
        let json = r#"{
            "name": "widget v2.0.0",
            "tag_name": "v2.0.0",
            "published_at": "2025-03-14T09:26:53Z",
            "html_url": "https://github.com/octocat/widget/releases/tag/v2.0.0"
        }"#;
        let release: Release = serde_json::from_str(json).unwrap();
        let published = release.published_at.unwrap();
        assert_eq!(published.format("%Y-%m-%d").to_string(), "2025-03-14");
    }
}
