// src/readme/stats.rs
// =============================================================================
// This module handles the `github_stats` line of the README.
//
// Two jobs:
// - Pull the currently-displayed numbers back out of the document, so a
//   failed API fetch can fall back to them instead of rendering zeros
// - Format a ProfileStats as the inline "N followers, N stars, N forks"
//   string with thousands separators
// =============================================================================

use std::fmt;

use regex::Regex;

/// Aggregate profile statistics rendered into the README
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ProfileStats {
    /// Follower count of the authenticated user
    pub followers: u64,
    /// Total stars across owned non-fork repositories
    pub stars: u64,
    /// Total forks across owned non-fork repositories
    pub forks: u64,
}

impl fmt::Display for ProfileStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} followers, {} stars, {} forks",
            with_commas(self.followers),
            with_commas(self.stars),
            with_commas(self.forks)
        )
    }
}

// Extracts the currently-displayed stats from the document as a fallback.
//
// Looks for the literal shape "<n> followers, <n> stars, <n> forks" anywhere
// in the text, with optional thousands separators. Returns zeros when the
// document carries no such line; never errors.
pub fn extract_current_stats(content: &str) -> ProfileStats {
    tracing::info!("extracting current stats as fallback");

    let pattern = Regex::new(
        r"(\d{1,3}(?:,\d{3})*)\s*followers,\s*(\d{1,3}(?:,\d{3})*)\s*stars,\s*(\d{1,3}(?:,\d{3})*)\s*forks",
    )
    .expect("stats pattern is valid");

    match pattern.captures(content) {
        Some(caps) => ProfileStats {
            followers: parse_grouped(&caps[1]),
            stars: parse_grouped(&caps[2]),
            forks: parse_grouped(&caps[3]),
        },
        None => ProfileStats::default(),
    }
}

// Parses an integer that may contain thousands-separator commas.
// The captured text is all digits and commas, so parsing cannot fail.
fn parse_grouped(text: &str) -> u64 {
    text.replace(',', "").parse().unwrap_or(0)
}

// Renders a number with commas every three digits: 1234567 -> "1,234,567"
fn with_commas(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}
