//! # Models
//!
//! Request-scoped value types produced by the search and detail stages.
//!
//! [`UserSummary`] comes from the search stage, [`UserProfile`] from the
//! detail stage, and [`UserRecord`] is what the caller receives: a summary,
//! optionally overlaid with its profile.

use serde::{Deserialize, Serialize};

#[cfg(test)]
#[path = "models_tests.rs"]
mod tests;

/// A lightweight user record returned by the search stage.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct UserSummary {
    /// The unique numeric ID of the user
    pub id: u64,
    /// The login name of the user
    pub login: String,
    /// URL of the user's avatar image
    pub avatar_url: String,
    /// URL of the user's public profile page
    pub html_url: String,
    /// Relevance score assigned by the search stage
    #[serde(default)]
    pub score: f64,
}

/// The full user record returned by the detail stage.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct UserProfile {
    pub id: u64,
    pub login: String,
    pub avatar_url: String,
    pub html_url: String,
    /// Human-readable display name
    pub name: Option<String>,
    pub bio: Option<String>,
    pub location: Option<String>,
    pub company: Option<String>,
    pub blog: Option<String>,
    #[serde(default)]
    pub public_repos: u32,
    #[serde(default)]
    pub followers: u32,
    #[serde(default)]
    pub following: u32,
    pub created_at: Option<String>,
}

/// A single search hit as handed to the caller.
///
/// Without enrichment only the summary fields are populated and the record
/// serializes exactly like its [`UserSummary`]. After a successful merge the
/// profile's fields take precedence over same-named summary fields, while
/// summary-only fields such as `score` are kept.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct UserRecord {
    pub id: u64,
    pub login: String,
    pub avatar_url: String,
    pub html_url: String,
    pub score: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub blog: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub public_repos: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub followers: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub following: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

impl UserRecord {
    /// Overlays `profile` onto this record, consuming both.
    pub fn merge(self, profile: UserProfile) -> Self {
        Self {
            id: profile.id,
            login: profile.login,
            avatar_url: profile.avatar_url,
            html_url: profile.html_url,
            score: self.score,
            name: profile.name,
            bio: profile.bio,
            location: profile.location,
            company: profile.company,
            blog: profile.blog,
            public_repos: Some(profile.public_repos),
            followers: Some(profile.followers),
            following: Some(profile.following),
            created_at: profile.created_at,
        }
    }

    /// Returns `true` if detail-stage fields have been merged in.
    pub fn is_enriched(&self) -> bool {
        self.followers.is_some()
    }
}

impl From<UserSummary> for UserRecord {
    fn from(summary: UserSummary) -> Self {
        Self {
            id: summary.id,
            login: summary.login,
            avatar_url: summary.avatar_url,
            html_url: summary.html_url,
            score: summary.score,
            name: None,
            bio: None,
            location: None,
            company: None,
            blog: None,
            public_repos: None,
            followers: None,
            following: None,
            created_at: None,
        }
    }
}

/// Per-call counts describing how enrichment went.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct EnrichmentReport {
    /// Items that received detail fields
    pub enriched: usize,
    /// Items whose detail record does not exist
    pub not_found: usize,
    /// Items whose detail fetch failed
    pub failed: usize,
}

impl EnrichmentReport {
    /// Returns `true` if every attempted fetch failed.
    ///
    /// An empty batch is never a total failure.
    pub fn is_total_failure(&self) -> bool {
        self.failed > 0 && self.enriched == 0 && self.not_found == 0
    }
}

/// One page of search results.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchResult {
    /// Hits in the order the directory API ranked them
    pub items: Vec<UserRecord>,
    /// Total number of matches across all pages
    pub total_count: u64,
    /// The 1-based page these items belong to
    pub current_page: u32,
    /// Whether a further page exists
    pub has_more: bool,
    /// Present only when enrichment was requested and attempted
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enrichment: Option<EnrichmentReport>,
}

impl SearchResult {
    /// An empty page, used when the search stage reports no results.
    pub fn empty(page: u32) -> Self {
        Self {
            items: Vec::new(),
            total_count: 0,
            current_page: page,
            has_more: false,
            enrichment: None,
        }
    }
}

/// The envelope returned by `GET /search/users`.
#[derive(Debug, Deserialize)]
pub(crate) struct SearchEnvelope {
    pub total_count: u64,
    #[serde(default)]
    pub incomplete_results: bool,
    #[serde(default)]
    pub items: Vec<UserSummary>,
}
