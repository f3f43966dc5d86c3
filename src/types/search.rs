//! Search query and result types
//!
//! This module provides the search text wrapper, the per-category search
//! result and the combined report produced by the involvement aggregator.

use serde::{Deserialize, Serialize};

use super::{Category, PullRequest};

/// Represents a GitHub search query string.
///
/// Wraps the search text for type safety. The text follows GitHub's search
/// syntax (e.g. `type:pr state:open author:@me org:acme`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchQuery(pub String);

impl SearchQuery {
    pub fn new<T: Into<String>>(query: T) -> Self {
        Self(query.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for SearchQuery {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Result of one pull request search.
///
/// `issue_count` is the total number of matches reported by GitHub and is
/// independent of the page cap, so it may exceed `pull_requests.len()`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResult {
    pub issue_count: u32,
    /// Pull requests in API response order
    pub pull_requests: Vec<PullRequest>,
}

/// The three search results of one run, one per [`Category`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvolvementReport {
    pub requested_review: SearchResult,
    pub owned: SearchResult,
    pub reviewed_by: SearchResult,
}

impl InvolvementReport {
    pub fn get(&self, category: Category) -> &SearchResult {
        match category {
            Category::RequestedReview => &self.requested_review,
            Category::Owned => &self.owned,
            Category::ReviewedBy => &self.reviewed_by,
        }
    }
}
