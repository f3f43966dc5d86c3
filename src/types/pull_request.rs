use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{Label, User};

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PullRequestUrl(pub String);

impl PullRequestUrl {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for PullRequestUrl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Wrapper type for pull request numbers providing type safety
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PullRequestNumber(pub u32);

impl PullRequestNumber {
    /// Create a new pull request number
    pub fn new(number: u32) -> Self {
        Self(number)
    }

    /// Get the inner value
    pub fn value(&self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for PullRequestNumber {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Snapshot of a single open pull request as returned by one search response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PullRequest {
    /// Name of the repository, without the owner
    pub repository_name: String,
    pub author: User,
    pub created_at: DateTime<Utc>,
    pub number: PullRequestNumber,
    pub url: PullRequestUrl,
    pub title: String,
    /// Label names, capped at the first 100 by the query
    pub labels: Vec<Label>,
}

impl PullRequest {
    /// Returns true when one of the pull request's labels is exactly `name`
    pub fn has_label(&self, name: &str) -> bool {
        self.labels.iter().any(|label| label == name)
    }
}
