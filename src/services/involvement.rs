use anyhow::{Context, Result};

use crate::github::graphql::search::search_query_for;
use crate::github::{GitHubClient, PullRequestSearcher};
use crate::services::Config;
use crate::types::{Category, InvolvementReport, SearchResult};

/// Collects the viewer's pull request involvement across the three categories.
pub struct InvolvementService<S> {
    searcher: S,
}

impl InvolvementService<GitHubClient> {
    /// Creates a service backed by a GitHub client built from `config`
    pub fn from_config(config: &Config) -> Result<Self> {
        let client = GitHubClient::new(
            &config.access_token,
            Some(config.request_timeout),
            config.api_base_uri.as_deref(),
        )?;
        Ok(Self::new(client))
    }
}

impl<S: PullRequestSearcher> InvolvementService<S> {
    pub fn new(searcher: S) -> Self {
        Self { searcher }
    }

    /// Runs the requested-review, owned and reviewed-by searches.
    ///
    /// The searches are independent and run concurrently. If any of them
    /// fails the whole run fails; no partial report is produced.
    pub async fn run(&self, config: &Config) -> Result<InvolvementReport> {
        let (requested_review, owned, reviewed_by) = futures::try_join!(
            self.search_category(Category::RequestedReview, &config.filters),
            self.search_category(Category::Owned, &config.filters),
            self.search_category(Category::ReviewedBy, &config.filters),
        )?;

        Ok(InvolvementReport {
            requested_review,
            owned,
            reviewed_by,
        })
    }

    async fn search_category(&self, category: Category, filters: &str) -> Result<SearchResult> {
        let query = search_query_for(category, filters);
        tracing::debug!("Searching {} pull requests: {}", category, query);

        self.searcher
            .search_pull_requests(&query)
            .await
            .map_err(|e| {
                tracing::warn!("Failed to search {} pull requests: {}", category, e);
                e
            })
            .with_context(|| format!("Failed to search {} pull requests", category))
    }
}
