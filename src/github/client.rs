use crate::github::error::ApiError;
use crate::github::graphql::error::graphql_errors_to_api_error;
use crate::github::graphql::graphql_types::{
    GraphQLPayload, GraphQLQuery, GraphQLResponse, SearchResponse,
};
use crate::github::graphql::search::pull_request_search_query;
use crate::types::{SearchQuery, SearchResult};

use anyhow::{Context, Result};
use http::header::AUTHORIZATION;
use octocrab::Octocrab;
use octocrab::service::middleware::retry::RetryConfig;
use serde::{Serialize, de::DeserializeOwned};
use tokio::time::Duration;
use tracing::{debug, error, info};

/// GitHub REST/GraphQL API root; GraphQL requests are posted to `<base>/graphql`
pub const DEFAULT_API_BASE_URI: &str = "https://api.github.com";

/// Upper bound for a single request so a hung connection cannot stall the status bar
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

pub trait GraphQLExecutor {
    #[allow(async_fn_in_trait)]
    async fn execute_graphql<T: Serialize, R: DeserializeOwned>(
        &self,
        query_name: &str,
        payload: GraphQLPayload<T>,
    ) -> std::result::Result<R, ApiError>;
}

/// Executes a pull request search and returns the parsed result set.
pub trait PullRequestSearcher {
    #[allow(async_fn_in_trait)]
    async fn search_pull_requests(
        &self,
        query: &SearchQuery,
    ) -> std::result::Result<SearchResult, ApiError>;
}

#[derive(Clone)]
pub struct GitHubClient {
    pub(crate) client: octocrab::Octocrab,
    timeout: Duration,
}

impl GitHubClient {
    /// Builds a client authenticating every request with `Authorization: bearer <token>`.
    ///
    /// Failed requests are never re-sent.
    ///
    /// `timeout` bounds each request (default 10 seconds); `base_uri` defaults
    /// to [`DEFAULT_API_BASE_URI`] and exists for GitHub Enterprise hosts and tests.
    pub fn new(token: &str, timeout: Option<Duration>, base_uri: Option<&str>) -> Result<Self> {
        let timeout = timeout.unwrap_or(DEFAULT_REQUEST_TIMEOUT);
        let request_timeout = std::cmp::max(timeout, Duration::from_secs(1));

        let builder = Octocrab::builder()
            .add_header(AUTHORIZATION, format!("bearer {}", token))
            // One request per search; the host's next invocation is the retry
            .add_retry_config(RetryConfig::None)
            .base_uri(base_uri.unwrap_or(DEFAULT_API_BASE_URI))
            .context("Invalid GitHub API base URI")?
            .set_connect_timeout(Some(request_timeout))
            .set_read_timeout(Some(request_timeout))
            .set_write_timeout(Some(request_timeout));

        let client = builder.build().context("Failed to build GitHub client")?;

        Ok(Self {
            client,
            timeout: request_timeout,
        })
    }
}

impl GraphQLExecutor for GitHubClient {
    async fn execute_graphql<T: Serialize, R: DeserializeOwned>(
        &self,
        query_name: &str,
        payload: GraphQLPayload<T>,
    ) -> std::result::Result<R, ApiError> {
        debug!("Starting GraphQL request {}: {}", query_name, payload.query.0);

        let start_time = std::time::Instant::now();

        let raw: serde_json::Value =
            tokio::time::timeout(self.timeout, self.client.graphql(&payload))
                .await
                .map_err(|_| {
                    error!(
                        "GraphQL request {} timed out after {:?}",
                        query_name,
                        start_time.elapsed()
                    );
                    ApiError::Timeout(self.timeout)
                })?
                .map_err(ApiError::from_octocrab_error)?;

        info!(
            "GraphQL request {} completed in {:?}",
            query_name,
            start_time.elapsed()
        );

        let response: GraphQLResponse<R> = serde_json::from_value(raw).map_err(|e| {
            error!("Unexpected GraphQL response shape for {}: {}", query_name, e);
            ApiError::ResponseShape(e.to_string())
        })?;

        if let Some(errors) = &response.errors {
            if let Some(api_error) = graphql_errors_to_api_error(errors) {
                return Err(api_error);
            }
        }

        response.data.ok_or_else(|| {
            ApiError::ResponseShape(format!("No data in GraphQL {} response", query_name))
        })
    }
}

impl PullRequestSearcher for GitHubClient {
    /// Searches open pull requests matching `query`.
    ///
    /// At most 100 pull requests (and 100 labels per pull request) are
    /// returned; `issue_count` still reports the full number of matches.
    async fn search_pull_requests(
        &self,
        query: &SearchQuery,
    ) -> std::result::Result<SearchResult, ApiError> {
        let payload: GraphQLPayload<()> = GraphQLPayload {
            query: GraphQLQuery(pull_request_search_query(query)),
            variables: None,
        };

        let data: SearchResponse = self.execute_graphql("pull_request_search", payload).await?;
        let result = SearchResult::from(data.search);

        info!(
            "Search '{}' matched {} pull requests, received {}",
            query,
            result.issue_count,
            result.pull_requests.len()
        );

        Ok(result)
    }
}
