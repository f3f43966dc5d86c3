use serde::{Deserialize, Serialize};

use crate::github::graphql::graphql_types::PullRequestNode;
use crate::types::{PullRequest, SearchResult};

/// GraphQL response structures for Search API
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResponse {
    pub search: SearchConnection,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchConnection {
    #[serde(rename = "issueCount")]
    pub issue_count: u32,
    pub edges: Vec<SearchEdge>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchEdge {
    pub node: PullRequestNode,
}

impl From<SearchConnection> for SearchResult {
    fn from(connection: SearchConnection) -> Self {
        Self {
            issue_count: connection.issue_count,
            pull_requests: connection
                .edges
                .into_iter()
                .map(|edge| PullRequest::from(edge.node))
                .collect(),
        }
    }
}
