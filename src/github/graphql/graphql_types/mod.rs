mod pull_request;
mod search;
mod user;

use serde::{Deserialize, Serialize};

pub use pull_request::*;
pub use search::*;
pub use user::*;

#[derive(Debug, Clone, Serialize)]
pub struct GraphQLQuery(pub String);

/// Request body sent to the GraphQL endpoint.
///
/// `variables` is omitted from the body when `None`, giving `{"query": "..."}`.
#[derive(Debug, Clone, Serialize)]
pub struct GraphQLPayload<T: serde::Serialize> {
    pub query: GraphQLQuery,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub variables: Option<T>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GraphQLResponse<T> {
    pub data: Option<T>,
    pub errors: Option<Vec<GraphQLError>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GraphQLError {
    pub message: String,
    #[serde(default)]
    pub locations: Vec<serde_json::Value>,
    #[serde(default)]
    pub path: Vec<serde_json::Value>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LabelsConnection {
    pub nodes: Vec<LabelNode>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LabelNode {
    pub name: String,
}
