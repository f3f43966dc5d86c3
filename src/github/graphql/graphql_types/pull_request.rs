use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

use crate::github::graphql::graphql_types::LabelsConnection;
use crate::github::graphql::graphql_types::user::Author;
use crate::types::{Label, PullRequest, PullRequestNumber, PullRequestUrl, User};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RepositoryNameNode {
    pub name: String,
}

/// Pull request node selected by the involvement search query.
///
/// Every field is required; a node missing one of them fails deserialization
/// and the whole response is rejected. `author` may be an explicit null,
/// which GitHub returns for deleted accounts.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PullRequestNode {
    pub repository: RepositoryNameNode,
    #[serde(deserialize_with = "deserialize_nullable")]
    pub author: Option<Author>,
    pub created_at: DateTime<Utc>,
    pub number: u32,
    pub url: String,
    pub title: String,
    pub labels: LabelsConnection,
}

/// Accepts `null` but, unlike the derived `Option` handling, not a missing key
fn deserialize_nullable<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer)
}

impl From<PullRequestNode> for PullRequest {
    fn from(node: PullRequestNode) -> Self {
        Self {
            repository_name: node.repository.name,
            author: node
                .author
                .map(|author| User::from(author.login))
                .unwrap_or_else(User::ghost),
            created_at: node.created_at,
            number: PullRequestNumber::new(node.number),
            url: PullRequestUrl(node.url),
            title: node.title,
            labels: node
                .labels
                .nodes
                .into_iter()
                .map(|label| Label::from(label.name))
                .collect(),
        }
    }
}
