pub mod client;
pub mod error;
pub mod graphql;

pub use client::{GitHubClient, PullRequestSearcher};
pub use error::ApiError;
pub use graphql::graphql_types;
