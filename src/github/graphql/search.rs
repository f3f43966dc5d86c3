use crate::types::{Category, SearchQuery};

/// Maximum number of pull requests returned per search; larger result sets are truncated by the API
pub const SEARCH_RESULT_LIMIT: u32 = 100;

/// Maximum number of labels fetched per pull request
pub const LABEL_LIMIT: u32 = 100;

const OPEN_PULL_REQUESTS: &str = "type:pr state:open";

/// Search qualifier selecting the pull requests of `category` relative to `@me`
pub fn category_predicate(category: Category) -> &'static str {
    match category {
        Category::RequestedReview => "-author:@me review-requested:@me",
        Category::Owned => "author:@me",
        Category::ReviewedBy => "-author:@me reviewed-by:@me",
    }
}

/// Builds the search text for one category.
///
/// `filters` is operator supplied configuration and is appended verbatim
/// (e.g. `org:acme -label:dropped`). An empty filter adds nothing.
pub fn search_query_for(category: Category, filters: &str) -> SearchQuery {
    let predicate = category_predicate(category);
    if filters.trim().is_empty() {
        SearchQuery(format!("{} {}", OPEN_PULL_REQUESTS, predicate))
    } else {
        SearchQuery(format!("{} {} {}", OPEN_PULL_REQUESTS, predicate, filters))
    }
}

/// Renders `text` as a quoted GraphQL string literal.
///
/// JSON string escaping is a valid GraphQL string encoding, so quotes and
/// backslashes in the search text cannot terminate the literal early.
fn graphql_string_literal(text: &str) -> String {
    serde_json::Value::String(text.to_string()).to_string()
}

/// GraphQL document searching open pull requests for `query`
pub fn pull_request_search_query(query: &SearchQuery) -> String {
    format!(
        r#"
        query {{
            search(query: {}, type: ISSUE, first: {}) {{
                issueCount
                edges {{
                    node {{
                        ... on PullRequest {{
                            repository {{
                                name
                            }}
                            author {{
                                login
                            }}
                            createdAt
                            number
                            url
                            title
                            labels(first: {}) {{
                                nodes {{
                                    name
                                }}
                            }}
                        }}
                    }}
                }}
            }}
        }}"#,
        graphql_string_literal(query.as_str()),
        SEARCH_RESULT_LIMIT,
        LABEL_LIMIT
    )
}
