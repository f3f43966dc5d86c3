//! Tests for the GraphQL search client against a local mock server
//!
//! The mock stands in for `POST /graphql` and lets the tests check the
//! request the client sends and how each kind of response is classified.

use mockito::Matcher;
use serde_json::json;

use github_pr_bar::github::graphql::search::{pull_request_search_query, search_query_for};
use github_pr_bar::github::{ApiError, PullRequestSearcher};
use github_pr_bar::types::{Category, SearchQuery};
use test_util::{create_test_github_client, pull_request_node_json, search_response_json};

fn owned_query() -> SearchQuery {
    search_query_for(Category::Owned, "org:acme")
}

#[tokio::test]
async fn test_search_sends_bearer_token_and_query_body() {
    let mut server = mockito::Server::new_async().await;
    let query = owned_query();

    let mock = server
        .mock("POST", "/graphql")
        .match_header("authorization", "bearer test-token")
        .match_body(Matcher::Json(json!({
            "query": pull_request_search_query(&query)
        })))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            search_response_json(
                2,
                vec![
                    pull_request_node_json("widgets", 7, "second in response", &["WIP"]),
                    pull_request_node_json("gadgets", 3, "first by number", &[]),
                ],
            )
            .to_string(),
        )
        .expect(1)
        .create_async()
        .await;

    let client = create_test_github_client(&server.url());
    let result = client.search_pull_requests(&query).await.unwrap();

    mock.assert_async().await;
    assert_eq!(result.issue_count, 2);

    // Response order is preserved
    let numbers: Vec<u32> = result.pull_requests.iter().map(|pr| pr.number.value()).collect();
    assert_eq!(numbers, vec![7, 3]);

    let first = &result.pull_requests[0];
    assert_eq!(first.repository_name, "widgets");
    assert_eq!(first.title, "second in response");
    assert_eq!(first.author, "octocat");
    assert!(first.has_label("WIP"));
    assert_eq!(first.url.as_str(), "https://github.com/acme/widgets/pull/7");
}

#[tokio::test]
async fn test_search_keeps_total_count_beyond_page_cap() {
    let mut server = mockito::Server::new_async().await;

    let nodes = (1..=100)
        .map(|n| pull_request_node_json("widgets", n, "change", &[]))
        .collect();

    let _mock = server
        .mock("POST", "/graphql")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(search_response_json(150, nodes).to_string())
        .create_async()
        .await;

    let client = create_test_github_client(&server.url());
    let result = client.search_pull_requests(&owned_query()).await.unwrap();

    assert_eq!(result.issue_count, 150);
    assert_eq!(result.pull_requests.len(), 100);
}

#[tokio::test]
async fn test_search_graphql_errors_are_fatal() {
    let mut server = mockito::Server::new_async().await;

    let _mock = server
        .mock("POST", "/graphql")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            json!({
                "data": null,
                "errors": [{ "message": "Bad search qualifier" }]
            })
            .to_string(),
        )
        .create_async()
        .await;

    let client = create_test_github_client(&server.url());
    let error = client
        .search_pull_requests(&owned_query())
        .await
        .unwrap_err();

    assert_eq!(error, ApiError::GraphQL("Bad search qualifier".to_string()));
}

#[tokio::test]
async fn test_search_missing_field_is_response_shape_error() {
    let mut server = mockito::Server::new_async().await;

    let mut node = pull_request_node_json("widgets", 1, "change", &[]);
    node.as_object_mut().unwrap().remove("title");

    let _mock = server
        .mock("POST", "/graphql")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(search_response_json(1, vec![node]).to_string())
        .create_async()
        .await;

    let client = create_test_github_client(&server.url());
    let error = client
        .search_pull_requests(&owned_query())
        .await
        .unwrap_err();

    assert!(
        matches!(error, ApiError::ResponseShape(ref msg) if msg.contains("title")),
        "unexpected error: {:?}",
        error
    );
}

#[tokio::test]
async fn test_search_without_data_is_response_shape_error() {
    let mut server = mockito::Server::new_async().await;

    let _mock = server
        .mock("POST", "/graphql")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(json!({ "data": null }).to_string())
        .create_async()
        .await;

    let client = create_test_github_client(&server.url());
    let error = client
        .search_pull_requests(&owned_query())
        .await
        .unwrap_err();

    assert!(matches!(error, ApiError::ResponseShape(_)), "unexpected error: {:?}", error);
}

#[tokio::test]
async fn test_search_malformed_json_is_response_shape_error() {
    let mut server = mockito::Server::new_async().await;

    let _mock = server
        .mock("POST", "/graphql")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body("{\"data\": {\"search\": ")
        .create_async()
        .await;

    let client = create_test_github_client(&server.url());
    let error = client
        .search_pull_requests(&owned_query())
        .await
        .unwrap_err();

    assert!(matches!(error, ApiError::ResponseShape(_)), "unexpected error: {:?}", error);
    assert!(!error.to_string().contains('\n'), "multi-line error: {}", error);
}

#[tokio::test]
async fn test_search_unauthorized_is_transport_error() {
    let mut server = mockito::Server::new_async().await;

    let _mock = server
        .mock("POST", "/graphql")
        .with_status(401)
        .with_header("content-type", "application/json")
        .with_body(
            json!({
                "message": "Bad credentials",
                "documentation_url": "https://docs.github.com/graphql"
            })
            .to_string(),
        )
        .create_async()
        .await;

    let client = create_test_github_client(&server.url());
    let error = client
        .search_pull_requests(&owned_query())
        .await
        .unwrap_err();

    assert!(
        matches!(error, ApiError::Transport(ref msg) if msg.contains("401")),
        "unexpected error: {:?}",
        error
    );
}

#[tokio::test]
async fn test_search_server_error_is_sent_once() {
    let mut server = mockito::Server::new_async().await;

    let mock = server
        .mock("POST", "/graphql")
        .with_status(502)
        .with_header("content-type", "application/json")
        .with_body(json!({ "message": "Bad Gateway" }).to_string())
        .expect(1)
        .create_async()
        .await;

    let client = create_test_github_client(&server.url());
    let result = client.search_pull_requests(&owned_query()).await;

    assert!(result.is_err());
    mock.assert_async().await;
}

#[tokio::test]
async fn test_search_connection_failure_is_one_line_transport_error() {
    // Reserve a free port, then close it so the connection is refused
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let address = listener.local_addr().unwrap();
    drop(listener);

    let client = create_test_github_client(&format!("http://{}", address));
    let error = client
        .search_pull_requests(&owned_query())
        .await
        .unwrap_err();

    match error {
        ApiError::Transport(ref msg) => {
            assert!(!msg.contains('\n'), "multi-line error: {}", msg);
            assert!(!msg.contains("Found at"), "backtrace in error: {}", msg);
        }
        other => panic!("unexpected error: {:?}", other),
    }
}
