use crate::github::error::ApiError;
use crate::github::graphql::graphql_types::GraphQLError;

/// Folds the `errors` array of a GraphQL response into a single error.
///
/// Returns `None` when the array is empty.
pub fn graphql_errors_to_api_error(errors: &[GraphQLError]) -> Option<ApiError> {
    if errors.is_empty() {
        return None;
    }

    let error_msg = errors
        .iter()
        .map(|e| e.message.as_str())
        .collect::<Vec<_>>()
        .join(", ");

    tracing::error!("GraphQL query returned errors: {}", error_msg);
    Some(ApiError::GraphQL(error_msg))
}
