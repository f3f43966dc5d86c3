use std::time::Duration;

/// Failure of a single search request.
///
/// Every variant is fatal for the run: there is no retry, and the host's
/// periodic re-invocation acts as the retry mechanism.
#[derive(Debug, Clone, PartialEq)]
pub enum ApiError {
    /// Network failure or non-2xx HTTP status
    Transport(String),
    /// The request did not complete within the configured timeout
    Timeout(Duration),
    /// Malformed JSON or a missing required field in the response
    ResponseShape(String),
    /// The response carried a non-empty GraphQL `errors` array
    GraphQL(String),
}

impl ApiError {
    /// Convert octocrab error to the matching failure category
    pub fn from_octocrab_error(error: octocrab::Error) -> Self {
        tracing::debug!("Raw octocrab error: {:?}", error);

        match &error {
            octocrab::Error::GitHub { source, .. } => {
                let detailed_error = format!(
                    "GitHub API error - Status: {}, Message: {:?}",
                    source.status_code.as_u16(),
                    source.message
                );
                tracing::error!("{}", detailed_error);
                Self::Transport(detailed_error)
            }
            octocrab::Error::Json { .. } => {
                let error_msg = format!("JSON parsing error: {}", error_summary(&error));
                tracing::error!("{}", error_msg);
                Self::ResponseShape(error_msg)
            }
            _ => {
                let error_msg = format!("HTTP error: {}", error_summary(&error));
                tracing::error!("{}", error_msg);
                Self::Transport(error_msg)
            }
        }
    }
}

/// One-line description of an octocrab error.
///
/// octocrab's `Display` appends the captured backtrace, so the underlying
/// source is preferred and only the first line is kept.
fn error_summary(error: &octocrab::Error) -> String {
    let summary = match std::error::Error::source(error) {
        Some(source) => source.to_string(),
        None => error.to_string(),
    };
    summary.lines().next().unwrap_or_default().trim().to_string()
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Transport(msg) => write!(f, "Transport error: {}", msg),
            Self::Timeout(duration) => write!(f, "Request timed out after {:?}", duration),
            Self::ResponseShape(msg) => write!(f, "Unexpected response shape: {}", msg),
            Self::GraphQL(msg) => write!(f, "GraphQL error: {}", msg),
        }
    }
}

impl std::error::Error for ApiError {}
