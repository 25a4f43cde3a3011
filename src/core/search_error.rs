use thiserror::Error;

use crate::global_constants;

/// Errors a source search can fail with. The full detail is meant for the
/// log; `user_message` maps each variant to the text shown in the UI.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SearchError {
    /// Missing credential (API key not present in the environment)
    #[error("configuration error: {0}")]
    Config(String),

    /// Transport failure before a response was read
    #[error("network error: {0}")]
    Network(String),

    /// Non-2xx response from the upstream service
    #[error("API error: {0}")]
    Api(String),

    /// Response missing candidate text or violating the declared schema
    #[error("parse error: {0}")]
    Parse(String),

    /// The bounded wait on the upstream call elapsed
    #[error("search timed out after {0} s")]
    Timeout(u64),
}

impl SearchError {
    pub fn user_message(&self) -> &'static str {
        match self {
            SearchError::Config(_) => global_constants::MESSAGE_SERVICE_NOT_CONFIGURED,
            SearchError::Timeout(_) => global_constants::MESSAGE_SEARCH_TIMED_OUT,
            SearchError::Network(_) | SearchError::Api(_) | SearchError::Parse(_) => {
                global_constants::MESSAGE_SEARCH_FAILED
            }
        }
    }
}
