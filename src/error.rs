//! Error types for query submission
//!
//! Every failure ends up as an error card, so each variant knows the
//! message the user gets to see. Transport details stay in the logs.

use thiserror::Error;

/// Shown when the input is empty or whitespace only
pub const EMPTY_QUERY_MESSAGE: &str = "Please enter a query";

/// Shown when the backend reports a failure without a message
pub const GENERIC_ERROR_MESSAGE: &str = "An error occurred";

/// Shown for transport and decoding failures
pub const REQUEST_FAILED_MESSAGE: &str = "Failed to process your request. Please try again.";

/// Errors that can occur while submitting a query
#[derive(Error, Debug, Clone, PartialEq)]
pub enum QueryError {
    /// The query was empty after trimming; no request was sent
    #[error("Query is empty")]
    Validation,

    /// The backend answered with `success: false`
    #[error("Backend rejected the query: {}", .message.as_deref().unwrap_or("<no message>"))]
    Rejected {
        /// Message provided by the backend, if any
        message: Option<String>,
    },

    /// The request could not be sent or the body could not be read
    #[error("Transport failure: {0}")]
    Transport(String),

    /// The body was not the JSON the endpoint promises
    #[error("Malformed response: {0}")]
    Malformed(String),

    /// The HTTP client could not be built
    #[error("Client setup failed: {0}")]
    ClientSetup(String),
}

impl QueryError {
    /// Build a rejection, dropping blank messages
    pub fn rejected(message: Option<String>) -> Self {
        QueryError::Rejected {
            message: message.filter(|m| !m.trim().is_empty()),
        }
    }

    /// Message rendered on the error card
    pub fn user_message(&self) -> String {
        match self {
            QueryError::Validation => EMPTY_QUERY_MESSAGE.to_string(),
            QueryError::Rejected { message } => message
                .clone()
                .unwrap_or_else(|| GENERIC_ERROR_MESSAGE.to_string()),
            QueryError::Transport(_) | QueryError::Malformed(_) | QueryError::ClientSetup(_) => {
                REQUEST_FAILED_MESSAGE.to_string()
            }
        }
    }

    /// Whether the message came from the backend rather than a local fallback
    pub fn is_server_provided(&self) -> bool {
        matches!(self, QueryError::Rejected { message: Some(_) })
    }
}

impl From<reqwest::Error> for QueryError {
    fn from(err: reqwest::Error) -> Self {
        QueryError::Transport(err.to_string())
    }
}
