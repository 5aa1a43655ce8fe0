//! Wire types for the query endpoint

use crate::error::QueryError;
use serde::{Deserialize, Serialize};

/// Request body for `POST /api/query`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueryRequest {
    /// Trimmed, non-empty query text
    pub query: String,
}

impl QueryRequest {
    /// Build a request from raw input text
    ///
    /// # Errors
    /// * Returns `QueryError::Validation` if the text is empty after trimming
    pub fn from_input(raw: &str) -> Result<Self, QueryError> {
        let query = raw.trim();
        if query.is_empty() {
            return Err(QueryError::Validation);
        }
        Ok(Self {
            query: query.to_string(),
        })
    }
}

/// Response body as sent by the backend
///
/// Success and failure share one shape; only `success` tells them apart.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct QueryResponse {
    /// Whether the backend produced an answer (absent means false)
    #[serde(default)]
    pub success: bool,
    /// Echo of the query
    pub query: Option<String>,
    /// Answer text
    pub response: Option<String>,
    /// Label of the agent that answered, e.g. "Weather Agent"
    pub agent_used: Option<String>,
    /// Failure message
    pub error: Option<String>,
}

/// A successful answer with every field present
#[derive(Debug, Clone, PartialEq)]
pub struct QueryAnswer {
    /// Query as echoed by the backend
    pub query: String,
    /// Answer text
    pub response: String,
    /// Agent label
    pub agent_used: String,
}

impl QueryResponse {
    /// Convert the raw body into an answer or a query error
    pub fn into_result(self) -> Result<QueryAnswer, QueryError> {
        if !self.success {
            return Err(QueryError::rejected(self.error));
        }

        match (self.query, self.response, self.agent_used) {
            (Some(query), Some(response), Some(agent_used)) => Ok(QueryAnswer {
                query,
                response,
                agent_used,
            }),
            _ => Err(QueryError::Malformed(
                "success response is missing query, response or agent_used".to_string(),
            )),
        }
    }
}
