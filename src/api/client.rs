//! Query endpoint client
//!
//! The controller only sees the `QueryBackend` trait, so tests and
//! alternative transports can stand in for the HTTP implementation.

use crate::api::types::{QueryAnswer, QueryRequest, QueryResponse};
use crate::config::Config;
use crate::error::QueryError;
use async_trait::async_trait;

/// Something that can answer a query
#[async_trait]
pub trait QueryBackend: Send + Sync {
    /// Send one query and wait for the answer
    async fn query(&self, request: &QueryRequest) -> Result<QueryAnswer, QueryError>;
}

/// `QueryBackend` speaking JSON over HTTP
#[derive(Debug, Clone)]
pub struct HttpQueryBackend {
    client: reqwest::Client,
    url: String,
}

impl HttpQueryBackend {
    /// Build a backend from configuration
    ///
    /// # Errors
    /// * Returns `QueryError::ClientSetup` if the HTTP client cannot be built
    pub fn from_config(config: &Config) -> Result<Self, QueryError> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.request_timeout() {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| QueryError::ClientSetup(e.to_string()))?;

        Ok(Self::with_client(client, config.query_url()))
    }

    /// Build a backend around an existing client (shared connection pool)
    pub fn with_client(client: reqwest::Client, url: impl Into<String>) -> Self {
        Self {
            client,
            url: url.into(),
        }
    }

    /// URL requests are posted to
    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl QueryBackend for HttpQueryBackend {
    async fn query(&self, request: &QueryRequest) -> Result<QueryAnswer, QueryError> {
        tracing::debug!(
            url = %self.url,
            query_len = request.query.len(),
            "Sending query"
        );

        let response = self.client.post(&self.url).json(request).send().await?;

        // Error responses still carry a JSON body, so the status is only logged
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            tracing::debug!(
                status_code = status.as_u16(),
                body_len = body.len(),
                "Query endpoint returned error status"
            );
        }

        let parsed: QueryResponse = serde_json::from_str(&body).map_err(|e| {
            QueryError::Malformed(format!("HTTP {}: {}", status.as_u16(), e))
        })?;

        let result = parsed.into_result();
        if let Ok(answer) = &result {
            tracing::debug!(
                agent_used = %answer.agent_used,
                response_len = answer.response.len(),
                "Received answer"
            );
        }
        result
    }
}
