// Query API module
// Wire types and the HTTP client for POST /api/query

/// HTTP client
pub mod client;
/// Request and response bodies
pub mod types;

pub use client::{HttpQueryBackend, QueryBackend};
pub use types::{QueryAnswer, QueryRequest, QueryResponse};
