pub mod http;

pub use http::HttpSummaryClient;

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::{SummaryFormat, SummaryResult};

/// Fallback when an error response carries neither `detail` nor `message`.
pub const GENERIC_BACKEND_MESSAGE: &str = "An error occurred while processing your request.";

/// Failure of one summarization attempt, normalized for display.
///
/// The `Display` text of each variant is exactly what the user sees; the
/// caller never has to unwrap transport details.
#[derive(Debug, Error)]
pub enum ClientError {
    /// The server responded with an error payload.
    #[error("{0}")]
    Backend(String),

    /// No response at all (connection refused, DNS failure, timeout).
    #[error("Failed to connect to the server. Please make sure the backend is running.")]
    Network,

    /// Anything else.
    #[error("Failed to connect to the server. Please try again later.")]
    Unknown,
}

/// A summarization backend reachable over some transport.
///
/// One request per call, no retries, no caching; the caller is suspended
/// until resolution.
#[async_trait]
pub trait SummaryClient {
    async fn generate_summary(
        &self,
        url: &str,
        format: SummaryFormat,
    ) -> Result<SummaryResult, ClientError>;
}
