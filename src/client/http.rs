use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::client::{ClientError, SummaryClient, GENERIC_BACKEND_MESSAGE};
use crate::domain::{SummaryFormat, SummaryResult};

/// reqwest-based client for the summarization HTTP API.
pub struct HttpSummaryClient {
    client: Client,
    base_url: String,
}

#[derive(Debug, Serialize)]
struct SummarizeRequest<'a> {
    youtube_url: &'a str,
    format: SummaryFormat,
}

/// Error payload shape for non-2xx responses. Both fields are optional;
/// `detail` wins over `message`.
#[derive(Debug, Default, Deserialize)]
struct ApiErrorBody {
    detail: Option<String>,
    message: Option<String>,
}

impl ApiErrorBody {
    fn into_message(self) -> String {
        self.detail
            .or(self.message)
            .unwrap_or_else(|| GENERIC_BACKEND_MESSAGE.to_string())
    }
}

impl HttpSummaryClient {
    /// Build a client against the given API base URL (e.g.
    /// `http://localhost:5000/api`).
    pub fn new(base_url: impl Into<String>) -> Self {
        let client = Client::builder()
            .gzip(true)
            .brotli(true)
            .user_agent(concat!("recap/", env!("CARGO_PKG_VERSION")))
            .build()
            .expect("Failed to build HTTP client");

        Self {
            client,
            base_url: base_url.into(),
        }
    }

    fn summarize_url(&self) -> String {
        format!("{}/summarize", self.base_url.trim_end_matches('/'))
    }
}

#[async_trait]
impl SummaryClient for HttpSummaryClient {
    async fn generate_summary(
        &self,
        url: &str,
        format: SummaryFormat,
    ) -> Result<SummaryResult, ClientError> {
        let endpoint = self.summarize_url();
        debug!(endpoint = %endpoint, "requesting summary");

        let response = self
            .client
            .post(&endpoint)
            .json(&SummarizeRequest {
                youtube_url: url,
                format,
            })
            .send()
            .await
            .map_err(|e| {
                warn!(error = %e, "summary request failed to send");
                if e.is_connect() || e.is_timeout() {
                    ClientError::Network
                } else {
                    ClientError::Unknown
                }
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let body: ApiErrorBody = response.json().await.unwrap_or_default();
            let message = body.into_message();
            warn!(%status, message = %message, "backend rejected summary request");
            return Err(ClientError::Backend(message));
        }

        response.json::<SummaryResult>().await.map_err(|e| {
            warn!(error = %e, "failed to decode summary response");
            ClientError::Unknown
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_body_prefers_detail() {
        let body = ApiErrorBody {
            detail: Some("no captions".into()),
            message: Some("ignored".into()),
        };
        assert_eq!(body.into_message(), "no captions");
    }

    #[test]
    fn test_error_body_falls_back_to_message() {
        let body = ApiErrorBody {
            detail: None,
            message: Some("quota exceeded".into()),
        };
        assert_eq!(body.into_message(), "quota exceeded");
    }

    #[test]
    fn test_error_body_generic_fallback() {
        assert_eq!(
            ApiErrorBody::default().into_message(),
            "An error occurred while processing your request."
        );
    }

    #[test]
    fn test_error_body_tolerates_unknown_fields() {
        let body: ApiErrorBody =
            serde_json::from_str(r#"{"detail":"no captions","code":422}"#).unwrap();
        assert_eq!(body.into_message(), "no captions");
    }

    #[test]
    fn test_request_wire_shape() {
        let request = SummarizeRequest {
            youtube_url: "https://youtu.be/abc",
            format: SummaryFormat::Paragraph,
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["youtube_url"], "https://youtu.be/abc");
        assert_eq!(json["format"], "paragraph");
    }

    #[test]
    fn test_summarize_url_joins_base() {
        let client = HttpSummaryClient::new("http://localhost:5000/api");
        assert_eq!(
            client.summarize_url(),
            "http://localhost:5000/api/summarize"
        );
        let client = HttpSummaryClient::new("http://localhost:5000/api/");
        assert_eq!(
            client.summarize_url(),
            "http://localhost:5000/api/summarize"
        );
    }

    #[test]
    fn test_fixed_messages() {
        assert_eq!(
            ClientError::Network.to_string(),
            "Failed to connect to the server. Please make sure the backend is running."
        );
        assert_eq!(
            ClientError::Unknown.to_string(),
            "Failed to connect to the server. Please try again later."
        );
        assert_eq!(
            ClientError::Backend("no captions".into()).to_string(),
            "no captions"
        );
    }
}
