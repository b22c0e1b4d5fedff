//! HTTP implementation of the `/ask` contract

use super::types::{AskRequest, AskResponse};
use super::{AskBackend, BackendError};
use async_trait::async_trait;
use reqwest::Client;

/// Longest slice of a response body quoted in an error message
const MAX_BODY_IN_ERROR: usize = 200;

/// Shorten `body` for inclusion in an error message
fn excerpt(body: &str) -> String {
    let mut chars = body.chars();
    let head: String = chars.by_ref().take(MAX_BODY_IN_ERROR).collect();
    if chars.next().is_some() {
        format!("{head}… ({} bytes)", body.len())
    } else {
        head
    }
}

/// Talks to the assistant backend over HTTP
pub struct HttpAskClient {
    client: Client,
    endpoint: String,
}

impl HttpAskClient {
    /// `base_url` is the server root, e.g. `http://127.0.0.1:8000`.
    /// No request timeout is set here; the transport's own behavior applies.
    pub fn new(base_url: &str) -> Result<Self, BackendError> {
        let endpoint = format!("{}/ask", base_url.trim_end_matches('/'));

        let client = Client::builder()
            .build()
            .map_err(|e| BackendError::unknown(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self { client, endpoint })
    }

    fn classify_error(status: reqwest::StatusCode, body: &str) -> BackendError {
        let body = excerpt(body);
        match status.as_u16() {
            400..=499 => BackendError::invalid_request(format!("Rejected ({status}): {body}")),
            500..=599 => BackendError::server_error(format!("Server error ({status}): {body}")),
            _ => BackendError::unknown(format!("HTTP {status}: {body}")),
        }
    }
}

#[async_trait]
impl AskBackend for HttpAskClient {
    async fn ask(&self, request: &AskRequest) -> Result<AskResponse, BackendError> {
        let response = self
            .client
            .post(&self.endpoint)
            .json(request)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    BackendError::network(format!("Request timeout: {e}"))
                } else if e.is_connect() {
                    BackendError::network(format!("Connection failed: {e}"))
                } else {
                    BackendError::unknown(format!("Request failed: {e}"))
                }
            })?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| BackendError::network(format!("Failed to read response: {e}")))?;

        if !status.is_success() {
            return Err(Self::classify_error(status, &body));
        }

        serde_json::from_str(&body)
            .map_err(|e| {
                BackendError::decode(format!("Failed to parse response: {e} - body: {}", excerpt(&body)))
            })
    }

    fn endpoint(&self) -> &str {
        &self.endpoint
    }
}
