//! Question-answering backend abstraction
//!
//! The session talks to the retrieval/generation service only through
//! [`AskBackend`]. One call per submitted question.

mod error;
mod http;
mod types;

pub use error::{BackendError, BackendErrorKind};
pub use http::HttpAskClient;
pub use types::{AskRequest, AskResponse, DEFAULT_TOP_K};

use async_trait::async_trait;
use std::sync::Arc;

/// Client for the `/ask` endpoint
#[async_trait]
pub trait AskBackend: Send + Sync {
    /// Send one question with its history and wait for the answer
    async fn ask(&self, request: &AskRequest) -> Result<AskResponse, BackendError>;

    /// Where requests go, for logging
    fn endpoint(&self) -> &str;
}

#[async_trait]
impl<T: AskBackend + ?Sized> AskBackend for Arc<T> {
    async fn ask(&self, request: &AskRequest) -> Result<AskResponse, BackendError> {
        (**self).ask(request).await
    }

    fn endpoint(&self) -> &str {
        (**self).endpoint()
    }
}

/// Logging wrapper for backends
pub struct LoggingBackend<B> {
    inner: B,
}

impl<B: AskBackend> LoggingBackend<B> {
    pub fn new(inner: B) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl<B: AskBackend> AskBackend for LoggingBackend<B> {
    async fn ask(&self, request: &AskRequest) -> Result<AskResponse, BackendError> {
        let start = std::time::Instant::now();
        let result = self.inner.ask(request).await;
        let duration = start.elapsed();

        match &result {
            Ok(response) => {
                tracing::info!(
                    endpoint = %self.inner.endpoint(),
                    duration_ms = %duration.as_millis(),
                    history_len = request.history.len(),
                    sources = response.sources.as_ref().map_or(0, Vec::len),
                    next_steps = response.next_steps.as_ref().map_or(0, Vec::len),
                    "Ask request completed"
                );
            }
            Err(e) => {
                tracing::error!(
                    endpoint = %self.inner.endpoint(),
                    duration_ms = %duration.as_millis(),
                    kind = ?e.kind,
                    error = %e.message,
                    "Ask request failed"
                );
            }
        }

        result
    }

    fn endpoint(&self) -> &str {
        self.inner.endpoint()
    }
}
