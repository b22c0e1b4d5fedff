//! Wire types for the `/ask` endpoint

use crate::service::Service;
use crate::session::{Evidence, Turn};
use serde::{Deserialize, Serialize};

/// Evidence snippets requested per question
pub const DEFAULT_TOP_K: u32 = 5;

/// Body of `POST /ask`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AskRequest {
    pub query: String,
    pub top_k: u32,
    pub include_sources: bool,
    /// `null` on the wire means auto-detect across all services
    pub service: Option<Service>,
    pub history: Vec<Turn>,
}

impl AskRequest {
    pub fn new(query: impl Into<String>, service: Option<Service>, history: Vec<Turn>) -> Self {
        Self {
            query: query.into(),
            top_k: DEFAULT_TOP_K,
            include_sources: true,
            service,
            history,
        }
    }
}

/// Body returned by `/ask`. Every field may be missing or `null`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct AskResponse {
    #[serde(default)]
    pub answer: Option<String>,
    #[serde(default)]
    pub sources: Option<Vec<Evidence>>,
    #[serde(default)]
    pub next_steps: Option<Vec<String>>,
}
