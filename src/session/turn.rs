//! Dialogue turn types

use crate::backend::AskResponse;
use serde::{Deserialize, Serialize};

/// Shown when the backend answers without any answer text
pub const NO_ANSWER: &str = "No answer generated.";

/// Shown in place of an answer when the request could not complete
pub const CONNECTION_ERROR: &str = "Error connecting to the server. Please try again.";

/// Who produced a turn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    User,
    Assistant,
}

/// A retrieved document snippet
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Evidence {
    pub section: String,
    pub service: String,
    pub score: f64,
    pub text: String,
}

/// One dialogue entry. Fields are private so a turn cannot change after
/// construction, and user turns can never carry sources or next steps.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Turn {
    role: Role,
    content: String,
    sources: Vec<Evidence>,
    next_steps: Vec<String>,
}

impl Turn {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
            sources: Vec::new(),
            next_steps: Vec::new(),
        }
    }

    pub fn assistant(
        content: impl Into<String>,
        sources: Vec<Evidence>,
        next_steps: Vec<String>,
    ) -> Self {
        Self {
            role: Role::Assistant,
            content: content.into(),
            sources,
            next_steps,
        }
    }

    /// Build the assistant turn for a successful response; server order of
    /// sources and next steps is kept.
    pub fn from_response(response: AskResponse) -> Self {
        let content = response
            .answer
            .filter(|answer| !answer.is_empty())
            .unwrap_or_else(|| NO_ANSWER.to_string());

        Self::assistant(
            content,
            response.sources.unwrap_or_default(),
            response.next_steps.unwrap_or_default(),
        )
    }

    /// The synthetic assistant turn that stands in for a failed request
    pub fn connection_error() -> Self {
        Self::assistant(CONNECTION_ERROR, Vec::new(), Vec::new())
    }

    pub fn role(&self) -> Role {
        self.role
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn sources(&self) -> &[Evidence] {
        &self.sources
    }

    pub fn next_steps(&self) -> &[String] {
        &self.next_steps
    }
}
