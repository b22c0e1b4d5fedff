//! Conversation session orchestrator
//!
//! Owns the dialogue log and the transient input state, builds each `/ask`
//! request from the full history, and folds the answer back in as an
//! assistant turn. Backend failures never escape: they become a turn.
//!
//! A submission is split in two synchronous halves around the single
//! await so a renderer can observe the in-flight state:
//! [`Session::begin_submit`] then [`Session::finish_submit`].

mod store;
mod turn;

#[cfg(test)]
mod proptests;

pub use store::MessageStore;
pub use turn::{Evidence, Role, Turn, CONNECTION_ERROR, NO_ANSWER};

use crate::backend::{AskBackend, AskRequest, AskResponse, BackendError};
use crate::service::Service;
use uuid::Uuid;

/// The mutable root of one running client's dialogue
#[derive(Debug)]
pub struct Session {
    id: Uuid,
    store: MessageStore,
    draft: String,
    service_filter: Option<Service>,
    pending: bool,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4(),
            store: MessageStore::new(),
            draft: String::new(),
            service_filter: None,
            pending: false,
        }
    }

    pub fn with_service_filter(mut self, filter: Option<Service>) -> Self {
        self.service_filter = filter;
        self
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn turns(&self) -> &[Turn] {
        self.store.all()
    }

    pub fn draft(&self) -> &str {
        &self.draft
    }

    pub fn service_filter(&self) -> Option<Service> {
        self.service_filter
    }

    pub fn is_pending(&self) -> bool {
        self.pending
    }

    pub fn set_draft(&mut self, text: impl Into<String>) {
        self.draft = text.into();
    }

    pub fn set_service_filter(&mut self, filter: Option<Service>) {
        tracing::debug!(session_id = %self.id, service = ?filter, "Service filter changed");
        self.service_filter = filter;
    }

    /// Record the user's question and build the request for it.
    ///
    /// Returns `None` without touching any state when the trimmed draft is
    /// empty or a request is already outstanding.
    pub fn begin_submit(&mut self, draft: &str) -> Option<AskRequest> {
        let query = draft.trim();
        if query.is_empty() {
            return None;
        }
        if self.pending {
            tracing::debug!(session_id = %self.id, "Ignoring submit while a request is outstanding");
            return None;
        }

        self.store.append(Turn::user(query));
        self.pending = true;

        tracing::info!(
            session_id = %self.id,
            service = ?self.service_filter,
            history_len = self.store.len(),
            "Question submitted"
        );

        Some(AskRequest::new(
            query,
            self.service_filter,
            self.store.all().to_vec(),
        ))
    }

    /// Fold the outcome of the outstanding request into the dialogue.
    ///
    /// Always appends exactly one assistant turn, then clears the in-flight
    /// flag and the draft. Ignored when nothing is outstanding.
    pub fn finish_submit(&mut self, result: Result<AskResponse, BackendError>) {
        if !self.pending {
            tracing::warn!(session_id = %self.id, "Response arrived with no request outstanding");
            return;
        }

        let turn = match result {
            Ok(response) => Turn::from_response(response),
            Err(e) => {
                tracing::warn!(
                    session_id = %self.id,
                    kind = ?e.kind,
                    error = %e.message,
                    "Backend request failed, showing error turn"
                );
                Turn::connection_error()
            }
        };

        self.store.append(turn);
        self.pending = false;
        self.draft.clear();
    }

    /// Submit `draft` and wait for the answer.
    ///
    /// Returns whether a request was issued. The dialogue grows by a user
    /// and an assistant turn whenever it was.
    pub async fn submit<B: AskBackend + ?Sized>(&mut self, backend: &B, draft: &str) -> bool {
        let Some(request) = self.begin_submit(draft) else {
            return false;
        };
        let result = backend.ask(&request).await;
        self.finish_submit(result);
        true
    }

    /// Submit whatever is currently in the draft
    pub async fn submit_draft<B: AskBackend + ?Sized>(&mut self, backend: &B) -> bool {
        let draft = self.draft.clone();
        self.submit(backend, &draft).await
    }
}
