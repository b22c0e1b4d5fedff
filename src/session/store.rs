//! Append-only dialogue log

use super::turn::Turn;

/// In-memory ordered log of turns. There is no update or delete: the
/// history sent with each request is exactly what was shown.
#[derive(Debug, Clone, Default)]
pub struct MessageStore {
    turns: Vec<Turn>,
}

impl MessageStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(&mut self, turn: Turn) {
        self.turns.push(turn);
    }

    pub fn all(&self) -> &[Turn] {
        &self.turns
    }

    #[allow(dead_code)] // API completeness
    pub fn last(&self) -> Option<&Turn> {
        self.turns.last()
    }

    pub fn len(&self) -> usize {
        self.turns.len()
    }

    #[allow(dead_code)] // API completeness
    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }
}
