//! Conversation turns and the append-only transcript.
//!
//! The transcript exists for display; nothing in the extraction engine reads
//! it back, so a prompt is always answered the same way regardless of history.

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use tenderlens_core::{Role, SummaryResult};

/// One message in the conversation.
#[derive(Debug, Clone, Serialize)]
pub struct Turn {
    pub id: Uuid,
    pub role: Role,
    /// Prompt text for user turns, answer text for assistant turns.
    pub content: String,
    /// Present when the assistant answered with a full summary.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<SummaryResult>,
    /// Set when the assistant turn reports a failure.
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub is_error: bool,
    pub created_at: DateTime<Utc>,
}

impl Turn {
    fn new(role: Role, content: String) -> Self {
        Self {
            id: Uuid::now_v7(),
            role,
            content,
            summary: None,
            is_error: false,
            created_at: Utc::now(),
        }
    }

    #[must_use]
    pub fn user(prompt: impl Into<String>) -> Self {
        Self::new(Role::User, prompt.into())
    }

    #[must_use]
    pub fn assistant(answer: impl Into<String>) -> Self {
        Self::new(Role::Assistant, answer.into())
    }

    #[must_use]
    pub fn summary(intro: impl Into<String>, summary: SummaryResult) -> Self {
        let mut turn = Self::new(Role::Assistant, intro.into());
        turn.summary = Some(summary);
        turn
    }

    #[must_use]
    pub fn error(message: impl Into<String>) -> Self {
        let mut turn = Self::new(Role::Assistant, message.into());
        turn.is_error = true;
        turn
    }
}

/// Ordered record of every turn in a session.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Transcript {
    turns: Vec<Turn>,
}

impl Transcript {
    #[must_use]
    pub const fn new() -> Self {
        Self { turns: Vec::new() }
    }

    /// Append a turn and return a reference to it.
    pub fn push(&mut self, turn: Turn) -> &Turn {
        let index = self.turns.len();
        self.turns.push(turn);
        &self.turns[index]
    }

    #[must_use]
    pub fn turns(&self) -> &[Turn] {
        &self.turns
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.turns.len()
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }

    /// Number of user prompts answered so far.
    #[must_use]
    pub fn user_turns(&self) -> usize {
        self.turns.iter().filter(|t| t.role == Role::User).count()
    }
}
