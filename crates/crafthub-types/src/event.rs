//! Event types for the assistant session event bus.
//!
//! `SessionEvent` is broadcast on every session mutation so a host can
//! re-render without polling. All variants are Clone + Send + Sync for use
//! with tokio broadcast channels.

use serde::{Deserialize, Serialize};

use crate::assistant::{SessionId, Turn};

/// Events emitted by an assistant session.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SessionEvent {
    /// A turn was appended to the transcript.
    TurnAppended {
        session_id: SessionId,
        turn: Turn,
        /// Pending flag after the append (true right after a user turn).
        awaiting_reply: bool,
    },

    /// The pending input text changed (typing, suggestion pick, submit).
    InputChanged { session_id: SessionId, pending_input: String },

    /// A scheduled reply was dropped because the session closed first.
    ReplyCancelled { session_id: SessionId },

    /// The session was closed by its host.
    Closed { session_id: SessionId },
}
