//! Simulated conversational assistant.
//!
//! `session` holds the controller, `content` the per-mode canned text,
//! `chance` the injectable randomness, and `host` the catalog of dashboard
//! dialogs that embed a session.

pub mod chance;
pub mod content;
pub mod host;
pub mod session;

pub use chance::{ChanceSource, FixedChance, RngChance};
pub use session::AssistantSession;
