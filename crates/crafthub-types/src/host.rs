//! Host descriptors for views that embed an assistant session.
//!
//! A host is the dashboard feature dialog that owns a session. It supplies
//! the title and input placeholder shown around the transcript, and the
//! mode the session is created with.

use serde::{Deserialize, Serialize};

use crate::assistant::AssistantMode;

/// Placeholder used when a host does not provide its own.
pub const DEFAULT_PLACEHOLDER: &str = "Ask me anything...";

/// Presentation details for one embedded assistant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssistantHost {
    /// Dashboard feature id (e.g. "ai-advisor").
    pub feature_id: String,
    pub title: String,
    pub placeholder: String,
    pub mode: AssistantMode,
}

impl AssistantHost {
    /// Create a host with the default placeholder.
    pub fn new(feature_id: impl Into<String>, title: impl Into<String>, mode: AssistantMode) -> Self {
        Self {
            feature_id: feature_id.into(),
            title: title.into(),
            placeholder: DEFAULT_PLACEHOLDER.to_string(),
            mode,
        }
    }

    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }
}
