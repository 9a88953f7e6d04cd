//! Assistant session types for Crafthub.
//!
//! These types model a simulated assistant conversation: the mode that picks
//! the canned content table, the turns of the transcript, and the snapshot
//! handed to the presentation layer after every mutation.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use std::fmt;
use std::str::FromStr;

/// Which canned-content table a session draws from.
///
/// Parsing a mode from a string key never fails: unrecognized keys fall back
/// to [`AssistantMode::Generic`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AssistantMode {
    /// Business advisor (pricing, legal, planning).
    Advisor,
    /// Craft quality assessor.
    Quality,
    /// Market intelligence analyst.
    Market,
    /// General-purpose assistant, also the fallback.
    Generic,
}

impl AssistantMode {
    /// Every mode, in display order.
    pub const ALL: [AssistantMode; 4] = [
        AssistantMode::Advisor,
        AssistantMode::Quality,
        AssistantMode::Market,
        AssistantMode::Generic,
    ];

    /// Resolve a mode from a host-supplied key.
    ///
    /// `"general"` is accepted as an alias of `"generic"`. Any other unknown
    /// key resolves to `Generic`.
    pub fn from_key(key: &str) -> Self {
        match key.trim().to_lowercase().as_str() {
            "advisor" => AssistantMode::Advisor,
            "quality" => AssistantMode::Quality,
            "market" => AssistantMode::Market,
            _ => AssistantMode::Generic,
        }
    }

    /// Human-readable role name shown in banners and tables.
    pub fn label(&self) -> &'static str {
        match self {
            AssistantMode::Advisor => "General Advisor",
            AssistantMode::Quality => "Quality Assessor",
            AssistantMode::Market => "Market Analyst",
            AssistantMode::Generic => "Assistant",
        }
    }
}

impl Default for AssistantMode {
    fn default() -> Self {
        AssistantMode::Generic
    }
}

impl fmt::Display for AssistantMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AssistantMode::Advisor => write!(f, "advisor"),
            AssistantMode::Quality => write!(f, "quality"),
            AssistantMode::Market => write!(f, "market"),
            AssistantMode::Generic => write!(f, "generic"),
        }
    }
}

impl FromStr for AssistantMode {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from_key(s))
    }
}

/// Who authored a turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Speaker {
    User,
    Assistant,
}

impl fmt::Display for Speaker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Speaker::User => write!(f, "user"),
            Speaker::Assistant => write!(f, "assistant"),
        }
    }
}

/// Strongly-typed session identifier wrapping a UUID v7.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SessionId(pub Uuid);

impl SessionId {
    /// Create a new SessionId using UUID v7 (time-sortable).
    pub fn new() -> Self {
        Self(Uuid::now_v7())
    }
}

impl Default for SessionId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Position of a turn within its session, assigned in creation order.
///
/// The welcome turn is always `TurnId(1)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TurnId(pub u64);

impl fmt::Display for TurnId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One entry in a session transcript.
///
/// Turns are immutable once appended.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Turn {
    pub id: TurnId,
    pub speaker: Speaker,
    pub text: String,
    pub created_at: DateTime<Utc>,
    /// Follow-up prompts offered with an assistant turn. Picking one fills
    /// the pending input; it is never submitted on its own.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suggestions: Option<Vec<String>>,
}

impl Turn {
    pub fn is_user(&self) -> bool {
        self.speaker == Speaker::User
    }

    pub fn is_assistant(&self) -> bool {
        self.speaker == Speaker::Assistant
    }
}

/// Owned copy of a session's presentable state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionSnapshot {
    pub id: SessionId,
    pub mode: AssistantMode,
    pub transcript: Vec<Turn>,
    pub pending_input: String,
    pub awaiting_reply: bool,
}

impl SessionSnapshot {
    /// The most recent assistant turn, if any.
    pub fn last_assistant_turn(&self) -> Option<&Turn> {
        self.transcript.iter().rev().find(|t| t.is_assistant())
    }
}

/// Result of a submission attempt.
///
/// The ignored variants are not errors: they describe why the session
/// absorbed the call without changing state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum SubmitOutcome {
    /// A user turn was appended and a reply is on its way.
    Accepted { turn_id: TurnId },
    /// The text was empty or whitespace only.
    IgnoredEmpty,
    /// A reply is still pending.
    IgnoredPending,
    /// The session has been closed.
    Closed,
    /// No tokio runtime was running to schedule the reply.
    NoRuntime,
}

impl SubmitOutcome {
    pub fn is_accepted(&self) -> bool {
        matches!(self, SubmitOutcome::Accepted { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_from_key_known() {
        assert_eq!(AssistantMode::from_key("advisor"), AssistantMode::Advisor);
        assert_eq!(AssistantMode::from_key("Quality"), AssistantMode::Quality);
        assert_eq!(AssistantMode::from_key(" market "), AssistantMode::Market);
        assert_eq!(AssistantMode::from_key("generic"), AssistantMode::Generic);
    }

    #[test]
    fn test_mode_from_key_falls_back_to_generic() {
        assert_eq!(AssistantMode::from_key("general"), AssistantMode::Generic);
        assert_eq!(AssistantMode::from_key("weather"), AssistantMode::Generic);
        assert_eq!(AssistantMode::from_key(""), AssistantMode::Generic);
    }

    #[test]
    fn test_mode_display_parses_back() {
        for mode in AssistantMode::ALL {
            let parsed: AssistantMode = mode.to_string().parse().unwrap();
            assert_eq!(parsed, mode);
        }
    }

    #[test]
    fn test_mode_serde() {
        let json = serde_json::to_string(&AssistantMode::Market).unwrap();
        assert_eq!(json, "\"market\"");
        let parsed: AssistantMode = serde_json::from_str("\"quality\"").unwrap();
        assert_eq!(parsed, AssistantMode::Quality);
    }

    #[test]
    fn test_mode_default() {
        assert_eq!(AssistantMode::default(), AssistantMode::Generic);
    }

    #[test]
    fn test_turn_skips_missing_suggestions() {
        let turn = Turn {
            id: TurnId(2),
            speaker: Speaker::User,
            text: "hello".to_string(),
            created_at: Utc::now(),
            suggestions: None,
        };
        let json = serde_json::to_string(&turn).unwrap();
        assert!(json.contains("\"speaker\":\"user\""));
        assert!(json.contains("\"id\":2"));
        assert!(!json.contains("suggestions"));
    }

    #[test]
    fn test_submit_outcome_serde() {
        let outcome = SubmitOutcome::Accepted { turn_id: TurnId(3) };
        let json = serde_json::to_string(&outcome).unwrap();
        assert_eq!(json, r#"{"outcome":"accepted","turn_id":3}"#);
        assert!(outcome.is_accepted());
        assert!(!SubmitOutcome::IgnoredPending.is_accepted());
    }
}
