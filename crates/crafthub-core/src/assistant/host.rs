//! Catalog of dashboard features that embed an assistant.
//!
//! Only two feature dialogs host a chat: the business advisor and the
//! quality assessment dialog. Other features (documents, events, training,
//! market tracker) show static panels and have no session.

use crafthub_types::assistant::AssistantMode;
use crafthub_types::config::AssistantConfig;
use crafthub_types::error::HostError;
use crafthub_types::host::AssistantHost;

use super::chance::ChanceSource;
use super::session::AssistantSession;

/// All hosts, in dashboard order.
pub fn hosts() -> Vec<AssistantHost> {
    vec![
        AssistantHost::new("ai-advisor", "AI Business Advisor", AssistantMode::Advisor)
            .with_placeholder("Ask about pricing, marketing, legal help..."),
        AssistantHost::new("quality-assessment", "Quality Assistant", AssistantMode::Quality)
            .with_placeholder("Ask about quality standards, improvements..."),
    ]
}

/// Look up the host for a dashboard feature id.
pub fn find_host(feature_id: &str) -> Result<AssistantHost, HostError> {
    hosts()
        .into_iter()
        .find(|h| h.feature_id == feature_id)
        .ok_or_else(|| HostError::UnknownFeature(feature_id.to_string()))
}

/// Ad-hoc host for a bare mode, used when no dashboard feature is involved.
pub fn standalone_host(mode: AssistantMode) -> AssistantHost {
    AssistantHost::new("assistant", mode.label(), mode)
}

/// Open a session for a host.
pub fn open_session(
    host: &AssistantHost,
    config: AssistantConfig,
    chance: Box<dyn ChanceSource>,
) -> AssistantSession {
    tracing::debug!(feature_id = %host.feature_id, mode = %host.mode, "Opening hosted assistant session");
    AssistantSession::new(host.mode, config, chance)
}
