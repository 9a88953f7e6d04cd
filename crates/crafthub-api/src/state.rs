//! Application state shared by every command.
//!
//! Holds the resolved data directory and the loaded assistant configuration,
//! and opens sessions with either an entropy-seeded or a fixed-seed
//! generator.

use std::path::PathBuf;

use crafthub_core::assistant::host::open_session;
use crafthub_core::assistant::{AssistantSession, ChanceSource, RngChance};
use crafthub_infra::config::load_assistant_config;
use crafthub_infra::filesystem::resolve_data_dir;
use crafthub_types::config::AssistantConfig;
use crafthub_types::host::AssistantHost;

#[derive(Debug, Clone)]
pub struct AppState {
    pub data_dir: PathBuf,
    pub config: AssistantConfig,
}

impl AppState {
    /// Resolve the data directory and load `config.toml` from it.
    pub async fn init() -> Self {
        let data_dir = resolve_data_dir();
        let config = load_assistant_config(&data_dir).await;
        tracing::debug!(data_dir = %data_dir.display(), ?config, "Application state initialized");
        Self { data_dir, config }
    }

    /// Open a session for `host`. A seed makes every reply and delay reproducible.
    pub fn open_session(&self, host: &AssistantHost, seed: Option<u64>) -> AssistantSession {
        let chance: Box<dyn ChanceSource> = match seed {
            Some(seed) => Box::new(RngChance::seeded(seed)),
            None => Box::new(RngChance::from_entropy()),
        };
        open_session(host, self.config.clone(), chance)
    }
}
