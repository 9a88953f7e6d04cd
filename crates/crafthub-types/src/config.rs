//! Assistant configuration types for Crafthub.
//!
//! `AssistantConfig` is the top-level `config.toml`. It controls the
//! simulated typing delay, how often follow-up suggestions are attached,
//! and the event channel capacity.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Top-level configuration for the simulated assistant.
///
/// Loaded from `~/.crafthub/config.toml`. All fields have defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssistantConfig {
    /// Shortest simulated typing delay, in milliseconds.
    #[serde(default = "default_reply_delay_min_ms")]
    pub reply_delay_min_ms: u64,

    /// Width of the random window added on top of the minimum delay.
    #[serde(default = "default_reply_delay_jitter_ms")]
    pub reply_delay_jitter_ms: u64,

    /// Chance that a reply carries the follow-up suggestion list.
    #[serde(default = "default_suggestion_probability")]
    pub suggestion_probability: f64,

    /// Capacity of each session's broadcast event channel.
    #[serde(default = "default_event_capacity")]
    pub event_capacity: usize,
}

fn default_reply_delay_min_ms() -> u64 {
    1500
}

fn default_reply_delay_jitter_ms() -> u64 {
    1000
}

fn default_suggestion_probability() -> f64 {
    0.5
}

fn default_event_capacity() -> usize {
    64
}

impl Default for AssistantConfig {
    fn default() -> Self {
        Self {
            reply_delay_min_ms: default_reply_delay_min_ms(),
            reply_delay_jitter_ms: default_reply_delay_jitter_ms(),
            suggestion_probability: default_suggestion_probability(),
            event_capacity: default_event_capacity(),
        }
    }
}

impl AssistantConfig {
    /// Shortest delay before a reply lands.
    pub fn min_delay(&self) -> Duration {
        Duration::from_millis(self.reply_delay_min_ms)
    }

    /// Upper bound (exclusive) of the reply delay.
    pub fn max_delay(&self) -> Duration {
        Duration::from_millis(self.reply_delay_min_ms.saturating_add(self.reply_delay_jitter_ms))
    }

    /// Check that the values describe a usable configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(0.0..=1.0).contains(&self.suggestion_probability) {
            return Err(ConfigError::InvalidProbability(self.suggestion_probability));
        }
        if self.event_capacity == 0 {
            return Err(ConfigError::ZeroEventCapacity);
        }
        if self.reply_delay_min_ms.checked_add(self.reply_delay_jitter_ms).is_none() {
            return Err(ConfigError::DelayOverflow);
        }
        Ok(())
    }
}
