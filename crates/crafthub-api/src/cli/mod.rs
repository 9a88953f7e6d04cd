//! CLI command definitions for the `crafthub` binary.
//!
//! Uses clap derive macros for argument parsing. Every command that opens a
//! session accepts either `--mode` or `--feature` to pick the assistant.

pub mod ask;
pub mod catalog;
pub mod chat;

use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;

use crafthub_core::assistant::host::{find_host, standalone_host};
use crafthub_types::assistant::AssistantMode;
use crafthub_types::host::AssistantHost;

/// Talk to the craft-business assistant from your terminal.
#[derive(Parser)]
#[command(name = "crafthub", version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output machine-readable JSON instead of styled text.
    #[arg(long, global = true)]
    pub json: bool,

    /// Suppress all output except errors.
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Detailed output (-v for verbose, -vv for debug/trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start an interactive assistant session.
    Chat {
        #[command(flatten)]
        target: SessionTarget,
    },

    /// Ask a single question and print the conversation.
    Ask {
        #[command(flatten)]
        target: SessionTarget,

        /// Question to submit.
        text: String,
    },

    /// List assistant modes and their welcome messages.
    Modes,

    /// List dashboard features that embed an assistant.
    Hosts,

    /// Generate shell completions.
    Completions {
        /// Shell to generate completions for.
        shell: Shell,
    },
}

/// Which assistant a session should use.
#[derive(Args, Debug, Clone)]
pub struct SessionTarget {
    /// Assistant mode (advisor, quality, market, generic). Unknown values use generic.
    #[arg(short, long, conflicts_with = "feature")]
    pub mode: Option<String>,

    /// Dashboard feature id hosting the assistant (see `crafthub hosts`).
    #[arg(short, long)]
    pub feature: Option<String>,

    /// Seed for reproducible replies and delays.
    #[arg(long)]
    pub seed: Option<u64>,
}

impl SessionTarget {
    /// Resolve the host descriptor for this target.
    ///
    /// With neither flag set, a standalone generic assistant is used.
    pub fn resolve(&self) -> anyhow::Result<AssistantHost> {
        if let Some(feature) = &self.feature {
            return Ok(find_host(feature)?);
        }
        let mode = self
            .mode
            .as_deref()
            .map(AssistantMode::from_key)
            .unwrap_or_default();
        Ok(standalone_host(mode))
    }
}

/// Shorten `text` to at most `max` characters, adding an ellipsis.
pub fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    let kept: String = text.chars().take(max.saturating_sub(3)).collect();
    format!("{kept}...")
}
