//! Crafthub assistant terminal entry point.
//!
//! Binary name: `crafthub`
//!
//! Parses CLI arguments, loads configuration, then dispatches to the
//! requested command.

mod cli;
mod state;

use clap::Parser;
use clap_complete::generate;
use tracing_subscriber::EnvFilter;

use cli::{Cli, Commands};
use state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Set up tracing based on verbosity
    let filter = match cli.verbose {
        0 if cli.quiet => "error",
        0 => "warn",
        1 => "info,crafthub=debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Completions { shell } => {
            let mut cmd = <Cli as clap::CommandFactory>::command();
            generate(shell, &mut cmd, "crafthub", &mut std::io::stdout());
        }

        Commands::Modes => {
            cli::catalog::list_modes(cli.json)?;
        }

        Commands::Hosts => {
            cli::catalog::list_hosts(cli.json)?;
        }

        Commands::Ask { target, text } => {
            let state = AppState::init().await;
            cli::ask::ask(&state, &target, &text, cli.json, cli.quiet).await?;
        }

        Commands::Chat { target } => {
            let state = AppState::init().await;
            cli::chat::loop_runner::run_chat_loop(&state, &target).await?;
        }
    }

    Ok(())
}
