//! Main chat loop orchestration.
//!
//! Coordinates one session from banner to close: welcome turn, input loop,
//! slash commands, typing spinner while a reply is pending, and teardown.
//! The prompt is not offered while a reply is pending, the same way the
//! dialog disables its send button.

use console::style;
use tracing::info;

use crafthub_core::assistant::AssistantSession;
use crafthub_types::assistant::{SubmitOutcome, Turn};

use crate::cli::SessionTarget;
use crate::state::AppState;

use super::banner::print_welcome_banner;
use super::commands::{self, ChatCommand};
use super::input::{ChatInput, InputEvent};
use super::renderer::ChatRenderer;

/// Prompt text, showing a selected suggestion when there is one.
fn prompt_for(pending_input: &str) -> String {
    if pending_input.is_empty() {
        format!("  {} ", style("You >").green().bold())
    } else {
        format!(
            "  {} {} ",
            style("You >").green().bold(),
            style(format!("[Enter to send: {pending_input}]")).yellow()
        )
    }
}

/// Run the interactive chat loop for a host.
pub async fn run_chat_loop(state: &AppState, target: &SessionTarget) -> anyhow::Result<()> {
    let host = target.resolve()?;
    let session = state.open_session(&host, target.seed);
    let renderer = ChatRenderer::new(host.mode.label());

    info!(
        session_id = %session.id(),
        feature_id = %host.feature_id,
        mode = %host.mode,
        data_dir = %state.data_dir.display(),
        "Chat session started"
    );

    print_welcome_banner(&host, &session.id());
    for turn in session.transcript() {
        renderer.print_turn(&turn);
    }

    let (mut chat_input, _writer) = ChatInput::new(prompt_for(""))
        .map_err(|e| anyhow::anyhow!("Failed to initialize input: {e}"))?;

    loop {
        let event = chat_input.read_line().await;
        let text = match event {
            InputEvent::Eof => break,
            InputEvent::Interrupted => {
                println!("\n  {}", style("Press Ctrl+D to exit, or keep chatting.").dim());
                continue;
            }
            InputEvent::Line(text) => text,
        };

        if let Some(cmd) = commands::parse(&text) {
            match cmd {
                ChatCommand::Help => commands::print_help(),
                ChatCommand::Pick(n) => pick_suggestion(&session, n),
                ChatCommand::Send => {
                    if !session.can_submit() {
                        println!("\n  {} Nothing selected to send.\n", style("?").yellow().bold());
                    } else {
                        let outcome = session.submit_pending();
                        await_reply(&session, &renderer, outcome).await;
                    }
                }
                ChatCommand::History => renderer.print_transcript(&session.transcript()),
                ChatCommand::Clear => chat_input.clear(),
                ChatCommand::Exit => break,
                ChatCommand::Unknown(cmd_name) => {
                    println!(
                        "\n  {} Unknown command: {}. Type /help for available commands.\n",
                        style("?").yellow().bold(),
                        style(cmd_name).dim()
                    );
                }
            }
            chat_input.update_prompt(&prompt_for(&session.pending_input()));
            if session.is_closed() {
                break;
            }
            continue;
        }

        // An empty line sends a selected suggestion; anything else replaces it.
        if !text.is_empty() {
            session.set_input(text);
        }
        if session.can_submit() {
            let outcome = session.submit_pending();
            await_reply(&session, &renderer, outcome).await;
        }
        chat_input.update_prompt(&prompt_for(&session.pending_input()));
        if session.is_closed() {
            break;
        }
    }

    chat_input.flush();
    let turns = session.turn_count();
    session.close();
    println!("\n  {}", style("Session ended.").dim());
    info!(session_id = %session.id(), turns, "Chat session ended");
    Ok(())
}

/// Copy suggestion `n` of the latest assistant turn into the pending input.
fn pick_suggestion(session: &AssistantSession, n: usize) {
    let snapshot = session.snapshot();
    let suggestion = snapshot
        .last_assistant_turn()
        .and_then(|t| t.suggestions.as_ref())
        .and_then(|s| s.get(n - 1));

    match suggestion {
        Some(text) => {
            session.select_suggestion(text);
            println!(
                "\n  {} Selected: {}\n",
                style("*").cyan().bold(),
                style(text).dim()
            );
        }
        None => println!(
            "\n  {} No suggestion number {n} on the latest reply.\n",
            style("?").yellow().bold()
        ),
    }
}

/// Show the typing spinner until the reply lands, then print both turns.
///
/// Ctrl+C while waiting closes the session and drops the pending reply.
async fn await_reply(session: &AssistantSession, renderer: &ChatRenderer, outcome: SubmitOutcome) {
    if !outcome.is_accepted() {
        return;
    }

    println!();
    if let Some(user_turn) = session.transcript().last() {
        renderer.print_turn(user_turn);
    }

    let spinner = renderer.typing_spinner();
    tokio::select! {
        _ = session.wait_idle() => {}
        _ = tokio::signal::ctrl_c() => {
            session.close();
        }
    }
    spinner.finish_and_clear();

    let reply: Option<Turn> = session.transcript().pop().filter(Turn::is_assistant);
    match reply {
        Some(turn) => renderer.print_turn(&turn),
        None => println!("  {}", style("Reply cancelled.").dim()),
    }
}
