//! One-shot question: open a session, submit once, wait for the reply.

use anyhow::{bail, Result};
use console::style;

use crafthub_types::assistant::SubmitOutcome;

use super::chat::renderer::ChatRenderer;
use super::SessionTarget;
use crate::state::AppState;

/// Submit `text` to a fresh session and print the resulting transcript.
pub async fn ask(state: &AppState, target: &SessionTarget, text: &str, json: bool, quiet: bool) -> Result<()> {
    let host = target.resolve()?;
    let session = state.open_session(&host, target.seed);

    match session.submit(text) {
        SubmitOutcome::Accepted { .. } => {}
        SubmitOutcome::IgnoredEmpty => bail!("nothing to ask: the question is empty"),
        other => bail!("question was not submitted: {other:?}"),
    }

    let renderer = ChatRenderer::new(host.mode.label());
    let spinner = (!json && !quiet).then(|| renderer.typing_spinner());
    session.wait_idle().await;
    if let Some(spinner) = spinner {
        spinner.finish_and_clear();
    }

    let snapshot = session.snapshot();
    session.close();

    if json {
        println!("{}", serde_json::to_string_pretty(&snapshot)?);
        return Ok(());
    }

    if !quiet {
        println!();
        println!("  {} {}", style("✦").magenta(), style(&host.title).cyan().bold());
    }
    renderer.print_transcript(&snapshot.transcript);
    Ok(())
}
