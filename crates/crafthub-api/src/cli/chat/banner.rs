//! Welcome banner display for assistant sessions.

use console::style;

use crafthub_types::assistant::SessionId;
use crafthub_types::host::AssistantHost;

/// Print the banner shown when a chat session starts.
pub fn print_welcome_banner(host: &AssistantHost, session_id: &SessionId) {
    let session_id = session_id.to_string();

    println!();
    println!("  {} {}", style("✦").magenta(), style(&host.title).cyan().bold());
    println!("  {}", style("AI Powered").dim());
    println!();
    println!("  {}     {}", style("Mode:").bold(), style(host.mode).dim());
    println!(
        "  {}  {}",
        style("Session:").bold(),
        style(&session_id[..8.min(session_id.len())]).dim()
    );
    println!();
    println!("  {}", style(&host.placeholder).italic().dim());
    println!(
        "  {}",
        style("Type /help for commands, Ctrl+D to exit").dim()
    );
    println!("  {}", style("---").dim());
    println!();
}
