//! Slash command parsing for the chat loop.
//!
//! Commands start with `/` and give keyboard access to what the dialog
//! offers with buttons: suggestion chips, the send button, and close.

use console::style;

/// Available slash commands in the chat loop.
#[derive(Debug, PartialEq)]
pub enum ChatCommand {
    /// Show available commands.
    Help,
    /// Copy suggestion N (1-based) of the latest assistant turn into the input.
    Pick(usize),
    /// Submit the pending input.
    Send,
    /// Reprint the transcript.
    History,
    /// Clear the terminal screen.
    Clear,
    /// Close the session.
    Exit,
    /// Unknown or malformed command.
    Unknown(String),
}

/// Parse user input as a slash command.
///
/// Returns `None` if the input doesn't start with `/`.
pub fn parse(input: &str) -> Option<ChatCommand> {
    let trimmed = input.trim();
    if !trimmed.starts_with('/') {
        return None;
    }

    let mut parts = trimmed.splitn(2, ' ');
    let cmd = parts.next().unwrap_or_default().to_lowercase();
    let arg = parts.next().map(str::trim).filter(|a| !a.is_empty());

    match cmd.as_str() {
        "/help" | "/h" | "/?" => Some(ChatCommand::Help),
        "/pick" | "/p" => match arg.and_then(|a| a.parse::<usize>().ok()) {
            Some(n) if n > 0 => Some(ChatCommand::Pick(n)),
            _ => Some(ChatCommand::Unknown("/pick requires a suggestion number".to_string())),
        },
        "/send" | "/s" => Some(ChatCommand::Send),
        "/history" => Some(ChatCommand::History),
        "/clear" | "/cls" => Some(ChatCommand::Clear),
        "/exit" | "/quit" | "/q" => Some(ChatCommand::Exit),
        other => Some(ChatCommand::Unknown(other.to_string())),
    }
}

/// Print the help text listing all available commands.
pub fn print_help() {
    println!();
    println!("  {}", style("Available commands:").bold());
    println!();
    println!("  {}   {}", style("/pick N").cyan(), "Use suggestion N as your next message");
    println!("  {}     {}", style("/send").cyan(), "Send the selected suggestion");
    println!("  {}  {}", style("/history").cyan(), "Show the conversation so far");
    println!("  {}    {}", style("/clear").cyan(), "Clear the screen");
    println!("  {}     {}", style("/exit").cyan(), "Close the assistant");
    println!();
    println!(
        "  {}",
        style("An empty line also sends a selected suggestion. Ctrl+D to exit.").dim()
    );
    println!();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_help() {
        assert_eq!(parse("/help"), Some(ChatCommand::Help));
        assert_eq!(parse("/?"), Some(ChatCommand::Help));
    }

    #[test]
    fn test_parse_pick() {
        assert_eq!(parse("/pick 2"), Some(ChatCommand::Pick(2)));
        assert_eq!(parse("/p  3 "), Some(ChatCommand::Pick(3)));
    }

    #[test]
    fn test_parse_pick_requires_positive_number() {
        assert!(matches!(parse("/pick"), Some(ChatCommand::Unknown(_))));
        assert!(matches!(parse("/pick 0"), Some(ChatCommand::Unknown(_))));
        assert!(matches!(parse("/pick two"), Some(ChatCommand::Unknown(_))));
    }

    #[test]
    fn test_parse_exit_and_send() {
        assert_eq!(parse("/quit"), Some(ChatCommand::Exit));
        assert_eq!(parse("/send"), Some(ChatCommand::Send));
    }

    #[test]
    fn test_parse_not_command() {
        assert_eq!(parse("current prices?"), None);
    }

    #[test]
    fn test_parse_unknown() {
        assert_eq!(parse("/foo"), Some(ChatCommand::Unknown("/foo".to_string())));
    }
}
