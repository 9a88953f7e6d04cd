//! Terminal rendering of transcript turns.
//!
//! Assistant turns are labelled with the host title and followed by their
//! numbered suggestions; user turns are labelled "You". The typing indicator
//! is an indicatif spinner shown while a reply is pending.

use std::time::Duration;

use console::style;
use indicatif::{ProgressBar, ProgressStyle};

use crafthub_types::assistant::Turn;

/// Renders turns for one host.
pub struct ChatRenderer {
    assistant_name: String,
}

impl ChatRenderer {
    pub fn new(assistant_name: impl Into<String>) -> Self {
        Self {
            assistant_name: assistant_name.into(),
        }
    }

    /// Format a turn as a labelled line (without suggestions).
    pub fn format_turn(&self, turn: &Turn) -> String {
        if turn.is_user() {
            format!("{} {}", style("You >").green().bold(), turn.text)
        } else {
            format!("{} {}", style(format!("{} >", self.assistant_name)).cyan().bold(), turn.text)
        }
    }

    /// Print a turn and, for assistant turns, its numbered suggestions.
    pub fn print_turn(&self, turn: &Turn) {
        println!("  {}", self.format_turn(turn));
        if let Some(suggestions) = &turn.suggestions {
            println!();
            for (i, suggestion) in suggestions.iter().enumerate() {
                println!(
                    "    {} {}",
                    style(format!("[{}]", i + 1)).yellow(),
                    style(suggestion).dim()
                );
            }
        }
        println!();
    }

    /// Print a whole transcript.
    pub fn print_transcript(&self, transcript: &[Turn]) {
        println!();
        for turn in transcript {
            self.print_turn(turn);
        }
    }

    /// Start the "typing" spinner.
    pub fn typing_spinner(&self) -> ProgressBar {
        let spinner = ProgressBar::new_spinner();
        if let Ok(spinner_style) = ProgressStyle::default_spinner().template("  {spinner:.cyan} {msg}") {
            spinner.set_style(spinner_style);
        }
        spinner.set_message(format!("{} is typing...", self.assistant_name));
        spinner.enable_steady_tick(Duration::from_millis(80));
        spinner
    }
}
