//! Line input for `crafthub chat`.
//!
//! Reads one line at a time between replies. Lines come back trimmed, so an
//! empty line is how the loop sends a picked suggestion. Non-empty lines go
//! into readline history for recall with the arrow keys.

use rustyline_async::{Readline, ReadlineError, ReadlineEvent, SharedWriter};

/// What the user did at the prompt.
#[derive(Debug)]
pub enum InputEvent {
    /// A trimmed line. Empty means "send what is pending".
    Line(String),
    /// Ctrl+D; ends the chat.
    Eof,
    /// Ctrl+C at the prompt. No reply is pending here, so nothing is cancelled.
    Interrupted,
}

pub struct ChatInput {
    rl: Readline,
}

impl ChatInput {
    /// Start readline with the chat prompt.
    ///
    /// The returned writer owns the terminal output side; dropping it while
    /// the prompt is live garbles the display.
    pub fn new(prompt: String) -> Result<(Self, SharedWriter), ReadlineError> {
        let (rl, writer) = Readline::new(prompt)?;
        Ok((Self { rl }, writer))
    }

    /// Swap the prompt, e.g. to show or hide a picked suggestion.
    pub fn update_prompt(&mut self, prompt: &str) {
        let _ = self.rl.update_prompt(prompt);
    }

    /// Next line from the user. Read errors end the chat like Ctrl+D.
    pub async fn read_line(&mut self) -> InputEvent {
        match self.rl.readline().await {
            Ok(ReadlineEvent::Line(line)) => {
                let line = line.trim().to_string();
                if !line.is_empty() {
                    self.rl.add_history_entry(line.clone());
                }
                InputEvent::Line(line)
            }
            Ok(ReadlineEvent::Eof) | Err(_) => InputEvent::Eof,
            Ok(ReadlineEvent::Interrupted) => InputEvent::Interrupted,
        }
    }

    /// `/clear`: wipe the screen, keep the session.
    pub fn clear(&mut self) {
        let _ = self.rl.clear();
    }

    /// Restore the terminal before the closing lines are printed.
    pub fn flush(&mut self) {
        let _ = self.rl.flush();
    }
}
