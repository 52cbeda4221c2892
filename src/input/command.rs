//! # Command parsing.
//!
//! One input line is one input event:
//!
//! ```text
//! 42000        → Command::Input("42000")     (broadcast verbatim)
//! <empty>      → Command::Input("")
//! :sub         → Command::Subscribe          (press the subscribe button)
//! :unsub       → Command::Unsubscribe        (press the unsubscribe button)
//! :quit        → Command::Quit
//! ::literal    → Command::Input(":literal")  (doubled prefix escapes)
//! :other       → CommandError::Unknown
//! ```
//!
//! Values are never validated.

use crate::error::CommandError;

/// Parsed meaning of one input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// New value of the input field.
    Input(String),
    /// Press the subscribe button.
    Subscribe,
    /// Press the unsubscribe button.
    Unsubscribe,
    /// Stop the event loop.
    Quit,
}

impl Command {
    /// Parses a line, treating lines that start with `prefix` as control commands.
    ///
    /// # Example
    /// ```
    /// use pricecast::Command;
    ///
    /// assert_eq!(Command::parse("100", ':'), Ok(Command::Input("100".into())));
    /// assert_eq!(Command::parse(":sub", ':'), Ok(Command::Subscribe));
    /// assert_eq!(Command::parse("::sub", ':'), Ok(Command::Input(":sub".into())));
    /// ```
    pub fn parse(line: &str, prefix: char) -> Result<Self, CommandError> {
        let Some(rest) = line.strip_prefix(prefix) else {
            return Ok(Command::Input(line.to_string()));
        };
        if rest.starts_with(prefix) {
            return Ok(Command::Input(rest.to_string()));
        }
        match rest.trim() {
            "" => Err(CommandError::Empty),
            "sub" | "subscribe" => Ok(Command::Subscribe),
            "unsub" | "unsubscribe" => Ok(Command::Unsubscribe),
            "quit" | "q" => Ok(Command::Quit),
            other => Err(CommandError::Unknown {
                command: other.to_string(),
            }),
        }
    }
}
