//! Error types used by the board glue.
//!
//! The observer core never fails: unsubscribing an absent handle is a no-op and
//! renders do not return errors. Failures only exist at the edges:
//!
//! - [`BoardError`]: errors that end [`Board::run`](crate::Board::run).
//! - [`CommandError`]: a control line that could not be understood; logged and skipped.
//!
//! Both types provide helper methods (`as_label`, `as_message`) for logging.

use std::io;
use thiserror::Error;

/// # Errors that stop the board event loop.
#[non_exhaustive]
#[derive(Error, Debug)]
pub enum BoardError {
    /// Reading the next line from the input source failed.
    #[error("input source failed: {source}")]
    Input {
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// OS signal handlers could not be installed.
    #[error("failed to install signal handlers: {source}")]
    Signal {
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },
}

impl BoardError {
    /// Returns a short stable label (snake_case) for use in logs.
    ///
    /// # Example
    /// ```
    /// use pricecast::BoardError;
    ///
    /// let err = BoardError::Input { source: std::io::ErrorKind::BrokenPipe.into() };
    /// assert_eq!(err.as_label(), "board_input_failed");
    /// ```
    pub fn as_label(&self) -> &'static str {
        match self {
            BoardError::Input { .. } => "board_input_failed",
            BoardError::Signal { .. } => "board_signal_failed",
        }
    }

    /// Returns a human-readable message with details about the error.
    pub fn as_message(&self) -> String {
        match self {
            BoardError::Input { source } => format!("input: {source}"),
            BoardError::Signal { source } => format!("signal: {source}"),
        }
    }
}

/// # Errors produced while parsing a control line.
#[non_exhaustive]
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    /// The line named a command that does not exist.
    #[error("unknown command {command:?}")]
    Unknown {
        /// The command word as typed, without the prefix.
        command: String,
    },

    /// The line consisted of the command prefix only.
    #[error("empty command")]
    Empty,
}

impl CommandError {
    /// Returns a short stable label (snake_case) for use in logs.
    ///
    /// # Example
    /// ```
    /// use pricecast::CommandError;
    ///
    /// let err = CommandError::Unknown { command: "reset".into() };
    /// assert_eq!(err.as_label(), "command_unknown");
    /// ```
    pub fn as_label(&self) -> &'static str {
        match self {
            CommandError::Unknown { .. } => "command_unknown",
            CommandError::Empty => "command_empty",
        }
    }

    /// Returns a human-readable message with details about the error.
    pub fn as_message(&self) -> String {
        match self {
            CommandError::Unknown { command } => format!("unknown: {command}"),
            CommandError::Empty => "empty command".to_string(),
        }
    }
}
