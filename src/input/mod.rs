//! # Input side of the board: raw lines and the commands they carry.
//!
//! ## Contents
//! - [`InputSource`] async trait yielding raw lines, with [`LineSource`] (any
//!   `AsyncBufRead`, typically stdin) and [`StreamSource`] (any `Stream<Item = String>`)
//! - [`Command`] parsed meaning of one line

mod command;
mod source;

pub use command::Command;
pub use source::{InputSource, LineSource, StreamSource};
