//! # Input sources.
//!
//! [`InputSource`] is the seam between the outside world and the board: it yields
//! the raw value of the input field each time it changes.
//!
//! ## Rules
//! - `Ok(Some(line))` is one change event.
//! - `Ok(None)` means the source is exhausted; the board stops.
//! - `Err(_)` ends [`Board::run`](crate::Board::run) with [`BoardError::Input`](crate::BoardError::Input).

use std::io;

use async_trait::async_trait;
use futures::{Stream, StreamExt};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader, Lines, Stdin};

/// Source of raw input lines.
#[async_trait]
pub trait InputSource: Send {
    /// Waits for the next line.
    ///
    /// Must be cancel-safe: the board may drop the future when shutting down.
    async fn next_line(&mut self) -> io::Result<Option<String>>;
}

/// Line-oriented source over any buffered async reader.
pub struct LineSource<R> {
    lines: Lines<R>,
}

impl<R: AsyncBufRead + Unpin + Send> LineSource<R> {
    /// Reads lines from `reader`.
    pub fn new(reader: R) -> Self {
        Self {
            lines: reader.lines(),
        }
    }
}

impl LineSource<BufReader<Stdin>> {
    /// Reads lines from the process standard input.
    pub fn stdin() -> Self {
        Self::new(BufReader::new(tokio::io::stdin()))
    }
}

#[async_trait]
impl<R: AsyncBufRead + Unpin + Send> InputSource for LineSource<R> {
    async fn next_line(&mut self) -> io::Result<Option<String>> {
        self.lines.next_line().await
    }
}

/// Source backed by a stream of already decoded values.
pub struct StreamSource<S> {
    stream: S,
}

impl<S: Stream<Item = String> + Unpin + Send> StreamSource<S> {
    /// Wraps `stream`.
    pub fn new(stream: S) -> Self {
        Self { stream }
    }
}

#[async_trait]
impl<S: Stream<Item = String> + Unpin + Send> InputSource for StreamSource<S> {
    async fn next_line(&mut self) -> io::Result<Option<String>> {
        Ok(self.stream.next().await)
    }
}
