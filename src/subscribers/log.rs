//! # LogWriter: simple render printer
//!
//! A minimal subscriber that prints every broadcast value to stdout.
//! Use it for test or demo.
//!
//! ## Example output
//! ```text
//! [render] value="100"
//! [render] value="42000.5"
//! ```

use std::fmt;
use std::io::{self, Write};

use crate::subscribers::Subscribe;

/// Value printer subscriber.
#[derive(Default)]
pub struct LogWriter;

impl LogWriter {
    /// Construct a new [`LogWriter`].
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl<V: fmt::Debug + ?Sized> Subscribe<V> for LogWriter {
    fn render(&self, value: &V) {
        if let Err(err) = writeln!(io::stdout().lock(), "[render] value={value:?}") {
            log::debug!("log writer dropped value: {err}");
        }
    }

    fn name(&self) -> &'static str {
        "log-writer"
    }
}
