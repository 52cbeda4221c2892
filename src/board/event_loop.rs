//! # Board event loop.
//!
//! [`Board`] owns the [`Publisher`], the two price displays and the
//! [`ControlPanel`]. It is the only place where input, buttons and the registry
//! meet; neither displays nor the publisher know about each other beyond
//! [`Handle`]s.
//!
//! ## Loop
//! ```text
//! loop {
//!   ├─► select { token cancelled ─► exit, source.next_line() }
//!   ├─► None      ─► exit (input exhausted)
//!   ├─► Err(io)   ─► return BoardError::Input
//!   └─► Some(line) ─► Command::parse
//!          ├─ Input(v)     ─► publisher.broadcast(v)
//!          ├─ Subscribe    ─► press subscribe button
//!          ├─ Unsubscribe  ─► press unsubscribe button
//!          ├─ Quit         ─► exit
//!          └─ Err(cmd)     ─► warn, continue
//! }
//! ```

use tokio_util::sync::CancellationToken;

use super::{builder::BoardBuilder, controls::ControlPanel};
use crate::{
    config::Config,
    error::BoardError,
    input::{Command, InputSource},
    publisher::Publisher,
    subscribers::Handle,
};

/// Whether the loop keeps going after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    /// Read the next line.
    Continue,
    /// Leave the loop.
    Stop,
}

/// Counters accumulated by a [`Board`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunStats {
    /// Lines read from the input source.
    pub lines: usize,
    /// Values broadcast.
    pub broadcasts: usize,
    /// Render invocations across all broadcasts.
    pub renders: usize,
    /// Control lines that failed to parse.
    pub rejected: usize,
}

/// Price board: one input, two displays, two buttons.
pub struct Board {
    cfg: Config,
    publisher: Publisher<str>,
    price: Handle<str>,
    label: Handle<str>,
    controls: ControlPanel,
    stats: RunStats,
}

impl Board {
    /// Returns a builder for a board using `cfg`.
    pub fn builder(cfg: Config) -> BoardBuilder {
        BoardBuilder::new(cfg)
    }

    pub(crate) fn new_internal(
        cfg: Config,
        publisher: Publisher<str>,
        price: Handle<str>,
        label: Handle<str>,
        controls: ControlPanel,
    ) -> Self {
        Self {
            cfg,
            publisher,
            price,
            label,
            controls,
            stats: RunStats::default(),
        }
    }

    /// The underlying publisher.
    pub fn publisher(&self) -> &Publisher<str> {
        &self.publisher
    }

    /// Handle of the price display.
    pub fn price_handle(&self) -> &Handle<str> {
        &self.price
    }

    /// Handle of the label display.
    pub fn label_handle(&self) -> &Handle<str> {
        &self.label
    }

    /// Current button state.
    pub fn controls(&self) -> &ControlPanel {
        &self.controls
    }

    /// Counters so far.
    pub fn stats(&self) -> RunStats {
        self.stats
    }

    /// Publishes a new input value to every subscriber.
    ///
    /// Returns the number of renders performed.
    pub fn input(&mut self, value: &str) -> usize {
        let renders = self.publisher.broadcast(value);
        self.stats.broadcasts += 1;
        self.stats.renders += renders;
        renders
    }

    /// Presses the subscribe button.
    ///
    /// If enabled, subscribes the price and label displays (again, if they are
    /// already registered). Returns whether the press had an effect.
    pub fn press_subscribe(&mut self) -> bool {
        if !self.controls.press_subscribe() {
            log::debug!("subscribe button is disabled");
            return false;
        }
        self.publisher.subscribe(&self.price);
        self.publisher.subscribe(&self.label);
        true
    }

    /// Presses the unsubscribe button.
    ///
    /// If enabled, unsubscribes the label display. Returns whether the press had
    /// an effect.
    pub fn press_unsubscribe(&mut self) -> bool {
        if !self.controls.press_unsubscribe() {
            log::debug!("unsubscribe button is disabled");
            return false;
        }
        self.publisher.unsubscribe(&self.label);
        true
    }

    /// Applies one parsed command.
    pub fn apply(&mut self, cmd: Command) -> Flow {
        match cmd {
            Command::Input(value) => {
                self.input(&value);
            }
            Command::Subscribe => {
                self.press_subscribe();
            }
            Command::Unsubscribe => {
                self.press_unsubscribe();
            }
            Command::Quit => return Flow::Stop,
        }
        Flow::Continue
    }

    /// Parses and applies one raw input line.
    ///
    /// Unparseable control lines are logged and skipped.
    pub fn handle_line(&mut self, line: &str) -> Flow {
        self.stats.lines += 1;
        match Command::parse(line, self.cfg.command_prefix) {
            Ok(cmd) => self.apply(cmd),
            Err(err) => {
                self.stats.rejected += 1;
                log::warn!("[{}] ignored line {line:?}: {err}", err.as_label());
                Flow::Continue
            }
        }
    }

    /// Drives the board from `source` until the input ends, `:quit` is read, or
    /// `token` is cancelled.
    ///
    /// Returns the accumulated [`RunStats`].
    pub async fn run<S>(
        &mut self,
        source: &mut S,
        token: CancellationToken,
    ) -> Result<RunStats, BoardError>
    where
        S: InputSource + ?Sized,
    {
        loop {
            let next = tokio::select! {
                biased;
                _ = token.cancelled() => None,
                line = source.next_line() => Some(line),
            };
            let Some(line) = next else {
                log::info!("shutdown requested; leaving board loop");
                break;
            };
            let Some(line) = line.map_err(|source| BoardError::Input { source })? else {
                log::info!("input exhausted; leaving board loop");
                break;
            };
            if self.handle_line(&line) == Flow::Stop {
                log::info!("quit requested; leaving board loop");
                break;
            }
        }
        Ok(self.stats)
    }
}
