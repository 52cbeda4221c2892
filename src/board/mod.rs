//! # Board: composition root wiring input, buttons and displays.
//!
//! ## Architecture
//! ```text
//!  InputSource ── line ──► Command::parse
//!                              │
//!       ┌──────────────────────┼──────────────────────┐
//!       ▼                      ▼                      ▼
//!  Input(value)        Subscribe / Unsubscribe       Quit
//!       │                      │
//!       ▼                      ▼
//!  Publisher::broadcast   ControlPanel (button state)
//!       │                      └──► Publisher::subscribe / unsubscribe
//!       ├──► price display ──► surfaces
//!       ├──► label display ──► surfaces
//!       └──► extra subscribers
//! ```
//!
//! Shutdown: OS signal ([`wait_for_shutdown_signal`]) → `CancellationToken` → loop exits.

mod builder;
mod controls;
mod event_loop;
mod shutdown;

pub use builder::BoardBuilder;
pub use controls::{Button, ControlPanel};
pub use event_loop::{Board, Flow, RunStats};
pub use shutdown::wait_for_shutdown_signal;
