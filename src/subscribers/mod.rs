//! # Subscribers: the observer side of the board.
//!
//! This module provides the [`Subscribe`] trait, the [`Handle`] used for registry
//! membership, and the concrete [`PriceDisplay`] renderer.
//!
//! ## Architecture
//! ```text
//! Publisher::broadcast(value)
//!     │
//!     ├──► Handle #1 ──► PriceDisplay.render(value) ──► Surface A, Surface B, ...
//!     ├──► Handle #2 ──► PriceDisplay.render(value) ──► Surface C, ...
//!     └──► Handle #N ──► custom Subscribe impl
//! ```
//!
//! ## Implementing custom subscribers
//! ```
//! use pricecast::{Handle, Publisher, Subscribe};
//!
//! struct Ticker;
//!
//! impl Subscribe<str> for Ticker {
//!     fn render(&self, value: &str) {
//!         println!("ticker: {value}");
//!     }
//!
//!     fn name(&self) -> &'static str { "ticker" }
//! }
//!
//! let publisher = Publisher::<str>::new();
//! publisher.subscribe(&Handle::new(Ticker));
//! assert_eq!(publisher.broadcast("42000"), 1);
//! ```

mod display;
mod handle;
#[cfg(feature = "logging")]
mod log;
mod subscribe;

pub use display::{ConsoleSurface, PriceDisplay, Surface, TextSurface};
pub use handle::Handle;
#[cfg(feature = "logging")]
pub use log::LogWriter;
pub use subscribe::Subscribe;
