//! # pricecast
//!
//! **pricecast** is a small observer-pattern library: one input publishes a
//! value, any number of displays render it live.
//!
//! The core is the [`Publisher`] / [`Subscribe`] pair. Everything around it
//! ([`Board`], [`ControlPanel`], [`InputSource`]) is glue that turns input lines
//! and button presses into registry changes and broadcasts.
//!
//! ## Architecture
//! ### Overview
//! ```text
//!     ┌──────────────┐
//!     │ InputSource  │  stdin / Stream<Item = String>
//!     └──────┬───────┘
//!            ▼
//! ┌───────────────────────────────────────────────────────────────────┐
//! │  Board (composition root)                                         │
//! │  - Command parsing (values, :sub, :unsub, :quit)                  │
//! │  - ControlPanel (subscribe / unsubscribe buttons)                 │
//! │  - Publisher (ordered registry of Handles)                        │
//! └──────┬──────────────────┬──────────────────┬──────────────────────┘
//!        ▼                  ▼                  ▼
//!     ┌──────────────┐   ┌──────────────┐   ┌──────────────┐
//!     │ PriceDisplay │   │ PriceDisplay │   │   custom     │
//!     │   "price"    │   │   "label"    │   │  Subscribe   │
//!     └┬─────────────┘   └┬─────────────┘   └──────────────┘
//!      ▼                  ▼
//!   Surfaces           Surfaces
//! ```
//!
//! ### Broadcast
//! ```text
//! broadcast(value)
//!   ├─► snapshot registry (lock released)
//!   ├─► for handle in snapshot, in registration order:
//!   │     └─► handle.render(value)   (panic caught + logged if isolate_panics)
//!   └─► return number of renders
//! ```
//!
//! ## Features
//! | Area              | Description                                                  | Key types / traits                         |
//! |-------------------|--------------------------------------------------------------|--------------------------------------------|
//! | **Core**          | Ordered registry, first-occurrence removal, broadcast.       | [`Publisher`], [`Subscribe`], [`Handle`]   |
//! | **Displays**      | Render a value onto a fixed set of surfaces.                 | [`PriceDisplay`], [`Surface`]              |
//! | **Input**         | Line sources and the command language.                       | [`InputSource`], [`Command`]               |
//! | **Board**         | Composition root, buttons, event loop, shutdown.             | [`Board`], [`ControlPanel`]                |
//! | **Errors**        | Typed errors for the glue.                                   | [`BoardError`], [`CommandError`]           |
//! | **Configuration** | Duplicate policy, panic isolation, command prefix.           | [`Config`], [`DuplicatePolicy`]            |
//!
//! ## Optional features
//! - `logging`: exports a simple built-in `LogWriter` subscriber _(demo/reference only)_.
//!
//! ## Example
//! ```rust
//! use std::sync::Arc;
//! use pricecast::{Board, Config, Surface, TextSurface};
//!
//! let em = TextSurface::arc();
//! let label = TextSurface::arc();
//! let price_surfaces: Vec<Arc<dyn Surface>> = vec![em.clone()];
//! let label_surfaces: Vec<Arc<dyn Surface>> = vec![label.clone()];
//!
//! let mut board = Board::builder(Config::default())
//!     .with_price_surfaces(price_surfaces)
//!     .with_label_surfaces(label_surfaces)
//!     .build();
//!
//! board.input("42000");
//! board.press_unsubscribe();
//! board.input("43000");
//!
//! assert_eq!(em.text(), "43000");
//! assert_eq!(label.text(), "42000");
//! ```
mod board;
mod config;
mod error;
mod input;
mod publisher;
mod subscribers;

// ---- Public re-exports ----

pub use board::{
    Board, BoardBuilder, Button, ControlPanel, Flow, RunStats, wait_for_shutdown_signal,
};
pub use config::{Config, DuplicatePolicy};
pub use error::{BoardError, CommandError};
pub use input::{Command, InputSource, LineSource, StreamSource};
pub use publisher::Publisher;
pub use subscribers::{ConsoleSurface, Handle, PriceDisplay, Subscribe, Surface, TextSurface};

// Optional: expose a simple built-in logger subscriber (demo/reference).
// Enable with: `--features logging`
#[cfg(feature = "logging")]
pub use subscribers::LogWriter;
