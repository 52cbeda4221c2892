//! # Publisher: the subject side of the board.
//!
//! [`Publisher`] owns the ordered subscriber registry and broadcasts values to it.
//!
//! ## Architecture
//! ```text
//! subscribe(h)   ──► registry.push(h)               (order = notification order)
//! unsubscribe(h) ──► position(h)? ──► remove(first)  (absent → no-op)
//! broadcast(v)   ──► snapshot(registry) ──► h1.render(v), h2.render(v), ...
//! ```

mod registry;

pub use registry::Publisher;
