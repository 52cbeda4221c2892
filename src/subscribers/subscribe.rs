//! # Subscriber trait.
//!
//! Provides [`Subscribe`], the single capability a publisher needs from an observer.
//!
//! ## Rules
//! - `render` runs synchronously on the thread that called `broadcast`.
//! - Renders are delivered in registration order.
//! - `render` has no return value and must not fail; handle problems internally.
//! - A subscriber holds no reference back to the publisher.

/// Observer of broadcast values.
///
/// `V` is the payload type; it may be unsized (`str`, `[u8]`).
pub trait Subscribe<V: ?Sized>: Send + Sync + 'static {
    /// Reflects `value` on every display target this subscriber owns.
    ///
    /// Called once per registration of the subscriber per broadcast.
    fn render(&self, value: &V);

    /// Returns the subscriber name used in logs.
    ///
    /// The default uses `type_name::<Self>()`, which can be verbose - override it when possible.
    fn name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }
}
