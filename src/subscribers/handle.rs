//! # Subscriber handles.
//!
//! A [`Handle`] is a cloneable reference to one subscriber instance. Registry
//! membership, removal and equality are all defined on handles, never on the
//! subscriber's own data: two handles are equal iff they point at the same
//! allocation.

use std::fmt;
use std::sync::Arc;

use super::Subscribe;

/// Identity handle to a subscriber.
pub struct Handle<V: ?Sized + 'static> {
    inner: Arc<dyn Subscribe<V>>,
}

impl<V: ?Sized + 'static> Handle<V> {
    /// Wraps a subscriber into a fresh handle.
    ///
    /// Every call creates a new identity, even for equal subscribers.
    pub fn new<S: Subscribe<V>>(subscriber: S) -> Self {
        Self {
            inner: Arc::new(subscriber),
        }
    }

    /// Wraps an already shared subscriber.
    ///
    /// Handles built from clones of the same `Arc` compare equal.
    pub fn from_arc(subscriber: Arc<dyn Subscribe<V>>) -> Self {
        Self { inner: subscriber }
    }

    /// Subscriber name (see [`Subscribe::name`]).
    pub fn name(&self) -> &'static str {
        self.inner.name()
    }

    /// Forwards `value` to the subscriber.
    #[inline]
    pub fn render(&self, value: &V) {
        self.inner.render(value);
    }

    /// Returns `true` if both handles point at the same subscriber.
    #[inline]
    pub fn same(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

impl<V: ?Sized + 'static> Clone for Handle<V> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<V: ?Sized + 'static> PartialEq for Handle<V> {
    fn eq(&self, other: &Self) -> bool {
        self.same(other)
    }
}

impl<V: ?Sized + 'static> Eq for Handle<V> {}

impl<V: ?Sized + 'static> fmt::Debug for Handle<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Handle")
            .field("name", &self.name())
            .field("ptr", &Arc::as_ptr(&self.inner).cast::<()>())
            .finish()
    }
}
