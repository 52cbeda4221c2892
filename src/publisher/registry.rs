//! # Ordered subscriber registry with synchronous broadcast.
//!
//! ## Rules
//! - **Registration order**: handles are notified in the order they were added.
//! - **Multiset by default**: a handle added twice renders twice per broadcast
//!   (see [`DuplicatePolicy`]).
//! - **First-occurrence removal**: `unsubscribe` removes one registration, the earliest.
//! - **Absent handle**: `unsubscribe` of a handle that is not registered is a no-op.
//! - **Snapshot iteration**: `broadcast` copies the registry before the first render;
//!   subscribe/unsubscribe performed from inside a render only affect later broadcasts.
//!
//! ## Panic handling
//! With `Config::isolate_panics` a render is wrapped in `catch_unwind`:
//! - the panic is logged with the subscriber name
//! - the broadcast continues with the next subscriber
//!
//! **Warning**: `AssertUnwindSafe` is used, which can leave a subscriber's own state
//! inconsistent if it panics while holding a lock.

use std::any::Any;
use std::fmt;
use std::panic::{self, AssertUnwindSafe};

use parking_lot::RwLock;

use crate::config::{Config, DuplicatePolicy};
use crate::subscribers::Handle;

/// Subject holding an ordered registry of subscriber handles.
///
/// All methods take `&self`; the registry lock is never held while rendering, so a
/// subscriber may call back into the publisher.
pub struct Publisher<V: ?Sized + 'static> {
    registry: RwLock<Vec<Handle<V>>>,
    duplicates: DuplicatePolicy,
    isolate_panics: bool,
}

impl<V: ?Sized + 'static> Publisher<V> {
    /// Creates an empty publisher with the default [`Config`].
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(&Config::default())
    }

    /// Creates an empty publisher using the registry settings from `cfg`.
    #[must_use]
    pub fn with_config(cfg: &Config) -> Self {
        Self {
            registry: RwLock::new(Vec::new()),
            duplicates: cfg.duplicates,
            isolate_panics: cfg.isolate_panics,
        }
    }

    /// Appends `handle` to the registry.
    ///
    /// Returns `false` only when the policy is [`DuplicatePolicy::Reject`] and the
    /// handle is already registered.
    pub fn subscribe(&self, handle: &Handle<V>) -> bool {
        let mut registry = self.registry.write();
        if self.duplicates == DuplicatePolicy::Reject && registry.contains(handle) {
            log::debug!("subscribe rejected: {} already registered", handle.name());
            return false;
        }
        registry.push(handle.clone());
        log::debug!(
            "subscribed {} (registry size {})",
            handle.name(),
            registry.len()
        );
        true
    }

    /// Removes the first registration of `handle`.
    ///
    /// Returns `false` (and changes nothing) when the handle is not registered.
    pub fn unsubscribe(&self, handle: &Handle<V>) -> bool {
        let mut registry = self.registry.write();
        match registry.iter().position(|h| h == handle) {
            Some(idx) => {
                registry.remove(idx);
                log::debug!(
                    "unsubscribed {} (registry size {})",
                    handle.name(),
                    registry.len()
                );
                true
            }
            None => {
                log::debug!("unsubscribe ignored: {} not registered", handle.name());
                false
            }
        }
    }

    /// Renders `value` on every registered handle, in registration order.
    ///
    /// Returns the number of render invocations (one per registration). An empty
    /// registry yields `0`.
    pub fn broadcast(&self, value: &V) -> usize {
        let snapshot = self.snapshot();
        for handle in &snapshot {
            self.deliver(handle, value);
        }
        snapshot.len()
    }

    fn deliver(&self, handle: &Handle<V>, value: &V) {
        if !self.isolate_panics {
            handle.render(value);
            return;
        }
        if let Err(payload) = panic::catch_unwind(AssertUnwindSafe(|| handle.render(value))) {
            log::warn!(
                "subscriber {} panicked during render: {}",
                handle.name(),
                panic_message(payload.as_ref())
            );
        }
    }

    /// Copy of the registry in notification order.
    pub fn snapshot(&self) -> Vec<Handle<V>> {
        self.registry.read().clone()
    }

    /// Subscriber names in notification order.
    pub fn names(&self) -> Vec<&'static str> {
        self.registry.read().iter().map(Handle::name).collect()
    }

    /// Number of registrations (duplicates counted).
    pub fn len(&self) -> usize {
        self.registry.read().len()
    }

    /// Returns `true` if nothing is registered.
    pub fn is_empty(&self) -> bool {
        self.registry.read().is_empty()
    }

    /// Returns `true` if `handle` is registered at least once.
    pub fn contains(&self, handle: &Handle<V>) -> bool {
        self.registry.read().contains(handle)
    }

    /// Number of registrations of `handle`.
    pub fn occurrences(&self, handle: &Handle<V>) -> usize {
        self.registry.read().iter().filter(|h| *h == handle).count()
    }

    /// Drops every registration.
    pub fn clear(&self) {
        self.registry.write().clear();
    }
}

impl<V: ?Sized + 'static> Default for Publisher<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: ?Sized + 'static> fmt::Debug for Publisher<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Publisher")
            .field("subscribers", &self.names())
            .field("duplicates", &self.duplicates)
            .field("isolate_panics", &self.isolate_panics)
            .finish()
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(msg) = payload.downcast_ref::<&'static str>() {
        (*msg).to_string()
    } else if let Some(msg) = payload.downcast_ref::<String>() {
        msg.clone()
    } else {
        "unknown panic".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::subscribers::Subscribe;
    use parking_lot::Mutex;
    use std::sync::Arc;

    type Journal = Arc<Mutex<Vec<(&'static str, String)>>>;

    struct Recorder {
        name: &'static str,
        journal: Journal,
    }

    impl Subscribe<str> for Recorder {
        fn render(&self, value: &str) {
            self.journal.lock().push((self.name, value.to_string()));
        }

        fn name(&self) -> &'static str {
            self.name
        }
    }

    fn recorder(name: &'static str, journal: &Journal) -> Handle<str> {
        Handle::new(Recorder {
            name,
            journal: Arc::clone(journal),
        })
    }

    fn entries(journal: &Journal) -> Vec<(&'static str, String)> {
        journal.lock().clone()
    }

    #[test]
    fn test_broadcast_in_registration_order() {
        let journal = Journal::default();
        let a = recorder("a", &journal);
        let b = recorder("b", &journal);
        let publisher = Publisher::new();
        publisher.subscribe(&a);
        publisher.subscribe(&b);

        assert_eq!(publisher.broadcast("100"), 2);
        assert_eq!(
            entries(&journal),
            vec![("a", "100".to_string()), ("b", "100".to_string())]
        );
    }

    #[test]
    fn test_unsubscribe_then_broadcast() {
        let journal = Journal::default();
        let a = recorder("a", &journal);
        let b = recorder("b", &journal);
        let publisher = Publisher::new();
        publisher.subscribe(&a);
        publisher.subscribe(&b);

        assert!(publisher.unsubscribe(&b));
        assert_eq!(publisher.snapshot(), vec![a.clone()]);

        assert_eq!(publisher.broadcast("200"), 1);
        assert_eq!(entries(&journal), vec![("a", "200".to_string())]);
    }

    #[test]
    fn test_unsubscribe_absent_is_noop() {
        let journal = Journal::default();
        let a = recorder("a", &journal);
        let publisher = Publisher::new();

        assert!(!publisher.unsubscribe(&a));
        assert!(publisher.is_empty());

        let b = recorder("b", &journal);
        publisher.subscribe(&b);
        assert!(!publisher.unsubscribe(&a));
        assert_eq!(publisher.snapshot(), vec![b]);
    }

    #[test]
    fn test_duplicate_subscription_renders_twice() {
        let journal = Journal::default();
        let a = recorder("a", &journal);
        let publisher = Publisher::new();
        assert!(publisher.subscribe(&a));
        assert!(publisher.subscribe(&a));
        assert_eq!(publisher.occurrences(&a), 2);

        assert_eq!(publisher.broadcast("x"), 2);
        assert_eq!(
            entries(&journal),
            vec![("a", "x".to_string()), ("a", "x".to_string())]
        );
    }

    #[test]
    fn test_unsubscribe_removes_first_occurrence_only() {
        let journal = Journal::default();
        let a = recorder("a", &journal);
        let b = recorder("b", &journal);
        let publisher = Publisher::new();
        publisher.subscribe(&a);
        publisher.subscribe(&b);
        publisher.subscribe(&a);

        assert!(publisher.unsubscribe(&a));
        assert_eq!(publisher.snapshot(), vec![b.clone(), a.clone()]);
        assert_eq!(publisher.names(), vec!["b", "a"]);
    }

    #[test]
    fn test_registry_follows_operation_sequence() {
        let journal = Journal::default();
        let handles: Vec<Handle<str>> = ["a", "b", "c", "d"]
            .into_iter()
            .map(|n| recorder(n, &journal))
            .collect();
        let publisher = Publisher::new();
        let mut model: Vec<Handle<str>> = Vec::new();

        // (subscribe?, handle index)
        let ops = [
            (true, 0),
            (true, 1),
            (true, 0),
            (false, 2),
            (true, 2),
            (false, 0),
            (true, 3),
            (false, 1),
            (false, 1),
            (true, 1),
            (false, 0),
            (false, 3),
        ];
        for (add, idx) in ops {
            let h = &handles[idx];
            if add {
                publisher.subscribe(h);
                model.push(h.clone());
            } else {
                publisher.unsubscribe(h);
                if let Some(pos) = model.iter().position(|m| m == h) {
                    model.remove(pos);
                }
            }
            assert_eq!(publisher.snapshot(), model);
        }
        assert_eq!(publisher.names(), vec!["c", "b"]);
    }

    #[test]
    fn test_broadcast_empty_registry() {
        let publisher = Publisher::<str>::new();
        assert_eq!(publisher.broadcast("nothing"), 0);
    }

    #[test]
    fn test_reject_policy_keeps_set_semantics() {
        let journal = Journal::default();
        let a = recorder("a", &journal);
        let cfg = Config {
            duplicates: DuplicatePolicy::Reject,
            ..Config::default()
        };
        let publisher = Publisher::with_config(&cfg);

        assert!(publisher.subscribe(&a));
        assert!(!publisher.subscribe(&a));
        assert_eq!(publisher.broadcast("once"), 1);
        assert_eq!(entries(&journal).len(), 1);
    }

    struct Reentrant {
        publisher: Arc<Publisher<str>>,
        late: Handle<str>,
        journal: Journal,
    }

    impl Subscribe<str> for Reentrant {
        fn render(&self, value: &str) {
            self.journal.lock().push(("reentrant", value.to_string()));
            self.publisher.subscribe(&self.late);
        }
    }

    #[test]
    fn test_subscribe_during_broadcast_applies_to_next_one() {
        let journal = Journal::default();
        let publisher = Arc::new(Publisher::new());
        let late = recorder("late", &journal);
        let first = Handle::new(Reentrant {
            publisher: Arc::clone(&publisher),
            late: late.clone(),
            journal: Arc::clone(&journal),
        });
        publisher.subscribe(&first);

        assert_eq!(publisher.broadcast("1"), 1);
        assert_eq!(entries(&journal), vec![("reentrant", "1".to_string())]);
        assert!(publisher.contains(&late));

        journal.lock().clear();
        publisher.unsubscribe(&first);
        assert_eq!(publisher.broadcast("2"), 1);
        assert_eq!(entries(&journal), vec![("late", "2".to_string())]);
    }

    struct Unsubscriber {
        publisher: Arc<Publisher<str>>,
        target: Handle<str>,
    }

    impl Subscribe<str> for Unsubscriber {
        fn render(&self, _value: &str) {
            self.publisher.unsubscribe(&self.target);
        }
    }

    #[test]
    fn test_unsubscribe_during_broadcast_still_renders_snapshot() {
        let journal = Journal::default();
        let publisher = Arc::new(Publisher::new());
        let victim = recorder("victim", &journal);
        let killer = Handle::new(Unsubscriber {
            publisher: Arc::clone(&publisher),
            target: victim.clone(),
        });
        publisher.subscribe(&killer);
        publisher.subscribe(&victim);

        assert_eq!(publisher.broadcast("a"), 2);
        assert_eq!(entries(&journal), vec![("victim", "a".to_string())]);
        assert!(!publisher.contains(&victim));

        assert_eq!(publisher.broadcast("b"), 1);
        assert_eq!(entries(&journal).len(), 1);
    }

    struct Boom;

    impl Subscribe<str> for Boom {
        fn render(&self, _value: &str) {
            panic!("boom");
        }

        fn name(&self) -> &'static str {
            "boom"
        }
    }

    #[test]
    fn test_panicking_subscriber_is_isolated() {
        let journal = Journal::default();
        let after = recorder("after", &journal);
        let publisher = Publisher::new();
        publisher.subscribe(&Handle::new(Boom));
        publisher.subscribe(&after);

        assert_eq!(publisher.broadcast("v"), 2);
        assert_eq!(entries(&journal), vec![("after", "v".to_string())]);
    }

    #[test]
    #[should_panic(expected = "boom")]
    fn test_panic_propagates_without_isolation() {
        let cfg = Config {
            isolate_panics: false,
            ..Config::default()
        };
        let publisher = Publisher::with_config(&cfg);
        publisher.subscribe(&Handle::new(Boom));
        publisher.broadcast("v");
    }

    #[test]
    fn test_panic_message_extraction() {
        assert_eq!(panic_message(&"static"), "static");
        assert_eq!(panic_message(&String::from("owned")), "owned");
        assert_eq!(panic_message(&42_u8), "unknown panic");
    }

    #[test]
    fn test_clear_and_len() {
        let journal = Journal::default();
        let publisher = Publisher::new();
        publisher.subscribe(&recorder("a", &journal));
        publisher.subscribe(&recorder("b", &journal));
        assert_eq!(publisher.len(), 2);

        publisher.clear();
        assert!(publisher.is_empty());
        assert!(format!("{publisher:?}").contains("Publisher"));
    }
}
