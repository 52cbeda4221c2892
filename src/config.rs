//! # Board and publisher configuration.
//!
//! Provides [`Config`] centralized settings shared by the [`Publisher`](crate::Publisher)
//! and the [`Board`](crate::Board).
//!
//! Config is used in two ways:
//! 1. **Publisher creation**: `Publisher::with_config(&config)`
//! 2. **Board creation**: `Board::builder(config)`

/// How [`Publisher::subscribe`](crate::Publisher::subscribe) treats a handle that is
/// already registered.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DuplicatePolicy {
    /// Append anyway; the handle is notified once per registration.
    #[default]
    Allow,
    /// Keep the registry a set; a second registration is ignored.
    Reject,
}

/// Global configuration for the publisher and the board glue.
///
/// ## Field semantics
/// - `duplicates`: multiset (`Allow`) or set (`Reject`) registry semantics
/// - `isolate_panics`: catch a panicking render and continue the broadcast
/// - `command_prefix`: first character marking a control line (`:sub`, `:unsub`, `:quit`)
///
/// ## Notes
/// All fields are public for flexibility.
#[derive(Clone, Debug)]
pub struct Config {
    /// Registry semantics for repeated subscriptions of the same handle.
    pub duplicates: DuplicatePolicy,

    /// Whether a panic inside `render` is caught and logged.
    ///
    /// - `true` = the broadcast continues with the next subscriber
    /// - `false` = the panic unwinds through `broadcast`
    pub isolate_panics: bool,

    /// Prefix that turns an input line into a control command.
    ///
    /// A doubled prefix escapes it: `::x` broadcasts the literal value `:x`.
    pub command_prefix: char,
}

impl Config {
    /// Returns `true` when repeated subscriptions are ignored.
    #[inline]
    pub fn rejects_duplicates(&self) -> bool {
        self.duplicates == DuplicatePolicy::Reject
    }
}

impl Default for Config {
    /// Default configuration:
    ///
    /// - `duplicates = Allow` (a handle subscribed twice renders twice)
    /// - `isolate_panics = true`
    /// - `command_prefix = ':'`
    fn default() -> Self {
        Self {
            duplicates: DuplicatePolicy::Allow,
            isolate_panics: true,
            command_prefix: ':',
        }
    }
}
