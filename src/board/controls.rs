//! # Control buttons.
//!
//! Two buttons gate subscription changes, each with an enabled flag:
//!
//! ```text
//!                 press (enabled)
//! subscribe   ─────────────────────► subscribe price + label,
//!                                    disable subscribe, enable unsubscribe
//! unsubscribe ─────────────────────► unsubscribe label, disable unsubscribe
//! ```
//!
//! Pressing a disabled button does nothing. Both start enabled, so pressing
//! *subscribe* before anything else registers both displays a second time; the
//! gating only stops repeated presses of the same button.

/// A button with an enabled flag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Button {
    label: &'static str,
    enabled: bool,
}

impl Button {
    /// Creates an enabled button.
    pub fn new(label: &'static str) -> Self {
        Self {
            label,
            enabled: true,
        }
    }

    /// Button caption.
    pub fn label(&self) -> &'static str {
        self.label
    }

    /// Whether a press has any effect.
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Sets the enabled flag.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }
}

/// The subscribe/unsubscribe button pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ControlPanel {
    subscribe: Button,
    unsubscribe: Button,
}

impl ControlPanel {
    /// Creates the panel with both buttons enabled.
    pub fn new() -> Self {
        Self {
            subscribe: Button::new("subscribe"),
            unsubscribe: Button::new("unsubscribe"),
        }
    }

    /// The subscribe button.
    pub fn subscribe_button(&self) -> &Button {
        &self.subscribe
    }

    /// The unsubscribe button.
    pub fn unsubscribe_button(&self) -> &Button {
        &self.unsubscribe
    }

    /// Registers a press of the subscribe button.
    ///
    /// Returns `true` if the button was enabled; the caller then performs the
    /// subscriptions. Afterwards subscribe is disabled and unsubscribe enabled.
    pub fn press_subscribe(&mut self) -> bool {
        if !self.subscribe.is_enabled() {
            return false;
        }
        self.subscribe.set_enabled(false);
        self.unsubscribe.set_enabled(true);
        true
    }

    /// Registers a press of the unsubscribe button.
    ///
    /// Returns `true` if the button was enabled; the caller then performs the
    /// unsubscription. Afterwards unsubscribe is disabled.
    pub fn press_unsubscribe(&mut self) -> bool {
        if !self.unsubscribe.is_enabled() {
            return false;
        }
        self.unsubscribe.set_enabled(false);
        true
    }
}

impl Default for ControlPanel {
    fn default() -> Self {
        Self::new()
    }
}
