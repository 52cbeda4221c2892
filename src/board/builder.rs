use std::sync::Arc;

use super::{controls::ControlPanel, event_loop::Board};
use crate::{
    config::Config,
    publisher::Publisher,
    subscribers::{Handle, PriceDisplay, Surface},
};

/// Builder for constructing a [`Board`] with its displays and extra subscribers.
pub struct BoardBuilder {
    cfg: Config,
    price_surfaces: Vec<Arc<dyn Surface>>,
    label_surfaces: Vec<Arc<dyn Surface>>,
    subscribers: Vec<Handle<str>>,
}

impl BoardBuilder {
    /// Creates a new builder with the given configuration.
    pub fn new(cfg: Config) -> Self {
        Self {
            cfg,
            price_surfaces: Vec::new(),
            label_surfaces: Vec::new(),
            subscribers: Vec::new(),
        }
    }

    /// Sets the surfaces rendered by the price display.
    pub fn with_price_surfaces(mut self, surfaces: Vec<Arc<dyn Surface>>) -> Self {
        self.price_surfaces = surfaces;
        self
    }

    /// Sets the surfaces rendered by the label display.
    ///
    /// The label display is the one the unsubscribe button detaches.
    pub fn with_label_surfaces(mut self, surfaces: Vec<Arc<dyn Surface>>) -> Self {
        self.label_surfaces = surfaces;
        self
    }

    /// Sets additional subscribers, registered after both displays.
    ///
    /// They are not affected by the buttons.
    pub fn with_subscribers(mut self, subscribers: Vec<Handle<str>>) -> Self {
        self.subscribers = subscribers;
        self
    }

    /// Builds the board and performs the initial subscriptions:
    /// price display, label display, then extra subscribers in order.
    pub fn build(self) -> Board {
        let publisher = Publisher::with_config(&self.cfg);
        let price = Handle::new(PriceDisplay::new("price", self.price_surfaces));
        let label = Handle::new(PriceDisplay::new("label", self.label_surfaces));

        publisher.subscribe(&price);
        publisher.subscribe(&label);
        for sub in &self.subscribers {
            publisher.subscribe(sub);
        }

        Board::new_internal(self.cfg, publisher, price, label, ControlPanel::new())
    }
}
