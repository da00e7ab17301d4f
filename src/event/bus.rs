use std::cell::RefCell;

use crate::event::{MapEvent, MapEventHandler};

/// A simple event bus for broadcasting map events to registered handlers
pub struct EventBus<B> {
    handlers: RefCell<Vec<Box<dyn MapEventHandler<B>>>>,
}

impl<B> std::fmt::Debug for EventBus<B> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventBus")
            .field(
                "handlers",
                &format!("<{} handlers>", self.handlers.borrow().len()),
            )
            .finish()
    }
}

impl<B> Default for EventBus<B> {
    fn default() -> Self {
        Self::new()
    }
}

impl<B> EventBus<B> {
    /// Creates a new event bus
    pub fn new() -> Self {
        Self {
            handlers: RefCell::new(Vec::new()),
        }
    }

    /// Subscribe a handler to receive events
    pub fn subscribe(&self, handler: Box<dyn MapEventHandler<B>>) {
        self.handlers.borrow_mut().push(handler);
    }

    /// Emit an event to all registered handlers
    pub fn emit(&self, event: MapEvent<B>) {
        for handler in &mut *self.handlers.borrow_mut() {
            handler.handle_event(&event);
        }
    }
}
