mod bus;
mod events;

pub use bus::EventBus;
pub use events::MapEvent;

/// Receives every event emitted on the bus it is subscribed to.
pub trait MapEventHandler<B>: Send {
    fn handle_event(&mut self, event: &MapEvent<B>);
}
