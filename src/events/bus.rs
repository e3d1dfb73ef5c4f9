//! Per-process event queue over an mpsc channel.
//!
//! - The window binding publishes via `EventPublisher::publish()`
//! - The loop drains once per tick via `EventBus::drain()`

use std::sync::mpsc::{self, Receiver, Sender};

use super::types::PetEvent;

/// Event queue owned by the runner.
///
/// Publishers are handed to whatever produces input (the native window
/// procedure, tests). Draining never blocks.
///
/// # Example
///
/// ```
/// use schnauzer::events::{EventBus, PetEvent};
///
/// let bus = EventBus::new();
/// bus.publisher().publish(PetEvent::Interact);
/// assert_eq!(bus.drain(), vec![PetEvent::Interact]);
/// ```
pub struct EventBus {
    sender: Sender<PetEvent>,
    receiver: Receiver<PetEvent>,
}

impl EventBus {
    pub fn new() -> Self {
        let (sender, receiver) = mpsc::channel();
        Self { sender, receiver }
    }

    /// Get a cloneable publisher handle.
    pub fn publisher(&self) -> EventPublisher {
        EventPublisher {
            sender: self.sender.clone(),
        }
    }

    /// Take every pending event, oldest first.
    ///
    /// The bus holds its own sender, so the channel never disconnects
    /// while the bus is alive; an empty queue just ends the drain.
    pub fn drain(&self) -> Vec<PetEvent> {
        self.receiver.try_iter().collect()
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}

/// A cloneable publisher for [`EventBus`].
#[derive(Clone)]
pub struct EventPublisher {
    sender: Sender<PetEvent>,
}

impl EventPublisher {
    /// Queue an event for the next drain.
    ///
    /// If the bus has been dropped (instance shutting down) the event is
    /// discarded.
    pub fn publish(&self, event: PetEvent) {
        let _ = self.sender.send(event);
    }
}
