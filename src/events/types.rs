//! Input events delivered to a pet's loop.
//!
//! Produced by the window binding (mouse and keyboard on the pet window)
//! and consumed once per tick by the runner. Pure Rust, fully testable.

/// Interaction events for one pet instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PetEvent {
    /// Primary click on the pet: start the next trick.
    Interact,

    /// Secondary click on the pet: open the zone editor.
    OpenZoneEditor,

    /// Window closed or Escape pressed: end this instance.
    Close,
}

impl PetEvent {
    /// Returns a human-readable description of the event for logging.
    pub fn description(&self) -> &'static str {
        match self {
            PetEvent::Interact => "Do next trick",
            PetEvent::OpenZoneEditor => "Open zone editor",
            PetEvent::Close => "Close pet",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_events_have_descriptions() {
        for event in [PetEvent::Interact, PetEvent::OpenZoneEditor, PetEvent::Close] {
            assert!(!event.description().is_empty());
        }
    }
}
