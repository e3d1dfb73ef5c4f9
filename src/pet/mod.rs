//! Pet behavior: state, movement, teleporting and zone-change handling.

pub mod locomotion;
pub mod machine;
pub mod random;
pub mod state;
pub mod sync;
pub mod teleport;

pub use machine::BehaviorStateMachine;
pub use random::RandomSource;
pub use state::{Direction, PetState, PoopMarker};
pub use sync::{reanchor, ZoneAnchor};
pub use teleport::{choose_target, landing_spot};
