//! Process-level wiring: runtime config, frame pacing and the main loop.

pub mod clock;
pub mod config;
pub mod runner;

pub use clock::FrameClock;
pub use config::AppConfig;
pub use runner::{initial_position, PetApp};
