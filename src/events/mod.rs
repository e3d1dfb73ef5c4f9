//! Input events for a pet instance.
//!
//! ```text
//! ┌──────────────────┐   publish()   ┌──────────┐   drain()   ┌──────────┐
//! │  WindowBinding   │ ────────────▶ │ EventBus │ ──────────▶ │  PetApp  │
//! │ (window proc)    │               │  (mpsc)  │             │  (60 Hz) │
//! └──────────────────┘               └──────────┘             └──────────┘
//! ```
//!
//! The bus is owned by the runner and passed explicitly; there is no
//! process-wide instance.

pub mod bus;
pub mod types;

pub use bus::{EventBus, EventPublisher};
pub use types::PetEvent;
