//! Pet domain model.
//!
//! This module contains pure data (no FFI, no I/O): zones, geometry,
//! behaviors, shared settings and the tuning constants.
//!
//! Persistence is in `storage`; the per-instance state machine is in `pet`.

pub mod behavior;
pub mod constants;
pub mod geometry;
pub mod settings;
pub mod zone;

pub use behavior::{Behavior, TRICK_ROTATION};
pub use constants::*;
pub use geometry::{Point, Rect, Size};
pub use settings::{ground_y, SharedSettings};
pub use zone::{first_admitting, Zone};
