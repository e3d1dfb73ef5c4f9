//! Shared settings (pure Rust, no I/O).
//!
//! The on-disk representation lives in `storage::document`; this is the
//! validated in-memory view every pet instance works with.

use super::constants::*;
use super::geometry::Size;
use super::zone::Zone;

/// Zones plus the stay-on-top flag, as shared by all pet instances.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SharedSettings {
    pub zones: Vec<Zone>,
    pub stay_on_top: bool,
}

impl SharedSettings {
    /// Built-in defaults: one zone near each bottom corner of the screen.
    pub fn defaults(screen: Size) -> Self {
        let ground = ground_y(screen);
        Self {
            zones: vec![
                Zone::new(
                    DEFAULT_ZONE_INSET,
                    DEFAULT_ZONE_REACH,
                    ground,
                    DEFAULT_ZONE_HEIGHT,
                ),
                Zone::new(
                    screen.width - DEFAULT_ZONE_REACH,
                    screen.width - DEFAULT_ZONE_INSET,
                    ground,
                    DEFAULT_ZONE_HEIGHT,
                ),
            ],
            stay_on_top: true,
        }
    }
}

/// Ground line: just above the taskbar, one pet-height up.
pub fn ground_y(screen: Size) -> i32 {
    screen.height - PET_HEIGHT - TASKBAR_HEIGHT
}
