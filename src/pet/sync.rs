//! Keeping a pet in place when another instance rewrites the zone list.

use super::state::PetState;
use crate::model::{first_admitting, Behavior, Point, Zone, PET_HEIGHT, PET_WIDTH};

/// Where the pet stood relative to its zone before a reload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ZoneAnchor {
    pub index: usize,
    /// Offset from the zone's `x_start`.
    pub dx: i32,
    /// Offset from the zone's floor.
    pub dy: i32,
}

impl ZoneAnchor {
    /// Anchor `position` to the first zone admitting its x, if any.
    pub fn capture(zones: &[Zone], position: Point) -> Option<Self> {
        let index = first_admitting(zones, position.x, PET_WIDTH)?;
        let zone = &zones[index];
        Some(Self {
            index,
            dx: position.x - zone.x_start,
            dy: position.y - zone.floor_y(PET_HEIGHT),
        })
    }

    /// The same relative spot in `zone`, with x kept inside the zone.
    pub fn resolve(&self, zone: &Zone) -> Point {
        let max_x = zone.max_x(PET_WIDTH);
        let mut x = zone.x_start + self.dx;
        if x < zone.x_start {
            x = zone.x_start;
        } else if x > max_x {
            x = max_x;
        }
        Point::new(x, zone.floor_y(PET_HEIGHT) + self.dy)
    }
}

/// Apply a zone list change to `state`.
///
/// Returns the new position when the pet was moved. A walking pet is left
/// alone so concurrent edits do not make it jitter; so is a pet whose zone
/// index no longer exists.
pub fn reanchor(state: &mut PetState, old: &[Zone], new: &[Zone]) -> Option<Point> {
    let anchor = ZoneAnchor::capture(old, state.position)?;
    if state.behavior == Behavior::Walk {
        return None;
    }
    let zone = new.get(anchor.index)?;
    let position = anchor.resolve(zone);
    state.position = position;
    Some(position)
}
