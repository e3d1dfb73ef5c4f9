//! Zone-constrained walking.
//!
//! A step is committed only if the new x still fits a zone; otherwise the
//! pet turns around in place. The screen edges bounce the same way.

use super::state::{Direction, PetState};
use crate::model::{first_admitting, Size, Zone, PET_HEIGHT, PET_WIDTH, WALK_SPEED};

/// Advance a walking pet by one step.
pub fn step(state: &mut PetState, zones: &[Zone], screen: Size) {
    let old_x = state.position.x;
    let candidate = old_x + WALK_SPEED * state.direction.sign();

    match first_admitting(zones, candidate, PET_WIDTH) {
        Some(i) => {
            state.position.x = candidate;
            state.position.y = zones[i].floor_y(PET_HEIGHT);
        }
        None => {
            state.position.x = old_x;
            state.direction = state.direction.flipped();
        }
    }

    let right_edge = screen.width - PET_WIDTH;
    if state.position.x < 0 {
        state.position.x = 0;
        state.direction = Direction::Right;
    } else if state.position.x > right_edge {
        state.position.x = right_edge;
        state.direction = Direction::Left;
    }
}
