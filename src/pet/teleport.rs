//! Cross-zone relocation.
//!
//! Picking the target happens here; the actual jump happens in the state
//! machine when the `portal_out` animation finishes.

use super::random::RandomSource;
use super::state::PetState;
use crate::model::{
    first_admitting, Behavior, Point, Zone, PET_HEIGHT, PET_WIDTH, PLACEMENT_MARGIN,
    PLACEMENT_MIN_SPAN,
};

/// A landing spot inside `zone`: away from the edges when the zone is wide
/// enough, centered otherwise. `y` is the zone floor.
pub fn landing_spot(zone: &Zone, rng: &mut dyn RandomSource) -> Point {
    let span = zone.width() - PET_WIDTH;
    let x = if span > PLACEMENT_MIN_SPAN {
        zone.x_start + rng.between(PLACEMENT_MARGIN, span - PLACEMENT_MARGIN)
    } else {
        zone.x_start + span.max(0) / 2
    };
    Point::new(x, zone.floor_y(PET_HEIGHT))
}

/// Choose where a pet at `x` should teleport to.
///
/// Returns `None` with fewer than two zones. The zone currently holding
/// the pet is excluded; if the pet is in no zone every zone is eligible.
pub fn choose_target(zones: &[Zone], x: i32, rng: &mut dyn RandomSource) -> Option<Point> {
    if zones.len() <= 1 {
        return None;
    }
    let current = first_admitting(zones, x, PET_WIDTH);
    let candidates: Vec<usize> = (0..zones.len()).filter(|&i| Some(i) != current).collect();
    let target = candidates[rng.index(candidates.len())];
    Some(landing_spot(&zones[target], rng))
}

/// Start a teleport: store the target and enter `portal_out`.
///
/// Returns false (and leaves the state untouched) when there is nowhere
/// to go.
pub fn begin(state: &mut PetState, zones: &[Zone], rng: &mut dyn RandomSource) -> bool {
    let Some(target) = choose_target(zones, state.position.x, rng) else {
        return false;
    };
    state.teleport_target = Some(target);
    state.enter(Behavior::PortalOut);
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn single_zone_is_a_no_op() {
        let zones = [Zone::new(0, 300, 900, 60)];
        let mut rng = StdRng::seed_from_u64(3);
        let mut s = PetState::new(Point::new(10, 840));
        assert!(!begin(&mut s, &zones, &mut rng));
        assert_eq!(s.behavior, Behavior::Idle);
        assert!(s.teleport_target.is_none());
    }

    #[test]
    fn target_is_never_the_current_zone() {
        let zones = [Zone::new(0, 300, 900, 60), Zone::new(500, 800, 400, 60)];
        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..200 {
            let target = choose_target(&zones, 50, &mut rng).unwrap();
            assert!(zones[1].admits_x(target.x, PET_WIDTH));
            assert!(!zones[0].admits_x(target.x, PET_WIDTH));
            assert_eq!(target.y, zones[1].floor_y(PET_HEIGHT));
        }
    }

    #[test]
    fn wide_zone_keeps_margin() {
        let zone = Zone::new(0, 1000, 900, 60);
        let mut rng = StdRng::seed_from_u64(5);
        for _ in 0..200 {
            let p = landing_spot(&zone, &mut rng);
            assert!(p.x >= 50 && p.x <= 1000 - PET_WIDTH - 50);
        }
    }

    #[test]
    fn narrow_zone_centers() {
        let zone = Zone::new(100, 300, 900, 60);
        let mut rng = StdRng::seed_from_u64(5);
        assert_eq!(landing_spot(&zone, &mut rng).x, 140);
    }

    #[test]
    fn zone_narrower_than_pet_lands_on_start() {
        let zone = Zone::new(100, 150, 900, 60);
        let mut rng = StdRng::seed_from_u64(5);
        assert_eq!(landing_spot(&zone, &mut rng).x, 100);
    }

    #[test]
    fn begin_enters_portal_out() {
        let zones = [Zone::new(0, 300, 900, 60), Zone::new(500, 800, 900, 60)];
        let mut rng = StdRng::seed_from_u64(9);
        let mut s = PetState::new(Point::new(10, 840));
        s.frame_index = 4;
        assert!(begin(&mut s, &zones, &mut rng));
        assert_eq!(s.behavior, Behavior::PortalOut);
        assert_eq!(s.frame_index, 0);
        assert!(s.teleport_target.is_some());
    }
}
