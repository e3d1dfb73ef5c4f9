//! Zone containment, shared settings and zone-change handling.

use std::path::PathBuf;
use std::rc::Rc;

use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

use schnauzer::animation::AnimationSet;
use schnauzer::model::{first_admitting, Behavior, SETTINGS_FILE_NAME, PET_WIDTH};
use schnauzer::pet::{locomotion, reanchor, BehaviorStateMachine, Direction, PetState};
use schnauzer::storage::{ConfigWatcher, PollingWatcher, SharedZoneStore};
use schnauzer::{Point, SharedSettings, Size, Zone};

const SCREEN: Size = Size::new(1920, 1080);

fn scratch(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("schnauzer-model-{}-{}", name, std::process::id()));
    let _ = std::fs::remove_dir_all(&dir);
    dir.join(SETTINGS_FILE_NAME)
}

fn zone_strategy() -> impl Strategy<Value = Zone> {
    (0..1500i32, PET_WIDTH..420i32, 0..900i32, 20..120i32).prop_map(|(x, w, y, h)| {
        let x_end = (x + w).min(SCREEN.width);
        let x_start = x_end - w;
        Zone::new(x_start, x_end, y, h)
    })
}

proptest! {
    #[test]
    fn walking_never_leaves_the_zones(
        zones in prop::collection::vec(zone_strategy(), 1..4),
        offset in 0..300i32,
        left in any::<bool>(),
        steps in 1..600usize,
    ) {
        let first = zones[0];
        let x = first.x_start + offset.min(first.max_x(PET_WIDTH) - first.x_start);
        let mut state = PetState::new(Point::new(x, first.floor_y(120)));
        state.behavior = Behavior::Walk;
        state.direction = if left { Direction::Left } else { Direction::Right };

        for _ in 0..steps {
            locomotion::step(&mut state, &zones, SCREEN);
            prop_assert!(first_admitting(&zones, state.position.x, PET_WIDTH).is_some());
            prop_assert!(state.position.x >= 0);
            prop_assert!(state.position.x <= SCREEN.width - PET_WIDTH);
        }
    }

    #[test]
    fn a_running_pet_stays_inside_its_zones(
        zones in prop::collection::vec(zone_strategy(), 1..4),
        seed in any::<u64>(),
    ) {
        let first = zones[0];
        let start = Point::new(first.x_start, first.floor_y(120));
        let mut machine = BehaviorStateMachine::new(start, Rc::new(AnimationSet::placeholder()));
        let mut rng = StdRng::seed_from_u64(seed);

        for _ in 0..2000 {
            machine.tick(16, &zones, SCREEN, &mut rng);
            let x = machine.position().x;
            prop_assert!(first_admitting(&zones, x, PET_WIDTH).is_some(), "x = {} zones = {:?}", x, zones);
        }
    }
}

#[test]
fn settings_written_by_one_store_are_read_by_another() {
    let path = scratch("shared");
    let writer = SharedZoneStore::new(&path, SCREEN);
    let reader = SharedZoneStore::new(&path, SCREEN);
    let settings = SharedSettings {
        zones: vec![Zone::new(0, 400, 300, 60), Zone::new(800, 1400, 700, 80)],
        stay_on_top: false,
    };

    writer.save(&settings).unwrap();

    assert_eq!(reader.load(), settings);
}

#[test]
fn legacy_file_without_heights_gets_default_height() {
    let path = scratch("legacy");
    std::fs::create_dir_all(path.parent().unwrap()).unwrap();
    std::fs::write(&path, r#"{"zones": [[10, 500], [900, 1500, 200, 40]]}"#).unwrap();

    let loaded = SharedZoneStore::new(&path, SCREEN).load();

    assert_eq!(loaded.zones[0].x_start, 10);
    assert_eq!(loaded.zones[0].x_end, 500);
    assert_eq!(loaded.zones[0].height, 60);
    assert_eq!(loaded.zones[1], Zone::new(900, 1500, 200, 40));
    assert!(loaded.stay_on_top);
}

#[test]
fn saving_zones_preserves_unknown_keys() {
    let path = scratch("extra-keys");
    std::fs::create_dir_all(path.parent().unwrap()).unwrap();
    std::fs::write(&path, r#"{"zones": [[0, 300, 100, 60]], "stay_on_top": false, "theme": "dark"}"#)
        .unwrap();
    let store = SharedZoneStore::new(&path, SCREEN);

    store.save_zones(&[Zone::new(50, 650, 400, 60)]).unwrap();

    let text = std::fs::read_to_string(&path).unwrap();
    let json: serde_json::Value = serde_json::from_str(&text).unwrap();
    assert_eq!(json["theme"], "dark");
    assert_eq!(json["stay_on_top"], false);
    assert_eq!(json["zones"], serde_json::json!([[50, 650, 400, 60]]));
}

#[test]
fn idle_pet_keeps_its_offset_when_the_zone_moves() {
    let old = [Zone::new(100, 500, 900, 60)];
    let new = [Zone::new(300, 700, 500, 60)];
    let mut state = PetState::new(Point::new(150, 830));

    let moved = reanchor(&mut state, &old, &new);

    assert_eq!(moved, Some(Point::new(350, 430)));
    assert_eq!(state.position, Point::new(350, 430));
}

#[test]
fn walking_pet_is_not_repositioned() {
    let old = [Zone::new(100, 500, 900, 60)];
    let new = [Zone::new(300, 700, 500, 60)];
    let mut state = PetState::new(Point::new(150, 840));
    state.behavior = Behavior::Walk;

    assert_eq!(reanchor(&mut state, &old, &new), None);
    assert_eq!(state.position, Point::new(150, 840));
}

#[test]
fn pet_whose_zone_was_removed_stays_put() {
    let old = [Zone::new(0, 300, 900, 60), Zone::new(1000, 1500, 900, 60)];
    let new = [Zone::new(0, 300, 900, 60)];
    let mut state = PetState::new(Point::new(1100, 840));

    assert_eq!(reanchor(&mut state, &old, &new), None);
    assert_eq!(state.position, Point::new(1100, 840));
}

#[test]
fn watcher_sees_a_rewrite_by_another_instance() {
    let path = scratch("watch");
    let ours = SharedZoneStore::new(&path, SCREEN);
    ours.save(&SharedSettings::defaults(SCREEN)).unwrap();
    let mut watcher = PollingWatcher::with_interval(&ours, 100);

    let theirs = SharedZoneStore::new(&path, SCREEN);
    let updated = SharedSettings {
        zones: vec![Zone::new(200, 900, 400, 60)],
        stay_on_top: false,
    };
    theirs.save(&updated).unwrap();

    assert_eq!(watcher.poll(50, &ours), None);
    assert_eq!(watcher.poll(50, &ours), Some(updated));
    assert_eq!(watcher.poll(100, &ours), None);
}
