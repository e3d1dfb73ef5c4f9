//! Launching additional pet processes.

use std::process::{Command, Stdio};

use tracing::{info, warn};

use crate::error::{PetError, Result};
use crate::model::{Point, Zone};
use crate::pet::{landing_spot, RandomSource};

/// Starts a new, independent pet.
pub trait ProcessSpawner {
    fn spawn(&mut self, at: Point) -> Result<()>;
}

/// Re-runs the current executable with `x y` arguments. The child is not
/// waited on.
#[derive(Debug, Default, Clone)]
pub struct CommandSpawner;

impl ProcessSpawner for CommandSpawner {
    fn spawn(&mut self, at: Point) -> Result<()> {
        let exe = std::env::current_exe().map_err(PetError::Spawn)?;
        let mut command = Command::new(exe);
        command
            .arg(at.x.to_string())
            .arg(at.y.to_string())
            .stdin(Stdio::null())
            .stdout(Stdio::null());
        #[cfg(target_os = "windows")]
        {
            use std::os::windows::process::CommandExt;
            const CREATE_NO_WINDOW: u32 = 0x0800_0000;
            command.creation_flags(CREATE_NO_WINDOW);
        }
        let child = command.spawn().map_err(PetError::Spawn)?;
        info!(pid = child.id(), x = at.x, y = at.y, "spawned new pet");
        Ok(())
    }
}

/// A landing spot in a uniformly chosen zone.
pub fn spawn_position(zones: &[Zone], rng: &mut dyn RandomSource) -> Option<Point> {
    if zones.is_empty() {
        return None;
    }
    let zone = &zones[rng.index(zones.len())];
    Some(landing_spot(zone, rng))
}

/// Spawn a pet somewhere in `zones`, logging instead of failing.
pub fn spawn_pet(spawner: &mut dyn ProcessSpawner, zones: &[Zone], rng: &mut dyn RandomSource) {
    let Some(at) = spawn_position(zones, rng) else {
        warn!("no zone to spawn a pet into");
        return;
    };
    if let Err(e) = spawner.spawn(at) {
        warn!(error = %e, "failed to spawn new pet");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[derive(Default)]
    struct Recorder {
        spawned: Vec<Point>,
        fail: bool,
    }

    impl ProcessSpawner for Recorder {
        fn spawn(&mut self, at: Point) -> Result<()> {
            if self.fail {
                return Err(PetError::Spawn(std::io::Error::other("denied")));
            }
            self.spawned.push(at);
            Ok(())
        }
    }

    #[test]
    fn spawn_lands_inside_a_zone() {
        let zones = [Zone::new(0, 600, 500, 60), Zone::new(1000, 1500, 800, 60)];
        let mut rng = StdRng::seed_from_u64(4);
        for _ in 0..50 {
            let p = spawn_position(&zones, &mut rng).unwrap();
            assert!(zones.iter().any(|z| z.admits_x(p.x, 120) && p.y == z.floor_y(120)));
        }
    }

    #[test]
    fn no_zones_no_spawn() {
        let mut rng = StdRng::seed_from_u64(4);
        let mut rec = Recorder::default();
        spawn_pet(&mut rec, &[], &mut rng);
        assert!(rec.spawned.is_empty());
    }

    #[test]
    fn spawn_failure_is_absorbed() {
        let mut rng = StdRng::seed_from_u64(4);
        let mut rec = Recorder {
            fail: true,
            ..Default::default()
        };
        spawn_pet(&mut rec, &[Zone::new(0, 600, 500, 60)], &mut rng);
        assert!(rec.spawned.is_empty());
    }
}
