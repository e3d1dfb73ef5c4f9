//! The per-process loop: input, behavior, zone sync, window, present.

use std::rc::Rc;

use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{debug, info, warn};

use super::clock::FrameClock;
use crate::animation::AnimationSet;
use crate::editor::{EditorOutcome, EditorSurface, ScriptedEditor, ZoneEditor};
use crate::events::{EventBus, PetEvent};
use crate::model::{
    Point, SharedSettings, Size, Zone, PET_HEIGHT, PET_WIDTH, START_OFFSET_X, TICK_RATE_HZ,
};
use crate::pet::{reanchor, BehaviorStateMachine, RandomSource};
use crate::spawn::{spawn_pet, CommandSpawner, ProcessSpawner};
use crate::storage::{ConfigWatcher, PollingWatcher, SharedZoneStore};
use crate::window::{OverlayWindow, WindowBinding};

/// Where a pet starts: the command-line position if given, else just
/// inside the first zone, on its floor.
pub fn initial_position(zones: &[Zone], start: Option<Point>) -> Point {
    if let Some(p) = start {
        return p;
    }
    match zones.first() {
        Some(zone) => Point::new(zone.x_start + START_OFFSET_X, zone.floor_y(PET_HEIGHT)),
        None => Point::new(100, 0),
    }
}

/// One pet instance.
pub struct PetApp<W: WindowBinding> {
    machine: BehaviorStateMachine,
    settings: SharedSettings,
    store: SharedZoneStore,
    watcher: Box<dyn ConfigWatcher>,
    window: OverlayWindow<W>,
    editor: Box<dyn EditorSurface>,
    spawner: Box<dyn ProcessSpawner>,
    rng: Box<dyn RandomSource>,
    events: EventBus,
    running: bool,
}

impl<W: WindowBinding> PetApp<W> {
    /// Load the shared settings, place the pet and open its window.
    ///
    /// Defaults: polling watcher, an editor surface that cancels at once,
    /// the real process spawner and an entropy-seeded RNG.
    pub fn new(
        binding: W,
        store: SharedZoneStore,
        animations: Rc<AnimationSet>,
        start: Option<Point>,
    ) -> Self {
        let settings = store.load();
        let position = initial_position(&settings.zones, start);
        let window = OverlayWindow::open(
            binding,
            position,
            Size::new(PET_WIDTH, PET_HEIGHT),
            settings.stay_on_top,
        );
        let watcher = Box::new(PollingWatcher::new(&store));
        info!(
            x = position.x,
            y = position.y,
            zones = settings.zones.len(),
            stay_on_top = settings.stay_on_top,
            "pet started"
        );
        Self {
            machine: BehaviorStateMachine::new(position, animations),
            settings,
            store,
            watcher,
            window,
            editor: Box::new(ScriptedEditor::default()),
            spawner: Box::new(CommandSpawner),
            rng: Box::new(StdRng::from_entropy()),
            events: EventBus::new(),
            running: true,
        }
    }

    pub fn with_watcher(mut self, watcher: impl ConfigWatcher + 'static) -> Self {
        self.watcher = Box::new(watcher);
        self
    }

    pub fn with_boxed_watcher(mut self, watcher: Box<dyn ConfigWatcher>) -> Self {
        self.watcher = watcher;
        self
    }

    pub fn with_editor(mut self, editor: impl EditorSurface + 'static) -> Self {
        self.editor = Box::new(editor);
        self
    }

    pub fn with_spawner(mut self, spawner: impl ProcessSpawner + 'static) -> Self {
        self.spawner = Box::new(spawner);
        self
    }

    pub fn machine(&self) -> &BehaviorStateMachine {
        &self.machine
    }

    pub fn machine_mut(&mut self) -> &mut BehaviorStateMachine {
        &mut self.machine
    }

    pub fn settings(&self) -> &SharedSettings {
        &self.settings
    }

    pub fn window(&self) -> &OverlayWindow<W> {
        &self.window
    }

    pub fn window_mut(&mut self) -> &mut OverlayWindow<W> {
        &mut self.window
    }

    pub fn store(&self) -> &SharedZoneStore {
        &self.store
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Run at the fixed tick rate until a close event arrives.
    pub fn run(mut self) {
        let mut clock = FrameClock::new(TICK_RATE_HZ);
        while self.step(clock.tick()) {}
        info!("pet closed");
    }

    /// One loop iteration. Returns false once the pet should exit.
    pub fn step(&mut self, dt: u32) -> bool {
        let publisher = self.events.publisher();
        self.window.pump(&publisher);
        for event in self.events.drain() {
            debug!(event = event.description(), "input");
            self.handle_event(event);
            if !self.running {
                return false;
            }
        }
        self.tick(dt);
        true
    }

    pub fn handle_event(&mut self, event: PetEvent) {
        match event {
            PetEvent::Interact => {
                self.machine.interact();
            }
            PetEvent::OpenZoneEditor => self.edit_zones(),
            PetEvent::Close => self.running = false,
        }
    }

    /// Zone sync, behavior tick, window move and present.
    pub fn tick(&mut self, dt: u32) {
        if let Some(settings) = self.watcher.poll(dt, &self.store) {
            self.apply_settings(settings);
        }

        let screen = self.window.screen_size();
        if let Some(p) = self
            .machine
            .tick(dt, &self.settings.zones, screen, self.rng.as_mut())
        {
            self.window.move_to(p);
        }

        self.window.present(self.machine.current_frame());
    }

    /// Adopt settings written by another instance.
    pub fn apply_settings(&mut self, settings: SharedSettings) {
        let old = std::mem::replace(&mut self.settings.zones, settings.zones);
        if let Some(p) = reanchor(self.machine.state_mut(), &old, &self.settings.zones) {
            self.window.move_to(p);
        }
        self.settings.stay_on_top = settings.stay_on_top;
        self.window.set_topmost(settings.stay_on_top);
    }

    /// Run the zone editor with the pet window released.
    pub fn edit_zones(&mut self) {
        let outcome = {
            let suspended = self.window.suspend();
            let editor = ZoneEditor::open(&self.settings.zones, suspended.screen_size());
            info!(zones = editor.zones().len(), "zone editor opened");
            self.editor.run(editor)
        };

        match outcome {
            EditorOutcome::Save(zones) => {
                info!(zones = zones.len(), "zones saved from editor");
                match self.store.save_zones(&zones) {
                    Ok(()) => self.watcher.acknowledge(self.store.marker()),
                    Err(e) => warn!(error = %e, "could not write settings"),
                }
                self.settings.zones = zones;
            }
            EditorOutcome::SpawnPet => {
                spawn_pet(self.spawner.as_mut(), &self.settings.zones, self.rng.as_mut());
            }
            EditorOutcome::Cancel => debug!("zone editor cancelled"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn start_argument_wins() {
        let zones = [Zone::new(50, 500, 900, 60)];
        assert_eq!(initial_position(&zones, Some(Point::new(7, 8))), Point::new(7, 8));
    }

    #[test]
    fn default_start_is_inside_first_zone() {
        let zones = [Zone::new(50, 500, 900, 60), Zone::new(900, 1200, 100, 60)];
        assert_eq!(initial_position(&zones, None), Point::new(100, 840));
    }
}
