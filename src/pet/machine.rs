//! The per-instance behavior state machine.
//!
//! One call to [`BehaviorStateMachine::tick`] runs, in order: timer
//! accumulation, frame advance with end-of-sequence transitions, the idle
//! draw or a walk step, the window-move decision and poop expiry.

use std::rc::Rc;

use tracing::debug;

use super::locomotion;
use super::random::RandomSource;
use super::state::{Direction, PetState, PoopMarker};
use super::teleport;
use crate::animation::{AnimationSet, Frame};
use crate::model::{
    Behavior, Point, Size, Zone, IDLE_DWELL_MS, STOP_WALK_CHANCE, TELEPORT_CEILING,
    TRICK_ROTATION, WALK_CHANCE, WALK_DWELL_MS,
};

pub struct BehaviorStateMachine {
    state: PetState,
    animations: Rc<AnimationSet>,
}

impl BehaviorStateMachine {
    pub fn new(position: Point, animations: Rc<AnimationSet>) -> Self {
        Self {
            state: PetState::new(position),
            animations,
        }
    }

    pub fn state(&self) -> &PetState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut PetState {
        &mut self.state
    }

    pub fn behavior(&self) -> Behavior {
        self.state.behavior
    }

    pub fn position(&self) -> Point {
        self.state.position
    }

    pub fn animations(&self) -> &Rc<AnimationSet> {
        &self.animations
    }

    /// Advance by `dt` milliseconds.
    ///
    /// Returns the position the window should move to this tick, or `None`
    /// while a portal animation owns the window. The relocation at the end
    /// of `portal_out` is always reported.
    pub fn tick(
        &mut self,
        dt: u32,
        zones: &[Zone],
        screen: Size,
        rng: &mut dyn RandomSource,
    ) -> Option<Point> {
        let mut relocated = None;

        self.state.frame_timer = self.state.frame_timer.saturating_add(dt);
        self.state.state_timer = self.state.state_timer.saturating_add(dt);

        if self.state.frame_timer >= self.state.behavior.frame_interval_ms() {
            self.state.frame_timer = 0;
            self.state.frame_index += 1;
            if self.state.frame_index >= self.animations.len(self.state.behavior) {
                relocated = self.finish_sequence();
            }
        }

        match self.state.behavior {
            Behavior::Idle if self.state.state_timer > IDLE_DWELL_MS => {
                let r = rng.unit();
                if r < WALK_CHANCE {
                    self.state.enter(Behavior::Walk);
                    self.state.direction = if rng.coin() {
                        Direction::Right
                    } else {
                        Direction::Left
                    };
                    debug!(direction = ?self.state.direction, "start walking");
                } else if r < TELEPORT_CEILING && zones.len() > 1 {
                    if teleport::begin(&mut self.state, zones, rng) {
                        debug!(target = ?self.state.teleport_target, "teleport");
                    }
                }
            }
            Behavior::Walk => {
                locomotion::step(&mut self.state, zones, screen);
                if self.state.state_timer > WALK_DWELL_MS && rng.unit() < STOP_WALK_CHANCE {
                    self.state.enter(Behavior::Idle);
                }
            }
            _ => {}
        }

        let moved = if self.state.behavior.is_portal() {
            relocated
        } else {
            Some(self.state.position)
        };

        let dt = i32::try_from(dt).unwrap_or(i32::MAX);
        self.state.poop_markers.retain_mut(|marker| {
            marker.remaining_ttl = marker.remaining_ttl.saturating_sub(dt);
            marker.remaining_ttl > 0
        });

        moved
    }

    fn finish_sequence(&mut self) -> Option<Point> {
        let mut relocated = None;
        match self.state.behavior {
            Behavior::Sit | Behavior::Backflip => self.state.enter(Behavior::Idle),
            Behavior::Poop => {
                let marker = PoopMarker::dropped_by(self.state.position);
                debug!(at = ?marker.position, "poop dropped");
                self.state.poop_markers.push(marker);
                self.state.enter(Behavior::Idle);
            }
            Behavior::PortalOut => {
                if let Some(target) = self.state.teleport_target {
                    self.state.position = target;
                    relocated = Some(target);
                }
                self.state.enter(Behavior::PortalIn);
            }
            Behavior::PortalIn => {
                self.state.enter(Behavior::Idle);
                self.state.teleport_target = None;
            }
            Behavior::Idle | Behavior::Walk => {}
        }
        self.state.frame_index = 0;
        relocated
    }

    /// Primary-click reaction: start the next trick in the rotation.
    ///
    /// Returns the trick started, or `None` if the current behavior does
    /// not accept interaction.
    pub fn interact(&mut self) -> Option<Behavior> {
        if !self.state.behavior.accepts_interact() {
            return None;
        }
        let trick = TRICK_ROTATION[self.state.trick_rotation_index];
        self.state.trick_rotation_index = (self.state.trick_rotation_index + 1) % TRICK_ROTATION.len();
        self.state.behavior = trick;
        self.state.frame_index = 0;
        self.state.frame_timer = 0;
        debug!(trick = %trick, "trick");
        Some(trick)
    }

    /// The frame to present right now, mirrored when facing left.
    pub fn current_frame(&self) -> &Frame {
        self.animations.frame_facing(
            self.state.behavior,
            self.state.frame_index,
            self.state.direction == Direction::Left,
        )
    }
}
