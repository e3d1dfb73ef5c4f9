//! Per-instance pet state. Never shared across processes.

use crate::model::{Behavior, Point, POOP_OFFSET, POOP_TTL_MS};

/// Facing and walking direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Left,
    Right,
}

impl Direction {
    /// `-1` for left, `+1` for right.
    pub const fn sign(self) -> i32 {
        match self {
            Direction::Left => -1,
            Direction::Right => 1,
        }
    }

    pub const fn flipped(self) -> Self {
        match self {
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }
}

/// A dropping left behind by the poop trick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PoopMarker {
    pub position: Point,
    pub remaining_ttl: i32,
}

impl PoopMarker {
    /// Marker for a pet whose window sits at `pet`.
    pub fn dropped_by(pet: Point) -> Self {
        Self {
            position: pet.offset(POOP_OFFSET.0, POOP_OFFSET.1),
            remaining_ttl: POOP_TTL_MS,
        }
    }
}

/// Everything one pet instance mutates each tick.
#[derive(Debug, Clone, PartialEq)]
pub struct PetState {
    pub position: Point,
    pub behavior: Behavior,
    pub direction: Direction,
    pub frame_index: usize,
    /// Time since the last frame advance.
    pub frame_timer: u32,
    /// Dwell time in the current behavior.
    pub state_timer: u32,
    /// Next entry of [`crate::model::TRICK_ROTATION`] to start.
    pub trick_rotation_index: usize,
    /// Landing spot of a teleport in progress.
    pub teleport_target: Option<Point>,
    pub poop_markers: Vec<PoopMarker>,
}

impl PetState {
    /// A pet idling at `position`, facing right.
    pub fn new(position: Point) -> Self {
        Self {
            position,
            behavior: Behavior::Idle,
            direction: Direction::Right,
            frame_index: 0,
            frame_timer: 0,
            state_timer: 0,
            trick_rotation_index: 0,
            teleport_target: None,
            poop_markers: Vec::new(),
        }
    }

    /// Switch behavior, restarting its animation and dwell timer.
    pub fn enter(&mut self, behavior: Behavior) {
        self.behavior = behavior;
        self.frame_index = 0;
        self.frame_timer = 0;
        self.state_timer = 0;
    }
}
