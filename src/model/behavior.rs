//! Pet behaviors and their per-state timing.

use super::constants::*;

/// One of the named animation/logic states of a pet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Behavior {
    Idle,
    Walk,
    Sit,
    Backflip,
    Poop,
    PortalOut,
    PortalIn,
}

/// Tricks started by the primary click, in rotation order.
pub const TRICK_ROTATION: [Behavior; 3] = [Behavior::Backflip, Behavior::Sit, Behavior::Poop];

impl Behavior {
    /// Every behavior, in a stable order used to index per-behavior tables.
    pub const ALL: [Behavior; 7] = [
        Behavior::Idle,
        Behavior::Walk,
        Behavior::Sit,
        Behavior::Backflip,
        Behavior::Poop,
        Behavior::PortalOut,
        Behavior::PortalIn,
    ];

    /// Position of this behavior in [`Behavior::ALL`].
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Time between animation frames.
    pub const fn frame_interval_ms(self) -> u32 {
        match self {
            Behavior::Walk => FRAME_MS_WALK,
            Behavior::Backflip => FRAME_MS_BACKFLIP,
            Behavior::PortalOut => FRAME_MS_PORTAL_OUT,
            Behavior::PortalIn => FRAME_MS_PORTAL_IN,
            Behavior::Idle | Behavior::Sit | Behavior::Poop => FRAME_MS_DEFAULT,
        }
    }

    /// Whether a primary click may start a trick from this behavior.
    ///
    /// Running tricks are not stacked and a teleport is never interrupted.
    pub const fn accepts_interact(self) -> bool {
        matches!(self, Behavior::Idle | Behavior::Sit | Behavior::Walk)
    }

    pub const fn is_portal(self) -> bool {
        matches!(self, Behavior::PortalOut | Behavior::PortalIn)
    }

    /// Whether the frame is mirrored when the pet faces left.
    pub const fn mirrors_with_direction(self) -> bool {
        !matches!(
            self,
            Behavior::Backflip | Behavior::PortalOut | Behavior::PortalIn
        )
    }

    pub const fn name(self) -> &'static str {
        match self {
            Behavior::Idle => "idle",
            Behavior::Walk => "walk",
            Behavior::Sit => "sit",
            Behavior::Backflip => "backflip",
            Behavior::Poop => "poop",
            Behavior::PortalOut => "portal_out",
            Behavior::PortalIn => "portal_in",
        }
    }
}

impl std::fmt::Display for Behavior {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
