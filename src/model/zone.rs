//! Zones: user-authored screen regions a pet may stand and walk in.

use super::geometry::Rect;

/// A rectangular region of screen space, in pixels.
///
/// The pet stands on the zone's floor (`y + height`) and may occupy any
/// x position that keeps its whole width inside `[x_start, x_end]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Zone {
    pub x_start: i32,
    pub x_end: i32,
    pub y: i32,
    pub height: i32,
}

impl Zone {
    pub const fn new(x_start: i32, x_end: i32, y: i32, height: i32) -> Self {
        Self {
            x_start,
            x_end,
            y,
            height,
        }
    }

    /// `x_start < x_end` and `height > 0`.
    pub fn is_valid(&self) -> bool {
        self.x_start < self.x_end && self.height > 0
    }

    pub fn width(&self) -> i32 {
        self.x_end - self.x_start
    }

    /// Top edge of an entity of `entity_height` standing on this zone.
    pub fn floor_y(&self, entity_height: i32) -> i32 {
        self.y + self.height - entity_height
    }

    /// Rightmost x an entity of `entity_width` may occupy.
    pub fn max_x(&self, entity_width: i32) -> i32 {
        self.x_end - entity_width
    }

    /// Whether an entity of `entity_width` at `x` fits in the x-range.
    pub fn admits_x(&self, x: i32, entity_width: i32) -> bool {
        self.x_start <= x && x <= self.max_x(entity_width)
    }

    /// The zone as a rectangle (for hit testing and drawing).
    pub fn rect(&self) -> Rect {
        Rect::new(self.x_start, self.y, self.width(), self.height)
    }
}

/// Index of the first zone (list order) admitting `x`.
pub fn first_admitting(zones: &[Zone], x: i32, entity_width: i32) -> Option<usize> {
    zones.iter().position(|z| z.admits_x(x, entity_width))
}
