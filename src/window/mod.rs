//! The pet's native window, behind a capability trait.
//!
//! The core only talks to [`WindowBinding`]. [`OverlayWindow`] wraps a
//! binding with the policies every backend shares: skipping redundant
//! moves, degrading instead of failing, and the suspend/reacquire cycle
//! around the zone editor.

pub mod headless;
pub mod overlay;

pub use headless::HeadlessWindow;
pub use overlay::{OverlayWindow, Suspension};

use crate::animation::Frame;
use crate::error::Result;
use crate::events::EventPublisher;
use crate::model::{Point, Size};

/// Native window operations a pet needs.
pub trait WindowBinding {
    /// Create (or re-create) the window at `origin`.
    fn create(&mut self, origin: Point, size: Size) -> Result<()>;

    fn move_to(&mut self, origin: Point) -> Result<()>;

    fn set_topmost(&mut self, on: bool) -> Result<()>;

    /// Show `frame` with per-pixel alpha.
    fn present(&mut self, frame: &Frame) -> Result<()>;

    /// Destroy the window. Safe to call when none exists.
    fn release(&mut self);

    /// Translate pending native input into events.
    fn pump(&mut self, events: &EventPublisher);

    fn screen_size(&self) -> Size;
}

impl<T: WindowBinding + ?Sized> WindowBinding for Box<T> {
    fn create(&mut self, origin: Point, size: Size) -> Result<()> {
        (**self).create(origin, size)
    }

    fn move_to(&mut self, origin: Point) -> Result<()> {
        (**self).move_to(origin)
    }

    fn set_topmost(&mut self, on: bool) -> Result<()> {
        (**self).set_topmost(on)
    }

    fn present(&mut self, frame: &Frame) -> Result<()> {
        (**self).present(frame)
    }

    fn release(&mut self) {
        (**self).release()
    }

    fn pump(&mut self, events: &EventPublisher) {
        (**self).pump(events)
    }

    fn screen_size(&self) -> Size {
        (**self).screen_size()
    }
}
