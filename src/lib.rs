//! Desktop pet library.
//!
//! Pure logic (behavior, zones, settings, editor model) lives here so the
//! integration tests can drive it headless; the binary only adds the
//! native window, editor surface and watcher from `platform`.

pub mod animation;
pub mod app;
pub mod editor;
pub mod error;
pub mod events;
pub mod model;
pub mod pet;
pub mod platform;
pub mod spawn;
pub mod storage;
pub mod window;

pub use error::{PetError, Result};
pub use events::{EventBus, EventPublisher, PetEvent};
pub use model::{Point, Rect, SharedSettings, Size, Zone};

/// Clamp `v` to `[lo, hi]`. When the range is empty `lo` wins.
pub fn clamp(v: i32, lo: i32, hi: i32) -> i32 {
    v.min(hi).max(lo)
}

/// Start position from the command line: the first two arguments as
/// integers. Anything else means "use the default".
pub fn parse_position<S: AsRef<str>>(args: &[S]) -> Option<Point> {
    match args {
        [x, y, ..] => {
            let x = x.as_ref().trim().parse().ok()?;
            let y = y.as_ref().trim().parse().ok()?;
            Some(Point::new(x, y))
        }
        _ => None,
    }
}
