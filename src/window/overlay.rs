//! Window policies shared by every binding.

use tracing::{debug, info, warn};

use super::WindowBinding;
use crate::animation::Frame;
use crate::events::EventPublisher;
use crate::model::{Point, Size};

/// A pet window: a binding plus move de-duplication and degraded-mode
/// bookkeeping. Binding failures are logged, never propagated.
pub struct OverlayWindow<B: WindowBinding> {
    binding: B,
    size: Size,
    position: Point,
    /// Last position actually sent to the binding.
    sent: Option<Point>,
    topmost: bool,
    headless: bool,
    topmost_refused: bool,
}

impl<B: WindowBinding> OverlayWindow<B> {
    /// Create the native window. If that fails the pet keeps running
    /// headless.
    pub fn open(binding: B, origin: Point, size: Size, topmost: bool) -> Self {
        let mut window = Self {
            binding,
            size,
            position: origin,
            sent: None,
            topmost,
            headless: false,
            topmost_refused: false,
        };
        window.acquire();
        window
    }

    fn acquire(&mut self) {
        match self.binding.create(self.position, self.size) {
            Ok(()) => {
                self.headless = false;
                self.sent = Some(self.position);
                self.apply_topmost();
            }
            Err(e) => {
                warn!(error = %e, "window unavailable, running headless");
                self.headless = true;
                self.sent = None;
            }
        }
    }

    fn apply_topmost(&mut self) {
        if self.headless {
            return;
        }
        match self.binding.set_topmost(self.topmost) {
            Ok(()) => self.topmost_refused = false,
            Err(e) => {
                if !self.topmost_refused {
                    warn!(error = %e, "stay-on-top refused");
                }
                self.topmost_refused = true;
            }
        }
    }

    pub fn binding(&self) -> &B {
        &self.binding
    }

    pub fn binding_mut(&mut self) -> &mut B {
        &mut self.binding
    }

    pub fn position(&self) -> Point {
        self.position
    }

    pub fn is_headless(&self) -> bool {
        self.headless
    }

    pub fn is_topmost(&self) -> bool {
        self.topmost && !self.topmost_refused && !self.headless
    }

    pub fn screen_size(&self) -> Size {
        self.binding.screen_size()
    }

    /// Move the window, skipping the call when nothing changed.
    pub fn move_to(&mut self, origin: Point) {
        self.position = origin;
        if self.headless || self.sent == Some(origin) {
            return;
        }
        match self.binding.move_to(origin) {
            Ok(()) => self.sent = Some(origin),
            Err(e) => debug!(error = %e, "window move failed"),
        }
    }

    pub fn set_topmost(&mut self, on: bool) {
        if self.topmost == on {
            return;
        }
        info!(stay_on_top = on, "stay-on-top changed");
        self.topmost = on;
        self.apply_topmost();
    }

    pub fn present(&mut self, frame: &Frame) {
        if self.headless {
            return;
        }
        if let Err(e) = self.binding.present(frame) {
            debug!(error = %e, "present failed");
        }
    }

    pub fn pump(&mut self, events: &EventPublisher) {
        self.binding.pump(events);
    }

    /// Release the native window until the returned guard is dropped.
    ///
    /// Dropping the guard re-creates the window at its last position and
    /// re-applies stay-on-top, whichever way the suspended section exits.
    pub fn suspend(&mut self) -> Suspension<'_, B> {
        debug!("window suspended");
        self.binding.release();
        self.sent = None;
        Suspension { window: self }
    }
}

impl<B: WindowBinding> Drop for OverlayWindow<B> {
    fn drop(&mut self) {
        self.binding.release();
    }
}

/// Scope during which the pet window does not exist.
pub struct Suspension<'a, B: WindowBinding> {
    window: &'a mut OverlayWindow<B>,
}

impl<B: WindowBinding> Suspension<'_, B> {
    pub fn screen_size(&self) -> Size {
        self.window.binding.screen_size()
    }
}

impl<B: WindowBinding> Drop for Suspension<'_, B> {
    fn drop(&mut self) {
        debug!(at = ?self.window.position, "window reacquired");
        self.window.acquire();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::window::HeadlessWindow;

    const SCREEN: Size = Size::new(1920, 1080);
    const PET: Size = Size::new(120, 120);

    fn open(binding: HeadlessWindow) -> OverlayWindow<HeadlessWindow> {
        OverlayWindow::open(binding, Point::new(10, 20), PET, true)
    }

    #[test]
    fn open_creates_and_applies_topmost() {
        let w = open(HeadlessWindow::new(SCREEN));
        assert_eq!(w.binding().created, 1);
        assert!(w.binding().topmost);
        assert!(w.is_topmost());
    }

    #[test]
    fn unchanged_moves_are_skipped() {
        let mut w = open(HeadlessWindow::new(SCREEN));
        w.move_to(Point::new(10, 20));
        w.move_to(Point::new(12, 20));
        w.move_to(Point::new(12, 20));
        assert_eq!(w.binding().moves, vec![Point::new(12, 20)]);
    }

    #[test]
    fn refused_create_degrades_to_headless() {
        let mut binding = HeadlessWindow::new(SCREEN);
        binding.refuse_create = true;
        let mut w = open(binding);
        assert!(w.is_headless());
        w.move_to(Point::new(50, 50));
        assert!(w.binding().moves.is_empty());
        assert_eq!(w.position(), Point::new(50, 50));
    }

    #[test]
    fn refused_topmost_is_not_fatal() {
        let mut binding = HeadlessWindow::new(SCREEN);
        binding.refuse_topmost = true;
        let w = open(binding);
        assert!(!w.is_headless());
        assert!(!w.is_topmost());
    }

    #[test]
    fn suspension_reacquires_on_drop() {
        let mut w = open(HeadlessWindow::new(SCREEN));
        w.move_to(Point::new(300, 400));
        {
            let s = w.suspend();
            assert_eq!(s.screen_size(), SCREEN);
        }
        let b = w.binding();
        assert_eq!(b.released, 1);
        assert_eq!(b.created, 2);
        assert_eq!(b.origin, Some(Point::new(300, 400)));
        assert!(b.topmost);
    }

    #[test]
    fn suspension_reacquires_on_early_exit() {
        fn edit(w: &mut OverlayWindow<HeadlessWindow>) -> Option<()> {
            let _guard = w.suspend();
            None::<()>?;
            Some(())
        }
        let mut w = open(HeadlessWindow::new(SCREEN));
        assert!(edit(&mut w).is_none());
        assert!(w.binding().is_open());
        assert_eq!(w.binding().created, 2);
    }
}
