//! Window binding with no native window.
//!
//! Used where no windowing system is available and as the record/replay
//! binding in tests: it remembers every call and replays queued events
//! on `pump`.

use std::collections::VecDeque;

use super::WindowBinding;
use crate::animation::Frame;
use crate::error::{PetError, Result};
use crate::events::{EventPublisher, PetEvent};
use crate::model::{Point, Size};

#[derive(Debug, Clone)]
pub struct HeadlessWindow {
    screen: Size,
    pub origin: Option<Point>,
    pub topmost: bool,
    pub moves: Vec<Point>,
    pub created: usize,
    pub released: usize,
    pub presented: usize,
    /// Fail `create` calls; simulates a display that refuses windows.
    pub refuse_create: bool,
    pub refuse_topmost: bool,
    queued: VecDeque<PetEvent>,
}

impl HeadlessWindow {
    pub fn new(screen: Size) -> Self {
        Self {
            screen,
            origin: None,
            topmost: false,
            moves: Vec::new(),
            created: 0,
            released: 0,
            presented: 0,
            refuse_create: false,
            refuse_topmost: false,
            queued: VecDeque::new(),
        }
    }

    /// Deliver `event` on the next `pump`.
    pub fn queue(&mut self, event: PetEvent) {
        self.queued.push_back(event);
    }

    pub fn is_open(&self) -> bool {
        self.origin.is_some()
    }
}

impl WindowBinding for HeadlessWindow {
    fn create(&mut self, origin: Point, _size: Size) -> Result<()> {
        if self.refuse_create {
            return Err(PetError::Window("no display".into()));
        }
        self.created += 1;
        self.origin = Some(origin);
        Ok(())
    }

    fn move_to(&mut self, origin: Point) -> Result<()> {
        self.moves.push(origin);
        self.origin = Some(origin);
        Ok(())
    }

    fn set_topmost(&mut self, on: bool) -> Result<()> {
        if self.refuse_topmost {
            return Err(PetError::Window("topmost refused".into()));
        }
        self.topmost = on;
        Ok(())
    }

    fn present(&mut self, _frame: &Frame) -> Result<()> {
        self.presented += 1;
        Ok(())
    }

    fn release(&mut self) {
        if self.origin.take().is_some() {
            self.released += 1;
        }
    }

    fn pump(&mut self, events: &EventPublisher) {
        while let Some(event) = self.queued.pop_front() {
            events.publish(event);
        }
    }

    fn screen_size(&self) -> Size {
        self.screen
    }
}
