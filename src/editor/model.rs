//! Editing state of the zone editor, independent of any window.

use super::layout::{EditorButton, EditorLayout, ZoneHandles};
use super::{EditorInput, EditorKey, EditorOutcome};
use crate::clamp;
use crate::model::{
    ground_y, Point, Size, Zone, DEFAULT_ZONE_HEIGHT, EDITOR_MIN_ZONE_WIDTH,
    EDITOR_NEW_ZONE_HALF_WIDTH, FALLBACK_ZONE_END, FALLBACK_ZONE_START,
};

/// Part of a zone under the pointer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ZonePart {
    LeftEdge,
    RightEdge,
    Body,
}

/// A zone part, by index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Target {
    pub index: usize,
    pub part: ZonePart,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Drag {
    target: Target,
    /// Pointer offset from the zone's top-left corner when grabbed.
    grab: (i32, i32),
}

#[derive(Debug, Clone)]
pub struct ZoneEditor {
    zones: Vec<Zone>,
    screen: Size,
    layout: EditorLayout,
    drag: Option<Drag>,
    hover: Option<Target>,
}

impl ZoneEditor {
    /// Open on a copy of `zones`. Zones that are invalid or reach past the
    /// screen's x-range are dropped; if nothing survives a single fallback
    /// zone on the ground line is used.
    pub fn open(zones: &[Zone], screen: Size) -> Self {
        let mut kept: Vec<Zone> = zones
            .iter()
            .copied()
            .filter(|z| z.is_valid() && z.x_start >= 0 && z.x_end <= screen.width)
            .collect();
        if kept.is_empty() {
            kept.push(Zone::new(
                FALLBACK_ZONE_START,
                FALLBACK_ZONE_END,
                ground_y(screen),
                DEFAULT_ZONE_HEIGHT,
            ));
        }
        Self {
            zones: kept,
            screen,
            layout: EditorLayout::new(screen),
            drag: None,
            hover: None,
        }
    }

    pub fn zones(&self) -> &[Zone] {
        &self.zones
    }

    pub fn screen(&self) -> Size {
        self.screen
    }

    pub fn layout(&self) -> &EditorLayout {
        &self.layout
    }

    pub fn hover(&self) -> Option<Target> {
        self.hover
    }

    pub fn dragging(&self) -> Option<Target> {
        self.drag.map(|d| d.target)
    }

    /// Whether `target` is hovered or dragged; used for highlighting.
    pub fn is_active(&self, target: Target) -> bool {
        self.hover == Some(target) || self.dragging() == Some(target)
    }

    /// Delete buttons are only offered while more than one zone exists.
    pub fn can_delete(&self) -> bool {
        self.zones.len() > 1
    }

    /// Feed one input. Returns the outcome once the session is over.
    pub fn handle(&mut self, input: EditorInput) -> Option<EditorOutcome> {
        match input {
            EditorInput::PointerDown(p) => self.pointer_down(p),
            EditorInput::PointerMove(p) => {
                self.pointer_move(p);
                None
            }
            EditorInput::PointerUp => {
                self.drag = None;
                None
            }
            EditorInput::Key(key) => self.key(key),
            EditorInput::Close => Some(EditorOutcome::Cancel),
        }
    }

    pub fn key(&mut self, key: EditorKey) -> Option<EditorOutcome> {
        match key {
            EditorKey::Escape => Some(EditorOutcome::Cancel),
            EditorKey::Enter => Some(EditorOutcome::Save(self.zones.clone())),
        }
    }

    pub fn pointer_down(&mut self, p: Point) -> Option<EditorOutcome> {
        if let Some(button) = self.layout.button_at(p) {
            return match button {
                EditorButton::Save => Some(EditorOutcome::Save(self.zones.clone())),
                EditorButton::Cancel => Some(EditorOutcome::Cancel),
                EditorButton::AddPet => Some(EditorOutcome::SpawnPet),
                EditorButton::AddZone => {
                    self.add_zone();
                    None
                }
            };
        }

        let can_delete = self.can_delete();
        let press = self.zones.iter().enumerate().find_map(|(index, zone)| {
            let handles = ZoneHandles::of(zone);
            if can_delete && handles.delete.contains(p) {
                return Some(Press::Delete(index));
            }
            part_at(&handles, p).map(|part| Press::Grab(Target { index, part }))
        });
        match press {
            Some(Press::Delete(index)) => {
                self.zones.remove(index);
                self.hover = None;
            }
            Some(Press::Grab(target)) => {
                let zone = self.zones[target.index];
                self.drag = Some(Drag {
                    target,
                    grab: (p.x - zone.x_start, p.y - zone.y),
                });
            }
            None => {}
        }
        None
    }

    pub fn pointer_move(&mut self, p: Point) {
        let Some(drag) = self.drag else {
            self.hover = self.hit(p);
            return;
        };
        self.hover = None;
        let sw = self.screen.width;
        let sh = self.screen.height;
        let Some(zone) = self.zones.get_mut(drag.target.index) else {
            return;
        };
        match drag.target.part {
            ZonePart::LeftEdge => {
                zone.x_start = clamp(p.x, 0, zone.x_end - EDITOR_MIN_ZONE_WIDTH);
            }
            ZonePart::RightEdge => {
                zone.x_end = p.x.max(zone.x_start + EDITOR_MIN_ZONE_WIDTH).min(sw);
            }
            ZonePart::Body => {
                let width = zone.width();
                let x = clamp(p.x - drag.grab.0, 0, sw - width);
                let y = clamp(p.y - drag.grab.1, 0, sh - zone.height);
                zone.x_start = x;
                zone.x_end = x + width;
                zone.y = y;
            }
        }
    }

    /// Append the stock zone centered on the screen.
    pub fn add_zone(&mut self) {
        let mid = self.screen.width / 2;
        self.zones.push(Zone::new(
            mid - EDITOR_NEW_ZONE_HALF_WIDTH,
            mid + EDITOR_NEW_ZONE_HALF_WIDTH,
            self.screen.height / 2 - DEFAULT_ZONE_HEIGHT / 2,
            DEFAULT_ZONE_HEIGHT,
        ));
    }

    fn hit(&self, p: Point) -> Option<Target> {
        self.zones.iter().enumerate().find_map(|(index, zone)| {
            part_at(&ZoneHandles::of(zone), p).map(|part| Target { index, part })
        })
    }
}

enum Press {
    Delete(usize),
    Grab(Target),
}

/// Edge handles win over the body they overlap.
fn part_at(handles: &ZoneHandles, p: Point) -> Option<ZonePart> {
    if handles.left.contains(p) {
        Some(ZonePart::LeftEdge)
    } else if handles.right.contains(p) {
        Some(ZonePart::RightEdge)
    } else if handles.body.contains(p) {
        Some(ZonePart::Body)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SCREEN: Size = Size::new(1920, 1080);

    fn editor(zones: &[Zone]) -> ZoneEditor {
        ZoneEditor::open(zones, SCREEN)
    }

    #[test]
    fn open_drops_off_screen_zones() {
        let e = editor(&[
            Zone::new(-10, 300, 100, 60),
            Zone::new(100, 400, 100, 60),
            Zone::new(1800, 2000, 100, 60),
        ]);
        assert_eq!(e.zones(), &[Zone::new(100, 400, 100, 60)]);
    }

    #[test]
    fn open_with_nothing_valid_uses_fallback() {
        let e = editor(&[Zone::new(400, 100, 100, 60)]);
        assert_eq!(e.zones(), &[Zone::new(100, 600, 900, 60)]);
    }

    #[test]
    fn hover_tracks_parts() {
        let mut e = editor(&[Zone::new(100, 500, 300, 60)]);
        e.pointer_move(Point::new(95, 310));
        assert_eq!(e.hover(), Some(Target { index: 0, part: ZonePart::LeftEdge }));
        e.pointer_move(Point::new(300, 340));
        assert_eq!(e.hover(), Some(Target { index: 0, part: ZonePart::Body }));
        e.pointer_move(Point::new(800, 800));
        assert_eq!(e.hover(), None);
    }

    #[test]
    fn add_zone_appends_centered_zone() {
        let mut e = editor(&[Zone::new(100, 500, 300, 60)]);
        let add = e.layout().add_zone.center();
        assert!(e.pointer_down(add).is_none());
        assert_eq!(e.zones()[1], Zone::new(760, 1160, 510, 60));
    }

    #[test]
    fn right_edge_drag_stops_at_screen() {
        let mut e = editor(&[Zone::new(100, 500, 300, 60)]);
        e.pointer_down(Point::new(495, 320));
        e.pointer_move(Point::new(2500, 320));
        assert_eq!(e.zones()[0].x_end, 1920);
    }
}
