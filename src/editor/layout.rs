//! Hit-test geometry of the zone editor.

use crate::model::{
    Rect, Size, Zone, EDITOR_DELETE_INSET, EDITOR_DELETE_SIZE, EDITOR_HANDLE_WIDTH,
};

/// Toolbar buttons along the top of the editor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorButton {
    Save,
    Cancel,
    AddZone,
    AddPet,
}

impl EditorButton {
    pub const ALL: [EditorButton; 4] = [
        EditorButton::Save,
        EditorButton::Cancel,
        EditorButton::AddZone,
        EditorButton::AddPet,
    ];

    pub fn label(self) -> &'static str {
        match self {
            EditorButton::Save => "SAVE",
            EditorButton::Cancel => "CANCEL",
            EditorButton::AddZone => "+ Add Zone",
            EditorButton::AddPet => "+ Add Another Pet",
        }
    }
}

/// Button rectangles for a given screen, centered horizontally.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EditorLayout {
    pub save: Rect,
    pub cancel: Rect,
    pub add_zone: Rect,
    pub add_pet: Rect,
}

impl EditorLayout {
    pub fn new(screen: Size) -> Self {
        let mid = screen.width / 2;
        Self {
            save: Rect::new(mid - 180, 100, 100, 40),
            cancel: Rect::new(mid + 80, 100, 100, 40),
            add_zone: Rect::new(mid - 60, 150, 120, 35),
            add_pet: Rect::new(mid - 100, 200, 200, 45),
        }
    }

    pub fn rect(&self, button: EditorButton) -> Rect {
        match button {
            EditorButton::Save => self.save,
            EditorButton::Cancel => self.cancel,
            EditorButton::AddZone => self.add_zone,
            EditorButton::AddPet => self.add_pet,
        }
    }

    pub fn button_at(&self, p: crate::model::Point) -> Option<EditorButton> {
        EditorButton::ALL
            .into_iter()
            .find(|&b| self.rect(b).contains(p))
    }
}

/// Interactive parts of one zone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ZoneHandles {
    pub left: Rect,
    pub right: Rect,
    pub delete: Rect,
    pub body: Rect,
}

impl ZoneHandles {
    /// Edge handles are centered on `x_start`/`x_end`; the delete button
    /// sits at the top center.
    pub fn of(zone: &Zone) -> Self {
        let half = EDITOR_HANDLE_WIDTH / 2;
        Self {
            left: Rect::new(zone.x_start - half, zone.y, EDITOR_HANDLE_WIDTH, zone.height),
            right: Rect::new(zone.x_end - half, zone.y, EDITOR_HANDLE_WIDTH, zone.height),
            delete: Rect::new(
                zone.x_start + zone.width() / 2 - EDITOR_DELETE_SIZE / 2,
                zone.y + EDITOR_DELETE_INSET,
                EDITOR_DELETE_SIZE,
                EDITOR_DELETE_SIZE,
            ),
            body: zone.rect(),
        }
    }
}
