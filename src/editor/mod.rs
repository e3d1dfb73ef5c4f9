//! Interactive zone authoring.
//!
//! [`ZoneEditor`] holds the editing state and reacts to [`EditorInput`];
//! an [`EditorSurface`] owns whatever window shows it and feeds it input
//! until an [`EditorOutcome`] is reached.

pub mod layout;
pub mod model;

pub use layout::{EditorButton, EditorLayout, ZoneHandles};
pub use model::{Target, ZoneEditor, ZonePart};

use crate::model::{Point, Zone};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorKey {
    Escape,
    Enter,
}

/// Input delivered to the editor by its surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorInput {
    PointerDown(Point),
    PointerMove(Point),
    PointerUp,
    Key(EditorKey),
    /// The surface was closed by the window manager.
    Close,
}

/// How an editor session ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditorOutcome {
    /// Persist these zones.
    Save(Vec<Zone>),
    /// Close without saving and launch another pet.
    SpawnPet,
    /// Close without saving.
    Cancel,
}

/// Something that can present a [`ZoneEditor`] modally.
pub trait EditorSurface {
    fn run(&mut self, editor: ZoneEditor) -> EditorOutcome;
}

/// Replays a fixed list of inputs. With no native surface available the
/// empty script cancels immediately.
#[derive(Debug, Clone, Default)]
pub struct ScriptedEditor {
    inputs: Vec<EditorInput>,
}

impl ScriptedEditor {
    pub fn new(inputs: impl IntoIterator<Item = EditorInput>) -> Self {
        Self {
            inputs: inputs.into_iter().collect(),
        }
    }
}

impl EditorSurface for ScriptedEditor {
    fn run(&mut self, mut editor: ZoneEditor) -> EditorOutcome {
        for input in self.inputs.drain(..) {
            if let Some(outcome) = editor.handle(input) {
                return outcome;
            }
        }
        EditorOutcome::Cancel
    }
}
