//! Per-behavior frame sequences.
//!
//! An [`AnimationSet`] is built once per process and shared by reference
//! (`Rc`) with the state machine and the renderer. It is immutable after
//! construction.

pub mod frame;
pub mod loader;

use std::path::Path;

use tracing::{info, warn};

pub use frame::Frame;
pub use loader::FrameLoader;

use crate::model::{Behavior, PET_HEIGHT, PET_WIDTH};

/// Immutable mapping from behavior to its ordered frames.
///
/// Every sequence holds at least one frame. Left-facing copies of the
/// sequences that mirror with direction are built once, at construction.
#[derive(Debug, Clone)]
pub struct AnimationSet {
    sequences: Vec<Vec<Frame>>,
    mirrored: Vec<Vec<Frame>>,
}

impl AnimationSet {
    /// Load every sequence from `assets_dir`, substituting placeholders
    /// for anything missing.
    pub fn load(assets_dir: &Path) -> Self {
        let mut loader = FrameLoader::new(assets_dir, PET_WIDTH as u32, PET_HEIGHT as u32);
        let set = Self::build(|behavior| match behavior {
            Behavior::Idle => loader.idle(),
            Behavior::Walk => loader.walk(),
            Behavior::Sit => loader.sit(),
            Behavior::Backflip => loader.backflip(),
            Behavior::Poop => loader.poop(),
            Behavior::PortalOut => loader.portal_out(),
            Behavior::PortalIn => loader.portal_in(),
        });
        if loader.substituted() > 0 {
            warn!(
                assets = %assets_dir.display(),
                placeholders = loader.substituted(),
                "animation set loaded with placeholders"
            );
        } else {
            info!(assets = %assets_dir.display(), "animation set loaded");
        }
        set
    }

    /// Build from a per-behavior constructor. Empty sequences get one
    /// transparent frame.
    pub fn build(mut sequence: impl FnMut(Behavior) -> Vec<Frame>) -> Self {
        let sequences = Behavior::ALL
            .iter()
            .map(|&b| {
                let frames = sequence(b);
                if frames.is_empty() {
                    vec![Frame::blank(PET_WIDTH as u32, PET_HEIGHT as u32)]
                } else {
                    frames
                }
            })
            .collect::<Vec<_>>();
        let mirrored = Behavior::ALL
            .iter()
            .zip(&sequences)
            .map(|(b, frames)| {
                if b.mirrors_with_direction() {
                    frames.iter().map(Frame::mirrored).collect()
                } else {
                    Vec::new()
                }
            })
            .collect();
        Self {
            sequences,
            mirrored,
        }
    }

    /// Transparent frames with the stock sequence lengths; used when no
    /// asset directory is available and in tests.
    pub fn placeholder() -> Self {
        Self::with_lengths(|b| match b {
            Behavior::Idle => 1,
            Behavior::Walk => 7,
            Behavior::Sit => 8,
            Behavior::Backflip => loader::BACKFLIP_FRAMES,
            Behavior::Poop => 6,
            Behavior::PortalOut => loader::PORTAL_OUT_FRAMES as usize,
            Behavior::PortalIn => loader::PORTAL_IN_FRAMES as usize,
        })
    }

    /// Transparent frames with caller-chosen sequence lengths.
    pub fn with_lengths(mut len: impl FnMut(Behavior) -> usize) -> Self {
        let blank = Frame::blank(PET_WIDTH as u32, PET_HEIGHT as u32);
        Self::build(|b| vec![blank.clone(); len(b)])
    }

    /// Number of frames in `behavior`'s sequence.
    pub fn len(&self, behavior: Behavior) -> usize {
        self.sequences[behavior.index()].len()
    }

    /// Frame `index` of `behavior`, wrapping past the end.
    pub fn frame(&self, behavior: Behavior, index: usize) -> &Frame {
        let frames = &self.sequences[behavior.index()];
        &frames[index % frames.len()]
    }

    /// Like [`frame`](Self::frame), but the pre-mirrored copy when `left`
    /// and the behavior mirrors with direction.
    pub fn frame_facing(&self, behavior: Behavior, index: usize, left: bool) -> &Frame {
        let mirrored = &self.mirrored[behavior.index()];
        if left && !mirrored.is_empty() {
            &mirrored[index % mirrored.len()]
        } else {
            self.frame(behavior, index)
        }
    }
}
