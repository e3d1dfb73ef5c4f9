//! Frame loading from the assets directory.
//!
//! Missing or unreadable images are replaced with a transparent
//! placeholder of the pet's size and logged; a load never fails.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use super::frame::Frame;
use crate::error::{PetError, Result};

/// Number of generated backflip frames.
pub const BACKFLIP_FRAMES: usize = 12;

/// Highest point of the backflip hop, in pixels.
pub const BACKFLIP_HOP: f64 = 30.0;

/// Number of portal exit images (`portal out 1.png` ..).
pub const PORTAL_OUT_FRAMES: u32 = 13;

/// Number of portal arrival images (`portal_in_1.png` ..).
pub const PORTAL_IN_FRAMES: u32 = 3;

/// Portal exit frames that still show the pet under the portal.
const PORTAL_OUT_WITH_PET: u32 = 3;

/// Reads frames from one assets directory, each file at most once.
///
/// The cache lives only as long as the loader; [`super::AnimationSet::load`]
/// drops it once every sequence is built.
pub struct FrameLoader {
    dir: PathBuf,
    width: u32,
    height: u32,
    cache: HashMap<String, Frame>,
    substituted: usize,
}

impl FrameLoader {
    pub fn new(dir: impl Into<PathBuf>, width: u32, height: u32) -> Self {
        Self {
            dir: dir.into(),
            width,
            height,
            cache: HashMap::new(),
            substituted: 0,
        }
    }

    /// How many requested frames were replaced by placeholders.
    pub fn substituted(&self) -> usize {
        self.substituted
    }

    /// A processed sprite (`processed_<name>.png`), or a placeholder.
    pub fn sprite(&mut self, name: &str) -> Frame {
        if let Some(frame) = self.cache.get(name) {
            return frame.clone();
        }
        let path = self.dir.join(format!("processed_{name}.png"));
        let frame = match read_frame(&path, self.width, self.height) {
            Ok(frame) => frame,
            Err(e) => {
                warn!(frame = name, error = %e, "frame missing, using blank placeholder");
                self.substituted += 1;
                Frame::blank(self.width, self.height)
            }
        };
        self.cache.insert(name.to_string(), frame.clone());
        frame
    }

    /// An overlay image by exact file name, scaled to the pet size.
    ///
    /// Unlike [`FrameLoader::sprite`] there is no placeholder: overlay
    /// sequences skip images that are not there.
    pub fn overlay(&mut self, file_name: &str) -> Option<Frame> {
        match read_frame(&self.dir.join(file_name), self.width, self.height) {
            Ok(frame) => Some(frame),
            Err(e) => {
                warn!(file = file_name, error = %e, "overlay frame skipped");
                None
            }
        }
    }

    pub fn blank(&self) -> Frame {
        Frame::blank(self.width, self.height)
    }

    pub fn idle(&mut self) -> Vec<Frame> {
        vec![self.sprite("idle")]
    }

    pub fn walk(&mut self) -> Vec<Frame> {
        (1..=7).map(|i| self.sprite(&format!("walk_{i}"))).collect()
    }

    pub fn sit(&mut self) -> Vec<Frame> {
        let down = self.sprite("sit_1");
        let seated = self.sprite("sit_2");
        let mut frames = vec![down.clone()];
        frames.extend(std::iter::repeat(seated).take(6));
        frames.push(down);
        frames
    }

    pub fn poop(&mut self) -> Vec<Frame> {
        let squat = self.sprite("poop_2");
        vec![
            self.sprite("poop_1"),
            squat.clone(),
            squat.clone(),
            squat,
            self.sprite("poop_3"),
            self.sprite("poop_4"),
        ]
    }

    /// Idle sprite spun through a full turn with a hop.
    pub fn backflip(&mut self) -> Vec<Frame> {
        let base = self.sprite("idle");
        (0..BACKFLIP_FRAMES)
            .map(|i| {
                let angle = i as f64 / BACKFLIP_FRAMES as f64 * 360.0;
                let hop = -(angle.to_radians().sin().abs() * BACKFLIP_HOP);
                base.rotated(angle, hop as i32)
            })
            .collect()
    }

    pub fn portal_out(&mut self) -> Vec<Frame> {
        let pet = self.sprite("idle");
        let frames: Vec<Frame> = (1..=PORTAL_OUT_FRAMES)
            .filter_map(|i| {
                let portal = self.overlay(&format!("portal out {i}.png"))?;
                let mut composite = self.blank();
                if i <= PORTAL_OUT_WITH_PET {
                    composite.composite(&pet);
                }
                composite.composite(&portal);
                if i <= PORTAL_OUT_WITH_PET {
                    composite.composite(&pet);
                }
                Some(composite)
            })
            .collect();
        self.non_empty(frames)
    }

    pub fn portal_in(&mut self) -> Vec<Frame> {
        let pet = self.sprite("idle");
        let frames: Vec<Frame> = (1..=PORTAL_IN_FRAMES)
            .filter_map(|i| {
                let portal = self.overlay(&format!("portal_in_{i}.png"))?;
                let mut composite = self.blank();
                composite.composite(&pet);
                composite.composite(&portal);
                composite.composite(&pet);
                Some(composite)
            })
            .collect();
        self.non_empty(frames)
    }

    fn non_empty(&mut self, frames: Vec<Frame>) -> Vec<Frame> {
        if frames.is_empty() {
            self.substituted += 1;
            vec![self.blank()]
        } else {
            frames
        }
    }
}

fn read_frame(path: &Path, width: u32, height: u32) -> Result<Frame> {
    let img = image::open(path).map_err(|source| PetError::Image {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), "frame loaded");
    Ok(Frame::from_image(img.to_rgba8(), width, height))
}
