//! Error types for the pet.
//!
//! Uses `thiserror` for the collaborator failures the core absorbs: asset
//! loads, settings I/O, window capabilities and process spawning. None of
//! them is fatal; callers log and fall back.

use std::path::PathBuf;

/// Errors surfaced by fallible collaborator operations.
#[derive(Debug, thiserror::Error)]
pub enum PetError {
    /// Reading or writing a file failed.
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The settings document is not valid JSON for our schema.
    #[error("settings parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// The settings document parsed but holds no usable zone.
    #[error("settings contain no valid zone")]
    NoZones,

    /// A frame image could not be decoded.
    #[error("image error on {path}: {source}")]
    Image {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    /// The platform refused a window operation.
    #[error("window error: {0}")]
    Window(String),

    /// A new pet process could not be launched.
    #[error("spawn error: {0}")]
    Spawn(#[source] std::io::Error),
}

impl PetError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        PetError::Io {
            path: path.into(),
            source,
        }
    }

    /// True when the error is a plain "file does not exist".
    pub fn is_not_found(&self) -> bool {
        matches!(self, PetError::Io { source, .. } if source.kind() == std::io::ErrorKind::NotFound)
    }
}

pub type Result<T> = std::result::Result<T, PetError>;
