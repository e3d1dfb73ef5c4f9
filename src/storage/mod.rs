//! Shared settings persistence and change detection.

pub mod config;
pub mod document;
pub mod watcher;

pub use config::{resolve_path, SettingsMarker, SharedZoneStore};
pub use document::{SettingsDocument, ZoneRecord};
pub use watcher::{ConfigWatcher, MarkerCheck, PollingWatcher};
