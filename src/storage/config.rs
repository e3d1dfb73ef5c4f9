//! File-backed shared settings.
//!
//! Stores settings in `%APPDATA%/Schnauzer/schnauzer_settings.json` by
//! default. Every pet process reads and writes the same file; the last
//! writer wins. Writes go through a sibling temp file and a rename so a
//! concurrent reader never sees half a document.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

use tracing::{debug, info, warn};

use super::document::SettingsDocument;
use crate::error::{PetError, Result};
use crate::model::constants::*;
use crate::model::{SharedSettings, Size, Zone};

/// Cheap change detector for the settings file: mtime plus length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingsMarker {
    Missing,
    Present {
        modified: Option<SystemTime>,
        len: u64,
    },
}

impl SettingsMarker {
    pub fn of(path: &Path) -> Self {
        match fs::metadata(path) {
            Ok(meta) => SettingsMarker::Present {
                modified: meta.modified().ok(),
                len: meta.len(),
            },
            Err(_) => SettingsMarker::Missing,
        }
    }
}

/// The shared settings file as seen by one pet instance.
#[derive(Debug, Clone)]
pub struct SharedZoneStore {
    path: PathBuf,
    screen: Size,
}

impl SharedZoneStore {
    /// `screen` resolves legacy zones and sizes the defaults.
    pub fn new(path: impl Into<PathBuf>, screen: Size) -> Self {
        Self {
            path: path.into(),
            screen,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn screen(&self) -> Size {
        self.screen
    }

    pub fn marker(&self) -> SettingsMarker {
        SettingsMarker::of(&self.path)
    }

    pub fn defaults(&self) -> SharedSettings {
        SharedSettings::defaults(self.screen)
    }

    fn read_document(&self) -> Result<SettingsDocument> {
        let text = fs::read_to_string(&self.path).map_err(|e| PetError::io(&self.path, e))?;
        SettingsDocument::parse(&text)
    }

    /// Read and validate the file.
    pub fn try_load(&self) -> Result<SharedSettings> {
        self.read_document()?.to_settings(self.screen)
    }

    /// Read the file, falling back to defaults on any failure.
    pub fn load(&self) -> SharedSettings {
        match self.try_load() {
            Ok(settings) => {
                debug!(path = %self.path.display(), zones = settings.zones.len(), "settings loaded");
                settings
            }
            Err(e) if e.is_not_found() => {
                info!(path = %self.path.display(), "no settings file, using defaults");
                self.defaults()
            }
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "settings unreadable, using defaults");
                self.defaults()
            }
        }
    }

    /// Write the whole settings object.
    pub fn save(&self, settings: &SharedSettings) -> Result<()> {
        let mut doc = self.read_document().unwrap_or_default();
        doc.apply(settings);
        self.write_document(&doc)
    }

    /// Replace only the zone list, keeping every other key of the file.
    pub fn save_zones(&self, zones: &[Zone]) -> Result<()> {
        let mut doc = self.read_document().unwrap_or_default();
        doc.set_zones(zones);
        if doc.stay_on_top.is_none() {
            doc.stay_on_top = Some(true);
        }
        self.write_document(&doc)
    }

    fn write_document(&self, doc: &SettingsDocument) -> Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| PetError::io(parent, e))?;
        }
        let json = doc.to_json()?;
        let tmp = temp_sibling(&self.path);
        fs::write(&tmp, json).map_err(|e| PetError::io(&tmp, e))?;
        fs::rename(&tmp, &self.path).map_err(|e| PetError::io(&self.path, e))?;
        info!(path = %self.path.display(), zones = doc.zones.len(), "settings saved");
        Ok(())
    }
}

fn temp_sibling(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_else(|| SETTINGS_FILE_NAME.into());
    name.push(format!(".{}.tmp", std::process::id()));
    path.with_file_name(name)
}

/// Settings path resolution: explicit override, then `%APPDATA%`, then
/// `$HOME/.config`, then the working directory.
pub fn resolve_path(var: impl Fn(&str) -> Option<String>) -> PathBuf {
    let set = |key: &str| var(key).filter(|v| !v.is_empty());
    if let Some(explicit) = set(ENV_SETTINGS_PATH) {
        return PathBuf::from(explicit);
    }
    if let Some(appdata) = set("APPDATA") {
        return PathBuf::from(appdata)
            .join(SETTINGS_DIR_NAME)
            .join(SETTINGS_FILE_NAME);
    }
    if let Some(home) = set("HOME") {
        return PathBuf::from(home)
            .join(".config")
            .join(SETTINGS_DIR_NAME)
            .join(SETTINGS_FILE_NAME);
    }
    PathBuf::from(SETTINGS_FILE_NAME)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SCREEN: Size = Size::new(1920, 1080);

    fn scratch(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("schnauzer-config-{}-{}", name, std::process::id()));
        let _ = fs::remove_dir_all(&dir);
        dir.join(SETTINGS_FILE_NAME)
    }

    #[test]
    fn missing_file_loads_defaults() {
        let store = SharedZoneStore::new(scratch("missing"), SCREEN);
        assert_eq!(store.load(), SharedSettings::defaults(SCREEN));
        assert_eq!(store.marker(), SettingsMarker::Missing);
    }

    #[test]
    fn malformed_file_loads_defaults() {
        let path = scratch("malformed");
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, "{not json").unwrap();
        let store = SharedZoneStore::new(&path, SCREEN);
        assert!(store.try_load().is_err());
        assert_eq!(store.load(), SharedSettings::defaults(SCREEN));
    }

    #[test]
    fn save_creates_directory_and_round_trips() {
        let store = SharedZoneStore::new(scratch("roundtrip"), SCREEN);
        let settings = SharedSettings {
            zones: vec![Zone::new(0, 300, 100, 60), Zone::new(700, 1200, 500, 90)],
            stay_on_top: false,
        };
        store.save(&settings).unwrap();
        assert_eq!(store.try_load().unwrap(), settings);
        assert!(matches!(store.marker(), SettingsMarker::Present { .. }));
    }

    #[test]
    fn save_zones_keeps_stay_on_top() {
        let store = SharedZoneStore::new(scratch("zones-only"), SCREEN);
        store
            .save(&SharedSettings {
                zones: vec![Zone::new(0, 300, 100, 60)],
                stay_on_top: false,
            })
            .unwrap();
        store.save_zones(&[Zone::new(10, 400, 200, 60)]).unwrap();
        let loaded = store.try_load().unwrap();
        assert_eq!(loaded.zones, vec![Zone::new(10, 400, 200, 60)]);
        assert!(!loaded.stay_on_top);
    }

    fn env(pairs: &'static [(&'static str, &'static str)]) -> impl Fn(&str) -> Option<String> {
        move |key: &str| {
            pairs
                .iter()
                .find(|(k, _)| *k == key)
                .map(|(_, v)| v.to_string())
        }
    }

    #[test]
    fn path_resolution_order() {
        assert_eq!(
            resolve_path(env(&[("SCHNAUZER_SETTINGS", "/tmp/x.json"), ("APPDATA", "C:/a")])),
            PathBuf::from("/tmp/x.json")
        );
        assert_eq!(
            resolve_path(env(&[("APPDATA", "C:/a"), ("HOME", "/home/u")])),
            PathBuf::from("C:/a").join("Schnauzer").join(SETTINGS_FILE_NAME)
        );
        assert_eq!(
            resolve_path(env(&[("HOME", "/home/u")])),
            PathBuf::from("/home/u/.config/Schnauzer").join(SETTINGS_FILE_NAME)
        );
        assert_eq!(resolve_path(env(&[])), PathBuf::from(SETTINGS_FILE_NAME));
    }
}
