//! Detecting settings written by other pet instances.

use tracing::{info, warn};

use super::config::{SettingsMarker, SharedZoneStore};
use crate::model::{SharedSettings, ZONE_POLL_INTERVAL_MS};

/// Source of "the shared settings changed" notifications.
pub trait ConfigWatcher {
    /// Called once per tick. Returns freshly loaded settings when another
    /// writer changed the file since the last successful read.
    fn poll(&mut self, dt: u32, store: &SharedZoneStore) -> Option<SharedSettings>;

    /// Record a write made by this instance so it is not reported back.
    fn acknowledge(&mut self, marker: SettingsMarker);
}

/// Marker bookkeeping shared by the watcher implementations.
///
/// The remembered marker only advances after a successful parse, so a file
/// caught mid-edit is retried on the next check.
#[derive(Debug, Clone)]
pub struct MarkerCheck {
    seen: SettingsMarker,
}

impl MarkerCheck {
    pub fn new(seen: SettingsMarker) -> Self {
        Self { seen }
    }

    pub fn seen(&self) -> SettingsMarker {
        self.seen
    }

    pub fn remember(&mut self, marker: SettingsMarker) {
        self.seen = marker;
    }

    pub fn reload_if_changed(&mut self, store: &SharedZoneStore) -> Option<SharedSettings> {
        let current = store.marker();
        if current == self.seen || current == SettingsMarker::Missing {
            return None;
        }
        match store.try_load() {
            Ok(settings) => {
                self.seen = current;
                info!(zones = settings.zones.len(), "zones updated from settings file");
                Some(settings)
            }
            Err(e) => {
                warn!(path = %store.path().display(), error = %e, "settings changed but unreadable, will retry");
                None
            }
        }
    }
}

/// Checks the marker on a fixed cadence.
#[derive(Debug, Clone)]
pub struct PollingWatcher {
    interval_ms: u32,
    elapsed_ms: u32,
    check: MarkerCheck,
}

impl PollingWatcher {
    /// Start watching from the file's current state.
    pub fn new(store: &SharedZoneStore) -> Self {
        Self::with_interval(store, ZONE_POLL_INTERVAL_MS)
    }

    pub fn with_interval(store: &SharedZoneStore, interval_ms: u32) -> Self {
        Self {
            interval_ms,
            elapsed_ms: 0,
            check: MarkerCheck::new(store.marker()),
        }
    }
}

impl ConfigWatcher for PollingWatcher {
    fn poll(&mut self, dt: u32, store: &SharedZoneStore) -> Option<SharedSettings> {
        self.elapsed_ms = self.elapsed_ms.saturating_add(dt);
        if self.elapsed_ms < self.interval_ms {
            return None;
        }
        self.elapsed_ms = 0;
        self.check.reload_if_changed(store)
    }

    fn acknowledge(&mut self, marker: SettingsMarker) {
        self.check.remember(marker);
    }
}

#[cfg(test)]
mod tests {
    use std::fs;
    use std::path::PathBuf;

    use super::*;
    use crate::model::Size;

    fn scratch(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("schnauzer-watch-{}-{}", name, std::process::id()));
        let _ = fs::remove_dir_all(&dir);
        fs::create_dir_all(&dir).unwrap();
        dir.join("settings.json")
    }

    #[test]
    fn waits_for_the_interval() {
        let path = scratch("interval");
        fs::write(&path, r#"{"zones": [[0, 300, 100, 60]]}"#).unwrap();
        let store = SharedZoneStore::new(&path, Size::new(1920, 1080));
        let mut watcher = PollingWatcher::new(&store);

        fs::write(&path, r#"{"zones": [[0, 400, 100, 60]], "stay_on_top": true}"#).unwrap();
        assert!(watcher.poll(1999, &store).is_none());
        let settings = watcher.poll(1, &store).unwrap();
        assert_eq!(settings.zones[0].x_end, 400);
    }

    #[test]
    fn unchanged_file_is_not_reloaded() {
        let path = scratch("unchanged");
        fs::write(&path, r#"{"zones": [[0, 300, 100, 60]]}"#).unwrap();
        let store = SharedZoneStore::new(&path, Size::new(1920, 1080));
        let mut watcher = PollingWatcher::new(&store);
        assert!(watcher.poll(2000, &store).is_none());
        assert!(watcher.poll(2000, &store).is_none());
    }

    #[test]
    fn missing_file_is_not_a_change() {
        let path = scratch("missing");
        let store = SharedZoneStore::new(&path, Size::new(1920, 1080));
        let mut watcher = PollingWatcher::new(&store);
        assert!(watcher.poll(5000, &store).is_none());
    }

    #[test]
    fn malformed_write_is_retried() {
        let path = scratch("retry");
        fs::write(&path, r#"{"zones": [[0, 300, 100, 60]]}"#).unwrap();
        let store = SharedZoneStore::new(&path, Size::new(1920, 1080));
        let mut watcher = PollingWatcher::with_interval(&store, 10);
        let before = watcher.check.seen();

        fs::write(&path, r#"{"zones": [[0, 3"#).unwrap();
        assert!(watcher.poll(10, &store).is_none());
        assert_eq!(watcher.check.seen(), before);

        fs::write(&path, r#"{"zones": [[0, 500, 100, 60], [900, 1300, 100, 60]]}"#).unwrap();
        let settings = watcher.poll(10, &store).unwrap();
        assert_eq!(settings.zones.len(), 2);
    }

    #[test]
    fn acknowledged_write_is_not_reported() {
        let path = scratch("ack");
        let store = SharedZoneStore::new(&path, Size::new(1920, 1080));
        let mut watcher = PollingWatcher::with_interval(&store, 10);
        store.save_zones(&[crate::model::Zone::new(0, 300, 100, 60)]).unwrap();
        watcher.acknowledge(store.marker());
        assert!(watcher.poll(10, &store).is_none());
    }
}
