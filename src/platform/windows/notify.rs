//! Settings change detection through directory change notifications.
//!
//! Instead of statting the file every couple of seconds, a change handle on
//! the settings directory is checked with a zero timeout each tick; only a
//! signaled handle triggers the marker comparison.

use std::os::windows::ffi::OsStrExt;

use tracing::{debug, warn};
use windows::core::PCWSTR;
use windows::Win32::Foundation::{HANDLE, WAIT_OBJECT_0};
use windows::Win32::Storage::FileSystem::{
    FindCloseChangeNotification, FindFirstChangeNotificationW, FindNextChangeNotification,
    FILE_NOTIFY_CHANGE_FILE_NAME, FILE_NOTIFY_CHANGE_LAST_WRITE, FILE_NOTIFY_CHANGE_SIZE,
};
use windows::Win32::System::Threading::WaitForSingleObject;

use crate::model::SharedSettings;
use crate::storage::{ConfigWatcher, MarkerCheck, PollingWatcher, SettingsMarker, SharedZoneStore};

pub struct NotifyWatcher {
    handle: HANDLE,
    check: MarkerCheck,
}

impl NotifyWatcher {
    /// Watch the directory holding the settings file. Returns `None` when
    /// the directory cannot be watched.
    pub fn new(store: &SharedZoneStore) -> Option<Self> {
        let dir = store.path().parent().filter(|p| !p.as_os_str().is_empty())?;
        if let Err(e) = std::fs::create_dir_all(dir) {
            debug!(error = %e, "settings directory unavailable");
            return None;
        }
        let wide: Vec<u16> = dir.as_os_str().encode_wide().chain(Some(0)).collect();
        let handle = unsafe {
            FindFirstChangeNotificationW(
                PCWSTR(wide.as_ptr()),
                false,
                FILE_NOTIFY_CHANGE_LAST_WRITE | FILE_NOTIFY_CHANGE_FILE_NAME | FILE_NOTIFY_CHANGE_SIZE,
            )
        };
        match handle {
            Ok(handle) => Some(Self {
                handle,
                check: MarkerCheck::new(store.marker()),
            }),
            Err(e) => {
                warn!(dir = %dir.display(), error = %e, "change notification unavailable");
                None
            }
        }
    }

    fn signaled(&self) -> bool {
        unsafe { WaitForSingleObject(self.handle, 0) == WAIT_OBJECT_0 }
    }
}

impl ConfigWatcher for NotifyWatcher {
    fn poll(&mut self, _dt: u32, store: &SharedZoneStore) -> Option<SharedSettings> {
        if !self.signaled() {
            return None;
        }
        unsafe {
            if let Err(e) = FindNextChangeNotification(self.handle) {
                debug!(error = %e, "failed to re-arm change notification");
            }
        }
        self.check.reload_if_changed(store)
    }

    fn acknowledge(&mut self, marker: SettingsMarker) {
        self.check.remember(marker);
    }
}

impl Drop for NotifyWatcher {
    fn drop(&mut self) {
        unsafe {
            let _ = FindCloseChangeNotification(self.handle);
        }
    }
}

/// Native watcher when possible, polling otherwise.
pub fn best_watcher(store: &SharedZoneStore) -> Box<dyn ConfigWatcher> {
    match NotifyWatcher::new(store) {
        Some(w) => Box::new(w),
        None => Box::new(PollingWatcher::new(store)),
    }
}
