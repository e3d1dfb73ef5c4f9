//! Schnauzer: one desktop pet per process.
//!
//! `schnauzer [x y]` starts a pet at the given screen position, or just
//! inside the first zone when no position is given.

#![cfg_attr(all(target_os = "windows", not(debug_assertions)), windows_subsystem = "windows")]

use std::rc::Rc;

use tracing::info;
use tracing_subscriber::EnvFilter;

use schnauzer::animation::AnimationSet;
use schnauzer::app::{AppConfig, PetApp};
use schnauzer::storage::SharedZoneStore;

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

#[cfg(target_os = "windows")]
fn main() {
    use schnauzer::platform::windows::{
        best_watcher, enable_dpi_awareness, primary_screen, GdiEditor, Win32Window,
    };

    init_logging();
    enable_dpi_awareness();

    let cfg = AppConfig::from_env();
    info!(settings = %cfg.settings_path.display(), "starting");

    let store = SharedZoneStore::new(cfg.settings_path, primary_screen());
    let watcher = best_watcher(&store);
    let animations = Rc::new(AnimationSet::load(&cfg.assets_dir));

    PetApp::new(Win32Window::new(), store, animations, cfg.start)
        .with_boxed_watcher(watcher)
        .with_editor(GdiEditor)
        .run();
}

/// No native window here; the pet runs headless until interrupted.
#[cfg(not(target_os = "windows"))]
fn main() {
    use schnauzer::model::{Size, FALLBACK_SCREEN};
    use schnauzer::window::HeadlessWindow;

    init_logging();

    let cfg = AppConfig::from_env();
    info!(settings = %cfg.settings_path.display(), "starting headless");

    let screen = Size::new(FALLBACK_SCREEN.0, FALLBACK_SCREEN.1);
    let store = SharedZoneStore::new(cfg.settings_path, screen);
    let animations = Rc::new(AnimationSet::load(&cfg.assets_dir));

    PetApp::new(HeadlessWindow::new(screen), store, animations, cfg.start).run();
}
