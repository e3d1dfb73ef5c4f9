//! Configuration constants and default values.
//!
//! This module contains all pet constants: entity geometry, behavior
//! timing, transition probabilities, zone defaults and editor limits.
//! All durations are in milliseconds.

// === Entity ===

/// Pet window width in pixels.
pub const PET_WIDTH: i32 = 120;

/// Pet window height in pixels.
pub const PET_HEIGHT: i32 = 120;

/// Height reserved for the taskbar when computing the ground line.
pub const TASKBAR_HEIGHT: i32 = 60;

/// Horizontal distance covered per tick while walking.
pub const WALK_SPEED: i32 = 2;

// === Loop ===

/// Fixed tick rate of the cooperative loop.
pub const TICK_RATE_HZ: u32 = 60;

/// Cadence of the shared settings marker check.
pub const ZONE_POLL_INTERVAL_MS: u32 = 2000;

// === Frame intervals ===

/// Frame interval for idle, sit, poop and any unlisted behavior.
pub const FRAME_MS_DEFAULT: u32 = 150;

/// Frame interval while walking.
pub const FRAME_MS_WALK: u32 = 100;

/// Frame interval of the backflip trick.
pub const FRAME_MS_BACKFLIP: u32 = 50;

/// Frame interval of the portal exit phase.
pub const FRAME_MS_PORTAL_OUT: u32 = 50;

/// Frame interval of the portal arrival phase.
pub const FRAME_MS_PORTAL_IN: u32 = 100;

// === Stochastic transitions ===

/// Idle dwell time before random transitions are considered.
pub const IDLE_DWELL_MS: u32 = 2000;

/// Walk dwell time before the pet may stop.
pub const WALK_DWELL_MS: u32 = 1500;

/// Draws below this start a walk.
pub const WALK_CHANCE: f64 = 0.02;

/// Draws in `[WALK_CHANCE, TELEPORT_CEILING)` start a teleport.
pub const TELEPORT_CEILING: f64 = 0.03;

/// Per-tick chance of a walking pet stopping once past its dwell.
pub const STOP_WALK_CHANCE: f64 = 0.01;

// === Poop markers ===

/// Lifetime of a poop marker.
pub const POOP_TTL_MS: i32 = 5000;

/// Marker offset from the pet's top-left corner.
pub const POOP_OFFSET: (i32, i32) = (40, 52);

// === Placement ===

/// Margin kept from zone edges when picking a landing spot.
pub const PLACEMENT_MARGIN: i32 = 50;

/// Free span a zone needs before margins are applied.
pub const PLACEMENT_MIN_SPAN: i32 = 100;

/// Offset from the first zone's left edge used when no start position is
/// given on the command line.
pub const START_OFFSET_X: i32 = 50;

// === Zone defaults ===

/// Height of zones created without an explicit height.
pub const DEFAULT_ZONE_HEIGHT: i32 = 60;

/// Inset of the default zones from the screen edges.
pub const DEFAULT_ZONE_INSET: i32 = 50;

/// Outer extent of the default zones measured from their screen edge.
pub const DEFAULT_ZONE_REACH: i32 = 500;

/// Left edge of the fallback zone used by the editor.
pub const FALLBACK_ZONE_START: i32 = 100;

/// Right edge of the fallback zone used by the editor.
pub const FALLBACK_ZONE_END: i32 = 600;

/// Screen size assumed when no display can be queried.
pub const FALLBACK_SCREEN: (i32, i32) = (1920, 1080);

// === Editor ===

/// Width of the drag handles centered on each zone edge.
pub const EDITOR_HANDLE_WIDTH: i32 = 20;

/// Narrowest zone the editor allows.
pub const EDITOR_MIN_ZONE_WIDTH: i32 = 50;

/// Half the width of a zone added from the editor.
pub const EDITOR_NEW_ZONE_HALF_WIDTH: i32 = 200;

/// Side of the square delete button.
pub const EDITOR_DELETE_SIZE: i32 = 20;

/// Inset of the delete button from the zone's top edge.
pub const EDITOR_DELETE_INSET: i32 = 5;

/// Editor overlay opacity (0..255).
pub const EDITOR_ALPHA: u8 = 180;

// === Settings ===

/// File name of the shared settings document.
pub const SETTINGS_FILE_NAME: &str = "schnauzer_settings.json";

/// Directory name under the per-user config root.
pub const SETTINGS_DIR_NAME: &str = "Schnauzer";

/// Environment override for the settings path.
pub const ENV_SETTINGS_PATH: &str = "SCHNAUZER_SETTINGS";

/// Environment override for the assets directory.
pub const ENV_ASSETS_DIR: &str = "SCHNAUZER_ASSETS";
