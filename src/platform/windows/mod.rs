//! Win32 implementations of the window, editor and watcher seams.

pub mod editor;
pub mod notify;
pub mod window;

pub use editor::GdiEditor;
pub use notify::{best_watcher, NotifyWatcher};
pub use window::{enable_dpi_awareness, primary_screen, Win32Window};
