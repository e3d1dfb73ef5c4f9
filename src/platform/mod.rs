//! Native window, editor and file-watch implementations.
//!
//! Everything outside this module is platform neutral and runs headless
//! in tests; only the binary reaches in here.

#[cfg(target_os = "windows")]
pub mod windows;
