//! Runtime configuration of one pet process.

use std::path::PathBuf;

use crate::model::{Point, ENV_ASSETS_DIR};
use crate::parse_position;
use crate::storage::config::resolve_path;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Directory holding the `processed_*.png` frames.
    pub assets_dir: PathBuf,
    pub settings_path: PathBuf,
    /// Start position from the command line, if both coordinates parsed.
    pub start: Option<Point>,
}

impl AppConfig {
    /// Configuration from the real process environment and arguments.
    pub fn from_env() -> Self {
        let args: Vec<String> = std::env::args().skip(1).collect();
        Self::resolve(&args, |key| std::env::var(key).ok(), std::env::current_exe().ok())
    }

    /// `args` excludes the program name.
    pub fn resolve(
        args: &[String],
        var: impl Fn(&str) -> Option<String>,
        exe: Option<PathBuf>,
    ) -> Self {
        let assets_dir = var(ENV_ASSETS_DIR)
            .filter(|v| !v.is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(|| {
                exe.as_deref()
                    .and_then(|p| p.parent())
                    .map(|dir| dir.join("assets"))
                    .unwrap_or_else(|| PathBuf::from("assets"))
            });
        Self {
            assets_dir,
            settings_path: resolve_path(&var),
            start: parse_position(args),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn no_env(_: &str) -> Option<String> {
        None
    }

    #[test]
    fn assets_default_next_to_executable() {
        let cfg = AppConfig::resolve(&[], no_env, Some(PathBuf::from("/opt/pet/schnauzer")));
        assert_eq!(cfg.assets_dir, PathBuf::from("/opt/pet/assets"));
        assert_eq!(cfg.start, None);
    }

    #[test]
    fn env_overrides_assets_and_settings() {
        let env = |key: &str| match key {
            "SCHNAUZER_ASSETS" => Some("/data/sprites".to_string()),
            "SCHNAUZER_SETTINGS" => Some("/data/s.json".to_string()),
            _ => None,
        };
        let cfg = AppConfig::resolve(&[], env, None);
        assert_eq!(cfg.assets_dir, PathBuf::from("/data/sprites"));
        assert_eq!(cfg.settings_path, PathBuf::from("/data/s.json"));
    }

    #[test]
    fn start_position_from_args() {
        let args = vec!["300".to_string(), "840".to_string()];
        let cfg = AppConfig::resolve(&args, no_env, None);
        assert_eq!(cfg.start, Some(Point::new(300, 840)));
    }
}
