pub mod schema;
pub mod watcher;

pub use schema::{BatteryConfig, ClockConfig, DisplayConfig, SpacingConfig, StripConfig};
pub use watcher::watch;

use std::path::{Path, PathBuf};
use strip_core::{Result, StripError};

/// Load configuration from a TOML file.  Returns `StripConfig::default()`
/// if the file doesn't exist so the strip always has sensible defaults.
pub fn load(path: impl AsRef<Path>) -> Result<StripConfig> {
    let path = path.as_ref();
    if !path.exists() {
        tracing::warn!(
            "Config file not found at '{}'; using defaults.",
            path.display()
        );
        return Ok(StripConfig::default());
    }

    let raw = std::fs::read_to_string(path)
        .map_err(|e| StripError::Config(format!("cannot read '{}': {e}", path.display())))?;

    toml::from_str(&raw).map_err(|e| StripError::Config(format!("TOML parse error: {e}")))
}

/// Return the default config path, honouring `$XDG_CONFIG_HOME`.
pub fn default_path() -> PathBuf {
    let base = std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".config")
        });
    base.join("strip").join("strip.toml")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = load(dir.path().join("absent.toml")).unwrap();
        assert_eq!(config, StripConfig::default());
    }

    #[test]
    fn partial_file_keeps_defaults_elsewhere() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("strip.toml");
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(file, "[display]\nwidth = 180\n\n[clock]\ntwelve_hour = true").unwrap();

        let config = load(&path).unwrap();
        assert_eq!(config.display.width, 180);
        assert_eq!(config.display.strip_height, 20);
        assert_eq!(config.clock.twelve_hour, Some(true));
        assert_eq!(config.battery.tier_threshold, 30);
    }

    #[test]
    fn malformed_file_is_a_config_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("strip.toml");
        std::fs::write(&path, "display = 7").unwrap();

        let err = load(&path).unwrap_err();
        assert!(matches!(err, StripError::Config(_)));
    }
}
