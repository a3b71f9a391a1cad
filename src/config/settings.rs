use crate::domain::{Hms, DEFAULT_SUPPRESSED_APPS};
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use tracing::{info, warn};

const MIN_TICK_MS: u64 = 100;
const MAX_TICK_MS: u64 = 10_000;

/// Duration pre-filled on the setup screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DurationSetting {
    #[serde(default)]
    pub hours: u32,
    #[serde(default)]
    pub minutes: u32,
    #[serde(default)]
    pub seconds: u32,
}

impl Default for DurationSetting {
    fn default() -> Self {
        Self {
            hours: 0,
            minutes: 25,
            seconds: 0,
        }
    }
}

impl DurationSetting {
    /// Clamp each field into its form range
    pub fn to_hms(self) -> Hms {
        Hms::new(self.hours.min(23), self.minutes.min(59), self.seconds.min(59))
    }
}

/// User settings stored in config.json
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Apps applied by the "use preset" action
    #[serde(default = "default_preset_apps")]
    pub preset_apps: Vec<String>,
    /// Session tick period in milliseconds
    #[serde(default = "default_tick_interval_ms")]
    pub tick_interval_ms: u64,
    #[serde(default)]
    pub default_duration: DurationSetting,
    /// Suppression events kept for the session screen
    #[serde(default = "default_max_event_log")]
    pub max_event_log: usize,
}

fn default_preset_apps() -> Vec<String> {
    DEFAULT_SUPPRESSED_APPS.iter().map(|s| s.to_string()).collect()
}

fn default_tick_interval_ms() -> u64 {
    crate::ticker::DEFAULT_TICK_MS
}

fn default_max_event_log() -> usize {
    50
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            preset_apps: default_preset_apps(),
            tick_interval_ms: default_tick_interval_ms(),
            default_duration: DurationSetting::default(),
            max_event_log: default_max_event_log(),
        }
    }
}

impl AppConfig {
    /// Tick period, clamped to a sane range
    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms.clamp(MIN_TICK_MS, MAX_TICK_MS))
    }
}

/// Load config.json. A missing file yields defaults; a corrupt one logs a warning and yields defaults.
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<AppConfig> {
    let path = path.as_ref();

    if !path.exists() {
        info!("Config file not found, using defaults");
        return Ok(AppConfig::default());
    }

    let content = std::fs::read_to_string(path)?;
    match serde_json::from_str(&content) {
        Ok(config) => {
            info!(path = %path.display(), "Config loaded");
            Ok(config)
        }
        Err(e) => {
            warn!("Failed to parse {}, using defaults: {}", path.display(), e);
            Ok(AppConfig::default())
        }
    }
}

/// Save config.json atomically
pub fn save_config<P: AsRef<Path>>(path: P, config: &AppConfig) -> Result<()> {
    let json = serde_json::to_string_pretty(config)?;
    super::atomic_write(path, &json)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::tempdir;

    #[test]
    fn test_load_nonexistent_config() {
        let temp_dir = tempdir().unwrap();
        let config = load_config(temp_dir.path().join("config.json")).unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.preset_apps, vec!["Steam", "Riot", "Discord", "Minecraft"]);
        assert_eq!(config.tick_interval(), Duration::from_secs(1));
    }

    #[test]
    fn test_save_and_load_config() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("config.json");

        let mut config = AppConfig::default();
        config.preset_apps = vec!["Slack".to_string()];
        config.default_duration = DurationSetting {
            hours: 1,
            minutes: 30,
            seconds: 0,
        };

        save_config(&path, &config).unwrap();
        let loaded = load_config(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_partial_config_fills_defaults() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("config.json");
        std::fs::write(&path, r#"{ "tick_interval_ms": 50 }"#).unwrap();

        let config = load_config(&path).unwrap();
        assert_eq!(config.preset_apps.len(), 4);
        assert_eq!(config.tick_interval(), Duration::from_millis(100));
        assert_eq!(config.default_duration.to_hms(), Hms::new(0, 25, 0));
    }

    #[test]
    fn test_corrupt_config_falls_back() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("config.json");
        std::fs::write(&path, "{ not json").unwrap();

        let config = load_config(&path).unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_duration_setting_clamps() {
        let setting = DurationSetting {
            hours: 40,
            minutes: 99,
            seconds: 5,
        };
        assert_eq!(setting.to_hms(), Hms::new(23, 59, 5));
    }
}
