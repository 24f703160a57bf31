//! Configuration management module.

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

/// Configuration load result.
#[derive(Debug)]
pub enum ConfigLoadResult {
    /// Config loaded successfully.
    Loaded(AppConfig),
    /// Config file missing (first run).
    Missing,
    /// Config file exists but invalid.
    Invalid(ConfigError),
}

/// Configuration errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Read(#[from] std::io::Error),

    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("Validation failed: {0}")]
    Validation(String),
}

/// Main application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub checkin: CheckinConfig,
    pub camera: CameraConfig,
    pub session: SessionConfig,
    pub ui: UiConfig,
    pub logging: LoggingConfig,
}

/// Check-in simulator timing.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CheckinConfig {
    /// How long a scan runs before the verifier is consulted (default: 3000).
    pub scan_duration_ms: u64,
    /// Upper bound on a single verifier call (default: 5000).
    pub verify_timeout_ms: u64,
}

/// Simulated camera behaviour.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    /// Answer the simulated permission prompt with "granted".
    pub permission_granted: bool,
    /// Delay before the permission answer arrives.
    pub permission_delay_ms: u64,
}

/// Mock login settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Name used when the login form leaves it blank.
    pub default_name: String,
}

/// Window preferences.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    pub window_width: f32,
    pub window_height: f32,
}

/// Log output settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Default filter directive when `RUST_LOG` is unset.
    pub level: Option<String>,
    /// Directory for rolling log files. Defaults to the platform data dir.
    pub directory: Option<PathBuf>,
}

const MIN_SCAN_DURATION_MS: u64 = 500;
const MAX_SCAN_DURATION_MS: u64 = 60_000;
const MIN_WINDOW_SIZE: f32 = 320.0;

fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("edu", "Campus", "CampusAttendance")
}

fn exe_dir() -> PathBuf {
    std::env::current_exe()
        .ok()
        .and_then(|p| p.parent().map(|p| p.to_path_buf()))
        .unwrap_or_else(|| PathBuf::from("."))
}

impl AppConfig {
    /// Get config file path (platform config dir, else next to the executable).
    pub fn default_path() -> PathBuf {
        project_dirs()
            .map(|dirs| dirs.config_dir().to_path_buf())
            .unwrap_or_else(exe_dir)
            .join("config.toml")
    }

    /// Attempt to load config with detailed result.
    pub fn try_load(path: &Path) -> ConfigLoadResult {
        if !path.exists() {
            return ConfigLoadResult::Missing;
        }

        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str::<AppConfig>(&content) {
                Ok(config) => match config.validate() {
                    Ok(()) => ConfigLoadResult::Loaded(config),
                    Err(e) => ConfigLoadResult::Invalid(e),
                },
                Err(e) => ConfigLoadResult::Invalid(ConfigError::Parse(e)),
            },
            Err(e) => ConfigLoadResult::Invalid(ConfigError::Read(e)),
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.checkin.scan_duration_ms < MIN_SCAN_DURATION_MS {
            return Err(ConfigError::Validation(format!(
                "Scan duration must be at least {MIN_SCAN_DURATION_MS} ms"
            )));
        }
        if self.checkin.scan_duration_ms > MAX_SCAN_DURATION_MS {
            return Err(ConfigError::Validation(format!(
                "Scan duration cannot exceed {MAX_SCAN_DURATION_MS} ms"
            )));
        }
        if self.checkin.verify_timeout_ms < 100 {
            return Err(ConfigError::Validation(
                "Verify timeout must be at least 100 ms".to_string(),
            ));
        }
        if self.session.default_name.trim().is_empty() {
            return Err(ConfigError::Validation("Default name cannot be empty".to_string()));
        }
        if self.ui.window_width < MIN_WINDOW_SIZE || self.ui.window_height < MIN_WINDOW_SIZE {
            return Err(ConfigError::Validation(format!(
                "Window size must be at least {MIN_WINDOW_SIZE}x{MIN_WINDOW_SIZE}"
            )));
        }
        Ok(())
    }

    /// Save configuration to file.
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}

impl CheckinConfig {
    pub fn scan_duration(&self) -> Duration {
        Duration::from_millis(self.scan_duration_ms)
    }

    pub fn verify_timeout(&self) -> Duration {
        Duration::from_millis(self.verify_timeout_ms)
    }
}

impl CameraConfig {
    pub fn permission_delay(&self) -> Duration {
        Duration::from_millis(self.permission_delay_ms)
    }
}

impl LoggingConfig {
    /// Resolve the log directory.
    pub fn log_dir(&self) -> PathBuf {
        self.directory.clone().unwrap_or_else(|| {
            project_dirs()
                .map(|dirs| dirs.data_local_dir().join("logs"))
                .unwrap_or_else(|| exe_dir().join("logs"))
        })
    }

    /// Filter directive, `info` unless configured.
    pub fn level(&self) -> &str {
        self.level.as_deref().unwrap_or("info")
    }
}

impl Default for CheckinConfig {
    fn default() -> Self {
        Self {
            scan_duration_ms: 3000,
            verify_timeout_ms: 5000,
        }
    }
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            permission_granted: true,
            permission_delay_ms: 300,
        }
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            default_name: "John Doe".to_string(),
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            window_width: 420.0,
            window_height: 860.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_validates() {
        let config = AppConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.checkin.scan_duration(), Duration::from_millis(3000));
    }

    #[test]
    fn test_validation_scan_duration_bounds() {
        let mut config = AppConfig::default();

        config.checkin.scan_duration_ms = 100;
        assert!(config.validate().is_err());

        config.checkin.scan_duration_ms = 120_000;
        assert!(config.validate().is_err());

        config.checkin.scan_duration_ms = 3000;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validation_empty_default_name() {
        let mut config = AppConfig::default();
        config.session.default_name = "   ".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_window_too_small() {
        let mut config = AppConfig::default();
        config.ui.window_width = 100.0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let config: AppConfig = toml::from_str("[checkin]\nscan_duration_ms = 1500\n").unwrap();
        assert_eq!(config.checkin.scan_duration_ms, 1500);
        assert_eq!(config.checkin.verify_timeout_ms, 5000);
        assert!(config.camera.permission_granted);
        assert_eq!(config.session.default_name, "John Doe");
    }

    #[test]
    fn test_try_load_missing() {
        let dir = tempfile::tempdir().unwrap();
        let result = AppConfig::try_load(&dir.path().join("config.toml"));
        assert!(matches!(result, ConfigLoadResult::Missing));
    }

    #[test]
    fn test_save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let mut config = AppConfig::default();
        config.camera.permission_granted = false;
        config.save(&path).unwrap();

        match AppConfig::try_load(&path) {
            ConfigLoadResult::Loaded(loaded) => assert!(!loaded.camera.permission_granted),
            other => panic!("expected Loaded, got {other:?}"),
        }
    }

    #[test]
    fn test_try_load_invalid_values() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[checkin]\nscan_duration_ms = 1\n").unwrap();
        assert!(matches!(
            AppConfig::try_load(&path),
            ConfigLoadResult::Invalid(ConfigError::Validation(_))
        ));
    }

    #[test]
    fn test_try_load_bad_toml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "this is = = not toml").unwrap();
        assert!(matches!(
            AppConfig::try_load(&path),
            ConfigLoadResult::Invalid(ConfigError::Parse(_))
        ));
    }
}
