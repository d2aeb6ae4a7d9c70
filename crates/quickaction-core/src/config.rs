//! Configuration types.
//!
//! Every field has a default, so an absent or partial config file is valid.
//! The file lives at `<config_dir>/quickaction/config.toml`.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::error::ConfigError;

/// Engine configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EngineConfig {
    #[serde(default)]
    pub timing: TimingConfig,

    #[serde(default)]
    pub magnetic: MagneticConfig,
}

/// Lifecycle and entrance timings, in milliseconds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimingConfig {
    /// How long `Succeeded` is shown before returning to idle.
    pub success_reset_ms: u64,
    /// How long `Failed` is shown before returning to idle.
    pub error_reset_ms: u64,
    /// Entrance delay added per grid index.
    pub stagger_ms: u64,
    /// Entrance animation length.
    pub entrance_ms: u64,
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            success_reset_ms: 1500,
            error_reset_ms: 2000,
            stagger_ms: 100,
            entrance_ms: 400,
        }
    }
}

impl TimingConfig {
    pub fn success_reset(&self) -> Duration {
        Duration::from_millis(self.success_reset_ms)
    }

    pub fn error_reset(&self) -> Duration {
        Duration::from_millis(self.error_reset_ms)
    }

    pub fn stagger(&self) -> Duration {
        Duration::from_millis(self.stagger_ms)
    }

    pub fn entrance(&self) -> Duration {
        Duration::from_millis(self.entrance_ms)
    }
}

/// Magnetic hover tuning.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MagneticConfig {
    /// Fraction of the center-to-pointer vector applied as displacement.
    pub scale: f32,
    /// Optional per-axis clamp on the displacement magnitude.
    pub max_displacement: Option<f32>,
    /// Easing hint for the rendering layer.
    pub spring: SpringHint,
}

impl Default for MagneticConfig {
    fn default() -> Self {
        Self {
            scale: 0.1,
            max_displacement: None,
            spring: SpringHint::MAGNETIC,
        }
    }
}

/// Spring parameters passed through to whatever animates the displacement.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpringHint {
    pub stiffness: f32,
    pub damping: f32,
}

impl SpringHint {
    /// Used for the magnetic hover displacement.
    pub const MAGNETIC: SpringHint = SpringHint {
        stiffness: 400.0,
        damping: 30.0,
    };

    /// Used for the floating action button entrance.
    pub const FLOATING: SpringHint = SpringHint {
        stiffness: 400.0,
        damping: 17.0,
    };
}

impl EngineConfig {
    /// Parse a TOML document.
    pub fn from_toml(source: &str) -> Result<Self, ConfigError> {
        let config: EngineConfig =
            toml::from_str(source).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Load from a file. A missing file yields the defaults.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        match std::fs::read_to_string(path) {
            Ok(source) => Self::from_toml(&source),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(e) => Err(ConfigError::Io(e.to_string())),
        }
    }

    /// Load from the platform config directory.
    pub fn load() -> Result<Self, ConfigError> {
        let path = config_path().ok_or(ConfigError::NoConfigDir)?;
        Self::load_from(&path)
    }

    /// Reject values that parse but make no sense.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let scale = self.magnetic.scale;
        if !scale.is_finite() || scale < 0.0 {
            return Err(ConfigError::Invalid(format!(
                "magnetic.scale must be finite and non-negative, got {}",
                scale
            )));
        }
        if let Some(max) = self.magnetic.max_displacement {
            if !max.is_finite() || max <= 0.0 {
                return Err(ConfigError::Invalid(format!(
                    "magnetic.max_displacement must be finite and positive, got {}",
                    max
                )));
            }
        }
        Ok(())
    }
}

/// Get the config directory path.
pub fn config_dir() -> Option<PathBuf> {
    dirs::config_dir().map(|p| p.join("quickaction"))
}

/// Get the path to config.toml.
pub fn config_path() -> Option<PathBuf> {
    config_dir().map(|p| p.join("config.toml"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = EngineConfig::default();
        assert_eq!(config.timing.success_reset(), Duration::from_millis(1500));
        assert_eq!(config.timing.error_reset(), Duration::from_millis(2000));
        assert_eq!(config.timing.stagger(), Duration::from_millis(100));
        assert_eq!(config.magnetic.scale, 0.1);
        assert!(config.magnetic.max_displacement.is_none());
        assert_eq!(config.magnetic.spring, SpringHint::MAGNETIC);
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = EngineConfig::from_toml(
            r#"
            [timing]
            success_reset_ms = 800

            [magnetic]
            max_displacement = 6.0
            "#,
        )
        .unwrap();
        assert_eq!(config.timing.success_reset_ms, 800);
        assert_eq!(config.timing.error_reset_ms, 2000);
        assert_eq!(config.magnetic.scale, 0.1);
        assert_eq!(config.magnetic.max_displacement, Some(6.0));
    }

    #[test]
    fn test_invalid_values_rejected() {
        let result = EngineConfig::from_toml("[magnetic]\nscale = -1.0\n");
        assert!(matches!(result, Err(ConfigError::Invalid(_))));

        let result = EngineConfig::from_toml("[magnetic]\nmax_displacement = 0.0\n");
        assert!(matches!(result, Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_parse_error() {
        let result = EngineConfig::from_toml("[timing\n");
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[timing]\nerror_reset_ms = 3000").unwrap();

        let config = EngineConfig::load_from(file.path()).unwrap();
        assert_eq!(config.timing.error_reset_ms, 3000);
    }

    #[test]
    fn test_load_missing_file_is_default() {
        let dir = tempfile::tempdir().unwrap();
        let config = EngineConfig::load_from(&dir.path().join("config.toml")).unwrap();
        assert_eq!(config, EngineConfig::default());
    }
}
