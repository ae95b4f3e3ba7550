//! Demo settings, parsed from the TOML document compiled into the binaries.

use serde::Deserialize;
use thiserror::Error;
use tracing_subscriber::EnvFilter;

pub const DEFAULT_CONFIG: &str = include_str!("../config/demos.toml");

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to parse demo config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid log level '{level}': {reason}")]
    InvalidLogLevel { level: String, reason: String },
}

/// One `[x, y]` entry of `points`; any other length is rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(try_from = "Vec<i64>")]
pub struct PointSpec(pub i64, pub i64);

impl PointSpec {
    pub fn pair(self) -> (i64, i64) {
        (self.0, self.1)
    }
}

impl TryFrom<Vec<i64>> for PointSpec {
    type Error = String;

    fn try_from(components: Vec<i64>) -> Result<Self, Self::Error> {
        match components.as_slice() {
            [x, y] => Ok(PointSpec(*x, *y)),
            other => Err(format!(
                "a point needs exactly 2 components, found {}",
                other.len()
            )),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CaptureConfig {
    pub a: i64,
    pub b: i64,
}

impl Default for CaptureConfig {
    fn default() -> Self {
        CaptureConfig { a: 2, b: 5 }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DemoConfig {
    pub log_level: String,
    pub points: Vec<PointSpec>,
    pub capture: CaptureConfig,
}

impl Default for DemoConfig {
    fn default() -> Self {
        DemoConfig {
            log_level: "warn".to_string(),
            points: vec![PointSpec(0, 1)],
            capture: CaptureConfig::default(),
        }
    }
}

impl DemoConfig {
    pub fn from_toml(source: &str) -> Result<Self, ConfigError> {
        let config: DemoConfig = toml::from_str(source)?;
        config.log_filter()?;
        Ok(config)
    }

    /// The settings the binaries ship with.
    pub fn builtin() -> Result<Self, ConfigError> {
        Self::from_toml(DEFAULT_CONFIG)
    }

    pub fn log_filter(&self) -> Result<EnvFilter, ConfigError> {
        EnvFilter::try_new(&self.log_level).map_err(|e| ConfigError::InvalidLogLevel {
            level: self.log_level.clone(),
            reason: e.to_string(),
        })
    }
}

/// Installs the stderr `tracing` subscriber; stdout stays reserved for demo output.
pub fn init_logging(config: &DemoConfig) -> Result<(), ConfigError> {
    let filter = config.log_filter()?;
    // a second init (tests, repeated calls) keeps the first subscriber
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_config() {
        let config = DemoConfig::builtin().unwrap();
        assert_eq!(config, DemoConfig::default());
    }

    #[test]
    fn test_partial_document_uses_defaults() {
        let config = DemoConfig::from_toml("points = [[2, 3], [0, 0]]").unwrap();
        assert_eq!(config.points, vec![PointSpec(2, 3), PointSpec(0, 0)]);
        assert_eq!(config.log_level, "warn");
        assert_eq!(config.capture, CaptureConfig { a: 2, b: 5 });
    }

    #[test]
    fn test_capture_section() {
        let config = DemoConfig::from_toml("[capture]\na = 9\nb = -1\n").unwrap();
        assert_eq!(config.capture, CaptureConfig { a: 9, b: -1 });
    }

    #[test]
    fn test_unknown_field_rejected() {
        let err = DemoConfig::from_toml("colour = true").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_malformed_point_rejected() {
        let err = DemoConfig::from_toml("points = [[1, 2, 3]]").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
        assert!(err.to_string().contains("exactly 2 components, found 3"));

        let err = DemoConfig::from_toml("points = [[4]]").unwrap_err();
        assert!(err.to_string().contains("found 1"));
    }

    #[test]
    fn test_bad_log_level_rejected() {
        let err = DemoConfig::from_toml("log_level = \"demo=shouting\"").unwrap_err();
        assert!(matches!(err, ConfigError::InvalidLogLevel { .. }));
    }

    #[test]
    fn test_init_logging_twice_is_harmless() {
        let config = DemoConfig::default();
        assert!(init_logging(&config).is_ok());
        assert!(init_logging(&config).is_ok());
    }
}
