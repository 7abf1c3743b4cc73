//! User-level configuration for progression
//!
//! Supports loading config from:
//! - Environment variables
//! - ~/.config/progression/config.toml
//!
//! # Configuration Format
//!
//! ```toml
//! [server]
//! host = "127.0.0.1"
//! port = 3000
//!
//! [predictor]
//! tolerance = 0.0   # 0.0 = exact difference comparison
//! ```

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, warn};

pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 3000;

pub const ENV_HOST: &str = "PROGRESSION_HOST";
pub const ENV_PORT: &str = "PROGRESSION_PORT";
pub const ENV_TOLERANCE: &str = "PROGRESSION_TOLERANCE";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Invalid config file {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("Invalid value for {key}: {value}")]
    InvalidValue { key: String, value: String },

    #[error("Could not determine config directory")]
    NoConfigDir,

    #[error("Failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
}

#[derive(Debug, Default, Clone, PartialEq, Deserialize, Serialize)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub predictor: PredictorConfig,
}

#[derive(Debug, Default, Clone, PartialEq, Deserialize, Serialize)]
pub struct ServerConfig {
    /// Bind address (default: 127.0.0.1)
    pub host: Option<String>,
    /// Bind port (default: 3000)
    pub port: Option<u16>,
}

#[derive(Debug, Default, Clone, PartialEq, Deserialize, Serialize)]
pub struct PredictorConfig {
    /// Absolute tolerance when comparing differences (default: exact)
    pub tolerance: Option<f64>,
}

impl AppConfig {
    /// Load config from all sources, with priority:
    /// 1. Environment variables (highest)
    /// 2. User config (~/.config/progression/config.toml)
    pub fn load() -> Result<Self, ConfigError> {
        let mut config = AppConfig::default();

        if let Some(path) = Self::user_config_path().filter(|p| p.exists()) {
            config.merge(Self::load_from(&path)?);
        }

        config.apply_env(|key| std::env::var(key).ok())?;
        Ok(config)
    }

    /// Like [`load`](Self::load), but a broken file or bad env value only
    /// logs a warning and yields defaults.
    pub fn load_or_default() -> Self {
        match Self::load() {
            Ok(config) => config,
            Err(e) => {
                warn!("Ignoring configuration: {}", e);
                AppConfig::default()
            }
        }
    }

    /// Read and parse a single config file
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config: AppConfig = toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        config.check()?;
        debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Get the user config file path
    pub fn user_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("progression").join("config.toml"))
    }

    /// Merge another config into this one (other takes priority)
    fn merge(&mut self, other: AppConfig) {
        if other.server.host.is_some() {
            self.server.host = other.server.host;
        }
        if other.server.port.is_some() {
            self.server.port = other.server.port;
        }
        if other.predictor.tolerance.is_some() {
            self.predictor.tolerance = other.predictor.tolerance;
        }
    }

    /// Apply overrides from an environment lookup
    pub fn apply_env<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(host) = lookup(ENV_HOST) {
            self.server.host = Some(host);
        }
        if let Some(port) = lookup(ENV_PORT) {
            let parsed = port.trim().parse::<u16>().map_err(|_| ConfigError::InvalidValue {
                key: ENV_PORT.to_string(),
                value: port.clone(),
            })?;
            self.server.port = Some(parsed);
        }
        if let Some(tolerance) = lookup(ENV_TOLERANCE) {
            let parsed = tolerance
                .trim()
                .parse::<f64>()
                .map_err(|_| ConfigError::InvalidValue {
                    key: ENV_TOLERANCE.to_string(),
                    value: tolerance.clone(),
                })?;
            self.predictor.tolerance = Some(parsed);
        }
        self.check()
    }

    fn check(&self) -> Result<(), ConfigError> {
        if let Some(t) = self.predictor.tolerance {
            if !t.is_finite() || t < 0.0 {
                return Err(ConfigError::InvalidValue {
                    key: "predictor.tolerance".to_string(),
                    value: t.to_string(),
                });
            }
        }
        Ok(())
    }

    pub fn host(&self) -> &str {
        self.server.host.as_deref().unwrap_or(DEFAULT_HOST)
    }

    pub fn port(&self) -> u16 {
        self.server.port.unwrap_or(DEFAULT_PORT)
    }

    pub fn tolerance(&self) -> f64 {
        self.predictor.tolerance.unwrap_or(0.0)
    }

    /// Create the user config directory and an example config file
    pub fn init_user_config() -> Result<PathBuf, ConfigError> {
        let config_path = Self::user_config_path().ok_or(ConfigError::NoConfigDir)?;
        Self::write_example(&config_path)?;
        Ok(config_path)
    }

    /// Write the example config to `path` unless a file is already there
    pub fn write_example(path: &Path) -> Result<(), ConfigError> {
        let write_err = |source| ConfigError::Write {
            path: path.to_path_buf(),
            source,
        };
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(write_err)?;
        }
        if !path.exists() {
            let example = r#"# progression configuration

[server]
# Address the HTTP API binds to
# host = "127.0.0.1"
# port = 3000

[predictor]
# Absolute tolerance when comparing consecutive differences.
# 0.0 compares exactly, so [0.1, 0.2, 0.3] is rejected.
# tolerance = 1e-9
"#;
            std::fs::write(path, example).map_err(write_err)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.host(), "127.0.0.1");
        assert_eq!(config.port(), 3000);
        assert_eq!(config.tolerance(), 0.0);
    }

    #[test]
    fn test_toml_parsing() {
        let toml_str = r#"
[server]
host = "0.0.0.0"
port = 8080

[predictor]
tolerance = 1e-6
"#;
        let config: AppConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.host(), "0.0.0.0");
        assert_eq!(config.port(), 8080);
        assert_eq!(config.tolerance(), 1e-6);
    }

    #[test]
    fn test_toml_parsing_minimal() {
        let config: AppConfig = toml::from_str("").unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[server]\nport = 4321\n").unwrap();
        let config = AppConfig::load_from(&path).unwrap();
        assert_eq!(config.port(), 4321);
        assert_eq!(config.host(), DEFAULT_HOST);
    }

    #[test]
    fn test_load_from_invalid_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "this is [[ not valid toml").unwrap();
        assert!(matches!(
            AppConfig::load_from(&path),
            Err(ConfigError::Parse { .. })
        ));
    }

    #[test]
    fn test_load_from_rejects_negative_tolerance() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[predictor]\ntolerance = -0.5\n").unwrap();
        assert!(matches!(
            AppConfig::load_from(&path),
            Err(ConfigError::InvalidValue { .. })
        ));
    }

    #[test]
    fn test_env_overrides_file() {
        let mut config: AppConfig = toml::from_str("[server]\nport = 1111\n").unwrap();
        config
            .apply_env(env(&[(ENV_PORT, "2222"), (ENV_HOST, "0.0.0.0")]))
            .unwrap();
        assert_eq!(config.port(), 2222);
        assert_eq!(config.host(), "0.0.0.0");
    }

    #[test]
    fn test_env_bad_port() {
        let mut config = AppConfig::default();
        let err = config.apply_env(env(&[(ENV_PORT, "eighty")])).unwrap_err();
        assert!(err.to_string().contains(ENV_PORT));
    }

    #[test]
    fn test_merge_preserves_base_when_other_is_none() {
        let mut base: AppConfig = toml::from_str("[server]\nhost = \"10.0.0.1\"\n").unwrap();
        base.merge(AppConfig::default());
        assert_eq!(base.host(), "10.0.0.1");
    }

    #[test]
    fn test_write_example_is_valid_and_not_overwritten() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");
        AppConfig::write_example(&path).unwrap();
        assert_eq!(AppConfig::load_from(&path).unwrap(), AppConfig::default());

        std::fs::write(&path, "[server]\nport = 9\n").unwrap();
        AppConfig::write_example(&path).unwrap();
        assert_eq!(AppConfig::load_from(&path).unwrap().port(), 9);
    }

    #[test]
    fn test_user_config_path_shape() {
        if let Some(p) = AppConfig::user_config_path() {
            assert!(p.ends_with("progression/config.toml"));
        }
    }
}
