//! Configuration module for progression
//!
//! This module handles:
//! - User-level configuration (~/.config/progression/config.toml)
//! - Environment overrides for the server address and predictor tolerance

mod app_config;

pub use app_config::{
    AppConfig,
    ConfigError,
    PredictorConfig,
    ServerConfig,
    DEFAULT_HOST,
    DEFAULT_PORT,
    ENV_HOST,
    ENV_PORT,
    ENV_TOLERANCE,
};
