//! Server wiring: configuration and startup helpers.

pub mod config;

pub use config::{AppConfig, AppEnv, ConfigError, DefaultAppEnv};
