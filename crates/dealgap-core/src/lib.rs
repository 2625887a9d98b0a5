//! Shared configuration for the dealgap workspace.
//!
//! Every other crate takes its settings as plain values or structs; this
//! crate is the only place that reads the process environment.

mod app_config;
mod config;

pub use app_config::{AppConfig, Environment};
pub use config::{load_app_config, load_app_config_from_env};

use thiserror::Error;

/// Errors raised while loading application configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// An environment variable is set but its value does not parse.
    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}
