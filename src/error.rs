//! Error types for the dashboard.

use thiserror::Error;

use crate::render::Target;

/// Errors that stop the dashboard from starting.
#[derive(Debug, Error)]
pub enum DashboardError {
    /// The display surface cannot address a required target.
    #[error("Display surface is missing target: {0}")]
    MissingTarget(Target),

    /// Settings could not be loaded.
    #[error("Failed to load configuration: {0}")]
    Config(#[from] config::ConfigError),

    /// A setting was loaded but has an unusable value.
    #[error("Invalid setting: {0}")]
    InvalidSetting(String),
}

/// Result alias used across the library.
pub type Result<T, E = DashboardError> = std::result::Result<T, E>;
