//! Configuration errors
//!
//! Generation itself cannot fail: an impossible placement is skipped, not
//! reported. Everything that can go wrong is caught when the configuration
//! is built.

use thiserror::Error;

/// Reasons a generation configuration is rejected
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("{name} probability must be within [0, 1], got {value}")]
    ProbabilityOutOfRange { name: &'static str, value: f32 },

    #[error("room count must not be negative, got {0}")]
    NegativeRoomCount(i64),

    #[error("room size must be finite and positive, got ({x}, {z})")]
    InvalidRoomSize { x: f32, z: f32 },

    #[error("could not parse configuration: {0}")]
    Parse(String),
}

impl From<serde_json::Error> for ConfigError {
    fn from(err: serde_json::Error) -> Self {
        ConfigError::Parse(err.to_string())
    }
}
