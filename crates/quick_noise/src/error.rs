//! # Noise Error Types
//!
//! Evaluation never fails. The only fallible surface is loading a
//! [`NoiseConfig`](crate::config::NoiseConfig) from TOML.

use thiserror::Error;

/// Errors that can occur while loading noise configuration.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NoiseError {
    /// The configuration text could not be parsed.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// A configured wrap period lies outside `0..=256`.
    #[error("invalid wrap period for axis {axis}: {value} (expected 0..=256)")]
    InvalidWrap {
        /// Axis name (`x`, `y` or `z`).
        axis: char,
        /// The rejected period.
        value: i64,
    },
}

/// Result type for noise configuration.
pub type NoiseResult<T> = Result<T, NoiseError>;
