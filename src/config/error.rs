//! Configuration error types

use thiserror::Error;

/// Errors that can occur during configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration loading failed: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Validation failed: {0}")]
    ValidationFailed(#[from] ValidationError),
}

/// Errors that can occur during configuration validation
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Invalid port number")]
    InvalidPort,

    #[error("Invalid request timeout")]
    InvalidTimeout,

    #[error("Request timeout ({timeout_ms} ms) must exceed the assistant reply delay ({delay_ms} ms)")]
    TimeoutWithinReplyDelay { timeout_ms: u64, delay_ms: u64 },

    #[error("Response delay exceeds maximum allowed ({max} ms)")]
    ResponseDelayTooLong { max: u64 },

    #[error("Maximum message length must be positive")]
    InvalidMaxMessageLength,
}
