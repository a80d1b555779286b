//! Assistant behaviour configuration

use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;

/// Upper bound for the simulated reply delay.
const MAX_RESPONSE_DELAY_MS: u64 = 10_000;

/// Message-shell tunables
#[derive(Debug, Clone, Deserialize)]
pub struct AssistantConfig {
    /// Simulated assistant latency in milliseconds (0 disables it)
    #[serde(default = "default_response_delay_ms")]
    pub response_delay_ms: u64,

    /// Maximum accepted message length in characters
    #[serde(default = "default_max_message_length")]
    pub max_message_length: usize,
}

impl AssistantConfig {
    pub fn response_delay(&self) -> Duration {
        Duration::from_millis(self.response_delay_ms)
    }

    /// Validate assistant configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.response_delay_ms > MAX_RESPONSE_DELAY_MS {
            return Err(ValidationError::ResponseDelayTooLong {
                max: MAX_RESPONSE_DELAY_MS,
            });
        }
        if self.max_message_length == 0 {
            return Err(ValidationError::InvalidMaxMessageLength);
        }
        Ok(())
    }
}

impl Default for AssistantConfig {
    fn default() -> Self {
        Self {
            response_delay_ms: default_response_delay_ms(),
            max_message_length: default_max_message_length(),
        }
    }
}

fn default_response_delay_ms() -> u64 {
    1000
}

fn default_max_message_length() -> usize {
    4000
}
