//! Serializable breaker settings.

use failover_core::{Error, Result, DEFAULT_MAX_ATTEMPTS, DEFAULT_RESET_TIMEOUT_MS};
use failover_utils::CircuitBreakerConfig;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Breaker settings as written in a settings file.
///
/// ```json
/// { "resetTimeoutMs": 2000, "maxAttempts": 3, "closeOnRecovery": false }
/// ```
///
/// Every key is optional.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct BreakerSettings {
    /// Cooldown after a trip before the primary is probed, in milliseconds
    pub reset_timeout_ms: u64,

    /// Immediate attempts against the primary before tripping
    pub max_attempts: usize,

    /// Whether a successful probe closes the circuit
    pub close_on_recovery: bool,
}

impl Default for BreakerSettings {
    fn default() -> Self {
        Self {
            reset_timeout_ms: DEFAULT_RESET_TIMEOUT_MS,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            close_on_recovery: false,
        }
    }
}

impl BreakerSettings {
    /// Parse settings from a JSON document
    pub fn from_json(content: &str) -> Result<Self> {
        Ok(serde_json::from_str(content)?)
    }

    pub fn reset_timeout(&self) -> Duration {
        Duration::from_millis(self.reset_timeout_ms)
    }

    pub fn validate(&self) -> Result<()> {
        if self.max_attempts == 0 {
            return Err(Error::configuration("maxAttempts must be at least 1"));
        }
        Ok(())
    }

    /// Build the breaker configuration these settings describe
    pub fn to_breaker_config(&self) -> Result<CircuitBreakerConfig> {
        self.validate()?;
        Ok(
            CircuitBreakerConfig::new(self.reset_timeout(), self.max_attempts)?
                .with_close_on_recovery(self.close_on_recovery),
        )
    }
}
