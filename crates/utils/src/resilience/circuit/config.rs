//! Configuration for circuit breaker behavior.

use failover_core::{Error, Result, DEFAULT_MAX_ATTEMPTS, DEFAULT_RESET_TIMEOUT_MS};
use std::num::NonZeroUsize;
use std::time::Duration;

/// Configuration for circuit breaker behavior
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CircuitBreakerConfig {
    /// Time that must pass after a trip before the primary is probed again
    pub reset_timeout: Duration,
    /// Consecutive immediate attempts against the primary before tripping
    pub max_attempts: NonZeroUsize,
    /// Return to closed after a successful probe instead of staying tripped
    pub close_on_recovery: bool,
}

impl Default for CircuitBreakerConfig {
    fn default() -> Self {
        Self {
            reset_timeout: Duration::from_millis(DEFAULT_RESET_TIMEOUT_MS),
            max_attempts: NonZeroUsize::new(DEFAULT_MAX_ATTEMPTS).unwrap_or(NonZeroUsize::MIN),
            close_on_recovery: false,
        }
    }
}

impl CircuitBreakerConfig {
    /// Create a config, rejecting a zero attempt count
    pub fn new(reset_timeout: Duration, max_attempts: usize) -> Result<Self> {
        let max_attempts = NonZeroUsize::new(max_attempts).ok_or_else(|| {
            Error::configuration("maximum number of attempts must be at least 1")
        })?;

        Ok(Self {
            reset_timeout,
            max_attempts,
            close_on_recovery: false,
        })
    }

    /// Set whether a successful probe closes the circuit
    #[must_use]
    pub fn with_close_on_recovery(mut self, close_on_recovery: bool) -> Self {
        self.close_on_recovery = close_on_recovery;
        self
    }
}
