//! Circuit breaker state management and execution logic.

use super::config::CircuitBreakerConfig;
use super::transitions::TripState;
use super::types::{CircuitBreakerStats, CircuitState};
use parking_lot::Mutex;
use std::future::Future;
use tokio::time::Instant;
use tracing::{debug, info, warn};

/// Circuit breaker implementation
///
/// The trip state sits behind a mutex that is never held across an await.
/// Reading the state and tripping are each atomic, but a whole `protect`
/// call is not: concurrent callers that both see a closed circuit run their
/// own retry loops and may both trip it, the later trip winning the
/// timestamp. Likewise several callers may probe a half-open circuit at once.
#[derive(Debug)]
pub struct CircuitBreaker {
    config: CircuitBreakerConfig,
    state: Mutex<TripState>,
}

impl CircuitBreaker {
    /// Create a new circuit breaker with the given configuration
    pub fn new(config: CircuitBreakerConfig) -> Self {
        Self {
            config,
            state: Mutex::new(TripState::new()),
        }
    }

    pub fn config(&self) -> &CircuitBreakerConfig {
        &self.config
    }

    /// Get the current state of the circuit
    pub fn state(&self) -> CircuitState {
        self.state
            .lock()
            .derive(Instant::now(), self.config.reset_timeout)
    }

    /// Time of the most recent trip
    pub fn last_trip(&self) -> Option<Instant> {
        self.state.lock().last_trip()
    }

    /// Get current circuit breaker statistics
    pub fn stats(&self) -> CircuitBreakerStats {
        let state = self.state.lock();
        CircuitBreakerStats {
            state: state.derive(Instant::now(), self.config.reset_timeout),
            last_trip: state.last_trip(),
        }
    }

    /// Execute `primary` through the circuit breaker, falling back to
    /// `fallback` when the circuit is open or the primary keeps failing.
    ///
    /// - Closed: `primary` is attempted up to `max_attempts` times with no
    ///   delay in between. If every attempt fails the circuit trips and
    ///   `fallback` runs once.
    /// - Open: `fallback` runs once and `primary` is not touched.
    /// - Half-open: `primary` is attempted exactly once. On failure the
    ///   circuit trips again and `fallback` runs once.
    ///
    /// Errors from `primary` are swallowed; only the fact of failure is used.
    /// Errors from `fallback` are returned as they are.
    pub async fn protect<P, PFut, PE, F, FFut, T, E>(
        &self,
        mut primary: P,
        fallback: F,
    ) -> Result<T, E>
    where
        P: FnMut() -> PFut,
        PFut: Future<Output = Result<T, PE>>,
        F: FnOnce() -> FFut,
        FFut: Future<Output = Result<T, E>>,
    {
        match self.state() {
            CircuitState::Open => {
                debug!("Circuit breaker open, routing to fallback");
                fallback().await
            }
            CircuitState::HalfOpen => match primary().await {
                Ok(value) => {
                    self.record_recovery();
                    Ok(value)
                }
                Err(_) => {
                    self.trip("recovery probe failed");
                    fallback().await
                }
            },
            CircuitState::Closed => {
                let max_attempts = self.config.max_attempts.get();
                let mut attempt = 0;
                loop {
                    attempt += 1;
                    match primary().await {
                        Ok(value) => return Ok(value),
                        Err(_) if attempt < max_attempts => {
                            debug!(attempt, max_attempts, "Primary operation failed, retrying");
                        }
                        Err(_) => {
                            self.trip("attempts exhausted");
                            return fallback().await;
                        }
                    }
                }
            }
        }
    }

    fn trip(&self, reason: &str) {
        self.state.lock().trip(Instant::now());
        warn!(
            reason,
            reset_timeout = ?self.config.reset_timeout,
            "Circuit breaker tripped"
        );
    }

    fn record_recovery(&self) {
        if self.config.close_on_recovery {
            self.state.lock().close();
            info!("Circuit breaker closing after successful probe");
        } else {
            info!("Recovery probe succeeded");
        }
    }
}
