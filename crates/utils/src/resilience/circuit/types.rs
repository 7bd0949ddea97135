//! Core types and enums for circuit breaker functionality.

use std::fmt;
use tokio::time::Instant;

/// Circuit breaker states
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CircuitState {
    /// Circuit is closed - calls go to the primary, retried up to the attempt limit
    Closed,
    /// Circuit is open - calls go straight to the fallback
    Open,
    /// Circuit cooldown has elapsed - the next call probes the primary once
    HalfOpen,
}

impl fmt::Display for CircuitState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CircuitState::Closed => write!(f, "closed"),
            CircuitState::Open => write!(f, "open"),
            CircuitState::HalfOpen => write!(f, "half-open"),
        }
    }
}

/// Snapshot of circuit breaker state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CircuitBreakerStats {
    /// Derived state at the time of the snapshot
    pub state: CircuitState,
    /// Time of the most recent trip, `None` if the breaker never tripped
    /// or has closed since
    pub last_trip: Option<Instant>,
}
