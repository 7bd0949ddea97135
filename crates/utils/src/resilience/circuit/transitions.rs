//! Stored trip state and the rules that derive the logical circuit state.
//!
//! Only `Closed` and `Open` are ever stored. `HalfOpen` is computed from the
//! time elapsed since the last trip.

use super::types::CircuitState;
use std::time::Duration;
use tokio::time::Instant;

/// Mutable part of a circuit breaker
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TripState {
    tripped: bool,
    last_trip: Option<Instant>,
}

impl TripState {
    /// A closed circuit that has never tripped
    pub fn new() -> Self {
        Self {
            tripped: false,
            last_trip: None,
        }
    }

    /// The state as stored, either `Closed` or `Open`
    #[cfg(test)]
    pub fn stored(&self) -> CircuitState {
        if self.tripped {
            CircuitState::Open
        } else {
            CircuitState::Closed
        }
    }

    pub fn last_trip(&self) -> Option<Instant> {
        self.last_trip
    }

    /// Classify the circuit at `now`.
    ///
    /// A tripped circuit is `HalfOpen` once strictly more than `reset_timeout`
    /// has passed since the last trip, and `Open` until then.
    pub fn derive(&self, now: Instant, reset_timeout: Duration) -> CircuitState {
        if !self.tripped {
            return CircuitState::Closed;
        }

        match self.last_trip {
            Some(at) if now.saturating_duration_since(at) > reset_timeout => {
                CircuitState::HalfOpen
            }
            _ => CircuitState::Open,
        }
    }

    /// Enter the tripped state, refreshing the trip time
    pub fn trip(&mut self, now: Instant) {
        self.tripped = true;
        self.last_trip = Some(now);
    }

    /// Return to closed and forget the last trip
    pub fn close(&mut self) {
        self.tripped = false;
        self.last_trip = None;
    }
}

impl Default for TripState {
    fn default() -> Self {
        Self::new()
    }
}
