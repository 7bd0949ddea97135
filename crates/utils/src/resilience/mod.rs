//! Resilience patterns like circuit breakers.
//!
//! This module provides mechanisms to build robust, fault-tolerant systems
//! that can gracefully handle and recover from transient failures.
//!
//! ## Key Components
//!
//! - **`circuit`**: Implements the circuit breaker pattern to stop calling a
//!   service that is known to be failing and route to a failover instead.

pub mod circuit;

pub use circuit::{
    CircuitBreaker, CircuitBreakerConfig, CircuitBreakerStats, CircuitState, ProtectedService,
    Service,
};
