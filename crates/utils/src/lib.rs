//! Shared utilities for failover
//!
//! This crate hosts the circuit breaker and the tracing setup shared by the
//! rest of the workspace.

pub mod resilience;
pub mod tracing;

pub use resilience::*;
