//! Breaker settings for failover
//!
//! Settings come from three layers, each overriding the previous one:
//! built-in defaults, an optional JSON file, then `FAILOVER_*` environment
//! variables. The result converts into a
//! [`CircuitBreakerConfig`](failover_utils::CircuitBreakerConfig).

pub mod config;
pub mod loader;

pub use config::BreakerSettings;
pub use loader::ConfigLoader;
