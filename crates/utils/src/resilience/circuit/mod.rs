//! Circuit breaker with fallback routing.
//!
//! A [`CircuitBreaker`] guards a potentially failing primary operation. While
//! closed it retries the primary immediately up to a fixed number of attempts;
//! once those are exhausted it trips and routes callers to a fallback. After a
//! cooldown a single probe of the primary decides whether the breaker re-trips.
//!
//! ## Architecture
//!
//! - [`types`] - Core types and enums (CircuitState, CircuitBreakerStats)
//! - [`config`] - Breaker configuration
//! - [`transitions`] - Stored trip state and the derived-state rules
//! - [`state`] - The breaker itself and its `protect` routing
//! - [`service`] - The `Service` contract and the `ProtectedService` adapter
//! - [`tests`] - Integration tests
//!
//! ## Examples
//!
//! ### Protecting a call
//!
//! ```rust,no_run
//! use failover_utils::resilience::circuit::{CircuitBreaker, CircuitBreakerConfig};
//! use std::convert::Infallible;
//!
//! # async fn example() -> Result<String, Infallible> {
//! let cb = CircuitBreaker::new(CircuitBreakerConfig::default());
//!
//! let result = cb
//!     .protect(
//!         || async { Err::<String, _>("primary is down") },
//!         || async { Ok("cached answer".to_string()) },
//!     )
//!     .await;
//! result
//! # }
//! ```
//!
//! ### Wrapping a service
//!
//! ```rust,no_run
//! use async_trait::async_trait;
//! use failover_utils::resilience::circuit::{CircuitBreakerConfig, ProtectedService, Service};
//!
//! struct Inventory;
//! struct CachedInventory;
//!
//! #[async_trait]
//! impl Service for Inventory {
//!     type Response = u32;
//!     type Error = failover_core::Error;
//!
//!     async fn call(&self) -> failover_core::Result<u32> {
//!         Err(failover_core::Error::service_unavailable("inventory", "timed out"))
//!     }
//! }
//!
//! #[async_trait]
//! impl Service for CachedInventory {
//!     type Response = u32;
//!     type Error = failover_core::Error;
//!
//!     async fn call(&self) -> failover_core::Result<u32> {
//!         Ok(0)
//!     }
//! }
//!
//! # async fn example() -> failover_core::Result<u32> {
//! let service = ProtectedService::new(CircuitBreakerConfig::default(), Inventory, CachedInventory);
//! service.call().await
//! # }
//! ```

pub mod config;
pub mod service;
pub mod state;
pub mod transitions;
pub mod types;

// Re-export public API
pub use config::CircuitBreakerConfig;
pub use service::{ProtectedService, Service};
pub use state::CircuitBreaker;
pub use types::{CircuitBreakerStats, CircuitState};
