//! Core errors and constants for the `failover` workspace.
//!
//! ## Key Components
//!
//! - **`errors`**: Defines the primary `Error` enum and `Result` type alias,
//!   centralizing the failure modes of configuration loading and the demo
//!   services.
//! - **`constants`**: Shared static values such as environment variable names
//!   and breaker defaults.

pub mod constants;
pub mod errors;

pub use self::{
    constants::*,
    errors::{Error, Result},
};
