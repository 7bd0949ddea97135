//! Error types for failover operations

mod builders;
mod conversions;
mod types;

pub use types::{Error, Result};
