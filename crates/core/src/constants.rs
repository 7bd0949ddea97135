/// Constants used throughout the failover workspace
// Environment variable overrides for breaker settings
pub const FAILOVER_RESET_TIMEOUT_MS_VAR: &str = "FAILOVER_RESET_TIMEOUT_MS";
pub const FAILOVER_MAX_ATTEMPTS_VAR: &str = "FAILOVER_MAX_ATTEMPTS";
pub const FAILOVER_CLOSE_ON_RECOVERY_VAR: &str = "FAILOVER_CLOSE_ON_RECOVERY";

// Breaker defaults
pub const DEFAULT_RESET_TIMEOUT_MS: u64 = 30_000;
pub const DEFAULT_MAX_ATTEMPTS: usize = 3;

// Responses of the demo services
pub const SERVICE_UNDER_LOAD_RESPONSE: &str = "Service Under Load called.";
pub const FAILOVER_RESPONSE: &str = "Fail-over called";
