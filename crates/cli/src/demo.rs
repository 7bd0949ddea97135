//! A service under load and a failover service behind a circuit breaker.

use async_trait::async_trait;
use failover_config::BreakerSettings;
use failover_core::{Error, Result, FAILOVER_RESPONSE, SERVICE_UNDER_LOAD_RESPONSE};
use failover_utils::{CircuitState, ProtectedService, Service};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

/// Fails a fixed number of times, then answers normally
#[derive(Debug)]
pub struct ServiceUnderLoad {
    failures_left: AtomicUsize,
    calls: AtomicUsize,
}

impl ServiceUnderLoad {
    pub fn new(failures: usize) -> Self {
        Self {
            failures_left: AtomicUsize::new(failures),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls_made(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Service for ServiceUnderLoad {
    type Response = String;
    type Error = Error;

    async fn call(&self) -> Result<String> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let failing = self
            .failures_left
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |n| n.checked_sub(1))
            .is_ok();

        if failing {
            Err(Error::service_unavailable(
                "service-under-load",
                "simulated failure",
            ))
        } else {
            Ok(SERVICE_UNDER_LOAD_RESPONSE.to_string())
        }
    }
}

/// Always answers with a degraded response
#[derive(Debug, Default)]
pub struct FailoverService {
    calls: AtomicUsize,
}

impl FailoverService {
    pub fn calls_made(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Service for FailoverService {
    type Response = String;
    type Error = Error;

    async fn call(&self) -> Result<String> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(FAILOVER_RESPONSE.to_string())
    }
}

#[derive(Debug, Clone)]
pub struct DemoOptions {
    pub calls: usize,
    pub failures: usize,
    pub interval: Duration,
}

/// Outcome of a demo run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DemoSummary {
    pub primary_calls: usize,
    pub failover_calls: usize,
    pub final_state: CircuitState,
}

pub async fn run(settings: &BreakerSettings, options: &DemoOptions) -> Result<DemoSummary> {
    let service = ProtectedService::new(
        settings.to_breaker_config()?,
        ServiceUnderLoad::new(options.failures),
        FailoverService::default(),
    );

    tracing::info!(
        calls = options.calls,
        failures = options.failures,
        max_attempts = settings.max_attempts,
        reset_timeout_ms = settings.reset_timeout_ms,
        "Starting demo"
    );

    for call in 1..=options.calls {
        if call > 1 && !options.interval.is_zero() {
            tokio::time::sleep(options.interval).await;
        }
        let response = service.call().await?;
        println!("call {call}: {response} [{}]", service.breaker().state());
    }

    let summary = DemoSummary {
        primary_calls: service.primary().calls_made(),
        failover_calls: service.failover().calls_made(),
        final_state: service.breaker().state(),
    };
    println!(
        "primary calls: {}, failover calls: {}",
        summary.primary_calls, summary.failover_calls
    );
    Ok(summary)
}
