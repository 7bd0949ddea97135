//! Service contract and the adapter that puts a breaker in front of one.

use super::config::CircuitBreakerConfig;
use super::state::CircuitBreaker;
use async_trait::async_trait;

/// An asynchronous operation that takes no input and yields a response.
#[async_trait]
pub trait Service: Send + Sync {
    type Response: Send;
    type Error: Send;

    async fn call(&self) -> Result<Self::Response, Self::Error>;
}

/// A primary service guarded by a circuit breaker, with a failover service
/// answering whenever the breaker routes away from the primary.
///
/// `ProtectedService` is itself a [`Service`], so callers use it exactly as
/// they would use the primary. Its error type is the failover's: primary
/// errors never reach the caller.
#[derive(Debug)]
pub struct ProtectedService<P, F> {
    breaker: CircuitBreaker,
    primary: P,
    failover: F,
}

impl<P, F> ProtectedService<P, F> {
    pub fn new(config: CircuitBreakerConfig, primary: P, failover: F) -> Self {
        Self {
            breaker: CircuitBreaker::new(config),
            primary,
            failover,
        }
    }

    pub fn breaker(&self) -> &CircuitBreaker {
        &self.breaker
    }

    pub fn primary(&self) -> &P {
        &self.primary
    }

    pub fn failover(&self) -> &F {
        &self.failover
    }
}

#[async_trait]
impl<P, F> Service for ProtectedService<P, F>
where
    P: Service,
    F: Service<Response = P::Response>,
{
    type Response = P::Response;
    type Error = F::Error;

    async fn call(&self) -> Result<Self::Response, Self::Error> {
        self.breaker
            .protect(|| self.primary.call(), || self.failover.call())
            .await
    }
}
