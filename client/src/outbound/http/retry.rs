//! Rate-limit retry used by the venue-details request.

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use tracing::warn;

use crate::domain::ports::GatewayError;

/// Retries after the first attempt.
pub const DEFAULT_MAX_RETRIES: u32 = 3;
/// Pause between attempts.
pub const DEFAULT_RETRY_DELAY: Duration = Duration::from_secs(1);

/// Async sleeping abstraction so tests can skip the pause.
#[async_trait]
pub trait Sleeper: Send + Sync {
    /// Suspend execution for `duration`.
    async fn sleep(&self, duration: Duration);
}

/// Tokio-based sleeper.
#[derive(Debug, Clone, Copy, Default)]
pub struct TokioSleeper;

#[async_trait]
impl Sleeper for TokioSleeper {
    async fn sleep(&self, duration: Duration) {
        tokio::time::sleep(duration).await;
    }
}

/// Fixed-delay retry on HTTP 429 only.
///
/// Any other failure, and the last rate-limit failure once the retries are
/// spent, is returned unchanged.
#[derive(Clone)]
pub struct RateLimitRetry {
    max_retries: u32,
    delay: Duration,
    sleeper: Arc<dyn Sleeper>,
}

impl Default for RateLimitRetry {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_RETRIES, DEFAULT_RETRY_DELAY, Arc::new(TokioSleeper))
    }
}

impl RateLimitRetry {
    /// Build a policy with explicit limits and sleeper.
    #[must_use]
    pub const fn new(max_retries: u32, delay: Duration, sleeper: Arc<dyn Sleeper>) -> Self {
        Self {
            max_retries,
            delay,
            sleeper,
        }
    }

    /// Run `attempt` until it stops reporting [`GatewayError::RateLimited`]
    /// or the retry budget is spent.
    ///
    /// # Errors
    ///
    /// The first failure that is not retried.
    pub async fn run<T, F, Fut>(
        &self,
        operation: &'static str,
        mut attempt: F,
    ) -> Result<T, GatewayError>
    where
        F: FnMut() -> Fut,
        Fut: Future<Output = Result<T, GatewayError>>,
    {
        let mut retries = 0;
        loop {
            match attempt().await {
                Err(GatewayError::RateLimited { .. }) if retries < self.max_retries => {
                    retries += 1;
                    warn!(
                        operation,
                        retry = retries,
                        max_retries = self.max_retries,
                        delay_ms = u64::try_from(self.delay.as_millis()).unwrap_or(u64::MAX),
                        "rate limited; retrying"
                    );
                    self.sleeper.sleep(self.delay).await;
                }
                outcome => return outcome,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    //! Retry budget and error-kind coverage.

    use std::sync::Mutex;
    use std::sync::atomic::{AtomicU32, Ordering};

    use super::*;

    #[derive(Default)]
    struct RecordingSleeper {
        pauses: Mutex<Vec<Duration>>,
    }

    #[async_trait]
    impl Sleeper for RecordingSleeper {
        async fn sleep(&self, duration: Duration) {
            self.pauses.lock().expect("pauses lock").push(duration);
        }
    }

    fn policy(sleeper: &Arc<RecordingSleeper>) -> RateLimitRetry {
        RateLimitRetry::new(3, Duration::from_secs(1), Arc::clone(sleeper) as Arc<dyn Sleeper>)
    }

    #[tokio::test]
    async fn sustained_rate_limiting_is_retried_three_times() {
        let sleeper = Arc::new(RecordingSleeper::default());
        let attempts = AtomicU32::new(0);

        let outcome: Result<(), _> = policy(&sleeper)
            .run("venue details", || {
                attempts.fetch_add(1, Ordering::SeqCst);
                async { Err(GatewayError::rate_limited("slow down")) }
            })
            .await;

        assert_eq!(outcome, Err(GatewayError::rate_limited("slow down")));
        assert_eq!(attempts.load(Ordering::SeqCst), 4);
        assert_eq!(
            *sleeper.pauses.lock().expect("pauses lock"),
            vec![Duration::from_secs(1); 3]
        );
    }

    #[tokio::test]
    async fn other_failures_are_not_retried() {
        let sleeper = Arc::new(RecordingSleeper::default());
        let attempts = AtomicU32::new(0);

        let outcome: Result<(), _> = policy(&sleeper)
            .run("venue details", || {
                attempts.fetch_add(1, Ordering::SeqCst);
                async { Err(GatewayError::server(503_u16, "unavailable")) }
            })
            .await;

        assert!(matches!(outcome, Err(GatewayError::Server { status: 503, .. })));
        assert_eq!(attempts.load(Ordering::SeqCst), 1);
        assert!(sleeper.pauses.lock().expect("pauses lock").is_empty());
    }

    #[tokio::test]
    async fn recovery_after_a_rate_limit_returns_the_value() {
        let sleeper = Arc::new(RecordingSleeper::default());
        let attempts = AtomicU32::new(0);

        let outcome = policy(&sleeper)
            .run("venue details", || {
                let attempt = attempts.fetch_add(1, Ordering::SeqCst);
                async move {
                    if attempt == 0 {
                        Err(GatewayError::rate_limited("slow down"))
                    } else {
                        Ok("venue")
                    }
                }
            })
            .await;

        assert_eq!(outcome, Ok("venue"));
        assert_eq!(attempts.load(Ordering::SeqCst), 2);
    }
}
