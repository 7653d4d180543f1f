//! Retry with exponential backoff

use std::future::Future;
use std::time::Duration;

use crate::config::QueryConfig;
use crate::error::Result;

/// How many times, and how patiently, a failed operation is retried
///
/// Only network failures and unexpected backend responses are retried.
/// Validation, not-found, unauthorized and decode errors fail immediately.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    pub max_retries: u32,
    pub base_delay: Duration,
    pub max_delay: Duration,
}

impl RetryPolicy {
    /// Policy for reads
    pub fn for_queries(config: &QueryConfig) -> Self {
        Self {
            max_retries: config.query_retries,
            base_delay: Duration::from_millis(config.retry_base_delay_ms),
            max_delay: Duration::from_millis(config.retry_max_delay_ms),
        }
    }

    /// Policy for writes
    pub fn for_mutations(config: &QueryConfig) -> Self {
        Self {
            max_retries: config.mutation_retries,
            ..Self::for_queries(config)
        }
    }

    pub fn none() -> Self {
        Self {
            max_retries: 0,
            base_delay: Duration::ZERO,
            max_delay: Duration::ZERO,
        }
    }

    /// Delay before retry number `attempt` (0-based)
    ///
    /// # Examples
    ///
    /// ```
    /// use std::time::Duration;
    /// use collabdesk::query::RetryPolicy;
    ///
    /// let policy = RetryPolicy {
    ///     max_retries: 3,
    ///     base_delay: Duration::from_secs(1),
    ///     max_delay: Duration::from_secs(30),
    /// };
    /// assert_eq!(policy.delay_for(0), Duration::from_secs(1));
    /// assert_eq!(policy.delay_for(2), Duration::from_secs(4));
    /// assert_eq!(policy.delay_for(10), Duration::from_secs(30));
    /// ```
    pub fn delay_for(&self, attempt: u32) -> Duration {
        let factor = 2u32.saturating_pow(attempt.min(16));
        self.base_delay
            .checked_mul(factor)
            .unwrap_or(self.max_delay)
            .min(self.max_delay)
    }

    /// Run `op`, retrying retryable failures
    pub async fn run<T, F, Fut>(&self, label: &str, mut op: F) -> Result<T>
    where
        F: FnMut() -> Fut,
        Fut: Future<Output = Result<T>>,
    {
        let mut attempt = 0;
        loop {
            match op().await {
                Ok(value) => return Ok(value),
                Err(error) if attempt < self.max_retries && error.is_retryable() => {
                    let delay = self.delay_for(attempt);
                    attempt += 1;
                    tracing::warn!(
                        label,
                        attempt,
                        max_retries = self.max_retries,
                        "Retrying after error: {}",
                        error
                    );
                    tokio::time::sleep(delay).await;
                }
                Err(error) => return Err(error),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CollabError;
    use std::sync::atomic::{AtomicU32, Ordering};

    fn fast(max_retries: u32) -> RetryPolicy {
        RetryPolicy {
            max_retries,
            base_delay: Duration::from_millis(1),
            max_delay: Duration::from_millis(2),
        }
    }

    #[test]
    fn test_default_policies_follow_config() {
        let config = QueryConfig::default();
        assert_eq!(RetryPolicy::for_queries(&config).max_retries, 3);
        assert_eq!(RetryPolicy::for_mutations(&config).max_retries, 1);
    }

    #[tokio::test]
    async fn test_retries_network_errors_until_limit() {
        let counter = AtomicU32::new(0);
        let calls = &counter;
        let result: Result<()> = fast(3)
            .run("test", move || async move {
                calls.fetch_add(1, Ordering::SeqCst);
                Err(CollabError::Network("down".into()))
            })
            .await;
        assert!(result.is_err());
        assert_eq!(calls.load(Ordering::SeqCst), 4);
    }

    #[tokio::test]
    async fn test_succeeds_after_transient_failure() {
        let counter = AtomicU32::new(0);
        let calls = &counter;
        let result = fast(1)
            .run("test", move || async move {
                if calls.fetch_add(1, Ordering::SeqCst) == 0 {
                    Err(CollabError::Network("blip".into()))
                } else {
                    Ok(7)
                }
            })
            .await;
        assert_eq!(result.unwrap(), 7);
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_does_not_retry_validation_errors() {
        let counter = AtomicU32::new(0);
        let calls = &counter;
        let result: Result<()> = fast(3)
            .run("test", move || async move {
                calls.fetch_add(1, Ordering::SeqCst);
                Err(CollabError::Validation("bad".into()))
            })
            .await;
        assert!(result.is_err());
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_does_not_retry_decode_errors() {
        let counter = AtomicU32::new(0);
        let calls = &counter;
        let result: Result<()> = fast(3)
            .run("test", move || async move {
                calls.fetch_add(1, Ordering::SeqCst);
                Err(CollabError::Decode("expected an array".into()))
            })
            .await;
        assert!(matches!(result, Err(CollabError::Decode(_))));
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }
}
