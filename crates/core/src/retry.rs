//! Fixed-delay, bounded retry loop
//!
//! The loop is generic over the attempt being retried: it calls the
//! operation, asks [`classify`] whether a failure is transient, and sleeps a
//! constant delay before the next attempt. At most `max_retries + 1`
//! attempts are made. Every attempt and every pause is raced against a
//! [`CancellationToken`].

use std::future::Future;
use std::time::Duration;

use evolution_domain::ClientConfig;
use tokio_util::sync::CancellationToken;
use tracing::warn;

use crate::failure::{classify, Classification, TransportFailure};

/// How many times and how far apart to retry transient failures
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    max_retries: u32,
    delay: Duration,
}

impl RetryPolicy {
    pub const fn new(max_retries: u32, delay: Duration) -> Self {
        Self { max_retries, delay }
    }

    pub const fn from_config(config: &ClientConfig) -> Self {
        Self::new(config.max_retries, config.retry_delay())
    }

    /// A policy that never retries.
    pub const fn none() -> Self {
        Self::new(0, Duration::ZERO)
    }

    pub const fn max_retries(&self) -> u32 {
        self.max_retries
    }

    pub const fn delay(&self) -> Duration {
        self.delay
    }

    pub const fn max_attempts(&self) -> u32 {
        self.max_retries.saturating_add(1)
    }

    /// `retries_done` counts retries already made, not attempts.
    pub const fn should_retry(&self, classification: Classification, retries_done: u32) -> bool {
        classification.retryable && retries_done < self.max_retries
    }
}

/// Why the retry loop gave up
#[derive(Debug, Clone, PartialEq)]
pub enum RetryError {
    /// A non-retryable failure, or the last failure once retries ran out
    Failed { failure: TransportFailure, attempts: u32 },
    /// The token fired before an attempt succeeded
    Cancelled,
}

/// Run `operation` until it succeeds, fails permanently, runs out of
/// retries, or `cancel` fires.
///
/// `operation` receives the 1-based attempt number.
pub async fn run_with_retry<T, F, Fut>(
    policy: &RetryPolicy,
    cancel: &CancellationToken,
    mut operation: F,
) -> Result<T, RetryError>
where
    F: FnMut(u32) -> Fut,
    Fut: Future<Output = Result<T, TransportFailure>>,
{
    let mut retries_done = 0;

    loop {
        let attempt = retries_done + 1;

        let outcome = tokio::select! {
            biased;
            () = cancel.cancelled() => return Err(RetryError::Cancelled),
            outcome = operation(attempt) => outcome,
        };

        let failure = match outcome {
            Ok(value) => return Ok(value),
            Err(failure) => failure,
        };

        let classification = classify(&failure);
        if !policy.should_retry(classification, retries_done) {
            return Err(RetryError::Failed { failure, attempts: attempt });
        }

        retries_done += 1;
        warn!(
            attempt,
            max_attempts = policy.max_attempts(),
            kind = ?classification.kind,
            error = %failure,
            "transient failure, retrying"
        );

        if !policy.delay.is_zero() {
            tokio::select! {
                biased;
                () = cancel.cancelled() => return Err(RetryError::Cancelled),
                () = tokio::time::sleep(policy.delay) => {}
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicU32, Ordering};
    use std::sync::Arc;

    use tokio::time::Instant;

    use super::*;

    fn server_error() -> TransportFailure {
        TransportFailure::Status { status: 503, body: None }
    }

    /// Fails with `failure` for the first `failures` attempts, then succeeds.
    async fn flaky(
        calls: Arc<AtomicU32>,
        failures: u32,
        failure: TransportFailure,
    ) -> Result<&'static str, TransportFailure> {
        let call = calls.fetch_add(1, Ordering::SeqCst) + 1;
        if call <= failures {
            Err(failure)
        } else {
            Ok("ok")
        }
    }

    #[tokio::test(start_paused = true)]
    async fn succeeds_after_max_retries_transient_failures() {
        let policy = RetryPolicy::new(3, Duration::from_millis(100));
        let calls = Arc::new(AtomicU32::new(0));

        let result = run_with_retry(&policy, &CancellationToken::new(), |_| {
            flaky(calls.clone(), 3, server_error())
        })
        .await;

        assert_eq!(result, Ok("ok"));
        assert_eq!(calls.load(Ordering::SeqCst), 4);
    }

    #[tokio::test(start_paused = true)]
    async fn gives_up_after_max_retries_plus_one_attempts() {
        let policy = RetryPolicy::new(3, Duration::from_millis(100));
        let calls = Arc::new(AtomicU32::new(0));

        let result = run_with_retry(&policy, &CancellationToken::new(), |_| {
            flaky(calls.clone(), 4, TransportFailure::Network("connection refused".into()))
        })
        .await;

        match result {
            Err(RetryError::Failed { failure, attempts }) => {
                assert_eq!(attempts, 4);
                assert_eq!(failure, TransportFailure::Network("connection refused".into()));
            }
            other => panic!("expected exhausted retries, got {other:?}"),
        }
        assert_eq!(calls.load(Ordering::SeqCst), 4);
    }

    #[tokio::test(start_paused = true)]
    async fn client_errors_fail_on_first_attempt() {
        let policy = RetryPolicy::new(5, Duration::from_millis(100));
        let calls = Arc::new(AtomicU32::new(0));

        let result = run_with_retry(&policy, &CancellationToken::new(), |_| {
            flaky(calls.clone(), u32::MAX, TransportFailure::Status { status: 404, body: None })
        })
        .await;

        assert!(matches!(result, Err(RetryError::Failed { attempts: 1, .. })));
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn delay_between_attempts_is_constant() {
        let delay = Duration::from_millis(250);
        let policy = RetryPolicy::new(3, delay);
        let calls = Arc::new(AtomicU32::new(0));
        let started = Instant::now();

        let _ = run_with_retry(&policy, &CancellationToken::new(), |_| {
            flaky(calls.clone(), u32::MAX, TransportFailure::Timeout("elapsed".into()))
        })
        .await;

        // Three pauses of the same length, no growth between them.
        assert_eq!(started.elapsed(), delay * 3);
    }

    #[tokio::test(start_paused = true)]
    async fn attempt_numbers_are_one_based() {
        let policy = RetryPolicy::new(2, Duration::from_millis(10));
        let seen = Arc::new(parking_lot::Mutex::new(Vec::new()));

        let _ = run_with_retry(&policy, &CancellationToken::new(), |attempt| {
            let seen = seen.clone();
            async move {
                seen.lock().push(attempt);
                Err::<(), _>(server_error())
            }
        })
        .await;

        assert_eq!(*seen.lock(), vec![1, 2, 3]);
    }

    #[tokio::test]
    async fn zero_retries_means_single_attempt() {
        let calls = Arc::new(AtomicU32::new(0));

        let result = run_with_retry(&RetryPolicy::none(), &CancellationToken::new(), |_| {
            flaky(calls.clone(), 1, server_error())
        })
        .await;

        assert!(matches!(result, Err(RetryError::Failed { attempts: 1, .. })));
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn cancelled_token_stops_before_first_attempt() {
        let cancel = CancellationToken::new();
        cancel.cancel();
        let calls = Arc::new(AtomicU32::new(0));

        let result = run_with_retry(&RetryPolicy::new(3, Duration::from_millis(10)), &cancel, |_| {
            flaky(calls.clone(), 0, server_error())
        })
        .await;

        assert_eq!(result, Err(RetryError::Cancelled));
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn cancellation_interrupts_the_retry_pause() {
        let cancel = CancellationToken::new();
        let policy = RetryPolicy::new(3, Duration::from_secs(60));
        let calls = Arc::new(AtomicU32::new(0));

        let trigger = cancel.clone();
        tokio::spawn(async move {
            tokio::time::sleep(Duration::from_secs(1)).await;
            trigger.cancel();
        });

        let result = run_with_retry(&policy, &cancel, |_| {
            flaky(calls.clone(), u32::MAX, server_error())
        })
        .await;

        assert_eq!(result, Err(RetryError::Cancelled));
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }
}
