//! Bounded retry with backoff, used to wait for the database at startup.
//!
//! The default policy reproduces a fixed schedule of 30 attempts one second
//! apart. Raising [`RetryPolicy::multiplier`] above `1.0` turns it into an
//! exponential backoff clamped at [`RetryPolicy::max_delay`].

use std::fmt::Display;
use std::future::Future;
use std::time::Duration;

/// Tunable parameters for [`retry`].
#[derive(Debug, Clone, PartialEq)]
pub struct RetryPolicy {
    /// Total number of attempts, including the first. Values below 1 are
    /// treated as 1.
    pub max_attempts: u32,
    /// Delay between the first failure and the second attempt.
    pub initial_delay: Duration,
    /// Upper bound on the delay between attempts.
    pub max_delay: Duration,
    /// Factor by which the delay grows after each failure.
    pub multiplier: f64,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 30,
            initial_delay: Duration::from_secs(1),
            max_delay: Duration::from_secs(30),
            multiplier: 1.0,
        }
    }
}

impl RetryPolicy {
    /// Fixed-interval policy: `max_attempts` tries, `interval` apart.
    pub fn fixed(max_attempts: u32, interval: Duration) -> Self {
        Self {
            max_attempts,
            initial_delay: interval,
            max_delay: interval,
            multiplier: 1.0,
        }
    }
}

/// Calculate the next delay from the current one.
///
/// The result is clamped to [`RetryPolicy::max_delay`].
pub fn next_delay(current: Duration, policy: &RetryPolicy) -> Duration {
    let next_ms = (current.as_millis() as f64 * policy.multiplier) as u64;
    Duration::from_millis(next_ms).min(policy.max_delay)
}

/// Run `op` until it succeeds or the attempt budget is exhausted.
///
/// Every failed attempt except the last is logged and followed by a sleep.
/// On exhaustion the error from the final attempt is returned.
pub async fn retry<T, E, F, Fut>(policy: &RetryPolicy, target: &str, mut op: F) -> Result<T, E>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, E>>,
    E: Display,
{
    let max_attempts = policy.max_attempts.max(1);
    let mut delay = policy.initial_delay;
    let mut attempt = 0u32;

    loop {
        attempt += 1;
        match op().await {
            Ok(value) => return Ok(value),
            Err(e) if attempt >= max_attempts => {
                tracing::error!(
                    target_name = target,
                    attempt,
                    max_attempts,
                    error = %e,
                    "Giving up waiting for {target}",
                );
                return Err(e);
            }
            Err(e) => {
                tracing::warn!(
                    target_name = target,
                    attempt,
                    max_attempts,
                    delay_ms = delay.as_millis() as u64,
                    error = %e,
                    "Waiting for {target}",
                );
            }
        }

        tokio::time::sleep(delay).await;
        delay = next_delay(delay, policy);
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicU32, Ordering};

    use super::*;

    #[test]
    fn default_policy_is_thirty_one_second_attempts() {
        let policy = RetryPolicy::default();
        assert_eq!(policy.max_attempts, 30);
        assert_eq!(policy.initial_delay, Duration::from_secs(1));
        assert_eq!(next_delay(policy.initial_delay, &policy), Duration::from_secs(1));
    }

    #[test]
    fn next_delay_clamps_at_max() {
        let policy = RetryPolicy {
            multiplier: 2.0,
            max_delay: Duration::from_secs(10),
            ..Default::default()
        };
        let expected = [1, 2, 4, 8, 10, 10];
        let mut delay = policy.initial_delay;
        for &secs in &expected {
            assert_eq!(delay.as_secs(), secs);
            delay = next_delay(delay, &policy);
        }
    }

    #[tokio::test]
    async fn returns_first_success() {
        let calls = AtomicU32::new(0);
        let policy = RetryPolicy::fixed(5, Duration::from_millis(1));

        let result: Result<u32, String> = retry(&policy, "test", || {
            let n = calls.fetch_add(1, Ordering::SeqCst) + 1;
            async move {
                if n < 3 {
                    Err(format!("attempt {n} failed"))
                } else {
                    Ok(n)
                }
            }
        })
        .await;

        assert_eq!(result, Ok(3));
        assert_eq!(calls.load(Ordering::SeqCst), 3);
    }

    #[tokio::test]
    async fn exhausted_budget_returns_last_error() {
        let calls = AtomicU32::new(0);
        let policy = RetryPolicy::fixed(4, Duration::from_millis(1));

        let result: Result<(), String> = retry(&policy, "test", || {
            let n = calls.fetch_add(1, Ordering::SeqCst) + 1;
            async move { Err(format!("attempt {n} failed")) }
        })
        .await;

        assert_eq!(result, Err("attempt 4 failed".to_string()));
        assert_eq!(calls.load(Ordering::SeqCst), 4);
    }

    #[tokio::test]
    async fn zero_attempts_still_tries_once() {
        let calls = AtomicU32::new(0);
        let policy = RetryPolicy::fixed(0, Duration::from_millis(1));

        let result: Result<(), &str> = retry(&policy, "test", || {
            calls.fetch_add(1, Ordering::SeqCst);
            async { Err("down") }
        })
        .await;

        assert!(result.is_err());
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }
}
