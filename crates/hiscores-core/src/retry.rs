//! Retry strategies for callers of the Hiscores client.
//!
//! The client itself makes a single attempt. Callers that want to ride out an
//! upstream outage wrap the call in one of these strategies, usually with
//! [`Error::is_retryable`](crate::Error::is_retryable) as the predicate.

use std::time::Duration;

use tracing::debug;

use crate::config::retry as retry_config;

pub trait RetryStrategy {
    /// Maximum number of attempts, including the first.
    fn max_attempts(&self) -> u32;

    /// Delay after the given failed attempt (0-indexed).
    fn delay_for_attempt(&self, attempt: u32) -> Option<Duration>;

    /// Call `f` until it succeeds or attempts run out.
    fn execute<T, E, F>(&self, f: F) -> Result<T, E>
    where
        F: FnMut(u32) -> Result<T, E>,
    {
        self.execute_when(|_| true, f)
    }

    /// Like [`execute`](Self::execute), but stop early on errors the
    /// predicate rejects.
    fn execute_when<T, E, P, F>(&self, should_retry: P, mut f: F) -> Result<T, E>
    where
        P: Fn(&E) -> bool,
        F: FnMut(u32) -> Result<T, E>,
    {
        let max = self.max_attempts().max(1);
        let mut attempt = 0;

        loop {
            match f(attempt) {
                Ok(value) => return Ok(value),
                Err(e) => {
                    if attempt + 1 >= max || !should_retry(&e) {
                        return Err(e);
                    }
                    if let Some(delay) = self.delay_for_attempt(attempt) {
                        debug!(attempt, delay_ms = delay.as_millis() as u64, "Retrying");
                        std::thread::sleep(delay);
                    }
                    attempt += 1;
                }
            }
        }
    }
}

/// Exponential backoff using the delays in `config::retry`.
#[derive(Debug, Clone)]
pub struct ExponentialBackoff {
    max_attempts: u32,
}

impl ExponentialBackoff {
    pub fn new() -> Self {
        Self {
            max_attempts: retry_config::MAX_ATTEMPTS,
        }
    }

    /// Cap the number of attempts (never above the configured delay table + 1).
    pub fn with_max_attempts(max_attempts: u32) -> Self {
        Self {
            max_attempts: max_attempts.min(retry_config::MAX_ATTEMPTS),
        }
    }
}

impl Default for ExponentialBackoff {
    fn default() -> Self {
        Self::new()
    }
}

impl RetryStrategy for ExponentialBackoff {
    fn max_attempts(&self) -> u32 {
        self.max_attempts
    }

    fn delay_for_attempt(&self, attempt: u32) -> Option<Duration> {
        retry_config::RETRY_DELAYS_MS
            .get(attempt as usize)
            .map(|&ms| Duration::from_millis(ms))
    }
}

/// Waits a constant duration between attempts.
#[derive(Debug, Clone)]
pub struct FixedDelay {
    max_attempts: u32,
    delay: Duration,
}

impl FixedDelay {
    pub fn new(max_attempts: u32, delay: Duration) -> Self {
        Self {
            max_attempts,
            delay,
        }
    }
}

impl RetryStrategy for FixedDelay {
    fn max_attempts(&self) -> u32 {
        self.max_attempts
    }

    fn delay_for_attempt(&self, _attempt: u32) -> Option<Duration> {
        Some(self.delay)
    }
}

#[derive(Debug, Clone, Default)]
pub struct NoRetry;

impl NoRetry {
    pub fn new() -> Self {
        Self
    }
}

impl RetryStrategy for NoRetry {
    fn max_attempts(&self) -> u32 {
        1
    }

    fn delay_for_attempt(&self, _attempt: u32) -> Option<Duration> {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exponential_backoff_delays() {
        let strategy = ExponentialBackoff::new();
        assert_eq!(strategy.max_attempts(), 5);
        assert_eq!(strategy.delay_for_attempt(0), Some(Duration::from_secs(2)));
        assert_eq!(strategy.delay_for_attempt(4), Some(Duration::from_secs(32)));
        assert_eq!(strategy.delay_for_attempt(5), None);
    }

    #[test]
    fn test_exponential_backoff_cap() {
        assert_eq!(ExponentialBackoff::with_max_attempts(2).max_attempts(), 2);
        assert_eq!(ExponentialBackoff::with_max_attempts(50).max_attempts(), 5);
    }

    #[test]
    fn test_execute_success_after_retry() {
        let strategy = FixedDelay::new(3, Duration::from_millis(1));
        let mut attempts = 0;
        let result: Result<i32, &str> = strategy.execute(|_| {
            attempts += 1;
            if attempts < 3 { Err("not yet") } else { Ok(42) }
        });
        assert_eq!(result, Ok(42));
        assert_eq!(attempts, 3);
    }

    #[test]
    fn test_execute_all_failures() {
        let strategy = FixedDelay::new(3, Duration::from_millis(1));
        let mut attempts = 0;
        let result: Result<i32, &str> = strategy.execute(|_| {
            attempts += 1;
            Err("always fails")
        });
        assert_eq!(result, Err("always fails"));
        assert_eq!(attempts, 3);
    }

    #[test]
    fn test_execute_when_stops_on_permanent_error() {
        let strategy = FixedDelay::new(5, Duration::from_millis(1));
        let mut attempts = 0;
        let result: Result<i32, &str> = strategy.execute_when(
            |e| *e == "transient",
            |_| {
                attempts += 1;
                if attempts == 1 { Err("transient") } else { Err("permanent") }
            },
        );
        assert_eq!(result, Err("permanent"));
        assert_eq!(attempts, 2);
    }

    #[test]
    fn test_no_retry() {
        let strategy = NoRetry::new();
        let mut attempts = 0;
        let result: Result<i32, &str> = strategy.execute(|_| {
            attempts += 1;
            Err("failed")
        });
        assert_eq!(result, Err("failed"));
        assert_eq!(attempts, 1);
    }

    #[test]
    fn test_attempt_index_is_passed() {
        let strategy = FixedDelay::new(3, Duration::from_millis(1));
        let mut seen = Vec::new();
        let _: Result<(), ()> = strategy.execute(|attempt| {
            seen.push(attempt);
            Err(())
        });
        assert_eq!(seen, vec![0, 1, 2]);
    }
}
