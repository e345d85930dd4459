//! Retry with linear backoff

use serde::{Deserialize, Serialize};
use std::fmt::Display;
use std::time::Duration;

/// How often and how patiently to retry an operation
///
/// The pause after attempt `n` is `delay_ms * n * backoff_factor`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RetryPolicy {
    /// Total attempts (at least one is always made)
    pub retries: u32,
    /// Base pause in milliseconds
    pub delay_ms: u64,
    /// Multiplier applied to the pause
    pub backoff_factor: f64,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            retries: 3,
            delay_ms: 1000,
            backoff_factor: 1.0,
        }
    }
}

impl RetryPolicy {
    /// Create default policy
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// With total attempts
    #[inline]
    #[must_use]
    pub fn with_retries(mut self, retries: u32) -> Self {
        self.retries = retries;
        self
    }

    /// With base pause
    #[inline]
    #[must_use]
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay_ms = u64::try_from(delay.as_millis()).unwrap_or(u64::MAX);
        self
    }

    /// With backoff multiplier
    #[inline]
    #[must_use]
    pub fn with_backoff_factor(mut self, factor: f64) -> Self {
        self.backoff_factor = factor;
        self
    }

    /// Pause taken after failed attempt number `attempt` (1-based)
    ///
    /// Negative, non-finite or overflowing products give no pause.
    #[must_use]
    pub fn pause(&self, attempt: u32) -> Duration {
        let base = Duration::from_millis(self.delay_ms).as_secs_f64();
        Duration::try_from_secs_f64(base * f64::from(attempt) * self.backoff_factor)
            .unwrap_or_default()
    }

    /// Run `op` until it succeeds, fails with an error `should_retry`
    /// rejects, or the attempts are used up
    ///
    /// There is no pause after the final attempt.
    ///
    /// # Errors
    /// Returns the last error produced by `op`
    pub fn run<T, E, F, P>(&self, mut should_retry: P, mut op: F) -> Result<T, E>
    where
        F: FnMut() -> Result<T, E>,
        P: FnMut(&E) -> bool,
        E: Display,
    {
        let attempts = self.retries.max(1);
        let mut attempt = 0;
        loop {
            attempt += 1;
            match op() {
                Ok(value) => return Ok(value),
                Err(err) if attempt < attempts && should_retry(&err) => {
                    let pause = self.pause(attempt);
                    tracing::warn!(
                        error = %err,
                        attempt,
                        pause_ms = u64::try_from(pause.as_millis()).unwrap_or(u64::MAX),
                        "attempt failed, retrying"
                    );
                    std::thread::sleep(pause);
                }
                Err(err) => return Err(err),
            }
        }
    }
}
