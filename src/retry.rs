use std::time::Duration;

use tracing::warn;

/// How many times a failing write is attempted and how long the first wait
/// between attempts is. Owned by the client, immutable for its lifetime.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RetryPolicy {
    pub max_attempts: usize,
    pub base_backoff: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        return Self {
            max_attempts: 5,
            base_backoff: Duration::from_secs(1),
        };
    }
}

pub struct ExponentialBackoff {
    left_retries: usize,
    current: Duration,
    factor: u32,
}

impl ExponentialBackoff {
    pub fn new(retries: usize, base: Duration) -> Self {
        return Self {
            left_retries: retries,
            current: base,
            factor: 2,
        };
    }
}

impl Iterator for ExponentialBackoff {
    type Item = Duration;

    fn next(&mut self) -> Option<Duration> {
        if self.left_retries == 0 {
            return None;
        }
        let duration = self.current;
        self.current *= self.factor;
        self.left_retries -= 1;

        return Some(duration);
    }
}

/// Runs `work` up to `policy.max_attempts` times, sleeping on the calling
/// thread between attempts. The first wait is `base_backoff`, doubling after
/// every failure. On exhaustion the error of the last attempt is returned
/// unchanged.
///
/// Any failure is retried, including ones that can never succeed (e.g. a
/// malformed payload). Callers rely on this, so it stays error-type agnostic.
pub fn execute<T, E: std::fmt::Display>(
    policy: &RetryPolicy,
    mut work: impl FnMut() -> Result<T, E>,
) -> Result<T, E> {
    assert!(policy.max_attempts >= 1, "At least one attempt is required");
    let mut backoff = ExponentialBackoff::new(policy.max_attempts - 1, policy.base_backoff);
    loop {
        match work() {
            Ok(value) => return Ok(value),
            Err(err) => match backoff.next() {
                Some(wait) => {
                    warn!("Write attempt failed: {err}. Retrying in {wait:?}");
                    std::thread::sleep(wait);
                }
                None => return Err(err),
            },
        }
    }
}
