use std::time::Duration;

/// Fixed backoff schedule for the sign-in sequence.
///
/// `delays[n]` is the wait after attempt `n` (0-based) fails with a transient
/// signal; indexes past the end reuse the last entry.
#[derive(Debug, Clone)]
pub struct RetrySchedule {
    pub max_attempts: usize,
    pub delays: Vec<Duration>,
}

impl Default for RetrySchedule {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            delays: vec![
                Duration::from_secs(3),
                Duration::from_secs(5),
                Duration::from_secs(8),
            ],
        }
    }
}

impl RetrySchedule {
    pub fn delay(&self, attempt: usize) -> Duration {
        self.delays
            .get(attempt)
            .or_else(|| self.delays.last())
            .copied()
            .unwrap_or(Duration::ZERO)
    }

    pub fn is_last(&self, attempt: usize) -> bool {
        attempt + 1 >= self.max_attempts
    }
}
