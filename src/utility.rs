use std::time::{Duration, Instant};

/// Logs how long the enclosing scope took once dropped
pub struct StopWatch {
    instant: Instant,
    name: &'static str
}

impl StopWatch {
    pub fn named(name: &'static str) -> Self {
        Self { name, instant: Instant::now() }
    }
}

impl Drop for StopWatch {
    fn drop(&mut self) {
        log::debug!("{}: {} ms", self.name, self.instant.elapsed().as_secs_f32() * 1000.0)
    }
}

/// Whole milliseconds in `elapsed`, pinned at `u64::MAX` instead of wrapping
pub fn saturating_millis(elapsed: Duration) -> u64 {
    u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX)
}
