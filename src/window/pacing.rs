use std::time::{Duration, Instant};

/// Holds a fixed tick rate on top of whatever rate the display delivers frames at.
///
/// When a tick overruns its slot the schedule is re-anchored at the current
/// instant instead of trying to catch up with a burst of short ticks.
pub struct TickPacer {
    interval: Duration,
    next_tick: Instant
}

impl TickPacer {
    pub fn new(interval: Duration, start: Instant) -> Self {
        Self {
            interval,
            next_tick: start + interval
        }
    }

    /// Returns how long to sleep before the next tick may start, or `None` if we are late
    pub fn schedule_next(&mut self, now: Instant) -> Option<Duration> {
        if now >= self.next_tick {
            self.next_tick = now + self.interval;
            return None;
        }
        let pause = self.next_tick - now;
        self.next_tick += self.interval;
        Some(pause)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TICK: Duration = Duration::from_millis(16);

    #[test]
    fn test_early_tick_sleeps_the_remainder() {
        let start = Instant::now();
        let mut pacer = TickPacer::new(TICK, start);
        let pause = pacer.schedule_next(start + Duration::from_millis(6));
        assert_eq!(pause, Some(Duration::from_millis(10)));
        let pause = pacer.schedule_next(start + Duration::from_millis(20));
        assert_eq!(pause, Some(Duration::from_millis(12)));
    }

    #[test]
    fn test_late_tick_re_anchors() {
        let start = Instant::now();
        let mut pacer = TickPacer::new(TICK, start);
        assert_eq!(pacer.schedule_next(start + Duration::from_millis(50)), None);
        // next slot counts from the late instant, not from the missed schedule
        let pause = pacer.schedule_next(start + Duration::from_millis(56));
        assert_eq!(pause, Some(Duration::from_millis(10)));
    }
}
