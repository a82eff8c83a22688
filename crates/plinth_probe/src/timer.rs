//! Interval timer for scan scheduling

use std::time::{Duration, Instant};

/// Fixed-interval timer driving auto-refresh and the network re-check
#[derive(Clone, Copy, Debug)]
pub struct ScanTimer {
    interval: Duration,
    last: Instant,
}

impl ScanTimer {
    /// Create a timer whose interval starts counting from `now`
    pub fn new(interval: Duration, now: Instant) -> Self {
        Self { interval, last: now }
    }

    /// True once a full interval has elapsed since the last reset
    pub fn due(&self, now: Instant) -> bool {
        now.duration_since(self.last) >= self.interval
    }

    /// Restart the interval from `now`
    pub fn reset(&mut self, now: Instant) {
        self.last = now;
    }

    /// Seconds since the last reset
    pub fn elapsed_secs(&self, now: Instant) -> f32 {
        now.duration_since(self.last).as_secs_f32()
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_due_before_interval() {
        let start = Instant::now();
        let timer = ScanTimer::new(Duration::from_secs(10), start);
        assert!(!timer.due(start));
        assert!(!timer.due(start + Duration::from_secs(9)));
    }

    #[test]
    fn test_due_after_interval() {
        let start = Instant::now();
        let timer = ScanTimer::new(Duration::from_secs(10), start);
        assert!(timer.due(start + Duration::from_secs(10)));
        assert!(timer.due(start + Duration::from_secs(11)));
    }

    #[test]
    fn test_reset_restarts_interval() {
        let start = Instant::now();
        let mut timer = ScanTimer::new(Duration::from_secs(5), start);
        let later = start + Duration::from_secs(6);
        assert!(timer.due(later));
        timer.reset(later);
        assert!(!timer.due(later + Duration::from_secs(4)));
        assert!(timer.due(later + Duration::from_secs(5)));
    }

    #[test]
    fn test_elapsed_secs() {
        let start = Instant::now();
        let timer = ScanTimer::new(Duration::from_secs(10), start);
        let elapsed = timer.elapsed_secs(start + Duration::from_millis(2500));
        assert!((elapsed - 2.5).abs() < 0.001);
    }
}
