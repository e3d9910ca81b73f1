//! Auto-advance scheduling.

use std::time::{Duration, Instant};

use rand::Rng;

/// Recurring auto-advance deadline with optional per-cycle jitter.
///
/// Owned by a [`Rotation`](super::Rotation) instance rather than living as a
/// free-floating timer handle, so stopping the rotation always stops its
/// timer. Each cycle draws a fresh delay of `interval + random(0..=jitter)`;
/// with jitter, independently-phased rotations on one page drift apart
/// instead of pulsing together.
#[derive(Debug, Clone)]
pub struct AutoAdvance {
    interval: Duration,
    jitter: Duration,
    next_at: Option<Instant>,
}

impl AutoAdvance {
    pub fn new(interval: Duration, jitter: Duration) -> Self {
        Self {
            interval,
            jitter,
            next_at: None,
        }
    }

    /// Begin firing. No-op while already running, so a host re-sending its
    /// start message does not reshuffle the deadline.
    pub fn start(&mut self, now: Instant) {
        if self.next_at.is_some() {
            return;
        }
        self.next_at = Some(now + self.next_delay());
    }

    /// Cancel the deadline. Idempotent.
    pub fn stop(&mut self) {
        self.next_at = None;
    }

    pub fn is_running(&self) -> bool {
        self.next_at.is_some()
    }

    pub fn next_deadline(&self) -> Option<Instant> {
        self.next_at
    }

    /// Whether a deadline has come due at `now`. A due deadline fires at most
    /// once per call and reschedules from `now`, so a host that stalled past
    /// several deadlines sees one fire, not a catch-up burst.
    pub fn due(&mut self, now: Instant) -> bool {
        match self.next_at {
            Some(at) if now >= at => {
                self.next_at = Some(now + self.next_delay());
                true
            }
            _ => false,
        }
    }

    fn next_delay(&self) -> Duration {
        if self.jitter.is_zero() {
            return self.interval;
        }
        let extra_ms =
            rand::rng().random_range(0..=self.jitter.as_millis() as u64);
        self.interval + Duration::from_millis(extra_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const INTERVAL: Duration = Duration::from_secs(5);

    #[test]
    fn fires_once_per_elapsed_interval() {
        let t0 = Instant::now();
        let mut auto = AutoAdvance::new(INTERVAL, Duration::ZERO);
        auto.start(t0);

        assert!(!auto.due(t0 + Duration::from_secs(4)));
        assert!(auto.due(t0 + Duration::from_secs(5)));
        assert!(!auto.due(t0 + Duration::from_secs(6)));
        assert!(auto.due(t0 + Duration::from_secs(10)));
    }

    #[test]
    fn stop_is_idempotent_and_silences_deadlines() {
        let t0 = Instant::now();
        let mut auto = AutoAdvance::new(INTERVAL, Duration::ZERO);
        auto.start(t0);
        auto.stop();
        auto.stop();
        assert!(!auto.is_running());
        assert!(!auto.due(t0 + Duration::from_secs(60)));
    }

    #[test]
    fn start_while_running_keeps_the_deadline() {
        let t0 = Instant::now();
        let mut auto = AutoAdvance::new(INTERVAL, Duration::ZERO);
        auto.start(t0);
        let first = auto.next_deadline();
        auto.start(t0 + Duration::from_secs(3));
        assert_eq!(auto.next_deadline(), first);
    }

    #[test]
    fn restart_after_stop_schedules_a_fresh_interval() {
        let t0 = Instant::now();
        let mut auto = AutoAdvance::new(INTERVAL, Duration::ZERO);
        auto.start(t0);
        auto.stop();

        // Resuming 2s in does not inherit the partial countdown.
        let resume = t0 + Duration::from_secs(2);
        auto.start(resume);
        assert_eq!(auto.next_deadline(), Some(resume + INTERVAL));
    }

    #[test]
    fn jittered_delays_stay_in_band() {
        let t0 = Instant::now();
        let jitter = Duration::from_secs(2);
        let mut auto = AutoAdvance::new(INTERVAL, jitter);
        auto.start(t0);

        let mut now = t0;
        for _ in 0..50 {
            let deadline = auto.next_deadline().unwrap();
            let delay = deadline.duration_since(now);
            assert!(delay >= INTERVAL, "delay {delay:?} under interval");
            assert!(delay <= INTERVAL + jitter, "delay {delay:?} over band");
            now = deadline;
            assert!(auto.due(now));
        }
    }
}
