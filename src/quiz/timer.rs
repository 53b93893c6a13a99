/// Round countdown with generation-stamped handles.
///
/// One timer per session. Starting a new countdown implicitly cancels the
/// old one by bumping the generation, so a handle from a finished round can
/// never touch the current round's countdown — stale cancels and stale
/// timeout polls are structural no-ops.
///
/// All entry points take an explicit `now` instead of reading the clock,
/// which keeps the session state machine deterministic under test.

use std::time::{Duration, Instant};

/// Identity of one started countdown. Compared by generation only.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct TimerHandle(u64);

#[derive(Debug)]
struct ActiveTimer {
    generation: u64,
    deadline: Instant,
    fired: bool,
}

#[derive(Debug)]
pub struct RoundTimer {
    generation: u64,
    active: Option<ActiveTimer>,
}

impl RoundTimer {
    pub fn new() -> Self {
        RoundTimer { generation: 0, active: None }
    }

    /// Start a countdown, cancelling any prior one.
    pub fn start(&mut self, duration: Duration, now: Instant) -> TimerHandle {
        self.generation += 1;
        self.active = Some(ActiveTimer {
            generation: self.generation,
            deadline: now + duration,
            fired: false,
        });
        TimerHandle(self.generation)
    }

    /// Cancel the countdown identified by `handle`. Idempotent; a stale
    /// handle (older generation, or already cancelled/fired) does nothing.
    pub fn cancel(&mut self, handle: TimerHandle) {
        if let Some(active) = &self.active {
            if active.generation == handle.0 {
                self.active = None;
            }
        }
    }

    /// True exactly once per countdown, at the first poll at-or-after the
    /// deadline. Subsequent polls return false.
    pub fn poll_timeout(&mut self, now: Instant) -> bool {
        match &mut self.active {
            Some(active) if !active.fired && now >= active.deadline => {
                active.fired = true;
                true
            }
            _ => false,
        }
    }

    /// Milliseconds until the deadline, clamped to 0. Monotone
    /// non-increasing for a fixed countdown; 0 once fired or cancelled.
    pub fn remaining_ms(&self, now: Instant) -> u64 {
        match &self.active {
            Some(active) if !active.fired => active
                .deadline
                .saturating_duration_since(now)
                .as_millis() as u64,
            _ => 0,
        }
    }

    pub fn is_running(&self) -> bool {
        matches!(&self.active, Some(a) if !a.fired)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn t0() -> Instant {
        Instant::now()
    }

    #[test]
    fn fires_once_at_deadline() {
        let start = t0();
        let mut timer = RoundTimer::new();
        timer.start(Duration::from_millis(100), start);

        assert!(!timer.poll_timeout(start + Duration::from_millis(99)));
        assert!(timer.poll_timeout(start + Duration::from_millis(100)));
        assert!(!timer.poll_timeout(start + Duration::from_millis(200)));
    }

    #[test]
    fn cancel_is_idempotent() {
        let start = t0();
        let mut timer = RoundTimer::new();
        let h = timer.start(Duration::from_millis(100), start);
        timer.cancel(h);
        timer.cancel(h);
        assert!(!timer.poll_timeout(start + Duration::from_millis(500)));
        assert_eq!(timer.remaining_ms(start), 0);
    }

    #[test]
    fn cancel_after_fire_has_no_effect() {
        let start = t0();
        let mut timer = RoundTimer::new();
        let h = timer.start(Duration::from_millis(50), start);
        assert!(timer.poll_timeout(start + Duration::from_millis(50)));
        timer.cancel(h);
        assert!(!timer.poll_timeout(start + Duration::from_millis(100)));
    }

    #[test]
    fn stale_handle_cannot_cancel_new_countdown() {
        let start = t0();
        let mut timer = RoundTimer::new();
        let old = timer.start(Duration::from_millis(100), start);
        let _new = timer.start(Duration::from_millis(100), start);
        timer.cancel(old);
        assert!(timer.is_running());
        assert!(timer.poll_timeout(start + Duration::from_millis(100)));
    }

    #[test]
    fn starting_cancels_prior_countdown() {
        let start = t0();
        let mut timer = RoundTimer::new();
        timer.start(Duration::from_millis(10), start);
        timer.start(Duration::from_millis(100), start + Duration::from_millis(5));
        // Old deadline (start+10ms) passes without a timeout firing.
        assert!(!timer.poll_timeout(start + Duration::from_millis(50)));
        assert!(timer.poll_timeout(start + Duration::from_millis(105)));
    }

    #[test]
    fn remaining_is_monotone_and_clamped() {
        let start = t0();
        let mut timer = RoundTimer::new();
        timer.start(Duration::from_millis(100), start);

        let mut prev = u64::MAX;
        for ms in [0u64, 30, 60, 90, 100, 150] {
            let r = timer.remaining_ms(start + Duration::from_millis(ms));
            assert!(r <= prev);
            prev = r;
        }
        assert_eq!(timer.remaining_ms(start + Duration::from_millis(150)), 0);
    }
}
