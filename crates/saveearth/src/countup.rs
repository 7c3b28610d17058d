//! Monotone integer ramp used by the animated statistic counters.

use std::time::Duration;

/// Update rate of a running ramp.
pub const TICKS_PER_SECOND: u32 = 60;

/// Wall-clock spacing between two ticks.
pub const TICK: Duration = Duration::from_millis(1000 / TICKS_PER_SECOND as u64);

/// How long a counter takes to reach its target unless told otherwise.
pub const DEFAULT_DURATION: Duration = Duration::from_secs(2);

/// Counts from zero up to a target value over a fixed duration.
///
/// Each [`tick`](CountUp::tick) advances the ramp by one frame and returns
/// the value to display. The displayed sequence starts at zero, never
/// decreases, never overshoots, and lands exactly on the target after
/// `duration * 60` ticks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountUp {
    target: u64,
    total_ticks: u64,
    ticks: u64,
}

impl CountUp {
    pub fn new(target: u64, duration: Duration) -> Self {
        let total_ticks =
            (duration.as_secs_f64() * f64::from(TICKS_PER_SECOND)).round() as u64;
        Self {
            target,
            total_ticks,
            ticks: 0,
        }
    }

    pub fn with_default_duration(target: u64) -> Self {
        Self::new(target, DEFAULT_DURATION)
    }

    pub fn target(&self) -> u64 {
        self.target
    }

    /// The value the counter currently displays.
    pub fn shown(&self) -> u64 {
        if self.ticks >= self.total_ticks {
            return self.target;
        }
        ((u128::from(self.target) * u128::from(self.ticks)) / u128::from(self.total_ticks))
            as u64
    }

    /// Whether the ramp has reached its target and stopped moving.
    pub fn is_done(&self) -> bool {
        self.ticks >= self.total_ticks
    }

    /// Advances one frame and returns the new display value.
    ///
    /// Ticking past the end is harmless; the value stays pinned at the
    /// target.
    pub fn tick(&mut self) -> u64 {
        if self.ticks < self.total_ticks {
            self.ticks += 1;
        }
        self.shown()
    }

    /// Aims the ramp at a new target, restarting from zero.
    pub fn retarget(&mut self, target: u64, duration: Duration) {
        *self = Self::new(target, duration);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_at_zero() {
        let ramp = CountUp::with_default_duration(124_587);
        assert_eq!(ramp.shown(), 0);
        assert!(!ramp.is_done());
    }

    #[test]
    fn is_monotone_and_never_overshoots() {
        let mut ramp = CountUp::with_default_duration(842);
        let mut previous = 0;
        for _ in 0..200 {
            let shown = ramp.tick();
            assert!(shown >= previous);
            assert!(shown <= 842);
            previous = shown;
        }
    }

    #[test]
    fn lands_exactly_on_target_at_the_last_frame() {
        let mut ramp = CountUp::new(124_587, Duration::from_secs(2));
        for _ in 0..119 {
            ramp.tick();
            assert!(!ramp.is_done());
        }
        assert_eq!(ramp.tick(), 124_587);
        assert!(ramp.is_done());
    }

    #[test]
    fn stays_pinned_after_completion() {
        let mut ramp = CountUp::new(72, Duration::from_secs(1));
        for _ in 0..60 {
            ramp.tick();
        }
        assert_eq!(ramp.tick(), 72);
        assert_eq!(ramp.shown(), 72);
    }

    #[test]
    fn small_targets_still_reach_the_end() {
        // Fewer units than frames: the floor keeps the display at zero for
        // a while, then steps up without skipping past the target.
        let mut ramp = CountUp::new(3, Duration::from_secs(2));
        let mut last = 0;
        while !ramp.is_done() {
            last = ramp.tick();
        }
        assert_eq!(last, 3);
    }

    #[test]
    fn zero_target_completes_on_the_last_tick_at_zero() {
        let mut ramp = CountUp::with_default_duration(0);
        for _ in 0..120 {
            assert_eq!(ramp.tick(), 0);
        }
        assert!(ramp.is_done());
    }

    #[test]
    fn zero_duration_is_immediately_done() {
        let ramp = CountUp::new(500, Duration::ZERO);
        assert!(ramp.is_done());
        assert_eq!(ramp.shown(), 500);
    }

    #[test]
    fn retarget_restarts_from_zero() {
        let mut ramp = CountUp::with_default_duration(100);
        for _ in 0..120 {
            ramp.tick();
        }
        assert!(ramp.is_done());

        ramp.retarget(500, DEFAULT_DURATION);
        assert_eq!(ramp.shown(), 0);
        assert!(!ramp.is_done());
    }
}
