use crate::Millis;

/// Accumulates clock readings into half-cycle boundaries.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub(crate) struct Cadence {
    last_poll: Millis,
    elapsed: Millis,
    interval: Millis,
}

impl Cadence {
    pub(crate) const fn new(now: Millis, interval: Millis) -> Self {
        Self {
            last_poll: now,
            elapsed: 0,
            interval,
        }
    }

    #[inline]
    pub(crate) const fn interval(&self) -> Millis {
        self.interval
    }

    #[inline]
    pub(crate) fn set_interval(&mut self, interval: Millis) {
        self.interval = interval;
    }

    #[cfg(test)]
    const fn elapsed(&self) -> Millis {
        self.elapsed
    }

    /// Feed a clock reading. Returns `true` when at least one interval has
    /// accumulated since the last boundary.
    ///
    /// A reading older than the previous one counts as no elapsed time. Time
    /// beyond one interval is dropped rather than carried into the next
    /// half-cycle.
    pub(crate) fn tick(&mut self, now: Millis) -> bool {
        if now < self.last_poll {
            fb_fmt::warn!("clock went backwards: {} -> {}", self.last_poll, now);
        }

        let delta = now.saturating_sub(self.last_poll);
        self.last_poll = now;
        self.elapsed = self.elapsed.saturating_add(delta);

        if self.elapsed < self.interval {
            return false;
        }

        self.elapsed = 0;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fires_once_per_interval() {
        let mut cadence = Cadence::new(0, 200);

        assert!(!cadence.tick(0));
        assert!(!cadence.tick(199));
        assert!(cadence.tick(200));
        assert_eq!(cadence.elapsed(), 0);
        assert!(!cadence.tick(300));
        assert!(cadence.tick(400));
    }

    #[test]
    fn accumulates_across_polls() {
        let mut cadence = Cadence::new(1_000, 200);

        for now in [1_050, 1_100, 1_150] {
            assert!(!cadence.tick(now));
        }
        assert_eq!(cadence.elapsed(), 150);
        assert!(cadence.tick(1_200));
    }

    #[test]
    fn excess_time_is_dropped() {
        let mut cadence = Cadence::new(0, 200);

        // Five intervals late still only yields one boundary.
        assert!(cadence.tick(1_000));
        assert_eq!(cadence.elapsed(), 0);
        assert!(!cadence.tick(1_199));
        assert!(cadence.tick(1_200));
    }

    #[test]
    fn clock_regression_counts_as_zero() {
        let mut cadence = Cadence::new(500, 200);

        assert!(!cadence.tick(600));
        assert!(!cadence.tick(100));
        assert_eq!(cadence.elapsed(), 100);

        // Measured from the regressed reading.
        assert!(!cadence.tick(199));
        assert!(cadence.tick(200));
    }

    #[test]
    fn zero_interval_fires_every_tick() {
        let mut cadence = Cadence::new(0, 0);

        assert!(cadence.tick(0));
        assert!(cadence.tick(0));
        assert!(cadence.tick(1));
    }

    #[test]
    fn interval_change_applies_to_next_tick() {
        let mut cadence = Cadence::new(0, 200);
        assert!(!cadence.tick(100));

        cadence.set_interval(50);
        assert_eq!(cadence.interval(), 50);
        assert!(cadence.tick(100));
    }
}
