/// What a toggle does on one half-cycle boundary.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub(crate) enum Step {
    /// A pending pulse starts: actuator on.
    On,
    /// The active pulse ends: actuator off.
    Off,
    /// Nothing pending, nothing active.
    Idle,
}

/// Pulse bookkeeping for one actuator.
///
/// A pulse is one "on" half-cycle followed by one "off" half-cycle. The
/// toggle only decides the next step; the caller commits it once the
/// actuator has accepted the command, so a failed write is retried on the
/// next boundary.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub(crate) struct Toggle {
    pending: u32,
    active: bool,
}

impl Toggle {
    pub(crate) const fn new() -> Self {
        Self {
            pending: 0,
            active: false,
        }
    }

    /// Replace the not-yet-started pulses. An active half-cycle is untouched.
    #[inline]
    pub(crate) fn request(&mut self, count: u32) {
        self.pending = count;
    }

    #[inline]
    pub(crate) const fn pending(&self) -> u32 {
        self.pending
    }

    #[inline]
    pub(crate) const fn is_active(&self) -> bool {
        self.active
    }

    #[inline]
    pub(crate) const fn is_idle(&self) -> bool {
        !self.active && self.pending == 0
    }

    pub(crate) const fn next_step(&self) -> Step {
        if self.active {
            Step::Off
        } else if self.pending > 0 {
            Step::On
        } else {
            Step::Idle
        }
    }

    pub(crate) fn commit(&mut self, step: Step) {
        match step {
            Step::On => {
                self.active = true;
                self.pending = self.pending.saturating_sub(1);
            }
            Step::Off => self.active = false,
            Step::Idle => {}
        }
    }

    #[cfg(test)]
    fn advance(&mut self) -> Step {
        let step = self.next_step();
        self.commit(step);
        step
    }
}
