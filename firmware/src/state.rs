use embassy_sync::{blocking_mutex::raw::ThreadModeRawMutex, signal::Signal};
use fb_core::{Color, Pattern, PulseScheduler};

/// A feedback request handed to the task that owns the scheduler.
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Request {
    Beep(u32),
    Flash { count: u32, on: Color, off: Color },
    Pattern(Pattern),
}

impl Request {
    pub fn apply<C, B, L>(self, fb: &mut PulseScheduler<C, B, L>) {
        match self {
            Request::Beep(count) => fb.beep(count),
            Request::Flash { count, on, off } => fb.flash(count, on, off),
            Request::Pattern(pattern) => fb.beep_and_flash(pattern),
        }
    }
}

/// Latest request wins: a newer one replaces a request not yet picked up,
/// the same way the scheduler replaces pulses not yet started.
pub static FEEDBACK_REQUEST: Signal<ThreadModeRawMutex, Request> = Signal::new();
