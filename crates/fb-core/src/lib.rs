//! # Introduction
//!
//! A non-blocking user feedback scheduler for devices with a buzzer and an
//! RGB LED, based on the
//! [`embedded-hal`](https://github.com/rust-embedded/embedded-hal) traits.
//!
//! Instead of sleeping between beeps, the host loop queues a number of beeps
//! and/or flashes and keeps calling [`PulseScheduler::poll`]. The scheduler
//! reads a millisecond [`Clock`] and, every time a full interval has passed,
//! moves the buzzer and the LED on by one half-cycle. A pulse is one "on"
//! half-cycle followed by one "off" half-cycle, so `n` pulses take
//! `2 * n * interval` milliseconds to play out.
//!
//! ## Collaborators
//!
//! - the buzzer is any [`OutputPin`](embedded_hal::digital::OutputPin),
//! - the LED is anything implementing [`TriColorActuator`], optionally
//!   [`Rebind`] to allow swapping its pins at runtime,
//! - time comes from a [`Clock`].
//!
//! ## Usage
//!
//! ```
//! use core::{cell::Cell, convert::Infallible};
//!
//! use embedded_hal::digital::{ErrorType, OutputPin};
//! use fb_core::{Clock, Color, Millis, Pattern, PulseScheduler, TriColorActuator};
//!
//! struct Uptime(Cell<Millis>);
//!
//! impl Clock for Uptime {
//!     fn now(&self) -> Millis {
//!         self.0.get()
//!     }
//! }
//!
//! struct Buzzer(bool);
//!
//! impl ErrorType for Buzzer {
//!     type Error = Infallible;
//! }
//!
//! impl OutputPin for Buzzer {
//!     fn set_low(&mut self) -> Result<(), Infallible> {
//!         self.0 = false;
//!         Ok(())
//!     }
//!
//!     fn set_high(&mut self) -> Result<(), Infallible> {
//!         self.0 = true;
//!         Ok(())
//!     }
//! }
//!
//! struct Led(Color);
//!
//! impl TriColorActuator for Led {
//!     type Error = Infallible;
//!
//!     fn set_color(&mut self, color: Color) -> Result<(), Infallible> {
//!         self.0 = color;
//!         Ok(())
//!     }
//! }
//!
//! let clock = Uptime(Cell::new(0));
//! let mut fb = PulseScheduler::new(&clock, Buzzer(false), Led(Color::OFF)).unwrap();
//!
//! fb.beep_and_flash(Pattern::new(2, Color::BLUE).interval(100));
//!
//! clock.0.set(100);
//! fb.poll().unwrap();
//! assert!(fb.is_beeping() && fb.is_flashing());
//!
//! clock.0.set(200);
//! fb.poll().unwrap();
//! assert!(!fb.is_beeping() && !fb.is_flashing());
//! assert_eq!(fb.pending_beeps(), 1);
//! ```
//!
//! ## Timing
//!
//! Time beyond one interval is dropped on every boundary, so a host loop that
//! stalls for several intervals only advances by one half-cycle when it comes
//! back. A clock that goes backwards is treated as if no time had passed.
#![deny(unsafe_code, missing_docs)]
#![no_std]

mod cadence;
mod scheduler;
mod toggle;
mod traits;
mod types;

pub use scheduler::PulseScheduler;
pub use traits::*;
pub use types::*;

/// All possible errors in this crate
#[derive(Debug, PartialEq, Eq, Clone)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error<B, L> {
    /// The buzzer pin rejected a command
    Buzzer(B),
    /// The LED driver rejected a command
    Led(L),
}
