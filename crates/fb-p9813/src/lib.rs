//! # Introduction
//!
//! A platform agnostic driver for chains of P9813 RGB LEDs (as found on
//! "chainable" RGB LED modules), based on the
//! [`embedded-hal`](https://github.com/rust-embedded/embedded-hal) traits.
//!
//! The P9813 is driven over a two-wire clock/data interface which this
//! driver bit-bangs on two output pins. Each update resends the whole chain:
//! a start frame of 32 zero bits, one 32-bit frame per LED, and an end frame
//! of 32 zero bits.
//!
//! ## Usage
//!
//! ```no_run
//! # use core::convert::Infallible;
//! # use embedded_hal::{delay::DelayNs, digital::{ErrorType, OutputPin}};
//! # struct Pin;
//! # impl ErrorType for Pin { type Error = Infallible; }
//! # impl OutputPin for Pin {
//! #     fn set_low(&mut self) -> Result<(), Infallible> { Ok(()) }
//! #     fn set_high(&mut self) -> Result<(), Infallible> { Ok(()) }
//! # }
//! # struct Delay;
//! # impl DelayNs for Delay { fn delay_ns(&mut self, _: u32) {} }
//! use fb_core::Color;
//! use fb_p9813::P9813;
//!
//! // Two LEDs on one data/clock pair.
//! let mut chain: P9813<_, _, _, 2> = P9813::new(Pin, Pin, Delay).unwrap();
//!
//! chain.set_led_color(0, Color::RED).unwrap();
//! chain.set_color_rgb(1, 0, 128, 255).unwrap();
//! ```
//!
//! The driver also implements [`TriColorActuator`](fb_core::TriColorActuator)
//! (addressing the first LED of the chain) and [`Rebind`](fb_core::Rebind),
//! so it can be handed to a [`PulseScheduler`](fb_core::PulseScheduler).
#![deny(unsafe_code, missing_docs)]
#![no_std]

mod frame;

use embedded_hal::{delay::DelayNs, digital::OutputPin};
use fb_core::{Color, Rebind, TriColorActuator};

/// Time the clock line is held in each state, in microseconds.
pub const CLOCK_HALF_PERIOD_US: u32 = 20;

/// All possible errors in this crate
#[derive(Debug, PartialEq, Eq, Clone)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error<D, C> {
    /// Data pin error
    Data(D),
    /// Clock pin error
    Clock(C),
}

/// Driver for a chain of `N` P9813 LEDs.
#[derive(Debug)]
pub struct P9813<D, C, Delay, const N: usize = 1> {
    /// The data line.
    data: D,
    /// The clock line.
    clock: C,
    /// Timing for the clock half-periods.
    delay: Delay,
    /// Last color written to each LED of the chain.
    colors: [Color; N],
}

impl<D, C, Delay, const N: usize> P9813<D, C, Delay, N>
where
    D: OutputPin,
    C: OutputPin,
    Delay: DelayNs,
{
    /// Create a new driver, drive both lines low and turn every LED of the
    /// chain off.
    pub fn new(data: D, clock: C, delay: Delay) -> Result<Self, Error<D::Error, C::Error>> {
        let mut chain = Self {
            data,
            clock,
            delay,
            colors: [Color::OFF; N],
        };

        chain.data.set_low().map_err(Error::Data)?;
        chain.clock.set_low().map_err(Error::Clock)?;
        chain.send()?;

        Ok(chain)
    }

    /// Destroy driver instance, return the data pin, clock pin and delay.
    pub fn destroy(self) -> (D, C, Delay) {
        (self.data, self.clock, self.delay)
    }

    /// Number of LEDs in the chain.
    #[inline(always)]
    pub const fn len(&self) -> usize {
        N
    }

    /// Whether the chain has no LEDs.
    #[inline(always)]
    pub const fn is_empty(&self) -> bool {
        N == 0
    }

    /// The last color written to LED `index`.
    pub fn color(&self, index: usize) -> Option<Color> {
        self.colors.get(index).copied()
    }

    /// Set LED `index` to the given channel intensities.
    pub fn set_color_rgb(
        &mut self,
        index: usize,
        red: u8,
        green: u8,
        blue: u8,
    ) -> Result<(), Error<D::Error, C::Error>> {
        self.set_led_color(index, Color::new(red, green, blue))
    }

    /// Set LED `index` to `color` and resend the chain.
    ///
    /// An index past the end of the chain is ignored.
    pub fn set_led_color(
        &mut self,
        index: usize,
        color: Color,
    ) -> Result<(), Error<D::Error, C::Error>> {
        let Some(slot) = self.colors.get_mut(index) else {
            fb_fmt::warn!("led {} is outside a chain of {}", index, N);
            return Ok(());
        };

        *slot = color;
        self.send()
    }

    /// Send start frame, one frame per LED and end frame.
    fn send(&mut self) -> Result<(), Error<D::Error, C::Error>> {
        self.write(&frame::BOUNDARY)?;

        for index in 0..N {
            let bytes = frame::encode(self.colors[index]);
            self.write(&bytes)?;
        }

        self.write(&frame::BOUNDARY)
    }

    fn write(&mut self, bytes: &[u8]) -> Result<(), Error<D::Error, C::Error>> {
        for &byte in bytes {
            self.write_byte(byte)?;
        }
        Ok(())
    }

    /// Clock out one byte, most significant bit first.
    fn write_byte(&mut self, byte: u8) -> Result<(), Error<D::Error, C::Error>> {
        for bit in (0..8).rev() {
            if byte & (1 << bit) != 0 {
                self.data.set_high().map_err(Error::Data)?;
            } else {
                self.data.set_low().map_err(Error::Data)?;
            }
            self.pulse()?;
        }
        Ok(())
    }

    /// The P9813 latches data on the rising clock edge.
    fn pulse(&mut self) -> Result<(), Error<D::Error, C::Error>> {
        self.clock.set_low().map_err(Error::Clock)?;
        self.delay.delay_us(CLOCK_HALF_PERIOD_US);
        self.clock.set_high().map_err(Error::Clock)?;
        self.delay.delay_us(CLOCK_HALF_PERIOD_US);
        Ok(())
    }
}

impl<D, C, Delay, const N: usize> TriColorActuator for P9813<D, C, Delay, N>
where
    D: OutputPin,
    C: OutputPin,
    Delay: DelayNs,
{
    type Error = Error<D::Error, C::Error>;

    /// Set the first LED of the chain.
    fn set_color(&mut self, color: Color) -> Result<(), Self::Error> {
        self.set_led_color(0, color)
    }
}

impl<D, C, Delay, const N: usize> Rebind for P9813<D, C, Delay, N> {
    type Pins = (D, C);

    /// Swap in new data and clock pins and forget every stored color.
    ///
    /// Nothing is written; the chain is re-initialised by the next update,
    /// which sends every LED that was not explicitly set as off.
    fn rebind(&mut self, (data, clock): (D, C)) -> (D, C) {
        fb_fmt::debug!("p9813 rebound");
        self.colors = [Color::OFF; N];
        (
            core::mem::replace(&mut self.data, data),
            core::mem::replace(&mut self.clock, clock),
        )
    }
}
