use core::mem;

use embedded_hal::digital::OutputPin;

use crate::{
    Clock, Color, DEFAULT_INTERVAL_MS, Error, Millis, Pattern, Rebind, TriColorActuator,
    cadence::Cadence,
    toggle::{Step, Toggle},
};

/// Schedules beeps on a buzzer pin and flashes on an RGB LED.
///
/// Requests only record what should happen; nothing is emitted until
/// [`poll`](Self::poll) is called from the host loop. Every time a full
/// interval has elapsed between polls, the buzzer and the LED each advance by
/// one half-cycle, independently of each other.
#[derive(Debug)]
pub struct PulseScheduler<C, B, L> {
    clock: C,
    buzzer: B,
    led: L,
    beeper: Toggle,
    flasher: Toggle,
    flash_on: Color,
    flash_off: Color,
    cadence: Cadence,
}

/// Construction and configuration.
impl<C, B, L> PulseScheduler<C, B, L>
where
    C: Clock,
    B: OutputPin,
    L: TriColorActuator,
{
    /// Bind a scheduler to its clock and actuators.
    ///
    /// The buzzer is driven low, the LED is set to [`Color::OFF`] and the
    /// interval starts at [`DEFAULT_INTERVAL_MS`].
    pub fn new(clock: C, mut buzzer: B, mut led: L) -> Result<Self, Error<B::Error, L::Error>> {
        buzzer.set_low().map_err(Error::Buzzer)?;
        led.set_color(Color::OFF).map_err(Error::Led)?;

        let cadence = Cadence::new(clock.now(), DEFAULT_INTERVAL_MS);

        Ok(Self {
            clock,
            buzzer,
            led,
            beeper: Toggle::new(),
            flasher: Toggle::new(),
            flash_on: Color::OFF,
            flash_off: Color::OFF,
            cadence,
        })
    }

    /// Destroy the scheduler, returning the clock, buzzer and LED.
    pub fn release(self) -> (C, B, L) {
        (self.clock, self.buzzer, self.led)
    }

    /// Swap the buzzer pin, returning the previous one as is.
    ///
    /// Pending beeps and the current half-cycle carry over to the new pin.
    pub fn set_buzzer_pin(&mut self, buzzer: B) -> B {
        fb_fmt::debug!("buzzer pin rebound");
        mem::replace(&mut self.buzzer, buzzer)
    }

    /// Replace the LED driver and blank it.
    ///
    /// Returns the previous driver. If blanking the new driver fails, the
    /// previous driver is dropped and the error is returned.
    pub fn replace_led(&mut self, led: L) -> Result<L, Error<B::Error, L::Error>> {
        let old = mem::replace(&mut self.led, led);
        self.blank_led()?;
        fb_fmt::debug!("led driver replaced");
        Ok(old)
    }

    /// Rebind the LED driver to new pins and blank it.
    ///
    /// Returns the previously bound pins. If blanking fails, the previous
    /// pins are dropped and the error is returned.
    pub fn set_led_pins(&mut self, pins: L::Pins) -> Result<L::Pins, Error<B::Error, L::Error>>
    where
        L: Rebind,
    {
        let old = self.led.rebind(pins);
        self.blank_led()?;
        fb_fmt::debug!("led pins rebound");
        Ok(old)
    }

    /// Set the half-cycle length in milliseconds.
    ///
    /// Zero makes every poll a half-cycle boundary.
    pub fn set_interval(&mut self, interval: Millis) {
        fb_fmt::debug!("interval {}ms", interval);
        self.cadence.set_interval(interval);
    }

    fn blank_led(&mut self) -> Result<(), Error<B::Error, L::Error>> {
        self.led.set_color(Color::OFF).map_err(Error::Led)?;
        self.flasher.commit(Step::Off);
        Ok(())
    }
}

/// Requests. None of these touch the clock or the actuators.
impl<C, B, L> PulseScheduler<C, B, L> {
    /// Queue `count` beeps, replacing any beeps not yet started.
    pub fn beep(&mut self, count: u32) {
        fb_fmt::debug!("beep x{}", count);
        self.beeper.request(count);
    }

    /// Queue `count` flashes alternating between `on` and `off`, replacing
    /// any flashes not yet started.
    pub fn flash(&mut self, count: u32, on: Color, off: Color) {
        fb_fmt::debug!("flash x{} {:?}/{:?}", count, on, off);
        self.flasher.request(count);
        self.flash_on = on;
        self.flash_off = off;
    }

    /// Queue the same number of beeps and flashes, switching interval first
    /// if the pattern carries one.
    pub fn beep_and_flash(&mut self, pattern: Pattern) {
        if let Some(interval) = pattern.interval {
            fb_fmt::debug!("interval {}ms", interval);
            self.cadence.set_interval(interval);
        }
        self.beep(pattern.count);
        self.flash(pattern.count, pattern.on, pattern.off);
    }

    /// Beeps not yet started.
    #[inline]
    pub fn pending_beeps(&self) -> u32 {
        self.beeper.pending()
    }

    /// Flashes not yet started.
    #[inline]
    pub fn pending_flashes(&self) -> u32 {
        self.flasher.pending()
    }

    /// Whether the buzzer is in an "on" half-cycle.
    #[inline]
    pub fn is_beeping(&self) -> bool {
        self.beeper.is_active()
    }

    /// Whether the LED is in an "on" half-cycle.
    #[inline]
    pub fn is_flashing(&self) -> bool {
        self.flasher.is_active()
    }

    /// Whether both actuators are off with nothing pending.
    #[inline]
    pub fn is_idle(&self) -> bool {
        self.beeper.is_idle() && self.flasher.is_idle()
    }

    /// The half-cycle length in milliseconds.
    #[inline]
    pub fn interval(&self) -> Millis {
        self.cadence.interval()
    }

    /// The `(on, off)` colors of the current flash request.
    #[inline]
    pub fn flash_colors(&self) -> (Color, Color) {
        (self.flash_on, self.flash_off)
    }
}

/// The time-advancing step.
impl<C, B, L> PulseScheduler<C, B, L>
where
    C: Clock,
    B: OutputPin,
    L: TriColorActuator,
{
    /// Advance the scheduler. Call this often from the host loop.
    ///
    /// Reads the clock and, once an interval has accumulated, moves the
    /// buzzer and the LED on by one half-cycle each. Both actuators are
    /// driven even if the first one fails; the first error is returned and
    /// the failed actuator retries its step on the next boundary.
    pub fn poll(&mut self) -> Result<(), Error<B::Error, L::Error>> {
        if !self.cadence.tick(self.clock.now()) {
            return Ok(());
        }

        let buzzer = self.advance_buzzer();
        let led = self.advance_led();

        buzzer.and(led)
    }

    fn advance_buzzer(&mut self) -> Result<(), Error<B::Error, L::Error>> {
        let step = self.beeper.next_step();

        let written = match step {
            Step::On => self.buzzer.set_high(),
            Step::Off => self.buzzer.set_low(),
            Step::Idle => return Ok(()),
        };
        written.map_err(Error::Buzzer)?;

        self.beeper.commit(step);
        fb_fmt::trace!("buzzer {:?}, {} pending", step, self.beeper.pending());

        Ok(())
    }

    fn advance_led(&mut self) -> Result<(), Error<B::Error, L::Error>> {
        let step = self.flasher.next_step();

        let color = match step {
            Step::On => self.flash_on,
            Step::Off => self.flash_off,
            Step::Idle => return Ok(()),
        };
        self.led.set_color(color).map_err(Error::Led)?;

        self.flasher.commit(step);
        fb_fmt::trace!("led {:?}, {} pending", step, self.flasher.pending());

        Ok(())
    }
}
