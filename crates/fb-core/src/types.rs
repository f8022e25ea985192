/// Milliseconds, the time unit shared by [`Clock`](crate::Clock) readings and
/// the half-cycle interval.
pub type Millis = u64;

/// Default half-cycle length in milliseconds.
pub const DEFAULT_INTERVAL_MS: Millis = 200;

/// An RGB color with 8 bits per channel.
#[derive(Default, Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Color {
    /// Red channel intensity.
    pub red: u8,
    /// Green channel intensity.
    pub green: u8,
    /// Blue channel intensity.
    pub blue: u8,
}

impl Color {
    /// All channels off.
    pub const OFF: Self = Self::new(0, 0, 0);
    /// Full red channel.
    pub const RED: Self = Self::new(255, 0, 0);
    /// Full green channel.
    pub const GREEN: Self = Self::new(0, 255, 0);
    /// Full blue channel.
    pub const BLUE: Self = Self::new(0, 0, 255);
    /// All channels full.
    pub const WHITE: Self = Self::new(255, 255, 255);
    /// Red and green.
    pub const YELLOW: Self = Self::new(255, 255, 0);
    /// Green and blue.
    pub const CYAN: Self = Self::new(0, 255, 255);
    /// Red and blue.
    pub const MAGENTA: Self = Self::new(255, 0, 255);

    /// Create a new color from its channel intensities.
    #[inline]
    pub const fn new(red: u8, green: u8, blue: u8) -> Self {
        Self { red, green, blue }
    }

    /// Whether every channel is off.
    #[inline]
    pub const fn is_off(&self) -> bool {
        self.red == 0 && self.green == 0 && self.blue == 0
    }
}

impl From<(u8, u8, u8)> for Color {
    #[inline]
    fn from((red, green, blue): (u8, u8, u8)) -> Self {
        Self::new(red, green, blue)
    }
}

impl From<Color> for (u8, u8, u8) {
    #[inline]
    fn from(color: Color) -> Self {
        (color.red, color.green, color.blue)
    }
}

/// A combined beep and flash request.
///
/// Both the buzzer and the LED get `count` pulses. When `interval` is set,
/// the scheduler's half-cycle length is changed before the pulses are queued;
/// otherwise the current interval is kept.
///
/// ```
/// use fb_core::{Color, Pattern};
///
/// let pattern = Pattern::new(3, Color::BLUE).interval(100);
///
/// assert_eq!(pattern.count, 3);
/// assert_eq!(pattern.off, Color::OFF);
/// assert_eq!(pattern.interval, Some(100));
/// ```
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Pattern {
    /// Number of pulses for each actuator.
    pub count: u32,
    /// LED color during the "on" half-cycle.
    pub on: Color,
    /// LED color during the "off" half-cycle.
    pub off: Color,
    /// Half-cycle length to switch to, if any.
    pub interval: Option<Millis>,
}

impl Pattern {
    /// `count` pulses flashing `on`, returning to [`Color::OFF`], at the
    /// current interval.
    #[inline]
    pub const fn new(count: u32, on: Color) -> Self {
        Self {
            count,
            on,
            off: Color::OFF,
            interval: None,
        }
    }

    /// Use `off` for the "off" half-cycle.
    #[inline]
    pub const fn off(mut self, off: Color) -> Self {
        self.off = off;
        self
    }

    /// Switch the scheduler to a half-cycle of `interval` milliseconds.
    #[inline]
    pub const fn interval(mut self, interval: Millis) -> Self {
        self.interval = Some(interval);
        self
    }
}
