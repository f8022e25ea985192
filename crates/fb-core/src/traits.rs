use crate::{Color, Millis};

/// A monotonic millisecond clock.
///
/// Readings are expected to never decrease. The epoch is arbitrary; only
/// differences between readings are used.
pub trait Clock {
    /// Milliseconds elapsed since the clock's epoch.
    fn now(&self) -> Millis;
}

impl<C: Clock + ?Sized> Clock for &C {
    #[inline]
    fn now(&self) -> Millis {
        (**self).now()
    }
}

/// A light source that can show one RGB color at a time.
pub trait TriColorActuator {
    /// Error raised by the underlying driver.
    type Error;

    /// Show `color`.
    fn set_color(&mut self, color: Color) -> Result<(), Self::Error>;
}

impl<T: TriColorActuator + ?Sized> TriColorActuator for &mut T {
    type Error = T::Error;

    #[inline]
    fn set_color(&mut self, color: Color) -> Result<(), Self::Error> {
        (**self).set_color(color)
    }
}

/// A driver whose pins can be swapped out at runtime.
///
/// Rebinding releases the current pins and resets the driver's state as if it
/// had been freshly constructed on the new pins.
pub trait Rebind {
    /// The set of pins the driver is bound to.
    type Pins;

    /// Bind to `pins`, returning the previously bound pins.
    fn rebind(&mut self, pins: Self::Pins) -> Self::Pins;
}
