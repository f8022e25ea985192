//! Logging shims shared by the feedback crates.
//!
//! The macros forward to [`defmt`](https://docs.rs/defmt) when the `defmt`
//! feature is enabled, to [`log`](https://docs.rs/log) when only the `log`
//! feature is enabled, and otherwise expand to nothing while still borrowing
//! their arguments, so call sites compile identically in every configuration.
//!
//! With the `defmt` feature, the calling crate must depend on `defmt` itself,
//! as the `defmt` macros resolve their runtime through `::defmt`.
//!
//! ```
//! let count = 3u32;
//! fb_fmt::debug!("beep x{}", count);
//! fb_fmt::trace!("idle");
//! ```
#![no_std]

#[cfg(all(feature = "log", not(feature = "defmt")))]
#[doc(hidden)]
pub use log;

#[cfg(feature = "defmt")]
mod backend {
    #[macro_export]
    macro_rules! trace {
        ($s:literal $(, $x:expr)* $(,)?) => {
            ::defmt::trace!($s $(, $x)*)
        };
    }

    #[macro_export]
    macro_rules! debug {
        ($s:literal $(, $x:expr)* $(,)?) => {
            ::defmt::debug!($s $(, $x)*)
        };
    }

    #[macro_export]
    macro_rules! info {
        ($s:literal $(, $x:expr)* $(,)?) => {
            ::defmt::info!($s $(, $x)*)
        };
    }

    #[macro_export]
    macro_rules! warn {
        ($s:literal $(, $x:expr)* $(,)?) => {
            ::defmt::warn!($s $(, $x)*)
        };
    }

    #[macro_export]
    macro_rules! error {
        ($s:literal $(, $x:expr)* $(,)?) => {
            ::defmt::error!($s $(, $x)*)
        };
    }
}

#[cfg(all(feature = "log", not(feature = "defmt")))]
mod backend {
    #[macro_export]
    macro_rules! trace {
        ($s:literal $(, $x:expr)* $(,)?) => {
            $crate::log::trace!($s $(, $x)*)
        };
    }

    #[macro_export]
    macro_rules! debug {
        ($s:literal $(, $x:expr)* $(,)?) => {
            $crate::log::debug!($s $(, $x)*)
        };
    }

    #[macro_export]
    macro_rules! info {
        ($s:literal $(, $x:expr)* $(,)?) => {
            $crate::log::info!($s $(, $x)*)
        };
    }

    #[macro_export]
    macro_rules! warn {
        ($s:literal $(, $x:expr)* $(,)?) => {
            $crate::log::warn!($s $(, $x)*)
        };
    }

    #[macro_export]
    macro_rules! error {
        ($s:literal $(, $x:expr)* $(,)?) => {
            $crate::log::error!($s $(, $x)*)
        };
    }
}

#[cfg(not(any(feature = "defmt", feature = "log")))]
mod backend {
    #[macro_export]
    macro_rules! trace {
        ($s:literal $(, $x:expr)* $(,)?) => {{
            let _ = ($( & $x ),*);
        }};
    }

    #[macro_export]
    macro_rules! debug {
        ($s:literal $(, $x:expr)* $(,)?) => {{
            let _ = ($( & $x ),*);
        }};
    }

    #[macro_export]
    macro_rules! info {
        ($s:literal $(, $x:expr)* $(,)?) => {{
            let _ = ($( & $x ),*);
        }};
    }

    #[macro_export]
    macro_rules! warn {
        ($s:literal $(, $x:expr)* $(,)?) => {{
            let _ = ($( & $x ),*);
        }};
    }

    #[macro_export]
    macro_rules! error {
        ($s:literal $(, $x:expr)* $(,)?) => {{
            let _ = ($( & $x ),*);
        }};
    }
}
