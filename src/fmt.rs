//! Logging shims. These forward to `defmt` when the `defmt` feature is enabled, and expand to
//! nothing otherwise so the driver carries no logging cost by default.

macro_rules! debug {
    ($($arg:tt)*) => {{
        #[cfg(feature = "defmt")]
        defmt::debug!($($arg)*);
    }};
}

macro_rules! trace {
    ($($arg:tt)*) => {{
        #[cfg(feature = "defmt")]
        defmt::trace!($($arg)*);
    }};
}
