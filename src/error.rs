//! Errors reported by the driver.

/// A driver failure, wrapping the error `E` of the underlying `DisplayInterface`.
///
/// There are no retries anywhere in the driver. After an `Interface` error in the middle of a
/// drawing call the controller may be left expecting more pixel data than it got; the next
/// drawing call reprograms the window, which resynchronizes it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error<E> {
    /// The transport could not be brought up. Nothing was sent to the controller.
    Acquire(E),
    /// A command, parameter, or pixel transfer failed.
    Interface(E),
}

impl<E> Error<E> {
    /// The underlying interface error.
    pub fn into_inner(self) -> E {
        match self {
            Error::Acquire(e) | Error::Interface(e) => e,
        }
    }
}

impl<E> From<E> for Error<E> {
    fn from(e: E) -> Self {
        Error::Interface(e)
    }
}
