use core::fmt::{self, Display, Formatter};

/// Errors surfaced by the timer API.
///
/// The hardware itself cannot fail a register write; the only fallible step
/// is selecting a capture/compare channel by raw index.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Error {
    /// The index does not name one of the three capture/compare channels.
    InvalidChannel(u8),
}

impl Display for Error {
    fn fmt(&self, formatter: &mut Formatter) -> fmt::Result {
        match self {
            Error::InvalidChannel(index) => {
                write!(formatter, "invalid capture/compare channel: {}", index)
            }
        }
    }
}

impl core::error::Error for Error {}
