//! Errors reported by the conversion routines.

use core::{error, fmt};

/// Various errors that can occur while converting a bounded byte sequence into an integer.
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub enum ConvertError {
    /// The requested base was neither `0` nor in the range `2..=36`.
    InvalidBase(i32),
    /// The literal does not fit within the range of the target integer type.
    OutOfRange,
}

impl ConvertError {
    /// The POSIX `EINVAL` error number.
    pub const EINVAL: i32 = 22;
    /// The POSIX `ERANGE` error number.
    pub const ERANGE: i32 = 34;

    /// Returns the POSIX error number traditionally stored in `errno` for this
    /// [`ConvertError`].
    pub const fn errno(self) -> i32 {
        match self {
            Self::InvalidBase(_) => Self::EINVAL,
            Self::OutOfRange => Self::ERANGE,
        }
    }
}

impl fmt::Display for ConvertError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidBase(base) => write!(f, "unsupported base {base}"),
            Self::OutOfRange => f.pad("value out of range"),
        }
    }
}

impl error::Error for ConvertError {}

#[cfg(test)]
mod test {
    use std::string::ToString;

    use super::ConvertError;

    #[test]
    fn errno_codes() {
        assert_eq!(ConvertError::InvalidBase(1).errno(), 22);
        assert_eq!(ConvertError::InvalidBase(-3).errno(), 22);
        assert_eq!(ConvertError::OutOfRange.errno(), 34);
    }

    #[test]
    fn display() {
        assert_eq!(
            ConvertError::InvalidBase(37).to_string(),
            "unsupported base 37"
        );
        assert_eq!(ConvertError::OutOfRange.to_string(), "value out of range");
    }
}
