//! Resolution of the requested base and stripping of radix prefixes.

use crate::error::ConvertError;

/// A numeric base in the range `2..=36`.
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct Radix(u8);

impl Radix {
    /// The smallest supported [`Radix`].
    pub const MIN: u8 = 2;
    /// The largest supported [`Radix`].
    pub const MAX: u8 = 36;

    /// Base 2.
    pub const BINARY: Self = Self(2);
    /// Base 8.
    pub const OCTAL: Self = Self(8);
    /// Base 10.
    pub const DECIMAL: Self = Self(10);
    /// Base 16.
    pub const HEXADECIMAL: Self = Self(16);

    /// Constructs a new [`Radix`] from `base`.
    ///
    /// Returns `None` if `base` is not in the range `2..=36`.
    pub const fn new(base: u8) -> Option<Self> {
        if base >= Self::MIN && base <= Self::MAX {
            Some(Self(base))
        } else {
            None
        }
    }

    /// Returns the numeric value of this [`Radix`].
    pub const fn get(self) -> u8 {
        self.0
    }

    /// Returns the number of bits a single digit occupies if the accumulation for this
    /// [`Radix`] can be carried out with shifts.
    pub(crate) const fn shift(self) -> Option<u32> {
        match self.0 {
            2 => Some(1),
            8 => Some(3),
            16 => Some(4),
            _ => None,
        }
    }

    /// Resolves the effective [`Radix`] for `view` given the caller's requested `base` and
    /// returns it along with the length of the radix prefix that should be skipped.
    ///
    /// - A `base` of `0` selects hexadecimal for a leading `0x` or `0X`, octal for any other
    ///   leading `0`, and decimal otherwise.
    /// - A `base` of `16` additionally skips a leading `0x` or `0X`.
    /// - Any other `base` in `2..=36` is used verbatim.
    ///
    /// A prefix is only recognized when both of its bytes lie within `view`. The leading `0`
    /// that selects octal is not treated as a prefix, since it is a valid octal digit.
    ///
    /// # Errors
    ///
    /// Returns [`ConvertError::InvalidBase`] if `base` is neither `0` nor in `2..=36`.
    pub fn detect(view: &[u8], base: i32) -> Result<(Self, usize), ConvertError> {
        match base {
            0 => Ok(match view {
                [b'0', b'x' | b'X', ..] => (Self::HEXADECIMAL, 2),
                [b'0', ..] => (Self::OCTAL, 0),
                _ => (Self::DECIMAL, 0),
            }),
            16 => Ok(match view {
                [b'0', b'x' | b'X', ..] => (Self::HEXADECIMAL, 2),
                _ => (Self::HEXADECIMAL, 0),
            }),
            _ => u8::try_from(base)
                .ok()
                .and_then(Self::new)
                .map(|radix| (radix, 0))
                .ok_or(ConvertError::InvalidBase(base)),
        }
    }
}

#[cfg(test)]
mod test {
    use super::Radix;
    use crate::error::ConvertError;

    #[test]
    fn construction_bounds() {
        assert_eq!(Radix::new(0), None);
        assert_eq!(Radix::new(1), None);
        assert_eq!(Radix::new(2).map(Radix::get), Some(2));
        assert_eq!(Radix::new(36).map(Radix::get), Some(36));
        assert_eq!(Radix::new(37), None);
    }

    #[test]
    fn shift_only_for_selected_powers_of_two() {
        assert_eq!(Radix::BINARY.shift(), Some(1));
        assert_eq!(Radix::OCTAL.shift(), Some(3));
        assert_eq!(Radix::HEXADECIMAL.shift(), Some(4));
        assert_eq!(Radix::DECIMAL.shift(), None);
        assert_eq!(Radix::new(4).and_then(Radix::shift), None);
        assert_eq!(Radix::new(32).and_then(Radix::shift), None);
    }

    #[test]
    fn automatic_detection() {
        assert_eq!(Radix::detect(b"0x1f", 0), Ok((Radix::HEXADECIMAL, 2)));
        assert_eq!(Radix::detect(b"0X1F", 0), Ok((Radix::HEXADECIMAL, 2)));
        assert_eq!(Radix::detect(b"017", 0), Ok((Radix::OCTAL, 0)));
        assert_eq!(Radix::detect(b"0", 0), Ok((Radix::OCTAL, 0)));
        assert_eq!(Radix::detect(b"0z", 0), Ok((Radix::OCTAL, 0)));
        assert_eq!(Radix::detect(b"17", 0), Ok((Radix::DECIMAL, 0)));
        assert_eq!(Radix::detect(b"", 0), Ok((Radix::DECIMAL, 0)));
    }

    #[test]
    fn hexadecimal_prefix() {
        assert_eq!(Radix::detect(b"0xfe", 16), Ok((Radix::HEXADECIMAL, 2)));
        assert_eq!(Radix::detect(b"0x", 16), Ok((Radix::HEXADECIMAL, 2)));
        assert_eq!(Radix::detect(b"0", 16), Ok((Radix::HEXADECIMAL, 0)));
        assert_eq!(Radix::detect(b"0zCD", 16), Ok((Radix::HEXADECIMAL, 0)));
        assert_eq!(Radix::detect(b"1xCD", 16), Ok((Radix::HEXADECIMAL, 0)));
    }

    #[test]
    fn fixed_bases_never_strip() {
        assert_eq!(Radix::detect(b"0x10", 10), Ok((Radix::DECIMAL, 0)));
        assert_eq!(Radix::detect(b"0x10", 36).map(|(r, p)| (r.get(), p)), Ok((36, 0)));
        assert_eq!(Radix::detect(b"0101", 2), Ok((Radix::BINARY, 0)));
    }

    #[test]
    fn invalid_bases() {
        for base in [1, 37, -3, i32::MIN, i32::MAX, 2_147_483_629, 256 + 10] {
            assert_eq!(
                Radix::detect(b"10", base),
                Err(ConvertError::InvalidBase(base))
            );
            assert_eq!(
                Radix::detect(b"z", base),
                Err(ConvertError::InvalidBase(base))
            );
        }
    }
}
