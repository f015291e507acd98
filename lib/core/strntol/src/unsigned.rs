//! Conversion of bounded byte sequences into unsigned integers.

use crate::{
    accumulate::accumulate,
    conversion::Conversion,
    digit::leading_space,
    error::ConvertError,
    radix::Radix,
};

/// Converts the initial portion of `view` into a [`u64`] according to `base`, inspecting at most
/// `max_length` bytes.
///
/// `view` does not need to be terminated: no byte at or beyond `max_length` (or the end of
/// `view`, whichever comes first) is read.
///
/// The literal may start with any amount of whitespace followed by a single optional `+` or `-`.
/// A `base` of `0` or `16` then accepts a `0x` or `0X` prefix, and a `base` of `0` treats a
/// leading `0` as octal and anything else as decimal. The conversion continues until the first
/// byte that is not a digit in the resolved base.
///
/// A leading `-` produces the two's complement negation of the converted magnitude. The
/// [`u64::MAX`] clamp for an overflowing magnitude is applied after the sign, so it is never
/// negated.
///
/// If no digits were converted, the result is `0` and [`Conversion::consumed`] is `0`. If the
/// magnitude does not fit in a [`u64`], the result is [`u64::MAX`], regardless of sign, and every
/// digit of the literal is still consumed.
///
/// # Errors
///
/// - [`ConvertError::InvalidBase`]: `base` is neither `0` nor in `2..=36`. Nothing is consumed.
///   Not reported when nothing but whitespace and a sign lies within the bound.
/// - [`ConvertError::OutOfRange`]: the magnitude exceeds [`u64::MAX`].
pub fn strntoul(view: &[u8], max_length: usize, base: i32) -> Conversion<u64> {
    let view = bounded(view, max_length);
    let lead = Lead::scan(view);

    match magnitude(view, lead.end, base) {
        Err(error) => failed(0, error),
        Ok(None) => nothing(0),
        Ok(Some(magnitude)) if magnitude.overflow => Conversion {
            value: u64::MAX,
            consumed: magnitude.end,
            error: Some(ConvertError::OutOfRange),
        },
        Ok(Some(magnitude)) => Conversion {
            value: if lead.negative {
                magnitude.value.wrapping_neg()
            } else {
                magnitude.value
            },
            consumed: magnitude.end,
            error: None,
        },
    }
}

/// Restricts `view` to its first `max_length` bytes.
pub(crate) fn bounded(view: &[u8], max_length: usize) -> &[u8] {
    view.get(..max_length).unwrap_or(view)
}

/// The whitespace and optional sign at the start of a view.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct Lead {
    /// The offset of the first byte after the whitespace and sign.
    pub end: usize,
    /// `true` if a `-` sign was consumed.
    pub negative: bool,
}

impl Lead {
    /// Skips leading whitespace and a single optional sign in `view`.
    pub fn scan(view: &[u8]) -> Self {
        let space = leading_space(view);

        match view.get(space) {
            Some(b'-') => Self {
                end: space + 1,
                negative: true,
            },
            Some(b'+') => Self {
                end: space + 1,
                negative: false,
            },
            _ => Self {
                end: space,
                negative: false,
            },
        }
    }
}

/// An unsigned magnitude accumulated from a view.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct Magnitude {
    /// The magnitude, only meaningful if `overflow` is `false`.
    pub value: u64,
    /// The offset of the first byte after the last digit.
    pub end: usize,
    /// `true` if the magnitude exceeds [`u64::MAX`].
    pub overflow: bool,
}

/// Resolves the radix of the literal starting at `start` in `view` and accumulates its digits.
///
/// Returns `Ok(None)` if no digits were found. Nothing remaining after `start` is not an error,
/// even for an invalid `base`.
///
/// # Errors
///
/// Returns [`ConvertError::InvalidBase`] if `base` is neither `0` nor in `2..=36` and `view`
/// extends past `start`.
pub(crate) fn magnitude(
    view: &[u8],
    start: usize,
    base: i32,
) -> Result<Option<Magnitude>, ConvertError> {
    let rest = view.get(start..).unwrap_or_default();
    if rest.is_empty() {
        return Ok(None);
    }

    let (radix, prefix) = Radix::detect(rest, base)?;

    let digits_start = start + prefix;
    let accumulated = accumulate(view.get(digits_start..).unwrap_or_default(), radix);
    if accumulated.digits == 0 {
        return Ok(None);
    }

    Ok(Some(Magnitude {
        value: accumulated.value,
        end: digits_start + accumulated.digits,
        overflow: accumulated.overflow,
    }))
}

/// A [`Conversion`] that recognized no literal.
pub(crate) const fn nothing<T>(value: T) -> Conversion<T> {
    Conversion {
        value,
        consumed: 0,
        error: None,
    }
}

/// A [`Conversion`] that failed before consuming anything.
pub(crate) const fn failed<T>(value: T, error: ConvertError) -> Conversion<T> {
    Conversion {
        value,
        consumed: 0,
        error: Some(error),
    }
}
