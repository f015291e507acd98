//! Conversion of bounded byte sequences into signed integers.

use crate::{
    conversion::Conversion,
    error::ConvertError,
    unsigned::{Lead, bounded, failed, magnitude, nothing},
};

/// Converts the initial portion of `view` into an [`i64`] according to `base`, inspecting at most
/// `max_length` bytes.
///
/// This accepts the same literals as [`strntoul`][su]. The sign is interpreted here rather than
/// by modular negation: a magnitude that does not fit in an [`i64`] for the given sign is clamped
/// to [`i64::MIN`] or [`i64::MAX`].
///
/// If no digits were converted, including when only whitespace and a sign were present, the
/// result is `0` and [`Conversion::consumed`] is `0`.
///
/// Exactly one sign is accepted, directly before the digits or radix prefix: `"+-5"` and
/// `"- 5"` convert nothing, unlike implementations that re-scan whitespace and a sign after the
/// first one.
///
/// # Errors
///
/// - [`ConvertError::InvalidBase`]: `base` is neither `0` nor in `2..=36`. Nothing is consumed.
///   Not reported when nothing but whitespace and a sign lies within the bound.
/// - [`ConvertError::OutOfRange`]: the literal lies outside `i64::MIN..=i64::MAX`. Every digit
///   of the literal is still consumed.
///
/// [su]: crate::strntoul
pub fn strntol(view: &[u8], max_length: usize, base: i32) -> Conversion<i64> {
    let view = bounded(view, max_length);
    let lead = Lead::scan(view);

    let magnitude = match magnitude(view, lead.end, base) {
        Ok(Some(magnitude)) => magnitude,
        Ok(None) => return nothing(0),
        Err(error) => return failed(0, error),
    };

    let limit = if lead.negative {
        i64::MIN.unsigned_abs()
    } else {
        i64::MAX.unsigned_abs()
    };

    if magnitude.overflow || magnitude.value > limit {
        return Conversion {
            value: if lead.negative { i64::MIN } else { i64::MAX },
            consumed: magnitude.end,
            error: Some(ConvertError::OutOfRange),
        };
    }

    let value = if lead.negative {
        0i64.wrapping_sub_unsigned(magnitude.value)
    } else {
        0i64.wrapping_add_unsigned(magnitude.value)
    };

    Conversion {
        value,
        consumed: magnitude.end,
        error: None,
    }
}

#[cfg(test)]
mod test {
    use super::strntol;
    use crate::error::ConvertError;

    #[track_caller]
    fn check(input: &[u8], base: i32, value: i64, consumed: usize, error: Option<ConvertError>) {
        let conversion = strntol(input, input.len(), base);
        assert_eq!(conversion.value, value, "value of {input:?}");
        assert_eq!(conversion.consumed, consumed, "consumed of {input:?}");
        assert_eq!(conversion.error, error, "error of {input:?}");
    }

    #[test]
    fn signed_limits_are_exact() {
        check(b"9223372036854775807", 10, i64::MAX, 19, None);
        check(b"-9223372036854775808", 10, i64::MIN, 20, None);
        check(b"0x7fffffffffffffff", 16, i64::MAX, 18, None);
        check(b"-0x8000000000000000", 0, i64::MIN, 19, None);
    }

    #[test]
    fn just_beyond_the_limits() {
        let out_of_range = Some(ConvertError::OutOfRange);
        check(b"9223372036854775808", 10, i64::MAX, 19, out_of_range);
        check(b"-9223372036854775809", 10, i64::MIN, 20, out_of_range);
        check(b"0xffffffffffffffff", 0, i64::MAX, 18, out_of_range);
        check(b"18446744073709551615", 10, i64::MAX, 20, out_of_range);
        check(b"-18446744073709551615", 10, i64::MIN, 21, out_of_range);
    }

    #[test]
    fn sign_without_digits() {
        check(b"-", 10, 0, 0, None);
        check(b"+", 10, 0, 0, None);
        check(b"  -x", 10, 0, 0, None);
        check(b"+-5", 10, 0, 0, None);
        check(b"- 5", 10, 0, 0, None);
    }

    #[test]
    fn zero_values_still_consume() {
        check(b"0", 0, 0, 1, None);
        check(b"-0", 10, 0, 2, None);
        check(b"  +000", 8, 0, 6, None);
        check(b"0x0", 0, 0, 3, None);
    }

    #[test]
    fn trailing_bytes_are_left() {
        check(b"-42abc", 10, -42, 3, None);
        check(b"-42abc", 16, -0x42abc, 6, None);
        check(b"123 456", 10, 123, 3, None);
    }

    #[test]
    fn invalid_base_reports_nothing_consumed() {
        check(b"  -17", 1, 0, 0, Some(ConvertError::InvalidBase(1)));
        check(b"x", 99, 0, 0, Some(ConvertError::InvalidBase(99)));
    }

    #[test]
    fn invalid_base_without_literal() {
        check(b"", 99, 0, 0, None);
        check(b"   ", 1, 0, 0, None);
        check(b" +", 36 + 1, 0, 0, None);
    }
}
