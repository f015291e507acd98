//! Byte classification shared by the conversion stages.

/// Returns the numeric value of `byte` when interpreted as a digit in a base of up to 36.
///
/// ASCII `'0'..='9'` map to `0..=9` and ASCII letters map, case-insensitively, to `10..=35`.
/// Every other byte is not a digit. Callers are responsible for rejecting values that are not
/// valid for their radix.
pub const fn digit_value(byte: u8) -> Option<u8> {
    match byte {
        b'0'..=b'9' => Some(byte - b'0'),
        b'a'..=b'z' => Some(byte - b'a' + 10),
        b'A'..=b'Z' => Some(byte - b'A' + 10),
        _ => None,
    }
}

/// Returns `true` if `byte` belongs to the C locale "space" class.
///
/// Unlike [`u8::is_ascii_whitespace`], this includes the vertical tab (`0x0B`).
pub const fn is_space(byte: u8) -> bool {
    matches!(byte, b' ' | b'\t' | b'\n' | b'\r' | 0x0B | 0x0C)
}

/// Returns the number of leading bytes of `view` that satisfy [`is_space`].
pub(crate) fn leading_space(view: &[u8]) -> usize {
    view.iter().take_while(|&&byte| is_space(byte)).count()
}
