//! Digit accumulation with overflow tracking.
//!
//! Two interchangeable strategies exist: [`Shift`] for the power-of-two bases 2, 8, and 16, and
//! [`Multiply`] for every base. They must agree on every input, including the exact point at
//! which overflow is detected.

use crate::{digit::digit_value, radix::Radix};

/// The result of accumulating the digit run at the start of a view.
#[derive(Clone, Copy, Debug, Default, Hash, PartialEq, Eq)]
pub(crate) struct Accumulated {
    /// The accumulated value, wrapped modulo 2^64 once `overflow` is set.
    pub value: u64,
    /// The number of bytes accepted as digits.
    pub digits: usize,
    /// `true` if the true value of the digit run exceeds [`u64::MAX`].
    pub overflow: bool,
}

/// Accumulates the leading run of bytes of `view` that are valid digits in `radix`.
///
/// Accumulation stops at the first byte that is not a digit in `radix` or at the end of `view`.
/// Overflow does not stop accumulation; the entire digit run is always consumed.
pub(crate) fn accumulate(view: &[u8], radix: Radix) -> Accumulated {
    match radix.shift() {
        Some(shift) => run(Shift(shift), view, radix),
        None => run(Multiply(u64::from(radix.get())), view, radix),
    }
}

/// Scales a partially accumulated value by the radix.
trait Strategy {
    /// Returns `value * radix` modulo 2^64 and whether the true product exceeds [`u64::MAX`].
    fn scale(&self, value: u64) -> (u64, bool);
}

/// Scales by shifting left by the number of bits in a digit.
struct Shift(u32);

impl Strategy for Shift {
    fn scale(&self, value: u64) -> (u64, bool) {
        (value << self.0, value > u64::MAX >> self.0)
    }
}

/// Scales by multiplying by the radix.
struct Multiply(u64);

impl Strategy for Multiply {
    fn scale(&self, value: u64) -> (u64, bool) {
        (value.wrapping_mul(self.0), value > u64::MAX / self.0)
    }
}

/// Accumulates the leading digit run of `view` in `radix`, scaling with `strategy`.
fn run<S: Strategy>(strategy: S, view: &[u8], radix: Radix) -> Accumulated {
    let mut accumulated = Accumulated::default();

    for &byte in view {
        let Some(digit) = digit_value(byte).filter(|&digit| digit < radix.get()) else {
            break;
        };

        let (scaled, scale_overflow) = strategy.scale(accumulated.value);
        let (sum, add_overflow) = scaled.overflowing_add(u64::from(digit));

        accumulated.value = sum;
        accumulated.overflow |= scale_overflow || add_overflow;
        accumulated.digits += 1;
    }

    accumulated
}
