//! The `strntol` crate converts bounded, not necessarily terminated, byte sequences into integers.
//!
//! # Capabilities
//!
//! ## Bounded reads
//!
//! Every conversion takes an explicit maximum length and never inspects a byte beyond it, so
//! callers holding sub-slices of larger buffers can convert them in place without copying or
//! terminating them first.
//!
//! ## Traditional semantics
//!
//! [`strntol`] and [`strntoul`] accept the same literals as the C `strtol` and `strtoul`
//! functions: leading whitespace, an optional sign, an optional `0x`/`0X` prefix for base `0` or
//! `16`, automatic octal and decimal detection for base `0`, and digits in any base from 2 to 36.
//! The number of consumed bytes always reflects the full literal, even when the value overflows,
//! so scanning can resume right after it.
//!
//! ## Per-call errors
//!
//! Errors are returned alongside the value in a [`Conversion`]. Code that depends on the sticky
//! `errno` convention can record them into an [`ErrorStatus`] or, with the `std` feature, use the
//! thread-local slot in [`legacy`].
//!
//! ## Works in `no_std` environments
//!
//! Without the `std` feature, this crate neither allocates nor uses any `std` features.
#![no_std]

#[cfg(any(test, feature = "std"))]
extern crate std;

mod accumulate;
mod conversion;
mod digit;
mod error;
mod radix;
mod signed;
mod status;
mod unsigned;

#[cfg(feature = "std")]
pub mod legacy;

pub use conversion::Conversion;
pub use digit::{digit_value, is_space};
pub use error::ConvertError;
pub use radix::Radix;
pub use signed::strntol;
pub use status::ErrorStatus;
pub use unsigned::strntoul;
