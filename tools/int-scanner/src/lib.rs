//! Scanning of byte buffers for successive integer literals using the bounded conversions
//! provided by [`strntol`].

use core::fmt;

use strntol::{Conversion, ConvertError, Radix, is_space, strntol, strntoul};

/// Whether literals are converted with [`strntol`] or [`strntoul`].
#[derive(Clone, Copy, Debug, Default, Hash, PartialEq, Eq)]
pub enum Signedness {
    /// Convert with [`strntol`], clamping to the [`i64`] range.
    #[default]
    Signed,
    /// Convert with [`strntoul`], negating modulo 2^64.
    Unsigned,
}

/// A converted value.
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq)]
pub enum Value {
    /// The result of a [`Signedness::Signed`] conversion.
    Signed(i64),
    /// The result of a [`Signedness::Unsigned`] conversion.
    Unsigned(u64),
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Signed(value) => fmt::Display::fmt(value, f),
            Self::Unsigned(value) => fmt::Display::fmt(value, f),
        }
    }
}

/// Converts the first `max_length` bytes of `view` according to `base` and `signedness`.
pub fn convert(
    view: &[u8],
    max_length: usize,
    base: i32,
    signedness: Signedness,
) -> Conversion<Value> {
    match signedness {
        Signedness::Signed => {
            let conversion = strntol(view, max_length, base);
            Conversion {
                value: Value::Signed(conversion.value),
                consumed: conversion.consumed,
                error: conversion.error,
            }
        }
        Signedness::Unsigned => {
            let conversion = strntoul(view, max_length, base);
            Conversion {
                value: Value::Unsigned(conversion.value),
                consumed: conversion.consumed,
                error: conversion.error,
            }
        }
    }
}

/// Returns a human readable status for `error`.
pub fn status(error: Option<ConvertError>) -> StatusDisplay {
    StatusDisplay(error)
}

/// Displays `ok` or the contained [`ConvertError`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StatusDisplay(Option<ConvertError>);

impl fmt::Display for StatusDisplay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(error) => fmt::Display::fmt(&error, f),
            None => f.pad("ok"),
        }
    }
}

/// An integer literal found by [`Tokens`].
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq)]
pub struct Token {
    /// The offset of the literal's sign or first digit within the scanned buffer.
    pub offset: usize,
    /// The length of the literal in bytes.
    pub length: usize,
    /// The converted value.
    pub value: Value,
    /// The error reported while converting the literal.
    pub error: Option<ConvertError>,
}

/// An iterator over the integer literals within a buffer.
///
/// Whitespace between literals is skipped. A byte that does not start a literal is skipped on
/// its own, and scanning resumes at the byte following each literal, so overflowing literals are
/// reported once in their entirety.
#[derive(Clone, Debug)]
pub struct Tokens<'input> {
    /// The buffer being scanned.
    input: &'input [u8],
    /// The offset at which the next conversion starts.
    offset: usize,
    /// The base passed to each conversion.
    base: i32,
    /// The conversion used for each literal.
    signedness: Signedness,
}

impl<'input> Tokens<'input> {
    /// Constructs a new [`Tokens`] iterator over `input`.
    ///
    /// # Errors
    ///
    /// Returns [`ConvertError::InvalidBase`] if `base` is neither `0` nor in `2..=36`.
    pub fn new(
        input: &'input [u8],
        base: i32,
        signedness: Signedness,
    ) -> Result<Self, ConvertError> {
        if base != 0 && u8::try_from(base).ok().and_then(Radix::new).is_none() {
            return Err(ConvertError::InvalidBase(base));
        }

        Ok(Self {
            input,
            offset: 0,
            base,
            signedness,
        })
    }

    /// Returns the offset at which scanning will resume.
    pub fn offset(&self) -> usize {
        self.offset
    }
}

impl Iterator for Tokens<'_> {
    type Item = Token;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let rest = self.input.get(self.offset..)?;
            let space = rest.iter().take_while(|&&byte| is_space(byte)).count();
            self.offset += space;

            let rest = self.input.get(self.offset..)?;
            if rest.is_empty() {
                return None;
            }

            let conversion = convert(rest, rest.len(), self.base, self.signedness);
            if conversion.consumed == 0 {
                self.offset += 1;
                continue;
            }

            let token = Token {
                offset: self.offset,
                length: conversion.consumed,
                value: conversion.value,
                error: conversion.error,
            };
            self.offset += conversion.consumed;

            return Some(token);
        }
    }
}
