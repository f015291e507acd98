//! A sticky error status slot for code that relies on the traditional `errno` convention.

use core::cell::Cell;

use crate::error::ConvertError;

/// A slot that remembers the most recent [`ConvertError`] recorded into it.
///
/// Successful conversions never clear the slot, so a chain of conversions can be checked once at
/// the end. The slot is not [`Sync`]; share it between conversions on a single thread only.
#[derive(Debug, Default)]
pub struct ErrorStatus(Cell<Option<ConvertError>>);

impl ErrorStatus {
    /// Constructs a new, clear [`ErrorStatus`].
    pub const fn new() -> Self {
        Self(Cell::new(None))
    }

    /// Returns the most recently recorded [`ConvertError`], if any.
    pub fn get(&self) -> Option<ConvertError> {
        self.0.get()
    }

    /// Records `error`, replacing any previously recorded error.
    pub fn set(&self, error: ConvertError) {
        self.0.set(Some(error));
    }

    /// Clears the slot.
    pub fn clear(&self) {
        self.0.set(None);
    }

    /// Returns the most recently recorded [`ConvertError`], if any, and clears the slot.
    pub fn take(&self) -> Option<ConvertError> {
        self.0.take()
    }
}
