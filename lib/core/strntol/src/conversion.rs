//! The result type shared by every conversion routine.

use crate::{error::ConvertError, status::ErrorStatus};

/// The outcome of converting a bounded byte sequence into an integer.
///
/// `value` is always well defined, even when `error` is set: it is `0` for
/// [`ConvertError::InvalidBase`] and the clamped limit for [`ConvertError::OutOfRange`].
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq)]
pub struct Conversion<T> {
    /// The converted value.
    pub value: T,
    /// The number of bytes, including whitespace, sign, and radix prefix, that belong to the
    /// recognized literal. This is the offset at which scanning should resume.
    pub consumed: usize,
    /// The error that occurred during the conversion, if any.
    pub error: Option<ConvertError>,
}

impl<T> Conversion<T> {
    /// Returns `true` if the conversion did not report an error.
    ///
    /// A conversion that consumed nothing is not an error.
    pub const fn is_ok(&self) -> bool {
        self.error.is_none()
    }

    /// Converts this [`Conversion`] into a [`Result`] containing the value and the number of
    /// consumed bytes.
    ///
    /// # Errors
    ///
    /// Returns the [`ConvertError`] reported by the conversion, if any.
    pub fn into_result(self) -> Result<(T, usize), ConvertError> {
        match self.error {
            Some(error) => Err(error),
            None => Ok((self.value, self.consumed)),
        }
    }

    /// Stores the error of this [`Conversion`], if any, into `status` and returns the value and
    /// number of consumed bytes.
    ///
    /// `status` is left untouched when the conversion succeeded, matching the traditional
    /// `errno` convention.
    pub fn record(self, status: &ErrorStatus) -> (T, usize) {
        if let Some(error) = self.error {
            status.set(error);
        }

        (self.value, self.consumed)
    }
}

#[cfg(test)]
mod test {
    use super::Conversion;
    use crate::{error::ConvertError, status::ErrorStatus};

    #[test]
    fn into_result() {
        let ok = Conversion {
            value: 7u64,
            consumed: 3,
            error: None,
        };
        assert!(ok.is_ok());
        assert_eq!(ok.into_result(), Ok((7, 3)));

        let failed = Conversion {
            value: u64::MAX,
            consumed: 21,
            error: Some(ConvertError::OutOfRange),
        };
        assert!(!failed.is_ok());
        assert_eq!(failed.into_result(), Err(ConvertError::OutOfRange));
    }

    #[test]
    fn record_is_sticky() {
        let status = ErrorStatus::new();

        let failed = Conversion {
            value: i64::MAX,
            consumed: 19,
            error: Some(ConvertError::OutOfRange),
        };
        assert_eq!(failed.record(&status), (i64::MAX, 19));
        assert_eq!(status.get(), Some(ConvertError::OutOfRange));

        let ok = Conversion {
            value: 5i64,
            consumed: 1,
            error: None,
        };
        assert_eq!(ok.record(&status), (5, 1));
        assert_eq!(status.get(), Some(ConvertError::OutOfRange));
    }
}
