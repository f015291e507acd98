//! Conversions following the traditional `errno` calling convention.
//!
//! Each thread owns a single [`ErrorStatus`] slot. The conversions in this module write to it only
//! when they fail and never clear it, so callers must [`clear_error`] before a conversion whose
//! outcome they wish to inspect through [`last_error`].

use std::thread_local;

use crate::{error::ConvertError, status::ErrorStatus};

thread_local! {
    static STATUS: ErrorStatus = const { ErrorStatus::new() };
}

/// Converts `view` as [`crate::strntol`] does, returning the value and the number of consumed
/// bytes and recording any error into the calling thread's status slot.
pub fn strntol(view: &[u8], max_length: usize, base: i32) -> (i64, usize) {
    let conversion = crate::strntol(view, max_length, base);
    STATUS.with(|status| conversion.record(status))
}

/// Converts `view` as [`crate::strntoul`] does, returning the value and the number of consumed
/// bytes and recording any error into the calling thread's status slot.
pub fn strntoul(view: &[u8], max_length: usize, base: i32) -> (u64, usize) {
    let conversion = crate::strntoul(view, max_length, base);
    STATUS.with(|status| conversion.record(status))
}

/// Returns the error most recently recorded on the calling thread, if any.
pub fn last_error() -> Option<ConvertError> {
    STATUS.with(ErrorStatus::get)
}

/// Clears the calling thread's status slot.
pub fn clear_error() {
    STATUS.with(ErrorStatus::clear);
}

#[cfg(test)]
mod test {
    use std::thread;

    use super::{clear_error, last_error, strntol, strntoul};
    use crate::error::ConvertError;

    #[test]
    fn success_leaves_status_untouched() {
        clear_error();
        assert_eq!(strntol(b"-17", 3, 10), (-17, 3));
        assert_eq!(last_error(), None);

        assert_eq!(strntoul(b"99999999999999999999", 20, 10), (u64::MAX, 20));
        assert_eq!(last_error(), Some(ConvertError::OutOfRange));

        assert_eq!(strntol(b"17", 2, 10), (17, 2));
        assert_eq!(last_error(), Some(ConvertError::OutOfRange));

        clear_error();
        assert_eq!(last_error(), None);
    }

    #[test]
    fn invalid_base_is_recorded() {
        clear_error();
        assert_eq!(strntol(b"10", 2, 37), (0, 0));
        assert_eq!(last_error().map(ConvertError::errno), Some(ConvertError::EINVAL));
    }

    #[test]
    fn status_is_per_thread() {
        clear_error();
        assert_eq!(strntol(b"10", 2, 1), (0, 0));

        let other = thread::spawn(last_error).join().ok().flatten();
        assert_eq!(other, None);
        assert_eq!(last_error(), Some(ConvertError::InvalidBase(1)));
    }
}
