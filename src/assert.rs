//! The assertion primitive.

use crate::errors::{CheckError, DEFAULT_ASSERTION_MESSAGE};

/// Fails with an assertion error carrying `message` when `condition` is false.
pub fn ensure(condition: bool, message: impl Into<String>) -> Result<(), CheckError> {
    if condition {
        Ok(())
    } else {
        Err(CheckError::assertion(message))
    }
}

/// Like [`ensure`], with the default message.
pub fn ensure_true(condition: bool) -> Result<(), CheckError> {
    ensure(condition, DEFAULT_ASSERTION_MESSAGE)
}

/// Returns early from the enclosing check with an assertion failure.
///
/// ```
/// use sitecheck::{check, CheckError};
///
/// fn name_is_set(name: &str) -> Result<(), CheckError> {
///     check!(!name.is_empty(), "name is empty");
///     check!(name.len() < 64, "name too long: {}", name.len());
///     Ok(())
/// }
/// assert!(name_is_set("portfolio-website").is_ok());
/// ```
#[macro_export]
macro_rules! check {
    ($cond:expr $(,)?) => {
        $crate::assert::ensure_true($cond)?
    };
    ($cond:expr, $msg:literal $(,)?) => {
        $crate::assert::ensure($cond, format!($msg))?
    };
    ($cond:expr, $fmt:literal, $($arg:expr),+ $(,)?) => {
        $crate::assert::ensure($cond, format!($fmt, $($arg),+))?
    };
}
