// Assertion checks
//
// Every check funnels into `fail`, so the failure text stays uniform.

use crate::error::{AssertionError, Result};

use super::ordered::Ordered;
use super::truthy::Truthy;

fn fail(message: Option<&str>) -> AssertionError {
    let err = AssertionError::new(message);
    tracing::trace!(target: "invariant::assert", error = %err, "assertion failed");
    err
}

fn check(passed: bool, message: Option<&str>) -> Result {
    if passed { Ok(()) } else { Err(fail(message)) }
}

/// Fails unless `value` is truthy (see [`Truthy`]).
///
/// ```
/// use invariant::assert;
///
/// assert!(assert(1, None).is_ok());
/// let err = assert(0, Some("must be non-zero")).unwrap_err();
/// assert_eq!(err.to_string(), "Assertion Error: must be non-zero");
/// ```
pub fn assert<T: Truthy>(value: T, message: Option<&str>) -> Result {
    check(value.is_truthy(), message)
}

/// Fails on `None`, otherwise hands back the inner value.
pub fn assert_some<T>(value: Option<T>, message: Option<&str>) -> Result<T> {
    value.ok_or_else(|| fail(message))
}

/// Fails unless both values are equal
pub fn assert_eq<T: PartialEq>(left: T, right: T, message: Option<&str>) -> Result {
    check(left == right, message)
}

/// Fails if both values are equal
pub fn assert_ne<T: PartialEq>(left: T, right: T, message: Option<&str>) -> Result {
    check(left != right, message)
}

/// Fails unless `left > right`
pub fn assert_gt<T: Ordered>(left: T, right: T, message: Option<&str>) -> Result {
    check(left > right, message)
}

/// Fails unless `left < right`
pub fn assert_lt<T: Ordered>(left: T, right: T, message: Option<&str>) -> Result {
    check(left < right, message)
}

/// Fails unless `left >= right`
pub fn assert_gte<T: Ordered>(left: T, right: T, message: Option<&str>) -> Result {
    check(left >= right, message)
}

/// Fails unless `left <= right`
pub fn assert_lte<T: Ordered>(left: T, right: T, message: Option<&str>) -> Result {
    check(left <= right, message)
}
