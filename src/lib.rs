//! Fail-fast runtime assertions.
//!
//! Each check returns `Ok(())` when its condition holds and an
//! [`AssertionError`] rendering `Assertion Error[: <message>]` otherwise.

pub mod assert;
pub mod error;

pub use assert::{
    Ordered, Truthy, assert, assert_eq, assert_gt, assert_gte, assert_lt, assert_lte, assert_ne,
    assert_some,
};
pub use error::{ASSERTION_ERROR, AssertionError, Result};
