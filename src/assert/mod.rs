// Assertion module

pub mod engine;
pub mod ordered;
pub mod truthy;

pub use engine::{
    assert, assert_eq, assert_gt, assert_gte, assert_lt, assert_lte, assert_ne, assert_some,
};
pub use ordered::Ordered;
pub use truthy::Truthy;
