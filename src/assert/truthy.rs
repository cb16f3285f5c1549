// Truthiness predicate used by `assert`

use std::borrow::Cow;
use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet};
use std::rc::Rc;
use std::sync::Arc;

/// Decides whether a value passes `assert`.
///
/// Falsy values are `false`, numeric zero, NaN, the empty string,
/// `None`, `()` and JSON `null`. Everything else is truthy, including
/// empty containers.
pub trait Truthy {
    fn is_truthy(&self) -> bool;
}

impl Truthy for bool {
    fn is_truthy(&self) -> bool {
        *self
    }
}

impl Truthy for () {
    fn is_truthy(&self) -> bool {
        false
    }
}

macro_rules! impl_truthy_int {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Truthy for $ty {
                fn is_truthy(&self) -> bool {
                    *self != 0
                }
            }
        )*
    };
}

impl_truthy_int!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

impl Truthy for f32 {
    fn is_truthy(&self) -> bool {
        *self != 0.0 && !self.is_nan()
    }
}

impl Truthy for f64 {
    fn is_truthy(&self) -> bool {
        *self != 0.0 && !self.is_nan()
    }
}

impl Truthy for char {
    fn is_truthy(&self) -> bool {
        true
    }
}

impl Truthy for str {
    fn is_truthy(&self) -> bool {
        !self.is_empty()
    }
}

impl Truthy for String {
    fn is_truthy(&self) -> bool {
        !self.is_empty()
    }
}

impl Truthy for Cow<'_, str> {
    fn is_truthy(&self) -> bool {
        !self.is_empty()
    }
}

impl<T: Truthy> Truthy for Option<T> {
    fn is_truthy(&self) -> bool {
        self.as_ref().is_some_and(Truthy::is_truthy)
    }
}

impl<T: Truthy + ?Sized> Truthy for &T {
    fn is_truthy(&self) -> bool {
        (**self).is_truthy()
    }
}

impl<T: Truthy + ?Sized> Truthy for &mut T {
    fn is_truthy(&self) -> bool {
        (**self).is_truthy()
    }
}

impl<T: Truthy + ?Sized> Truthy for Box<T> {
    fn is_truthy(&self) -> bool {
        (**self).is_truthy()
    }
}

impl<T: Truthy + ?Sized> Truthy for Rc<T> {
    fn is_truthy(&self) -> bool {
        (**self).is_truthy()
    }
}

impl<T: Truthy + ?Sized> Truthy for Arc<T> {
    fn is_truthy(&self) -> bool {
        (**self).is_truthy()
    }
}

// Containers are truthy regardless of length
impl<T> Truthy for [T] {
    fn is_truthy(&self) -> bool {
        true
    }
}

impl<T, const N: usize> Truthy for [T; N] {
    fn is_truthy(&self) -> bool {
        true
    }
}

impl<T> Truthy for Vec<T> {
    fn is_truthy(&self) -> bool {
        true
    }
}

impl<K, V, S> Truthy for HashMap<K, V, S> {
    fn is_truthy(&self) -> bool {
        true
    }
}

impl<T, S> Truthy for HashSet<T, S> {
    fn is_truthy(&self) -> bool {
        true
    }
}

impl<K, V> Truthy for BTreeMap<K, V> {
    fn is_truthy(&self) -> bool {
        true
    }
}

impl<T> Truthy for BTreeSet<T> {
    fn is_truthy(&self) -> bool {
        true
    }
}

#[cfg(feature = "json")]
impl Truthy for serde_json::Value {
    fn is_truthy(&self) -> bool {
        use serde_json::Value;

        match self {
            Value::Null => false,
            Value::Bool(b) => *b,
            Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    i != 0
                } else if let Some(u) = n.as_u64() {
                    u != 0
                } else {
                    n.as_f64().is_some_and(|f| f.is_truthy())
                }
            }
            Value::String(s) => !s.is_empty(),
            Value::Array(_) | Value::Object(_) => true,
        }
    }
}

#[cfg(feature = "chrono")]
mod chrono_impls {
    use super::Truthy;
    use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, TimeZone};

    impl<Tz: TimeZone> Truthy for DateTime<Tz> {
        fn is_truthy(&self) -> bool {
            true
        }
    }

    impl Truthy for NaiveDate {
        fn is_truthy(&self) -> bool {
            true
        }
    }

    impl Truthy for NaiveDateTime {
        fn is_truthy(&self) -> bool {
            true
        }
    }

    impl Truthy for NaiveTime {
        fn is_truthy(&self) -> bool {
            true
        }
    }
}

#[cfg(feature = "bigint")]
mod bigint_impls {
    use super::Truthy;
    use num_bigint::{BigInt, BigUint, Sign};

    impl Truthy for BigInt {
        fn is_truthy(&self) -> bool {
            self.sign() != Sign::NoSign
        }
    }

    impl Truthy for BigUint {
        fn is_truthy(&self) -> bool {
            self.bits() != 0
        }
    }
}
