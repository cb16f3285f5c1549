// Values accepted by the ordering checks

use std::borrow::Cow;

/// Marker for value kinds with a natural order: numbers, text,
/// arbitrary-precision integers and calendar/timestamp values.
///
/// Both sides of an ordering check share one `Ordered` type, so
/// comparing text against a timestamp does not compile.
pub trait Ordered: PartialOrd {}

macro_rules! impl_ordered {
    ($($ty:ty),* $(,)?) => {
        $(impl Ordered for $ty {})*
    };
}

impl_ordered!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64, char, str, String,
);

impl Ordered for Cow<'_, str> {}

impl<T: Ordered + ?Sized> Ordered for &T {}

#[cfg(feature = "chrono")]
mod chrono_impls {
    use super::Ordered;
    use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, TimeZone};

    impl<Tz: TimeZone> Ordered for DateTime<Tz> {}
    impl Ordered for NaiveDate {}
    impl Ordered for NaiveDateTime {}
    impl Ordered for NaiveTime {}
}

#[cfg(feature = "bigint")]
mod bigint_impls {
    use super::Ordered;
    use num_bigint::{BigInt, BigUint};

    impl Ordered for BigInt {}
    impl Ordered for BigUint {}
}
