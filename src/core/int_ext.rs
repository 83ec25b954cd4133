use crate::core::nullable::lift;

/// Sign and range predicates for signed integers.
pub trait IntExtensions: Copy + PartialOrd {
    fn is_zero(self) -> bool;

    fn is_positive(self) -> bool;

    fn is_negative(self) -> bool;

    /// Strictly between `low` and `high`; both bounds are excluded.
    fn is_between(self, low: Self, high: Self) -> bool {
        self > low && self < high
    }
}

macro_rules! impl_int_extensions {
    ($($t:ty),* $(,)?) => {
        $(
            impl IntExtensions for $t {
                fn is_zero(self) -> bool {
                    self == 0
                }

                fn is_positive(self) -> bool {
                    self > 0
                }

                fn is_negative(self) -> bool {
                    self < 0
                }
            }
        )*
    };
}

impl_int_extensions!(i8, i16, i32, i64, i128, isize);

/// The same predicates over `Option`. Absent values answer `false`, except
/// for [`is_null`](Self::is_null) and [`is_null_or_zero`](Self::is_null_or_zero).
pub trait NullableIntExtensions {
    type Value;

    fn is_null(&self) -> bool;

    fn is_null_or_zero(&self) -> bool;

    fn is_zero(&self) -> bool;

    fn is_positive(&self) -> bool;

    fn is_negative(&self) -> bool;

    /// `false` when the value or either bound is absent.
    fn is_between(&self, low: Option<Self::Value>, high: Option<Self::Value>) -> bool;
}

impl<T: IntExtensions> NullableIntExtensions for Option<T> {
    type Value = T;

    fn is_null(&self) -> bool {
        self.is_none()
    }

    fn is_null_or_zero(&self) -> bool {
        self.map_or(true, IntExtensions::is_zero)
    }

    fn is_zero(&self) -> bool {
        lift(*self, IntExtensions::is_zero)
    }

    fn is_positive(&self) -> bool {
        lift(*self, IntExtensions::is_positive)
    }

    fn is_negative(&self) -> bool {
        lift(*self, IntExtensions::is_negative)
    }

    fn is_between(&self, low: Option<T>, high: Option<T>) -> bool {
        lift(self.zip(low).zip(high), |((value, low), high)| {
            value.is_between(low, high)
        })
    }
}
