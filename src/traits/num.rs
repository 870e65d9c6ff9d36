use core::ops::{Div, Rem};

/// Primitive integers, as far as the list cares about them.
///
/// `MIN` doubles as the "negative infinity" returned by `max()` on an empty
/// list, and `TEN` is the base used when a list is read as a little-endian
/// sequence of decimal digits.
pub trait Integer: Copy + Ord + Div<Output = Self> + Rem<Output = Self> {
    const MIN: Self;
    const ZERO: Self;
    const TEN: Self;

    /// `None` when the sum does not fit in `Self`.
    fn checked_add(self, rhs: Self) -> Option<Self>;
}

macro_rules! impl_integer {
    ($($t:ty),* $(,)?) => {
        $(
            impl Integer for $t {
                const MIN: Self = <$t>::MIN;
                const ZERO: Self = 0;
                const TEN: Self = 10;

                fn checked_add(self, rhs: Self) -> Option<Self> {
                    <$t>::checked_add(self, rhs)
                }
            }
        )*
    };
}

impl_integer!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
