use std::fmt;

/// Edge weight and path distance.
///
/// Only integer types are supported. A path distance is the sum of edge
/// weights, which is computed with [`checked_add`](Weight::checked_add) so that
/// an overflow is reported instead of silently wrapping around.
pub trait Weight: Ord + Copy + fmt::Debug + fmt::Display {
    fn zero() -> Self;

    /// Whether the type can represent negative values.
    ///
    /// The check for negative weights during the shortest path search is
    /// skipped for unsigned types.
    fn is_unsigned() -> bool;

    fn checked_add(self, other: Self) -> Option<Self>;
}

macro_rules! impl_int_weight {
    ($ty:ty, $is_unsigned:expr) => {
        impl Weight for $ty {
            fn zero() -> Self {
                0
            }

            fn is_unsigned() -> bool {
                $is_unsigned
            }

            fn checked_add(self, other: Self) -> Option<Self> {
                <$ty>::checked_add(self, other)
            }
        }
    };
}

impl_int_weight!(i8, false);
impl_int_weight!(i16, false);
impl_int_weight!(i32, false);
impl_int_weight!(i64, false);
impl_int_weight!(u8, true);
impl_int_weight!(u16, true);
impl_int_weight!(u32, true);
impl_int_weight!(u64, true);
impl_int_weight!(isize, false);
impl_int_weight!(usize, true);
