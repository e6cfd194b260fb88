//! Element type contract for sparse vectors
//!
//! This module defines what a type must provide to be stored in a
//! sparse vector, and the extra algebra needed by the arithmetic layer.

use core::ops::{Add, Mul, Sub};

/// Trait for types that can be stored as sparse vector elements
///
/// Every element type supplies a zero value. Unmaterialized slots of a
/// vector read as this zero, and compaction removes stored entries that
/// compare equal to it.
pub trait Element: Clone + PartialEq {
    /// The zero (default) value of this type
    fn zero() -> Self;

    /// Whether this value compares equal to zero
    fn is_zero(&self) -> bool {
        *self == Self::zero()
    }
}

/// Element types that support the merge arithmetic of the vector layer
///
/// Blanket-implemented for every [`Element`] with by-value `+`, `-` and `*`.
pub trait Arithmetic:
    Element + Add<Output = Self> + Sub<Output = Self> + Mul<Output = Self>
{
}

impl<T> Arithmetic for T where
    T: Element + Add<Output = T> + Sub<Output = T> + Mul<Output = T>
{
}

macro_rules! impl_element {
    ($zero:expr => $($t:ty),* $(,)?) => {
        $(
            impl Element for $t {
                #[inline]
                fn zero() -> Self {
                    $zero
                }
            }
        )*
    };
}

impl_element!(0 => i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
impl_element!(0.0 => f32, f64);
