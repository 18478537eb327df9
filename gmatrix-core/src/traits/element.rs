//! Matrix element type constraints
//!
//! This module defines what a type must provide to be stored in a
//! `Matrix<T>` and combined by its operators.

use core::ops::{Add, AddAssign, Mul, Sub, SubAssign};

/// Conjugation applied to each element by a matrix transpose
///
/// Real types conjugate to themselves. Complex types return their complex
/// conjugate, which turns the transpose of a complex matrix into its
/// conjugate (Hermitian) transpose. Dispatch happens at compile time per
/// element type.
pub trait Conjugate {
    /// Return the conjugate of this value
    fn conjugate(&self) -> Self;
}

/// Trait for types that can be stored as matrix elements
///
/// Elements must be:
/// - Clone: matrices have value semantics and copy their cells
/// - Default: the default value is the additive zero
/// - PartialEq: matrices compare cell by cell
/// - `+ - * += -=`: the arithmetic used by the matrix operators
/// - Conjugate: the per-element step of a transpose
///
/// It is implemented automatically for every type satisfying these bounds,
/// so a custom element only needs a [`Conjugate`] impl on top of its
/// arithmetic.
pub trait MatrixElement:
    Clone
    + Default
    + PartialEq
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + AddAssign
    + SubAssign
    + Conjugate
{
    /// The additive identity, taken from `Default`
    #[inline]
    fn zero() -> Self {
        Self::default()
    }
}

impl<T> MatrixElement for T where
    T: Clone
        + Default
        + PartialEq
        + Add<Output = T>
        + Sub<Output = T>
        + Mul<Output = T>
        + AddAssign
        + SubAssign
        + Conjugate
{
}

/// Implement identity conjugation for real primitive types
macro_rules! impl_real_conjugate {
    ($($type:ty),* $(,)?) => {
        $(
            impl Conjugate for $type {
                #[inline]
                fn conjugate(&self) -> Self {
                    *self
                }
            }
        )*
    };
}

impl_real_conjugate!(i8, i16, i32, i64, i128, isize);
impl_real_conjugate!(u8, u16, u32, u64, u128, usize);
impl_real_conjugate!(f32, f64);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Complex128;

    fn assert_element<T: MatrixElement>() {}

    #[test]
    fn test_element_impls() {
        assert_element::<i32>();
        assert_element::<u64>();
        assert_element::<f32>();
        assert_element::<f64>();
        assert_element::<Complex128>();
    }

    #[test]
    fn test_zero() {
        assert_eq!(<i32 as MatrixElement>::zero(), 0);
        assert_eq!(<f64 as MatrixElement>::zero(), 0.0);
        assert_eq!(<Complex128 as MatrixElement>::zero(), Complex128::ZERO);
    }

    #[test]
    fn test_real_conjugate_is_identity() {
        assert_eq!((-7i32).conjugate(), -7);
        assert_eq!(2.5f64.conjugate(), 2.5);
        assert_eq!(Complex128::new(1.0, 1.0).conjugate(), Complex128::new(1.0, -1.0));
    }
}
