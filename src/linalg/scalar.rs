use crate::core::config::{EPSILON, EPSILON_F64};
use num_traits::{Float, Num, PrimInt, WrappingAdd, WrappingMul, WrappingSub};
use std::fmt::{Debug, Display};
use std::ops::{Neg, Shl, Shr};

/// A component type for [`Vector`](crate::linalg::vector::Vector).
///
/// Implemented for the primitive integers up to 64 bits and for `f32`/`f64`. The arithmetic
/// operators (`+ - * /`) come from [`Num`]; conversions between scalar types go through
/// [`AsPrimitive`](num_traits::AsPrimitive) so they behave like `as`.
///
/// Vector `+ - *` go through the `*_wrapping` methods instead of [`Num`]: integer components
/// wrap modulo 2^n rather than overflow.
pub trait Scalar:
    Copy + Default + Debug + Display + PartialEq + PartialOrd + Num + Send + Sync + 'static
{
    fn add_wrapping(self, rhs: Self) -> Self;
    fn sub_wrapping(self, rhs: Self) -> Self;
    fn mul_wrapping(self, rhs: Self) -> Self;
}

/// Integer scalars: unlocks `%`, the bitwise operators and shifts on vectors.
pub trait IntScalar:
    Scalar
    + PrimInt
    + WrappingAdd
    + WrappingSub
    + WrappingMul
    + Shl<Self, Output = Self>
    + Shr<Self, Output = Self>
{
}

/// Scalars with a unary minus.
pub trait SignedScalar: Scalar + Neg<Output = Self> {}

/// Floating-point scalars. Geometric operations and every matrix require this.
pub trait FloatScalar: SignedScalar + Float {
    /// Tolerance for `almost_eq()`.
    const EPSILON: Self;
}

macro_rules! impl_int_scalar {
    ($($t:ty),*) => {$(
        impl Scalar for $t {
            fn add_wrapping(self, rhs: Self) -> Self {
                WrappingAdd::wrapping_add(&self, &rhs)
            }
            fn sub_wrapping(self, rhs: Self) -> Self {
                WrappingSub::wrapping_sub(&self, &rhs)
            }
            fn mul_wrapping(self, rhs: Self) -> Self {
                WrappingMul::wrapping_mul(&self, &rhs)
            }
        }
        impl IntScalar for $t {}
    )*};
}
macro_rules! impl_float_scalar {
    ($($t:ty => $eps:expr),*) => {$(
        impl Scalar for $t {
            fn add_wrapping(self, rhs: Self) -> Self {
                self + rhs
            }
            fn sub_wrapping(self, rhs: Self) -> Self {
                self - rhs
            }
            fn mul_wrapping(self, rhs: Self) -> Self {
                self * rhs
            }
        }
        impl FloatScalar for $t {
            const EPSILON: Self = $eps;
        }
    )*};
}
macro_rules! impl_signed_scalar {
    ($($t:ty),*) => {$(
        impl SignedScalar for $t {}
    )*};
}

impl_int_scalar!(i8, i16, i32, i64, u8, u16, u32, u64);
impl_float_scalar!(f32 => EPSILON, f64 => EPSILON_F64);
impl_signed_scalar!(i8, i16, i32, i64, f32, f64);
