//! Operator overloads for [`Vector`].
//!
//! Every binary operator comes in three forms, all component-wise:
//! - `vector op vector`;
//! - `vector op scalar`, applying the scalar to every component;
//! - `scalar op vector`, computing `s op v[i]` for each component.
//!
//! The last form is not the mirror of the second for non-commutative operators:
//! `1.0 - v` is `(1 - v.x, 1 - v.y, ..)`, and `1.0 / v` is `(1 / v.x, 1 / v.y, ..)`.
//!
//! `+ - * /` work for every [`Scalar`]; `% & | ^ << >>` and `!` only for [`IntScalar`].
//! Integer `+ - *` wrap modulo 2^n, so `UVec2::new(0, 5) - 1` is `(u32::MAX, 4)`.
use crate::linalg::scalar::{IntScalar, Scalar, SignedScalar};
use crate::linalg::vector::Vector;
use std::ops::{
    Add, AddAssign, BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, Div,
    DivAssign, Mul, MulAssign, Neg, Not, Rem, RemAssign, Shl, ShlAssign, Shr, ShrAssign, Sub,
    SubAssign,
};

macro_rules! impl_vector_binop {
    ($bound:ident, $Op:ident, $op:ident, $OpAssign:ident, $op_assign:ident) => {
        impl_vector_binop!($bound, $Op, $op, $OpAssign, $op_assign, $Op::$op);
    };
    ($bound:ident, $Op:ident, $op:ident, $OpAssign:ident, $op_assign:ident, $f:path) => {
        impl<T: $bound, const N: usize> $Op<Vector<T, N>> for Vector<T, N> {
            type Output = Vector<T, N>;

            fn $op(self, rhs: Vector<T, N>) -> Self::Output {
                self.zip_map(rhs, |a, b| $f(a, b))
            }
        }
        impl<T: $bound, const N: usize> $Op<T> for Vector<T, N> {
            type Output = Vector<T, N>;

            fn $op(self, rhs: T) -> Self::Output {
                self.map(|a| $f(a, rhs))
            }
        }
        impl<T: $bound, const N: usize> $Op<&Vector<T, N>> for &Vector<T, N> {
            type Output = Vector<T, N>;

            fn $op(self, rhs: &Vector<T, N>) -> Self::Output {
                self.zip_map(*rhs, |a, b| $f(a, b))
            }
        }
        impl<T: $bound, const N: usize> $OpAssign<Vector<T, N>> for Vector<T, N> {
            fn $op_assign(&mut self, rhs: Vector<T, N>) {
                for (a, b) in self.iter_mut().zip(rhs) {
                    *a = $f(*a, b);
                }
            }
        }
        impl<T: $bound, const N: usize> $OpAssign<T> for Vector<T, N> {
            fn $op_assign(&mut self, rhs: T) {
                for a in self.iter_mut() {
                    *a = $f(*a, rhs);
                }
            }
        }
    };
}

impl_vector_binop!(Scalar, Add, add, AddAssign, add_assign, Scalar::add_wrapping);
impl_vector_binop!(Scalar, Sub, sub, SubAssign, sub_assign, Scalar::sub_wrapping);
impl_vector_binop!(Scalar, Mul, mul, MulAssign, mul_assign, Scalar::mul_wrapping);
impl_vector_binop!(Scalar, Div, div, DivAssign, div_assign);
impl_vector_binop!(IntScalar, Rem, rem, RemAssign, rem_assign);
impl_vector_binop!(IntScalar, BitAnd, bitand, BitAndAssign, bitand_assign);
impl_vector_binop!(IntScalar, BitOr, bitor, BitOrAssign, bitor_assign);
impl_vector_binop!(IntScalar, BitXor, bitxor, BitXorAssign, bitxor_assign);
impl_vector_binop!(IntScalar, Shl, shl, ShlAssign, shl_assign);
impl_vector_binop!(IntScalar, Shr, shr, ShrAssign, shr_assign);

// Scalar on the left has to be implemented per primitive: `impl<T> Add<Vector<T, N>> for T`
// would be an orphan.
macro_rules! impl_scalar_lhs_binop {
    ([$($Op:ident::$op:ident => $f:path),+]; $t:ty) => {$(
        impl<const N: usize> $Op<Vector<$t, N>> for $t {
            type Output = Vector<$t, N>;

            fn $op(self, rhs: Vector<$t, N>) -> Self::Output {
                rhs.map(|c| $f(self, c))
            }
        }
        impl<const N: usize> $Op<&Vector<$t, N>> for $t {
            type Output = Vector<$t, N>;

            fn $op(self, rhs: &Vector<$t, N>) -> Self::Output {
                rhs.map(|c| $f(self, c))
            }
        }
    )+};
}

macro_rules! impl_scalar_lhs_arith {
    ($($t:ty),*) => {$(
        impl_scalar_lhs_binop!(
            [
                Add::add => Scalar::add_wrapping,
                Sub::sub => Scalar::sub_wrapping,
                Mul::mul => Scalar::mul_wrapping,
                Div::div => Div::div
            ];
            $t
        );
    )*};
}
macro_rules! impl_scalar_lhs_int {
    ($($t:ty),*) => {$(
        impl_scalar_lhs_binop!(
            [
                Rem::rem => Rem::rem,
                BitAnd::bitand => BitAnd::bitand,
                BitOr::bitor => BitOr::bitor,
                BitXor::bitxor => BitXor::bitxor,
                Shl::shl => Shl::shl,
                Shr::shr => Shr::shr
            ];
            $t
        );
    )*};
}

impl_scalar_lhs_arith!(i8, i16, i32, i64, u8, u16, u32, u64, f32, f64);
impl_scalar_lhs_int!(i8, i16, i32, i64, u8, u16, u32, u64);

impl<T: SignedScalar, const N: usize> Neg for Vector<T, N> {
    type Output = Vector<T, N>;

    fn neg(self) -> Self::Output {
        self.map(Neg::neg)
    }
}
impl<T: SignedScalar, const N: usize> Neg for &Vector<T, N> {
    type Output = Vector<T, N>;

    fn neg(self) -> Self::Output {
        self.map(Neg::neg)
    }
}

impl<T: IntScalar, const N: usize> Not for Vector<T, N> {
    type Output = Vector<T, N>;

    fn not(self) -> Self::Output {
        self.map(Not::not)
    }
}
