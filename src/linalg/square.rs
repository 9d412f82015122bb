//! Determinants, inverses and division for the square matrix shapes.
//!
//! All closed forms are naive cofactor expansions along the first column, with a fixed term
//! order so results are reproducible bit for bit. Nothing checks for singularity: a zero
//! determinant produces `inf`/`NaN` components as IEEE division dictates.
use crate::core::prelude::*;
use num_traits::Zero;
use std::ops::{Div, DivAssign};

/// Operations only defined for 2x2, 3x3 and 4x4 matrices.
pub trait SquareMatrix: Copy {
    type Scalar: FloatScalar;

    fn determinant(&self) -> Self::Scalar;

    /// Returns the adjugate divided by the determinant.
    ///
    /// A singular matrix is not an error: the result contains `inf` or `NaN`, and a warning is
    /// logged.
    fn inverse(&self) -> Self;
}

/// Drops column `skip_col` and row `skip_row`.
fn minor<T: FloatScalar, const N: usize, const M: usize>(
    m: &Matrix<T, N, N>,
    skip_col: usize,
    skip_row: usize,
) -> Matrix<T, M, M> {
    const { assert!(M + 1 == N, "a minor has one row and one column fewer") };
    Matrix::from_fn(|col, row| {
        let col = if col < skip_col { col } else { col + 1 };
        let row = if row < skip_row { row } else { row + 1 };
        m[col][row]
    })
}

/// Transposed cofactor matrix; `inv[c][r]` takes the minor without column `r` and row `c`.
fn adjugate<T: FloatScalar, const N: usize, const M: usize>(m: &Matrix<T, N, N>) -> Matrix<T, N, N>
where
    Matrix<T, M, M>: SquareMatrix<Scalar = T>,
{
    Matrix::from_fn(|col, row| {
        let cofactor = minor::<T, N, M>(m, row, col).determinant();
        if (col + row) % 2 == 0 {
            cofactor
        } else {
            -cofactor
        }
    })
}

fn warn_if_singular<T: FloatScalar, const N: usize>(m: &Matrix<T, N, N>, det: T) {
    if det.is_zero() {
        warn!("inverse(): singular matrix:\n{}", m);
    }
}

impl<T: FloatScalar> SquareMatrix for Matrix<T, 2, 2> {
    type Scalar = T;

    fn determinant(&self) -> T {
        let m = self;
        m[0][0] * m[1][1] - m[1][0] * m[0][1]
    }

    fn inverse(&self) -> Self {
        let m = self;
        let det = self.determinant();
        warn_if_singular(self, det);
        Self::from_columns([
            Vector::<T, 2>::new(m[1][1], -m[0][1]),
            Vector::<T, 2>::new(-m[1][0], m[0][0]),
        ]) / det
    }
}

impl<T: FloatScalar> SquareMatrix for Matrix<T, 3, 3> {
    type Scalar = T;

    fn determinant(&self) -> T {
        // Components labelled a..i column by column.
        let [a, b, c] = self[0].to_array();
        let [d, e, f] = self[1].to_array();
        let [g, h, i] = self[2].to_array();
        a * (e * i - f * h) - b * (d * i - f * g) + c * (d * h - e * g)
    }

    fn inverse(&self) -> Self {
        let det = self.determinant();
        warn_if_singular(self, det);
        adjugate::<T, 3, 2>(self) / det
    }
}

impl<T: FloatScalar> SquareMatrix for Matrix<T, 4, 4> {
    type Scalar = T;

    fn determinant(&self) -> T {
        let m = self;
        let sub = |row| minor::<T, 4, 3>(m, 0, row).determinant();
        m[0][0] * sub(0) - m[0][1] * sub(1) + m[0][2] * sub(2) - m[0][3] * sub(3)
    }

    fn inverse(&self) -> Self {
        let det = self.determinant();
        warn_if_singular(self, det);
        adjugate::<T, 4, 3>(self) / det
    }
}

/// # Examples
/// ```
/// use gg_math::core::prelude::*;
/// let m = Mat2x2::from_rows([[1.0, 3.0], [2.0, 4.0]]);
/// assert_eq!(determinant(m), 1.0 * 4.0 - 2.0 * 3.0);
/// ```
#[must_use]
pub fn determinant<M: SquareMatrix>(m: M) -> M::Scalar {
    m.determinant()
}

/// # Examples
/// ```
/// use gg_math::core::prelude::*;
/// let m = Mat2x2::from_rows([[4.0, 7.0], [2.0, 6.0]]);
/// check_almost_eq!(m * inverse(m), Mat2x2::identity());
/// ```
pub fn inverse<M: SquareMatrix>(m: M) -> M {
    m.inverse()
}

/// `a / b` is `a * inverse(b)`.
impl<T: FloatScalar, const R: usize, const N: usize> Div<Matrix<T, N, N>> for Matrix<T, R, N>
where
    Matrix<T, N, N>: SquareMatrix<Scalar = T>,
{
    type Output = Matrix<T, R, N>;

    fn div(self, rhs: Matrix<T, N, N>) -> Self::Output {
        self * rhs.inverse()
    }
}
impl<T: FloatScalar, const R: usize, const N: usize> DivAssign<Matrix<T, N, N>>
    for Matrix<T, R, N>
where
    Matrix<T, N, N>: SquareMatrix<Scalar = T>,
{
    fn div_assign(&mut self, rhs: Matrix<T, N, N>) {
        *self = *self / rhs;
    }
}

/// `v / m` is `v * inverse(m)`, treating `v` as a row.
impl<T: FloatScalar, const N: usize> Div<Matrix<T, N, N>> for Vector<T, N>
where
    Matrix<T, N, N>: SquareMatrix<Scalar = T>,
{
    type Output = Vector<T, N>;

    fn div(self, rhs: Matrix<T, N, N>) -> Self::Output {
        self * rhs.inverse()
    }
}

/// `m / v` is `inverse(m) * v`.
impl<T: FloatScalar, const N: usize> Div<Vector<T, N>> for Matrix<T, N, N>
where
    Matrix<T, N, N>: SquareMatrix<Scalar = T>,
{
    type Output = Vector<T, N>;

    fn div(self, rhs: Vector<T, N>) -> Self::Output {
        self.inverse() * rhs
    }
}
