use crate::core::prelude::*;
use num_traits::AsPrimitive;
use std::{
    fmt,
    fmt::Formatter,
    ops::{Add, AddAssign, Div, DivAssign, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign},
};

/// A matrix with `R` rows and `C` columns of floating-point scalars, for `R` and `C` in `2..=4`.
///
/// Storage is column-major: `m[i]` is the i-th column (a `Vector<T, R>`) and `m[i][j]` is row `j`
/// of that column. Matrices over integer scalars do not exist; `Matrix<i32, 2, 2>` fails to
/// compile.
///
/// # Examples
///
/// ```
/// use gg_math::core::prelude::*;
///
/// // Values are listed row by row.
/// let m = Mat2x2::from_rows([[1.0, 3.0], [2.0, 4.0]]);
/// assert_eq!(m[0], Vec2::new(1.0, 2.0));
/// assert_eq!(m[1], Vec2::new(3.0, 4.0));
/// assert_eq!(m.determinant(), -2.0);
/// assert_eq!(m.transpose(), Mat2x2::from_rows([[1.0, 2.0], [3.0, 4.0]]));
/// ```
///
/// # Products
/// `*` between matrices is the proper matrix product, defined whenever the inner dimensions agree;
/// the result shape follows from the operands:
///
/// ```
/// use gg_math::core::prelude::*;
///
/// let a = Mat2x3::from_rows([[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]]);
/// let b = Mat3x2::from_rows([[7.0, 8.0], [9.0, 10.0], [11.0, 12.0]]);
/// let ab: Mat2x2 = a * b;
/// assert_eq!(ab, Mat2x2::from_rows([[58.0, 64.0], [139.0, 154.0]]));
/// let ba: Mat3x3 = b * a;
/// assert_eq!(ba.row(0), Vec3::new(39.0, 54.0, 69.0));
/// ```
///
/// Use [`comp_mul()`](Matrix::comp_mul) for the component-wise product.
///
/// # Shapes
/// Only floating-point scalars and shapes from 2x2 to 4x4 compile:
///
/// ```compile_fail
/// use gg_math::core::prelude::*;
/// let m = Matrix::<i32, 2, 2>::identity();
/// ```
///
/// ```compile_fail
/// use gg_math::core::prelude::*;
/// let m = Matrix::<f32, 5, 5>::identity();
/// ```
///
/// ```compile_fail
/// use gg_math::core::prelude::*;
/// let m = Matrix::<f32, 1, 3>::zero();
/// ```
#[derive(Copy, Clone, Debug, PartialEq)]
#[must_use]
pub struct Matrix<T: FloatScalar, const R: usize, const C: usize> {
    cols: [Vector<T, R>; C],
}

impl<T: FloatScalar, const R: usize, const C: usize> Matrix<T, R, C> {
    const VALID_SHAPE: () = assert!(
        R >= 2 && R <= 4 && C >= 2 && C <= 4,
        "Matrix rows and columns must be in 2..=4"
    );

    pub const fn from_columns(cols: [Vector<T, R>; C]) -> Self {
        #[allow(clippy::let_unit_value)]
        let () = Self::VALID_SHAPE;
        Self { cols }
    }

    /// Builds a matrix from values listed row by row.
    pub fn from_rows(rows: [[T; C]; R]) -> Self {
        Self::from_fn(|col, row| rows[row][col])
    }

    /// Builds a matrix by calling `f(col, row)` for each component, column by column.
    pub fn from_fn(mut f: impl FnMut(usize, usize) -> T) -> Self {
        Self::from_columns(std::array::from_fn(|col| {
            Vector::from_fn(|row| f(col, row))
        }))
    }

    /// Returns a matrix with `value` on the main diagonal and zero elsewhere. For non-square
    /// shapes the diagonal has `min(R, C)` entries.
    pub fn from_diagonal(value: T) -> Self {
        Self::from_fn(|col, row| if col == row { value } else { T::zero() })
    }

    /// The generalized identity: ones on the main diagonal, zero elsewhere.
    pub fn identity() -> Self {
        Self::from_diagonal(T::one())
    }
    pub fn zero() -> Self {
        Self::from_columns([Vector::zero(); C])
    }

    /// Returns the matrix `col * row^T`, with `R` rows and `C` columns.
    ///
    /// # Examples
    ///
    /// ```
    /// use gg_math::core::prelude::*;
    /// let m = Mat2x3::outer_product(Vec2::new(1.0, 2.0), Vec3::new(3.0, 4.0, 5.0));
    /// assert_eq!(m.row(1), Vec3::new(6.0, 8.0, 10.0));
    /// ```
    pub fn outer_product(col: Vector<T, R>, row: Vector<T, C>) -> Self {
        Self::from_fn(|c, r| col[r] * row[c])
    }

    #[must_use]
    pub fn columns(&self) -> &[Vector<T, R>; C] {
        &self.cols
    }

    pub fn column(&self, index: usize) -> Vector<T, R> {
        check_lt!(index, C);
        self.cols[index]
    }
    pub fn row(&self, index: usize) -> Vector<T, C> {
        check_lt!(index, R);
        Vector::from_fn(|col| self.cols[col][index])
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Vector<T, R>> {
        self.cols.iter()
    }

    /// Applies `f` to each component.
    pub fn map(self, mut f: impl FnMut(T) -> T) -> Self {
        Self::from_columns(self.cols.map(|col| col.map(&mut f)))
    }

    /// Applies `f` to each pair of corresponding components.
    pub fn zip_map(self, rhs: Self, mut f: impl FnMut(T, T) -> T) -> Self {
        Self::from_fn(|col, row| f(self.cols[col][row], rhs.cols[col][row]))
    }

    /// Converts each component to another floating-point type, with the semantics of `as`.
    pub fn cast<U: FloatScalar>(self) -> Matrix<U, R, C>
    where
        T: AsPrimitive<U>,
    {
        Matrix::from_columns(self.cols.map(|col| col.cast()))
    }

    /// Copies this matrix into another shape. Components present in both shapes are kept; the
    /// rest come from the generalized identity.
    ///
    /// # Examples
    ///
    /// ```
    /// use gg_math::core::prelude::*;
    /// let m = Mat2x2::from_diagonal(2.0);
    /// let grown: Mat3x3 = m.resize();
    /// assert_eq!(grown, Mat3x3::from_rows([[2.0, 0.0, 0.0], [0.0, 2.0, 0.0], [0.0, 0.0, 1.0]]));
    /// let shrunk: Mat2x2 = grown.resize();
    /// assert_eq!(shrunk, m);
    /// ```
    pub fn resize<const R2: usize, const C2: usize>(self) -> Matrix<T, R2, C2> {
        Matrix::from_fn(|col, row| {
            if col < C && row < R {
                self.cols[col][row]
            } else if col == row {
                T::one()
            } else {
                T::zero()
            }
        })
    }

    /// Swaps rows and columns.
    pub fn transpose(&self) -> Matrix<T, C, R> {
        Matrix::from_fn(|col, row| self.cols[row][col])
    }

    /// Component-wise (Hadamard) product.
    pub fn comp_mul(&self, rhs: Self) -> Self {
        self.zip_map(rhs, |a, b| a * b)
    }

    /// Checks if every component is within [`EPSILON`](FloatScalar::EPSILON) of the corresponding
    /// component of `rhs`.
    #[must_use]
    pub fn almost_eq(&self, rhs: Self) -> bool {
        self.iter().zip(rhs.iter()).all(|(a, b)| a.almost_eq(*b))
    }

    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.iter().all(Vector::is_finite)
    }
}

pub fn transpose<T: FloatScalar, const R: usize, const C: usize>(
    m: Matrix<T, R, C>,
) -> Matrix<T, C, R> {
    m.transpose()
}

impl<T: FloatScalar, const R: usize, const C: usize> Default for Matrix<T, R, C> {
    fn default() -> Self {
        Self::identity()
    }
}

impl<T: FloatScalar, const R: usize, const C: usize> From<[Vector<T, R>; C]> for Matrix<T, R, C> {
    fn from(value: [Vector<T, R>; C]) -> Self {
        Self::from_columns(value)
    }
}
/// Column arrays: `[[T; R]; C]` lists the components column by column.
impl<T: FloatScalar, const R: usize, const C: usize> From<[[T; R]; C]> for Matrix<T, R, C> {
    fn from(value: [[T; R]; C]) -> Self {
        Self::from_columns(value.map(Vector::from_array))
    }
}

impl<T: FloatScalar, const R: usize, const C: usize> Index<usize> for Matrix<T, R, C> {
    type Output = Vector<T, R>;

    fn index(&self, index: usize) -> &Self::Output {
        check_lt!(index, C);
        &self.cols[index]
    }
}
impl<T: FloatScalar, const R: usize, const C: usize> IndexMut<usize> for Matrix<T, R, C> {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        check_lt!(index, C);
        &mut self.cols[index]
    }
}

impl<T: FloatScalar, const R: usize, const N: usize, const P: usize> Mul<Matrix<T, N, P>>
    for Matrix<T, R, N>
{
    type Output = Matrix<T, R, P>;

    fn mul(self, rhs: Matrix<T, N, P>) -> Self::Output {
        Matrix::from_columns(rhs.cols.map(|col| self * col))
    }
}

impl<T: FloatScalar, const R: usize, const C: usize> Mul<Vector<T, C>> for Matrix<T, R, C> {
    type Output = Vector<T, R>;

    fn mul(self, rhs: Vector<T, C>) -> Self::Output {
        self.cols
            .iter()
            .zip(rhs)
            .fold(Vector::zero(), |acc, (&col, s)| acc + col * s)
    }
}

/// Treats the vector as a row: the result has one component per column.
impl<T: FloatScalar, const R: usize, const C: usize> Mul<Matrix<T, R, C>> for Vector<T, R> {
    type Output = Vector<T, C>;

    fn mul(self, rhs: Matrix<T, R, C>) -> Self::Output {
        Vector::from_fn(|col| self.dot(rhs.cols[col]))
    }
}

impl<T: FloatScalar, const R: usize, const C: usize> MulAssign<Matrix<T, C, C>>
    for Matrix<T, R, C>
{
    fn mul_assign(&mut self, rhs: Matrix<T, C, C>) {
        *self = *self * rhs;
    }
}

macro_rules! impl_matrix_binop {
    ($Op:ident, $op:ident, $OpAssign:ident, $op_assign:ident) => {
        impl<T: FloatScalar, const R: usize, const C: usize> $Op<Matrix<T, R, C>>
            for Matrix<T, R, C>
        {
            type Output = Matrix<T, R, C>;

            fn $op(self, rhs: Matrix<T, R, C>) -> Self::Output {
                self.zip_map(rhs, |a, b| $Op::$op(a, b))
            }
        }
        impl<T: FloatScalar, const R: usize, const C: usize> $OpAssign<Matrix<T, R, C>>
            for Matrix<T, R, C>
        {
            fn $op_assign(&mut self, rhs: Matrix<T, R, C>) {
                *self = $Op::$op(*self, rhs);
            }
        }
    };
}

impl_matrix_binop!(Add, add, AddAssign, add_assign);
impl_matrix_binop!(Sub, sub, SubAssign, sub_assign);

macro_rules! impl_matrix_scalar_binop {
    ($Op:ident, $op:ident, $OpAssign:ident, $op_assign:ident) => {
        impl<T: FloatScalar, const R: usize, const C: usize> $Op<T> for Matrix<T, R, C> {
            type Output = Matrix<T, R, C>;

            fn $op(self, rhs: T) -> Self::Output {
                self.map(|a| $Op::$op(a, rhs))
            }
        }
        impl<T: FloatScalar, const R: usize, const C: usize> $OpAssign<T> for Matrix<T, R, C> {
            fn $op_assign(&mut self, rhs: T) {
                *self = $Op::$op(*self, rhs);
            }
        }
    };
}

impl_matrix_scalar_binop!(Add, add, AddAssign, add_assign);
impl_matrix_scalar_binop!(Sub, sub, SubAssign, sub_assign);
impl_matrix_scalar_binop!(Mul, mul, MulAssign, mul_assign);
impl_matrix_scalar_binop!(Div, div, DivAssign, div_assign);

// Same orphan-rule workaround as for vectors: `s op m` is `s op m[i][j]` per component.
macro_rules! impl_scalar_lhs_matrix_binop {
    ([$($Op:ident::$op:ident),+]; $t:ty) => {$(
        impl<const R: usize, const C: usize> $Op<Matrix<$t, R, C>> for $t {
            type Output = Matrix<$t, R, C>;

            fn $op(self, rhs: Matrix<$t, R, C>) -> Self::Output {
                rhs.map(|c| $Op::$op(self, c))
            }
        }
    )+};
}

impl_scalar_lhs_matrix_binop!([Add::add, Sub::sub, Mul::mul, Div::div]; f32);
impl_scalar_lhs_matrix_binop!([Add::add, Sub::sub, Mul::mul, Div::div]; f64);

impl<T: FloatScalar, const R: usize, const C: usize> Neg for Matrix<T, R, C> {
    type Output = Matrix<T, R, C>;

    fn neg(self) -> Self::Output {
        self.map(Neg::neg)
    }
}

impl<T: FloatScalar, const R: usize, const C: usize> fmt::Display for Matrix<T, R, C> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let precision = f.precision();
        let rows = (0..R)
            .map(|r| {
                let row = self.row(r);
                let components = if let Some(p) = precision {
                    row.iter().map(|c| format!("{c:.p$}")).join(", ")
                } else {
                    row.iter().join(", ")
                };
                format!("[{components}]")
            })
            .join("\n");
        write!(f, "{rows}")
    }
}

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use super::*;

    #[test]
    fn matrix_default_is_identity() {
        assert_eq!(Mat3x3::default(), Mat3x3::identity());
        assert_eq!(
            Mat2x2::default(),
            Mat2x2::from_rows([[1.0, 0.0], [0.0, 1.0]])
        );
        // Non-square shapes get ones on the min(R, C) diagonal.
        assert_eq!(
            Mat2x3::default(),
            Mat2x3::from_rows([[1.0, 0.0, 0.0], [0.0, 1.0, 0.0]])
        );
        assert_eq!(
            Mat4x2::default().transpose(),
            Mat2x4::identity()
        );
    }

    #[test]
    fn matrix_construction() {
        let by_rows = Mat2x3::from_rows([[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]]);
        let by_columns = Mat2x3::from_columns([
            Vec2::new(1.0, 4.0),
            Vec2::new(2.0, 5.0),
            Vec2::new(3.0, 6.0),
        ]);
        let by_arrays: Mat2x3 = [[1.0, 4.0], [2.0, 5.0], [3.0, 6.0]].into();
        assert_eq!(by_rows, by_columns);
        assert_eq!(by_rows, by_arrays);
        assert_eq!(
            Mat2x3::from_fn(|col, row| (row * 3 + col + 1) as f32),
            by_rows
        );
        assert_eq!(Mat3x3::from_diagonal(2.5)[1], Vec3::new(0.0, 2.5, 0.0));
        assert_eq!(Mat4x4::zero()[3], Vec4::zero());
    }

    #[test]
    fn matrix_rows_and_columns() {
        let m = Mat3x2::from_rows([[1.0, 2.0], [3.0, 4.0], [5.0, 6.0]]);
        assert_eq!(m.column(1), Vec3::new(2.0, 4.0, 6.0));
        assert_eq!(m.row(2), Vec2::new(5.0, 6.0));
        assert_eq!(m[0][1], 3.0);
        let mut m = m;
        m[1][0] = -2.0;
        assert_eq!(m.row(0), Vec2::new(1.0, -2.0));
    }

    #[test]
    #[should_panic(expected = "check failed")]
    fn matrix_index_out_of_range() {
        let m = Mat2x3::identity();
        let _ = m[3];
    }

    #[test]
    #[should_panic(expected = "check failed")]
    fn matrix_row_out_of_range() {
        let _ = Mat2x3::identity().row(2);
    }

    #[test]
    fn matrix_transpose() {
        let m = Mat2x2::from_rows([[1.0, 3.0], [2.0, 4.0]]);
        assert_eq!(transpose(m), Mat2x2::from_rows([[1.0, 2.0], [3.0, 4.0]]));

        let m = Mat2x4::from_rows([[1.0, 2.0, 3.0, 4.0], [5.0, 6.0, 7.0, 8.0]]);
        let t: Mat4x2 = m.transpose();
        assert_eq!(t.row(3), Vec2::new(4.0, 8.0));
        assert_eq!(t.transpose(), m);
    }

    #[test]
    fn matrix_product_shapes() {
        let a = Mat2x3::from_rows([[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]]);
        let b = Mat3x2::from_rows([[7.0, 8.0], [9.0, 10.0], [11.0, 12.0]]);
        assert_eq!(a * b, Mat2x2::from_rows([[58.0, 64.0], [139.0, 154.0]]));
        assert_eq!(
            b * a,
            Mat3x3::from_rows([
                [39.0, 54.0, 69.0],
                [49.0, 68.0, 87.0],
                [59.0, 82.0, 105.0]
            ])
        );
        let c = Mat3x4::from_fn(|col, row| (col + row) as f32);
        let ac: Mat2x4 = a * c;
        assert_eq!(ac.column(0), Vec2::new(8.0, 17.0));
    }

    #[test]
    fn matrix_identity_laws() {
        let m = Mat3x4::from_fn(|col, row| (col * 3 + row) as f32 - 4.5);
        assert_eq!(m * Mat4x4::identity(), m);
        assert_eq!(Mat3x3::identity() * m, m);
        let v = Vec4::new(1.0, -2.0, 3.0, -4.0);
        assert_eq!(Mat4x4::identity() * v, v);
        assert_eq!(v * Mat4x4::identity(), v);
        assert_eq!(m + Mat3x4::zero(), m);
    }

    #[test]
    fn matrix_vector_products() {
        let a = Mat2x3::from_rows([[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]]);
        assert_eq!(a * Vec3::splat(1.0), Vec2::new(6.0, 15.0));
        assert_eq!(Vec2::splat(1.0) * a, Vec3::new(5.0, 7.0, 9.0));
        // A row vector times a matrix is the transposed matrix times the vector.
        let v = Vec2::new(2.0, -1.0);
        assert_eq!(v * a, a.transpose() * v);
    }

    #[test]
    fn matrix_component_wise() {
        let a = Mat2x2::from_rows([[1.0, 2.0], [3.0, 4.0]]);
        let b = Mat2x2::from_rows([[5.0, 6.0], [7.0, 8.0]]);
        assert_eq!(a + b, Mat2x2::from_rows([[6.0, 8.0], [10.0, 12.0]]));
        assert_eq!(b - a, Mat2x2::from_rows([[4.0, 4.0], [4.0, 4.0]]));
        assert_eq!(a.comp_mul(b), Mat2x2::from_rows([[5.0, 12.0], [21.0, 32.0]]));
        assert_eq!(-a, Mat2x2::from_rows([[-1.0, -2.0], [-3.0, -4.0]]));
    }

    #[test]
    fn matrix_scalar_ops_are_not_commutative() {
        let m = Mat2x2::from_rows([[1.0, 2.0], [4.0, 8.0]]);
        assert_eq!(m * 2.0, Mat2x2::from_rows([[2.0, 4.0], [8.0, 16.0]]));
        assert_eq!(2.0 * m, m * 2.0);
        assert_eq!(m - 1.0, Mat2x2::from_rows([[0.0, 1.0], [3.0, 7.0]]));
        assert_eq!(1.0 - m, Mat2x2::from_rows([[0.0, -1.0], [-3.0, -7.0]]));
        assert_eq!(m / 2.0, Mat2x2::from_rows([[0.5, 1.0], [2.0, 4.0]]));
        assert_eq!(8.0 / m, Mat2x2::from_rows([[8.0, 4.0], [2.0, 1.0]]));
        assert_eq!(1.0 + m, m + 1.0);
        let d = Matrix::<f64, 2, 2>::identity();
        assert_eq!(3.0_f64 * d, Matrix::<f64, 2, 2>::from_diagonal(3.0));
    }

    #[test]
    fn matrix_compound_assignment() {
        let mut m = Mat2x2::identity();
        m += Mat2x2::from_diagonal(1.0);
        assert_eq!(m, Mat2x2::from_diagonal(2.0));
        m -= 1.0;
        assert_eq!(m, Mat2x2::from_rows([[1.0, -1.0], [-1.0, 1.0]]));
        m *= 2.0;
        m /= 4.0;
        assert_eq!(m, Mat2x2::from_rows([[0.5, -0.5], [-0.5, 0.5]]));
        m -= Mat2x2::from_diagonal(0.5);
        m += 1.0;
        assert_eq!(m, Mat2x2::from_rows([[1.0, 0.5], [0.5, 1.0]]));

        let mut r = Mat3x2::from_rows([[1.0, 2.0], [3.0, 4.0], [5.0, 6.0]]);
        let swap = Mat2x2::from_rows([[0.0, 1.0], [1.0, 0.0]]);
        r *= swap;
        assert_eq!(r, Mat3x2::from_rows([[2.0, 1.0], [4.0, 3.0], [6.0, 5.0]]));
    }

    #[test]
    fn matrix_outer_product() {
        let m = Mat3x2::outer_product(Vec3::new(1.0, 2.0, 3.0), Vec2::new(-1.0, 2.0));
        assert_eq!(m.column(0), Vec3::new(-1.0, -2.0, -3.0));
        assert_eq!(m.column(1), Vec3::new(2.0, 4.0, 6.0));
    }

    #[test]
    fn matrix_cast_and_resize() {
        let m = Mat2x2::from_rows([[1.5, -2.0], [0.25, 4.0]]);
        let wide: Matrix<f64, 2, 2> = m.cast();
        assert_eq!(wide[0], Vector::<f64, 2>::new(1.5, 0.25));
        assert_eq!(wide.cast::<f32>(), m);

        let grown: Mat2x4 = m.resize();
        assert_eq!(grown.column(2), Vec2::zero());
        assert_eq!(grown.column(1), m.column(1));
        let grown: Mat4x4 = m.resize();
        assert_eq!(grown.row(3), Vec4::new(0.0, 0.0, 0.0, 1.0));
        assert_eq!(grown.row(0), Vec4::new(1.5, -2.0, 0.0, 0.0));
    }

    #[test]
    fn matrix_almost_eq() {
        let m = Mat2x2::from_rows([[1.0, 2.0], [3.0, 4.0]]);
        let n = m + 1e-6;
        assert_ne!(m, n);
        assert!(m.almost_eq(n));
        assert!(!m.almost_eq(m + 0.1));
        assert!(m.is_finite());
        assert!(!(m / 0.0).is_finite());
    }

    #[test]
    fn matrix_display() {
        let m = Mat2x2::from_rows([[1.0, 3.0], [2.0, 4.0]]);
        assert_eq!(format!("{m}"), "[1, 3]\n[2, 4]");
        let m = Mat2x2::from_rows([[1.234, 0.0], [0.0, 5.678]]);
        assert_eq!(format!("{m:.1}"), "[1.2, 0.0]\n[0.0, 5.7]");
    }
}
