use crate::core::prelude::*;
use num_traits::AsPrimitive;
use std::{
    fmt,
    fmt::Formatter,
    iter::Sum,
    ops::{Index, IndexMut},
};

/// A vector of `N` components of type `T`, for `N` in `1..=4`.
///
/// [`Vector`] is a plain value type: every operation returns a new vector, except the
/// compound-assignment operators and [`inc()`](Vector::inc)/[`dec()`](Vector::dec).
/// The usual way to name one is through the aliases in [`linalg`](crate::linalg), such as
/// [`Vec3`](crate::linalg::Vec3) or [`IVec2`](crate::linalg::IVec2).
///
/// # Examples
///
/// ```
/// use gg_math::core::prelude::*;
///
/// let v1 = Vec3::new(3.0, 4.0, 0.0);
/// let v2 = Vec3::splat(1.0);
///
/// assert_eq!(v1 + v2, Vec3::new(4.0, 5.0, 1.0));
/// assert_eq!(v1.length(), 5.0);
/// assert_eq!(v1[1], 4.0);
/// ```
///
/// # Construction and conversion
/// Conversions that cannot lose information are implicit ([`From`]): from an array, and from a
/// lower-dimension vector of the same scalar type, which zero-fills the new components:
///
/// ```
/// use gg_math::core::prelude::*;
///
/// let v: IVec4 = IVec2::new(1, 2).into();
/// assert_eq!(v, IVec4::new(1, 2, 0, 0));
/// ```
///
/// Conversions that can lose information are explicit: [`cast()`](Vector::cast) changes the
/// scalar type and [`truncate()`](Vector::truncate) drops trailing components.
///
/// ```
/// use gg_math::core::prelude::*;
///
/// let v = Vec4::new(1.5, -2.5, 3.0, 4.0);
/// let xy: Vector<f32, 2> = v.truncate();
/// assert_eq!(xy, Vec2::new(1.5, -2.5));
/// assert_eq!(xy.cast::<i32>(), Vector::<i32, 2>::new(1, -2));
/// ```
///
/// # Equality
/// Equality is exact, component by component. Use [`almost_eq()`](Vector::almost_eq) for
/// tolerance-based comparisons of floating-point vectors.
///
/// # Dimensions
/// Vectors with no components, or more than four, do not compile:
///
/// ```compile_fail
/// use gg_math::core::prelude::*;
/// let v = Vector::<f32, 0>::zero();
/// ```
///
/// ```compile_fail
/// use gg_math::core::prelude::*;
/// let v = Vector::<i32, 5>::splat(1);
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[must_use]
pub struct Vector<T: Scalar, const N: usize> {
    data: [T; N],
}

impl<T: Scalar, const N: usize> Vector<T, N> {
    const VALID_DIM: () = assert!(N >= 1 && N <= 4, "Vector dimension must be in 1..=4");

    pub const fn from_array(data: [T; N]) -> Self {
        #[allow(clippy::let_unit_value)]
        let () = Self::VALID_DIM;
        Self { data }
    }

    /// Builds a vector by calling `f` with each component index in order.
    pub fn from_fn(f: impl FnMut(usize) -> T) -> Self {
        Self::from_array(std::array::from_fn(f))
    }

    /// Returns a vector with every component set to zero.
    pub fn zero() -> Self {
        Self::splat(T::zero())
    }
    /// Returns a vector with every component set to one.
    pub fn one() -> Self {
        Self::splat(T::one())
    }

    /// Creates a new vector with every component set to the given value.
    ///
    /// # Examples
    ///
    /// ```
    /// use gg_math::core::prelude::*;
    /// let v = Vec3::splat(3.0);
    /// assert_eq!(v, Vec3::new(3.0, 3.0, 3.0));
    /// ```
    pub fn splat(value: T) -> Self {
        Self::from_array([value; N])
    }

    #[must_use]
    pub const fn dim(&self) -> usize {
        N
    }

    #[must_use]
    pub fn to_array(self) -> [T; N] {
        self.data
    }
    #[must_use]
    pub fn as_array(&self) -> &[T; N] {
        &self.data
    }
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.data.iter()
    }
    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, T> {
        self.data.iter_mut()
    }

    /// Applies `f` to each component.
    pub fn map<U: Scalar>(self, f: impl FnMut(T) -> U) -> Vector<U, N> {
        Vector::from_array(self.data.map(f))
    }

    /// Applies `f` to each pair of corresponding components.
    pub fn zip_map<U: Scalar, V: Scalar>(
        self,
        rhs: Vector<U, N>,
        mut f: impl FnMut(T, U) -> V,
    ) -> Vector<V, N> {
        Vector::from_fn(|i| f(self.data[i], rhs.data[i]))
    }

    /// Converts each component to another scalar type, with the semantics of `as`.
    ///
    /// This is explicit because it may lose precision (e.g. `f32` to `i32` truncates towards
    /// zero).
    pub fn cast<U: Scalar>(self) -> Vector<U, N>
    where
        T: AsPrimitive<U>,
    {
        self.map(|c| c.as_())
    }

    /// Keeps the first `M` components. `M > N` does not compile:
    ///
    /// ```compile_fail
    /// use gg_math::core::prelude::*;
    /// let v: Vector<f32, 3> = Vec2::new(1.0, 2.0).truncate();
    /// ```
    pub fn truncate<const M: usize>(self) -> Vector<T, M> {
        const { assert!(M <= N, "truncate() cannot add components") };
        Vector::from_fn(|i| self.data[i])
    }

    /// Copies the components into a vector with `M >= N` components, filling the rest with zero.
    pub fn widen<const M: usize>(self) -> Vector<T, M> {
        const { assert!(M >= N, "widen() cannot drop components") };
        Vector::from_fn(|i| if i < N { self.data[i] } else { T::zero() })
    }

    /// Adds one to every component, returning `self` for chaining (prefix increment). Integer
    /// components wrap.
    pub fn inc(&mut self) -> &mut Self {
        for c in &mut self.data {
            *c = c.add_wrapping(T::one());
        }
        self
    }
    /// Subtracts one from every component, returning `self` for chaining (prefix decrement).
    pub fn dec(&mut self) -> &mut Self {
        for c in &mut self.data {
            *c = c.sub_wrapping(T::one());
        }
        self
    }
    /// Adds one to every component and returns the value from before (postfix increment).
    pub fn post_inc(&mut self) -> Self {
        let rv = *self;
        self.inc();
        rv
    }
    /// Subtracts one from every component and returns the value from before (postfix decrement).
    pub fn post_dec(&mut self) -> Self {
        let rv = *self;
        self.dec();
        rv
    }
}

impl<T: FloatScalar, const N: usize> Vector<T, N> {
    /// Checks if every component is within [`EPSILON`](FloatScalar::EPSILON) of the corresponding
    /// component of `rhs`. Equal infinities compare as almost equal.
    #[must_use]
    pub fn almost_eq(&self, rhs: Self) -> bool {
        self.iter()
            .zip(rhs.iter())
            .all(|(&a, &b)| a == b || (a - b).abs() < T::EPSILON)
    }

    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.iter().all(|c| c.is_finite())
    }
}

macro_rules! impl_vector_dim {
    ($n:literal, [$($field:ident: $idx:literal),+]) => {
        impl<T: Scalar> Vector<T, $n> {
            pub const fn new($($field: T),+) -> Self {
                Self::from_array([$($field),+])
            }
            $(
                #[must_use]
                pub fn $field(&self) -> T {
                    self.data[$idx]
                }
            )+
        }
    };
}

impl_vector_dim!(1, [x: 0]);
impl_vector_dim!(2, [x: 0, y: 1]);
impl_vector_dim!(3, [x: 0, y: 1, z: 2]);
impl_vector_dim!(4, [x: 0, y: 1, z: 2, w: 3]);

macro_rules! impl_vector_extend {
    ($($n:literal => $m:literal),+) => {$(
        impl<T: Scalar> Vector<T, $n> {
            /// Appends one component.
            pub fn extend(self, last: T) -> Vector<T, $m> {
                Vector::from_fn(|i| if i < $n { self.data[i] } else { last })
            }
        }
    )+};
}

impl_vector_extend!(1 => 2, 2 => 3, 3 => 4);

macro_rules! impl_vector_widen_from {
    ($($n:literal => $m:literal),+) => {$(
        impl<T: Scalar> From<Vector<T, $n>> for Vector<T, $m> {
            fn from(value: Vector<T, $n>) -> Self {
                value.widen()
            }
        }
    )+};
}

impl_vector_widen_from!(1 => 2, 1 => 3, 1 => 4, 2 => 3, 2 => 4, 3 => 4);

impl<T: Scalar, const N: usize> Default for Vector<T, N> {
    fn default() -> Self {
        Self::zero()
    }
}

impl<T: Scalar, const N: usize> From<[T; N]> for Vector<T, N> {
    fn from(value: [T; N]) -> Self {
        Self::from_array(value)
    }
}
impl<T: Scalar, const N: usize> From<Vector<T, N>> for [T; N] {
    fn from(value: Vector<T, N>) -> Self {
        value.data
    }
}

impl<T: Scalar, const N: usize> TryFrom<&[T]> for Vector<T, N> {
    type Error = anyhow::Error;

    fn try_from(value: &[T]) -> Result<Self> {
        let data: [T; N] = value.try_into().map_err(|_| {
            anyhow!(
                "cannot build a {N}-component vector from {} values",
                value.len()
            )
        })?;
        Ok(Self::from_array(data))
    }
}

impl<T: Scalar, const N: usize> Index<usize> for Vector<T, N> {
    type Output = T;

    fn index(&self, index: usize) -> &Self::Output {
        check_lt!(index, N);
        &self.data[index]
    }
}
impl<T: Scalar, const N: usize> IndexMut<usize> for Vector<T, N> {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        check_lt!(index, N);
        &mut self.data[index]
    }
}

impl<T: Scalar, const N: usize> IntoIterator for Vector<T, N> {
    type Item = T;
    type IntoIter = std::array::IntoIter<T, N>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.into_iter()
    }
}
impl<'a, T: Scalar, const N: usize> IntoIterator for &'a Vector<T, N> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.iter()
    }
}

impl<T: Scalar, const N: usize> Sum<Vector<T, N>> for Vector<T, N> {
    fn sum<I: Iterator<Item = Vector<T, N>>>(iter: I) -> Self {
        iter.fold(Self::zero(), |acc, v| acc + v)
    }
}

impl<T: Scalar, const N: usize> fmt::Display for Vector<T, N> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let components = if let Some(p) = f.precision() {
            self.iter().map(|c| format!("{c:.p$}")).join(", ")
        } else {
            self.iter().join(", ")
        };
        write!(f, "vec({components})")
    }
}

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use super::*;
    use crate::linalg::{IVec2, IVec3, IVec4, UVec2, UVec3, Vec1, Vec2, Vec3, Vec4};

    #[test]
    fn vector_default_is_zero() {
        assert_eq!(Vec4::default(), Vec4::new(0.0, 0.0, 0.0, 0.0));
        assert_eq!(IVec3::default(), IVec3::zero());
        assert_eq!(Vec2::one(), Vec2::new(1.0, 1.0));
    }

    #[test]
    fn vector_splat() {
        assert_eq!(Vec3::splat(-1.5), Vec3::new(-1.5, -1.5, -1.5));
        assert_eq!(Vec1::splat(2.0).x(), 2.0);
    }

    #[test]
    fn vector_accessors() {
        let v = Vec4::new(1.0, 2.0, 3.0, 4.0);
        assert_eq!((v.x(), v.y(), v.z(), v.w()), (1.0, 2.0, 3.0, 4.0));
        assert_eq!(v.dim(), 4);
        assert_eq!(v.to_array(), [1.0, 2.0, 3.0, 4.0]);
        assert_eq!(v.as_slice(), &[1.0, 2.0, 3.0, 4.0]);
    }

    #[test]
    fn vector_index() {
        let mut v = IVec3::new(1, 2, 3);
        assert_eq!(v[2], 3);
        v[0] = 10;
        assert_eq!(v, IVec3::new(10, 2, 3));
    }

    #[test]
    #[should_panic(expected = "check failed")]
    fn vector_index_out_of_range() {
        let v = IVec2::new(1, 2);
        let _ = v[2];
    }

    #[test]
    fn vector_from_array() {
        let v: Vec2 = [1.0_f32, 2.0_f32].into();
        assert_eq!(v, Vec2::new(1.0, 2.0));
        let arr: [f32; 2] = v.into();
        assert_eq!(arr, [1.0, 2.0]);
    }

    #[test]
    fn vector_try_from_slice() {
        let values = [1, 2, 3, 4];
        let v = IVec3::try_from(&values[..3]).unwrap();
        assert_eq!(v, IVec3::new(1, 2, 3));
        let err = IVec3::try_from(&values[..]).unwrap_err();
        assert!(err.to_string().contains("4 values"));
    }

    #[test]
    fn vector_widening_is_implicit() {
        let v: IVec4 = IVec2::new(1, 2).into();
        assert_eq!(v, IVec4::new(1, 2, 0, 0));
        let v: Vec3 = Vec1::new(5.0).into();
        assert_eq!(v, Vec3::new(5.0, 0.0, 0.0));
        assert_eq!(Vec2::new(1.0, 2.0).extend(3.0), Vec3::new(1.0, 2.0, 3.0));
        assert_eq!(
            Vec3::new(1.0, 2.0, 3.0).extend(4.0),
            Vec4::new(1.0, 2.0, 3.0, 4.0)
        );
    }

    #[test]
    fn vector_truncate() {
        let v = IVec4::new(1, 2, 3, 4);
        let xyz: IVec3 = v.truncate();
        assert_eq!(xyz, IVec3::new(1, 2, 3));
        let x: Vector<i32, 1> = v.truncate();
        assert_eq!(x.x(), 1);
        let same: IVec4 = v.truncate();
        assert_eq!(same, v);
    }

    #[test]
    fn vector_cast() {
        let v = Vec3::new(1.9, -1.9, 300.0);
        assert_eq!(v.cast::<i32>(), Vector::<i32, 3>::new(1, -1, 300));
        assert_eq!(v.cast::<u8>(), Vector::<u8, 3>::new(1, 0, 255));
        assert_eq!(
            UVec3::new(1, 2, 3).cast::<f64>(),
            Vector::<f64, 3>::new(1.0, 2.0, 3.0)
        );
    }

    #[test]
    fn vector_map_and_zip_map() {
        let a = IVec3::new(1, 2, 3);
        let b = IVec3::new(4, 5, 6);
        assert_eq!(a.map(|c| c * c), IVec3::new(1, 4, 9));
        assert_eq!(a.zip_map(b, |x, y| x.max(y) - 1), IVec3::new(3, 4, 5));
    }

    #[test]
    fn vector_increment_decrement() {
        let mut v = IVec2::new(1, -1);
        assert_eq!(*v.inc(), IVec2::new(2, 0));
        assert_eq!(v.post_inc(), IVec2::new(2, 0));
        assert_eq!(v, IVec2::new(3, 1));
        assert_eq!(v.post_dec(), IVec2::new(3, 1));
        assert_eq!(*v.dec(), IVec2::new(1, -1));
    }

    #[test]
    fn vector_increment_decrement_wrap() {
        let mut v = UVec2::new(0, 7);
        assert_eq!(v.post_dec(), UVec2::new(0, 7));
        assert_eq!(v, UVec2::new(u32::MAX, 6));
        assert_eq!(*v.inc(), UVec2::new(0, 7));
        let mut b = Vector::<u8, 3>::splat(u8::MAX);
        assert_eq!(b.post_inc(), Vector::<u8, 3>::splat(u8::MAX));
        assert_eq!(b, Vector::<u8, 3>::zero());
    }

    #[test]
    fn vector_equality_is_exact() {
        let a = Vec2::new(1.0, 2.0);
        let b = Vec2::new(1.0, 2.0 + 1e-6);
        assert_ne!(a, b);
        assert!(a.almost_eq(b));
        assert!(!a.almost_eq(Vec2::new(1.0, 2.1)));
        let inf = Vec2::splat(f32::INFINITY);
        assert!(inf.almost_eq(inf));
        assert!(!inf.is_finite());
    }

    #[test]
    fn vector_sum() {
        let vecs = vec![
            IVec2::new(1, 2),
            IVec2::new(3, -4),
            IVec2::new(5, 6),
        ];
        let sum: IVec2 = vecs.into_iter().sum();
        assert_eq!(sum, IVec2::new(9, 4));
    }

    #[test]
    fn vector_iter() {
        let v = IVec3::new(1, 2, 3);
        assert_eq!(v.iter().sum::<i32>(), 6);
        assert_eq!(v.into_iter().collect_vec(), vec![1, 2, 3]);
        assert_eq!((&v).into_iter().count(), 3);
    }

    #[test]
    fn vector_display() {
        assert_eq!(format!("{}", Vec2::new(1.5, 2.5)), "vec(1.5, 2.5)");
        assert_eq!(format!("{}", IVec3::new(1, -2, 3)), "vec(1, -2, 3)");
        let v = Vec2::new(1.23456, 7.89012);
        assert_eq!(format!("{v:.2}"), "vec(1.23, 7.89)");
        assert_eq!(format!("{v:.0}"), "vec(1, 8)");
    }
}
