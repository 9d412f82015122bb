//! Geometric operations on vectors, as both inherent methods and free functions.
use crate::core::prelude::*;
use num_traits::{Float, Zero};

impl<T: Scalar, const N: usize> Vector<T, N> {
    /// Computes the dot product (sum of pairwise products) of two vectors.
    ///
    /// # Examples
    ///
    /// ```
    /// use gg_math::core::prelude::*;
    /// let v1 = Vec2::new(2.0, 3.0);
    /// let v2 = Vec2::new(4.0, 5.0);
    /// assert_eq!(v1.dot(v2), 23.0); // 2*4 + 3*5
    /// ```
    #[must_use]
    pub fn dot(&self, rhs: Self) -> T {
        self.iter()
            .zip(rhs.iter())
            .fold(T::zero(), |acc, (&a, &b)| acc + a * b)
    }

    /// Returns the squared length of the vector.
    ///
    /// Use this instead of [`length()`](Vector::length) when comparing lengths to avoid the square
    /// root.
    #[must_use]
    pub fn length_squared(&self) -> T {
        self.dot(*self)
    }
}

impl<T: Scalar> Vector<T, 3> {
    /// Computes the cross product. Only defined in three dimensions.
    ///
    /// # Examples
    ///
    /// ```
    /// use gg_math::core::prelude::*;
    /// let x = Vec3::new(1.0, 0.0, 0.0);
    /// let y = Vec3::new(0.0, 1.0, 0.0);
    /// assert_eq!(x.cross(y), Vec3::new(0.0, 0.0, 1.0));
    /// ```
    pub fn cross(&self, rhs: Self) -> Self {
        Self::new(
            self.y() * rhs.z() - self.z() * rhs.y(),
            self.z() * rhs.x() - self.x() * rhs.z(),
            self.x() * rhs.y() - self.y() * rhs.x(),
        )
    }
}

impl<T: FloatScalar, const N: usize> Vector<T, N> {
    /// Returns the Euclidean length of the vector; for a single component, its absolute value.
    #[must_use]
    pub fn length(&self) -> T {
        if N == 1 {
            self[0].abs()
        } else {
            self.length_squared().sqrt()
        }
    }

    /// Computes the Euclidean distance between two points.
    ///
    /// # Examples
    ///
    /// ```
    /// use gg_math::core::prelude::*;
    /// let p1 = Vec2::new(0.0, 0.0);
    /// let p2 = Vec2::new(3.0, 4.0);
    /// assert_eq!(p1.distance(p2), 5.0);
    /// ```
    #[must_use]
    pub fn distance(&self, other: Self) -> T {
        (other - *self).length()
    }

    /// Returns a unit vector in the same direction, computed as `v * (1 / length(v))`. A
    /// one-component vector normalizes to its sign.
    ///
    /// A zero vector has no direction: the result is NaN, as IEEE division dictates.
    pub fn normalize(&self) -> Self {
        if N == 1 {
            return self.map(Float::signum);
        }
        let len = self.length();
        if len.is_zero() {
            warn!("normalize(): zero-length vector {}", self);
        }
        *self * (T::one() / len)
    }

    /// Returns `self` if `nref` faces against the incident vector `incident`, otherwise `-self`.
    pub fn faceforward(&self, incident: Self, nref: Self) -> Self {
        if nref.dot(incident) < T::zero() {
            *self
        } else {
            -*self
        }
    }

    /// Reflects this incident vector about `normal`: `i - 2 * dot(n, i) * n`.
    ///
    /// `normal` should already be normalised for the result to be a true reflection.
    ///
    /// # Examples
    ///
    /// ```
    /// use gg_math::core::prelude::*;
    /// let v = Vec2::new(1.0, -1.0);
    /// let reflected = v.reflect(Vec2::new(0.0, 1.0));
    /// assert_eq!(reflected, Vec2::new(1.0, 1.0));
    /// ```
    pub fn reflect(&self, normal: Self) -> Self {
        *self - normal * ((T::one() + T::one()) * normal.dot(*self))
    }

    /// Refracts this incident vector through a surface with the given `normal` and ratio of
    /// indices of refraction `eta`.
    ///
    /// Returns the zero vector on total internal reflection.
    pub fn refract(&self, normal: Self, eta: T) -> Self {
        let d = normal.dot(*self);
        let k = T::one() - eta * eta * (T::one() - d * d);
        if k < T::zero() {
            trace!("refract(): total internal reflection: {} through {}", self, normal);
            Self::zero()
        } else {
            *self * eta - normal * (eta * d + k.sqrt())
        }
    }
}

#[must_use]
pub fn dot<T: Scalar, const N: usize>(a: Vector<T, N>, b: Vector<T, N>) -> T {
    a.dot(b)
}
pub fn cross<T: Scalar>(a: Vector<T, 3>, b: Vector<T, 3>) -> Vector<T, 3> {
    a.cross(b)
}
#[must_use]
pub fn length<T: FloatScalar, const N: usize>(v: Vector<T, N>) -> T {
    v.length()
}
#[must_use]
pub fn distance<T: FloatScalar, const N: usize>(a: Vector<T, N>, b: Vector<T, N>) -> T {
    a.distance(b)
}
pub fn normalize<T: FloatScalar, const N: usize>(v: Vector<T, N>) -> Vector<T, N> {
    v.normalize()
}
pub fn faceforward<T: FloatScalar, const N: usize>(
    n: Vector<T, N>,
    i: Vector<T, N>,
    nref: Vector<T, N>,
) -> Vector<T, N> {
    n.faceforward(i, nref)
}
pub fn reflect<T: FloatScalar, const N: usize>(i: Vector<T, N>, n: Vector<T, N>) -> Vector<T, N> {
    i.reflect(n)
}
pub fn refract<T: FloatScalar, const N: usize>(
    i: Vector<T, N>,
    n: Vector<T, N>,
    eta: T,
) -> Vector<T, N> {
    i.refract(n, eta)
}
/// Linear blend of `x` and `y` by `a`; the same as [`lerp`](crate::linalg::interp::lerp).
pub fn mix<T: FloatScalar, const N: usize>(
    x: Vector<T, N>,
    y: Vector<T, N>,
    a: T,
) -> Vector<T, N> {
    lerp(x, y, a)
}

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use super::*;

    #[test]
    fn dot_product() {
        assert_eq!(dot(Vec3::new(1.0, 2.0, 3.0), Vec3::new(4.0, -5.0, 6.0)), 12.0);
        assert_eq!(IVec2::new(2, 3).dot(IVec2::new(4, 5)), 23);
        assert_eq!(Vec4::new(1.0, 1.0, 1.0, 1.0).length_squared(), 4.0);
    }

    #[test]
    fn length_and_distance() {
        assert_eq!(length(Vec2::new(3.0, -4.0)), 5.0);
        assert_eq!(Vec1::new(-3.0).length(), 3.0);
        assert_eq!(Vec3::new(2.0, 3.0, 6.0).length(), 7.0);
        assert_eq!(distance(Vec2::new(1.0, 1.0), Vec2::new(4.0, 5.0)), 5.0);
    }

    #[test]
    fn cross_product() {
        let x = Vec3::new(1.0, 0.0, 0.0);
        let y = Vec3::new(0.0, 1.0, 0.0);
        assert_eq!(cross(x, y), Vec3::new(0.0, 0.0, 1.0));
        assert_eq!(cross(y, x), Vec3::new(0.0, 0.0, -1.0));
        assert_eq!(
            IVec3::new(1, 2, 3).cross(IVec3::new(4, 5, 6)),
            IVec3::new(-3, 6, -3)
        );
    }

    #[test]
    fn cross_product_is_orthogonal() {
        let a = Vec3::new(1.5, -2.0, 0.25);
        let b = Vec3::new(-0.5, 3.0, 4.0);
        let c = a.cross(b);
        assert!(c.dot(a).abs() < EPSILON);
        assert!(c.dot(b).abs() < EPSILON);
    }

    #[test]
    fn normalize_vector() {
        let n = normalize(Vec2::new(3.0, 4.0));
        check_almost_eq!(n, Vec2::new(0.6, 0.8));
        assert!((n.length() - 1.0).abs() < EPSILON);
        assert_eq!(Vec1::new(-3.0).normalize(), Vec1::new(-1.0));
        assert_eq!(Vec1::new(0.5).normalize(), Vec1::new(1.0));
    }

    #[test]
    fn normalize_zero_is_nan() {
        assert!(Vec3::zero().normalize().iter().all(|c| c.is_nan()));
    }

    #[test]
    fn faceforward_flips_normal() {
        let n = Vec3::new(0.0, 1.0, 0.0);
        let down = Vec3::new(0.0, -1.0, 0.0);
        assert_eq!(faceforward(n, down, n), n);
        assert_eq!(faceforward(n, -down, n), -n);
        // Perpendicular incidence is not "facing", so the normal flips.
        assert_eq!(faceforward(n, Vec3::new(1.0, 0.0, 0.0), n), -n);
    }

    #[test]
    fn reflect_vector() {
        let n = Vec3::new(0.0, 1.0, 0.0);
        // Head-on incidence bounces straight back.
        assert_eq!(reflect(Vec3::new(0.0, -1.0, 0.0), n), Vec3::new(0.0, 1.0, 0.0));
        assert_eq!(reflect(Vec3::new(1.0, -1.0, 0.0), n), Vec3::new(1.0, 1.0, 0.0));
        let i = Vec3::new(0.3, -0.7, 0.2);
        let m = Vec3::new(0.0, 0.6, 0.8);
        let d = m.dot(i);
        assert_eq!(reflect(i, m), i - m * (2.0 * d));
    }

    #[test]
    fn refract_vector() {
        let n = Vec3::new(0.0, 1.0, 0.0);
        let i = Vec3::new(0.0, -1.0, 0.0);
        // Equal indices pass straight through.
        assert_eq!(refract(i, n, 1.0), i);

        let i = Vec3::new(0.6, -0.8, 0.0);
        let eta = 0.5;
        let d = n.dot(i);
        let k: f32 = 1.0 - eta * eta * (1.0 - d * d);
        let expected = i * eta - n * (eta * d + k.sqrt());
        assert_eq!(refract(i, n, eta), expected);
        check_almost_eq!(
            refract(i, n, eta),
            Vec3::new(0.3, -0.4 - (0.91_f32.sqrt() - 0.4), 0.0)
        );
    }

    #[test]
    fn refract_total_internal_reflection() {
        let n = Vec3::new(0.0, 1.0, 0.0);
        let grazing = Vec3::new(1.0, 0.0, 0.0);
        assert_eq!(refract(grazing, n, 1.5), Vec3::zero());
    }

    #[test]
    fn mix_blends() {
        let a = Vec2::new(0.0, 10.0);
        let b = Vec2::new(10.0, 20.0);
        assert_eq!(mix(a, b, 0.0), a);
        assert_eq!(mix(a, b, 1.0), b);
        assert_eq!(mix(a, b, 0.5), Vec2::new(5.0, 15.0));
    }
}
