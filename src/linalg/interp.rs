//! Interpolation helpers. Generic over anything with `+` and scaling by a float, so plain scalars,
//! vectors and matrices all work.
use num_traits::Float;
use std::ops::{Add, Mul};

/// Blends `v0` and `v1` with independent weights: `v0 * w0 + v1 * w1`.
///
/// The weights are not normalised. If they do not sum to one, the result is an extrapolation.
///
/// # Examples
/// ```
/// use gg_math::core::prelude::*;
/// assert_eq!(lerp_independent(2.0, 0.25, 10.0, 0.75), 8.0);
/// assert_eq!(lerp_independent(1.0, 1.0, 1.0, 1.0), 2.0);
/// ```
pub fn lerp_independent<V, S>(v0: V, w0: S, v1: V, w1: S) -> V
where
    V: Add<Output = V> + Mul<S, Output = V>,
{
    v0 * w0 + v1 * w1
}

/// A linear interpolation between two values; `t` is not clamped.
///
/// # Examples
/// ```
/// use gg_math::core::prelude::*;
/// let start = 0.0;
/// let end = 10.0;
/// assert_eq!(lerp(start, end, 0.0), start);
/// assert_eq!(lerp(start, end, 1.0), end);
/// assert_eq!(lerp(start, end, 0.5), 5.0);
/// assert_eq!(lerp(Vec2::zero(), Vec2::new(2.0, 4.0), 0.5), Vec2::new(1.0, 2.0));
/// ```
pub fn lerp<V, S>(v0: V, v1: V, t: S) -> V
where
    V: Add<Output = V> + Mul<S, Output = V>,
    S: Float,
{
    lerp_independent(v0, S::one() - t, v1, t)
}

/// Evaluates the cubic Bezier curve with control points `v0..v3` at `t`, using the Bernstein
/// weights `(1-t)^3, 3(1-t)^2 t, 3(1-t) t^2, t^3`.
///
/// Agrees (up to rounding) with de Casteljau's construction from nested [`lerp`]s.
pub fn bezier_cubic<V, S>(v0: V, v1: V, v2: V, v3: V, t: S) -> V
where
    V: Add<Output = V> + Mul<S, Output = V>,
    S: Float,
{
    let three = S::one() + S::one() + S::one();
    let u = S::one() - t;
    let w0 = u * u * u;
    let w1 = three * u * u * t;
    let w2 = three * u * t * t;
    let w3 = t * t * t;
    v0 * w0 + v1 * w1 + v2 * w2 + v3 * w3
}
