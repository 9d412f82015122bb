// Precision is chosen at build time through cargo features; everything generic in `linalg`
// accepts any scalar, these aliases only pick the defaults.
#[cfg(not(feature = "double-precision"))]
pub type Float = f32;
#[cfg(feature = "double-precision")]
pub type Float = f64;

#[cfg(not(feature = "wide-int"))]
pub type Int = i32;
#[cfg(feature = "wide-int")]
pub type Int = i64;

#[cfg(not(feature = "wide-int"))]
pub type Uint = u32;
#[cfg(feature = "wide-int")]
pub type Uint = u64;

/// Tolerance used by `almost_eq()` for `f32` components.
pub const EPSILON: f32 = 1e-5;
/// Tolerance used by `almost_eq()` for `f64` components.
pub const EPSILON_F64: f64 = 1e-10;
