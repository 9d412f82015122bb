//! Fixed-size vectors and column-major matrices.
//!
//! Everything here is generic over the component type; the aliases below fix it to the crate-wide
//! defaults from [`config`](crate::core::config), which cargo features can widen.
use crate::core::config::{Float, Int, Uint};

pub mod geometric;
pub mod interp;
pub mod matrix;
pub mod ops;
pub mod scalar;
pub mod square;
pub mod vector;

pub use matrix::Matrix;
pub use vector::Vector;

pub type Vec1 = Vector<Float, 1>;
pub type Vec2 = Vector<Float, 2>;
pub type Vec3 = Vector<Float, 3>;
pub type Vec4 = Vector<Float, 4>;

pub type IVec1 = Vector<Int, 1>;
pub type IVec2 = Vector<Int, 2>;
pub type IVec3 = Vector<Int, 3>;
pub type IVec4 = Vector<Int, 4>;

pub type UVec1 = Vector<Uint, 1>;
pub type UVec2 = Vector<Uint, 2>;
pub type UVec3 = Vector<Uint, 3>;
pub type UVec4 = Vector<Uint, 4>;

// `MatRxC` has R rows and C columns.
pub type Mat2x2 = Matrix<Float, 2, 2>;
pub type Mat2x3 = Matrix<Float, 2, 3>;
pub type Mat2x4 = Matrix<Float, 2, 4>;
pub type Mat3x2 = Matrix<Float, 3, 2>;
pub type Mat3x3 = Matrix<Float, 3, 3>;
pub type Mat3x4 = Matrix<Float, 3, 4>;
pub type Mat4x2 = Matrix<Float, 4, 2>;
pub type Mat4x3 = Matrix<Float, 4, 3>;
pub type Mat4x4 = Matrix<Float, 4, 4>;

pub type Mat2 = Mat2x2;
pub type Mat3 = Mat3x3;
pub type Mat4 = Mat4x4;
