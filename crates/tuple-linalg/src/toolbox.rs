//! Helpers for turning loosely-typed input into vectors and matrices.
//!
//! [`vector::tuple`] and [`matrix::tuple`] resolve any operand ([`VectorSource`] or
//! [`MatrixSource`]) into a plain array, and [`vector::from_source`] and
//! [`matrix::from_source`] construct the vector or matrix of the requested size from it. The size
//! is a const generic parameter, so it is usually inferred from how the result is used.
//!
//! When the size is only known at runtime (for example, when reading a flat buffer), use
//! [`AnyVector::from_slice`] and [`AnyMatrix::from_flat`], which pick [`Vector2`], [`Vector3`] or
//! [`Vector4`] (and [`Matrix2`], [`Matrix3`] or [`Matrix4`]) from the length of the input.
//!
//! [`VectorSource`]: crate::VectorSource
//! [`MatrixSource`]: crate::MatrixSource
//! [`Vector2`]: crate::Vector2
//! [`Vector3`]: crate::Vector3
//! [`Vector4`]: crate::Vector4
//! [`Matrix2`]: crate::Matrix2
//! [`Matrix3`]: crate::Matrix3
//! [`Matrix4`]: crate::Matrix4

pub mod matrix;
pub mod vector;

pub use matrix::AnyMatrix;
pub use vector::AnyVector;
