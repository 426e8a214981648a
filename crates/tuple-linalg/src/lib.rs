//! Small, fixed-size vectors and square matrices of `f64`.
//!
//! This library provides [`Vector<N>`] and [`Matrix<N>`] (with the common aliases [`Vector2`],
//! [`Vector3`], [`Vector4`], [`Matrix2`], [`Matrix3`] and [`Matrix4`]), plus the 3D transform
//! builders that are needed to place things on screen.
//!
//! # Arithmetic
//!
//! Arithmetic methods modify their receiver in place and return `&mut Self`, so they can be
//! chained:
//!
//! ```
//! # use tuple_linalg::*;
//! let mut v = vec2(3.0, 4.0);
//! v.normalize().multiply(10.0).add([1.0, 1.0]);
//! assert_eq!(v, [7.0, 9.0]);
//! ```
//!
//! Each method accepts a scalar, a raw array, or another vector/matrix as its operand (see
//! [`VectorSource`] and [`MatrixSource`]). Copy the value first if the original is still needed;
//! both types are [`Copy`].
//!
//! # Goals & Non-Goals
//!
//! - Sizes are const generic parameters. Combining values of different sizes is a compile-time
//!   error, so the only operations that can fail are the ones that take runtime-sized input
//!   (slices, and the [`toolbox::AnyVector`] and [`toolbox::AnyMatrix`] types).
//! - Matrices are stored row-major and unpadded.
//! - The element type is always [`f64`].
//! - No general matrix inversion, decompositions or solvers. [`Matrix::inverse`] takes the
//!   reciprocal of every cell.
//!
//! # Logging
//!
//! Diagnostics are emitted through the [`log`] facade. With the `logger` feature enabled,
//! [`init_logger`] installs an [`env_logger`] that honors `RUST_LOG`.
//!
//! [`env_logger`]: https://docs.rs/env_logger

mod approx_impls;
mod error;
mod matrix;
mod source;
pub mod toolbox;
mod vector;

pub use error::Error;
pub use matrix::*;
pub use source::*;
pub use vector::*;

/// Initializes logging to *stderr*.
///
/// This crate logs at *debug* level, unless overridden by the `RUST_LOG` environment variable.
/// Calling this more than once has no effect.
#[cfg(feature = "logger")]
pub fn init_logger() {
    env_logger::Builder::new()
        .filter(Some(env!("CARGO_CRATE_NAME")), log::LevelFilter::Debug)
        .parse_default_env()
        .try_init()
        .ok();
}
