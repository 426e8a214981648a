//! Matrix coercion, runtime-sized dispatch, and free-function transform builders.

use std::fmt;

use crate::{Error, Matrix, Matrix2, Matrix3, Matrix4, MatrixSource};

use super::AnyVector;

/// Returns the number of rows of a square matrix with `len` cells.
///
/// # Errors
///
/// Returns [`Error::NotSquare`] if `len` is not a perfect square.
///
/// # Examples
///
/// ```
/// # use tuple_linalg::*;
/// use tuple_linalg::toolbox::matrix::size_of;
///
/// assert_eq!(size_of(16), Ok(4));
/// assert_eq!(size_of(12), Err(Error::NotSquare { len: 12 }));
/// ```
pub fn size_of(len: usize) -> Result<usize, Error> {
    let size = (len as f64).sqrt().round() as usize;
    if size.checked_mul(size) == Some(len) {
        Ok(size)
    } else {
        log::debug!("{} cells do not form a square matrix", len);
        Err(Error::NotSquare { len })
    }
}

/// Resolves `source` into an array of `N` rows.
///
/// # Examples
///
/// ```
/// # use tuple_linalg::*;
/// use tuple_linalg::toolbox::matrix;
///
/// assert_eq!(matrix::tuple::<2>(0.0), [[0.0, 0.0], [0.0, 0.0]]);
/// assert_eq!(matrix::tuple(Matrix2::IDENTITY), [[1.0, 0.0], [0.0, 1.0]]);
/// ```
#[inline]
pub fn tuple<'a, const N: usize>(source: impl Into<MatrixSource<'a, N>>) -> [[f64; N]; N] {
    source.into().tuple()
}

/// Creates a new `N`x`N` matrix from `source`.
///
/// The returned matrix never aliases `source`.
#[inline]
pub fn from_source<'a, const N: usize>(source: impl Into<MatrixSource<'a, N>>) -> Matrix<N> {
    Matrix::from_rows(tuple(source))
}

/// Transform matrices for 3D points in homogeneous coordinates.
///
/// These are shorthands for the [`Matrix4`] builders.
pub mod transformation {
    use crate::Matrix4;

    /// See [`Matrix4::translate`].
    pub fn translate(x: f64, y: f64, z: f64) -> Matrix4 {
        Matrix4::translate(x, y, z)
    }

    /// See [`Matrix4::rotate`].
    pub fn rotate(degrees: f64, x: f64, y: f64, z: f64) -> Matrix4 {
        Matrix4::rotate(degrees, x, y, z)
    }

    /// See [`Matrix4::scale`].
    pub fn scale(x: f64, y: f64, z: f64) -> Matrix4 {
        Matrix4::scale(x, y, z)
    }
}

/// Projection matrices.
pub mod projection {
    use crate::Matrix4;

    /// See [`Matrix4::orthographic`].
    pub fn orthographic(
        left: f64,
        right: f64,
        bottom: f64,
        top: f64,
        near: f64,
        far: f64,
    ) -> Matrix4 {
        Matrix4::orthographic(left, right, bottom, top, near, far)
    }
}

/// A 2x2, 3x3 or 4x4 matrix whose size is only known at runtime.
///
/// Only these three sizes can be dispatched at runtime: [`AnyMatrix::from_flat`] rejects any other
/// square buffer with [`Error::UnsupportedDimension`]. Matrices of other sizes are built with
/// [`from_source`] or [`Matrix::from_flat`], naming the size as a const generic parameter.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AnyMatrix {
    Matrix2(Matrix2),
    Matrix3(Matrix3),
    Matrix4(Matrix4),
}

impl AnyMatrix {
    /// Creates a matrix from a flat, row-major buffer of 4, 9 or 16 cells.
    ///
    /// # Errors
    ///
    /// - [`Error::NotSquare`] if the length of `cells` is not a perfect square.
    /// - [`Error::UnsupportedDimension`] if it is, but the matrix would not be 2x2, 3x3 or 4x4.
    ///
    /// # Examples
    ///
    /// ```
    /// # use tuple_linalg::*;
    /// use tuple_linalg::toolbox::AnyMatrix;
    ///
    /// let m = AnyMatrix::from_flat(&[1.0, 2.0, 3.0, 4.0]).unwrap();
    /// assert_eq!(m, AnyMatrix::Matrix2(mat2(1.0, 2.0, 3.0, 4.0)));
    /// assert_eq!(AnyMatrix::from_flat(&[0.0; 25]), Err(Error::UnsupportedDimension(5)));
    /// ```
    pub fn from_flat(cells: &[f64]) -> Result<Self, Error> {
        let size = size_of(cells.len())?;
        log::trace!("dispatching {}x{} matrix", size, size);
        match size {
            2 => Matrix::from_flat(cells).map(AnyMatrix::Matrix2),
            3 => Matrix::from_flat(cells).map(AnyMatrix::Matrix3),
            4 => Matrix::from_flat(cells).map(AnyMatrix::Matrix4),
            _ => Err(Error::UnsupportedDimension(size)),
        }
    }

    /// Returns the number of rows (and columns).
    pub fn size(&self) -> usize {
        match self {
            AnyMatrix::Matrix2(m) => m.size(),
            AnyMatrix::Matrix3(m) => m.size(),
            AnyMatrix::Matrix4(m) => m.size(),
        }
    }

    /// Returns the cells as a flat, row-major slice.
    pub fn as_flat(&self) -> &[f64] {
        match self {
            AnyMatrix::Matrix2(m) => m.as_flat(),
            AnyMatrix::Matrix3(m) => m.as_flat(),
            AnyMatrix::Matrix4(m) => m.as_flat(),
        }
    }

    /// Transforms `vector` by this matrix.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MatrixVectorMismatch`] if the dimension of `vector` differs from the size
    /// of the matrix.
    ///
    /// # Examples
    ///
    /// ```
    /// # use tuple_linalg::*;
    /// use tuple_linalg::toolbox::{AnyMatrix, AnyVector};
    ///
    /// let m = AnyMatrix::Matrix2(mat2(0.0, 1.0, 1.0, 0.0));
    /// let v = AnyVector::Vector2(vec2(3.0, 4.0));
    /// assert_eq!(m.multiply_vector(&v), Ok(AnyVector::Vector2(vec2(4.0, 3.0))));
    ///
    /// let v = AnyVector::Vector3(vec3(3.0, 4.0, 5.0));
    /// assert_eq!(
    ///     m.multiply_vector(&v),
    ///     Err(Error::MatrixVectorMismatch { size: 2, dimension: 3 }),
    /// );
    /// ```
    pub fn multiply_vector(&self, vector: &AnyVector) -> Result<AnyVector, Error> {
        match (self, vector) {
            (AnyMatrix::Matrix2(m), AnyVector::Vector2(v)) => {
                Ok(AnyVector::Vector2(m.multiply_vector(v)))
            }
            (AnyMatrix::Matrix3(m), AnyVector::Vector3(v)) => {
                Ok(AnyVector::Vector3(m.multiply_vector(v)))
            }
            (AnyMatrix::Matrix4(m), AnyVector::Vector4(v)) => {
                Ok(AnyVector::Vector4(m.multiply_vector(v)))
            }
            _ => {
                let (size, dimension) = (self.size(), vector.size());
                log::debug!(
                    "rejecting {}-dimensional vector for {}x{} matrix",
                    dimension,
                    size,
                    size
                );
                Err(Error::MatrixVectorMismatch { size, dimension })
            }
        }
    }
}

impl From<Matrix2> for AnyMatrix {
    fn from(m: Matrix2) -> Self {
        AnyMatrix::Matrix2(m)
    }
}

impl From<Matrix3> for AnyMatrix {
    fn from(m: Matrix3) -> Self {
        AnyMatrix::Matrix3(m)
    }
}

impl From<Matrix4> for AnyMatrix {
    fn from(m: Matrix4) -> Self {
        AnyMatrix::Matrix4(m)
    }
}

impl fmt::Display for AnyMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AnyMatrix::Matrix2(m) => fmt::Display::fmt(m, f),
            AnyMatrix::Matrix3(m) => fmt::Display::fmt(m, f),
            AnyMatrix::Matrix4(m) => fmt::Display::fmt(m, f),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::{mat2, vec3, vec4};

    use super::*;

    #[test]
    fn sizes() {
        assert_eq!(size_of(0), Ok(0));
        assert_eq!(size_of(1), Ok(1));
        assert_eq!(size_of(4), Ok(2));
        assert_eq!(size_of(9), Ok(3));
        assert_eq!(size_of(10_000), Ok(100));
        assert_eq!(size_of(8), Err(Error::NotSquare { len: 8 }));
        assert_eq!(size_of(15), Err(Error::NotSquare { len: 15 }));

        // Lengths whose rounded root would overflow when squared.
        assert_eq!(size_of(usize::MAX), Err(Error::NotSquare { len: usize::MAX }));
        assert_eq!(
            size_of(usize::MAX - 1000),
            Err(Error::NotSquare {
                len: usize::MAX - 1000
            })
        );
    }

    #[test]
    fn coercion() {
        let m = mat2(1.0, 2.0, 3.0, 4.0);
        assert_eq!(tuple(&m), [[1.0, 2.0], [3.0, 4.0]]);
        assert_eq!(from_source(&m), m);
        assert_eq!(from_source::<3>(2.0), Matrix3::from_fn(|_, _| 2.0));
    }

    #[test]
    fn builders() {
        assert_eq!(transformation::translate(1.0, 2.0, 3.0), Matrix4::translate(1.0, 2.0, 3.0));
        assert_eq!(transformation::scale(2.0, 2.0, 2.0), Matrix4::scale(2.0, 2.0, 2.0));
        assert_eq!(
            transformation::rotate(30.0, 0.0, 1.0, 0.0),
            Matrix4::rotate(30.0, 0.0, 1.0, 0.0)
        );
        assert_eq!(
            projection::orthographic(-1.0, 1.0, -1.0, 1.0, -1.0, 1.0),
            Matrix4::orthographic(-1.0, 1.0, -1.0, 1.0, -1.0, 1.0)
        );
    }

    #[test]
    fn dispatch() {
        let cells = (0..9).map(|i| i as f64).collect::<Vec<_>>();
        let m = AnyMatrix::from_flat(&cells).unwrap();
        assert_eq!(m.size(), 3);
        assert_eq!(m.as_flat(), &cells[..]);

        assert_eq!(AnyMatrix::from_flat(&cells[..5]), Err(Error::NotSquare { len: 5 }));
        assert_eq!(AnyMatrix::from_flat(&[1.0]), Err(Error::UnsupportedDimension(1)));
        assert_eq!(AnyMatrix::from_flat(&[]), Err(Error::UnsupportedDimension(0)));
    }

    #[test]
    fn multiply_vector() {
        let m = AnyMatrix::from(Matrix4::translate(1.0, 2.0, 3.0));
        let v = AnyVector::from(vec4(0.0, 0.0, 0.0, 1.0));
        assert_eq!(
            m.multiply_vector(&v),
            Ok(AnyVector::Vector4(vec4(1.0, 2.0, 3.0, 1.0)))
        );

        let v = AnyVector::from(vec3(0.0, 0.0, 0.0));
        let err = m.multiply_vector(&v).unwrap_err();
        assert_eq!(
            err,
            Error::MatrixVectorMismatch {
                size: 4,
                dimension: 3
            }
        );
        assert_eq!(
            err.to_string(),
            "cannot transform a 3-dimensional vector by a 4x4 matrix"
        );
    }

    #[test]
    fn fmt() {
        let m = AnyMatrix::from(Matrix2::IDENTITY);
        assert_eq!(m.to_string(), "[ 1.00, 0.00 ]\n[ 0.00, 1.00 ]");
    }
}
