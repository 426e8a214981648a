//! Operand types accepted by the arithmetic methods of [`Vector`] and [`Matrix`].
//!
//! Every arithmetic method takes `impl Into<VectorSource<N>>` (or [`MatrixSource`]), so callers can
//! pass a scalar, a raw array, or another vector/matrix without naming the source type:
//!
//! ```
//! # use tuple_linalg::*;
//! let mut v = vec3(1.0, 2.0, 3.0);
//! v.add(1.0).multiply([1.0, 2.0, 3.0]).subtract(vec3(2.0, 6.0, 12.0));
//! assert_eq!(v, [0.0, 0.0, 0.0]);
//! ```
//!
//! Slices have no statically known length, so they are converted with [`TryFrom`] instead, which
//! is where a length mismatch is reported.

use crate::{Error, Matrix, Vector};

/// A polymorphic operand of an `N`-dimensional vector operation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum VectorSource<'a, const N: usize> {
    /// A single value, used for every component.
    Scalar(f64),
    /// Raw components, paired positionally.
    Tuple([f64; N]),
    /// Another vector, whose components are paired positionally.
    Vector(&'a Vector<N>),
}

impl<'a, const N: usize> VectorSource<'a, N> {
    /// Resolves this source into its canonical `N`-element form.
    ///
    /// Scalars are broadcast to every element.
    ///
    /// # Examples
    ///
    /// ```
    /// # use tuple_linalg::*;
    /// assert_eq!(VectorSource::<3>::from(2.0).tuple(), [2.0, 2.0, 2.0]);
    /// assert_eq!(VectorSource::from(&vec2(1.0, 2.0)).tuple(), [1.0, 2.0]);
    /// ```
    #[inline]
    pub fn tuple(self) -> [f64; N] {
        match self {
            VectorSource::Scalar(value) => [value; N],
            VectorSource::Tuple(tuple) => tuple,
            VectorSource::Vector(vector) => vector.into_array(),
        }
    }
}

impl<'a, const N: usize> From<f64> for VectorSource<'a, N> {
    #[inline]
    fn from(value: f64) -> Self {
        VectorSource::Scalar(value)
    }
}

impl<'a, const N: usize> From<[f64; N]> for VectorSource<'a, N> {
    #[inline]
    fn from(tuple: [f64; N]) -> Self {
        VectorSource::Tuple(tuple)
    }
}

impl<'a, const N: usize> From<Vector<N>> for VectorSource<'a, N> {
    #[inline]
    fn from(vector: Vector<N>) -> Self {
        VectorSource::Tuple(vector.into_array())
    }
}

impl<'a, const N: usize> From<&'a Vector<N>> for VectorSource<'a, N> {
    #[inline]
    fn from(vector: &'a Vector<N>) -> Self {
        VectorSource::Vector(vector)
    }
}

impl<'a, const N: usize> TryFrom<&'a [f64]> for VectorSource<'a, N> {
    type Error = Error;

    /// Converts a slice of exactly `N` elements.
    ///
    /// # Examples
    ///
    /// ```
    /// # use tuple_linalg::*;
    /// let ok = VectorSource::<2>::try_from(&[1.0, 2.0][..]).unwrap();
    /// assert_eq!(ok.tuple(), [1.0, 2.0]);
    ///
    /// let err = VectorSource::<2>::try_from(&[1.0, 2.0, 3.0][..]).unwrap_err();
    /// assert_eq!(err, Error::DimensionMismatch { expected: 2, actual: 3 });
    /// ```
    fn try_from(slice: &'a [f64]) -> Result<Self, Self::Error> {
        <[f64; N]>::try_from(slice)
            .map(VectorSource::Tuple)
            .map_err(|_| {
                log::debug!(
                    "rejecting {}-element slice as a {}-vector operand",
                    slice.len(),
                    N
                );
                Error::DimensionMismatch {
                    expected: N,
                    actual: slice.len(),
                }
            })
    }
}

/// A polymorphic operand of an `N`x`N` matrix operation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MatrixSource<'a, const N: usize> {
    /// A single value, used for every cell.
    Scalar(f64),
    /// Raw cells as an array of rows.
    Tuple([[f64; N]; N]),
    /// Another matrix.
    Matrix(&'a Matrix<N>),
}

impl<'a, const N: usize> MatrixSource<'a, N> {
    /// Resolves this source into its canonical row-major form.
    ///
    /// # Examples
    ///
    /// ```
    /// # use tuple_linalg::*;
    /// assert_eq!(MatrixSource::<2>::from(1.0).tuple(), [[1.0, 1.0], [1.0, 1.0]]);
    /// ```
    #[inline]
    pub fn tuple(self) -> [[f64; N]; N] {
        match self {
            MatrixSource::Scalar(value) => [[value; N]; N],
            MatrixSource::Tuple(rows) => rows,
            MatrixSource::Matrix(matrix) => matrix.into_rows(),
        }
    }

    /// Returns whether this source is a scalar, which changes the meaning of
    /// [`Matrix::multiply`].
    #[inline]
    pub fn is_scalar(&self) -> bool {
        matches!(self, MatrixSource::Scalar(_))
    }
}

impl<'a, const N: usize> From<f64> for MatrixSource<'a, N> {
    #[inline]
    fn from(value: f64) -> Self {
        MatrixSource::Scalar(value)
    }
}

impl<'a, const N: usize> From<[[f64; N]; N]> for MatrixSource<'a, N> {
    #[inline]
    fn from(rows: [[f64; N]; N]) -> Self {
        MatrixSource::Tuple(rows)
    }
}

impl<'a, const N: usize> From<Matrix<N>> for MatrixSource<'a, N> {
    #[inline]
    fn from(matrix: Matrix<N>) -> Self {
        MatrixSource::Tuple(matrix.into_rows())
    }
}

impl<'a, const N: usize> From<&'a Matrix<N>> for MatrixSource<'a, N> {
    #[inline]
    fn from(matrix: &'a Matrix<N>) -> Self {
        MatrixSource::Matrix(matrix)
    }
}

impl<'a, const N: usize> TryFrom<&'a [f64]> for MatrixSource<'a, N> {
    type Error = Error;

    /// Converts a flat, row-major slice of exactly `N * N` cells.
    fn try_from(cells: &'a [f64]) -> Result<Self, Self::Error> {
        Matrix::<N>::from_flat(cells).map(|matrix| MatrixSource::Tuple(matrix.into_rows()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{mat2, vec3};

    #[test]
    fn vector_tuple() {
        let v = vec3(1.0, 2.0, 3.0);
        assert_eq!(VectorSource::<3>::Scalar(0.5).tuple(), [0.5; 3]);
        assert_eq!(VectorSource::from([4.0, 5.0, 6.0]).tuple(), [4.0, 5.0, 6.0]);
        assert_eq!(VectorSource::from(&v).tuple(), [1.0, 2.0, 3.0]);
        assert_eq!(VectorSource::from(v).tuple(), [1.0, 2.0, 3.0]);
    }

    #[test]
    fn vector_slice() {
        let short = [1.0, 2.0];
        assert_eq!(
            VectorSource::<3>::try_from(&short[..]),
            Err(Error::DimensionMismatch {
                expected: 3,
                actual: 2
            })
        );
        let exact = [1.0, 2.0, 3.0];
        assert_eq!(
            VectorSource::<3>::try_from(&exact[..]).map(VectorSource::tuple),
            Ok(exact)
        );
    }

    #[test]
    fn matrix_tuple() {
        let m = mat2(1.0, 2.0, 3.0, 4.0);
        assert_eq!(MatrixSource::from(&m).tuple(), [[1.0, 2.0], [3.0, 4.0]]);
        assert_eq!(MatrixSource::<2>::from(7.0).tuple(), [[7.0; 2]; 2]);
        assert!(MatrixSource::<2>::from(7.0).is_scalar());
        assert!(!MatrixSource::from(m).is_scalar());
    }

    #[test]
    fn matrix_slice() {
        let flat = [1.0, 2.0, 3.0, 4.0];
        assert_eq!(
            MatrixSource::<2>::try_from(&flat[..]).map(MatrixSource::tuple),
            Ok([[1.0, 2.0], [3.0, 4.0]])
        );
        assert_eq!(
            MatrixSource::<3>::try_from(&flat[..]),
            Err(Error::DimensionMismatch {
                expected: 9,
                actual: 4
            })
        );
        assert_eq!(
            MatrixSource::<2>::try_from(&flat[..3]),
            Err(Error::NotSquare { len: 3 })
        );
    }
}
