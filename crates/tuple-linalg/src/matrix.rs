use std::{array, fmt};

use itertools::Itertools;

use crate::{toolbox, Error, MatrixSource, Vector, VectorSource};

mod ops;
mod transform;

/// A 2x2 matrix.
pub type Matrix2 = Matrix<2>;
/// A 3x3 matrix.
pub type Matrix3 = Matrix<3>;
/// A 4x4 matrix.
pub type Matrix4 = Matrix<4>;

/// A square, row-major `N`x`N` matrix of [`f64`] cells.
///
/// Cell `(row, col)` is stored at index `row * N + col` of the flat buffer returned by
/// [`Matrix::as_flat`].
///
/// # Construction
///
/// - [`mat2`], [`mat3`] and [`mat4`] take all cells as positional arguments, in row-major order.
/// - [`Matrix::from_rows`] takes an array of rows.
/// - [`Matrix::from_flat`] takes a flat row-major slice and checks its length.
/// - [`Matrix::from_fn`] invokes a closure with the row and column of each cell.
/// - [`Matrix::ZERO`] and [`Matrix::IDENTITY`] are the all-zero and identity matrices.
/// - [`Matrix4`] has builders for 3D transforms: [`Matrix::translate`], [`Matrix::scale`],
///   [`Matrix::rotate`] and [`Matrix::orthographic`].
///
/// # Arithmetic
///
/// Like [`Vector`], matrices are modified in place by their arithmetic methods, which return
/// `&mut Self` for chaining and accept a scalar, a row array, or another matrix as their operand
/// (see [`MatrixSource`]).
///
/// [`Matrix::add`], [`Matrix::subtract`], [`Matrix::divide`] and
/// [`Matrix::multiply_elementwise`] operate cell by cell. [`Matrix::multiply`] computes the
/// *matrix product* when given a matrix, and only scales every cell when given a scalar.
///
/// ```
/// # use tuple_linalg::*;
/// let mut m = mat2(1.0, 2.0, 3.0, 4.0);
/// m.multiply(mat2(5.0, 6.0, 7.0, 8.0));
/// assert_eq!(m, mat2(19.0, 22.0, 43.0, 50.0));
/// ```
///
/// # Element Access
///
/// [`Matrix`] implements [`Index`] and [`IndexMut`] for `(row, col)` tuples, which panic when out
/// of bounds. [`Matrix::get`] returns an [`Option`] instead.
///
/// [`Index`]: std::ops::Index
/// [`IndexMut`]: std::ops::IndexMut
#[derive(Clone, Copy)]
#[repr(transparent)]
pub struct Matrix<const N: usize>([[f64; N]; N]);

unsafe impl<const N: usize> bytemuck::Zeroable for Matrix<N> {}
unsafe impl<const N: usize> bytemuck::Pod for Matrix<N> {}

impl<const N: usize> Matrix<N> {
    const NON_EMPTY: () = assert!(N > 0, "a matrix needs at least one cell");

    /// A matrix with every cell set to 0.
    pub const ZERO: Self = {
        #[allow(clippy::let_unit_value)]
        let () = Self::NON_EMPTY;
        Self([[0.0; N]; N])
    };

    /// The identity matrix: 1 on the diagonal and 0 everywhere else.
    ///
    /// Transforming a vector with this matrix returns the vector unchanged.
    pub const IDENTITY: Self = {
        let mut rows = Self::ZERO.0;
        let mut i = 0;
        while i < N {
            rows[i][i] = 1.0;
            i += 1;
        }
        Self(rows)
    };

    /// Returns the identity matrix ([`Matrix::IDENTITY`]).
    ///
    /// # Examples
    ///
    /// ```
    /// # use tuple_linalg::*;
    /// assert_eq!(Matrix3::identity(), mat3(
    ///     1.0, 0.0, 0.0,
    ///     0.0, 1.0, 0.0,
    ///     0.0, 0.0, 1.0,
    /// ));
    /// ```
    #[inline]
    pub const fn identity() -> Self {
        Self::IDENTITY
    }

    /// Creates a matrix from an array of rows.
    ///
    /// # Examples
    ///
    /// ```
    /// # use tuple_linalg::*;
    /// let m = Matrix::from_rows([
    ///     [1.0, 2.0],
    ///     [3.0, 4.0],
    /// ]);
    /// assert_eq!(m, mat2(1.0, 2.0, 3.0, 4.0));
    /// ```
    #[inline]
    pub const fn from_rows(rows: [[f64; N]; N]) -> Self {
        #[allow(clippy::let_unit_value)]
        let () = Self::NON_EMPTY;
        Self(rows)
    }

    /// Creates a matrix from a flat, row-major slice of cells.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotSquare`] if the length of `cells` is not a perfect square, and
    /// [`Error::DimensionMismatch`] if it is a square of a size other than `N`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use tuple_linalg::*;
    /// let m = Matrix2::from_flat(&[1.0, 2.0, 3.0, 4.0]).unwrap();
    /// assert_eq!(m[(1, 0)], 3.0);
    ///
    /// assert_eq!(Matrix2::from_flat(&[1.0; 5]), Err(Error::NotSquare { len: 5 }));
    /// assert_eq!(
    ///     Matrix2::from_flat(&[1.0; 9]),
    ///     Err(Error::DimensionMismatch { expected: 4, actual: 9 }),
    /// );
    /// ```
    pub fn from_flat(cells: &[f64]) -> Result<Self, Error> {
        let expected = N * N;
        if cells.len() != expected {
            toolbox::matrix::size_of(cells.len())?;
            return Err(Error::DimensionMismatch {
                expected,
                actual: cells.len(),
            });
        }

        Ok(Self::from_fn(|row, col| cells[row * N + col]))
    }

    /// Creates a matrix by invoking a closure with the position (row and column) of each cell.
    ///
    /// # Examples
    ///
    /// ```
    /// # use tuple_linalg::*;
    /// let m = Matrix::from_fn(|row, col| (row * 10 + col) as f64);
    /// assert_eq!(m, Matrix::from_rows([
    ///     [ 0.0,  1.0],
    ///     [10.0, 11.0],
    /// ]));
    /// ```
    pub fn from_fn<F>(mut cb: F) -> Self
    where
        F: FnMut(usize, usize) -> f64,
    {
        Self::from_rows(array::from_fn(|row| array::from_fn(|col| cb(row, col))))
    }

    /// Returns the number of rows (and columns) of this matrix.
    #[inline]
    pub const fn size(&self) -> usize {
        N
    }

    /// Returns the cells as a flat, row-major slice of length `N * N`.
    #[inline]
    pub fn as_flat(&self) -> &[f64] {
        bytemuck::cast_slice(&self.0[..])
    }

    /// Returns the cells as a mutable flat, row-major slice of length `N * N`.
    #[inline]
    pub fn as_flat_mut(&mut self) -> &mut [f64] {
        bytemuck::cast_slice_mut(&mut self.0[..])
    }

    /// Returns a reference to the rows of this matrix.
    #[inline]
    pub const fn as_rows(&self) -> &[[f64; N]; N] {
        &self.0
    }

    /// Converts this matrix into an array of rows.
    #[inline]
    pub fn into_rows(self) -> [[f64; N]; N] {
        self.0
    }

    /// Returns row `row` as a [`Vector`].
    ///
    /// # Panics
    ///
    /// Panics if `row` is out of bounds.
    pub fn row(&self, row: usize) -> Vector<N> {
        Vector::new(self.0[row])
    }

    /// Returns column `col` as a [`Vector`].
    ///
    /// # Panics
    ///
    /// Panics if `col` is out of bounds.
    pub fn column(&self, col: usize) -> Vector<N> {
        Vector::from_fn(|row| self.0[row][col])
    }

    /// Returns the cell at `(row, col)`, or [`None`] if out of bounds.
    ///
    /// # Examples
    ///
    /// ```
    /// # use tuple_linalg::*;
    /// let m = mat2(1.0, 2.0, 3.0, 4.0);
    /// assert_eq!(m.get(0, 1), Some(2.0));
    /// assert_eq!(m.get(1, 0), Some(3.0));
    /// assert_eq!(m.get(2, 0), None);
    /// ```
    pub fn get(&self, row: usize, col: usize) -> Option<f64> {
        self.0.get(row).and_then(|r| r.get(col)).copied()
    }

    /// Returns a mutable reference to the cell at `(row, col)`, or [`None`] if out of bounds.
    pub fn get_mut(&mut self, row: usize, col: usize) -> Option<&mut f64> {
        self.0.get_mut(row).and_then(|r| r.get_mut(col))
    }

    /// Applies a closure to each cell, returning a new matrix.
    pub fn map<F>(self, mut f: F) -> Self
    where
        F: FnMut(f64) -> f64,
    {
        Self::from_rows(self.0.map(|row| row.map(&mut f)))
    }

    /// Combines each cell with the matching cell of `source`, in place.
    ///
    /// This is the cell-wise counterpart of [`Vector::apply`].
    pub fn apply<'a, S, F>(&mut self, source: S, mut operation: F) -> &mut Self
    where
        S: Into<MatrixSource<'a, N>>,
        F: FnMut(f64, f64) -> f64,
    {
        let operand = source.into().tuple();
        for (row, rhs_row) in self.0.iter_mut().zip(operand) {
            for (cell, rhs) in row.iter_mut().zip(rhs_row) {
                *cell = operation(*cell, rhs);
            }
        }
        self
    }

    /// Cell-wise addition.
    pub fn add<'a>(&mut self, source: impl Into<MatrixSource<'a, N>>) -> &mut Self {
        self.apply(source, |a, b| a + b)
    }

    /// Cell-wise subtraction.
    pub fn subtract<'a>(&mut self, source: impl Into<MatrixSource<'a, N>>) -> &mut Self {
        self.apply(source, |a, b| a - b)
    }

    /// Cell-wise division.
    pub fn divide<'a>(&mut self, source: impl Into<MatrixSource<'a, N>>) -> &mut Self {
        self.apply(source, |a, b| a / b)
    }

    /// Cell-wise (Hadamard) multiplication.
    ///
    /// # Examples
    ///
    /// ```
    /// # use tuple_linalg::*;
    /// let mut m = mat2(1.0, 2.0, 3.0, 4.0);
    /// m.multiply_elementwise(mat2(5.0, 6.0, 7.0, 8.0));
    /// assert_eq!(m, mat2(5.0, 12.0, 21.0, 32.0));
    /// ```
    pub fn multiply_elementwise<'a>(
        &mut self,
        source: impl Into<MatrixSource<'a, N>>,
    ) -> &mut Self {
        self.apply(source, |a, b| a * b)
    }

    /// Multiplies `self` with `source`, storing the result in `self`.
    ///
    /// When `source` is a matrix (or an array of rows), this computes the matrix product
    /// `self * source`. When `source` is a scalar, every cell is scaled by it.
    ///
    /// # Examples
    ///
    /// ```
    /// # use tuple_linalg::*;
    /// let mut m = mat2(1.0, 2.0, 3.0, 4.0);
    /// m.multiply(2.0);
    /// assert_eq!(m, mat2(2.0, 4.0, 6.0, 8.0));
    ///
    /// m.multiply(Matrix2::IDENTITY);
    /// assert_eq!(m, mat2(2.0, 4.0, 6.0, 8.0));
    /// ```
    pub fn multiply<'a>(&mut self, source: impl Into<MatrixSource<'a, N>>) -> &mut Self {
        let source = source.into();
        if source.is_scalar() {
            return self.multiply_elementwise(source);
        }

        let left = *self;
        let right = Self::from_rows(source.tuple());
        let (a, b) = (left.as_flat(), right.as_flat());
        *self = Self::from_fn(|row, col| {
            (0..N).fold(0.0, |acc, i| acc + a[row * N + i] * b[i * N + col])
        });
        self
    }

    /// Transforms `vector` by this matrix, returning the transformed vector.
    ///
    /// # Examples
    ///
    /// ```
    /// # use tuple_linalg::*;
    /// let m = Matrix4::translate(1.0, 2.0, 3.0);
    /// assert_eq!(m.multiply_vector(vec4(0.0, 0.0, 0.0, 1.0)), vec4(1.0, 2.0, 3.0, 1.0));
    /// ```
    pub fn multiply_vector<'a>(&self, vector: impl Into<VectorSource<'a, N>>) -> Vector<N> {
        let vector = vector.into().tuple();
        let mut result = Vector::ZERO;
        for row in 0..N {
            for col in 0..N {
                result[row] += self.0[row][col] * vector[col];
            }
        }
        result
    }

    /// Swaps the rows and columns of this matrix.
    ///
    /// # Examples
    ///
    /// ```
    /// # use tuple_linalg::*;
    /// let mut m = mat3(
    ///     1.0, 2.0, 3.0,
    ///     4.0, 5.0, 6.0,
    ///     7.0, 8.0, 9.0,
    /// );
    /// m.transpose();
    /// assert_eq!(m, mat3(
    ///     1.0, 4.0, 7.0,
    ///     2.0, 5.0, 8.0,
    ///     3.0, 6.0, 9.0,
    /// ));
    /// ```
    pub fn transpose(&mut self) -> &mut Self {
        let original = self.0;
        for (i, row) in self.0.iter_mut().enumerate() {
            for (j, cell) in row.iter_mut().enumerate() {
                *cell = original[j][i];
            }
        }
        self
    }

    /// Replaces every cell with its reciprocal (`1 / cell`).
    ///
    /// *Note*: this is **not** the inverse matrix. It operates on each cell independently, and a
    /// cell containing zero becomes infinite.
    ///
    /// # Examples
    ///
    /// ```
    /// # use tuple_linalg::*;
    /// let mut m = mat2(4.0, 2.0, -1.0, 0.5);
    /// m.inverse();
    /// assert_eq!(m, mat2(0.25, 0.5, -1.0, 2.0));
    /// ```
    pub fn inverse(&mut self) -> &mut Self {
        self.apply(1.0, |cell, one| one / cell)
    }
}

impl<const N: usize> Default for Matrix<N> {
    fn default() -> Self {
        Self::ZERO
    }
}

impl<const N: usize> From<[[f64; N]; N]> for Matrix<N> {
    #[inline]
    fn from(rows: [[f64; N]; N]) -> Self {
        Self::from_rows(rows)
    }
}

impl<const N: usize> fmt::Debug for Matrix<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        struct FormatRow<'a, const N: usize>(&'a [f64; N]);
        impl<'a, const N: usize> fmt::Debug for FormatRow<'a, N> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "[")?;
                for (col, cell) in self.0.iter().enumerate() {
                    if col != 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{:?}", cell)?;
                }
                write!(f, "]")?;
                Ok(())
            }
        }

        let mut list = f.debug_list();
        for row in &self.0 {
            list.entry(&FormatRow(row));
        }
        list.finish()
    }
}

/// Formats the matrix as a grid, one `[ a, b, ... ]` line per row.
///
/// Cells are printed with a fixed number of fractional digits (2 by default, or the precision
/// passed to the formatter), right-aligned to the widest cell.
impl<const N: usize> fmt::Display for Matrix<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let precision = f.precision().unwrap_or(2);
        let cells = self
            .as_flat()
            .iter()
            .map(|cell| format!("{:.*}", precision, cell))
            .collect::<Vec<_>>();
        let width = cells.iter().map(String::len).max().unwrap_or(0);

        let grid = cells
            .chunks(N)
            .map(|row| {
                let row = row
                    .iter()
                    .map(|cell| format!("{:>width$}", cell, width = width))
                    .join(", ");
                format!("[ {} ]", row)
            })
            .join("\n");
        f.write_str(&grid)
    }
}

/// Constructs a [`Matrix2`] from its cells, in row-major order.
#[inline]
pub const fn mat2(m00: f64, m01: f64, m10: f64, m11: f64) -> Matrix2 {
    Matrix::from_rows([[m00, m01], [m10, m11]])
}

/// Constructs a [`Matrix3`] from its cells, in row-major order.
#[allow(clippy::too_many_arguments)]
#[rustfmt::skip]
#[inline]
pub const fn mat3(
    m00: f64, m01: f64, m02: f64,
    m10: f64, m11: f64, m12: f64,
    m20: f64, m21: f64, m22: f64,
) -> Matrix3 {
    Matrix::from_rows([
        [m00, m01, m02],
        [m10, m11, m12],
        [m20, m21, m22],
    ])
}

/// Constructs a [`Matrix4`] from its cells, in row-major order.
#[allow(clippy::too_many_arguments)]
#[rustfmt::skip]
#[inline]
pub const fn mat4(
    m00: f64, m01: f64, m02: f64, m03: f64,
    m10: f64, m11: f64, m12: f64, m13: f64,
    m20: f64, m21: f64, m22: f64, m23: f64,
    m30: f64, m31: f64, m32: f64, m33: f64,
) -> Matrix4 {
    Matrix::from_rows([
        [m00, m01, m02, m03],
        [m10, m11, m12, m13],
        [m20, m21, m22, m23],
        [m30, m31, m32, m33],
    ])
}
