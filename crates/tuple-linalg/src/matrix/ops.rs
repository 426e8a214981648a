use std::ops::{AddAssign, DivAssign, Index, IndexMut, Mul, MulAssign, Neg, SubAssign};

use crate::{Matrix, MatrixSource, Vector};

impl<const N: usize> Index<(usize, usize)> for Matrix<N> {
    type Output = f64;

    #[inline]
    fn index(&self, (row, col): (usize, usize)) -> &Self::Output {
        &self.0[row][col]
    }
}

impl<const N: usize> IndexMut<(usize, usize)> for Matrix<N> {
    #[inline]
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut Self::Output {
        &mut self.0[row][col]
    }
}

impl<const N: usize> PartialEq for Matrix<N> {
    fn eq(&self, other: &Matrix<N>) -> bool {
        self.0.eq(&other.0)
    }
}

impl<const N: usize> PartialEq<[[f64; N]; N]> for Matrix<N> {
    fn eq(&self, other: &[[f64; N]; N]) -> bool {
        self.0.eq(other)
    }
}

/// Cell-wise negation.
impl<const N: usize> Neg for Matrix<N> {
    type Output = Matrix<N>;

    fn neg(self) -> Self::Output {
        self.map(f64::neg)
    }
}

/// Matrix * Column Vector.
impl<const N: usize> Mul<Vector<N>> for Matrix<N> {
    type Output = Vector<N>;

    fn mul(self, rhs: Vector<N>) -> Self::Output {
        self.multiply_vector(rhs)
    }
}

/// Matrix * Matrix.
impl<const N: usize> Mul<Matrix<N>> for Matrix<N> {
    type Output = Matrix<N>;

    fn mul(mut self, rhs: Matrix<N>) -> Self::Output {
        self.multiply(rhs);
        self
    }
}

/// Matrix * Scalar.
impl<const N: usize> Mul<f64> for Matrix<N> {
    type Output = Matrix<N>;

    fn mul(self, rhs: f64) -> Self::Output {
        self.map(|cell| cell * rhs)
    }
}

// NB: like for `Vector`, `Add` would shadow the in-place `Matrix::add`, so it and `Sub` are left out.

/// Cell-wise addition.
impl<'a, S, const N: usize> AddAssign<S> for Matrix<N>
where
    S: Into<MatrixSource<'a, N>>,
{
    fn add_assign(&mut self, rhs: S) {
        Matrix::add(self, rhs);
    }
}

/// Cell-wise subtraction.
impl<'a, S, const N: usize> SubAssign<S> for Matrix<N>
where
    S: Into<MatrixSource<'a, N>>,
{
    fn sub_assign(&mut self, rhs: S) {
        self.subtract(rhs);
    }
}

/// Matrix product (or scaling, for scalar operands). See [`Matrix::multiply`].
impl<'a, S, const N: usize> MulAssign<S> for Matrix<N>
where
    S: Into<MatrixSource<'a, N>>,
{
    fn mul_assign(&mut self, rhs: S) {
        self.multiply(rhs);
    }
}

/// Cell-wise division.
impl<'a, S, const N: usize> DivAssign<S> for Matrix<N>
where
    S: Into<MatrixSource<'a, N>>,
{
    fn div_assign(&mut self, rhs: S) {
        self.divide(rhs);
    }
}

#[cfg(test)]
mod tests {
    use crate::{mat2, vec2, Matrix2};

    #[test]
    fn operators() {
        let a = mat2(1.0, 2.0, 3.0, 4.0);
        let b = mat2(5.0, 6.0, 7.0, 8.0);
        assert_eq!(a * b, mat2(19.0, 22.0, 43.0, 50.0));
        assert_eq!(b * a, mat2(23.0, 34.0, 31.0, 46.0));
        assert_eq!(a * 2.0, mat2(2.0, 4.0, 6.0, 8.0));
        assert_eq!(a * vec2(1.0, 1.0), vec2(3.0, 7.0));
        assert_eq!(-a, [[-1.0, -2.0], [-3.0, -4.0]]);
    }

    #[test]
    fn assign_ops() {
        let mut m = Matrix2::IDENTITY;
        m += 1.0;
        assert_eq!(m, mat2(2.0, 1.0, 1.0, 2.0));
        m *= mat2(1.0, 0.0, 1.0, 1.0);
        assert_eq!(m, mat2(3.0, 1.0, 3.0, 2.0));
        m -= [[1.0, 1.0], [1.0, 0.0]];
        m /= 2.0;
        assert_eq!(m, mat2(1.0, 0.0, 1.0, 1.0));
        m[(0, 1)] = 5.0;
        assert_eq!(m[(0, 1)], 5.0);
    }
}
