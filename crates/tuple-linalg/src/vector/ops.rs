//! Implementations of `std::ops`.

use std::ops::{AddAssign, DivAssign, Index, IndexMut, MulAssign, Neg, SubAssign};

use crate::VectorSource;

use super::Vector;

impl<const N: usize> Index<usize> for Vector<N> {
    type Output = f64;

    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl<const N: usize> IndexMut<usize> for Vector<N> {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        &mut self.0[index]
    }
}

impl<const N: usize> PartialEq for Vector<N> {
    fn eq(&self, other: &Vector<N>) -> bool {
        self.0 == other.0
    }
}

impl<const N: usize> PartialEq<[f64; N]> for Vector<N> {
    fn eq(&self, other: &[f64; N]) -> bool {
        self.0.eq(other)
    }
}

impl<const N: usize> PartialEq<Vector<N>> for [f64; N] {
    fn eq(&self, other: &Vector<N>) -> bool {
        *self == other.0
    }
}

impl<const N: usize> PartialEq<[f64]> for Vector<N> {
    fn eq(&self, other: &[f64]) -> bool {
        self.0[..].eq(other)
    }
}

/// Component-wise negation.
impl<const N: usize> Neg for Vector<N> {
    type Output = Vector<N>;

    fn neg(self) -> Self::Output {
        self.map(f64::neg)
    }
}

// NB: `Add` is not implemented since `Add::add` takes `self` by value and would be picked over the
// in-place `Vector::add` by method resolution. `Sub`, `Mul` and `Div` are left out to match.

/// Component-wise addition.
impl<'a, S, const N: usize> AddAssign<S> for Vector<N>
where
    S: Into<VectorSource<'a, N>>,
{
    fn add_assign(&mut self, rhs: S) {
        Vector::add(self, rhs);
    }
}

/// Component-wise subtraction.
impl<'a, S, const N: usize> SubAssign<S> for Vector<N>
where
    S: Into<VectorSource<'a, N>>,
{
    fn sub_assign(&mut self, rhs: S) {
        self.subtract(rhs);
    }
}

/// Component-wise multiplication.
impl<'a, S, const N: usize> MulAssign<S> for Vector<N>
where
    S: Into<VectorSource<'a, N>>,
{
    fn mul_assign(&mut self, rhs: S) {
        self.multiply(rhs);
    }
}

/// Component-wise division.
impl<'a, S, const N: usize> DivAssign<S> for Vector<N>
where
    S: Into<VectorSource<'a, N>>,
{
    fn div_assign(&mut self, rhs: S) {
        self.divide(rhs);
    }
}
