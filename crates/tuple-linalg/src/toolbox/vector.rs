//! Vector coercion and runtime-sized dispatch.

use std::fmt;

use crate::{Error, Vector, Vector2, Vector3, Vector4, VectorSource};

/// Resolves `source` into an array of `N` components.
///
/// Scalars are copied into every component.
///
/// # Examples
///
/// ```
/// # use tuple_linalg::*;
/// use tuple_linalg::toolbox::vector;
///
/// assert_eq!(vector::tuple::<3>(1.5), [1.5, 1.5, 1.5]);
/// assert_eq!(vector::tuple(vec2(1.0, 2.0)), [1.0, 2.0]);
/// ```
#[inline]
pub fn tuple<'a, const N: usize>(source: impl Into<VectorSource<'a, N>>) -> [f64; N] {
    source.into().tuple()
}

/// Creates a new `N`-dimensional vector from `source`.
///
/// The returned vector never aliases `source`.
///
/// # Examples
///
/// ```
/// # use tuple_linalg::*;
/// use tuple_linalg::toolbox::vector;
///
/// let v: Vector4 = vector::from_source(0.5);
/// assert_eq!(v, [0.5; 4]);
///
/// let original = vec3(1.0, 2.0, 3.0);
/// let mut copy = vector::from_source(&original);
/// copy.add(1.0);
/// assert_eq!(original, [1.0, 2.0, 3.0]);
/// ```
#[inline]
pub fn from_source<'a, const N: usize>(source: impl Into<VectorSource<'a, N>>) -> Vector<N> {
    Vector::new(tuple(source))
}

fn sized<const N: usize>(components: &[f64]) -> Result<Vector<N>, Error> {
    VectorSource::try_from(components).map(|source| Vector::new(source.tuple()))
}

/// A 2, 3 or 4-dimensional vector whose size is only known at runtime.
///
/// Only these three sizes can be dispatched at runtime: [`AnyVector::from_slice`] rejects any other
/// length with [`Error::UnsupportedDimension`]. Vectors of other sizes are built with
/// [`from_source`] or `VectorSource::<N>::try_from`, naming the size as a const generic parameter.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AnyVector {
    Vector2(Vector2),
    Vector3(Vector3),
    Vector4(Vector4),
}

impl AnyVector {
    /// Creates a vector of the size matching the length of `components`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnsupportedDimension`] if `components` does not have 2, 3 or 4 elements.
    ///
    /// # Examples
    ///
    /// ```
    /// # use tuple_linalg::*;
    /// use tuple_linalg::toolbox::AnyVector;
    ///
    /// let v = AnyVector::from_slice(&[1.0, 2.0, 3.0]).unwrap();
    /// assert_eq!(v, AnyVector::Vector3(vec3(1.0, 2.0, 3.0)));
    /// assert_eq!(AnyVector::from_slice(&[1.0]), Err(Error::UnsupportedDimension(1)));
    /// ```
    pub fn from_slice(components: &[f64]) -> Result<Self, Error> {
        log::trace!("dispatching {}-element vector", components.len());
        match components.len() {
            2 => sized(components).map(AnyVector::Vector2),
            3 => sized(components).map(AnyVector::Vector3),
            4 => sized(components).map(AnyVector::Vector4),
            len => Err(Error::UnsupportedDimension(len)),
        }
    }

    /// Returns the number of components.
    pub fn size(&self) -> usize {
        self.components().len()
    }

    /// Returns the components as a slice.
    pub fn components(&self) -> &[f64] {
        match self {
            AnyVector::Vector2(v) => v.components(),
            AnyVector::Vector3(v) => v.components(),
            AnyVector::Vector4(v) => v.components(),
        }
    }
}

impl From<Vector2> for AnyVector {
    fn from(v: Vector2) -> Self {
        AnyVector::Vector2(v)
    }
}

impl From<Vector3> for AnyVector {
    fn from(v: Vector3) -> Self {
        AnyVector::Vector3(v)
    }
}

impl From<Vector4> for AnyVector {
    fn from(v: Vector4) -> Self {
        AnyVector::Vector4(v)
    }
}

impl fmt::Display for AnyVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AnyVector::Vector2(v) => fmt::Display::fmt(v, f),
            AnyVector::Vector3(v) => fmt::Display::fmt(v, f),
            AnyVector::Vector4(v) => fmt::Display::fmt(v, f),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::{vec2, vec4};

    use super::*;

    #[test]
    fn coercion() {
        assert_eq!(tuple::<2>(3.0), [3.0, 3.0]);
        assert_eq!(tuple([1.0, 2.0, 3.0]), [1.0, 2.0, 3.0]);

        let v = vec2(4.0, 5.0);
        assert_eq!(tuple(&v), [4.0, 5.0]);
        assert_eq!(from_source(&v), v);
        assert_eq!(from_source::<3>(-1.0), [-1.0; 3]);
    }

    #[test]
    fn dispatch() {
        assert_eq!(
            AnyVector::from_slice(&[1.0, 2.0]),
            Ok(AnyVector::Vector2(vec2(1.0, 2.0)))
        );
        let v = AnyVector::from_slice(&[1.0, 2.0, 3.0, 4.0]).unwrap();
        assert_eq!(v, AnyVector::from(vec4(1.0, 2.0, 3.0, 4.0)));
        assert_eq!(v.size(), 4);
        assert_eq!(v.to_string(), "[ 1, 2, 3, 4 ]");

        assert_eq!(AnyVector::from_slice(&[]), Err(Error::UnsupportedDimension(0)));
        assert_eq!(
            AnyVector::from_slice(&[0.0; 5]),
            Err(Error::UnsupportedDimension(5))
        );
    }
}
