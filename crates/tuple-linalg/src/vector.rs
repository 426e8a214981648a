use std::{array, fmt};

use itertools::Itertools;

use crate::VectorSource;

mod ops;
mod view;

pub use view::*;

/// A 2-dimensional vector.
pub type Vector2 = Vector<2>;
/// A 3-dimensional vector.
pub type Vector3 = Vector<3>;
/// A 4-dimensional vector.
pub type Vector4 = Vector<4>;

/// An `N`-component vector of [`f64`] values.
///
/// # Construction
///
/// - The freestanding [`vec2`], [`vec3`] and [`vec4`] functions create vectors from their
///   components, and [`Vector::new`] does the same for any `N`.
/// - [`Vector::splat`] copies the given value into each component.
/// - [`Vector::from_fn`] invokes a closure with the index of each component.
/// - Vectors can be created from arrays using their [`From`] implementation.
/// - [`Vector::ZERO`] has every component set to zero.
///
/// `N` must not be zero; constructing a `Vector<0>` fails to compile.
///
/// # Arithmetic
///
/// The arithmetic methods ([`add`], [`subtract`], [`multiply`], [`divide`], [`set`] and the
/// general [`apply`]) work component-wise, modify the vector in place, and return `&mut Self` so
/// that calls can be chained. Their operand can be anything that converts into a
/// [`VectorSource`]: a scalar (applied to every component), an `[f64; N]` array, or another
/// vector.
///
/// ```
/// # use tuple_linalg::*;
/// let mut v = vec3(1.0, 2.0, 3.0);
/// v.multiply(2.0).add([1.0, 1.0, 1.0]);
/// assert_eq!(v, [3.0, 5.0, 7.0]);
/// ```
///
/// Call [`clone`] first to compute a new vector without touching the original.
///
/// # Element Access
///
/// - For 2, 3 and 4 dimensions, components can be accessed as fields `x`, `y`, `z` and `w`.
///   - 2- and 3-dimensional vectors also call them `width`, `height` and `depth`.
///   - 4-dimensional vectors are treated as rectangles: their `width` and `height` are the `z` and
///     `w` components.
/// - The [`Index`] and [`IndexMut`] impls can be used just like on arrays.
/// - [`Vector::components`], [`Vector::as_array`] and [`Vector::into_array`] expose the raw
///   components.
///
/// [`add`]: Vector::add
/// [`subtract`]: Vector::subtract
/// [`multiply`]: Vector::multiply
/// [`divide`]: Vector::divide
/// [`set`]: Vector::set
/// [`apply`]: Vector::apply
/// [`clone`]: Clone::clone
/// [`Index`]: std::ops::Index
/// [`IndexMut`]: std::ops::IndexMut
#[derive(Clone, Copy)]
#[repr(transparent)]
pub struct Vector<const N: usize>([f64; N]);

unsafe impl<const N: usize> bytemuck::Zeroable for Vector<N> {}
unsafe impl<const N: usize> bytemuck::Pod for Vector<N> {}

impl<const N: usize> Vector<N> {
    const NON_EMPTY: () = assert!(N > 0, "a vector needs at least one component");

    /// A vector with every component set to 0.
    pub const ZERO: Self = Self::new([0.0; N]);

    /// Creates a vector from its components.
    #[inline]
    pub const fn new(components: [f64; N]) -> Self {
        #[allow(clippy::let_unit_value)]
        let () = Self::NON_EMPTY;
        Self(components)
    }

    /// Creates a vector with each component initialized to `value`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use tuple_linalg::*;
    /// assert_eq!(Vector::splat(2.0), vec3(2.0, 2.0, 2.0));
    /// ```
    #[inline]
    pub fn splat(value: f64) -> Self {
        Self::new([value; N])
    }

    /// Creates a vector where each component is initialized by invoking a closure with its index.
    ///
    /// # Examples
    ///
    /// ```
    /// # use tuple_linalg::*;
    /// let v = Vector::from_fn(|i| i as f64 * 10.0);
    /// assert_eq!(v, vec3(0.0, 10.0, 20.0));
    /// ```
    pub fn from_fn<F>(cb: F) -> Self
    where
        F: FnMut(usize) -> f64,
    {
        Self::new(array::from_fn(cb))
    }

    /// Returns the number of components (`N`).
    #[inline]
    pub const fn size(&self) -> usize {
        N
    }

    /// Returns the components as a slice.
    #[inline]
    pub const fn components(&self) -> &[f64] {
        &self.0
    }

    /// Returns a reference to the components as an array of length `N`.
    #[inline]
    pub const fn as_array(&self) -> &[f64; N] {
        &self.0
    }

    /// Returns a mutable reference to the components as a slice.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [f64] {
        &mut self.0
    }

    /// Converts this vector into an `N`-element array.
    #[inline]
    pub fn into_array(self) -> [f64; N] {
        self.0
    }

    /// Applies a closure to each component, returning a new vector.
    pub fn map<F>(self, f: F) -> Self
    where
        F: FnMut(f64) -> f64,
    {
        Self::new(self.0.map(f))
    }

    /// Combines each component with the matching component of `source`, in place.
    ///
    /// `operation` is called with the current component and the operand's component, and its
    /// result replaces the current component. All other arithmetic methods are built on this one.
    ///
    /// # Examples
    ///
    /// ```
    /// # use tuple_linalg::*;
    /// let mut v = vec2(3.0, 8.0);
    /// v.apply([5.0, 2.0], f64::max);
    /// assert_eq!(v, [5.0, 8.0]);
    /// ```
    pub fn apply<'a, S, F>(&mut self, source: S, mut operation: F) -> &mut Self
    where
        S: Into<VectorSource<'a, N>>,
        F: FnMut(f64, f64) -> f64,
    {
        let operand = source.into().tuple();
        for (component, rhs) in self.0.iter_mut().zip(operand) {
            *component = operation(*component, rhs);
        }
        self
    }

    /// Component-wise addition.
    pub fn add<'a>(&mut self, source: impl Into<VectorSource<'a, N>>) -> &mut Self {
        self.apply(source, |a, b| a + b)
    }

    /// Component-wise subtraction.
    pub fn subtract<'a>(&mut self, source: impl Into<VectorSource<'a, N>>) -> &mut Self {
        self.apply(source, |a, b| a - b)
    }

    /// Component-wise multiplication.
    ///
    /// # Examples
    ///
    /// ```
    /// # use tuple_linalg::*;
    /// let mut v = vec3(1.0, 2.0, 3.0);
    /// assert_eq!(*v.multiply(vec3(2.0, 0.5, -1.0)), [2.0, 1.0, -3.0]);
    /// assert_eq!(*v.multiply(10.0), [20.0, 10.0, -30.0]);
    /// ```
    pub fn multiply<'a>(&mut self, source: impl Into<VectorSource<'a, N>>) -> &mut Self {
        self.apply(source, |a, b| a * b)
    }

    /// Component-wise division.
    ///
    /// Division by zero follows IEEE-754 and produces infinities or NaN.
    pub fn divide<'a>(&mut self, source: impl Into<VectorSource<'a, N>>) -> &mut Self {
        self.apply(source, |a, b| a / b)
    }

    /// Overwrites every component with the matching component of `source`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use tuple_linalg::*;
    /// let mut v = vec4(1.0, 2.0, 3.0, 4.0);
    /// v.set(0.0);
    /// assert_eq!(v, Vector::ZERO);
    /// ```
    pub fn set<'a>(&mut self, source: impl Into<VectorSource<'a, N>>) -> &mut Self {
        self.apply(source, |_, b| b)
    }

    /// Divides this vector by its own magnitude, turning it into a unit vector.
    ///
    /// The zero vector has no direction: normalizing it divides `0` by `0`, and every component
    /// becomes NaN.
    ///
    /// # Examples
    ///
    /// ```
    /// # use tuple_linalg::*;
    /// let mut v = vec3(0.0, 0.0, 4.0);
    /// assert_eq!(*v.normalize(), [0.0, 0.0, 1.0]);
    ///
    /// let mut zero = Vector3::ZERO;
    /// assert!(zero.normalize().components().iter().all(|c| c.is_nan()));
    /// ```
    pub fn normalize(&mut self) -> &mut Self {
        let magnitude = self.magnitude();
        if magnitude == 0.0 {
            log::debug!("normalizing a zero-length vector, all components will be NaN");
        }
        self.divide(magnitude)
    }

    /// Returns the sum of all components.
    pub fn sum(&self) -> f64 {
        #[allow(clippy::let_unit_value)]
        let () = Self::NON_EMPTY;
        self.0[1..].iter().fold(self.0[0], |sum, value| sum + value)
    }

    /// Computes the dot product between `self` and `other`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use tuple_linalg::*;
    /// let a = vec3(1.0, 3.0, -5.0);
    /// let b = vec3(4.0, -2.0, -1.0);
    /// assert_eq!(a.dot(b), 3.0);
    /// ```
    pub fn dot<'a>(&self, other: impl Into<VectorSource<'a, N>>) -> f64 {
        let mut product = *self;
        product.multiply(other).sum()
    }

    /// Returns the Euclidean distance between `self` and `other`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use tuple_linalg::*;
    /// assert_eq!(vec2(1.0, 1.0).distance(vec2(4.0, 5.0)), 5.0);
    /// ```
    pub fn distance<'a>(&self, other: impl Into<VectorSource<'a, N>>) -> f64 {
        let mut difference = *self;
        difference.subtract(other);
        let copy = difference;
        difference.multiply(copy).sum().sqrt()
    }

    /// Returns the magnitude (Euclidean length) of this vector.
    ///
    /// # Examples
    ///
    /// ```
    /// # use tuple_linalg::*;
    /// assert_eq!(vec2(3.0, 4.0).magnitude(), 5.0);
    /// ```
    pub fn magnitude(&self) -> f64 {
        let mut origin = *self;
        origin.set(0.0);
        self.distance(origin)
    }
}

impl Vector<2> {
    /// Appends another component, yielding a 3-dimensional vector.
    ///
    /// # Examples
    ///
    /// ```
    /// # use tuple_linalg::*;
    /// assert_eq!(vec2(-1.0, 2.0).extend(5.0), vec3(-1.0, 2.0, 5.0));
    /// ```
    pub fn extend(self, value: f64) -> Vector<3> {
        let [x, y] = self.0;
        vec3(x, y, value)
    }
}

impl Vector<3> {
    /// Removes the last component, yielding a 2-dimensional vector.
    pub fn truncate(self) -> Vector<2> {
        let [x, y, _] = self.0;
        vec2(x, y)
    }

    /// Appends another component, yielding a 4-dimensional vector.
    ///
    /// This is mostly useful to turn a point into homogeneous coordinates (with a `w` of 1) before
    /// transforming it with a [`Matrix4`][crate::Matrix4].
    pub fn extend(self, value: f64) -> Vector<4> {
        let [x, y, z] = self.0;
        vec4(x, y, z, value)
    }

    /// Replaces `self` with the cross product of `self` and `other`.
    ///
    /// The result is perpendicular to both inputs. Swapping the arguments inverts its direction.
    ///
    /// # Examples
    ///
    /// ```
    /// # use tuple_linalg::*;
    /// let mut x = vec3(1.0, 0.0, 0.0);
    /// x.cross(vec3(0.0, 1.0, 0.0));
    /// assert_eq!(x, vec3(0.0, 0.0, 1.0));
    /// ```
    pub fn cross<'a>(&mut self, other: impl Into<VectorSource<'a, 3>>) -> &mut Self {
        let [a1, a2, a3] = self.0;
        let [b1, b2, b3] = other.into().tuple();

        #[rustfmt::skip]
        let cross = [
            a2 * b3 - a3 * b2,
            a3 * b1 - a1 * b3,
            a1 * b2 - a2 * b1,
        ];
        self.set(cross)
    }
}

impl Vector<4> {
    /// Removes the last component, yielding a 3-dimensional vector.
    pub fn truncate(self) -> Vector<3> {
        let [x, y, z, _] = self.0;
        vec3(x, y, z)
    }
}

impl<const N: usize> Default for Vector<N> {
    #[inline]
    fn default() -> Self {
        Self::ZERO
    }
}

impl<const N: usize> From<[f64; N]> for Vector<N> {
    #[inline]
    fn from(value: [f64; N]) -> Self {
        Self::new(value)
    }
}

impl<const N: usize> From<Vector<N>> for [f64; N] {
    #[inline]
    fn from(value: Vector<N>) -> Self {
        value.0
    }
}

impl<const N: usize> AsRef<[f64]> for Vector<N> {
    #[inline]
    fn as_ref(&self) -> &[f64] {
        &self.0
    }
}

impl<const N: usize> AsMut<[f64]> for Vector<N> {
    #[inline]
    fn as_mut(&mut self) -> &mut [f64] {
        &mut self.0
    }
}

impl<const N: usize> fmt::Debug for Vector<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut tup = f.debug_tuple("");
        for elem in &self.0 {
            tup.field(elem);
        }
        tup.finish()
    }
}

/// Formats the vector as `[ x, y, ... ]`.
///
/// A precision (`{:.2}`) is applied to every component. Without one, components use their
/// shortest representation, infinities are spelled `Infinity` and `-Infinity`, and negative zero
/// prints as `0`.
impl<const N: usize> fmt::Display for Vector<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let components = match f.precision() {
            Some(precision) => self
                .0
                .iter()
                .map(|c| format!("{:.*}", precision, c))
                .join(", "),
            None => self.0.iter().map(|&c| Shortest(c)).join(", "),
        };
        write!(f, "[ {} ]", components)
    }
}

struct Shortest(f64);

impl fmt::Display for Shortest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            c if c == f64::INFINITY => f.write_str("Infinity"),
            c if c == f64::NEG_INFINITY => f.write_str("-Infinity"),
            c if c == 0.0 => f.write_str("0"),
            c => write!(f, "{}", c),
        }
    }
}

/// Constructs a [`Vector2`] from its two components.
#[inline]
pub const fn vec2(x: f64, y: f64) -> Vector2 {
    Vector::new([x, y])
}

/// Constructs a [`Vector3`] from its three components.
#[inline]
pub const fn vec3(x: f64, y: f64, z: f64) -> Vector3 {
    Vector::new([x, y, z])
}

/// Constructs a [`Vector4`] from its four components.
#[inline]
pub const fn vec4(x: f64, y: f64, z: f64, w: f64) -> Vector4 {
    Vector::new([x, y, z, w])
}
