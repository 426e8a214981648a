/// Errors reported when an operand or buffer does not fit the shape it is used with.
///
/// All statically-sized operations in this crate are infallible. These errors can only be produced
/// by APIs that accept data whose length is only known at runtime (slices), or by the
/// runtime-dispatched [`AnyVector`] and [`AnyMatrix`] types.
///
/// [`AnyVector`]: crate::toolbox::AnyVector
/// [`AnyMatrix`]: crate::toolbox::AnyMatrix
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// An operand has a different number of elements than the value it is combined with.
    #[error("dimension mismatch: expected {expected} elements, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    /// A flat matrix buffer whose length is not a perfect square.
    #[error("a buffer of {len} cells cannot form a square matrix")]
    NotSquare { len: usize },

    /// Runtime dispatch was asked for a size that has no concrete type (only 2, 3 and 4 do).
    #[error("unsupported dimension {0} (expected 2, 3 or 4)")]
    UnsupportedDimension(usize),

    /// A matrix was multiplied with a vector of a different dimension.
    #[error("cannot transform a {dimension}-dimensional vector by a {size}x{size} matrix")]
    MatrixVectorMismatch { size: usize, dimension: usize },
}
