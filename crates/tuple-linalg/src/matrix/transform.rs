//! 3D transform and projection builders for [`Matrix4`].
//!
//! All matrices produced here transform column vectors: `m.multiply_vector(v)` applies the
//! transform to `v`, with the translation in the last column.

use std::f64::consts::PI;

use crate::{mat4, Matrix4};

impl Matrix4 {
    /// Creates a translation matrix moving points by `(x, y, z)`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use tuple_linalg::*;
    /// let m = Matrix4::translate(1.0, 2.0, 3.0);
    /// assert_eq!(m * vec4(1.0, 1.0, 1.0, 1.0), vec4(2.0, 3.0, 4.0, 1.0));
    /// // Directions (`w = 0`) are not affected.
    /// assert_eq!(m * vec4(1.0, 1.0, 1.0, 0.0), vec4(1.0, 1.0, 1.0, 0.0));
    /// ```
    #[rustfmt::skip]
    pub fn translate(x: f64, y: f64, z: f64) -> Self {
        log::trace!("translate({}, {}, {})", x, y, z);
        mat4(
            1.0, 0.0, 0.0, x,
            0.0, 1.0, 0.0, y,
            0.0, 0.0, 1.0, z,
            0.0, 0.0, 0.0, 1.0,
        )
    }

    /// Creates a matrix scaling along each axis by `(x, y, z)`.
    #[rustfmt::skip]
    pub fn scale(x: f64, y: f64, z: f64) -> Self {
        log::trace!("scale({}, {}, {})", x, y, z);
        mat4(
              x, 0.0, 0.0, 0.0,
            0.0,   y, 0.0, 0.0,
            0.0, 0.0,   z, 0.0,
            0.0, 0.0, 0.0, 1.0,
        )
    }

    /// Creates a matrix rotating by `degrees` around the axis `(x, y, z)`.
    ///
    /// Positive angles rotate counter-clockwise when looking down the axis towards the origin.
    ///
    /// The axis is used as given and should have unit length. A longer axis also scales the
    /// rotated points.
    ///
    /// # Examples
    ///
    /// ```
    /// # use tuple_linalg::*;
    /// let m = Matrix4::rotate(90.0, 0.0, 0.0, 1.0);
    /// let v = m * vec4(1.0, 0.0, 0.0, 1.0);
    /// assert!((v.x - 0.0).abs() < 1e-12);
    /// assert!((v.y - 1.0).abs() < 1e-12);
    /// ```
    #[rustfmt::skip]
    pub fn rotate(degrees: f64, x: f64, y: f64, z: f64) -> Self {
        log::trace!("rotate({}°, axis=({}, {}, {}))", degrees, x, y, z);

        let radians = degrees * PI / 180.0;
        let (s, c) = radians.sin_cos();
        let t = 1.0 - c;

        let (tx, ty, tz) = (t * x, t * y, t * z);
        let (txy, txz, tyz) = (tx * y, tx * z, ty * z);
        let (sx, sy, sz) = (s * x, s * y, s * z);

        mat4(
            tx * x + c, txy - sz,   txz + sy,   0.0,
            txy + sz,   ty * y + c, tyz - sx,   0.0,
            txz - sy,   tyz + sx,   tz * z + c, 0.0,
            0.0,        0.0,        0.0,        1.0,
        )
    }

    /// Creates an orthographic projection mapping the given box to the `[-1, 1]` cube.
    ///
    /// The view looks down the negative Z axis, so `near` and `far` are distances in front of the
    /// viewer and the `z` axis is flipped by the projection.
    ///
    /// # Examples
    ///
    /// ```
    /// # use tuple_linalg::*;
    /// let m = Matrix4::orthographic(0.0, 512.0, 0.0, 256.0, -1.0, 1.0);
    /// assert_eq!(m * vec4(0.0, 0.0, 0.0, 1.0), vec4(-1.0, -1.0, 0.0, 1.0));
    /// assert_eq!(m * vec4(512.0, 256.0, 0.0, 1.0), vec4(1.0, 1.0, 0.0, 1.0));
    /// ```
    #[rustfmt::skip]
    pub fn orthographic(left: f64, right: f64, bottom: f64, top: f64, near: f64, far: f64) -> Self {
        log::trace!(
            "orthographic(l={}, r={}, b={}, t={}, n={}, f={})",
            left, right, bottom, top, near, far,
        );

        let width = right - left;
        let height = top - bottom;
        let depth = far - near;

        mat4(
            2.0 / width, 0.0,          0.0,          -(right + left) / width,
            0.0,         2.0 / height, 0.0,          -(top + bottom) / height,
            0.0,         0.0,          -2.0 / depth, -(far + near) / depth,
            0.0,         0.0,          0.0,          1.0,
        )
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use crate::{vec4, Matrix4};

    #[test]
    fn translate() {
        let m = Matrix4::translate(1.0, 2.0, 3.0);
        assert_eq!(
            m.multiply_vector(vec4(0.0, 0.0, 0.0, 1.0)),
            vec4(1.0, 2.0, 3.0, 1.0)
        );
        assert_eq!(m[(0, 3)], 1.0);
        assert_eq!(m[(3, 0)], 0.0);
    }

    #[test]
    fn scale() {
        let m = Matrix4::scale(2.0, 3.0, 4.0);
        assert_eq!(
            m.multiply_vector([1.0, 1.0, 1.0, 1.0]),
            vec4(2.0, 3.0, 4.0, 1.0)
        );
    }

    #[test]
    fn rotate() {
        assert_eq!(Matrix4::rotate(0.0, 0.0, 0.0, 1.0), Matrix4::IDENTITY);
        assert_eq!(Matrix4::rotate(0.0, 1.0, 0.0, 0.0), Matrix4::IDENTITY);

        let v = Matrix4::rotate(90.0, 0.0, 0.0, 1.0) * vec4(1.0, 0.0, 0.0, 1.0);
        assert_relative_eq!(v, vec4(0.0, 1.0, 0.0, 1.0), epsilon = 1e-12);

        let v = Matrix4::rotate(90.0, 1.0, 0.0, 0.0) * vec4(0.0, 1.0, 0.0, 1.0);
        assert_relative_eq!(v, vec4(0.0, 0.0, 1.0, 1.0), epsilon = 1e-12);

        let v = Matrix4::rotate(180.0, 0.0, 1.0, 0.0) * vec4(1.0, 0.0, 0.0, 1.0);
        assert_relative_eq!(v, vec4(-1.0, 0.0, 0.0, 1.0), epsilon = 1e-12);
    }

    #[test]
    fn compose() {
        // Scale first, then translate.
        let mut m = Matrix4::translate(10.0, 0.0, 0.0);
        m.multiply(Matrix4::scale(2.0, 2.0, 2.0));
        assert_eq!(m * vec4(1.0, 1.0, 1.0, 1.0), vec4(12.0, 2.0, 2.0, 1.0));
    }

    #[test]
    fn orthographic() {
        let m = Matrix4::orthographic(-2.0, 2.0, -1.0, 1.0, 1.0, 3.0);
        assert_eq!(m[(0, 0)], 0.5);
        assert_eq!(m[(1, 1)], 1.0);
        assert_eq!(m[(2, 2)], -1.0);
        assert_eq!(m[(2, 3)], -2.0);
        assert_eq!(m[(3, 3)], 1.0);
        assert_eq!(m * vec4(0.0, 0.0, -1.0, 1.0), vec4(0.0, 0.0, -1.0, 1.0));
        assert_eq!(m * vec4(0.0, 0.0, -3.0, 1.0), vec4(0.0, 0.0, 1.0, 1.0));
    }
}
