//! Approximate equality via the [`approx`] crate.
//!
//! Vectors and matrices compare equal if every pair of matching components does.
//!
//! ```
//! # use tuple_linalg::*;
//! use approx::assert_relative_eq;
//!
//! let mut v = vec3(1.0, 2.0, 2.0);
//! v.normalize();
//! assert_relative_eq!(v, vec3(1.0 / 3.0, 2.0 / 3.0, 2.0 / 3.0));
//! ```

use approx::{AbsDiffEq, RelativeEq, UlpsEq};

use crate::{Matrix, Vector};

macro_rules! impl_approx {
    ($ty:ident, $as_slice:ident) => {
        impl<const N: usize> AbsDiffEq for $ty<N> {
            type Epsilon = f64;

            fn default_epsilon() -> Self::Epsilon {
                f64::default_epsilon()
            }

            fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
                self.$as_slice()
                    .iter()
                    .zip(other.$as_slice())
                    .all(|(a, b)| a.abs_diff_eq(b, epsilon))
            }
        }

        impl<const N: usize> RelativeEq for $ty<N> {
            fn default_max_relative() -> Self::Epsilon {
                f64::default_max_relative()
            }

            fn relative_eq(
                &self,
                other: &Self,
                epsilon: Self::Epsilon,
                max_relative: Self::Epsilon,
            ) -> bool {
                self.$as_slice()
                    .iter()
                    .zip(other.$as_slice())
                    .all(|(a, b)| a.relative_eq(b, epsilon, max_relative))
            }
        }

        impl<const N: usize> UlpsEq for $ty<N> {
            fn default_max_ulps() -> u32 {
                f64::default_max_ulps()
            }

            fn ulps_eq(&self, other: &Self, epsilon: Self::Epsilon, max_ulps: u32) -> bool {
                self.$as_slice()
                    .iter()
                    .zip(other.$as_slice())
                    .all(|(a, b)| a.ulps_eq(b, epsilon, max_ulps))
            }
        }
    };
}

impl_approx!(Vector, components);
impl_approx!(Matrix, as_flat);
