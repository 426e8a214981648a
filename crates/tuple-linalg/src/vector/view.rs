//! Named component access for 2, 3 and 4-dimensional vectors.
//!
//! Each vector dereferences to a `#[repr(C)]` struct with one field per component, which in turn
//! dereferences to a struct naming the same memory differently (`width`, `height`, `depth`).

use std::{
    mem,
    ops::{Deref, DerefMut},
};

use crate::Vector;

// Coordinates:

#[repr(C)]
pub struct XY {
    pub x: f64,
    pub y: f64,
    _priv: (), // prevent external construction
}

#[repr(C)]
pub struct XYZ {
    pub x: f64,
    pub y: f64,
    pub z: f64,
    _priv: (), // prevent external construction
}

#[repr(C)]
pub struct XYZW {
    pub x: f64,
    pub y: f64,
    pub z: f64,
    pub w: f64,
    _priv: (), // prevent external construction
}

// Sizes:

#[repr(C)]
pub struct WH {
    pub width: f64,
    pub height: f64,
    _priv: (), // prevent external construction
}

#[repr(C)]
pub struct WHD {
    pub width: f64,
    pub height: f64,
    pub depth: f64,
    _priv: (), // prevent external construction
}

/// A 4-dimensional vector viewed as a rectangle: position in `x`/`y`, size in `z`/`w`.
#[repr(C)]
pub struct XYWH {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    _priv: (), // prevent external construction
}

macro_rules! view {
    ($from:ty => $to:ty) => {
        impl Deref for $from {
            type Target = $to;

            #[inline]
            fn deref(&self) -> &Self::Target {
                unsafe { mem::transmute(self) }
            }
        }

        impl DerefMut for $from {
            #[inline]
            fn deref_mut(&mut self) -> &mut Self::Target {
                unsafe { mem::transmute(self) }
            }
        }
    };
}

view!(Vector<2> => XY);
view!(Vector<3> => XYZ);
view!(Vector<4> => XYZW);

view!(XY => WH);
view!(XYZ => WHD);
view!(XYZW => XYWH);
