// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! Geometry data types
//!
//! [`Coord`] and [`Size`] are 2D integer (`i32`) types, representing
//! positions and sizes respectively.
//!
//! Conversions mostly use [`Cast`] and [`Conv`]. [`From`] may be used to
//! simply pack/unpack components.

use crate::cast::*;

macro_rules! impl_common {
    ($T:ty) => {
        impl $T {
            /// The constant `(0, 0)`
            pub const ZERO: Self = Self(0, 0);
        }

        impl From<(i32, i32)> for $T {
            #[inline]
            fn from(v: (i32, i32)) -> Self {
                Self(v.0, v.1)
            }
        }
        impl From<$T> for (i32, i32) {
            #[inline]
            fn from(v: $T) -> Self {
                (v.0, v.1)
            }
        }
        impl Conv<(i32, i32)> for $T {
            #[inline]
            fn conv(v: (i32, i32)) -> Self {
                Self(v.0, v.1)
            }
            #[inline]
            fn try_conv(v: (i32, i32)) -> Result<Self> {
                Ok(Self::conv(v))
            }
        }
    };
}

/// A 2D coordinate, also known as a point
///
/// A coordinate is an absolute position, here always the top-left corner of
/// a container or child rect.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
pub struct Coord(pub i32, pub i32);

impl_common!(Coord);

impl Coord {
    /// Construct
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self(x, y)
    }
}

impl std::ops::Add<Size> for Coord {
    type Output = Self;

    #[inline]
    fn add(self, other: Size) -> Self {
        Coord(self.0 + other.0, self.1 + other.1)
    }
}

/// A 2D size, also known as an extent
///
/// Sizes are not guaranteed non-negative: the flow engine accepts negative
/// spacing and padding as-is, and arithmetic on these may pass through here.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
pub struct Size(pub i32, pub i32);

impl_common!(Size);

impl Size {
    /// Construct
    #[inline]
    pub const fn new(w: i32, h: i32) -> Self {
        Self(w, h)
    }
}

/// An axis-aligned rectangular region
///
/// The region is defined by a top-left `pos` and a `size`; the bottom-right
/// corner (exclusive) is [`Rect::pos2`].
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
pub struct Rect {
    pub pos: Coord,
    pub size: Size,
}

impl Rect {
    /// Construct from a position and size
    #[inline]
    pub const fn new(pos: Coord, size: Size) -> Self {
        Rect { pos, size }
    }

    /// Get the second point (pos + size)
    #[inline]
    pub fn pos2(&self) -> Coord {
        self.pos + self.size
    }

    /// Check whether the given coordinate is contained in this rect
    #[inline]
    pub fn contains(&self, c: Coord) -> bool {
        let p2 = self.pos2();
        c.0 >= self.pos.0 && c.0 < p2.0 && c.1 >= self.pos.1 && c.1 < p2.1
    }
}
