// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! Margin and spacing types

/// Container padding
///
/// Padding is internal to the container: it offsets row content and reduces
/// the space offered to children. Negative values are accepted as-is; their
/// effect falls out of the arithmetic.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Margins {
    /// Size of left/right margin
    pub horiz: (i32, i32),
    /// Size of top/bottom margin
    pub vert: (i32, i32),
}

impl Margins {
    /// Zero-sized margins
    pub const ZERO: Margins = Margins::splat(0);

    /// Margins with equal size on each edge
    #[inline]
    pub const fn splat(size: i32) -> Self {
        Margins::hv_splat(size, size)
    }

    /// Margins via horizontal and vertical pairs
    #[inline]
    pub const fn hv(horiz: (i32, i32), vert: (i32, i32)) -> Self {
        Margins { horiz, vert }
    }

    /// Margins via horizontal and vertical sizes
    #[inline]
    pub const fn hv_splat(h: i32, v: i32) -> Self {
        Margins {
            horiz: (h, h),
            vert: (v, v),
        }
    }

    /// Sum of horizontal margins
    #[inline]
    pub fn sum_horiz(&self) -> i32 {
        self.horiz.0 + self.horiz.1
    }

    /// Sum of vertical margins
    #[inline]
    pub fn sum_vert(&self) -> i32 {
        self.vert.0 + self.vert.1
    }
}

/// Inter-item spacing
///
/// `horiz` separates members of the same row; `vert` separates rows.
/// Spacing is applied between items only, not before the first or after
/// the last, though the content size bookkeeping reserves one trailing gap
/// per axis (see [`FlowSolver`](super::FlowSolver)).
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Spacing {
    pub horiz: i32,
    pub vert: i32,
}

impl Spacing {
    /// No spacing
    pub const ZERO: Spacing = Spacing::new(0, 0);

    /// Construct from horizontal and vertical gaps
    #[inline]
    pub const fn new(horiz: i32, vert: i32) -> Self {
        Spacing { horiz, vert }
    }
}
