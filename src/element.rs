// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! The container contract: opaque children of a flow container

use crate::geom::{Rect, Size};
use crate::layout::Constraint;

/// A child's declared size preference on one axis
///
/// This is the child's own request, supplied by the host; it is combined
/// with the container's [`Constraint`] via
/// [`derive_child_constraint`](crate::layout::derive_child_constraint)
/// before the child is measured.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum SizeHint {
    /// Occupy exactly the given size (pixels)
    Fixed(i32),
    /// Occupy all space the container offers on this axis
    Fill,
    /// Occupy whatever the child's own content requires
    Content,
}

impl Default for SizeHint {
    fn default() -> Self {
        SizeHint::Content
    }
}

/// An opaque child of a flow container
///
/// The engine sees children only through this trait: it never draws them,
/// never routes events to them, and holds no reference to them between
/// passes (rows store indices into the host's child slice).
///
/// Measurement is a pure query: [`Element::measure`] returns the size the
/// child wants under the given constraints without obliging the engine to
/// read it back from separate state. Children may themselves be containers
/// running their own nested layout; this is expected and safe since each
/// engine instance owns independent state.
pub trait Element {
    /// Whether this element participates in layout
    ///
    /// Invisible elements are skipped entirely: they occupy no space,
    /// belong to no row and are not assigned a rect.
    fn is_visible(&self) -> bool {
        true
    }

    /// The element's declared size preference as `(width, height)`
    fn hints(&self) -> (SizeHint, SizeHint);

    /// Measure the element under the given per-axis constraints
    fn measure(&mut self, width: Constraint, height: Constraint) -> Size;

    /// Assign the element's bounding rect
    fn set_rect(&mut self, rect: Rect);
}

impl<E: Element + ?Sized> Element for Box<E> {
    fn is_visible(&self) -> bool {
        (**self).is_visible()
    }

    fn hints(&self) -> (SizeHint, SizeHint) {
        (**self).hints()
    }

    fn measure(&mut self, width: Constraint, height: Constraint) -> Size {
        (**self).measure(width, height)
    }

    fn set_rect(&mut self, rect: Rect) {
        (**self).set_rect(rect);
    }
}

impl<E: Element + ?Sized> Element for &mut E {
    fn is_visible(&self) -> bool {
        (**self).is_visible()
    }

    fn hints(&self) -> (SizeHint, SizeHint) {
        (**self).hints()
    }

    fn measure(&mut self, width: Constraint, height: Constraint) -> Size {
        (**self).measure(width, height)
    }

    fn set_rect(&mut self, rect: Rect) {
        (**self).set_rect(rect);
    }
}
