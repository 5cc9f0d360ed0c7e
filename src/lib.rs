// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! Flow layout: a two-pass wrapping-row layout engine
//!
//! This library arranges a sequence of opaque rectangular children into
//! left-to-right, top-to-bottom wrapping rows within a width-constrained
//! container, much like inline text. It is a pure computation library: no
//! drawing, no event handling, no unit conversion. All sizes are physical
//! (real) pixels.
//!
//! Layout happens in two passes, driven by the host's own layout schedule:
//!
//! 1.  **Measure**: [`FlowLayout::measure`] distributes visible children
//!     into rows and resolves the container's own size. The result is a
//!     [`FlowSolution`] value; nothing persists between passes except this
//!     cached solution.
//! 2.  **Arrange**: [`FlowLayout::arrange`] assigns each child's [`Rect`]
//!     from the most recent solution, honoring horizontal and vertical
//!     [`Align`]ment.
//!
//! Children are anything implementing [`Element`]: a visibility flag, a
//! size preference per axis, a measurement function and a rect assignment.
//!
//! [`Align`]: layout::Align
//! [`Rect`]: geom::Rect

pub extern crate easy_cast as cast;

mod element;
mod flow;

pub mod geom;
pub mod layout;

pub use element::{Element, SizeHint};
pub use flow::FlowLayout;
pub use layout::FlowSolution;
