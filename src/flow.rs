// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! The flow layout engine

use log::error;

use crate::geom::{Coord, Size};
use crate::layout::{
    Align, AlignPair, Constraint, FlowSetter, FlowSolution, FlowSolver, Margins, Spacing,
};
use crate::Element;

/// A wrapping-row layout engine
///
/// This owns the layout configuration (spacing, padding, alignment) and the
/// solution of the most recent measurement pass. The host drives it in
/// strict sequence: [`FlowLayout::measure`] whenever constraints or the
/// child set change, then [`FlowLayout::arrange`] to position children.
///
/// Every measurement pass rebuilds the solution from scratch; a host which
/// measures more than once per frame (as some parents do) simply replaces
/// the previous solution, so state never accumulates across passes.
///
/// All values are physical pixels; unit conversion (e.g. from
/// density-independent units) is the host's concern.
#[derive(Debug, Default)]
pub struct FlowLayout {
    spacing: Spacing,
    padding: Margins,
    align: AlignPair,
    solution: Option<FlowSolution>,
}

impl FlowLayout {
    /// Construct with zero spacing and padding, start alignment
    pub fn new() -> Self {
        FlowLayout::default()
    }

    /// The gap between members of a row
    pub fn horizontal_spacing(&self) -> i32 {
        self.spacing.horiz
    }

    /// Set the gap between members of a row
    pub fn set_horizontal_spacing(&mut self, spacing: i32) -> &mut Self {
        self.spacing.horiz = spacing;
        self
    }

    /// The gap between rows
    pub fn vertical_spacing(&self) -> i32 {
        self.spacing.vert
    }

    /// Set the gap between rows
    pub fn set_vertical_spacing(&mut self, spacing: i32) -> &mut Self {
        self.spacing.vert = spacing;
        self
    }

    /// Set horizontal alignment of row content
    pub fn set_horizontal_align(&mut self, align: Align) -> &mut Self {
        self.align.horiz = align;
        self
    }

    /// Set vertical alignment of the block of rows
    pub fn set_vertical_align(&mut self, align: Align) -> &mut Self {
        self.align.vert = align;
        self
    }

    /// Set container padding
    pub fn set_padding(&mut self, padding: Margins) -> &mut Self {
        self.padding = padding;
        self
    }

    /// Run the measurement pass
    ///
    /// Distributes visible `children` into rows under the given constraints
    /// and returns the container's resolved size. The solution is retained
    /// for [`FlowLayout::arrange`]; any previous solution is discarded.
    pub fn measure<E: Element>(
        &mut self,
        width: Constraint,
        height: Constraint,
        children: &mut [E],
    ) -> Size {
        let solution = FlowSolver::solve(width, height, self.spacing, self.padding, children);
        let resolved = solution.resolved_size();
        self.solution = Some(solution);
        resolved
    }

    /// Run the arrangement pass
    ///
    /// Assigns every visible child's rect from the most recent
    /// [`FlowLayout::measure`] solution, with the container's top-left
    /// corner at `pos`. Calling this without a prior measurement is a
    /// contract violation: it debug-panics, and in release builds logs an
    /// error and leaves children unpositioned.
    pub fn arrange<E: Element>(&self, pos: Coord, children: &mut [E]) {
        let Some(solution) = self.solution.as_ref() else {
            debug_assert!(false, "FlowLayout::arrange called before measure");
            error!("FlowLayout::arrange: no solution; measure was not called");
            return;
        };
        FlowSetter::set_rects(solution, pos, self.padding, self.spacing, self.align, children);
    }

    /// The solution of the most recent measurement pass, if any
    pub fn solution(&self) -> Option<&FlowSolution> {
        self.solution.as_ref()
    }
}
