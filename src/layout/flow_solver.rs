// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! Flow solver: the measurement pass

use log::trace;
use smallvec::SmallVec;

use super::{derive_child_constraint, Constraint, Margins, SizeMode, Spacing};
use crate::geom::Size;
use crate::Element;

/// A measured member of a [`Row`]
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct RowItem {
    /// Index into the child slice passed to [`FlowSolver::solve`]
    pub index: usize,
    /// The child's measured size
    pub size: Size,
}

/// One row of the flow
///
/// Members appear in the order in which they overflowed into the row, which
/// matches child traversal order. Rows are rebuilt from scratch on every
/// measurement pass; no row identity persists across passes.
#[derive(Clone, Debug, Default)]
pub struct Row {
    items: SmallVec<[RowItem; 8]>,
    height: i32,
}

impl Row {
    /// The row's members, in traversal order
    #[inline]
    pub fn items(&self) -> &[RowItem] {
        &self.items
    }

    /// The row height: the maximum measured height of members
    #[inline]
    pub fn height(&self) -> i32 {
        self.height
    }

    /// Sum of member widths, excluding spacing
    pub fn content_width(&self) -> i32 {
        self.items.iter().map(|item| item.size.0).sum()
    }
}

/// Result of a measurement pass
///
/// An immutable value: the arrangement pass reads it, and the next
/// measurement pass replaces it wholesale. Measured child sizes are cached
/// in the rows so that arrangement never re-measures.
#[derive(Clone, Debug, Default)]
pub struct FlowSolution {
    rows: Vec<Row>,
    content: Size,
    resolved: Size,
}

impl FlowSolution {
    /// The rows, in top-to-bottom order
    #[inline]
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// The size the wrapped content requires
    ///
    /// Bookkeeping reserves one trailing gap per axis beyond the strict
    /// member extents; see [`FlowSolver::solve`].
    #[inline]
    pub fn content_size(&self) -> Size {
        self.content
    }

    /// The container's resolved size
    ///
    /// Per axis this is the constraint value under [`SizeMode::Exact`],
    /// else the content size (width additionally clamped to the constraint
    /// value, since width bounds wrapping).
    #[inline]
    pub fn resolved_size(&self) -> Size {
        self.resolved
    }
}

/// The measurement half of the flow engine
///
/// [`FlowSolver::solve`] walks visible children in order, packing each row
/// greedily until the next child would overflow the container width, then
/// wrapping. The wrap decision uses strict comparison: a child fitting
/// exactly flush against the boundary stays in its row.
pub struct FlowSolver;

impl FlowSolver {
    /// Measure `children` under the given constraints
    ///
    /// Each visible child is measured once, under constraints derived from
    /// the container's via [`derive_child_constraint`]. A child wider than
    /// the available width is never rejected: it is placed alone in its own
    /// row and may overflow the resolved width.
    ///
    /// Content size accounting mirrors the row arithmetic: a row's recorded
    /// width is the sum of `member width + horizontal gap` over members
    /// plus one closing gap, and each row contributes
    /// `height + vertical gap` to the content height.
    pub fn solve<E: Element>(
        width: Constraint,
        height: Constraint,
        spacing: Spacing,
        padding: Margins,
        children: &mut [E],
    ) -> FlowSolution {
        fn close_row(
            items: &mut SmallVec<[RowItem; 8]>,
            rows: &mut Vec<Row>,
            content: &mut Size,
            spacing: Spacing,
            running_width: i32,
            running_height: i32,
        ) {
            content.1 += running_height + spacing.vert;
            content.0 = content.0.max(running_width + spacing.horiz);
            rows.push(Row {
                items: std::mem::take(items),
                height: running_height,
            });
        }

        let mut rows = Vec::new();
        let mut items: SmallVec<[RowItem; 8]> = SmallVec::new();
        let mut running_width = 0;
        let mut running_height = 0;
        let mut content = Size::ZERO;

        for (index, child) in children.iter_mut().enumerate() {
            if !child.is_visible() {
                continue;
            }

            let (hint_w, hint_h) = child.hints();
            let wc = derive_child_constraint(width, padding.sum_horiz(), hint_w);
            let hc = derive_child_constraint(height, padding.sum_vert(), hint_h);
            let size = child.measure(wc, hc);

            // Wrap decision: strictly greater, so an exact flush fit stays.
            if !items.is_empty() && running_width + size.0 + spacing.horiz > width.value() {
                close_row(
                    &mut items,
                    &mut rows,
                    &mut content,
                    spacing,
                    running_width,
                    running_height,
                );
                running_width = 0;
                running_height = 0;
            }

            items.push(RowItem { index, size });
            running_width += size.0 + spacing.horiz;
            running_height = running_height.max(size.1);
        }

        if !items.is_empty() {
            close_row(
                &mut items,
                &mut rows,
                &mut content,
                spacing,
                running_width,
                running_height,
            );
        }

        let resolved = Size(
            match width.mode() {
                SizeMode::Exact => width.value(),
                SizeMode::Content => content.0.min(width.value()),
            },
            height.resolve(content.1),
        );

        trace!(
            "FlowSolver::solve: rows={}, content={:?}, resolved={:?}",
            rows.len(),
            content,
            resolved
        );
        FlowSolution {
            rows,
            content,
            resolved,
        }
    }
}
