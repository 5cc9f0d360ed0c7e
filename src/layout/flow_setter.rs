// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! Flow setter: the arrangement pass

use log::{error, trace};

use super::{Align, AlignPair, FlowSolution, Margins, Spacing};
use crate::cast::Cast;
use crate::geom::{Coord, Rect};
use crate::Element;

/// The arrangement half of the flow engine
///
/// Positions every child recorded in a [`FlowSolution`]. All members of a
/// row share the row's top offset; cross-axis alignment within a row is
/// not supported.
pub struct FlowSetter;

impl FlowSetter {
    /// Assign child rects from `solution`
    ///
    /// `pos` is the top-left corner of the container; padding and centering
    /// offsets are applied relative to it. Centering slack uses truncating
    /// integer division, so an odd pixel of slack goes to the bottom/right.
    /// A child wider than the container simply extends past the resolved
    /// right edge.
    ///
    /// Children absent from the solution (invisible at measure time) are
    /// not assigned a rect. Passing a `children` slice shorter than the
    /// one measured is a contract violation: out-of-bounds members
    /// debug-panic, and in release builds are logged and skipped.
    pub fn set_rects<E: Element>(
        solution: &FlowSolution,
        pos: Coord,
        padding: Margins,
        spacing: Spacing,
        align: AlignPair,
        children: &mut [E],
    ) {
        let resolved = solution.resolved_size();
        let rows = solution.rows();

        let mut total_rows_height: i32 = rows.iter().map(|row| row.height()).sum();
        if rows.len() > 1 {
            let gaps: i32 = (rows.len() - 1).cast();
            total_rows_height += gaps * spacing.vert;
        }

        let mut cur_top = pos.1 + padding.vert.0;
        if align.vert == Align::Center {
            let slack = resolved.1 - total_rows_height - padding.sum_vert();
            cur_top += slack / 2;
        }

        trace!(
            "FlowSetter::set_rects: pos={:?}, resolved={:?}, rows_height={}",
            pos,
            resolved,
            total_rows_height
        );

        for row in rows {
            let mut cur_left = pos.0 + padding.horiz.0;
            if align.horiz == Align::Center {
                let mut used = row.content_width();
                if row.items().len() > 1 {
                    let gaps: i32 = (row.items().len() - 1).cast();
                    used += gaps * spacing.horiz;
                }
                let slack = resolved.0 - padding.sum_horiz() - used;
                cur_left += slack / 2;
            }

            for item in row.items() {
                let Some(child) = children.get_mut(item.index) else {
                    debug_assert!(
                        false,
                        "FlowSetter::set_rects: child index {} out of bounds",
                        item.index
                    );
                    error!(
                        "FlowSetter::set_rects: child index {} out of bounds; children changed since measure?",
                        item.index
                    );
                    cur_left += item.size.0 + spacing.horiz;
                    continue;
                };
                child.set_rect(Rect::new(Coord(cur_left, cur_top), item.size));
                cur_left += item.size.0 + spacing.horiz;
            }

            // The next row restarts at the left padding edge regardless of
            // this row's centering offset.
            cur_top += row.height() + spacing.vert;
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::geom::Size;
    use crate::layout::{Constraint, FlowSolver};
    use crate::SizeHint;

    struct Block {
        size: Size,
        rect: Option<Rect>,
    }

    impl Block {
        fn new(w: i32, h: i32) -> Self {
            Block {
                size: Size(w, h),
                rect: None,
            }
        }

        fn rect(&self) -> Rect {
            self.rect.expect("rect assigned")
        }
    }

    impl Element for Block {
        fn hints(&self) -> (SizeHint, SizeHint) {
            (SizeHint::Fixed(self.size.0), SizeHint::Fixed(self.size.1))
        }

        fn measure(&mut self, _: Constraint, _: Constraint) -> Size {
            self.size
        }

        fn set_rect(&mut self, rect: Rect) {
            self.rect = Some(rect);
        }
    }

    fn arrange(
        width: i32,
        height: i32,
        spacing: Spacing,
        padding: Margins,
        align: AlignPair,
        children: &mut [Block],
    ) -> FlowSolution {
        let solution = FlowSolver::solve(
            Constraint::exact(width),
            Constraint::exact(height),
            spacing,
            padding,
            children,
        );
        FlowSetter::set_rects(&solution, Coord::ZERO, padding, spacing, align, children);
        solution
    }

    #[test]
    fn start_aligned_rows() {
        let mut children = [Block::new(100, 20), Block::new(100, 20), Block::new(100, 20)];
        arrange(
            300,
            200,
            Spacing::new(10, 10),
            Margins::ZERO,
            AlignPair::START,
            &mut children,
        );

        assert_eq!(children[0].rect(), Rect::new(Coord(0, 0), Size(100, 20)));
        assert_eq!(children[1].rect(), Rect::new(Coord(110, 0), Size(100, 20)));
        // Third child wrapped; next row top is 20 + 10.
        assert_eq!(children[2].rect(), Rect::new(Coord(0, 30), Size(100, 20)));
    }

    #[test]
    fn vertical_centering_splits_slack() {
        // Two rows of height 50, gap 10: total 110; slack 90, top offset 45.
        let mut children = [Block::new(200, 50), Block::new(200, 50)];
        arrange(
            300,
            200,
            Spacing::new(10, 10),
            Margins::ZERO,
            AlignPair::new(Align::Start, Align::Center),
            &mut children,
        );

        assert_eq!(children[0].rect().pos, Coord(0, 45));
        assert_eq!(children[1].rect().pos, Coord(0, 105));
    }

    #[test]
    fn horizontal_centering_per_row() {
        let mut children = [Block::new(100, 20), Block::new(100, 20), Block::new(60, 20)];
        arrange(
            300,
            100,
            Spacing::new(10, 10),
            Margins::ZERO,
            AlignPair::new(Align::Center, Align::Start),
            &mut children,
        );

        // Row 1 content: 100 + 10 + 100 = 210; slack 90; offset 45.
        assert_eq!(children[0].rect().pos, Coord(45, 0));
        assert_eq!(children[1].rect().pos, Coord(155, 0));
        // Row 2 content: 60; slack 240; offset 120.
        assert_eq!(children[2].rect().pos, Coord(120, 30));
    }

    #[test]
    fn centering_symmetry_within_one_pixel() {
        let mut children = [Block::new(101, 20)];
        arrange(
            300,
            100,
            Spacing::ZERO,
            Margins::ZERO,
            AlignPair::CENTER,
            &mut children,
        );

        let rect = children[0].rect();
        let left_slack = rect.pos.0;
        let right_slack = 300 - rect.pos2().0;
        // Truncation favors the left edge with the smaller remainder.
        assert_eq!(left_slack, 99);
        assert_eq!(right_slack, 100);
        assert!((left_slack - right_slack).abs() <= 1);
    }

    #[test]
    fn centering_slack_accounts_for_padding() {
        // Horizontal: usable width is 300 - 20 = 280; slack 180; the child
        // lands at 10 + 90. Vertical: usable height 180 against one row of
        // 50; slack 130; top is 10 + 65.
        let mut children = [Block::new(100, 50)];
        arrange(
            300,
            200,
            Spacing::ZERO,
            Margins::splat(10),
            AlignPair::CENTER,
            &mut children,
        );

        assert_eq!(children[0].rect().pos, Coord(100, 75));
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic = "out of bounds"]
    fn shortened_child_slice_is_rejected() {
        let mut children = [Block::new(50, 20), Block::new(50, 20)];
        let solution = FlowSolver::solve(
            Constraint::exact(300),
            Constraint::exact(100),
            Spacing::ZERO,
            Margins::ZERO,
            &mut children,
        );

        let mut fewer = [Block::new(50, 20)];
        FlowSetter::set_rects(
            &solution,
            Coord::ZERO,
            Margins::ZERO,
            Spacing::ZERO,
            AlignPair::START,
            &mut fewer,
        );
    }

    #[test]
    fn padding_offsets_rows() {
        let mut children = [Block::new(50, 20), Block::new(50, 20)];
        arrange(
            300,
            100,
            Spacing::new(10, 10),
            Margins::hv((7, 3), (5, 9)),
            AlignPair::START,
            &mut children,
        );

        assert_eq!(children[0].rect().pos, Coord(7, 5));
        assert_eq!(children[1].rect().pos, Coord(67, 5));
    }

    #[test]
    fn oversized_child_overflows_resolved_width() {
        let mut children = [Block::new(400, 20)];
        arrange(
            300,
            100,
            Spacing::ZERO,
            Margins::ZERO,
            AlignPair::START,
            &mut children,
        );

        let rect = children[0].rect();
        assert_eq!(rect.pos, Coord::ZERO);
        // Intentional overflow: the right edge exceeds the container.
        assert_eq!(rect.pos2().0, 400);
    }

    #[test]
    fn container_position_offsets_all_children() {
        let mut children = [Block::new(50, 20)];
        let solution = FlowSolver::solve(
            Constraint::exact(300),
            Constraint::exact(100),
            Spacing::ZERO,
            Margins::ZERO,
            &mut children,
        );
        FlowSetter::set_rects(
            &solution,
            Coord(1000, 2000),
            Margins::ZERO,
            Spacing::ZERO,
            AlignPair::START,
            &mut children,
        );

        assert_eq!(children[0].rect().pos, Coord(1000, 2000));
    }
}
