// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! Layout solver
//!
//! Size units are physical (real) pixels.
//!
//! ## Data types
//!
//! [`Constraint`] conveys the container's per-axis sizing input;
//! [`derive_child_constraint`] combines it with a child's
//! [`SizeHint`](crate::SizeHint) to produce the child's own measurement
//! constraint. [`Align`], [`Margins`] and [`Spacing`] are auxiliary types.
//!
//! ## Layout engines
//!
//! -   [`FlowSolver`] is the measurement half: it distributes visible
//!     children into wrapping rows and computes the container's required
//!     and resolved sizes, returned as a [`FlowSolution`].
//! -   [`FlowSetter`] is the arrangement half: it assigns child rects from
//!     a solution, applying per-axis alignment.
//!
//! Most hosts use both halves through
//! [`FlowLayout`](crate::FlowLayout) rather than driving them directly.

mod align;
mod constraint;
mod flow_setter;
mod flow_solver;
mod margins;

pub use align::{Align, AlignPair};
pub use constraint::{derive_child_constraint, Constraint, SizeMode};
pub use flow_setter::FlowSetter;
pub use flow_solver::{FlowSolution, FlowSolver, Row, RowItem};
pub use margins::{Margins, Spacing};
