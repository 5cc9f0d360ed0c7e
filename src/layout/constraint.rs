// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! Sizing constraints

use crate::SizeHint;

/// How a [`Constraint`]'s size value binds
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum SizeMode {
    /// The subject must occupy exactly the given size
    Exact,
    /// The subject shrinks to its content, up to the given size
    ///
    /// On the width axis the value also bounds row wrapping, so the
    /// resolved width never exceeds it. Height is content-driven: rows are
    /// never truncated to fit a height budget.
    Content,
}

/// A sizing constraint on one axis
///
/// The host supplies one per axis when measuring the container; the engine
/// derives each child's own constraints from them via
/// [`derive_child_constraint`]. Values are assumed to be well-formed
/// non-negative pixel counts; the engine performs no validation.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Constraint {
    value: i32,
    mode: SizeMode,
}

impl Constraint {
    /// An exact size
    #[inline]
    pub const fn exact(value: i32) -> Self {
        Constraint {
            value,
            mode: SizeMode::Exact,
        }
    }

    /// A content-driven size, at most `value`
    #[inline]
    pub const fn content(value: i32) -> Self {
        Constraint {
            value,
            mode: SizeMode::Content,
        }
    }

    /// The size value (exact size or upper bound, depending on mode)
    #[inline]
    pub fn value(self) -> i32 {
        self.value
    }

    /// The constraint mode
    #[inline]
    pub fn mode(self) -> SizeMode {
        self.mode
    }

    /// Resolve a final size given the computed content size
    ///
    /// [`SizeMode::Exact`] yields the constraint value regardless of
    /// content; [`SizeMode::Content`] yields the content size.
    #[inline]
    pub fn resolve(self, content: i32) -> i32 {
        match self.mode {
            SizeMode::Exact => self.value,
            SizeMode::Content => content,
        }
    }
}

/// Derive a child's measurement constraint on one axis
///
/// Standard nested-constraint derivation: the space offered to the child is
/// the parent's constraint value less the parent's padding on this axis
/// (clamped to zero), and the resulting mode depends on both the parent's
/// mode and the child's [`SizeHint`]. A fixed-size child always measures
/// under an exact constraint of its own size; a content-sized child under
/// an at-most constraint of the offered space; a filling child takes the
/// offered space, exactly so only if the parent's own size is exact.
pub fn derive_child_constraint(
    parent: Constraint,
    parent_padding_sum: i32,
    hint: SizeHint,
) -> Constraint {
    let avail = (parent.value() - parent_padding_sum).max(0);
    match (hint, parent.mode()) {
        (SizeHint::Fixed(size), _) => Constraint::exact(size),
        (SizeHint::Fill, SizeMode::Exact) => Constraint::exact(avail),
        (SizeHint::Fill, SizeMode::Content) => Constraint::content(avail),
        (SizeHint::Content, _) => Constraint::content(avail),
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn resolve() {
        assert_eq!(Constraint::exact(300).resolve(120), 300);
        assert_eq!(Constraint::content(300).resolve(120), 120);
    }

    #[test]
    fn derivation() {
        let exact = Constraint::exact(200);
        let content = Constraint::content(200);

        assert_eq!(
            derive_child_constraint(exact, 20, SizeHint::Fixed(50)),
            Constraint::exact(50)
        );
        assert_eq!(
            derive_child_constraint(exact, 20, SizeHint::Fill),
            Constraint::exact(180)
        );
        assert_eq!(
            derive_child_constraint(exact, 20, SizeHint::Content),
            Constraint::content(180)
        );
        assert_eq!(
            derive_child_constraint(content, 20, SizeHint::Fill),
            Constraint::content(180)
        );
        assert_eq!(
            derive_child_constraint(content, 20, SizeHint::Content),
            Constraint::content(180)
        );
    }

    #[test]
    fn derivation_clamps_available_space() {
        let parent = Constraint::exact(10);
        assert_eq!(
            derive_child_constraint(parent, 30, SizeHint::Fill),
            Constraint::exact(0)
        );
    }
}
