// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! Alignment types

/// Alignment of content on one axis
///
/// Alignment is container-wide: every row is aligned the same way. There is
/// deliberately no end alignment variant; hosts requesting it should treat
/// that as unsupported rather than expect a silent fallback.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Align {
    /// Align content to the start (left / top)
    #[default]
    Start,
    /// Center content, splitting slack equally
    ///
    /// Slack is divided with truncating integer division: when it is odd,
    /// the start edge receives the smaller half.
    Center,
}

/// Alignment on both axes
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct AlignPair {
    pub horiz: Align,
    pub vert: Align,
}

impl AlignPair {
    /// Start on both axes
    pub const START: AlignPair = AlignPair::new(Align::Start, Align::Start);

    /// Center on both axes
    pub const CENTER: AlignPair = AlignPair::new(Align::Center, Align::Center);

    /// Construct with horiz. and vert. alignment
    pub const fn new(horiz: Align, vert: Align) -> Self {
        Self { horiz, vert }
    }
}

impl From<(Align, Align)> for AlignPair {
    #[inline]
    fn from(p: (Align, Align)) -> Self {
        AlignPair::new(p.0, p.1)
    }
}

impl From<AlignPair> for (Align, Align) {
    #[inline]
    fn from(p: AlignPair) -> Self {
        (p.horiz, p.vert)
    }
}
