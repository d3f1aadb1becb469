// Copyright 2026 the Sapwood Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Stepping through a bounded index space.
//!
//! Carousel-style widgets hold a position in `0..len` rather than a keyed
//! selection. [`step`] captures their movement rules in one place: move one
//! slot, stop at the edges, or wrap around when the widget loops.

/// Direction for [`step`].
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum StepDirection {
    /// Toward higher indices.
    Next,
    /// Toward lower indices.
    Prev,
}

/// The index reached by moving one slot from `current`, or `None` when the
/// move is impossible.
///
/// `len` is the number of slots; callers keep `current` within `0..len`.
/// With `wrap` the ends join up; without it, stepping past either end is a
/// no-op. A `current` of `None` (nothing focused yet) enters at the nearest
/// end: slot `0` going next, `len - 1` going prev.
pub fn step(
    len: usize,
    current: Option<usize>,
    direction: StepDirection,
    wrap: bool,
) -> Option<usize> {
    if len == 0 {
        return None;
    }
    let last = len - 1;
    match (direction, current) {
        (StepDirection::Next, None) => Some(0),
        (StepDirection::Prev, None) => Some(last),
        (StepDirection::Next, Some(i)) if i < last => Some(i + 1),
        (StepDirection::Next, Some(_)) if wrap => Some(0),
        (StepDirection::Prev, Some(i)) if i > 0 => Some(i - 1),
        (StepDirection::Prev, Some(_)) if wrap => Some(last),
        _ => None,
    }
}

/// Whether [`step`] would move from `current` in `direction`.
pub fn can_step(len: usize, current: Option<usize>, direction: StepDirection, wrap: bool) -> bool {
    step(len, current, direction, wrap).is_some()
}
