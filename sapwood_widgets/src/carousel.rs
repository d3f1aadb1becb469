// Copyright 2026 the Sapwood Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Carousel position state.
//!
//! A carousel shows one slide out of `len` and moves by one slot at a
//! time, so its state is an index cursor rather than a keyed selection.
//! [`CarouselState`] wraps the movement rules of
//! [`step`](sapwood_algebra::step): stop at the edges, or wrap around when
//! the carousel loops. Indicator dots jump directly through
//! [`scroll_to`](CarouselState::scroll_to).

use alloc::boxed::Box;
use core::fmt;

use sapwood_algebra::{StepDirection, step};

type SelectFn = Box<dyn FnMut(usize)>;

/// Position state for a carousel of `len` slides.
///
/// The state is always widget-owned; embedders observe moves through
/// [`with_on_select`](Self::with_on_select) rather than mirroring an
/// external value.
pub struct CarouselState {
    len: usize,
    current: Option<usize>,
    looping: bool,
    on_select: Option<SelectFn>,
}

impl CarouselState {
    /// A carousel over `len` slides, starting on the first one.
    pub fn new(len: usize) -> Self {
        Self {
            len,
            current: if len > 0 { Some(0) } else { None },
            looping: false,
            on_select: None,
        }
    }

    /// Start on `index` instead of the first slide (clamped to the last).
    pub fn with_start(mut self, index: usize) -> Self {
        if self.len > 0 {
            self.current = Some(index.min(self.len - 1));
        }
        self
    }

    /// Join the ends so stepping wraps around.
    pub fn with_loop(mut self, looping: bool) -> Self {
        self.looping = looping;
        self
    }

    /// Attach a callback observing every move; it sees the new index.
    pub fn with_on_select(mut self, on_select: impl FnMut(usize) + 'static) -> Self {
        self.on_select = Some(Box::new(on_select));
        self
    }

    /// The number of slides.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the carousel has no slides.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The current slide, if any.
    pub fn current(&self) -> Option<usize> {
        self.current
    }

    /// Whether `index` is the current slide.
    pub fn is_selected(&self, index: usize) -> bool {
        self.current == Some(index)
    }

    /// Whether the carousel wraps at the ends.
    pub fn is_looping(&self) -> bool {
        self.looping
    }

    /// Whether [`next`](Self::next) would move.
    pub fn can_next(&self) -> bool {
        self.would_move(StepDirection::Next)
    }

    /// Whether [`prev`](Self::prev) would move.
    pub fn can_prev(&self) -> bool {
        self.would_move(StepDirection::Prev)
    }

    /// Move one slide forward. Returns whether the position changed.
    pub fn next(&mut self) -> bool {
        self.step_by(StepDirection::Next)
    }

    /// Move one slide back. Returns whether the position changed.
    pub fn prev(&mut self) -> bool {
        self.step_by(StepDirection::Prev)
    }

    /// Jump straight to `index`, as an indicator dot does.
    ///
    /// Out-of-bounds indices and the current slide are no-ops. Returns
    /// whether the position changed.
    pub fn scroll_to(&mut self, index: usize) -> bool {
        if index >= self.len || self.current == Some(index) {
            return false;
        }
        self.commit(index);
        true
    }

    /// Resize the slide space, clamping the cursor into it. Fires no
    /// notification.
    pub fn set_len(&mut self, len: usize) {
        self.len = len;
        self.current = match self.current {
            _ if len == 0 => None,
            Some(i) => Some(i.min(len - 1)),
            None => None,
        };
    }

    // A one-slide loop wraps onto itself, which is not a move.
    fn would_move(&self, direction: StepDirection) -> bool {
        match step(self.len, self.current, direction, self.looping) {
            Some(next) => self.current != Some(next),
            None => false,
        }
    }

    fn step_by(&mut self, direction: StepDirection) -> bool {
        let Some(next) = step(self.len, self.current, direction, self.looping) else {
            return false;
        };
        if self.current == Some(next) {
            return false;
        }
        self.commit(next);
        true
    }

    fn commit(&mut self, index: usize) {
        self.current = Some(index);
        if let Some(on_select) = self.on_select.as_mut() {
            on_select(index);
        }
    }
}

impl fmt::Debug for CarouselState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CarouselState")
            .field("len", &self.len)
            .field("current", &self.current)
            .field("looping", &self.looping)
            .finish_non_exhaustive()
    }
}
