// Copyright 2026 the Sapwood Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Dialog open state: a boolean selection with an open-change callback.
//!
//! A dialog is the degenerate selection widget: one key (the dialog itself)
//! in collapsible-single mode, so "toggle" flips between open and closed.
//! The dual-mode contract carries over unchanged: an uncontrolled dialog
//! owns its open flag; a controlled one mirrors the caller's flag and
//! reports requests through the callback.

use sapwood_algebra::{SelectionMode, SelectionValue};
use sapwood_control::{Outcome, Rejection, SelectionControl};

const OPEN: SelectionValue<()> = SelectionValue::Single(());
const CLOSED: SelectionValue<()> = SelectionValue::Empty;

/// Open/closed state for one dialog.
///
/// ## Example
///
/// ```
/// use sapwood_widgets::dialog::DialogState;
///
/// let mut dialog = DialogState::new().with_on_open_change(|open| {
///     // drive focus trapping, portals, scrim...
///     let _ = open;
/// });
/// dialog.toggle(); // trigger clicked
/// assert!(dialog.is_open());
/// dialog.close(); // cancel button
/// assert!(!dialog.is_open());
/// ```
#[derive(Debug)]
pub struct DialogState {
    control: SelectionControl<()>,
}

impl DialogState {
    /// An uncontrolled dialog, initially closed.
    pub fn new() -> Self {
        Self {
            control: SelectionControl::uncontrolled(SelectionMode::SingleCollapsible),
        }
    }

    /// An uncontrolled dialog with an explicit initial state.
    pub fn with_default_open(open: bool) -> Self {
        Self {
            control: SelectionControl::uncontrolled_with(
                SelectionMode::SingleCollapsible,
                if open { OPEN } else { CLOSED },
            ),
        }
    }

    /// A controlled dialog mirroring the caller-owned `open` flag.
    pub fn controlled(open: bool) -> Self {
        Self {
            control: SelectionControl::controlled(
                SelectionMode::SingleCollapsible,
                if open { OPEN } else { CLOSED },
            ),
        }
    }

    /// Attach an open-change callback; it sees every requested flag.
    pub fn with_on_open_change(mut self, mut on_open_change: impl FnMut(bool) + 'static) -> Self {
        self.control = self
            .control
            .with_on_change(move |value| on_open_change(!value.is_empty()));
        self
    }

    /// Whether the dialog is open.
    pub fn is_open(&self) -> bool {
        !self.control.value().is_empty()
    }

    /// Whether the caller owns the open flag.
    pub fn is_controlled(&self) -> bool {
        self.control.is_controlled()
    }

    /// Flip the open state (the trigger's behavior).
    pub fn toggle(&mut self) -> Outcome {
        self.control.select(())
    }

    /// Open the dialog; a no-op when already open.
    pub fn open(&mut self) -> Outcome {
        if self.is_open() {
            return Outcome::Rejected(Rejection::NoTransition);
        }
        self.control.select(())
    }

    /// Close the dialog (cancel/action buttons); a no-op when already closed.
    pub fn close(&mut self) -> Outcome {
        if !self.is_open() {
            return Outcome::Rejected(Rejection::NoTransition);
        }
        self.control.select(())
    }

    /// Drive the state to `open`.
    pub fn set_open(&mut self, open: bool) -> Outcome {
        if open { self.open() } else { self.close() }
    }

    /// Mirror the caller-owned flag (controlled mode).
    ///
    /// Returns whether the mirror changed.
    pub fn sync_open(&mut self, open: bool) -> bool {
        self.control.sync_external(if open { OPEN } else { CLOSED })
    }
}

impl Default for DialogState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::rc::Rc;
    use alloc::vec::Vec;
    use core::cell::RefCell;

    #[test]
    fn toggle_round_trip() {
        let mut dialog = DialogState::new();
        assert!(!dialog.is_open());

        assert_eq!(dialog.toggle(), Outcome::Committed);
        assert!(dialog.is_open());
        assert_eq!(dialog.toggle(), Outcome::Committed);
        assert!(!dialog.is_open());
    }

    #[test]
    fn open_and_close_are_idempotent() {
        let mut dialog = DialogState::new();
        assert_eq!(dialog.open(), Outcome::Committed);
        assert_eq!(dialog.open(), Outcome::Rejected(Rejection::NoTransition));
        assert!(dialog.is_open());

        assert_eq!(dialog.close(), Outcome::Committed);
        assert_eq!(dialog.close(), Outcome::Rejected(Rejection::NoTransition));
        assert!(!dialog.is_open());
    }

    #[test]
    fn default_open_still_uncontrolled() {
        let mut dialog = DialogState::with_default_open(true);
        assert!(dialog.is_open());
        assert!(!dialog.is_controlled());
        assert_eq!(dialog.close(), Outcome::Committed);
        assert!(!dialog.is_open());
    }

    #[test]
    fn callback_sees_boolean_flags() {
        let seen: Rc<RefCell<Vec<bool>>> = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        let mut dialog = DialogState::new().with_on_open_change(move |open| {
            sink.borrow_mut().push(open);
        });

        dialog.toggle();
        dialog.toggle();
        assert_eq!(seen.borrow().as_slice(), &[true, false]);
    }

    #[test]
    fn controlled_dialog_waits_for_the_owner() {
        let seen: Rc<RefCell<Vec<bool>>> = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        let mut dialog = DialogState::controlled(false).with_on_open_change(move |open| {
            sink.borrow_mut().push(open);
        });

        // The trigger requests opening; the mirror stays closed.
        assert_eq!(dialog.toggle(), Outcome::Requested);
        assert!(!dialog.is_open());
        assert_eq!(seen.borrow().as_slice(), &[true]);

        // The owner applies it.
        assert!(dialog.sync_open(true));
        assert!(dialog.is_open());
        assert!(!dialog.sync_open(true));
    }

    #[test]
    fn set_open_dispatches() {
        let mut dialog = DialogState::new();
        assert_eq!(dialog.set_open(true), Outcome::Committed);
        assert!(dialog.is_open());
        assert_eq!(dialog.set_open(true), Outcome::Rejected(Rejection::NoTransition));
        assert_eq!(dialog.set_open(false), Outcome::Committed);
        assert!(!dialog.is_open());
    }
}
