// Copyright 2026 the Sapwood Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Accordion open state: one panel or many, with per-item disabling.
//!
//! ## Usage
//!
//! 1) Pick an [`AccordionKind`]: single (optionally collapsible) or multiple.
//! 2) Feed header activations to [`AccordionState::toggle`].
//! 3) Render each panel from [`AccordionState::is_open`].
//!
//! ## Minimal example
//!
//! ```
//! use sapwood_widgets::accordion::{AccordionKind, AccordionState};
//! let mut acc: AccordionState<u32> = AccordionState::new(AccordionKind::Multiple);
//! acc.toggle(1);
//! acc.toggle(3);
//! assert_eq!(acc.open_items(), vec![1, 3]);
//! ```

use alloc::vec;
use alloc::vec::Vec;

use sapwood_algebra::{KeySet, SelectionMode, SelectionValue};
use sapwood_control::{Outcome, SelectionControl};

/// Which accordion flavor: one open panel or many.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum AccordionKind {
    /// At most one panel open.
    Single {
        /// Whether re-activating the open panel closes it.
        collapsible: bool,
    },
    /// Any number of panels open.
    Multiple,
}

impl AccordionKind {
    /// The selection mode this kind runs on.
    pub const fn selection_mode(self) -> SelectionMode {
        match self {
            Self::Single { collapsible: false } => SelectionMode::SingleFixed,
            Self::Single { collapsible: true } => SelectionMode::SingleCollapsible,
            Self::Multiple => SelectionMode::Multiple,
        }
    }
}

/// Open-panel state for one accordion.
///
/// Headless: `K` identifies panels however the host likes (ids, interned
/// names, indices). Nested accordions are independent instances; opening a
/// child never touches its parent's state.
#[derive(Debug)]
pub struct AccordionState<K: Copy + Ord> {
    kind: AccordionKind,
    control: SelectionControl<K, KeySet<K>>,
}

impl<K: Copy + Ord> AccordionState<K> {
    /// An uncontrolled accordion with every panel closed.
    pub fn new(kind: AccordionKind) -> Self {
        Self {
            kind,
            control: SelectionControl::uncontrolled(kind.selection_mode())
                .with_disabled(KeySet::new()),
        }
    }

    /// An uncontrolled accordion with `open` panels already open.
    ///
    /// The default-value pattern: the accordion still owns its state. Single
    /// kinds keep the first key; multiple kinds keep them all.
    pub fn with_open(kind: AccordionKind, open: impl IntoIterator<Item = K>) -> Self {
        Self {
            kind,
            control: SelectionControl::uncontrolled_with(
                kind.selection_mode(),
                Self::value_for(kind, open),
            )
            .with_disabled(KeySet::new()),
        }
    }

    /// A controlled accordion mirroring the caller-owned `open` panels.
    ///
    /// Interactions report candidates through the change callback instead of
    /// applying them; feed accepted values back with
    /// [`sync_open`](Self::sync_open).
    pub fn controlled(kind: AccordionKind, open: impl IntoIterator<Item = K>) -> Self {
        Self {
            kind,
            control: SelectionControl::controlled(
                kind.selection_mode(),
                Self::value_for(kind, open),
            )
            .with_disabled(KeySet::new()),
        }
    }

    /// Attach a change callback; it sees every candidate value.
    pub fn with_on_change(mut self, on_change: impl FnMut(&SelectionValue<K>) + 'static) -> Self {
        self.control = self.control.with_on_change(on_change);
        self
    }

    /// This accordion's kind.
    pub fn kind(&self) -> AccordionKind {
        self.kind
    }

    /// Whether the caller owns the open state.
    pub fn is_controlled(&self) -> bool {
        self.control.is_controlled()
    }

    /// Mark `key` disabled; its header stops reacting.
    pub fn disable(&mut self, key: K) {
        self.control.disabled_mut().insert(key);
    }

    /// Re-enable a disabled panel.
    pub fn enable(&mut self, key: K) {
        self.control.disabled_mut().remove(key);
    }

    /// Replace the disabled set wholesale.
    pub fn set_disabled_items(&mut self, keys: impl IntoIterator<Item = K>) {
        self.control.set_disabled(KeySet::from_keys(keys));
    }

    /// Whether `key` is disabled.
    pub fn is_disabled(&self, key: K) -> bool {
        self.control.is_disabled(&key)
    }

    /// Opt into notifying the unchanged value on no-op activations.
    pub fn set_notify_on_noop(&mut self, notify: bool) {
        self.control.set_notify_on_noop(notify);
    }

    /// Activate the header of `key`.
    pub fn toggle(&mut self, key: K) -> Outcome {
        self.control.select(key)
    }

    /// Whether the panel of `key` is open.
    pub fn is_open(&self, key: K) -> bool {
        self.control.is_selected(key)
    }

    /// The open panels, in ascending key order.
    pub fn open_items(&self) -> Vec<K> {
        match self.control.value() {
            SelectionValue::Empty => Vec::new(),
            SelectionValue::Single(k) => vec![*k],
            SelectionValue::Multiple(set) => set.keys().to_vec(),
            // Accordion kinds never produce a range shape.
            SelectionValue::Range(_) => Vec::new(),
        }
    }

    /// The raw selection value.
    pub fn value(&self) -> &SelectionValue<K> {
        self.control.value()
    }

    /// Mirror the caller-owned open panels (controlled mode).
    ///
    /// Returns whether the mirror changed.
    pub fn sync_open(&mut self, open: impl IntoIterator<Item = K>) -> bool {
        let value = Self::value_for(self.kind, open);
        self.control.sync_external(value)
    }

    fn value_for(kind: AccordionKind, open: impl IntoIterator<Item = K>) -> SelectionValue<K> {
        match kind {
            AccordionKind::Multiple => SelectionValue::Multiple(KeySet::from_keys(open)),
            AccordionKind::Single { .. } => match open.into_iter().next() {
                Some(k) => SelectionValue::Single(k),
                None => SelectionValue::Empty,
            },
        }
    }
}
