// Copyright 2026 the Sapwood Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Selection cardinalities.

/// How many keys a selection may hold and how re-selection behaves.
///
/// The mode is a property of the widget, not of the interaction: an accordion
/// that must always show a panel runs [`SingleFixed`](Self::SingleFixed), a
/// date-range picker runs [`Range`](Self::Range), and the mode stays put for
/// the widget's lifetime. The transition table in
/// [`transition`](crate::transition::transition) is total over all
/// `(mode, value, key)` triples.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SelectionMode {
    /// Zero or one key; re-selecting the held key changes nothing.
    SingleFixed,
    /// Zero or one key; re-selecting the held key clears the selection.
    SingleCollapsible,
    /// Any number of keys; selecting a key toggles its membership.
    Multiple,
    /// A bounded span; keys grow an open range and restart a closed one.
    Range,
}

impl SelectionMode {
    /// Whether values of this mode hold at most one key.
    pub const fn is_single(self) -> bool {
        matches!(self, Self::SingleFixed | Self::SingleCollapsible)
    }
}
