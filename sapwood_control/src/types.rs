// Copyright 2026 the Sapwood Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Core types for the control layer: mode resolution, select outcomes, and
//! the disabled-key seam.

use sapwood_algebra::{KeySet, SelectionValue};

/// Who owns a widget's selection value.
///
/// Resolved once per instance by [`resolve`](Self::resolve) and fixed for
/// the instance's lifetime. Contradicting it later (external input to an
/// uncontrolled instance, or the reverse) never flips the mode.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum ControlMode {
    /// The caller owns the value; the control mirrors it and reports the
    /// transitions it would like applied.
    Controlled,
    /// The control owns the value and commits transitions itself.
    Uncontrolled,
}

impl ControlMode {
    /// Decide the mode from the presence of an externally supplied value.
    ///
    /// Presence alone decides; the content is irrelevant. Supplying
    /// [`Empty`](SelectionValue::Empty) still means controlled.
    pub const fn resolve<K>(external: Option<&SelectionValue<K>>) -> Self {
        match external {
            Some(_) => Self::Controlled,
            None => Self::Uncontrolled,
        }
    }

    /// Whether this is [`Controlled`](Self::Controlled).
    pub const fn is_controlled(self) -> bool {
        matches!(self, Self::Controlled)
    }
}

/// What a call to [`select`](crate::control::SelectionControl::select) did.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Outcome {
    /// The transition was applied to the stored value (uncontrolled mode).
    Committed,
    /// The transition was reported to the owner but not applied (controlled
    /// mode); the owner decides whether to feed it back.
    Requested,
    /// No transition happened.
    Rejected(Rejection),
}

impl Outcome {
    /// Whether a candidate value was produced (committed or requested).
    pub const fn transitioned(self) -> bool {
        matches!(self, Self::Committed | Self::Requested)
    }
}

/// Why an interaction produced no transition.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Rejection {
    /// The key is disabled; the transition table was never consulted.
    Disabled,
    /// The table produced no change, e.g. re-selecting the held key in
    /// fixed-single mode.
    NoTransition,
}

/// Decide whether a key accepts interaction.
///
/// Consulted before the transition table; a disabled key is rejected without
/// notification. Implementations range from a static [`KeySet`] to rule
/// systems (see the calendar day rules in `sapwood_widgets`).
pub trait DisabledKeys<K> {
    /// Whether `key` rejects interaction.
    fn is_disabled(&self, key: &K) -> bool;
}

/// The no-op provider used by default: every key is enabled.
///
/// Used by [`SelectionControl::new`](crate::control::SelectionControl::new).
#[derive(Copy, Clone, Debug, Default)]
pub struct NoDisabled;

impl<K> DisabledKeys<K> for NoDisabled {
    #[inline]
    fn is_disabled(&self, _key: &K) -> bool {
        false
    }
}

impl<K: Copy + Ord> DisabledKeys<K> for KeySet<K> {
    #[inline]
    fn is_disabled(&self, key: &K) -> bool {
        self.contains(*key)
    }
}

impl<K> DisabledKeys<K> for fn(&K) -> bool {
    #[inline]
    fn is_disabled(&self, key: &K) -> bool {
        self(key)
    }
}
