// Copyright 2026 the Sapwood Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The dual-mode selection container.

use alloc::boxed::Box;
use core::fmt;

use sapwood_algebra::{SelectionMode, SelectionValue, transition};

use crate::types::{ControlMode, DisabledKeys, NoDisabled, Outcome, Rejection};

/// Change callback: sees every candidate value the table produces.
type ChangeFn<K> = Box<dyn FnMut(&SelectionValue<K>)>;

/// Dual-mode selection state for one widget instance.
///
/// Owns the value in uncontrolled mode; mirrors a caller-owned value in
/// controlled mode. The mode is resolved exactly once, at construction, from
/// the presence of an external value.
///
/// Semantics:
/// - Disabled keys are rejected before the transition table and never
///   notify, regardless of [`set_notify_on_noop`](Self::set_notify_on_noop).
/// - Every candidate the table produces reaches the change callback; under
///   uncontrolled mode it is committed first, under controlled mode the
///   stored mirror stays untouched.
/// - A no-op interaction (the table returns no transition) does not notify
///   by default; [`set_notify_on_noop`](Self::set_notify_on_noop) opts into
///   echoing the unchanged value for hosts that expect a callback per
///   interaction.
///
/// One instance belongs to one widget; nested widgets hold independent
/// instances. All calls are synchronous and run on the caller's thread.
pub struct SelectionControl<K: Copy + Ord, D: DisabledKeys<K> = NoDisabled> {
    selection_mode: SelectionMode,
    control_mode: ControlMode,
    value: SelectionValue<K>,
    on_change: Option<ChangeFn<K>>,
    disabled: D,
    notify_on_noop: bool,
}

impl<K: Copy + Ord> SelectionControl<K> {
    /// Create a control, resolving the mode from the presence of `external`.
    ///
    /// `Some(value)` fixes controlled mode with `value` as the initial
    /// mirror; `None` fixes uncontrolled mode with an empty selection. The
    /// initial value is normalized to fit `selection_mode`.
    pub fn new(selection_mode: SelectionMode, external: Option<SelectionValue<K>>) -> Self {
        let control_mode = ControlMode::resolve(external.as_ref());
        let value = external.unwrap_or(SelectionValue::Empty).coerce(selection_mode);
        Self {
            selection_mode,
            control_mode,
            value,
            on_change: None,
            disabled: NoDisabled,
            notify_on_noop: false,
        }
    }

    /// An uncontrolled control with an empty selection.
    pub fn uncontrolled(selection_mode: SelectionMode) -> Self {
        Self::new(selection_mode, None)
    }

    /// An uncontrolled control seeded with `initial`.
    ///
    /// This is the "default value" pattern: the control still owns the value
    /// (the seed does not make it controlled), it just starts somewhere
    /// other than empty.
    pub fn uncontrolled_with(selection_mode: SelectionMode, initial: SelectionValue<K>) -> Self {
        let mut control = Self::new(selection_mode, None);
        control.value = initial.coerce(selection_mode);
        control
    }

    /// A controlled control mirroring `value`.
    pub fn controlled(selection_mode: SelectionMode, value: SelectionValue<K>) -> Self {
        Self::new(selection_mode, Some(value))
    }
}

impl<K: Copy + Ord, D: DisabledKeys<K>> SelectionControl<K, D> {
    /// Attach a disabled-key provider, replacing the current one.
    pub fn with_disabled<E: DisabledKeys<K>>(self, disabled: E) -> SelectionControl<K, E> {
        SelectionControl {
            selection_mode: self.selection_mode,
            control_mode: self.control_mode,
            value: self.value,
            on_change: self.on_change,
            disabled,
            notify_on_noop: self.notify_on_noop,
        }
    }

    /// Attach a change callback.
    ///
    /// The callback sees a reference to each candidate value; it cannot
    /// reach back into this control (exclusive borrow), so notification can
    /// never re-enter [`select`](Self::select) on the same instance.
    pub fn with_on_change(mut self, on_change: impl FnMut(&SelectionValue<K>) + 'static) -> Self {
        self.on_change = Some(Box::new(on_change));
        self
    }

    /// Replace the disabled-key provider.
    pub fn set_disabled(&mut self, disabled: D) {
        self.disabled = disabled;
    }

    /// The attached disabled-key provider.
    pub fn disabled(&self) -> &D {
        &self.disabled
    }

    /// Mutable access to the disabled-key provider.
    pub fn disabled_mut(&mut self) -> &mut D {
        &mut self.disabled
    }

    /// Opt into notifying the unchanged value on no-op interactions.
    ///
    /// Off by default. Disabled-key rejections stay silent either way.
    pub fn set_notify_on_noop(&mut self, notify: bool) {
        self.notify_on_noop = notify;
    }

    /// The current value: authoritative under uncontrolled mode, the last
    /// synced mirror under controlled mode.
    pub fn value(&self) -> &SelectionValue<K> {
        &self.value
    }

    /// Whether `key` is selected (range membership for range values).
    pub fn is_selected(&self, key: K) -> bool {
        self.value.contains(key)
    }

    /// Whether `key` is disabled per the attached provider.
    pub fn is_disabled(&self, key: &K) -> bool {
        self.disabled.is_disabled(key)
    }

    /// The selection mode this control runs.
    pub fn selection_mode(&self) -> SelectionMode {
        self.selection_mode
    }

    /// The ownership mode resolved at construction.
    pub fn control_mode(&self) -> ControlMode {
        self.control_mode
    }

    /// Whether the caller owns the value.
    pub fn is_controlled(&self) -> bool {
        self.control_mode.is_controlled()
    }

    /// Handle an interaction with `key`.
    ///
    /// Runs the pipeline: disabled gate, transition table, then commit (or
    /// request) and notify. See the type-level docs for the exact rules the
    /// outcome reports.
    pub fn select(&mut self, key: K) -> Outcome {
        if self.disabled.is_disabled(&key) {
            return Outcome::Rejected(Rejection::Disabled);
        }
        let Some(candidate) = transition(self.selection_mode, &self.value, key) else {
            if self.notify_on_noop && let Some(on_change) = self.on_change.as_mut() {
                on_change(&self.value);
            }
            return Outcome::Rejected(Rejection::NoTransition);
        };
        match self.control_mode {
            ControlMode::Uncontrolled => {
                self.value = candidate;
                if let Some(on_change) = self.on_change.as_mut() {
                    on_change(&self.value);
                }
                Outcome::Committed
            }
            ControlMode::Controlled => {
                if let Some(on_change) = self.on_change.as_mut() {
                    on_change(&candidate);
                }
                Outcome::Requested
            }
        }
    }

    /// Mirror an externally owned value (controlled mode).
    ///
    /// The value is normalized to fit the selection mode, then stored.
    /// Returns whether the mirror changed; re-applying an equal value is a
    /// no-op. On an uncontrolled instance the call is ignored — the mode was
    /// fixed at construction — and reported when the `tracing` feature is on.
    pub fn sync_external(&mut self, next: SelectionValue<K>) -> bool {
        if !self.is_controlled() {
            #[cfg(feature = "tracing")]
            tracing::warn!(
                "sync_external on an uncontrolled selection; the mode is fixed at construction"
            );
            return false;
        }
        let next = next.coerce(self.selection_mode);
        if next == self.value {
            return false;
        }
        self.value = next;
        true
    }

    /// Replace the stored value programmatically (uncontrolled mode).
    ///
    /// No notification fires: this is the owner acting on its own state, not
    /// an interaction. On a controlled instance the call is ignored; the
    /// owner of a controlled value updates it through
    /// [`sync_external`](Self::sync_external).
    pub fn reset(&mut self, value: SelectionValue<K>) {
        if self.is_controlled() {
            #[cfg(feature = "tracing")]
            tracing::warn!(
                "reset on a controlled selection; the owner updates the value through sync_external"
            );
            return;
        }
        self.value = value.coerce(self.selection_mode);
    }
}

impl<K: Copy + Ord + fmt::Debug, D: DisabledKeys<K>> fmt::Debug for SelectionControl<K, D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SelectionControl")
            .field("selection_mode", &self.selection_mode)
            .field("control_mode", &self.control_mode)
            .field("value", &self.value)
            .field("notify_on_noop", &self.notify_on_noop)
            .finish_non_exhaustive()
    }
}
