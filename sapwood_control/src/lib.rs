// Copyright 2026 the Sapwood Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=sapwood_control --heading-base-level=0

//! Sapwood Control: dual-mode ownership for selection state.
//!
//! ## Overview
//!
//! Interactive widgets answer the same question two ways: who owns the
//! current value? An *uncontrolled* widget owns it and updates it itself; a
//! *controlled* widget mirrors a value its caller owns and only reports the
//! updates it would like applied. This crate packages that split, together
//! with change notification and a disabled-key seam, around the transition
//! table from [`sapwood_algebra`].
//!
//! ## Modes
//!
//! [`SelectionControl::new`] decides the mode exactly once, from the
//! *presence* of an externally supplied value — supplying
//! [`Empty`](sapwood_algebra::SelectionValue::Empty) still means controlled.
//! The decision never changes afterward: feeding
//! [`sync_external`](SelectionControl::sync_external) to an uncontrolled
//! instance (or [`reset`](SelectionControl::reset) to a controlled one) is
//! ignored, and reported through `tracing` when the `tracing` feature is on.
//!
//! ## Selection flow
//!
//! [`select`](SelectionControl::select) runs one pipeline per interaction:
//!
//! 1. The [`DisabledKeys`] provider is consulted; a disabled key is rejected
//!    with no notification.
//! 2. The transition table computes a candidate, or reports a no-op.
//! 3. Uncontrolled: the candidate is committed, then the change callback
//!    sees it. Controlled: the stored mirror is untouched and the callback
//!    sees the candidate; the owner feeds an accepted value back through
//!    [`sync_external`](SelectionControl::sync_external).
//!
//! ## Example
//!
//! ```
//! use sapwood_algebra::{SelectionMode, SelectionValue};
//! use sapwood_control::{Outcome, SelectionControl};
//!
//! // Uncontrolled: the control owns the value.
//! let mut acc: SelectionControl<&str> =
//!     SelectionControl::uncontrolled(SelectionMode::SingleCollapsible);
//! assert_eq!(acc.select("panel-a"), Outcome::Committed);
//! assert!(acc.is_selected("panel-a"));
//!
//! // Controlled: the caller owns the value and loops it back.
//! let mut owner_value = SelectionValue::Empty;
//! let mut dlg: SelectionControl<&str> =
//!     SelectionControl::controlled(SelectionMode::SingleFixed, owner_value.clone());
//! assert_eq!(dlg.select("open"), Outcome::Requested);
//! assert!(dlg.value().is_empty()); // mirror untouched until the owner syncs
//! owner_value = SelectionValue::Single("open");
//! assert!(dlg.sync_external(owner_value));
//! assert!(dlg.is_selected("open"));
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod control;
pub mod types;

pub use control::SelectionControl;
pub use types::{ControlMode, DisabledKeys, NoDisabled, Outcome, Rejection};
