// Copyright 2026 the Sapwood Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=sapwood_algebra --heading-base-level=0

//! Sapwood Algebra: selection values and their transition rules.
//!
//! Sapwood Algebra is a reusable building block for interactive widgets that
//! hold a "current selection": accordions, dialogs, date pickers, carousels.
//!
//! - Represent a selection as a tagged value: nothing, one key, a set of keys,
//!   or a span of keys ([`SelectionValue`]).
//! - Apply interactions through a total, per-mode transition table
//!   ([`transition`]); a `None` result means the interaction changes nothing.
//! - Step through a bounded index space with optional wrap-around ([`step`]).
//!
//! It is generic over the key type `K` and carries no policy: which keys
//! exist, which are disabled, and who owns the value are questions for the
//! layers above (see `sapwood_control` and `sapwood_widgets`).
//!
//! # Example
//!
//! ```rust
//! use sapwood_algebra::{SelectionMode, SelectionValue, transition};
//!
//! // A collapsible single-selection accordion over panel names.
//! let mode = SelectionMode::SingleCollapsible;
//! let mut value: SelectionValue<&str> = SelectionValue::Empty;
//!
//! // Open "details", then switch to "billing".
//! value = transition(mode, &value, "details").unwrap();
//! value = transition(mode, &value, "billing").unwrap();
//! assert!(value.contains("billing"));
//! assert!(!value.contains("details"));
//!
//! // Re-selecting the open panel collapses it.
//! value = transition(mode, &value, "billing").unwrap();
//! assert!(value.is_empty());
//! ```
//!
//! Range mode grows a span from its first key and restarts on out-of-order
//! input instead of inverting:
//!
//! ```rust
//! use sapwood_algebra::{SelectionMode, SelectionValue, transition};
//!
//! let mode = SelectionMode::Range;
//! let mut value: SelectionValue<u32> = SelectionValue::Empty;
//! value = transition(mode, &value, 10).unwrap(); // opens at 10
//! value = transition(mode, &value, 14).unwrap(); // closes 10..=14
//! assert!(value.contains(12));
//!
//! // An earlier key restarts the range there.
//! value = transition(mode, &value, 4).unwrap();
//! assert!(value.contains(4) && !value.contains(12));
//! ```
//!
//! ## Choosing a mode
//!
//! - [`SingleFixed`](SelectionMode::SingleFixed): always-one widgets, e.g. an
//!   accordion that must keep a panel open, or a required date field.
//! - [`SingleCollapsible`](SelectionMode::SingleCollapsible): zero-or-one
//!   widgets where re-selecting clears, e.g. a dismissable panel or dialog.
//! - [`Multiple`](SelectionMode::Multiple): independent toggles sharing one
//!   value, e.g. a multi-open accordion or multi-date picker.
//! - [`Range`](SelectionMode::Range): two-endpoint spans, e.g. a stay or
//!   reporting period in a calendar.

#![no_std]

extern crate alloc;

pub mod mode;
pub mod step;
pub mod transition;
pub mod value;

pub use mode::SelectionMode;
pub use step::{StepDirection, can_step, step};
pub use transition::transition;
pub use value::{KeyRange, KeySet, SelectionValue};
