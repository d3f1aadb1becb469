// Copyright 2026 the Sapwood Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=sapwood_widgets --heading-base-level=0

//! Sapwood Widgets: typed interaction state for common widgets.
//!
//! ## Overview
//!
//! Each module wraps the dual-mode selection core from `sapwood_control`
//! into the vocabulary of one widget family:
//!
//! - [`accordion`] — one-open or many-open panel state, per-item disabling.
//! - [`dialog`] — boolean open state with an open-change callback.
//! - [`calendar`] — date picking over epoch days, rule-based disabled days,
//!   per-day render flags.
//! - [`carousel`] — a bounded slide position with stepping, wrap-around, and
//!   indicator queries.
//!
//! Everything here is headless state: no rendering, focus, or layout. The
//! rendering layer feeds interacted keys in and reads selection flags out.
//!
//! ## Example
//!
//! ```
//! use sapwood_widgets::accordion::{AccordionKind, AccordionState};
//!
//! let mut faq: AccordionState<&str> =
//!     AccordionState::new(AccordionKind::Single { collapsible: true });
//! faq.toggle("shipping");
//! assert!(faq.is_open("shipping"));
//! faq.toggle("returns");
//! assert!(!faq.is_open("shipping"));
//! faq.toggle("returns");
//! assert!(faq.open_items().is_empty());
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod accordion;
pub mod calendar;
pub mod carousel;
pub mod dialog;

pub use accordion::{AccordionKind, AccordionState};
pub use calendar::{CalendarState, Day, DayFlags, DayRule, DisabledDays, Weekday, WeekdaySet};
pub use carousel::CarouselState;
pub use dialog::DialogState;
