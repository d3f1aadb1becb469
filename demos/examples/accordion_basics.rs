// Copyright 2026 the Sapwood Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Accordion basics.
//!
//! Toggle sections in a collapsible single accordion and a multiple
//! accordion, and watch the open set evolve.
//!
//! Run:
//! - `cargo run -p sapwood_examples --example accordion_basics`

use sapwood_control::{Outcome, Rejection};
use sapwood_widgets::{AccordionKind, AccordionState};

fn main() {
    // One section open at a time; clicking it again collapses it.
    let mut faq: AccordionState<&str> = AccordionState::new(AccordionKind::Single {
        collapsible: true,
    });
    faq.toggle("shipping");
    println!("== Collapsible single ==\n  open: {:?}", faq.open_items());
    faq.toggle("returns");
    println!("  open: {:?}", faq.open_items());
    faq.toggle("returns");
    println!("  open: {:?}", faq.open_items());
    assert!(faq.open_items().is_empty());

    // Sections toggle independently.
    let mut settings: AccordionState<&str> =
        AccordionState::with_open(AccordionKind::Multiple, ["profile"]);
    settings.toggle("privacy");
    settings.toggle("profile");
    println!("== Multiple ==\n  open: {:?}", settings.open_items());
    assert_eq!(settings.open_items(), ["privacy"]);

    // Disabled sections reject the interaction outright.
    settings.disable("billing");
    let outcome = settings.toggle("billing");
    println!("  toggling a disabled section: {outcome:?}");
    assert_eq!(outcome, Outcome::Rejected(Rejection::Disabled));
    assert!(!settings.is_open("billing"));
}
