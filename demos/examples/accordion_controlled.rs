// Copyright 2026 the Sapwood Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A controlled accordion.
//!
//! The application owns the open set; the accordion only requests changes.
//! Each toggle surfaces a candidate through the change callback, the owner
//! applies it (or refuses), and `sync_open` mirrors the owner's decision
//! back into the widget.
//!
//! Run:
//! - `cargo run -p sapwood_examples --example accordion_controlled`

use std::cell::RefCell;
use std::rc::Rc;

use sapwood_algebra::SelectionValue;
use sapwood_control::Outcome;
use sapwood_widgets::{AccordionKind, AccordionState};

fn keys_of(value: &SelectionValue<&'static str>) -> Vec<&'static str> {
    match value {
        SelectionValue::Empty => Vec::new(),
        SelectionValue::Single(key) => vec![*key],
        SelectionValue::Multiple(keys) => keys.iter().copied().collect(),
        SelectionValue::Range(_) => Vec::new(),
    }
}

fn main() {
    // The owner's source of truth.
    let open = Rc::new(RefCell::new(vec!["intro"]));

    let requested = Rc::new(RefCell::new(None));
    let inbox = Rc::clone(&requested);
    let mut accordion = AccordionState::controlled(AccordionKind::Multiple, ["intro"])
        .with_on_change(move |candidate| *inbox.borrow_mut() = Some(keys_of(candidate)));

    // A toggle does not move the widget; it only files a request.
    let outcome = accordion.toggle("details");
    assert_eq!(outcome, Outcome::Requested);
    assert_eq!(accordion.open_items(), ["intro"]);
    println!("requested: {:?}", requested.borrow());

    // The owner accepts the request and mirrors it back.
    let candidate = requested.borrow_mut().take().unwrap();
    *open.borrow_mut() = candidate;
    accordion.sync_open(open.borrow().iter().copied());
    println!("after sync: {:?}", accordion.open_items());
    assert_eq!(accordion.open_items(), ["details", "intro"]);

    // This time the owner refuses; the widget stays where the owner left it.
    accordion.toggle("intro");
    let refused = requested.borrow_mut().take().unwrap();
    println!("refused: {refused:?}");
    assert_eq!(accordion.open_items(), ["details", "intro"]);
}
