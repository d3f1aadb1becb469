// Copyright 2026 the Sapwood Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A confirmation dialog, uncontrolled and controlled.
//!
//! The uncontrolled dialog opens itself and reports through its callback.
//! The controlled one asks its owner, who holds the open flag and may keep
//! the dialog up until the work is done.
//!
//! Run:
//! - `cargo run -p sapwood_examples --example dialog_confirm`

use std::cell::Cell;
use std::rc::Rc;

use sapwood_control::Outcome;
use sapwood_widgets::DialogState;

fn main() {
    // Uncontrolled: the trigger button just toggles.
    let mut dialog = DialogState::new().with_on_open_change(|open| {
        println!("  dialog is now {}", if open { "open" } else { "closed" });
    });
    assert!(!dialog.is_open());
    dialog.open();
    assert!(dialog.is_open());
    dialog.close();
    assert!(!dialog.is_open());

    // Controlled: the owner decides when the dialog actually moves.
    let wants_open = Rc::new(Cell::new(false));
    let request = Rc::clone(&wants_open);
    let mut confirm = DialogState::controlled(false)
        .with_on_open_change(move |open| request.set(open));

    assert_eq!(confirm.open(), Outcome::Requested);
    assert!(!confirm.is_open(), "the widget waits for its owner");
    assert!(wants_open.get());

    // The owner grants the request.
    confirm.sync_open(true);
    assert!(confirm.is_open());

    // Close requests can be ignored while a save is in flight.
    assert_eq!(confirm.close(), Outcome::Requested);
    assert!(confirm.is_open());
    println!("owner kept the dialog open until the save finished");
    confirm.sync_open(false);
    assert!(!confirm.is_open());
}
