// Copyright 2026 the Sapwood Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Basic usage of the selection algebra: drive each mode's transition table by hand.

use sapwood_algebra::{SelectionMode, SelectionValue, transition};

fn main() {
    // Multiple: each interaction toggles membership.
    let mut value: SelectionValue<&str> = SelectionValue::Empty;
    for key in ["a", "b", "a"] {
        if let Some(next) = transition(SelectionMode::Multiple, &value, key) {
            value = next;
        }
        println!("multiple after {key:?}: {value:?}");
    }

    // Range: the first key opens a span, an in-order second key closes it.
    let mut range: SelectionValue<u32> = SelectionValue::Empty;
    for key in [3, 7, 5] {
        if let Some(next) = transition(SelectionMode::Range, &range, key) {
            range = next;
        }
        println!("range after {key}: {range:?}");
    }

    // A fixed single never drops its key; the no-op comes back as None.
    let held = SelectionValue::Single("a");
    assert_eq!(transition(SelectionMode::SingleFixed, &held, "a"), None);
}
