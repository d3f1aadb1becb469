// Copyright 2026 the Sapwood Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Driving an accordion from pointer clicks.
//!
//! Header rows are plain rectangles; a click resolves to a section key by
//! hit-testing them, and the key feeds the accordion state.
//!
//! Run:
//! - `cargo run -p sapwood_examples --example pointer_accordion`

use kurbo::{Point, Rect};
use sapwood_widgets::{AccordionKind, AccordionState};

const HEADER_HEIGHT: f64 = 32.0;

fn headers() -> Vec<(&'static str, Rect)> {
    ["general", "appearance", "advanced"]
        .into_iter()
        .enumerate()
        .map(|(row, key)| {
            let y = row as f64 * HEADER_HEIGHT;
            (key, Rect::new(0.0, y, 240.0, y + HEADER_HEIGHT))
        })
        .collect()
}

fn header_at(headers: &[(&'static str, Rect)], p: Point) -> Option<&'static str> {
    headers
        .iter()
        .find(|(_, rect)| rect.contains(p))
        .map(|(key, _)| *key)
}

fn main() {
    let headers = headers();
    let mut accordion: AccordionState<&str> = AccordionState::new(AccordionKind::Single {
        collapsible: false,
    });

    for click in [
        Point::new(120.0, 16.0),  // "general"
        Point::new(120.0, 48.0),  // "appearance"
        Point::new(120.0, 48.0),  // same header again; fixed kind keeps it
        Point::new(120.0, 400.0), // dead space below the headers
    ] {
        match header_at(&headers, click) {
            Some(key) => {
                let outcome = accordion.toggle(key);
                println!("click {click:?} -> {key}: {outcome:?}");
            }
            None => println!("click {click:?} -> no header"),
        }
    }

    assert_eq!(accordion.open_items(), ["appearance"]);
    assert!(accordion.is_open("appearance"));
}
