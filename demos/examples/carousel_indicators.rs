// Copyright 2026 the Sapwood Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Carousel arrows and indicator dots.
//!
//! Step through slides with the arrows, jump with a dot, and render the
//! indicator row from the state.
//!
//! Run:
//! - `cargo run -p sapwood_examples --example carousel_indicators`

use sapwood_widgets::CarouselState;

fn dots(carousel: &CarouselState) -> String {
    (0..carousel.len())
        .map(|i| if carousel.is_selected(i) { '●' } else { '○' })
        .collect()
}

fn main() {
    let mut carousel = CarouselState::new(5).with_on_select(|i| println!("  showing slide {i}"));
    println!("start:     {}", dots(&carousel));

    carousel.next();
    carousel.next();
    println!("two next:  {}", dots(&carousel));
    assert_eq!(carousel.current(), Some(2));

    // Dots jump straight to a slide.
    carousel.scroll_to(4);
    println!("jump to 4: {}", dots(&carousel));
    assert_eq!(dots(&carousel), "○○○○●");

    // At the last slide the next arrow goes dead.
    assert!(!carousel.can_next());
    assert!(!carousel.next());

    // A looping carousel wraps instead.
    let mut looping = CarouselState::new(3).with_loop(true).with_start(2);
    assert!(looping.can_next());
    looping.next();
    println!("wrapped:   {}", dots(&looping));
    assert_eq!(looping.current(), Some(0));
}
