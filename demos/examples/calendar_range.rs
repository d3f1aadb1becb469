// Copyright 2026 the Sapwood Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Range picking on a calendar.
//!
//! Pick a stay with two clicks, bounce off a disabled weekend day, and
//! render a strip of day cells from their flags.
//!
//! Run:
//! - `cargo run -p sapwood_examples --example calendar_range`

use sapwood_algebra::SelectionMode;
use sapwood_control::{Outcome, Rejection};
use sapwood_widgets::calendar::{
    CalendarState, Day, DayFlags, DayRule, DisabledDays, WeekdaySet,
};

fn cell(flags: DayFlags) -> char {
    if flags.contains(DayFlags::DISABLED) {
        'x'
    } else if flags.contains(DayFlags::RANGE_START) {
        '['
    } else if flags.contains(DayFlags::RANGE_END) {
        ']'
    } else if flags.contains(DayFlags::IN_RANGE) {
        '='
    } else {
        '.'
    }
}

fn strip(cal: &CalendarState, from: Day, days: i32) -> String {
    (0..days)
        .map(|offset| cell(cal.day_flags(Day::from_days(from.days() + offset))))
        .collect()
}

fn main() {
    let mut cal = CalendarState::new(SelectionMode::Range).with_disabled_days(
        DisabledDays::from_rules([DayRule::Weekdays(WeekdaySet::WEEKEND)]),
    );

    let monday = Day::from_ymd(2026, 8, 10);
    let saturday = Day::from_ymd(2026, 8, 15);
    let friday = Day::from_ymd(2026, 8, 14);

    // First click opens the range.
    assert_eq!(cal.select(monday), Outcome::Committed);
    println!("open:     {}", strip(&cal, monday, 7));

    // The weekend is off limits.
    assert_eq!(cal.select(saturday), Outcome::Rejected(Rejection::Disabled));

    // Friday closes it.
    assert_eq!(cal.select(friday), Outcome::Committed);
    println!("closed:   {}", strip(&cal, monday, 7));
    assert_eq!(strip(&cal, monday, 7), "[===]xx");

    for day in [monday, friday] {
        println!("endpoint: {day}");
    }
    assert!(cal.is_selected(Day::from_ymd(2026, 8, 12)));
    assert!(!cal.is_selected(Day::from_ymd(2026, 8, 16)));

    // A third click starts a fresh range.
    cal.select(Day::from_ymd(2026, 8, 24));
    println!("restart:  {}", strip(&cal, monday, 7));
    assert_eq!(strip(&cal, monday, 7), ".....xx");
}
