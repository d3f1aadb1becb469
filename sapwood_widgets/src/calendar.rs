// Copyright 2026 the Sapwood Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Date-picking state over epoch days.
//!
//! ## Overview
//!
//! The calendar's key space is [`Day`], a count of days since 1970-01-01.
//! Integer keys make range membership two comparisons and leave the grid
//! layout (month matrices, outside days, week starts) to the rendering
//! layer, which is where the original date pickers keep it too.
//!
//! Disabled days are *rules*, not enumerations: "weekends", "before the
//! 5th", and explicit day lists compose in [`DisabledDays`] and plug into
//! the control layer's disabled-key seam.
//!
//! Per-cell styling reads [`CalendarState::day_flags`], which folds
//! selection, range endpoints, disabling, and the caller-declared today
//! into one [`DayFlags`] value.
//!
//! ## Minimal example
//!
//! ```
//! use sapwood_algebra::SelectionMode;
//! use sapwood_widgets::calendar::{CalendarState, Day, DayFlags};
//!
//! let mut cal = CalendarState::new(SelectionMode::Range);
//! cal.select(Day::from_ymd(2026, 8, 10));
//! cal.select(Day::from_ymd(2026, 8, 14));
//! let flags = cal.day_flags(Day::from_ymd(2026, 8, 12));
//! assert!(flags.contains(DayFlags::SELECTED | DayFlags::IN_RANGE));
//! ```

use alloc::vec::Vec;
use core::fmt;

use sapwood_algebra::{KeySet, SelectionMode, SelectionValue};
use sapwood_control::{DisabledKeys, Outcome, SelectionControl};

/// A calendar day as a count of days since 1970-01-01.
///
/// Chosen over a date struct so day keys are small, `Copy`, totally
/// ordered, and step by plain integer arithmetic. Conversion to and from
/// civil dates uses Howard Hinnant's algorithms; inputs to
/// [`from_ymd`](Self::from_ymd) are assumed to be valid civil dates.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Day(i32);

impl Day {
    /// Wrap a raw day count.
    pub const fn from_days(days: i32) -> Self {
        Self(days)
    }

    /// Build from a civil date. Months are `1..=12`, days `1..=31`.
    pub const fn from_ymd(year: i32, month: u32, day: u32) -> Self {
        Self(days_from_civil(year, month, day))
    }

    /// The raw day count since 1970-01-01.
    pub const fn days(self) -> i32 {
        self.0
    }

    /// The civil `(year, month, day)` for this day.
    pub const fn ymd(self) -> (i32, u32, u32) {
        civil_from_days(self.0)
    }

    /// The day of the week.
    pub const fn weekday(self) -> Weekday {
        Weekday::from_index(weekday_from_days(self.0))
    }

    /// The following day.
    pub const fn succ(self) -> Self {
        Self(self.0 + 1)
    }

    /// The preceding day.
    pub const fn pred(self) -> Self {
        Self(self.0 - 1)
    }
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (y, m, d) = self.ymd();
        write!(f, "{y:04}-{m:02}-{d:02}")
    }
}

// Hinnant's days_from_civil: era/year-of-era decomposition, March-first
// month numbering so the leap day lands at the end of the cycle.
const fn days_from_civil(y: i32, m: u32, d: u32) -> i32 {
    let y = if m <= 2 { y - 1 } else { y };
    let era = (if y >= 0 { y } else { y - 399 }) / 400;
    let yoe = (y - era * 400) as u32;
    let mp = if m > 2 { m - 3 } else { m + 9 };
    let doy = (153 * mp + 2) / 5 + d - 1;
    let doe = yoe * 365 + yoe / 4 - yoe / 100 + doy;
    era * 146097 + doe as i32 - 719468
}

// Hinnant's civil_from_days, the exact inverse of the above.
const fn civil_from_days(z: i32) -> (i32, u32, u32) {
    let z = z + 719468;
    let era = (if z >= 0 { z } else { z - 146096 }) / 146097;
    let doe = (z - era * 146097) as u32;
    let yoe = (doe - doe / 1460 + doe / 36524 - doe / 146096) / 365;
    let y = yoe as i32 + era * 400;
    let doy = doe - (365 * yoe + yoe / 4 - yoe / 100);
    let mp = (5 * doy + 2) / 153;
    let d = doy - (153 * mp + 2) / 5 + 1;
    let m = if mp < 10 { mp + 3 } else { mp - 9 };
    (if m <= 2 { y + 1 } else { y }, m, d)
}

// 1970-01-01 was a Thursday; index 0 is Sunday.
const fn weekday_from_days(z: i32) -> u32 {
    (if z >= -4 { (z + 4) % 7 } else { (z + 5) % 7 + 6 }) as u32
}

/// Day of the week, indexed `0 = Sunday` through `6 = Saturday`.
///
/// The Sunday-first indexing matches the `dayOfWeek` arrays date pickers
/// commonly accept for disabling rules.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Weekday {
    /// Sunday (index 0).
    Sunday = 0,
    /// Monday.
    Monday = 1,
    /// Tuesday.
    Tuesday = 2,
    /// Wednesday.
    Wednesday = 3,
    /// Thursday.
    Thursday = 4,
    /// Friday.
    Friday = 5,
    /// Saturday.
    Saturday = 6,
}

impl Weekday {
    /// Weekday from its 0-based, Sunday-first index (wraps modulo 7).
    pub const fn from_index(index: u32) -> Self {
        match index % 7 {
            0 => Self::Sunday,
            1 => Self::Monday,
            2 => Self::Tuesday,
            3 => Self::Wednesday,
            4 => Self::Thursday,
            5 => Self::Friday,
            _ => Self::Saturday,
        }
    }

    /// The 0-based, Sunday-first index.
    pub const fn index(self) -> u32 {
        self as u32
    }

    /// Whether this is Saturday or Sunday.
    pub const fn is_weekend(self) -> bool {
        matches!(self, Self::Saturday | Self::Sunday)
    }

    /// This weekday as a one-bit [`WeekdaySet`].
    pub const fn flag(self) -> WeekdaySet {
        match self {
            Self::Sunday => WeekdaySet::SUNDAY,
            Self::Monday => WeekdaySet::MONDAY,
            Self::Tuesday => WeekdaySet::TUESDAY,
            Self::Wednesday => WeekdaySet::WEDNESDAY,
            Self::Thursday => WeekdaySet::THURSDAY,
            Self::Friday => WeekdaySet::FRIDAY,
            Self::Saturday => WeekdaySet::SATURDAY,
        }
    }
}

bitflags::bitflags! {
    /// A set of weekdays, for rules like "weekends are disabled".
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct WeekdaySet: u8 {
        /// Sunday.
        const SUNDAY    = 1 << 0;
        /// Monday.
        const MONDAY    = 1 << 1;
        /// Tuesday.
        const TUESDAY   = 1 << 2;
        /// Wednesday.
        const WEDNESDAY = 1 << 3;
        /// Thursday.
        const THURSDAY  = 1 << 4;
        /// Friday.
        const FRIDAY    = 1 << 5;
        /// Saturday.
        const SATURDAY  = 1 << 6;
    }
}

impl WeekdaySet {
    /// Saturday and Sunday.
    pub const WEEKEND: Self = Self::SATURDAY.union(Self::SUNDAY);

    /// Monday through Friday.
    pub const WORKWEEK: Self = Self::WEEKEND.complement();

    /// Whether the set contains `weekday`.
    pub fn contains_day(self, weekday: Weekday) -> bool {
        self.contains(weekday.flag())
    }
}

bitflags::bitflags! {
    /// Render-time flags for one day cell.
    ///
    /// Produced by [`CalendarState::day_flags`]; the rendering layer maps
    /// them to styling (fill the endpoints, tint the interior, mute
    /// disabled cells, ring today).
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct DayFlags: u8 {
        /// The day is selected, or inside the selected span.
        const SELECTED    = 1 << 0;
        /// First day of a selected range.
        const RANGE_START = 1 << 1;
        /// Last day of a selected range.
        const RANGE_END   = 1 << 2;
        /// Strictly between the endpoints of a closed range.
        const IN_RANGE    = 1 << 3;
        /// The day rejects interaction.
        const DISABLED    = 1 << 4;
        /// The caller-declared current day.
        const TODAY       = 1 << 5;
    }
}

/// One disabled-day rule.
///
/// Mirrors the rule forms date pickers accept: explicit days, weekdays,
/// and open-ended cutoffs.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DayRule {
    /// Exactly these days.
    Days(KeySet<Day>),
    /// Any day falling on one of these weekdays.
    Weekdays(WeekdaySet),
    /// Every day strictly before this one.
    Before(Day),
    /// Every day strictly after this one.
    After(Day),
}

impl DayRule {
    /// Whether `day` matches this rule.
    pub fn matches(&self, day: Day) -> bool {
        match self {
            Self::Days(days) => days.contains(day),
            Self::Weekdays(set) => set.contains_day(day.weekday()),
            Self::Before(cutoff) => day < *cutoff,
            Self::After(cutoff) => day > *cutoff,
        }
    }
}

/// A disabled-day provider: a day is disabled when any rule matches.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DisabledDays {
    rules: Vec<DayRule>,
}

impl DisabledDays {
    /// No rules; every day is enabled.
    pub const fn new() -> Self {
        Self { rules: Vec::new() }
    }

    /// Build from a rule list.
    pub fn from_rules(rules: impl IntoIterator<Item = DayRule>) -> Self {
        Self {
            rules: rules.into_iter().collect(),
        }
    }

    /// Add a rule.
    pub fn push(&mut self, rule: DayRule) {
        self.rules.push(rule);
    }

    /// The rules, in evaluation order.
    pub fn rules(&self) -> &[DayRule] {
        &self.rules
    }
}

impl DisabledKeys<Day> for DisabledDays {
    fn is_disabled(&self, day: &Day) -> bool {
        self.rules.iter().any(|rule| rule.matches(*day))
    }
}

/// Date-picking state: a selection over [`Day`] keys plus per-day render
/// flags.
///
/// Runs any [`SelectionMode`]; pickers commonly use
/// [`SingleFixed`](SelectionMode::SingleFixed) for required dates,
/// [`SingleCollapsible`](SelectionMode::SingleCollapsible) for deselectable
/// ones, [`Multiple`](SelectionMode::Multiple) for day lists, and
/// [`Range`](SelectionMode::Range) for stays and periods.
///
/// The state owns no clock: "today" is whatever the caller declares through
/// [`set_today`](Self::set_today).
#[derive(Debug)]
pub struct CalendarState {
    control: SelectionControl<Day, DisabledDays>,
    today: Option<Day>,
}

impl CalendarState {
    /// An uncontrolled calendar with nothing selected.
    pub fn new(mode: SelectionMode) -> Self {
        Self {
            control: SelectionControl::uncontrolled(mode).with_disabled(DisabledDays::new()),
            today: None,
        }
    }

    /// An uncontrolled calendar seeded with `selected`.
    pub fn with_selected(mode: SelectionMode, selected: SelectionValue<Day>) -> Self {
        Self {
            control: SelectionControl::uncontrolled_with(mode, selected)
                .with_disabled(DisabledDays::new()),
            today: None,
        }
    }

    /// A controlled calendar mirroring the caller-owned `selected` value.
    pub fn controlled(mode: SelectionMode, selected: SelectionValue<Day>) -> Self {
        Self {
            control: SelectionControl::controlled(mode, selected)
                .with_disabled(DisabledDays::new()),
            today: None,
        }
    }

    /// Attach disabled-day rules.
    pub fn with_disabled_days(mut self, disabled: DisabledDays) -> Self {
        self.control.set_disabled(disabled);
        self
    }

    /// Attach a change callback; it sees every candidate selection.
    pub fn with_on_change(
        mut self,
        on_change: impl FnMut(&SelectionValue<Day>) + 'static,
    ) -> Self {
        self.control = self.control.with_on_change(on_change);
        self
    }

    /// Declare the current day (or clear it with `None`).
    pub fn set_today(&mut self, today: Option<Day>) {
        self.today = today;
    }

    /// Replace the disabled-day rules.
    pub fn set_disabled_days(&mut self, disabled: DisabledDays) {
        self.control.set_disabled(disabled);
    }

    /// Opt into notifying the unchanged value on no-op interactions.
    pub fn set_notify_on_noop(&mut self, notify: bool) {
        self.control.set_notify_on_noop(notify);
    }

    /// The selection mode this calendar runs.
    pub fn mode(&self) -> SelectionMode {
        self.control.selection_mode()
    }

    /// Whether the caller owns the selection.
    pub fn is_controlled(&self) -> bool {
        self.control.is_controlled()
    }

    /// Handle a day interaction.
    pub fn select(&mut self, day: Day) -> Outcome {
        self.control.select(day)
    }

    /// The current selection.
    pub fn selected(&self) -> &SelectionValue<Day> {
        self.control.value()
    }

    /// Whether `day` is selected (span membership for ranges).
    pub fn is_selected(&self, day: Day) -> bool {
        self.control.is_selected(day)
    }

    /// Whether `day` is disabled per the attached rules.
    pub fn is_disabled(&self, day: Day) -> bool {
        self.control.is_disabled(&day)
    }

    /// The render flags for one day cell.
    pub fn day_flags(&self, day: Day) -> DayFlags {
        let mut flags = DayFlags::empty();
        match self.control.value() {
            SelectionValue::Range(range) => {
                if range.contains(day) {
                    flags |= DayFlags::SELECTED;
                }
                if day == range.from {
                    flags |= DayFlags::RANGE_START;
                }
                if let Some(to) = range.to {
                    if day == to {
                        flags |= DayFlags::RANGE_END;
                    }
                    if range.from < day && day < to {
                        flags |= DayFlags::IN_RANGE;
                    }
                }
            }
            value => {
                if value.contains(day) {
                    flags |= DayFlags::SELECTED;
                }
            }
        }
        if self.is_disabled(day) {
            flags |= DayFlags::DISABLED;
        }
        if self.today == Some(day) {
            flags |= DayFlags::TODAY;
        }
        flags
    }

    /// Clear the selection programmatically (uncontrolled mode); fires no
    /// notification.
    pub fn clear(&mut self) {
        self.control.reset(SelectionValue::Empty);
    }

    /// Mirror the caller-owned selection (controlled mode).
    ///
    /// Returns whether the mirror changed.
    pub fn sync_selected(&mut self, selected: SelectionValue<Day>) -> bool {
        self.control.sync_external(selected)
    }
}
