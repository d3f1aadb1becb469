// Copyright 2026 the Sapwood Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The per-mode transition table.
//!
//! [`transition`] is the entire interaction model: given the selection mode,
//! the current value, and an interacted key, it either produces the next
//! value or reports that the interaction changes nothing. It is pure. The
//! dual-mode plumbing around it (who owns the value, who gets notified,
//! which keys are disabled) lives in `sapwood_control`.

use crate::mode::SelectionMode;
use crate::value::{KeyRange, KeySet, SelectionValue};

/// Compute the next selection after interacting with `key`, or `None` when
/// the interaction changes nothing.
///
/// The table, by mode:
///
/// - [`SingleFixed`](SelectionMode::SingleFixed): any key replaces the
///   selection; the held key is a no-op.
/// - [`SingleCollapsible`](SelectionMode::SingleCollapsible): any key
///   replaces the selection; the held key clears it.
/// - [`Multiple`](SelectionMode::Multiple): the key's membership in the set
///   is toggled.
/// - [`Range`](SelectionMode::Range): the first key opens a range; a second
///   key at or past the start closes it; a second key before the start
///   restarts the range there; any key after a closed range restarts.
///
/// A `current` whose shape does not fit `mode` is first normalized with
/// [`SelectionValue::coerce`], so exactly one row applies to every
/// `(mode, current, key)` triple.
///
/// `None` strictly means "nothing would change": callers can skip change
/// notification and re-renders on it.
pub fn transition<K: Copy + Ord>(
    mode: SelectionMode,
    current: &SelectionValue<K>,
    key: K,
) -> Option<SelectionValue<K>> {
    let current = current.clone().coerce(mode);
    match mode {
        SelectionMode::SingleFixed => match current {
            SelectionValue::Single(held) if held == key => None,
            _ => Some(SelectionValue::Single(key)),
        },
        SelectionMode::SingleCollapsible => match current {
            SelectionValue::Single(held) if held == key => Some(SelectionValue::Empty),
            _ => Some(SelectionValue::Single(key)),
        },
        SelectionMode::Multiple => {
            let mut set = match current {
                SelectionValue::Multiple(set) => set,
                _ => KeySet::new(),
            };
            set.toggle(key);
            Some(SelectionValue::Multiple(set))
        }
        SelectionMode::Range => Some(SelectionValue::Range(next_range(current, key))),
    }
}

/// Range rows of the table: grow an open range in order, restart otherwise.
///
/// Closing on the start key itself yields a one-day span (`from == to`),
/// the "same key twice" edge.
fn next_range<K: Copy + Ord>(current: SelectionValue<K>, key: K) -> KeyRange<K> {
    match current {
        SelectionValue::Range(KeyRange { from, to: None }) if from <= key => KeyRange {
            from,
            to: Some(key),
        },
        _ => KeyRange::open(key),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_fixed_selects_fresh_key() {
        let next = transition(SelectionMode::SingleFixed, &SelectionValue::Empty, 1_u8);
        assert_eq!(next, Some(SelectionValue::Single(1)));
    }

    #[test]
    fn single_fixed_replaces_other_key() {
        let current = SelectionValue::Single(1_u8);
        let next = transition(SelectionMode::SingleFixed, &current, 2);
        assert_eq!(next, Some(SelectionValue::Single(2)));
    }

    // Re-selecting the held key must not clear it, and must not read as a
    // change either.
    #[test]
    fn single_fixed_reselect_is_no_op() {
        let current = SelectionValue::Single(1_u8);
        assert_eq!(transition(SelectionMode::SingleFixed, &current, 1), None);
    }

    #[test]
    fn single_collapsible_reselect_clears() {
        let current = SelectionValue::Single(1_u8);
        let next = transition(SelectionMode::SingleCollapsible, &current, 1);
        assert_eq!(next, Some(SelectionValue::Empty));
    }

    #[test]
    fn single_collapsible_toggle_symmetry() {
        let mode = SelectionMode::SingleCollapsible;
        let mut value: SelectionValue<u8> = SelectionValue::Empty;
        value = transition(mode, &value, 4).unwrap();
        assert_eq!(value, SelectionValue::Single(4));
        value = transition(mode, &value, 4).unwrap();
        assert_eq!(value, SelectionValue::Empty);
    }

    #[test]
    fn multiple_adds_absent_key() {
        let current = SelectionValue::Multiple(KeySet::from_keys([1_u8]));
        let next = transition(SelectionMode::Multiple, &current, 3).unwrap();
        assert_eq!(next, SelectionValue::Multiple(KeySet::from_keys([1, 3])));
    }

    #[test]
    fn multiple_removes_present_key() {
        let current = SelectionValue::Multiple(KeySet::from_keys([1_u8, 3]));
        let next = transition(SelectionMode::Multiple, &current, 3).unwrap();
        assert_eq!(next, SelectionValue::Multiple(KeySet::from_keys([1])));
    }

    #[test]
    fn multiple_double_toggle_is_identity() {
        let mode = SelectionMode::Multiple;
        let start = SelectionValue::Multiple(KeySet::from_keys([2_u8, 5]));
        let once = transition(mode, &start, 9).unwrap();
        let twice = transition(mode, &once, 9).unwrap();
        assert_eq!(twice, start);
    }

    // Removing the last key keeps the Multiple shape; emptiness is a state,
    // not a shape change.
    #[test]
    fn multiple_empties_into_empty_set() {
        let current = SelectionValue::Multiple(KeySet::from_keys([6_u8]));
        let next = transition(SelectionMode::Multiple, &current, 6).unwrap();
        assert_eq!(next, SelectionValue::Multiple(KeySet::new()));
        assert!(next.is_empty());
    }

    #[test]
    fn multiple_from_empty_starts_a_set() {
        let next = transition(SelectionMode::Multiple, &SelectionValue::Empty, 2_u8).unwrap();
        assert_eq!(next, SelectionValue::Multiple(KeySet::from_keys([2])));
    }

    #[test]
    fn range_first_key_opens() {
        let next = transition(SelectionMode::Range, &SelectionValue::Empty, 10_u8).unwrap();
        assert_eq!(next, SelectionValue::Range(KeyRange::open(10)));
    }

    #[test]
    fn range_in_order_key_closes() {
        let current = SelectionValue::Range(KeyRange::open(10_u8));
        let next = transition(SelectionMode::Range, &current, 15).unwrap();
        assert_eq!(next, SelectionValue::Range(KeyRange::closed(10, 15)));
    }

    // 10 then 5 restarts at 5; the span never inverts.
    #[test]
    fn range_earlier_key_restarts() {
        let current = SelectionValue::Range(KeyRange::open(10_u8));
        let next = transition(SelectionMode::Range, &current, 5).unwrap();
        assert_eq!(next, SelectionValue::Range(KeyRange::open(5)));
    }

    #[test]
    fn range_same_key_closes_one_item_span() {
        let current = SelectionValue::Range(KeyRange::open(10_u8));
        let next = transition(SelectionMode::Range, &current, 10).unwrap();
        assert_eq!(next, SelectionValue::Range(KeyRange::closed(10, 10)));
    }

    #[test]
    fn range_restart_after_closed() {
        let current = SelectionValue::Range(KeyRange::closed(10_u8, 15));
        let next = transition(SelectionMode::Range, &current, 12).unwrap();
        assert_eq!(next, SelectionValue::Range(KeyRange::open(12)));
    }

    // A value left over from another mode is normalized before the table
    // applies, so the triple always hits exactly one row.
    #[test]
    fn mismatched_shape_is_normalized_first() {
        let current = SelectionValue::Single(1_u8);
        let next = transition(SelectionMode::Multiple, &current, 3).unwrap();
        assert_eq!(next, SelectionValue::Multiple(KeySet::from_keys([1, 3])));

        let current = SelectionValue::Multiple(KeySet::from_keys([1_u8, 2]));
        let next = transition(SelectionMode::SingleFixed, &current, 3).unwrap();
        assert_eq!(next, SelectionValue::Single(3));
    }
}
