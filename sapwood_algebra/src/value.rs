// Copyright 2026 the Sapwood Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Selection values: the tagged union and its set/range payloads.

use alloc::vec::Vec;

use crate::mode::SelectionMode;

/// A small ordered set of selection keys.
///
/// Keys are kept sorted and deduplicated, so two sets holding the same keys
/// compare equal regardless of insertion order. The backing store is a flat
/// `Vec`: selections stay small (open accordion panels, picked dates) and a
/// linear representation beats tree structures at these sizes.
///
/// ## Example
///
/// ```
/// use sapwood_algebra::KeySet;
/// let mut set = KeySet::from_keys(["b", "a", "a"]);
/// assert_eq!(set.keys(), &["a", "b"]);
/// assert!(set.toggle("c"));
/// assert!(!set.toggle("a"));
/// assert_eq!(set.keys(), &["b", "c"]);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(
        from = "Vec<K>",
        into = "Vec<K>",
        bound(
            serialize = "K: Copy + Ord + serde::Serialize",
            deserialize = "K: Copy + Ord + serde::Deserialize<'de>"
        )
    )
)]
pub struct KeySet<K> {
    keys: Vec<K>,
}

impl<K> Default for KeySet<K> {
    fn default() -> Self {
        Self { keys: Vec::new() }
    }
}

impl<K: Copy + Ord> KeySet<K> {
    /// Create an empty set.
    pub const fn new() -> Self {
        Self { keys: Vec::new() }
    }

    /// Build a set from arbitrary keys, sorting and deduplicating.
    pub fn from_keys(keys: impl IntoIterator<Item = K>) -> Self {
        let mut keys: Vec<K> = keys.into_iter().collect();
        keys.sort_unstable();
        keys.dedup();
        Self { keys }
    }

    /// Number of keys in the set.
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    /// Whether the set holds no keys.
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Whether `key` is in the set.
    pub fn contains(&self, key: K) -> bool {
        self.keys.binary_search(&key).is_ok()
    }

    /// Insert `key`, returning whether the set changed.
    pub fn insert(&mut self, key: K) -> bool {
        match self.keys.binary_search(&key) {
            Ok(_) => false,
            Err(at) => {
                self.keys.insert(at, key);
                true
            }
        }
    }

    /// Remove `key`, returning whether the set changed.
    pub fn remove(&mut self, key: K) -> bool {
        match self.keys.binary_search(&key) {
            Ok(at) => {
                self.keys.remove(at);
                true
            }
            Err(_) => false,
        }
    }

    /// Insert `key` if absent, remove it if present.
    ///
    /// Returns whether the key is in the set afterwards.
    pub fn toggle(&mut self, key: K) -> bool {
        match self.keys.binary_search(&key) {
            Ok(at) => {
                self.keys.remove(at);
                false
            }
            Err(at) => {
                self.keys.insert(at, key);
                true
            }
        }
    }

    /// Drop all keys.
    pub fn clear(&mut self) {
        self.keys.clear();
    }

    /// The keys in ascending order.
    pub fn keys(&self) -> &[K] {
        &self.keys
    }

    /// Iterate over the keys in ascending order.
    pub fn iter(&self) -> core::slice::Iter<'_, K> {
        self.keys.iter()
    }
}

impl<K: Copy + Ord> FromIterator<K> for KeySet<K> {
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        Self::from_keys(iter)
    }
}

impl<K: Copy + Ord, const N: usize> From<[K; N]> for KeySet<K> {
    fn from(keys: [K; N]) -> Self {
        Self::from_keys(keys)
    }
}

impl<K: Copy + Ord> From<Vec<K>> for KeySet<K> {
    fn from(keys: Vec<K>) -> Self {
        Self::from_keys(keys)
    }
}

impl<K: Copy> From<KeySet<K>> for Vec<K> {
    fn from(set: KeySet<K>) -> Self {
        set.keys
    }
}

impl<'a, K> IntoIterator for &'a KeySet<K> {
    type Item = &'a K;
    type IntoIter = core::slice::Iter<'a, K>;

    fn into_iter(self) -> Self::IntoIter {
        self.keys.iter()
    }
}

/// A span of keys: a fixed start and an optional end.
///
/// A closed range keeps `from <= to`; the constructors and the transition
/// table uphold that ordering. An open range (`to` is `None`) is a started
/// span awaiting its endpoint.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct KeyRange<K> {
    /// Start of the span (inclusive).
    pub from: K,
    /// End of the span (inclusive), once chosen.
    pub to: Option<K>,
}

impl<K: Copy + Ord> KeyRange<K> {
    /// Start an open range at `from`.
    pub const fn open(from: K) -> Self {
        Self { from, to: None }
    }

    /// Build a closed range, ordering the endpoints.
    pub fn closed(a: K, b: K) -> Self {
        if b < a {
            Self { from: b, to: Some(a) }
        } else {
            Self { from: a, to: Some(b) }
        }
    }

    /// Whether both endpoints are chosen.
    pub const fn is_closed(&self) -> bool {
        self.to.is_some()
    }

    /// Whether `key` lies inside the span.
    ///
    /// An open range contains only its start.
    pub fn contains(&self, key: K) -> bool {
        match self.to {
            Some(to) => self.from <= key && key <= to,
            None => key == self.from,
        }
    }
}

/// The current selection of a widget.
///
/// One widget holds exactly one shape at a time, decided by its
/// [`SelectionMode`]: the single modes hold [`Single`](Self::Single),
/// multiple holds [`Multiple`](Self::Multiple), range holds
/// [`Range`](Self::Range), and [`Empty`](Self::Empty) is legal everywhere.
/// Equality is structural, and [`KeySet`] keeps itself canonical, so equal
/// selections always compare equal.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(bound(
        serialize = "K: Copy + Ord + serde::Serialize",
        deserialize = "K: Copy + Ord + serde::Deserialize<'de>"
    ))
)]
pub enum SelectionValue<K> {
    /// Nothing selected.
    Empty,
    /// One selected key.
    Single(K),
    /// A set of selected keys.
    Multiple(KeySet<K>),
    /// A span of selected keys.
    Range(KeyRange<K>),
}

impl<K> Default for SelectionValue<K> {
    fn default() -> Self {
        Self::Empty
    }
}

impl<K: Copy + Ord> SelectionValue<K> {
    /// Whether nothing is selected.
    ///
    /// `Empty` and an emptied key set are distinct representations; both
    /// report true here.
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Empty => true,
            Self::Single(_) => false,
            Self::Multiple(set) => set.is_empty(),
            Self::Range(_) => false,
        }
    }

    /// Whether `key` is selected.
    ///
    /// For ranges this is span membership: every key between the endpoints
    /// of a closed range counts as selected, not only the two that were
    /// interacted with.
    pub fn contains(&self, key: K) -> bool {
        match self {
            Self::Empty => false,
            Self::Single(held) => *held == key,
            Self::Multiple(set) => set.contains(key),
            Self::Range(range) => range.contains(key),
        }
    }

    /// Whether this value's shape is legal under `mode`.
    pub fn fits(&self, mode: SelectionMode) -> bool {
        match self {
            Self::Empty => true,
            Self::Single(_) => mode.is_single(),
            Self::Multiple(_) => mode == SelectionMode::Multiple,
            Self::Range(_) => mode == SelectionMode::Range,
        }
    }

    /// Normalize the value into a shape legal under `mode`.
    ///
    /// Legal shapes pass through unchanged. A single key survives a switch
    /// to a wider mode: it becomes a one-element set, or an open range
    /// starting there. Every other mismatch resets to `Empty`. Widgets that
    /// let the host swap modes at runtime keep whatever selection still
    /// means something in the new mode.
    pub fn coerce(self, mode: SelectionMode) -> Self {
        if self.fits(mode) {
            return self;
        }
        match (self, mode) {
            (Self::Single(k), SelectionMode::Multiple) => Self::Multiple(KeySet::from_keys([k])),
            (Self::Single(k), SelectionMode::Range) => Self::Range(KeyRange::open(k)),
            _ => Self::Empty,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keyset_is_canonical() {
        let a = KeySet::from_keys([3_u8, 1, 2, 1]);
        let b = KeySet::from_keys([1_u8, 2, 3]);
        assert_eq!(a, b);
        assert_eq!(a.keys(), &[1, 2, 3]);
    }

    #[test]
    fn keyset_toggle_round_trip() {
        let mut set: KeySet<u8> = KeySet::new();
        assert!(set.toggle(7));
        assert!(set.contains(7));
        assert!(!set.toggle(7));
        assert!(set.is_empty());
    }

    #[test]
    fn keyset_insert_remove_report_change() {
        let mut set = KeySet::from_keys([1_u8, 2]);
        assert!(!set.insert(2));
        assert!(set.insert(3));
        assert!(set.remove(1));
        assert!(!set.remove(1));
        assert_eq!(set.keys(), &[2, 3]);
    }

    #[test]
    fn closed_range_orders_endpoints() {
        let range = KeyRange::closed(9_u8, 4);
        assert_eq!(range.from, 4);
        assert_eq!(range.to, Some(9));
        assert!(range.is_closed());
    }

    #[test]
    fn range_membership_is_inclusive() {
        let range = KeyRange::closed(4_u8, 9);
        assert!(range.contains(4));
        assert!(range.contains(6));
        assert!(range.contains(9));
        assert!(!range.contains(3));
        assert!(!range.contains(10));
    }

    #[test]
    fn open_range_contains_only_its_start() {
        let range = KeyRange::open(5_u8);
        assert!(range.contains(5));
        assert!(!range.contains(6));
    }

    #[test]
    fn contains_over_every_shape() {
        assert!(!SelectionValue::<u8>::Empty.contains(1));
        assert!(SelectionValue::Single(1_u8).contains(1));
        assert!(!SelectionValue::Single(1_u8).contains(2));

        let multi = SelectionValue::Multiple(KeySet::from_keys([1_u8, 3]));
        assert!(multi.contains(3));
        assert!(!multi.contains(2));

        let range = SelectionValue::Range(KeyRange::closed(1_u8, 3));
        assert!(range.contains(2));
        assert!(!range.contains(4));
    }

    #[test]
    fn emptied_set_reports_empty() {
        let value = SelectionValue::Multiple(KeySet::<u8>::new());
        assert!(value.is_empty());
        assert_ne!(value, SelectionValue::Empty);
    }

    #[test]
    fn coerce_keeps_legal_shapes() {
        let single = SelectionValue::Single(2_u8);
        assert_eq!(
            single.clone().coerce(SelectionMode::SingleFixed),
            SelectionValue::Single(2)
        );
        assert_eq!(
            single.coerce(SelectionMode::SingleCollapsible),
            SelectionValue::Single(2)
        );

        let multi = SelectionValue::Multiple(KeySet::from_keys([2_u8]));
        assert_eq!(multi.clone().coerce(SelectionMode::Multiple), multi);
    }

    #[test]
    fn coerce_widens_single() {
        let single = SelectionValue::Single(2_u8);
        assert_eq!(
            single.clone().coerce(SelectionMode::Multiple),
            SelectionValue::Multiple(KeySet::from_keys([2]))
        );
        assert_eq!(
            single.coerce(SelectionMode::Range),
            SelectionValue::Range(KeyRange::open(2))
        );
    }

    #[test]
    fn coerce_resets_unrepresentable_shapes() {
        let multi = SelectionValue::Multiple(KeySet::from_keys([1_u8, 2]));
        assert_eq!(multi.coerce(SelectionMode::SingleFixed), SelectionValue::Empty);

        let range = SelectionValue::Range(KeyRange::closed(1_u8, 5));
        assert_eq!(range.clone().coerce(SelectionMode::Multiple), SelectionValue::Empty);
        assert_eq!(range.coerce(SelectionMode::SingleCollapsible), SelectionValue::Empty);
    }
}
