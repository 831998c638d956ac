//! Sets where each label owns one or more intervals.
//!
//! This module provides [`MultiIntervalSet`], which keeps one [`IntervalSet`]
//! per label (keyed by insertion index) and enforces the non-overlap invariant
//! across all of them at once.
//!
//! # Examples
//!
//! ```
//! use ivset_sets::{IntervalSet, MapIntervalSet, MultiIntervalSet};
//!
//! let mut seed = MapIntervalSet::new();
//! seed.add(0.into(), 10.into(), "A").unwrap();
//! seed.add(20.into(), 30.into(), "B").unwrap();
//!
//! let mut multi = MultiIntervalSet::from_interval_set(&seed).unwrap();
//! multi.add(10.into(), 20.into(), "A").unwrap();
//!
//! // [25, 35) overlaps "B"
//! assert!(multi.add(25.into(), 35.into(), "C").unwrap_err().is_conflict());
//! assert_eq!(multi.intervals(&"A").len(), 2);
//! ```

use std::collections::{HashMap, HashSet};
use std::fmt::{self, Debug, Display};
use std::hash::Hash;

use log::{debug, trace};
use num_bigint::BigInt;

use crate::{IntervalSet, IntervalSetKind};
use ivset_core::errors::{IntervalSetError, IntervalSetResult};
use ivset_core::models::Interval;

/// A mutable set of labeled intervals, where each label is associated with one
/// or more non-overlapping half-open intervals `[start, end)`. Neither
/// intervals with the same label nor with different labels may overlap.
///
/// For example, `{ "A"=[[0,10)], "B"=[[20,30)] }` is a multi-interval set. We
/// could add `"A"=[10,20)` to it to obtain
/// `{ "A"=[[0,10),[10,20)], "B"=[[20,30)] }`.
///
/// Each label's intervals live in an [`IntervalSet<usize>`] built from the
/// configured [`IntervalSetKind`].
pub struct MultiIntervalSet<L> {
    interval_sets: HashMap<L, Box<dyn IntervalSet<usize>>>,
    kind: IntervalSetKind,
}

// Abstraction function:
//   AF(interval_sets) = { (l, i) | l in interval_sets, i an interval of interval_sets[l] }
// Representation invariant:
//   - every per-label set is non-empty
//   - the sub-labels of each per-label set are exactly 0..len
//   - no two intervals overlap, across all labels
// Safety from rep exposure:
//   interval_sets is private; labels() and intervals() return new collections

impl<L> Default for MultiIntervalSet<L> {
    fn default() -> Self {
        MultiIntervalSet {
            interval_sets: HashMap::new(),
            kind: IntervalSetKind::default(),
        }
    }
}

impl<L> MultiIntervalSet<L>
where
    L: Eq + Hash + Clone,
{
    /// Create an empty multi-interval set backed by map-indexed sets.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty multi-interval set whose per-label sets are of `kind`.
    pub fn with_kind(kind: IntervalSetKind) -> Self {
        MultiIntervalSet {
            interval_sets: HashMap::new(),
            kind,
        }
    }

    /// Create a multi-interval set containing every labeled interval of
    /// `initial`.
    ///
    /// # Errors
    ///
    /// Any error returned by [`MultiIntervalSet::add`] while copying the
    /// intervals over.
    pub fn from_interval_set<S>(initial: &S) -> IntervalSetResult<Self>
    where
        S: IntervalSet<L> + ?Sized,
    {
        Self::from_interval_set_with_kind(initial, IntervalSetKind::default())
    }

    /// Like [`MultiIntervalSet::from_interval_set`], with per-label sets of
    /// `kind`.
    pub fn from_interval_set_with_kind<S>(
        initial: &S,
        kind: IntervalSetKind,
    ) -> IntervalSetResult<Self>
    where
        S: IntervalSet<L> + ?Sized,
    {
        let mut multi = Self::with_kind(kind);
        for (label, interval) in initial.entries() {
            let (start, end) = interval.into_bounds();
            multi.add(start, end, label)?;
        }
        Ok(multi)
    }

    /// The kind of [`IntervalSet`] backing each label.
    pub fn kind(&self) -> IntervalSetKind {
        self.kind
    }

    /// Add a labeled interval to this set, if it is not already present and it
    /// does not conflict with existing intervals.
    ///
    /// Labeled intervals *conflict* if:
    /// - they have the same label with different, overlapping intervals; or
    /// - they have different labels with overlapping intervals.
    ///
    /// For example, if this set is `{ "A"=[[0,10),[20,30)] }`,
    /// - `add("A"=[0,10))` has no effect
    /// - `add("B"=[10,20))` adds `"B"=[[10,20)]`
    /// - `add("C"=[20,30))` fails with a conflict
    ///
    /// # Errors
    ///
    /// - [`IntervalSetError::InvalidRange`] if `start >= end`
    /// - [`IntervalSetError::IntervalConflict`] on a conflict; the set is
    ///   unchanged
    pub fn add(&mut self, start: BigInt, end: BigInt, label: L) -> IntervalSetResult<()> {
        if start >= end {
            return Err(IntervalSetError::InvalidRange { start, end });
        }

        for (existing_label, set) in &self.interval_sets {
            for (_, interval) in set.entries() {
                if *existing_label == label && interval.has_bounds(&start, &end) {
                    return Ok(());
                }
                if interval.overlap(&start, &end) {
                    debug!("rejecting [{},{}): overlaps {}", start, end, interval);
                    return Err(IntervalSetError::IntervalConflict { start, end });
                }
            }
        }

        match self.interval_sets.get_mut(&label) {
            Some(set) => {
                let index = set.len();
                trace!("adding [{},{}) as sub-label {}", start, end, index);
                set.add(start, end, index)?;
            }
            None => {
                trace!("adding [{},{}) under a new label", start, end);
                let mut set = self.kind.build::<usize>();
                set.add(start, end, 0)?;
                self.interval_sets.insert(label, set);
            }
        }
        self.check_rep();
        Ok(())
    }

    /// Remove all intervals from this set.
    ///
    /// Returns `true` if this set was non-empty, and `false` otherwise.
    pub fn clear(&mut self) -> bool {
        let was_non_empty = !self.interval_sets.is_empty();
        self.interval_sets.clear();
        self.check_rep();
        was_non_empty
    }

    /// Get the labels in this set, as a new collection.
    pub fn labels(&self) -> HashSet<L> {
        self.interval_sets.keys().cloned().collect()
    }

    /// Get all the intervals in this set associated with a given label, if
    /// any. The returned set has integer labels that act as indices: label 0
    /// is associated with the lowest interval, 1 the next, and so on.
    ///
    /// For example, if this set is `{ "A"=[[0,10),[20,30)], "B"=[[10,20)] }`,
    /// `intervals("A")` returns `{ 0=[0,10), 1=[20,30) }`.
    ///
    /// The result is rebuilt on every call; an absent label yields an empty set.
    pub fn intervals(&self, label: &L) -> Box<dyn IntervalSet<usize>> {
        let mut result = self.kind.build::<usize>();
        let Some(set) = self.interval_sets.get(label) else {
            return result;
        };

        let mut sorted: Vec<Interval> = set.entries().into_iter().map(|(_, i)| i).collect();
        sorted.sort();
        for (index, interval) in sorted.into_iter().enumerate() {
            let (start, end) = interval.into_bounds();
            let added = result.add(start, end, index);
            debug_assert!(added.is_ok(), "intervals of one label overlap");
        }
        result
    }

    /// Total number of intervals, across all labels.
    pub fn len(&self) -> usize {
        self.interval_sets.values().map(|set| set.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.interval_sets.is_empty()
    }

    fn check_rep(&self) {
        // collects and sorts every interval
        if !cfg!(debug_assertions) {
            return;
        }
        let mut all: Vec<Interval> = Vec::new();
        for set in self.interval_sets.values() {
            debug_assert!(!set.is_empty(), "label with no intervals");
            let mut sub_labels: Vec<usize> = set.labels().into_iter().collect();
            sub_labels.sort_unstable();
            debug_assert!(sub_labels.iter().copied().eq(0..set.len()));
            all.extend(set.entries().into_iter().map(|(_, i)| i));
        }
        all.sort();
        for pair in all.windows(2) {
            debug_assert!(
                !pair[0].overlaps(&pair[1]),
                "overlapping intervals {} and {}",
                pair[0],
                pair[1]
            );
        }
    }
}

impl<L> Display for MultiIntervalSet<L>
where
    L: Eq + Hash + Clone + Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut by_label: Vec<(Interval, String)> = self
            .interval_sets
            .keys()
            .filter_map(|label| {
                let intervals = self.intervals(label);
                let lowest = intervals.interval(&0)?;
                let rendered: Vec<String> = (0..intervals.len())
                    .filter_map(|i| intervals.interval(&i))
                    .map(|i| i.to_string())
                    .collect();
                Some((lowest, format!("{}=[{}]", label, rendered.join(","))))
            })
            .collect();
        by_label.sort();
        let body: Vec<String> = by_label.into_iter().map(|(_, s)| s).collect();
        write!(f, "{{{}}}", body.join(", "))
    }
}

impl<L> Debug for MultiIntervalSet<L>
where
    L: Eq + Hash + Clone + Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut map = f.debug_map();
        for label in self.interval_sets.keys() {
            let intervals = self.intervals(label);
            let ordered: Vec<Interval> =
                (0..intervals.len()).filter_map(|i| intervals.interval(&i)).collect();
            map.entry(label, &ordered);
        }
        map.finish()
    }
}
