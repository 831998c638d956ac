use std::collections::{BTreeMap, HashMap, HashSet};
use std::fmt::{self, Display};
use std::hash::Hash;

use log::{debug, trace};
use num_bigint::BigInt;

use super::IntervalSet;
use super::traits::write_entries;
use ivset_core::errors::{IntervalSetError, IntervalSetResult};
use ivset_core::models::Interval;

/// An [`IntervalSet`] indexed primarily by label.
///
/// Each label maps to the start of its interval, and an ordered map takes each
/// start to the matching end. Because stored intervals never overlap, sorting
/// them by start also sorts them by end, so a new interval `[start, end)` can
/// only collide with the last stored interval that starts before `end`.
///
/// # Examples
///
/// ```
/// use ivset_sets::{IntervalSet, MapIntervalSet, Interval};
///
/// let mut set = MapIntervalSet::new();
/// set.add((-10).into(), 10.into(), "A").unwrap();
///
/// assert_eq!(set.interval(&"A"), Some(Interval::new(-10, 10).unwrap()));
/// assert_eq!(set.interval(&"B"), None);
/// ```
#[derive(Debug, Clone)]
pub struct MapIntervalSet<L> {
    /// Start of the interval bound to each label
    start_map: HashMap<L, BigInt>,
    /// End of the interval beginning at each start, ordered by start
    end_map: BTreeMap<BigInt, BigInt>,
}

// Abstraction function:
//   AF(start_map, end_map) = { (l, [s, end_map[s])) | (l, s) in start_map }
// Representation invariant:
//   - start_map and end_map have the same size, and every start in start_map
//     is a key of end_map
//   - every stored interval has start < end
//   - walking end_map in key order, each end is <= the next start
// Safety from rep exposure:
//   both maps are private; labels(), interval() and entries() return
//   freshly built values

impl<L> Default for MapIntervalSet<L> {
    fn default() -> Self {
        MapIntervalSet {
            start_map: HashMap::new(),
            end_map: BTreeMap::new(),
        }
    }
}

impl<L> MapIntervalSet<L>
where
    L: Eq + Hash + Clone,
{
    /// Create an empty interval set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether `[start, end)` intersects any stored interval.
    fn overlaps_existing(&self, start: &BigInt, end: &BigInt) -> bool {
        self.end_map
            .range::<BigInt, _>(..end)
            .next_back()
            .is_some_and(|(_, existing_end)| existing_end > start)
    }

    fn check_rep(&self) {
        debug_assert_eq!(self.start_map.len(), self.end_map.len());
        for start in self.start_map.values() {
            debug_assert!(self.end_map.contains_key(start));
        }
        let mut previous_end: Option<&BigInt> = None;
        for (start, end) in &self.end_map {
            debug_assert!(start < end, "empty interval [{},{})", start, end);
            if let Some(previous_end) = previous_end {
                debug_assert!(previous_end <= start, "overlapping intervals at {}", start);
            }
            previous_end = Some(end);
        }
    }
}

impl<L> IntervalSet<L> for MapIntervalSet<L>
where
    L: Eq + Hash + Clone,
{
    fn add(&mut self, start: BigInt, end: BigInt, label: L) -> IntervalSetResult<()> {
        if start >= end {
            return Err(IntervalSetError::InvalidRange { start, end });
        }

        if let Some(existing_start) = self.start_map.get(&label) {
            if *existing_start == start && self.end_map.get(existing_start) == Some(&end) {
                return Ok(());
            }
            debug!(
                "rejecting [{},{}): label is already bound to a different interval",
                start, end
            );
            return Err(IntervalSetError::IntervalConflict { start, end });
        }

        if self.overlaps_existing(&start, &end) {
            debug!("rejecting [{},{}): overlaps an existing interval", start, end);
            return Err(IntervalSetError::IntervalConflict { start, end });
        }

        trace!("adding [{},{})", start, end);
        self.end_map.insert(start.clone(), end);
        self.start_map.insert(label, start);
        self.check_rep();
        Ok(())
    }

    fn labels(&self) -> HashSet<L> {
        self.start_map.keys().cloned().collect()
    }

    fn interval(&self, label: &L) -> Option<Interval> {
        let start = self.start_map.get(label)?;
        let end = self.end_map.get(start)?;
        Interval::new(start.clone(), end.clone()).ok()
    }

    fn entries(&self) -> Vec<(L, Interval)> {
        self.start_map
            .iter()
            .filter_map(|(label, start)| {
                let end = self.end_map.get(start)?;
                let interval = Interval::new(start.clone(), end.clone()).ok()?;
                Some((label.clone(), interval))
            })
            .collect()
    }

    fn len(&self) -> usize {
        self.start_map.len()
    }
}

impl<L> Display for MapIntervalSet<L>
where
    L: Eq + Hash + Clone + Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_entries(f, self.entries())
    }
}
