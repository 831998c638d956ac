use std::collections::HashSet;
use std::fmt::{self, Display};
use std::hash::Hash;

use log::{debug, trace};
use num_bigint::BigInt;

use super::IntervalSet;
use super::traits::write_entries;
use ivset_core::errors::{IntervalSetError, IntervalSetResult};
use ivset_core::models::Interval;

/// An [`IntervalSet`] stored as two parallel lists.
///
/// `label_list[i]` owns the interval `[bound_list[2i], bound_list[2i + 1])`.
/// Entries keep insertion order and every operation is a linear scan, which is
/// all a small set needs.
///
/// # Examples
///
/// ```
/// use ivset_sets::{ArrayIntervalSet, IntervalSet};
///
/// let mut set = ArrayIntervalSet::new();
/// set.add(0.into(), 10.into(), 'a').unwrap();
/// set.add(10.into(), 20.into(), 'b').unwrap();
///
/// assert!(set.add(15.into(), 25.into(), 'c').is_err());
/// assert_eq!(set.to_string(), "{ a=[0,10), b=[10,20) }");
/// ```
#[derive(Debug, Clone)]
pub struct ArrayIntervalSet<L> {
    label_list: Vec<L>,
    bound_list: Vec<BigInt>,
}

// Abstraction function:
//   AF(label_list, bound_list) =
//     { (label_list[i], [bound_list[2i], bound_list[2i+1])) | 0 <= i < label_list.len() }
// Representation invariant:
//   - bound_list.len() == 2 * label_list.len()
//   - labels in label_list are distinct
//   - bound_list[2i] < bound_list[2i+1] for every i
//   - no two intervals overlap
// Safety from rep exposure:
//   both lists are private; labels are cloned out, intervals are rebuilt on
//   every read

impl<L> Default for ArrayIntervalSet<L> {
    fn default() -> Self {
        ArrayIntervalSet {
            label_list: Vec::new(),
            bound_list: Vec::new(),
        }
    }
}

impl<L> ArrayIntervalSet<L>
where
    L: Eq + Hash + Clone,
{
    /// Create an empty interval set.
    pub fn new() -> Self {
        Self::default()
    }

    fn position(&self, label: &L) -> Option<usize> {
        self.label_list.iter().position(|l| l == label)
    }

    /// Bounds of the `index`th interval.
    fn bounds(&self, index: usize) -> (&BigInt, &BigInt) {
        (&self.bound_list[index * 2], &self.bound_list[index * 2 + 1])
    }

    fn check_rep(&self) {
        if !cfg!(debug_assertions) {
            return;
        }
        debug_assert_eq!(self.label_list.len() * 2, self.bound_list.len());
        for i in 0..self.label_list.len() {
            let (start, end) = self.bounds(i);
            debug_assert!(start < end, "empty interval [{},{})", start, end);
            for j in (i + 1)..self.label_list.len() {
                let (other_start, other_end) = self.bounds(j);
                debug_assert!(self.label_list[i] != self.label_list[j], "duplicate label");
                debug_assert!(
                    !(start < other_end && other_start < end),
                    "overlapping intervals [{},{}) and [{},{})",
                    start,
                    end,
                    other_start,
                    other_end
                );
            }
        }
    }
}

impl<L> IntervalSet<L> for ArrayIntervalSet<L>
where
    L: Eq + Hash + Clone,
{
    fn add(&mut self, start: BigInt, end: BigInt, label: L) -> IntervalSetResult<()> {
        if start >= end {
            return Err(IntervalSetError::InvalidRange { start, end });
        }

        if let Some(index) = self.position(&label) {
            let (existing_start, existing_end) = self.bounds(index);
            if *existing_start == start && *existing_end == end {
                return Ok(());
            }
            debug!(
                "rejecting [{},{}): label is already bound to [{},{})",
                start, end, existing_start, existing_end
            );
            return Err(IntervalSetError::IntervalConflict { start, end });
        }

        let conflict = self
            .bound_list
            .chunks_exact(2)
            .any(|pair| start < pair[1] && pair[0] < end);
        if conflict {
            debug!("rejecting [{},{}): overlaps an existing interval", start, end);
            return Err(IntervalSetError::IntervalConflict { start, end });
        }

        trace!("adding [{},{}) at index {}", start, end, self.label_list.len());
        self.label_list.push(label);
        self.bound_list.push(start);
        self.bound_list.push(end);
        self.check_rep();
        Ok(())
    }

    fn labels(&self) -> HashSet<L> {
        self.label_list.iter().cloned().collect()
    }

    fn interval(&self, label: &L) -> Option<Interval> {
        let index = self.position(label)?;
        let (start, end) = self.bounds(index);
        Interval::new(start.clone(), end.clone()).ok()
    }

    fn entries(&self) -> Vec<(L, Interval)> {
        self.label_list
            .iter()
            .zip(self.bound_list.chunks_exact(2))
            .filter_map(|(label, pair)| {
                let interval = Interval::new(pair[0].clone(), pair[1].clone()).ok()?;
                Some((label.clone(), interval))
            })
            .collect()
    }

    fn len(&self) -> usize {
        self.label_list.len()
    }
}

impl<L> Display for ArrayIntervalSet<L>
where
    L: Eq + Hash + Clone + Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_entries(f, self.entries())
    }
}
