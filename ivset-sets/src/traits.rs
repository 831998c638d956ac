use std::collections::HashSet;
use std::fmt::{self, Display};
use std::hash::Hash;

use num_bigint::BigInt;

pub use ivset_core::models::Interval;
use ivset_core::errors::IntervalSetResult;

/// A mutable set of labeled intervals, where each label is associated with
/// exactly one non-overlapping half-open interval `[start, end)`.
///
/// For example, `{ "A"=[0,10), "B"=[20,30) }` is an interval set with labels
/// `"A"` and `"B"`. Adding `"C"=[10,20)` to it succeeds; adding `"C"=[5,15)`
/// does not, because `[5,15)` overlaps `"A"`.
///
/// Labels are compared with `Eq` only. Two labels that print the same but are
/// not equal are distinct labels.
///
/// The trait is object safe; callers that do not care about the
/// representation hold a `Box<dyn IntervalSet<L>>`.
pub trait IntervalSet<L>
where
    L: Eq + Hash + Clone,
{
    /// Add a labeled interval to this set, if it is not already present and it
    /// does not conflict with existing intervals.
    ///
    /// Labeled intervals *conflict* if:
    /// - they have the same label with different intervals; or
    /// - they have different labels with overlapping intervals.
    ///
    /// For example, if this set is `{ "A"=[0,10), "B"=[20,30) }`,
    /// - `add("A"=[0,10))` has no effect
    /// - `add("C"=[10,20))` adds `"C"=[10,20)`
    /// - `add("A"=[10,20))` and `add("C"=[5,15))` fail with a conflict
    ///
    /// # Errors
    ///
    /// - [`IntervalSetError::InvalidRange`](ivset_core::IntervalSetError::InvalidRange)
    ///   if `start >= end`
    /// - [`IntervalSetError::IntervalConflict`](ivset_core::IntervalSetError::IntervalConflict)
    ///   on a conflict; the set is unchanged
    fn add(&mut self, start: BigInt, end: BigInt, label: L) -> IntervalSetResult<()>;

    /// Get the labels in this set, as a new collection.
    fn labels(&self) -> HashSet<L>;

    /// Get the interval associated with a label, if any.
    fn interval(&self, label: &L) -> Option<Interval>;

    /// Get every labeled interval in this set, as a new collection.
    fn entries(&self) -> Vec<(L, Interval)> {
        self.labels()
            .into_iter()
            .filter_map(|label| {
                let interval = self.interval(&label)?;
                Some((label, interval))
            })
            .collect()
    }

    /// Number of labels in this set.
    fn len(&self) -> usize {
        self.labels().len()
    }

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Write `{ A=[0,10), B=[10,20) }`, ordered by interval.
pub(crate) fn write_entries<L: Display>(
    f: &mut fmt::Formatter<'_>,
    mut entries: Vec<(L, Interval)>,
) -> fmt::Result {
    entries.sort_by(|a, b| a.1.cmp(&b.1));
    let body = entries
        .iter()
        .map(|(label, interval)| format!("{}={}", label, interval))
        .collect::<Vec<_>>()
        .join(", ");
    write!(f, "{{ {} }}", body)
}
