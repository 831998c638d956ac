//! Labeled half-open interval sets with conflict detection.
//!
//! This crate provides the [`IntervalSet`] trait, a mutable collection that
//! binds each label to exactly one half-open interval `[start, end)` while
//! keeping every interval in the set pairwise non-overlapping, together with
//! two interchangeable implementations and the [`MultiIntervalSet`] built on
//! top of them.
//!
//! ## Features
//!
//! - **Conflict detection**: an `add` that would break the non-overlap
//!   invariant fails with [`IntervalSetError::IntervalConflict`] and leaves
//!   the set untouched
//! - **Arbitrary-precision bounds**: all bounds are [`num_bigint::BigInt`]
//! - **No rep exposure**: every accessor returns a fresh copy
//!
//! ## Quick Start
//!
//! ```rust
//! use ivset_sets::{IntervalSet, MapIntervalSet};
//!
//! let mut set = MapIntervalSet::new();
//! set.add(0.into(), 10.into(), "A").unwrap();
//!
//! // [5, 15) overlaps "A"
//! let err = set.add(5.into(), 15.into(), "B").unwrap_err();
//! assert!(err.is_conflict());
//! assert_eq!(set.len(), 1);
//! ```
//!
//! ## Multiple intervals per label
//!
//! ```rust
//! use ivset_sets::{IntervalSet, MultiIntervalSet};
//!
//! let mut multi = MultiIntervalSet::new();
//! multi.add(20.into(), 30.into(), "A").unwrap();
//! multi.add(0.into(), 10.into(), "A").unwrap();
//! multi.add(10.into(), 20.into(), "B").unwrap();
//!
//! // sub-labels follow start order, not insertion order
//! let a = multi.intervals(&"A");
//! assert_eq!(a.interval(&0).unwrap().to_string(), "[0,10)");
//! assert_eq!(a.interval(&1).unwrap().to_string(), "[20,30)");
//! ```

/// Parallel-array [`IntervalSet`] implementation.
///
/// See [`ArrayIntervalSet`] for details.
pub mod array_set;

/// Label-indexed [`IntervalSet`] implementation.
///
/// See [`MapIntervalSet`] for details.
pub mod map_set;

/// Sets where each label owns several intervals.
///
/// See [`MultiIntervalSet`] for details.
pub mod multi_interval_set;

/// Core trait for labeled interval sets.
///
/// See [`IntervalSet`] for the main trait.
pub mod traits;

use std::hash::Hash;

// re-exports
pub use self::array_set::ArrayIntervalSet;
pub use self::map_set::MapIntervalSet;
pub use self::multi_interval_set::MultiIntervalSet;
pub use self::traits::{Interval, IntervalSet};
pub use ivset_core::errors::{IntervalSetError, IntervalSetResult};

/// The [`IntervalSet`] implementation to build.
///
/// Both variants honor the same contract; they differ only in representation.
///
/// # Variants
///
/// * `Map` - Use [`MapIntervalSet`]. Label lookups are hashed and overlap
///   checks look at a single neighbor in an ordered map.
/// * `Array` - Use [`ArrayIntervalSet`]. Every operation is a linear scan over
///   two parallel vectors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IntervalSetKind {
    /// Use the label-indexed implementation.
    #[default]
    Map,
    /// Use the parallel-array implementation.
    Array,
}

impl IntervalSetKind {
    /// Create an empty interval set of this kind.
    pub fn build<L>(&self) -> Box<dyn IntervalSet<L>>
    where
        L: Eq + Hash + Clone + 'static,
    {
        match self {
            IntervalSetKind::Map => Box::new(MapIntervalSet::<L>::new()),
            IntervalSetKind::Array => Box::new(ArrayIntervalSet::<L>::new()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case(IntervalSetKind::Map)]
    #[case(IntervalSetKind::Array)]
    fn test_build_returns_empty_set(#[case] kind: IntervalSetKind) {
        let set = kind.build::<&str>();
        assert_eq!(set.is_empty(), true);
        assert_eq!(set.labels().len(), 0);
    }

    #[rstest]
    fn test_default_kind_is_map() {
        assert_eq!(IntervalSetKind::default(), IntervalSetKind::Map);
    }
}
