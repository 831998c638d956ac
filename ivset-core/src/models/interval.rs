use std::cmp::Ordering::{self};
use std::fmt::{self, Display};

use num_bigint::BigInt;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::errors::{IntervalSetError, IntervalSetResult};
use crate::utils::check_overlap;

/// Represent a range from [start, end)
/// Inclusive start, exclusive of end
///
/// Bounds are arbitrary-precision, so intervals may sit anywhere on the integer
/// line, well past the range of `i64`. An `Interval` can only be obtained
/// through [`Interval::new`], which guarantees `start < end`.
#[derive(Eq, PartialEq, Hash, Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "IntervalBounds"))]
pub struct Interval {
    start: BigInt,
    end: BigInt,
}

/// Unchecked wire form of an [`Interval`]; deserialization goes through
/// [`Interval::new`] so a stored `start >= end` is rejected.
#[cfg(feature = "serde")]
#[derive(Deserialize)]
struct IntervalBounds {
    start: BigInt,
    end: BigInt,
}

#[cfg(feature = "serde")]
impl TryFrom<IntervalBounds> for Interval {
    type Error = IntervalSetError;

    fn try_from(bounds: IntervalBounds) -> Result<Self, Self::Error> {
        Interval::new(bounds.start, bounds.end)
    }
}

impl Interval {
    /// Create the interval [start, end).
    ///
    /// # Errors
    ///
    /// [`IntervalSetError::InvalidRange`] unless `start < end`.
    pub fn new(start: impl Into<BigInt>, end: impl Into<BigInt>) -> IntervalSetResult<Self> {
        let start = start.into();
        let end = end.into();
        if start >= end {
            return Err(IntervalSetError::InvalidRange { start, end });
        }
        Ok(Interval { start, end })
    }

    #[inline]
    pub fn start(&self) -> &BigInt {
        &self.start
    }

    #[inline]
    pub fn end(&self) -> &BigInt {
        &self.end
    }

    /// Consume the interval, returning its `(start, end)` bounds.
    #[inline]
    pub fn into_bounds(self) -> (BigInt, BigInt) {
        (self.start, self.end)
    }

    /// Number of unit cells covered, always positive.
    #[inline]
    pub fn width(&self) -> BigInt {
        &self.end - &self.start
    }

    /// Check if [start, end) intersects this interval
    #[inline]
    pub fn overlap(&self, start: &BigInt, end: &BigInt) -> bool {
        self.start < *end && *start < self.end
    }

    /// Check if two intervals overlap
    #[inline]
    pub fn overlaps(&self, other: &Interval) -> bool {
        check_overlap(self, other)
    }

    /// Whether this interval has exactly the bounds [start, end).
    #[inline]
    pub fn has_bounds(&self, start: &BigInt, end: &BigInt) -> bool {
        self.start == *start && self.end == *end
    }
}

impl Ord for Interval {
    #[inline]
    fn cmp(&self, other: &Interval) -> Ordering {
        match self.start.cmp(&other.start) {
            Ordering::Less => Ordering::Less,
            Ordering::Greater => Ordering::Greater,
            Ordering::Equal => self.end.cmp(&other.end),
        }
    }
}

impl PartialOrd for Interval {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{},{})", self.start, self.end)
    }
}
