use num_bigint::BigInt;
use thiserror::Error;

/// Errors returned by interval construction and by every `add` on an interval set.
///
/// `InvalidRange` is always a caller bug. `IntervalConflict` is an expected
/// condition when building a set from merged or untrusted data; the set that
/// returned it is left exactly as it was before the call.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum IntervalSetError {
    #[error("Invalid range [{start},{end}): start must be less than end")]
    InvalidRange { start: BigInt, end: BigInt },

    #[error("Interval [{start},{end}) conflicts with an interval already in the set")]
    IntervalConflict { start: BigInt, end: BigInt },
}

impl IntervalSetError {
    pub fn is_conflict(&self) -> bool {
        matches!(self, IntervalSetError::IntervalConflict { .. })
    }

    pub fn is_invalid_range(&self) -> bool {
        matches!(self, IntervalSetError::InvalidRange { .. })
    }
}

pub type IntervalSetResult<T> = std::result::Result<T, IntervalSetError>;
