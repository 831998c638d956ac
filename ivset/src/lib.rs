//! Labeled half-open interval sets and a similarity measure between them.
//!
//! Each member crate is re-exported behind a feature of the same name:
//!
//! - `core`: [`Interval`](core::Interval) and the error type
//! - `sets`: `IntervalSet`, its two implementations and `MultiIntervalSet`
//! - `similarity`: `UnitIntervalSet`, label similarities and `similarity`
//!
//! ```rust
//! use ivset::sets::{IntervalSet, MapIntervalSet};
//!
//! let mut set = MapIntervalSet::new();
//! set.add(0.into(), 10.into(), "A").unwrap();
//!
//! assert!(set.add(5.into(), 15.into(), "B").unwrap_err().is_conflict());
//! ```

#[cfg(feature = "core")]
#[doc(inline)]
pub use ivset_core as core;

#[cfg(feature = "sets")]
#[doc(inline)]
pub use ivset_sets as sets;

#[cfg(feature = "similarity")]
#[doc(inline)]
pub use ivset_similarity as similarity;
