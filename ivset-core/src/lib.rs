//! Core models shared by the ivset crates.
//!
//! This crate holds the value types every other ivset crate builds on: the
//! arbitrary-precision half-open [`Interval`](models::Interval) and the
//! [`IntervalSetError`](errors::IntervalSetError) returned by every `add`-style
//! operation.
//!
//! ```rust
//! use ivset_core::models::Interval;
//!
//! let a = Interval::new(0, 10).unwrap();
//! let b = Interval::new(5, 15).unwrap();
//! assert!(a.overlaps(&b));
//! assert_eq!(a.to_string(), "[0,10)");
//! ```
pub mod errors;
pub mod models;
pub mod utils;

// re-exports
pub use self::errors::{IntervalSetError, IntervalSetResult};
pub use self::models::Interval;
