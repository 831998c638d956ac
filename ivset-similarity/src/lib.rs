//! Piecewise similarity between labeled multi-interval sets.
//!
//! This crate scores how alike two [`MultiIntervalSet`]s are. Both sets are
//! exploded into unit cells `[i, i+1)`, each tagged with the label covering it,
//! and every cell covered by both sets contributes the similarity of its two
//! labels. The sum is divided by the span of the two sets, the length of the
//! smallest interval containing all of their intervals.
//!
//! ## Main Components
//!
//! - **[`similarity`]**: the score itself, in `[0, 1]` for well-formed inputs
//! - **[`LabelSimilarities`]**: client-defined similarity between labels
//! - **[`UnitIntervalSet`]**: the per-cell decomposition of a multi-interval set
//! - **[`SimilarityConfig`]**: label similarities loaded from a TOML file
//!
//! ## Example
//!
//! ```rust
//! use ivset_sets::MultiIntervalSet;
//! use ivset_similarity::similarity;
//!
//! let mut a = MultiIntervalSet::new();
//! a.add(0.into(), 1.into(), "happy").unwrap();
//! a.add(2.into(), 4.into(), "happy").unwrap();
//! a.add(1.into(), 2.into(), "sad").unwrap();
//!
//! let mut b = MultiIntervalSet::new();
//! b.add(1.into(), 2.into(), "sad").unwrap();
//! b.add(2.into(), 3.into(), "meh").unwrap();
//! b.add(3.into(), 4.into(), "happy").unwrap();
//!
//! let pairs = [("happy", "meh", 0.5), ("meh", "sad", 0.5)];
//!
//! // (0 + 1 + 0.5 + 1) / (4 - 0)
//! assert_eq!(similarity(&pairs, &a, &b), 0.625);
//! ```
pub mod config;
pub mod errors;
pub mod label_similarity;
pub mod similarity;
pub mod unit_interval_set;

// re-exports
pub use config::{LabelPair, SimilarityConfig};
pub use errors::{SimilarityConfigError, SimilarityConfigResult};
pub use label_similarity::LabelSimilarities;
pub use similarity::{similarity, similarity_with};
pub use unit_interval_set::UnitIntervalSet;

#[doc(no_inline)]
pub use ivset_sets::MultiIntervalSet;
