use std::collections::HashMap;
use std::hash::Hash;

use log::debug;
use num_bigint::BigInt;
use num_traits::{ToPrimitive, Zero};

use crate::label_similarity::LabelSimilarities;
use crate::unit_interval_set::UnitIntervalSet;
use ivset_sets::MultiIntervalSet;

/// Measure similarity between two multi-interval sets.
///
/// Uses a client-provided definition of label similarities, where 0 is least
/// and 1 is most similar. See [`LabelSimilarities`] for how the triples are
/// interpreted.
///
/// The similarity between two multi-interval sets, where at least one is
/// nonempty, is the ratio:
///
/// ```text
/// (sum of piecewise matching between the sets) / (span of the sets)
/// ```
///
/// where the span is the length of the smallest interval that contains all the
/// intervals from both sets, and the piecewise matching for a unit interval
/// `[i, i+1)` is:
/// - 0 if neither set has a label on that interval
/// - 0 if only one set has a label on that interval
/// - otherwise, the similarity between the two labels
///
/// Two empty sets have similarity 0.
///
/// # Examples
///
/// ```
/// use ivset_sets::MultiIntervalSet;
/// use ivset_similarity::similarity;
///
/// let mut a = MultiIntervalSet::new();
/// a.add((-1).into(), 1.into(), "happy").unwrap();
/// let mut b = MultiIntervalSet::new();
/// b.add(0.into(), 2.into(), "happy").unwrap();
///
/// // the span [-1, 2) has 3 cells and only [0, 1) matches
/// assert!((similarity::<&str>(&[], &a, &b) - 1.0 / 3.0).abs() < 1e-12);
/// ```
pub fn similarity<L>(
    similarities: &[(L, L, f64)],
    set_a: &MultiIntervalSet<L>,
    set_b: &MultiIntervalSet<L>,
) -> f64
where
    L: Eq + Hash + Clone,
{
    let table = LabelSimilarities::new(similarities.iter().cloned());
    similarity_with(&table, set_a, set_b)
}

/// Same as [`similarity`], with a prebuilt [`LabelSimilarities`] table.
pub fn similarity_with<L>(
    table: &LabelSimilarities<L>,
    set_a: &MultiIntervalSet<L>,
    set_b: &MultiIntervalSet<L>,
) -> f64
where
    L: Eq + Hash + Clone,
{
    let units_a = UnitIntervalSet::new(set_a);
    let units_b = UnitIntervalSet::new(set_b);

    let (min, max) = match (units_a.span(), units_b.span()) {
        (None, None) => {
            debug!("both sets are empty, similarity is 0");
            return 0.0;
        }
        (Some(span), None) | (None, Some(span)) => span,
        (Some((min_a, max_a)), Some((min_b, max_b))) => {
            (std::cmp::min(min_a, min_b), std::cmp::max(max_a, max_b))
        }
    };
    let span: BigInt = max - min + 1u32;

    // cells labeled on one side only contribute nothing, so walking the
    // smaller decomposition visits every contributing cell
    let (smaller, larger) = if units_a.len() <= units_b.len() {
        (&units_a, &units_b)
    } else {
        (&units_b, &units_a)
    };

    let mut exact_matches = BigInt::zero();
    // label pairs in order of first shared cell, each with its cell count
    let mut pair_counts: Vec<(&L, &L, BigInt)> = Vec::new();
    let mut pair_index: HashMap<(&L, &L), usize> = HashMap::new();
    for (cell, label) in smaller.iter() {
        let Some(other) = larger.label(cell) else {
            continue;
        };
        if label == other {
            exact_matches += 1u32;
            continue;
        }
        let index = *pair_index.entry((label, other)).or_insert_with(|| {
            pair_counts.push((label, other, BigInt::zero()));
            pair_counts.len() - 1
        });
        pair_counts[index].2 += 1u32;
    }

    let partial_matches: f64 = pair_counts
        .iter()
        .map(|(x, y, count)| count.to_f64().unwrap_or(f64::INFINITY) * table.score(x, y))
        .sum();

    let score = ratio(&exact_matches, partial_matches, &span);
    debug!(
        "span [{},{}] of {} cells, {} identical cells, {} from label similarities, score {}",
        min, max, span, exact_matches, partial_matches, score
    );
    score
}

/// `(exact + partial) / span`, keeping the integer part exact for as long as
/// `f64` can.
fn ratio(exact: &BigInt, partial: f64, span: &BigInt) -> f64 {
    let exact = exact.to_f64().unwrap_or(f64::INFINITY);
    let span = span.to_f64().unwrap_or(f64::INFINITY);
    (exact + partial) / span
}
