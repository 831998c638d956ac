use std::collections::BTreeMap;
use std::fmt::{self, Display};
use std::hash::Hash;

use log::trace;
use num_bigint::BigInt;
use num_traits::Zero;

use ivset_sets::MultiIntervalSet;

/// An immutable set of labeled unit intervals `[i, i+1)`, where each unit
/// interval is associated with exactly one label.
///
/// Built from a [`MultiIntervalSet`] by splitting every interval into its unit
/// cells, so memory grows with the total length of the intervals.
///
/// # Examples
///
/// ```
/// use num_bigint::BigInt;
/// use ivset_sets::MultiIntervalSet;
/// use ivset_similarity::UnitIntervalSet;
///
/// let mut multi = MultiIntervalSet::new();
/// multi.add(0.into(), 1.into(), "happy").unwrap();
/// multi.add(2.into(), 3.into(), "sad").unwrap();
///
/// let units = UnitIntervalSet::new(&multi);
/// assert_eq!(units.label(&BigInt::from(0)), Some(&"happy"));
/// assert_eq!(units.label(&BigInt::from(1)), None);
/// assert_eq!(units.min(), Some(&BigInt::from(0)));
/// assert_eq!(units.max(), Some(&BigInt::from(2)));
/// ```
#[derive(Debug, Clone)]
pub struct UnitIntervalSet<L> {
    units: BTreeMap<BigInt, L>,
    /// Lowest and highest covered cell, inclusive
    span: Option<(BigInt, BigInt)>,
}

// Abstraction function:
//   AF(units, span) = { ([k, k+1), v) | (k, v) in units }
// Representation invariant:
//   - span is None iff units is empty
//   - every key of units lies within span, and both ends of span are keys
// Safety from rep exposure:
//   units and span are private and only handed out as shared references

impl<L> UnitIntervalSet<L>
where
    L: Eq + Hash + Clone,
{
    /// Split every interval of `multi` into unit cells labeled with the label
    /// that owns the interval.
    pub fn new(multi: &MultiIntervalSet<L>) -> Self {
        let mut units = BTreeMap::new();
        let mut span: Option<(BigInt, BigInt)> = None;
        let mut cells = BigInt::zero();

        for label in multi.labels() {
            for (_, interval) in multi.intervals(&label).entries() {
                cells += interval.width();
                let mut cell = interval.start().clone();
                while &cell < interval.end() {
                    units.insert(cell.clone(), label.clone());
                    cell += 1u32;
                }

                let first = interval.start().clone();
                let last = interval.end() - 1u32;
                span = Some(match span {
                    None => (first, last),
                    Some((lo, hi)) => (lo.min(first), hi.max(last)),
                });
            }
        }

        trace!("exploded {} intervals into {} unit cells", multi.len(), cells);
        // intervals never overlap, so no cell is written twice
        debug_assert_eq!(BigInt::from(units.len()), cells);

        let units = UnitIntervalSet { units, span };
        units.check_rep();
        units
    }

    /// Get the label of the unit interval `[start, start+1)`, if any.
    pub fn label(&self, start: &BigInt) -> Option<&L> {
        self.units.get(start)
    }

    /// Start of the lowest unit interval in the set.
    pub fn min(&self) -> Option<&BigInt> {
        self.span.as_ref().map(|(lo, _)| lo)
    }

    /// Start of the highest unit interval in the set.
    pub fn max(&self) -> Option<&BigInt> {
        self.span.as_ref().map(|(_, hi)| hi)
    }

    /// `(min, max)`, or `None` for an empty set.
    pub fn span(&self) -> Option<(&BigInt, &BigInt)> {
        self.span.as_ref().map(|(lo, hi)| (lo, hi))
    }

    /// Iterate over the labeled cells, lowest first.
    pub fn iter(&self) -> impl Iterator<Item = (&BigInt, &L)> {
        self.units.iter()
    }

    /// Number of labeled unit intervals.
    pub fn len(&self) -> usize {
        self.units.len()
    }

    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }

    fn check_rep(&self) {
        match &self.span {
            None => debug_assert!(self.units.is_empty()),
            Some((lo, hi)) => {
                debug_assert!(lo <= hi);
                debug_assert!(self.units.contains_key(lo) && self.units.contains_key(hi));
                for cell in self.units.keys() {
                    debug_assert!(lo <= cell && cell <= hi, "cell {} outside span", cell);
                }
            }
        }
    }
}

impl<L> Display for UnitIntervalSet<L>
where
    L: Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Some((lo, hi)) = &self.span else {
            return write!(f, "{{}}");
        };
        let mut cells = Vec::new();
        let mut cell = lo.clone();
        while &cell <= hi {
            match self.units.get(&cell) {
                Some(label) => cells.push(format!("{}={}", cell, label)),
                None => cells.push(format!("{}=-", cell)),
            }
            cell += 1u32;
        }
        write!(f, "{{{}}}", cells.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;
    use rstest::rstest;

    /*
     * Testing strategy for UnitIntervalSet
     *
     * new(), min(), max(), span(), label():
     *  partition on the number of unit cells: 0, 1, >1
     *  partition on coverage: cells cover the whole span, cells leave gaps
     *
     * label():
     *  partition on the output: absent, present
     */

    fn big(value: i64) -> BigInt {
        BigInt::from(value)
    }

    fn multi(intervals: &[(i64, i64, &'static str)]) -> MultiIntervalSet<&'static str> {
        let mut multi = MultiIntervalSet::new();
        for (start, end, label) in intervals {
            multi.add(big(*start), big(*end), *label).unwrap();
        }
        multi
    }

    #[rstest]
    fn test_empty() {
        let units = UnitIntervalSet::new(&multi(&[]));

        assert_eq!(units.label(&big(0)), None);
        assert_eq!(units.span(), None);
        assert_eq!(units.min(), None);
        assert_eq!(units.max(), None);
        assert_eq!(units.is_empty(), true);
    }

    #[rstest]
    fn test_single_cell() {
        let units = UnitIntervalSet::new(&multi(&[(0, 1, "happy")]));

        assert_eq!(units.label(&big(0)), Some(&"happy"));
        assert_eq!(units.label(&big(1)), None);
        assert_eq!(units.label(&big(-1)), None);
        assert_eq!(units.min(), Some(&big(0)));
        assert_eq!(units.max(), Some(&big(0)));
        assert_eq!(units.len(), 1);
    }

    #[rstest]
    fn test_cells_cover_span() {
        let units = UnitIntervalSet::new(&multi(&[(0, 1, "happy"), (1, 2, "sad")]));

        assert_eq!(units.label(&big(0)), Some(&"happy"));
        assert_eq!(units.label(&big(1)), Some(&"sad"));
        assert_eq!(units.label(&big(2)), None);
        assert_eq!(units.span(), Some((&big(0), &big(1))));
    }

    #[rstest]
    fn test_cells_with_gaps() {
        let units = UnitIntervalSet::new(&multi(&[(0, 1, "happy"), (2, 3, "sad")]));

        assert_eq!(units.label(&big(0)), Some(&"happy"));
        assert_eq!(units.label(&big(1)), None);
        assert_eq!(units.label(&big(2)), Some(&"sad"));
        assert_eq!(units.label(&big(3)), None);
        assert_eq!(units.span(), Some((&big(0), &big(2))));
    }

    #[rstest]
    fn test_several_intervals_per_label() {
        let units = UnitIntervalSet::new(&multi(&[(-3, -1, "a"), (5, 7, "a"), (0, 2, "b")]));

        assert_eq!(units.len(), 6);
        assert_eq!(units.span(), Some((&big(-3), &big(6))));
        assert_eq!(units.label(&big(-2)), Some(&"a"));
        assert_eq!(units.label(&big(-1)), None);
        assert_eq!(units.label(&big(1)), Some(&"b"));
        assert_eq!(units.label(&big(6)), Some(&"a"));
        assert_eq!(units.iter().filter(|(_, l)| **l == "a").count(), 4);
    }

    #[rstest]
    fn test_beyond_i64() {
        let start: BigInt = "9223372036854775807".parse().unwrap();
        let mut multi = MultiIntervalSet::new();
        multi.add(start.clone(), &start + 2, "x").unwrap();

        let units = UnitIntervalSet::new(&multi);

        assert_eq!(units.label(&(&start + 1)), Some(&"x"));
        assert_eq!(units.max(), Some(&(&start + 1)));
    }

    #[rstest]
    fn test_iter_ascending() {
        let units = UnitIntervalSet::new(&multi(&[(3, 5, "b"), (-2, 0, "a")]));

        let cells: Vec<(BigInt, &str)> = units.iter().map(|(c, l)| (c.clone(), *l)).collect();

        assert_eq!(
            cells,
            vec![(big(-2), "a"), (big(-1), "a"), (big(3), "b"), (big(4), "b")]
        );
    }

    #[rstest]
    fn test_display() {
        let units = UnitIntervalSet::new(&multi(&[(0, 1, "happy"), (2, 3, "sad")]));

        assert_eq!(units.to_string(), "{0=happy, 1=-, 2=sad}");
        assert_eq!(UnitIntervalSet::new(&multi(&[])).to_string(), "{}");
    }
}
