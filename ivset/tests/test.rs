use num_bigint::BigInt;
use pretty_assertions::assert_eq;
use rstest::*;

use ivset::sets::{IntervalSet, IntervalSetKind, MultiIntervalSet};
use ivset::similarity::{SimilarityConfig, similarity, similarity_with};

fn big(value: i64) -> BigInt {
    BigInt::from(value)
}

#[fixture]
fn path_to_similarities() -> &'static str {
    "../tests/data/similarities.toml"
}

#[fixture]
fn moods() -> (MultiIntervalSet<String>, MultiIntervalSet<String>) {
    let mut a = MultiIntervalSet::new();
    a.add(big(0), big(1), "happy".to_string()).unwrap();
    a.add(big(2), big(4), "happy".to_string()).unwrap();
    a.add(big(1), big(2), "sad".to_string()).unwrap();

    let mut b = MultiIntervalSet::new();
    b.add(big(1), big(2), "sad".to_string()).unwrap();
    b.add(big(2), big(3), "meh".to_string()).unwrap();
    b.add(big(3), big(4), "happy".to_string()).unwrap();

    (a, b)
}

mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[rstest]
    #[case::map(IntervalSetKind::Map)]
    #[case::array(IntervalSetKind::Array)]
    fn test_added_intervals_never_overlap(#[case] kind: IntervalSetKind) {
        let mut set = kind.build::<u32>();
        let attempts = [(0, 10), (5, 15), (10, 20), (19, 21), (-5, 0), (-6, 30)];

        for (label, (start, end)) in attempts.into_iter().enumerate() {
            let _ = set.add(big(start), big(end), label as u32);
        }

        let mut intervals: Vec<_> = set.entries().into_iter().map(|(_, i)| i).collect();
        intervals.sort();
        assert_eq!(intervals.len(), 3);
        for pair in intervals.windows(2) {
            assert_eq!(pair[0].overlaps(&pair[1]), false);
        }
    }

    #[rstest]
    #[case::map(IntervalSetKind::Map)]
    #[case::array(IntervalSetKind::Array)]
    fn test_add_is_idempotent(#[case] kind: IntervalSetKind) {
        let mut set = kind.build::<&str>();
        set.add(big(0), big(10), "A").unwrap();
        set.add(big(0), big(10), "A").unwrap();

        assert_eq!(set.len(), 1);
    }

    #[rstest]
    fn test_failed_multi_add_changes_nothing() {
        let mut multi = MultiIntervalSet::new();
        multi.add(big(0), big(10), "A").unwrap();
        let before = multi.to_string();

        assert_eq!(multi.add(big(5), big(15), "B").unwrap_err().is_conflict(), true);
        assert_eq!(multi.add(big(3), big(3), "B").unwrap_err().is_invalid_range(), true);
        assert_eq!(multi.to_string(), before);
        assert_eq!(multi.labels().len(), 1);
    }

    #[rstest]
    #[case::map(IntervalSetKind::Map)]
    #[case::array(IntervalSetKind::Array)]
    fn test_seeding_round_trips(#[case] kind: IntervalSetKind) {
        let mut seed = kind.build::<&str>();
        seed.add(big(0), big(10), "A").unwrap();
        seed.add(big(20), big(30), "B").unwrap();

        let multi = MultiIntervalSet::from_interval_set_with_kind(&*seed, kind).unwrap();

        assert_eq!(multi.kind(), kind);
        for (label, interval) in seed.entries() {
            let intervals = multi.intervals(&label);
            assert_eq!(intervals.len(), 1);
            assert_eq!(intervals.interval(&0), Some(interval));
        }
    }

    #[rstest]
    fn test_intervals_are_indexed_by_position() {
        let mut multi = MultiIntervalSet::new();
        multi.add(big(20), big(30), "A").unwrap();
        multi.add(big(-5), big(0), "A").unwrap();
        multi.add(big(0), big(10), "A").unwrap();

        let intervals = multi.intervals(&"A");
        let starts: Vec<BigInt> = (0..3)
            .map(|i| intervals.interval(&i).unwrap().start().clone())
            .collect();

        assert_eq!(starts, vec![big(-5), big(0), big(20)]);
        assert_eq!(multi.intervals(&"missing").is_empty(), true);
    }

    #[rstest]
    #[case::map(IntervalSetKind::Map)]
    #[case::array(IntervalSetKind::Array)]
    fn test_interval_set_scenarios(#[case] kind: IntervalSetKind) {
        let mut set = kind.build::<&str>();
        set.add(big(0), big(10), "A").unwrap();

        assert_eq!(set.add(big(5), big(15), "B").unwrap_err().is_conflict(), true);
        assert_eq!(set.labels().into_iter().collect::<Vec<_>>(), vec!["A"]);

        let mut set = kind.build::<&str>();
        set.add(big(-10), big(10), "A").unwrap();

        assert_eq!(set.interval(&"A").unwrap().to_string(), "[-10,10)");
    }

    #[rstest]
    fn test_clear_reports_prior_contents() {
        let mut multi = MultiIntervalSet::new();

        assert_eq!(multi.clear(), false);
        multi.add(big(0), big(1), "A").unwrap();
        assert_eq!(multi.clear(), true);
        assert_eq!(multi.clear(), false);
    }

    #[rstest]
    fn test_similarity_scenarios(moods: (MultiIntervalSet<String>, MultiIntervalSet<String>)) {
        let (a, b) = moods;
        let pairs = [
            ("happy".to_string(), "meh".to_string(), 0.5),
            ("meh".to_string(), "sad".to_string(), 0.5),
        ];

        assert_eq!(similarity(&pairs, &a, &b), 0.625);
        assert_eq!(similarity(&pairs, &a, &a), 1.0);
        assert_eq!(similarity(&pairs, &MultiIntervalSet::new(), &MultiIntervalSet::new()), 0.0);
        assert_eq!(similarity(&pairs, &a, &MultiIntervalSet::new()), 0.0);
    }

    #[rstest]
    fn test_similarity_from_config(
        path_to_similarities: &str,
        moods: (MultiIntervalSet<String>, MultiIntervalSet<String>),
    ) {
        let (a, b) = moods;
        let table = SimilarityConfig::try_from(std::path::Path::new(path_to_similarities))
            .unwrap()
            .into_table()
            .unwrap();

        assert_eq!(similarity_with(&table, &a, &b), 0.625);
    }

    #[rstest]
    fn test_similarity_without_pairs_counts_exact_matches(
        moods: (MultiIntervalSet<String>, MultiIntervalSet<String>),
    ) {
        let (a, b) = moods;

        // only [1,2) and [3,4) match
        assert_eq!(similarity::<String>(&[], &a, &b), 0.5);
    }
}
