use std::collections::HashMap;
use std::hash::Hash;

/// Client-defined similarity between labels, from 0 (least similar) to 1
/// (most similar).
///
/// Built from `(x, y, score)` triples. Similarity is symmetric, so the order of
/// the labels inside a triple is irrelevant. For any pair that is not listed,
/// the similarity is 1 when the labels are equal and 0 otherwise. Equal labels
/// always score 1.
///
/// # Examples
///
/// ```
/// use ivset_similarity::LabelSimilarities;
///
/// let table = LabelSimilarities::new([("happy", "meh", 0.5), ("meh", "sad", 0.5)]);
///
/// assert_eq!(table.score(&"meh", &"happy"), 0.5);
/// assert_eq!(table.score(&"happy", &"sad"), 0.0);
/// assert_eq!(table.score(&"sad", &"sad"), 1.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct LabelSimilarities<L>
where
    L: Eq + Hash,
{
    /// Each label maps to the labels it was paired with, in both directions
    scores: HashMap<L, HashMap<L, f64>>,
}

impl<L> Default for LabelSimilarities<L>
where
    L: Eq + Hash,
{
    fn default() -> Self {
        LabelSimilarities {
            scores: HashMap::new(),
        }
    }
}

impl<L> LabelSimilarities<L>
where
    L: Eq + Hash + Clone,
{
    /// Build the symmetric lookup from `(x, y, score)` triples. If a pair is
    /// listed more than once, the last score wins.
    pub fn new<I>(similarities: I) -> Self
    where
        I: IntoIterator<Item = (L, L, f64)>,
    {
        let mut table = Self::default();
        for (x, y, score) in similarities {
            table.insert(x, y, score);
        }
        table
    }

    fn insert(&mut self, x: L, y: L, score: f64) {
        self.scores
            .entry(x.clone())
            .or_default()
            .insert(y.clone(), score);
        self.scores.entry(y).or_default().insert(x, score);
    }

    /// Similarity between `x` and `y`.
    pub fn score(&self, x: &L, y: &L) -> f64 {
        if x == y {
            return 1.0;
        }
        self.scores
            .get(x)
            .and_then(|row| row.get(y))
            .copied()
            .unwrap_or(0.0)
    }

    /// Whether a score was listed for the pair, in either order.
    pub fn contains(&self, x: &L, y: &L) -> bool {
        self.scores.get(x).is_some_and(|row| row.contains_key(y))
    }

    /// Number of labels that appear in at least one listed pair.
    pub fn len(&self) -> usize {
        self.scores.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }
}

impl<L> FromIterator<(L, L, f64)> for LabelSimilarities<L>
where
    L: Eq + Hash + Clone,
{
    fn from_iter<I: IntoIterator<Item = (L, L, f64)>>(iter: I) -> Self {
        Self::new(iter)
    }
}
