use std::collections::HashSet;
use std::fs::read_to_string;
use std::path::Path;
use std::str::FromStr;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::errors::{SimilarityConfigError, SimilarityConfigResult};
use crate::label_similarity::LabelSimilarities;

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct LabelPair {
    pub a: String,
    pub b: String,
    pub score: f64, // must be within [0, 1]
}

/// Label similarities as written in a TOML file:
///
/// ```toml
/// [[pairs]]
/// a = "happy"
/// b = "meh"
/// score = 0.5
/// ```
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Default)]
pub struct SimilarityConfig {
    #[serde(default)]
    pub pairs: Vec<LabelPair>,
}

impl SimilarityConfig {
    ///
    /// Validate the listed pairs and build the lookup table.
    ///
    /// # Errors
    /// * `InvalidScore` - a score is not a number within `[0, 1]`
    /// * `DuplicatePair` - the same unordered pair is listed twice
    ///
    pub fn into_table(self) -> SimilarityConfigResult<LabelSimilarities<String>> {
        let mut seen: HashSet<(String, String)> = HashSet::new();
        for pair in &self.pairs {
            if !(0.0..=1.0).contains(&pair.score) {
                return Err(SimilarityConfigError::InvalidScore {
                    a: pair.a.clone(),
                    b: pair.b.clone(),
                    score: pair.score,
                });
            }
            let key = if pair.a <= pair.b {
                (pair.a.clone(), pair.b.clone())
            } else {
                (pair.b.clone(), pair.a.clone())
            };
            if !seen.insert(key) {
                return Err(SimilarityConfigError::DuplicatePair {
                    a: pair.a.clone(),
                    b: pair.b.clone(),
                });
            }
        }

        debug!("loaded {} label similarities", self.pairs.len());
        Ok(self
            .pairs
            .into_iter()
            .map(|pair| (pair.a, pair.b, pair.score))
            .collect())
    }
}

impl FromStr for SimilarityConfig {
    type Err = SimilarityConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(toml::from_str(s)?)
    }
}

impl TryFrom<&Path> for SimilarityConfig {
    type Error = SimilarityConfigError;

    fn try_from(path: &Path) -> Result<Self, Self::Error> {
        let toml_str = read_to_string(path)?;
        toml_str.parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use std::io::Write;
    use std::path::PathBuf;

    use tempfile::NamedTempFile;

    #[rstest]
    fn test_try_from_toml() {
        let path = PathBuf::from("../tests/data/similarities.toml");
        let result = SimilarityConfig::try_from(path.as_path());
        assert_eq!(result.is_ok(), true);
    }

    #[rstest]
    fn test_get_pairs() {
        let path = PathBuf::from("../tests/data/similarities.toml");
        let config = SimilarityConfig::try_from(path.as_path()).unwrap();

        assert_eq!(config.pairs.len(), 2);
        assert_eq!(
            config.pairs[0],
            LabelPair {
                a: "happy".to_string(),
                b: "meh".to_string(),
                score: 0.5
            }
        );
    }

    #[rstest]
    fn test_into_table() {
        let path = PathBuf::from("../tests/data/similarities.toml");
        let table = SimilarityConfig::try_from(path.as_path())
            .unwrap()
            .into_table()
            .unwrap();

        assert_eq!(table.score(&"meh".to_string(), &"sad".to_string()), 0.5);
        assert_eq!(table.score(&"happy".to_string(), &"sad".to_string()), 0.0);
    }

    #[rstest]
    fn test_try_from_temp_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[[pairs]]\na = \"x\"\nb = \"y\"\nscore = 0.25").unwrap();

        let config = SimilarityConfig::try_from(file.path()).unwrap();

        assert_eq!(config.pairs.len(), 1);
        assert_eq!(config.pairs[0].score, 0.25);
    }

    #[rstest]
    fn test_missing_file() {
        let path = PathBuf::from("../tests/data/does-not-exist.toml");
        let result = SimilarityConfig::try_from(path.as_path());
        assert_eq!(matches!(result, Err(SimilarityConfigError::Io(_))), true);
    }

    #[rstest]
    fn test_malformed_toml() {
        let result = "[[pairs]]\na = \"x\"\nscore = \"high\"".parse::<SimilarityConfig>();
        assert_eq!(matches!(result, Err(SimilarityConfigError::Toml(_))), true);
    }

    #[rstest]
    fn test_empty_config() {
        let table = "".parse::<SimilarityConfig>().unwrap().into_table().unwrap();
        assert_eq!(table.is_empty(), true);
    }

    #[rstest]
    #[case(1.5)]
    #[case(-0.1)]
    #[case(f64::NAN)]
    fn test_invalid_score(#[case] score: f64) {
        let config = SimilarityConfig {
            pairs: vec![LabelPair {
                a: "x".to_string(),
                b: "y".to_string(),
                score,
            }],
        };

        let result = config.into_table();

        assert_eq!(
            matches!(result, Err(SimilarityConfigError::InvalidScore { .. })),
            true
        );
    }

    #[rstest]
    #[case("x", "y")]
    #[case("y", "x")]
    fn test_duplicate_pair(#[case] a: &str, #[case] b: &str) {
        let config: SimilarityConfig = format!(
            "[[pairs]]\na = \"x\"\nb = \"y\"\nscore = 0.5\n\n[[pairs]]\na = \"{}\"\nb = \"{}\"\nscore = 0.75",
            a, b
        )
        .parse()
        .unwrap();

        let result = config.into_table();

        assert_eq!(
            matches!(result, Err(SimilarityConfigError::DuplicatePair { .. })),
            true
        );
    }
}
