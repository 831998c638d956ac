use thiserror::Error;

#[derive(Error, Debug)]
pub enum SimilarityConfigError {
    #[error("Similarity between `{a}` and `{b}` must be within [0, 1], got {score}")]
    InvalidScore { a: String, b: String, score: f64 },

    #[error("Similarity between `{a}` and `{b}` is listed more than once")]
    DuplicatePair { a: String, b: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Toml(#[from] toml::de::Error),
}

pub type SimilarityConfigResult<T> = std::result::Result<T, SimilarityConfigError>;
