use std::io;
use thiserror::Error;

/// Crate-wide error type, consolidating every failure of feature extraction into a single enum.
#[derive(Debug, Error)]
pub enum FeatureError {
    /// The transcript has no tokens, words or sentence markers, so the named ratio is undefined.
    #[error("Empty input: cannot compute {statistic}")]
    EmptyInput { statistic: &'static str },

    /// Honoré's denominator `1 - V1/V` is zero (every lemma is a hapax, or there are no lemmas).
    #[error("Degenerate lexical distribution: {hapax} of {distinct} lemmas occur exactly once")]
    DegenerateLexical { distinct: usize, hapax: usize },

    /// Cosine similarity is undefined because one of the vectors has no mass.
    #[error("Cosine similarity undefined for a zero vector")]
    ZeroVector,

    /// A computed statistic came out as NaN or infinite.
    #[error("Non-finite value for {statistic}")]
    NonFinite { statistic: &'static str },

    /// The reference corpus could not be loaded or carries no usable tags.
    #[error("Reference corpus error: {0}")]
    ReferenceCorpus(String),

    /// Represents standard input/output errors.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Represents configuration-related errors (e.g., an unknown log format).
    #[error("Configuration error: {0}")]
    Config(String),
}

impl Clone for FeatureError {
    fn clone(&self) -> Self {
        match self {
            FeatureError::EmptyInput { statistic } => FeatureError::EmptyInput { statistic },
            FeatureError::DegenerateLexical { distinct, hapax } => FeatureError::DegenerateLexical {
                distinct: *distinct,
                hapax: *hapax,
            },
            FeatureError::ZeroVector => FeatureError::ZeroVector,
            FeatureError::NonFinite { statistic } => FeatureError::NonFinite { statistic },
            FeatureError::ReferenceCorpus(s) => FeatureError::ReferenceCorpus(s.clone()),
            FeatureError::Io(e) => FeatureError::Io(io::Error::new(e.kind(), e.to_string())),
            FeatureError::Config(s) => FeatureError::Config(s.clone()),
        }
    }
}

impl FeatureError {
    /// Name of the statistic that triggered the failure, when there is one.
    pub fn statistic(&self) -> Option<&'static str> {
        match self {
            FeatureError::EmptyInput { statistic } | FeatureError::NonFinite { statistic } => {
                Some(statistic)
            }
            FeatureError::DegenerateLexical { .. } => Some("honore_statistic"),
            FeatureError::ZeroVector => Some("similarity_score"),
            _ => None,
        }
    }
}

/// Shorthand for results produced by this crate.
pub type FeatureResult<T> = Result<T, FeatureError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input_names_statistic() {
        let err = FeatureError::EmptyInput {
            statistic: "num_sentences",
        };
        assert_eq!(err.statistic(), Some("num_sentences"));
        assert_eq!(err.to_string(), "Empty input: cannot compute num_sentences");
    }

    #[test]
    fn test_clone_preserves_io_kind() {
        let err = FeatureError::from(io::Error::new(io::ErrorKind::NotFound, "missing corpus"));
        match err.clone() {
            FeatureError::Io(e) => assert_eq!(e.kind(), io::ErrorKind::NotFound),
            other => panic!("unexpected variant: {:?}", other),
        }
    }

    #[test]
    fn test_degenerate_lexical_maps_to_honore() {
        let err = FeatureError::DegenerateLexical {
            distinct: 4,
            hapax: 4,
        };
        assert_eq!(err.statistic(), Some("honore_statistic"));
    }
}
