//! Distributional Similarity Scoring.
//!
//! The document's tag distribution over the reference vocabulary is compared
//! with the reference profile by cosine similarity.

use std::sync::Arc;
use tracing::warn;

use super::frequency::FrequencyDistribution;
use super::reference::{normalize_over_vocabulary, ReferenceDistribution, TAG_COUNT};
use crate::error::{FeatureError, FeatureResult};
use crate::text::tagger::TaggedSequence;

/// Value reported when the document has no mass over the reference tags
pub const ZERO_VECTOR_SIMILARITY: f64 = 0.0;

/// Normalized weights of the reference tags in one document
pub fn document_vector(sequence: &TaggedSequence) -> [f64; TAG_COUNT] {
    let tags: FrequencyDistribution<String> =
        sequence.tags().map(|t| t.as_str().to_string()).collect();
    normalize_over_vocabulary(&tags).0
}

/// Cosine similarity of two equal-length vectors.
///
/// Fails with [`FeatureError::ZeroVector`] when either vector has zero magnitude.
pub fn cosine_similarity(a: &[f64], b: &[f64]) -> FeatureResult<f64> {
    if a.len() != b.len() {
        return Err(FeatureError::Config(format!(
            "vector lengths differ: {} vs {}",
            a.len(),
            b.len()
        )));
    }

    let dot_product: f64 = a.iter().zip(b.iter()).map(|(x, y)| x * y).sum();
    let magnitude_a: f64 = a.iter().map(|x| x * x).sum::<f64>().sqrt();
    let magnitude_b: f64 = b.iter().map(|x| x * x).sum::<f64>().sqrt();

    if magnitude_a == 0.0 || magnitude_b == 0.0 {
        return Err(FeatureError::ZeroVector);
    }

    Ok(dot_product / (magnitude_a * magnitude_b))
}

/// Scores documents against a reference profile
#[derive(Debug, Clone)]
pub struct SimilarityScorer {
    reference: Arc<ReferenceDistribution>,
}

impl SimilarityScorer {
    pub fn new(reference: Arc<ReferenceDistribution>) -> Self {
        Self { reference }
    }

    pub fn reference(&self) -> &Arc<ReferenceDistribution> {
        &self.reference
    }

    /// Similarity of `sequence` to the reference profile.
    ///
    /// A document without any reference tag scores [`ZERO_VECTOR_SIMILARITY`];
    /// failures to build the reference profile are returned.
    pub fn score(&self, sequence: &TaggedSequence) -> FeatureResult<f64> {
        let profile = self.reference.profile()?;
        let local = document_vector(sequence);

        match cosine_similarity(&local, profile.weights()) {
            Ok(similarity) => Ok(similarity),
            Err(FeatureError::ZeroVector) => {
                warn!(
                    tokens = sequence.len(),
                    "Document has no reference tags, similarity set to {}", ZERO_VECTOR_SIMILARITY
                );
                Ok(ZERO_VECTOR_SIMILARITY)
            }
            Err(e) => Err(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::reference::InlineCorpus;
    use crate::text::pos::PosTag;
    use crate::text::tagger::LexiconTagger;

    fn scorer(corpus: &str) -> SimilarityScorer {
        SimilarityScorer::new(Arc::new(ReferenceDistribution::new(
            Box::new(InlineCorpus::new(corpus)),
            Arc::new(LexiconTagger::new()),
        )))
    }

    #[test]
    fn test_cosine_similarity() {
        let a = [1.0, 0.0, 0.0];
        assert!((cosine_similarity(&a, &a).unwrap() - 1.0).abs() < 1e-12);
        let c = [0.0, 1.0, 0.0];
        assert!(cosine_similarity(&a, &c).unwrap().abs() < 1e-12);
        let d = [-1.0, 0.0, 0.0];
        assert!((cosine_similarity(&a, &d).unwrap() + 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_cosine_zero_vector() {
        assert!(matches!(
            cosine_similarity(&[0.0, 0.0], &[1.0, 2.0]),
            Err(FeatureError::ZeroVector)
        ));
        assert!(cosine_similarity(&[1.0], &[1.0, 2.0]).is_err());
    }

    #[test]
    fn test_matching_distribution_scores_one() {
        // DT NN VBD RB . PRP VBD JJ .
        let scorer = scorer("The dog ran fast. It was happy.");
        let doc = TaggedSequence::from_pairs(&[
            ("a", PosTag::DT),
            ("cat", PosTag::NN),
            ("sat", PosTag::VBD),
            ("quietly", PosTag::RB),
            ("she", PosTag::PRP),
            ("seemed", PosTag::VBD),
            ("calm", PosTag::JJ),
            ("!", PosTag::Period),
        ]);
        assert!((scorer.score(&doc).unwrap() - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_document_without_reference_tags_uses_sentinel() {
        let scorer = scorer("The dog ran fast.");
        let doc = TaggedSequence::from_pairs(&[("will", PosTag::MD), (".", PosTag::Period)]);
        assert_eq!(scorer.score(&doc).unwrap(), ZERO_VECTOR_SIMILARITY);
    }

    #[test]
    fn test_document_vector_ignores_other_tags() {
        let doc = TaggedSequence::from_pairs(&[
            ("the", PosTag::DT),
            ("boy", PosTag::NN),
            ("'s", PosTag::POS),
        ]);
        let v = document_vector(&doc);
        assert_eq!(v[0], 0.5);
        assert_eq!(v[2], 0.5);
        assert_eq!(v.iter().sum::<f64>(), 1.0);
    }
}
