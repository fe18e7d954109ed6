//! Fixed-layout feature vector.
//!
//! The downstream classifier is positional: the order of [`FEATURE_NAMES`]
//! is part of the output contract and must not change.

use serde::{Deserialize, Serialize};
use std::ops::Index;

/// Number of features per transcript
pub const FEATURE_COUNT: usize = 18;

/// Feature names in vector order
pub const FEATURE_NAMES: [&str; FEATURE_COUNT] = [
    "type_token_ratio",
    "honore_statistic",
    "concept_mentions",
    "automated_readability_index",
    "coleman_liau_index",
    "pronoun_count",
    "pronoun_noun_ratio",
    "gerund_count",
    "noun_phrase_count",
    "verb_phrase_count",
    "word_sentence_ratio",
    "mean_length_of_utterance",
    "pause_count",
    "unintelligible_count",
    "trailing_off_count",
    "repetition_count",
    "similarity_score",
    "brunet_index",
];

/// Positions in [`FeatureVector`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(usize)]
pub enum Feature {
    TypeTokenRatio = 0,
    Honore,
    ConceptMentions,
    AutomatedReadabilityIndex,
    ColemanLiauIndex,
    PronounCount,
    PronounNounRatio,
    GerundCount,
    NounPhraseCount,
    VerbPhraseCount,
    WordSentenceRatio,
    MeanLengthOfUtterance,
    /// Acoustic placeholders; always zero for text input
    PauseCount,
    UnintelligibleCount,
    TrailingOffCount,
    RepetitionCount,
    SimilarityScore,
    Brunet,
}

impl Feature {
    /// Every feature in vector order
    pub const ALL: [Feature; FEATURE_COUNT] = [
        Feature::TypeTokenRatio,
        Feature::Honore,
        Feature::ConceptMentions,
        Feature::AutomatedReadabilityIndex,
        Feature::ColemanLiauIndex,
        Feature::PronounCount,
        Feature::PronounNounRatio,
        Feature::GerundCount,
        Feature::NounPhraseCount,
        Feature::VerbPhraseCount,
        Feature::WordSentenceRatio,
        Feature::MeanLengthOfUtterance,
        Feature::PauseCount,
        Feature::UnintelligibleCount,
        Feature::TrailingOffCount,
        Feature::RepetitionCount,
        Feature::SimilarityScore,
        Feature::Brunet,
    ];

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn name(self) -> &'static str {
        FEATURE_NAMES[self.index()]
    }
}

/// Exactly [`FEATURE_COUNT`] scalars in [`FEATURE_NAMES`] order
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FeatureVector(pub [f64; FEATURE_COUNT]);

impl FeatureVector {
    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }

    pub fn len(&self) -> usize {
        FEATURE_COUNT
    }

    pub fn is_empty(&self) -> bool {
        false
    }

    pub fn get(&self, feature: Feature) -> f64 {
        self.0[feature.index()]
    }

    /// True when no entry is NaN or infinite
    pub fn is_finite(&self) -> bool {
        self.0.iter().all(|v| v.is_finite())
    }

    /// `(name, value)` pairs in vector order
    pub fn named(&self) -> Vec<(&'static str, f64)> {
        FEATURE_NAMES.iter().copied().zip(self.0).collect()
    }

    /// Training row: label first, then the features
    pub fn to_row(&self, label: f64) -> Vec<f64> {
        let mut row = Vec::with_capacity(FEATURE_COUNT + 1);
        row.push(label);
        row.extend_from_slice(&self.0);
        row
    }

    /// Header matching [`FeatureVector::to_row`]
    pub fn header() -> Vec<&'static str> {
        std::iter::once("label").chain(FEATURE_NAMES).collect()
    }
}

impl Index<Feature> for FeatureVector {
    type Output = f64;

    fn index(&self, feature: Feature) -> &f64 {
        &self.0[feature.index()]
    }
}

impl From<FeatureVector> for Vec<f64> {
    fn from(vector: FeatureVector) -> Self {
        vector.0.to_vec()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ramp() -> FeatureVector {
        let mut values = [0.0; FEATURE_COUNT];
        for (i, v) in values.iter_mut().enumerate() {
            *v = i as f64;
        }
        FeatureVector(values)
    }

    #[test]
    fn test_positions_match_names() {
        assert_eq!(Feature::TypeTokenRatio.name(), "type_token_ratio");
        assert_eq!(Feature::PauseCount.index(), 12);
        assert_eq!(Feature::SimilarityScore.index(), 16);
        assert_eq!(Feature::Brunet.index(), FEATURE_COUNT - 1);
        assert_eq!(ramp()[Feature::VerbPhraseCount], 9.0);
        for (i, feature) in Feature::ALL.iter().enumerate() {
            assert_eq!(feature.index(), i);
        }
    }

    #[test]
    fn test_row_puts_label_first() {
        let row = ramp().to_row(1.0);
        assert_eq!(row.len(), FEATURE_COUNT + 1);
        assert_eq!(row[0], 1.0);
        assert_eq!(row[1], 0.0);
        assert_eq!(row[18], 17.0);

        let header = FeatureVector::header();
        assert_eq!(header.len(), row.len());
        assert_eq!(header[0], "label");
        assert_eq!(header[18], "brunet_index");
    }

    #[test]
    fn test_finite_check() {
        let mut v = ramp();
        assert!(v.is_finite());
        v.0[3] = f64::NAN;
        assert!(!v.is_finite());
    }

    #[test]
    fn test_serializes_as_plain_array() {
        let json = serde_json::to_string(&ramp()).unwrap();
        assert!(json.starts_with("[0.0,1.0,"));
    }
}
