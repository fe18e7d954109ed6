//! Readability Scoring.
//!
//! Surface counts taken from the raw transcript and the indices derived from
//! them. Sentence (and utterance) boundaries are the number of `.` plus the
//! number of `?` characters, with no deduplication of `?.` or `...`.

use serde::{Deserialize, Serialize};

use super::safe_math::{finite, safe_div};
use crate::error::{FeatureError, FeatureResult};

/// Character, word and sentence counts of a raw transcript
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SurfaceCounts {
    /// Alphanumeric characters
    pub num_char: usize,
    /// Space-delimited words, excluding empty strings and lone "."
    pub num_words: usize,
    /// Count of '.' plus count of '?'
    pub num_sentences: usize,
}

impl SurfaceCounts {
    pub fn from_text(text: &str) -> Self {
        let num_char = text.chars().filter(|c| c.is_alphanumeric()).count();
        let num_words = text
            .split(' ')
            .filter(|w| !w.is_empty() && *w != ".")
            .count();
        let num_sentences = text.chars().filter(|c| *c == '.' || *c == '?').count();

        Self {
            num_char,
            num_words,
            num_sentences,
        }
    }

    /// Fail on the first zero denominator, words before sentences.
    pub fn ensure_non_empty(&self) -> FeatureResult<()> {
        if self.num_words == 0 {
            return Err(FeatureError::EmptyInput {
                statistic: "num_words",
            });
        }
        if self.num_sentences == 0 {
            return Err(FeatureError::EmptyInput {
                statistic: "num_sentences",
            });
        }
        Ok(())
    }
}

/// Readability indices of one transcript
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReadabilityScores {
    pub counts: SurfaceCounts,
    /// Automated Readability Index
    pub ari: f64,
    /// Coleman-Liau Index
    pub cli: f64,
    pub word_sentence_ratio: f64,
    /// Mean length of utterance, in words
    pub mlu: f64,
}

/// Automated Readability Index
pub fn automated_readability_index(counts: &SurfaceCounts) -> FeatureResult<f64> {
    let chars_per_word = safe_div(counts.num_char as f64, counts.num_words as f64, "ari")?;
    let words_per_sentence = safe_div(counts.num_words as f64, counts.num_sentences as f64, "ari")?;
    finite(4.71 * chars_per_word + 0.5 * words_per_sentence - 21.43, "ari")
}

/// Coleman-Liau Index
pub fn coleman_liau_index(counts: &SurfaceCounts) -> FeatureResult<f64> {
    let letters = 100.0 * safe_div(counts.num_char as f64, counts.num_words as f64, "cli")?;
    let sentences = 100.0 * safe_div(counts.num_sentences as f64, counts.num_words as f64, "cli")?;
    finite(0.0588 * letters - 0.296 * sentences - 15.8, "cli")
}

pub fn word_sentence_ratio(counts: &SurfaceCounts) -> FeatureResult<f64> {
    safe_div(
        counts.num_words as f64,
        counts.num_sentences as f64,
        "word_sentence_ratio",
    )
}

/// Words per utterance; utterances are counted like sentences.
pub fn mean_length_of_utterance(counts: &SurfaceCounts) -> FeatureResult<f64> {
    let num_utterances = counts.num_sentences;
    safe_div(counts.num_words as f64, num_utterances as f64, "mlu")
}

/// Readability calculator for raw transcripts
#[derive(Debug, Clone, Copy, Default)]
pub struct ReadabilityCalculator;

impl ReadabilityCalculator {
    pub fn new() -> Self {
        Self
    }

    pub fn analyze(&self, text: &str) -> FeatureResult<ReadabilityScores> {
        self.analyze_counts(SurfaceCounts::from_text(text))
    }

    pub fn analyze_counts(&self, counts: SurfaceCounts) -> FeatureResult<ReadabilityScores> {
        counts.ensure_non_empty()?;

        Ok(ReadabilityScores {
            ari: automated_readability_index(&counts)?,
            cli: coleman_liau_index(&counts)?,
            word_sentence_ratio: word_sentence_ratio(&counts)?,
            mlu: mean_length_of_utterance(&counts)?,
            counts,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "The dog ran fast. It was happy.";

    #[test]
    fn test_surface_counts() {
        let counts = SurfaceCounts::from_text(SAMPLE);
        assert_eq!(
            counts,
            SurfaceCounts {
                num_char: 23,
                num_words: 7,
                num_sentences: 2
            }
        );
    }

    #[test]
    fn test_lone_periods_and_double_spaces_are_not_words() {
        let counts = SurfaceCounts::from_text("Hello  . there?");
        assert_eq!(counts.num_words, 2);
        assert_eq!(counts.num_sentences, 2);
    }

    #[test]
    fn test_question_and_period_both_count() {
        assert_eq!(SurfaceCounts::from_text("What?. Yes...").num_sentences, 5);
    }

    #[test]
    fn test_indices() {
        let scores = ReadabilityCalculator::new().analyze(SAMPLE).unwrap();
        let ari = 4.71 * (23.0 / 7.0) + 0.5 * 3.5 - 21.43;
        let cli = 0.0588 * (2300.0 / 7.0) - 0.296 * (200.0 / 7.0) - 15.8;
        assert!((scores.ari - ari).abs() < 1e-9);
        assert!((scores.cli - cli).abs() < 1e-9);
        assert_eq!(scores.word_sentence_ratio, 3.5);
        assert_eq!(scores.mlu, 3.5);
    }

    #[test]
    fn test_empty_inputs_name_the_statistic() {
        let calc = ReadabilityCalculator::new();
        assert!(matches!(
            calc.analyze(""),
            Err(FeatureError::EmptyInput {
                statistic: "num_words"
            })
        ));
        assert!(matches!(
            calc.analyze("no sentence marker here"),
            Err(FeatureError::EmptyInput {
                statistic: "num_sentences"
            })
        ));
    }
}
