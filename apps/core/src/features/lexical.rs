//! Lexical diversity and richness statistics.
//!
//! - Type-token ratio over surface tokens
//! - Honoré's statistic `R = 100 * ln(N / (1 - V1/V))`
//! - Brunét's index `W = V ^ (N ^ -0.0165)`
//!
//! `N` is the total token count, `V` the number of distinct lemmas and `V1`
//! the number of lemmas that occur exactly once.

use serde::{Deserialize, Serialize};

use super::frequency::FrequencyDistribution;
use super::safe_math::{finite, safe_div};
use crate::error::{FeatureError, FeatureResult};

const BRUNET_EXPONENT: f64 = -0.0165;

/// Lexical statistics of one document
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LexicalStatistics {
    /// Total token count (N)
    pub token_count: usize,
    /// Distinct surface tokens
    pub distinct_tokens: usize,
    /// Distinct lemmas (V)
    pub distinct_lemmas: usize,
    /// Lemmas occurring exactly once (V1)
    pub hapax_lemmas: usize,
    pub type_token_ratio: f64,
    pub honore: f64,
    pub brunet: f64,
}

/// Distinct surface tokens divided by total tokens
pub fn type_token_ratio(tokens: &FrequencyDistribution<String>) -> FeatureResult<f64> {
    safe_div(tokens.distinct() as f64, tokens.total() as f64, "type_token_ratio")
}

/// Honoré's R for `token_count` tokens with the given lemma distribution.
///
/// Fails with [`FeatureError::DegenerateLexical`] when every lemma is a hapax
/// legomenon (or there are none), instead of taking the log of infinity.
pub fn honore_statistic(
    token_count: usize,
    lemmas: &FrequencyDistribution<String>,
) -> FeatureResult<f64> {
    if token_count == 0 {
        return Err(FeatureError::EmptyInput {
            statistic: "honore_statistic",
        });
    }

    let distinct = lemmas.distinct();
    let hapax = lemmas.hapax_count();
    if distinct == 0 || hapax >= distinct {
        return Err(FeatureError::DegenerateLexical { distinct, hapax });
    }

    let denominator = 1.0 - hapax as f64 / distinct as f64;
    finite(
        100.0 * (token_count as f64 / denominator).ln(),
        "honore_statistic",
    )
}

/// Brunét's W for `token_count` tokens and `distinct_lemmas` lemma types
pub fn brunet_index(token_count: usize, distinct_lemmas: usize) -> FeatureResult<f64> {
    if token_count == 0 {
        return Err(FeatureError::EmptyInput {
            statistic: "brunet_index",
        });
    }
    let exponent = (token_count as f64).powf(BRUNET_EXPONENT);
    finite((distinct_lemmas as f64).powf(exponent), "brunet_index")
}

/// Calculator over surface tokens and their lemmas
#[derive(Debug, Clone, Copy, Default)]
pub struct LexicalCalculator;

impl LexicalCalculator {
    pub fn new() -> Self {
        Self
    }

    /// Compute all three statistics; `tokens` and `lemmas` are parallel sequences.
    pub fn analyze<S: AsRef<str>>(
        &self,
        tokens: &[S],
        lemmas: &[String],
    ) -> FeatureResult<LexicalStatistics> {
        let token_dist: FrequencyDistribution<String> =
            tokens.iter().map(|t| t.as_ref().to_string()).collect();
        let lemma_dist: FrequencyDistribution<String> = lemmas.iter().cloned().collect();

        let token_count = token_dist.total();
        let type_token_ratio = type_token_ratio(&token_dist)?;
        let honore = honore_statistic(token_count, &lemma_dist)?;
        let brunet = brunet_index(token_count, lemma_dist.distinct())?;

        Ok(LexicalStatistics {
            token_count,
            distinct_tokens: token_dist.distinct(),
            distinct_lemmas: lemma_dist.distinct(),
            hapax_lemmas: lemma_dist.hapax_count(),
            type_token_ratio,
            honore,
            brunet,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dist(words: &[&str]) -> FrequencyDistribution<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn test_ttr_bounds() {
        assert_eq!(type_token_ratio(&dist(&["a", "b", "c"])).unwrap(), 1.0);
        let ttr = type_token_ratio(&dist(&["a", "a", "b", "a"])).unwrap();
        assert!(ttr > 0.0 && ttr < 1.0);
        assert_eq!(ttr, 0.5);
    }

    #[test]
    fn test_ttr_empty() {
        assert!(matches!(
            type_token_ratio(&dist(&[])),
            Err(FeatureError::EmptyInput {
                statistic: "type_token_ratio"
            })
        ));
    }

    #[test]
    fn test_honore_value() {
        // N = 3, V = 2, V1 = 1 -> 100 * ln(3 / 0.5)
        let r = honore_statistic(3, &dist(&["a", "a", "b"])).unwrap();
        assert!((r - 100.0 * 6f64.ln()).abs() < 1e-9);
    }

    #[test]
    fn test_honore_all_hapax_is_degenerate() {
        let err = honore_statistic(3, &dist(&["a", "b", "c"])).unwrap_err();
        assert!(matches!(
            err,
            FeatureError::DegenerateLexical {
                distinct: 3,
                hapax: 3
            }
        ));
        assert!(matches!(
            honore_statistic(3, &dist(&[])),
            Err(FeatureError::DegenerateLexical { distinct: 0, .. })
        ));
    }

    #[test]
    fn test_honore_empty_input() {
        assert!(matches!(
            honore_statistic(0, &dist(&["a", "a"])),
            Err(FeatureError::EmptyInput { .. })
        ));
    }

    #[test]
    fn test_brunet_non_increasing_in_length() {
        let mut previous = f64::INFINITY;
        for n in [10, 20, 50, 100, 1_000, 10_000] {
            let w = brunet_index(n, 8).unwrap();
            assert!(w <= previous);
            previous = w;
        }
        assert_eq!(brunet_index(50, 1).unwrap(), 1.0);
    }

    #[test]
    fn test_analyze_parallel_sequences() {
        let tokens = ["The", "dogs", "ran", ".", "The", "dog", "sat", "."];
        let lemmas: Vec<String> = ["the", "dog", "run", ".", "the", "dog", "sit", "."]
            .iter()
            .map(|s| s.to_string())
            .collect();
        let stats = LexicalCalculator::new().analyze(&tokens, &lemmas).unwrap();
        assert_eq!(stats.token_count, 8);
        assert_eq!(stats.distinct_tokens, 6);
        assert_eq!(stats.distinct_lemmas, 5);
        assert_eq!(stats.hapax_lemmas, 2);
        assert_eq!(stats.type_token_ratio, 0.75);
        assert!(stats.honore.is_finite() && stats.brunet.is_finite());
    }
}
