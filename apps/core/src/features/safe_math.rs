//! Guarded arithmetic for ratio statistics.

use crate::error::{FeatureError, FeatureResult};

/// `numerator / denominator`, failing with [`FeatureError::EmptyInput`] when the denominator is zero.
pub fn safe_div(numerator: f64, denominator: f64, statistic: &'static str) -> FeatureResult<f64> {
    if denominator == 0.0 {
        return Err(FeatureError::EmptyInput { statistic });
    }
    finite(numerator / denominator, statistic)
}

/// Pass `value` through unless it is NaN or infinite.
pub fn finite(value: f64, statistic: &'static str) -> FeatureResult<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(FeatureError::NonFinite { statistic })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_divides() {
        assert_eq!(safe_div(6.0, 3.0, "ratio").unwrap(), 2.0);
    }

    #[test]
    fn test_zero_denominator_names_statistic() {
        let err = safe_div(1.0, 0.0, "word_sentence_ratio").unwrap_err();
        assert!(matches!(
            err,
            FeatureError::EmptyInput {
                statistic: "word_sentence_ratio"
            }
        ));
    }

    #[test]
    fn test_non_finite() {
        assert!(matches!(
            finite(f64::NAN, "x"),
            Err(FeatureError::NonFinite { statistic: "x" })
        ));
        assert!(finite(f64::INFINITY, "x").is_err());
    }
}
