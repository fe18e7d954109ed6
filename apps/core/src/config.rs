//! Extractor configuration.
//!
//! Settings are read from the process environment, after loading an optional
//! `.env` file from the working directory.

use serde::{Deserialize, Serialize};
use std::env;
use std::path::PathBuf;
use std::str::FromStr;

use crate::error::{FeatureError, FeatureResult};

/// Path to a plain-text reference corpus (bundled corpus when unset)
pub const REFERENCE_CORPUS_VAR: &str = "TRANSCRIPT_FEATURES_REFERENCE_CORPUS";
/// `pretty` or `json`
pub const LOG_FORMAT_VAR: &str = "TRANSCRIPT_FEATURES_LOG_FORMAT";
/// tracing filter directive
pub const LOG_FILTER_VAR: &str = "TRANSCRIPT_FEATURES_LOG";

const DEFAULT_LOG_FILTER: &str = "info";

/// Output format of the log subscriber
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human-readable lines
    #[default]
    Pretty,
    /// Bunyan-style JSON records
    Json,
}

impl FromStr for LogFormat {
    type Err = FeatureError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "pretty" | "text" => Ok(LogFormat::Pretty),
            "json" | "bunyan" => Ok(LogFormat::Json),
            other => Err(FeatureError::Config(format!(
                "unknown log format '{}' (expected 'pretty' or 'json')",
                other
            ))),
        }
    }
}

/// Runtime configuration of the feature extractor
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractorConfig {
    /// Reference corpus file; `None` selects the bundled corpus
    pub reference_corpus: Option<PathBuf>,
    /// Log output format
    pub log_format: LogFormat,
    /// Filter directive handed to the log subscriber
    pub log_filter: String,
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        Self {
            reference_corpus: None,
            log_format: LogFormat::default(),
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl ExtractorConfig {
    /// Load `.env` (if present) and build the configuration from the environment.
    pub fn from_env() -> FeatureResult<Self> {
        // A missing .env file is fine.
        let _ = dotenv::dotenv();
        Self::from_vars()
    }

    /// Build the configuration from the current environment only.
    pub fn from_vars() -> FeatureResult<Self> {
        let reference_corpus = env::var(REFERENCE_CORPUS_VAR)
            .ok()
            .filter(|v| !v.trim().is_empty())
            .map(PathBuf::from);

        let log_format = match env::var(LOG_FORMAT_VAR) {
            Ok(value) => value.parse()?,
            Err(_) => LogFormat::default(),
        };

        let log_filter = env::var(LOG_FILTER_VAR)
            .ok()
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());

        Ok(Self {
            reference_corpus,
            log_format,
            log_filter,
        })
    }

    /// Override the reference corpus path
    pub fn with_reference_corpus(mut self, path: impl Into<PathBuf>) -> Self {
        self.reference_corpus = Some(path.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_without_env() {
        temp_env::with_vars_unset([REFERENCE_CORPUS_VAR, LOG_FORMAT_VAR, LOG_FILTER_VAR], || {
            let config = ExtractorConfig::from_vars().unwrap();
            assert_eq!(config, ExtractorConfig::default());
        });
    }

    #[test]
    fn test_reads_env_overrides() {
        temp_env::with_vars(
            [
                (REFERENCE_CORPUS_VAR, Some("/tmp/news.txt")),
                (LOG_FORMAT_VAR, Some("JSON")),
                (LOG_FILTER_VAR, Some("debug")),
            ],
            || {
                let config = ExtractorConfig::from_vars().unwrap();
                assert_eq!(config.reference_corpus, Some(PathBuf::from("/tmp/news.txt")));
                assert_eq!(config.log_format, LogFormat::Json);
                assert_eq!(config.log_filter, "debug");
            },
        );
    }

    #[test]
    fn test_rejects_unknown_log_format() {
        temp_env::with_var(LOG_FORMAT_VAR, Some("xml"), || {
            let err = ExtractorConfig::from_vars().unwrap_err();
            assert!(matches!(err, FeatureError::Config(_)));
        });
    }

    #[test]
    fn test_blank_corpus_path_is_ignored() {
        temp_env::with_var(REFERENCE_CORPUS_VAR, Some("  "), || {
            let config = ExtractorConfig::from_vars().unwrap();
            assert!(config.reference_corpus.is_none());
        });
    }
}
