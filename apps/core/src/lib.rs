//! Transcript feature extraction.
//!
//! Turns one spoken-language transcript into an 18-value feature vector
//! (lexical diversity, readability, syntax, concept coverage and similarity
//! to a reference tag profile) for a downstream speech classifier.
//!
//! ```no_run
//! use transcript_features::FeatureExtractor;
//!
//! let extractor = FeatureExtractor::new();
//! let features = extractor.extract("The boy is taking a cookie. The water is running.")?;
//! println!("{:?}", features.to_row(1.0));
//! # Ok::<(), transcript_features::FeatureError>(())
//! ```

pub mod config;
pub mod error;
pub mod features;
pub mod logging;
pub mod text;

pub use config::{ExtractorConfig, LogFormat};
pub use error::{FeatureError, FeatureResult};
pub use features::{FeatureExtractor, FeatureReport, FeatureVector, FEATURE_COUNT, FEATURE_NAMES};

#[cfg(test)]
mod tests;
