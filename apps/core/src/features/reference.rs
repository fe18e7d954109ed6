//! Reference POS distribution.
//!
//! The reference profile is the normalized frequency of twelve tags over a
//! large reference corpus. It does not depend on the document, so it is
//! computed once per [`ReferenceDistribution`] and then served from cache.
//! Concurrent first use computes it at most once.
//!
//! The [`BundledCorpus`] is a small stand-in of about 1,300 words of plain
//! narrative prose, enough for tests and demos. Production runs should point
//! `TRANSCRIPT_FEATURES_REFERENCE_CORPUS` at a large general-English corpus
//! (on the order of 100k words of news text) so the similarity feature is
//! measured against a stable profile.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, LazyLock, Mutex, OnceLock};
use std::time::Instant;
use tracing::{debug, info};

use super::frequency::FrequencyDistribution;
use crate::error::{FeatureError, FeatureResult};
use crate::text::tagger::{LexiconTagger, Tagger};
use crate::text::tokenizer::Tokenizer;

/// Number of tags in [`TAG_VOCABULARY`]
pub const TAG_COUNT: usize = 12;

/// Tags of the reference profile, in vector order.
///
/// `VBFG` is not produced by any tagger and always weighs zero; it stays to
/// keep the vector layout stable.
pub const TAG_VOCABULARY: [&str; TAG_COUNT] = [
    "NN", "IN", "DT", "VBD", "VBFG", "VBG", "PRP", "JJ", "NNP", "RB", "NNS", "CC",
];

const BUNDLED_CORPUS: &str = include_str!("../../data/reference_corpus.txt");

static SHARED: LazyLock<Arc<ReferenceDistribution>> = LazyLock::new(|| {
    Arc::new(ReferenceDistribution::new(
        Box::new(BundledCorpus),
        Arc::new(LexiconTagger::new()),
    ))
});

/// Normalize the counts of the vocabulary tags by their own sum.
///
/// Returns the weights and the sum; all weights are zero when the sum is zero.
pub fn normalize_over_vocabulary(tags: &FrequencyDistribution<String>) -> ([f64; TAG_COUNT], usize) {
    let counts = TAG_VOCABULARY.map(|tag| tags.get(tag));
    let total: usize = counts.iter().sum();

    let mut weights = [0.0; TAG_COUNT];
    if total > 0 {
        for (weight, count) in weights.iter_mut().zip(counts) {
            *weight = count as f64 / total as f64;
        }
    }
    (weights, total)
}

/// Normalized reference tag weights
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReferenceProfile {
    weights: [f64; TAG_COUNT],
    /// Occurrences of vocabulary tags in the corpus
    tag_total: usize,
}

impl ReferenceProfile {
    /// Profile from a tag distribution; non-alphabetic tag keys are dropped first.
    pub fn from_tag_counts(mut tags: FrequencyDistribution<String>) -> FeatureResult<Self> {
        tags.retain(|tag| tag.chars().all(char::is_alphabetic));

        let (weights, tag_total) = normalize_over_vocabulary(&tags);
        if tag_total == 0 {
            return Err(FeatureError::ReferenceCorpus(
                "corpus contains none of the reference tags".to_string(),
            ));
        }
        Ok(Self { weights, tag_total })
    }

    pub fn weights(&self) -> &[f64; TAG_COUNT] {
        &self.weights
    }

    /// Weight of `tag` (0 for tags outside the vocabulary)
    pub fn weight(&self, tag: &str) -> f64 {
        TAG_VOCABULARY
            .iter()
            .position(|t| *t == tag)
            .map_or(0.0, |i| self.weights[i])
    }

    pub fn tag_total(&self) -> usize {
        self.tag_total
    }
}

/// Provider of reference corpus text
pub trait CorpusSource: Send + Sync {
    /// Human-readable description for logs
    fn describe(&self) -> String;

    fn load(&self) -> FeatureResult<String>;
}

/// Small stand-in corpus compiled into the binary.
///
/// Used only when no corpus file is configured; see the module docs.
#[derive(Debug, Clone, Copy, Default)]
pub struct BundledCorpus;

impl CorpusSource for BundledCorpus {
    fn describe(&self) -> String {
        "bundled stand-in corpus".to_string()
    }

    fn load(&self) -> FeatureResult<String> {
        Ok(BUNDLED_CORPUS.to_string())
    }
}

/// Plain-text corpus read from disk on first use
#[derive(Debug, Clone)]
pub struct FileCorpus {
    path: PathBuf,
}

impl FileCorpus {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl CorpusSource for FileCorpus {
    fn describe(&self) -> String {
        format!("file {}", self.path.display())
    }

    fn load(&self) -> FeatureResult<String> {
        Ok(std::fs::read_to_string(&self.path)?)
    }
}

/// In-memory corpus, mostly for tests and small synthetic profiles
#[derive(Debug, Clone)]
pub struct InlineCorpus(pub String);

impl InlineCorpus {
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }
}

impl CorpusSource for InlineCorpus {
    fn describe(&self) -> String {
        format!("inline corpus ({} bytes)", self.0.len())
    }

    fn load(&self) -> FeatureResult<String> {
        Ok(self.0.clone())
    }
}

/// Lazily computed, cached reference profile
pub struct ReferenceDistribution {
    source: Box<dyn CorpusSource>,
    tagger: Arc<dyn Tagger>,
    tokenizer: Tokenizer,
    profile: OnceLock<ReferenceProfile>,
    init_lock: Mutex<()>,
    computations: AtomicUsize,
}

impl fmt::Debug for ReferenceDistribution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ReferenceDistribution")
            .field("source", &self.source.describe())
            .field("computed", &self.is_computed())
            .finish()
    }
}

impl ReferenceDistribution {
    pub fn new(source: Box<dyn CorpusSource>, tagger: Arc<dyn Tagger>) -> Self {
        Self {
            source,
            tagger,
            tokenizer: Tokenizer::new(),
            profile: OnceLock::new(),
            init_lock: Mutex::new(()),
            computations: AtomicUsize::new(0),
        }
    }

    /// Process-wide distribution over the bundled corpus
    pub fn shared() -> Arc<ReferenceDistribution> {
        Arc::clone(&SHARED)
    }

    /// The cached profile, computing it on first call.
    ///
    /// A failed computation is not cached; the next call tries again.
    pub fn profile(&self) -> FeatureResult<&ReferenceProfile> {
        if let Some(profile) = self.profile.get() {
            return Ok(profile);
        }

        // () guard: a poisoned lock carries no broken state
        let _guard = self.init_lock.lock().unwrap_or_else(|e| e.into_inner());
        if let Some(profile) = self.profile.get() {
            return Ok(profile);
        }

        let computed = self.compute()?;
        Ok(self.profile.get_or_init(|| computed))
    }

    pub fn is_computed(&self) -> bool {
        self.profile.get().is_some()
    }

    /// How many times the profile has been computed (0 or 1 once warm)
    pub fn computations(&self) -> usize {
        self.computations.load(Ordering::SeqCst)
    }

    fn compute(&self) -> FeatureResult<ReferenceProfile> {
        let start = Instant::now();
        info!("Computing reference tag profile from {}...", self.source.describe());

        let text = self.source.load()?;
        let tokens = self.tokenizer.tokenize(&text);
        let tagged = self.tagger.tag(&tokens);
        let tags: FrequencyDistribution<String> =
            tagged.tags().map(|t| t.as_str().to_string()).collect();
        debug!(distinct_tags = tags.distinct(), "Tagged {} corpus tokens", tagged.len());

        let profile = ReferenceProfile::from_tag_counts(tags)?;
        self.computations.fetch_add(1, Ordering::SeqCst);

        info!(
            tag_total = profile.tag_total(),
            elapsed_ms = start.elapsed().as_millis() as u64,
            "Reference tag profile ready"
        );
        Ok(profile)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::text::pos::PosTag;
    use crate::text::tagger::{TaggedSequence, Token};

    fn inline(text: &str) -> ReferenceDistribution {
        ReferenceDistribution::new(
            Box::new(InlineCorpus::new(text)),
            Arc::new(LexiconTagger::new()),
        )
    }

    /// Tags every token as NN, except "." and words starting with "x"
    struct StubTagger;

    impl Tagger for StubTagger {
        fn tag(&self, tokens: &[String]) -> TaggedSequence {
            TaggedSequence::new(
                tokens
                    .iter()
                    .map(|t| {
                        let tag = if t == "." {
                            PosTag::Period
                        } else if t.starts_with('x') {
                            PosTag::PRPS
                        } else {
                            PosTag::NN
                        };
                        Token::new(t.clone(), tag)
                    })
                    .collect(),
            )
        }
    }

    #[test]
    fn test_profile_is_normalized_over_vocabulary() {
        let dist = inline("The dog ran fast. It was happy.");
        let profile = dist.profile().unwrap();
        // DT NN VBD RB PRP VBD JJ
        assert!((profile.weight("VBD") - 2.0 / 7.0).abs() < 1e-12);
        assert!((profile.weight("NN") - 1.0 / 7.0).abs() < 1e-12);
        assert_eq!(profile.weight("VBFG"), 0.0);
        assert_eq!(profile.weight("."), 0.0);
        let sum: f64 = profile.weights().iter().sum();
        assert!((sum - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_profile_is_idempotent() {
        let dist = inline("The boy took a cookie from the jar.");
        assert!(!dist.is_computed());
        let first = dist.profile().unwrap().clone();
        let second = dist.profile().unwrap();
        assert_eq!(&first, second);
        assert_eq!(
            first.weights().map(f64::to_bits),
            second.weights().map(f64::to_bits)
        );
        assert_eq!(dist.computations(), 1);
    }

    #[test]
    fn test_concurrent_first_use_computes_once() {
        let dist = ReferenceDistribution::new(
            Box::new(InlineCorpus::new("cookie jar . stool sink .")),
            Arc::new(StubTagger),
        );
        std::thread::scope(|scope| {
            for _ in 0..8 {
                scope.spawn(|| {
                    assert_eq!(dist.profile().unwrap().weight("NN"), 1.0);
                });
            }
        });
        assert_eq!(dist.computations(), 1);
    }

    #[test]
    fn test_corpus_without_reference_tags_fails() {
        let dist = ReferenceDistribution::new(
            Box::new(InlineCorpus::new("xa xb .")),
            Arc::new(StubTagger),
        );
        assert!(matches!(
            dist.profile(),
            Err(FeatureError::ReferenceCorpus(_))
        ));
        assert!(!dist.is_computed());
    }

    #[test]
    fn test_missing_file_corpus_is_io_error() {
        let dist = ReferenceDistribution::new(
            Box::new(FileCorpus::new("/definitely/not/here/corpus.txt")),
            Arc::new(LexiconTagger::new()),
        );
        assert!(matches!(dist.profile(), Err(FeatureError::Io(_))));
    }

    #[test]
    fn test_file_corpus() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("corpus.txt");
        std::fs::write(&path, "The girl and the boy.").unwrap();

        let dist = ReferenceDistribution::new(
            Box::new(FileCorpus::new(&path)),
            Arc::new(LexiconTagger::new()),
        );
        let profile = dist.profile().unwrap();
        assert!((profile.weight("DT") - 0.4).abs() < 1e-12);
    }

    #[test]
    fn test_bundled_corpus_covers_common_tags() {
        let profile = ReferenceDistribution::shared().profile().unwrap().clone();
        for tag in ["NN", "IN", "DT", "JJ", "VBD", "CC"] {
            assert!(profile.weight(tag) > 0.0, "{} missing from bundled profile", tag);
        }
        assert_eq!(profile.weight("VBFG"), 0.0);
    }

    #[test]
    fn test_bundled_corpus_is_a_small_stand_in() {
        assert!(BundledCorpus.describe().contains("stand-in"));
        let words = Tokenizer::new().tokenize(BUNDLED_CORPUS).len();
        assert!(words > 500 && words < 5_000, "bundled corpus has {} tokens", words);
    }
}
