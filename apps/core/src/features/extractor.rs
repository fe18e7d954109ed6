//! Feature Extractor - Main orchestrator for transcript analysis.
//!
//! Runs the pipeline for one transcript:
//! 1. Surface counts and tokenization, with empty-input checks
//! 2. Tagging and POS-aware lemmatization
//! 3. Lexical statistics, readability, phrase chunking and concept matching
//! 4. Similarity against the reference profile
//! 5. Assembly of the fixed-order [`FeatureVector`]

use chrono::{DateTime, Utc};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, info, warn};

use super::chunker::{PhraseChunker, PhraseCounts};
use super::concepts::{ConceptMatcher, ConceptMatches};
use super::frequency::FrequencyDistribution;
use super::lexical::{LexicalCalculator, LexicalStatistics};
use super::readability::{ReadabilityCalculator, ReadabilityScores, SurfaceCounts};
use super::reference::{FileCorpus, ReferenceDistribution};
use super::similarity::SimilarityScorer;
use super::vector::{Feature, FeatureVector, FEATURE_COUNT};
use crate::config::{ExtractorConfig, REFERENCE_CORPUS_VAR};
use crate::error::{FeatureError, FeatureResult};
use crate::text::lemmatizer::{Lemmatizer, MorphyLemmatizer, PosHint};
use crate::text::pos::PosTag;
use crate::text::tagger::{LexiconTagger, TaggedSequence, Tagger};
use crate::text::tokenizer::Tokenizer;

/// Everything computed for one transcript
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeatureReport {
    /// The fixed-order feature vector
    pub features: FeatureVector,

    /// Tag frequencies of the document, most common first
    pub tag_ranking: Vec<(String, usize)>,

    /// Top-level phrase counts for every label
    pub phrase_counts: PhraseCounts,

    pub lexical: LexicalStatistics,

    pub readability: ReadabilityScores,

    pub concepts: ConceptMatches,

    /// PRP and PRP$ tokens
    pub pronoun_count: usize,

    /// NN, NNS, NNP and NNPS tokens
    pub noun_count: usize,

    /// VBG tokens, whether or not they head a gerund phrase
    pub gerund_count: usize,

    /// Processing time in milliseconds
    pub processing_time_ms: u64,

    /// Timestamp of analysis
    pub timestamp: DateTime<Utc>,
}

/// Transcript feature extractor
pub struct FeatureExtractor {
    tokenizer: Tokenizer,
    tagger: Arc<dyn Tagger>,
    lemmatizer: Arc<dyn Lemmatizer>,
    chunker: PhraseChunker,
    lexical: LexicalCalculator,
    readability: ReadabilityCalculator,
    concepts: ConceptMatcher,
    similarity: SimilarityScorer,
}

impl Default for FeatureExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl FeatureExtractor {
    /// Extractor with the default engines and the process-wide reference profile
    pub fn new() -> Self {
        Self::with_reference(ReferenceDistribution::shared())
    }

    /// Extractor with the default engines and the given reference profile
    pub fn with_reference(reference: Arc<ReferenceDistribution>) -> Self {
        Self::with_components(
            Arc::new(LexiconTagger::new()),
            Arc::new(MorphyLemmatizer::new()),
            reference,
        )
    }

    /// Extractor with custom tagging and lemmatization engines
    pub fn with_components(
        tagger: Arc<dyn Tagger>,
        lemmatizer: Arc<dyn Lemmatizer>,
        reference: Arc<ReferenceDistribution>,
    ) -> Self {
        Self {
            tokenizer: Tokenizer::new(),
            tagger,
            lemmatizer,
            chunker: PhraseChunker::new(),
            lexical: LexicalCalculator::new(),
            readability: ReadabilityCalculator::new(),
            concepts: ConceptMatcher::new(),
            similarity: SimilarityScorer::new(reference),
        }
    }

    /// Extractor whose reference corpus follows `config`
    pub fn from_config(config: &ExtractorConfig) -> Self {
        match &config.reference_corpus {
            Some(path) => {
                let tagger: Arc<dyn Tagger> = Arc::new(LexiconTagger::new());
                let reference = Arc::new(ReferenceDistribution::new(
                    Box::new(FileCorpus::new(path.clone())),
                    Arc::clone(&tagger),
                ));
                Self::with_components(tagger, Arc::new(MorphyLemmatizer::new()), reference)
            }
            None => {
                warn!(
                    variable = REFERENCE_CORPUS_VAR,
                    "No reference corpus configured, using the bundled stand-in"
                );
                Self::new()
            }
        }
    }

    pub fn reference(&self) -> &Arc<ReferenceDistribution> {
        self.similarity.reference()
    }

    /// Compute the reference profile now instead of on the first document.
    pub fn warm_up(&self) -> FeatureResult<()> {
        self.reference().profile().map(|_| ())
    }

    /// Tokenize and tag `text`
    pub fn tag(&self, text: &str) -> TaggedSequence {
        let tokens = self.tokenizer.tokenize(text);
        self.tagger.tag(&tokens)
    }

    /// One lemma per token, using the token's tag to pick the mode
    pub fn lemmatize(&self, sequence: &TaggedSequence) -> Vec<String> {
        sequence
            .iter()
            .map(|t| self.lemmatizer.lemmatize(&t.text, PosHint::from_tag(t.tag)))
            .collect()
    }

    /// Feature vector of one transcript
    pub fn extract(&self, text: &str) -> FeatureResult<FeatureVector> {
        Ok(self.analyze(text)?.features)
    }

    /// Full analysis of one transcript
    pub fn analyze(&self, text: &str) -> FeatureResult<FeatureReport> {
        let start = Instant::now();

        // 1. Empty input is rejected before any ratio is formed
        let counts = SurfaceCounts::from_text(text);
        let tokens = self.tokenizer.tokenize(text);
        if tokens.is_empty() {
            return Err(FeatureError::EmptyInput {
                statistic: "token_count",
            });
        }
        counts.ensure_non_empty()?;

        // 2. Tags and lemmas
        let sequence = self.tagger.tag(&tokens);
        let lemmas = self.lemmatize(&sequence);
        let tag_dist: FrequencyDistribution<String> =
            sequence.tags().map(|t| t.as_str().to_string()).collect();

        // 3. Scalar statistics
        let lexical = self.lexical.analyze(&tokens, &lemmas)?;
        let readability = self.readability.analyze_counts(counts)?;
        let phrase_counts = self.chunker.chunk(&sequence).counts();
        let concepts = self.concepts.analyze(&lemmas);

        let pronoun_count = sequence.tags().filter(|t| t.is_pronoun()).count();
        let noun_count = sequence.tags().filter(|t| t.is_noun()).count();
        let gerund_count = sequence.tags().filter(|t| *t == PosTag::VBG).count();
        let pronoun_noun_ratio = if noun_count == 0 {
            0.0
        } else {
            pronoun_count as f64 / noun_count as f64
        };

        // 4. Similarity
        let similarity = self.similarity.score(&sequence)?;

        // 5. Assembly
        let mut values = [0.0; FEATURE_COUNT];
        values[Feature::TypeTokenRatio.index()] = lexical.type_token_ratio;
        values[Feature::Honore.index()] = lexical.honore;
        values[Feature::ConceptMentions.index()] = concepts.total as f64;
        values[Feature::AutomatedReadabilityIndex.index()] = readability.ari;
        values[Feature::ColemanLiauIndex.index()] = readability.cli;
        values[Feature::PronounCount.index()] = pronoun_count as f64;
        values[Feature::PronounNounRatio.index()] = pronoun_noun_ratio;
        values[Feature::GerundCount.index()] = gerund_count as f64;
        values[Feature::NounPhraseCount.index()] = phrase_counts.np as f64;
        values[Feature::VerbPhraseCount.index()] = phrase_counts.vp as f64;
        values[Feature::WordSentenceRatio.index()] = readability.word_sentence_ratio;
        values[Feature::MeanLengthOfUtterance.index()] = readability.mlu;
        values[Feature::SimilarityScore.index()] = similarity;
        values[Feature::Brunet.index()] = lexical.brunet;
        let features = FeatureVector(values);

        if let Some((i, _)) = features.as_slice().iter().enumerate().find(|(_, v)| !v.is_finite()) {
            return Err(FeatureError::NonFinite {
                statistic: Feature::ALL[i].name(),
            });
        }

        let processing_time_ms = start.elapsed().as_millis() as u64;
        debug!(
            tokens = sequence.len(),
            words = readability.counts.num_words,
            sentences = readability.counts.num_sentences,
            processing_time_ms,
            "Extracted transcript features"
        );

        Ok(FeatureReport {
            features,
            tag_ranking: tag_dist.most_common(),
            phrase_counts,
            lexical,
            readability,
            concepts,
            pronoun_count,
            noun_count,
            gerund_count,
            processing_time_ms,
            timestamp: Utc::now(),
        })
    }

    /// Extract many transcripts in parallel.
    ///
    /// The reference profile is computed first; if that fails the whole batch
    /// fails. Per-document failures are returned in place.
    pub fn extract_batch<S>(&self, texts: &[S]) -> FeatureResult<Vec<FeatureResult<FeatureVector>>>
    where
        S: AsRef<str> + Sync,
    {
        self.warm_up()?;

        let start = Instant::now();
        let results: Vec<FeatureResult<FeatureVector>> = texts
            .par_iter()
            .map(|text| self.extract(text.as_ref()))
            .collect();

        let failed = results.iter().filter(|r| r.is_err()).count();
        info!(
            documents = texts.len(),
            failed,
            elapsed_ms = start.elapsed().as_millis() as u64,
            "Batch extraction finished"
        );
        Ok(results)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::reference::InlineCorpus;

    fn extractor() -> FeatureExtractor {
        FeatureExtractor::with_reference(Arc::new(ReferenceDistribution::new(
            Box::new(InlineCorpus::new(
                "The boy is taking a cookie from the jar. The mother dries the dishes.",
            )),
            Arc::new(LexiconTagger::new()),
        )))
    }

    #[test]
    fn test_basic_analysis() {
        let report = extractor().analyze("The dog ran fast. It was happy.").unwrap();
        assert_eq!(report.readability.counts.num_sentences, 2);
        assert_eq!(report.readability.counts.num_words, 7);
        assert_eq!(report.pronoun_count, 1);
        assert!(report.noun_count >= 1);
        assert!(report.features.is_finite());
        assert_eq!(report.features.len(), FEATURE_COUNT);
    }

    #[test]
    fn test_empty_input_fails_on_token_count() {
        let err = extractor().extract("").unwrap_err();
        assert_eq!(err.statistic(), Some("token_count"));
    }

    #[test]
    fn test_missing_sentence_marker() {
        let err = extractor().extract("the dog the dog").unwrap_err();
        assert_eq!(err.statistic(), Some("num_sentences"));
    }

    #[test]
    fn test_tag_ranking_is_most_common_first() {
        let report = extractor().analyze("The dog ran fast. It was happy.").unwrap();
        assert_eq!(report.tag_ranking[0].1, 2);
        let total: usize = report.tag_ranking.iter().map(|(_, n)| n).sum();
        assert_eq!(total, report.lexical.token_count);
    }

    #[test]
    fn test_gerund_count_is_vbg_tags() {
        let ex = extractor();
        for text in [
            "The boy likes running. He was running.",
            "The boy is taking the cookie. The girl is laughing.",
        ] {
            let report = ex.analyze(text).unwrap();
            assert_eq!(report.gerund_count, 2, "{}", text);
            assert_eq!(report.features[Feature::GerundCount], 2.0, "{}", text);
        }

        let report = ex.analyze("The boy likes running. The boy likes it.").unwrap();
        assert_eq!(report.phrase_counts.vgp, 0);
        assert_eq!(report.features[Feature::GerundCount], 1.0);
    }

    #[test]
    fn test_lemmatize_uses_tag_mode() {
        let ex = extractor();
        let seq = ex.tag("The boy is taking cookies.");
        let lemmas = ex.lemmatize(&seq);
        assert_eq!(lemmas[3], "take");
        assert_eq!(lemmas[4], "cookie");
    }
}
