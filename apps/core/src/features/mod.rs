//! # Features Module
//!
//! Statistics computed over a tagged transcript and their assembly into the
//! fixed-order feature vector.
//!
//! ## Components
//! - `frequency`: frequency distributions with deterministic ranking
//! - `safe_math`: guarded division
//! - `chunker`: cascaded tag-pattern phrase chunker
//! - `lexical`: TTR, Honoré's statistic, Brunét's index
//! - `readability`: ARI, Coleman-Liau, word/sentence ratio, MLU
//! - `concepts`: concept lexicon matching
//! - `reference`: cached reference tag profile
//! - `similarity`: cosine similarity to the reference profile
//! - `vector`: the feature vector layout
//! - `extractor`: Main orchestrator

pub mod chunker;
pub mod concepts;
pub mod extractor;
pub mod frequency;
pub mod lexical;
pub mod readability;
pub mod reference;
pub mod safe_math;
pub mod similarity;
pub mod vector;

pub use chunker::{ChunkForest, ChunkGrammar, PhraseChunker, PhraseCounts, PhraseLabel, PhraseSpan};
pub use concepts::{ConceptMatcher, ConceptMatches, CONCEPT_LEXICONS};
pub use extractor::{FeatureExtractor, FeatureReport};
pub use frequency::FrequencyDistribution;
pub use lexical::{LexicalCalculator, LexicalStatistics};
pub use readability::{ReadabilityCalculator, ReadabilityScores, SurfaceCounts};
pub use reference::{
    BundledCorpus, CorpusSource, FileCorpus, InlineCorpus, ReferenceDistribution, ReferenceProfile,
    TAG_VOCABULARY,
};
pub use similarity::{cosine_similarity, SimilarityScorer, ZERO_VECTOR_SIMILARITY};
pub use vector::{Feature, FeatureVector, FEATURE_COUNT, FEATURE_NAMES};
