//! # Text Module
//!
//! Language layer of the extractor: everything that turns raw text into
//! tagged, lemmatized tokens.
//!
//! ## Components
//! - `tokenizer`: Treebank-style word segmentation
//! - `pos`: Penn Treebank tag set
//! - `lexicon`: English word tables shared by tagger and lemmatizer
//! - `tagger`: `Tagger` capability and the default lexicon tagger
//! - `lemmatizer`: `Lemmatizer` capability and the default morphy lemmatizer

pub mod lemmatizer;
pub mod lexicon;
pub mod pos;
pub mod tagger;
pub mod tokenizer;

pub use lemmatizer::{Lemmatizer, MorphyLemmatizer, PosHint};
pub use pos::PosTag;
pub use tagger::{LexiconTagger, TaggedSequence, Tagger, Token};
pub use tokenizer::Tokenizer;
