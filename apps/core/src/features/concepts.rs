//! Concept Mention Matching.
//!
//! Ten lexicons of terms expected in a description of the kitchen picture.
//! A document scores the number of distinct lemmas it shares with each
//! lexicon, summed over all lexicons. Matching is exact and case-sensitive;
//! lemmas arrive lowercased from the lemmatizer unless it found no entry.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Concept lexicons in scoring order
pub const CONCEPT_LEXICONS: [(&str, &[&str]); 10] = [
    (
        "scene",
        &[
            "cookie", "jar", "stool", "steal", "sink", "kitchen", "window", "curtain", "fall",
        ],
    ),
    ("mother", &["mother", "woman", "lady"]),
    ("girl", &["girl", "daughter", "sister"]),
    ("boy", &["boy", "son", "child", "kid", "brother"]),
    ("dishes", &["dish", "plate", "cup"]),
    ("overflow", &["overflow", "spill", "running"]),
    ("drying", &["dry", "wash"]),
    ("faucet", &["faucet"]),
    ("cupboard", &["counter", "cabinet"]),
    ("water", &["water"]),
];

/// Matches per lexicon, in [`CONCEPT_LEXICONS`] order
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConceptMatches {
    pub per_concept: Vec<(String, usize)>,
    pub total: usize,
}

/// Counts lexicon terms among a document's distinct lemmas
#[derive(Debug, Clone)]
pub struct ConceptMatcher {
    lexicons: Vec<(String, HashSet<String>)>,
}

impl Default for ConceptMatcher {
    fn default() -> Self {
        Self::new()
    }
}

impl ConceptMatcher {
    pub fn new() -> Self {
        Self::with_lexicons(
            CONCEPT_LEXICONS
                .iter()
                .map(|(name, terms)| (*name, terms.iter().copied())),
        )
    }

    pub fn with_lexicons<'a, I, T>(lexicons: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, T)>,
        T: IntoIterator<Item = &'a str>,
    {
        let lexicons = lexicons
            .into_iter()
            .map(|(name, terms)| {
                (
                    name.to_string(),
                    terms.into_iter().map(str::to_string).collect(),
                )
            })
            .collect();
        Self { lexicons }
    }

    /// Intersection sizes between each lexicon and the distinct lemma set
    pub fn analyze<S: AsRef<str>>(&self, lemmas: &[S]) -> ConceptMatches {
        let distinct: HashSet<&str> = lemmas.iter().map(|l| l.as_ref()).collect();

        let per_concept: Vec<(String, usize)> = self
            .lexicons
            .iter()
            .map(|(name, terms)| {
                let matched = terms.iter().filter(|t| distinct.contains(t.as_str())).count();
                (name.clone(), matched)
            })
            .collect();
        let total = per_concept.iter().map(|(_, n)| n).sum();

        ConceptMatches { per_concept, total }
    }

    pub fn count<S: AsRef<str>>(&self, lemmas: &[S]) -> usize {
        self.analyze(lemmas).total
    }
}
