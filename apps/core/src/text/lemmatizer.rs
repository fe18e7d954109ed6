//! Lemmatization.
//!
//! [`MorphyLemmatizer`] follows the WordNet "morphy" procedure: check the
//! irregular-form exception tables, then try suffix-detachment rules for the
//! requested part of speech and keep candidates that exist in the base-form
//! lexicon. Words without any analysis are returned unchanged.

use serde::{Deserialize, Serialize};

use super::lexicon;
use super::pos::PosTag;

/// Part-of-speech category used to select the lemmatization mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PosHint {
    Noun,
    Verb,
    /// No hint; treated like a noun lookup without the out-of-lexicon fallback
    None,
}

impl PosHint {
    /// Noun tags select noun mode, VB/VBD/VBG/VBN/VBP select verb mode, everything else no hint.
    pub fn from_tag(tag: PosTag) -> Self {
        if tag.is_noun() {
            PosHint::Noun
        } else if tag.is_lemma_verb() {
            PosHint::Verb
        } else {
            PosHint::None
        }
    }
}

/// Reduces a token to its dictionary form
pub trait Lemmatizer: Send + Sync {
    fn lemmatize(&self, token: &str, hint: PosHint) -> String;
}

const NOUN_RULES: &[(&str, &str)] = &[
    ("s", ""),
    ("ses", "s"),
    ("xes", "x"),
    ("zes", "z"),
    ("ches", "ch"),
    ("shes", "sh"),
    ("men", "man"),
    ("ies", "y"),
];

const VERB_RULES: &[(&str, &str)] = &[
    ("s", ""),
    ("ies", "y"),
    ("es", "e"),
    ("es", ""),
    ("ed", "e"),
    ("ed", ""),
    ("ing", "e"),
    ("ing", ""),
];

/// WordNet-style rule lemmatizer backed by the shared lexicon
#[derive(Debug, Clone, Copy, Default)]
pub struct MorphyLemmatizer;

impl MorphyLemmatizer {
    pub fn new() -> Self {
        Self
    }

    /// All lexicon-validated analyses of `word` as a noun
    fn noun_candidates(&self, word: &str) -> Vec<String> {
        let mut candidates = Vec::new();
        if let Some(singular) = lexicon::irregular_plural(word) {
            candidates.push(singular.to_string());
        }
        if lexicon::is_noun(word) {
            candidates.push(word.to_string());
        }
        apply_rules(word, NOUN_RULES, lexicon::is_noun, &mut candidates);
        candidates
    }

    /// All lexicon-validated analyses of `word` as a verb
    fn verb_candidates(&self, word: &str) -> Vec<String> {
        let mut candidates = Vec::new();
        if let Some((base, _)) = lexicon::auxiliary(word) {
            if !word.starts_with('\'') {
                candidates.push(base.to_string());
            }
        }
        if let Some(form) = lexicon::irregular_verb(word) {
            candidates.push(form.base.to_string());
        }
        if lexicon::is_verb(word) {
            candidates.push(word.to_string());
        }
        apply_rules(word, VERB_RULES, lexicon::is_verb, &mut candidates);
        undouble(word, &mut candidates);
        candidates
    }
}

impl Lemmatizer for MorphyLemmatizer {
    fn lemmatize(&self, token: &str, hint: PosHint) -> String {
        let lower = token.to_lowercase();

        let candidates = match hint {
            PosHint::Verb => self.verb_candidates(&lower),
            PosHint::Noun | PosHint::None => self.noun_candidates(&lower),
        };

        if let Some(best) = shortest(candidates) {
            return best;
        }

        match hint {
            PosHint::Noun => strip_plural(&lower).unwrap_or_else(|| token.to_string()),
            PosHint::Verb => strip_inflection(&lower).unwrap_or_else(|| token.to_string()),
            PosHint::None => token.to_string(),
        }
    }
}

fn apply_rules(word: &str, rules: &[(&str, &str)], exists: fn(&str) -> bool, out: &mut Vec<String>) {
    for (suffix, replacement) in rules {
        if let Some(stem) = word.strip_suffix(suffix) {
            if stem.is_empty() {
                continue;
            }
            let candidate = format!("{}{}", stem, replacement);
            if exists(&candidate) && !out.contains(&candidate) {
                out.push(candidate);
            }
        }
    }
}

/// "stopped" -> "stop", "running" -> "run"
fn undouble(word: &str, out: &mut Vec<String>) {
    for suffix in ["ing", "ed"] {
        if let Some(stem) = word.strip_suffix(suffix) {
            let bytes = stem.as_bytes();
            if bytes.len() >= 3 && bytes[bytes.len() - 1] == bytes[bytes.len() - 2] {
                let candidate = &stem[..stem.len() - 1];
                if lexicon::is_verb(candidate) && !out.iter().any(|c| c == candidate) {
                    out.push(candidate.to_string());
                }
            }
        }
    }
}

/// Shortest analysis wins; ties keep the first one found.
fn shortest(candidates: Vec<String>) -> Option<String> {
    candidates.into_iter().reduce(|best, c| if c.len() < best.len() { c } else { best })
}

/// Plural stripping for nouns outside the lexicon
fn strip_plural(word: &str) -> Option<String> {
    if word.len() <= 3
        || !word.ends_with('s')
        || ["ss", "us", "is", "ous"].iter().any(|s| word.ends_with(s))
    {
        return None;
    }
    if let Some(stem) = word.strip_suffix("ies") {
        return Some(format!("{}y", stem));
    }
    for suffix in ["ches", "shes", "xes", "zes", "sses"] {
        if word.ends_with(suffix) {
            return Some(word[..word.len() - 2].to_string());
        }
    }
    Some(word[..word.len() - 1].to_string())
}

/// Inflection stripping for verbs outside the lexicon
fn strip_inflection(word: &str) -> Option<String> {
    if word.len() <= 4 {
        return None;
    }
    if let Some(stem) = word.strip_suffix("ied") {
        return Some(format!("{}y", stem));
    }
    for suffix in ["ing", "ed"] {
        if let Some(stem) = word.strip_suffix(suffix) {
            let bytes = stem.as_bytes();
            let n = bytes.len();
            if n >= 3 && bytes[n - 1] == bytes[n - 2] && !matches!(bytes[n - 1], b'l' | b's' | b'z') {
                return Some(stem[..n - 1].to_string());
            }
            return Some(stem.to_string());
        }
    }
    strip_plural(word)
}
