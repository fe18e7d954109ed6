//! Penn Treebank part-of-speech tags.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Closed tag vocabulary produced by the taggers in this crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum PosTag {
    /// Coordinating conjunction
    CC,
    /// Cardinal number
    CD,
    /// Determiner
    DT,
    /// Existential "there"
    EX,
    /// Foreign word
    FW,
    /// Preposition or subordinating conjunction
    IN,
    /// Adjective
    JJ,
    /// Adjective, comparative
    JJR,
    /// Adjective, superlative
    JJS,
    /// List item marker
    LS,
    /// Modal
    MD,
    /// Noun, singular or mass
    NN,
    /// Noun, plural
    NNS,
    /// Proper noun, singular
    NNP,
    /// Proper noun, plural
    NNPS,
    /// Predeterminer
    PDT,
    /// Possessive ending
    POS,
    /// Personal pronoun
    PRP,
    /// Possessive pronoun
    PRPS,
    /// Adverb
    RB,
    /// Adverb, comparative
    RBR,
    /// Adverb, superlative
    RBS,
    /// Particle
    RP,
    /// Symbol
    SYM,
    /// "to"
    TO,
    /// Interjection
    UH,
    /// Verb, base form
    VB,
    /// Verb, past tense
    VBD,
    /// Verb, gerund or present participle
    VBG,
    /// Verb, past participle
    VBN,
    /// Verb, non-3rd person singular present
    VBP,
    /// Verb, 3rd person singular present
    VBZ,
    /// Wh-determiner
    WDT,
    /// Wh-pronoun
    WP,
    /// Possessive wh-pronoun
    WPS,
    /// Wh-adverb
    WRB,
    /// Sentence-final punctuation
    Period,
    /// Comma
    Comma,
    /// Colon, semicolon, dash, ellipsis
    Colon,
    /// Opening quotation mark
    OpenQuote,
    /// Closing quotation mark
    CloseQuote,
    /// Opening bracket
    OpenParen,
    /// Closing bracket
    CloseParen,
    /// Dollar sign
    Dollar,
    /// Pound sign
    Hash,
}

const ALL_TAGS: &[PosTag] = &[
    PosTag::CC,
    PosTag::CD,
    PosTag::DT,
    PosTag::EX,
    PosTag::FW,
    PosTag::IN,
    PosTag::JJ,
    PosTag::JJR,
    PosTag::JJS,
    PosTag::LS,
    PosTag::MD,
    PosTag::NN,
    PosTag::NNS,
    PosTag::NNP,
    PosTag::NNPS,
    PosTag::PDT,
    PosTag::POS,
    PosTag::PRP,
    PosTag::PRPS,
    PosTag::RB,
    PosTag::RBR,
    PosTag::RBS,
    PosTag::RP,
    PosTag::SYM,
    PosTag::TO,
    PosTag::UH,
    PosTag::VB,
    PosTag::VBD,
    PosTag::VBG,
    PosTag::VBN,
    PosTag::VBP,
    PosTag::VBZ,
    PosTag::WDT,
    PosTag::WP,
    PosTag::WPS,
    PosTag::WRB,
    PosTag::Period,
    PosTag::Comma,
    PosTag::Colon,
    PosTag::OpenQuote,
    PosTag::CloseQuote,
    PosTag::OpenParen,
    PosTag::CloseParen,
    PosTag::Dollar,
    PosTag::Hash,
];

impl PosTag {
    /// Every tag of the vocabulary
    pub fn all() -> &'static [PosTag] {
        ALL_TAGS
    }

    /// Treebank spelling of the tag
    pub fn as_str(&self) -> &'static str {
        match self {
            PosTag::CC => "CC",
            PosTag::CD => "CD",
            PosTag::DT => "DT",
            PosTag::EX => "EX",
            PosTag::FW => "FW",
            PosTag::IN => "IN",
            PosTag::JJ => "JJ",
            PosTag::JJR => "JJR",
            PosTag::JJS => "JJS",
            PosTag::LS => "LS",
            PosTag::MD => "MD",
            PosTag::NN => "NN",
            PosTag::NNS => "NNS",
            PosTag::NNP => "NNP",
            PosTag::NNPS => "NNPS",
            PosTag::PDT => "PDT",
            PosTag::POS => "POS",
            PosTag::PRP => "PRP",
            PosTag::PRPS => "PRP$",
            PosTag::RB => "RB",
            PosTag::RBR => "RBR",
            PosTag::RBS => "RBS",
            PosTag::RP => "RP",
            PosTag::SYM => "SYM",
            PosTag::TO => "TO",
            PosTag::UH => "UH",
            PosTag::VB => "VB",
            PosTag::VBD => "VBD",
            PosTag::VBG => "VBG",
            PosTag::VBN => "VBN",
            PosTag::VBP => "VBP",
            PosTag::VBZ => "VBZ",
            PosTag::WDT => "WDT",
            PosTag::WP => "WP",
            PosTag::WPS => "WP$",
            PosTag::WRB => "WRB",
            PosTag::Period => ".",
            PosTag::Comma => ",",
            PosTag::Colon => ":",
            PosTag::OpenQuote => "``",
            PosTag::CloseQuote => "''",
            PosTag::OpenParen => "(",
            PosTag::CloseParen => ")",
            PosTag::Dollar => "$",
            PosTag::Hash => "#",
        }
    }

    /// NN, NNS, NNP, NNPS
    pub fn is_noun(&self) -> bool {
        matches!(self, PosTag::NN | PosTag::NNS | PosTag::NNP | PosTag::NNPS)
    }

    /// Verb tags that select verb-mode lemmatization (VBZ is deliberately absent).
    pub fn is_lemma_verb(&self) -> bool {
        matches!(
            self,
            PosTag::VB | PosTag::VBD | PosTag::VBG | PosTag::VBN | PosTag::VBP
        )
    }

    /// Any VB* tag
    pub fn is_verb(&self) -> bool {
        self.is_lemma_verb() || *self == PosTag::VBZ
    }

    /// PRP and PRP$
    pub fn is_pronoun(&self) -> bool {
        matches!(self, PosTag::PRP | PosTag::PRPS)
    }

    /// JJ, JJR, JJS
    pub fn is_adjective(&self) -> bool {
        matches!(self, PosTag::JJ | PosTag::JJR | PosTag::JJS)
    }

    /// Punctuation tags
    pub fn is_punctuation(&self) -> bool {
        matches!(
            self,
            PosTag::Period
                | PosTag::Comma
                | PosTag::Colon
                | PosTag::OpenQuote
                | PosTag::CloseQuote
                | PosTag::OpenParen
                | PosTag::CloseParen
        )
    }

    /// Whether the tag's spelling is purely alphabetic (punctuation tags and `PRP$` are not).
    pub fn is_alphabetic(&self) -> bool {
        self.as_str().chars().all(|c| c.is_ascii_alphabetic())
    }
}

impl fmt::Display for PosTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PosTag {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ALL_TAGS
            .iter()
            .copied()
            .find(|tag| tag.as_str() == s)
            .ok_or_else(|| format!("unknown POS tag '{}'", s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip_spelling() {
        for tag in PosTag::all() {
            assert_eq!(tag.as_str().parse::<PosTag>().unwrap(), *tag);
        }
    }

    #[test]
    fn test_alphabetic_filter() {
        assert!(PosTag::NN.is_alphabetic());
        assert!(!PosTag::PRPS.is_alphabetic());
        assert!(!PosTag::Period.is_alphabetic());
        assert!(!PosTag::OpenQuote.is_alphabetic());
    }

    #[test]
    fn test_lemma_verb_excludes_vbz() {
        assert!(PosTag::VBG.is_lemma_verb());
        assert!(!PosTag::VBZ.is_lemma_verb());
        assert!(PosTag::VBZ.is_verb());
    }

    #[test]
    fn test_unknown_tag() {
        assert!("VBFG".parse::<PosTag>().is_err());
    }
}
