//! Part-of-speech tagging.
//!
//! [`Tagger`] is the capability seam: any engine that assigns one Penn
//! Treebank tag per token can be plugged into the extractor. The default
//! [`LexiconTagger`] is deterministic: it combines the word tables in
//! [`super::lexicon`] with left-context rules and suffix heuristics.

use serde::{Deserialize, Serialize};

use super::lexicon;
use super::pos::PosTag;

/// A surface token with its assigned tag
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    pub text: String,
    pub tag: PosTag,
}

impl Token {
    pub fn new(text: impl Into<String>, tag: PosTag) -> Self {
        Self {
            text: text.into(),
            tag,
        }
    }
}

/// Tagged tokens in original word order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaggedSequence {
    tokens: Vec<Token>,
}

impl TaggedSequence {
    pub fn new(tokens: Vec<Token>) -> Self {
        Self { tokens }
    }

    /// Build a sequence from `(word, tag)` pairs
    pub fn from_pairs(pairs: &[(&str, PosTag)]) -> Self {
        Self::new(
            pairs
                .iter()
                .map(|&(text, tag)| Token::new(text, tag))
                .collect(),
        )
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Token> {
        self.tokens.iter()
    }

    /// Surface strings in order
    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.tokens.iter().map(|t| t.text.as_str())
    }

    /// Tags in order
    pub fn tags(&self) -> impl Iterator<Item = PosTag> + '_ {
        self.tokens.iter().map(|t| t.tag)
    }
}

/// Assigns one tag per token
pub trait Tagger: Send + Sync {
    fn tag(&self, tokens: &[String]) -> TaggedSequence;
}

/// Rule- and lexicon-based English tagger
#[derive(Debug, Clone, Copy, Default)]
pub struct LexiconTagger;

/// Already-tagged left context
struct History<'a> {
    entries: &'a [(String, PosTag)],
}

impl History<'_> {
    fn prev(&self) -> Option<(&str, PosTag)> {
        self.entries.last().map(|(w, t)| (w.as_str(), *t))
    }

    fn prev_tag(&self) -> Option<PosTag> {
        self.prev().map(|(_, t)| t)
    }

    fn at_sentence_start(&self) -> bool {
        match self.prev_tag() {
            None => true,
            Some(PosTag::Period) => true,
            Some(PosTag::OpenQuote) => self
                .entries
                .iter()
                .rev()
                .nth(1)
                .map_or(true, |(_, t)| *t == PosTag::Period),
            _ => false,
        }
    }

    /// Whether the nearest non-adverb to the left is a form of "be" or "have".
    fn follows_auxiliary(&self) -> bool {
        self.entries
            .iter()
            .rev()
            .find(|(_, t)| *t != PosTag::RB)
            .and_then(|(w, _)| lexicon::auxiliary(w))
            .map_or(false, |(base, _)| base == "be" || base == "have")
    }

    /// Whether the previous token is a form of "be" (possibly with an adverb in between).
    fn follows_be(&self) -> bool {
        self.entries
            .iter()
            .rev()
            .find(|(_, t)| *t != PosTag::RB)
            .and_then(|(w, _)| lexicon::auxiliary(w))
            .map_or(false, |(base, _)| base == "be")
    }
}

impl LexiconTagger {
    pub fn new() -> Self {
        Self
    }

    fn tag_word(&self, word: &str, next: Option<&str>, history: &History<'_>, quote_open: bool) -> PosTag {
        if let Some(tag) = punctuation_tag(word, quote_open) {
            return tag;
        }

        if word.chars().next().is_some_and(|c| c.is_ascii_digit()) {
            return PosTag::CD;
        }

        let lower = word.to_lowercase();
        let lower = lower.as_str();
        let prev_tag = history.prev_tag();

        if let Some(tag) = contextual_function_word(lower, next, history) {
            return tag;
        }

        if let Some(tag) = lexicon::closed_class(lower) {
            return tag;
        }

        if let Some((base, tag)) = lexicon::auxiliary(lower) {
            if (base == "have" || base == "do") && matches!(prev_tag, Some(PosTag::TO | PosTag::MD)) {
                return PosTag::VB;
            }
            return tag;
        }

        if let Some(form) = lexicon::irregular_verb(lower) {
            if lexicon::is_noun(lower) && prev_tag.is_some_and(is_noun_context) {
                return PosTag::NN;
            }
            return match (form.is_past, form.is_participle) {
                (true, true) if history.follows_auxiliary() => PosTag::VBN,
                (true, _) => PosTag::VBD,
                _ => PosTag::VBN,
            };
        }

        if let Some(tag) = lexicon::graded_adjective(lower) {
            return tag;
        }

        if let Some(tag) = self.known_base_form(lower, next, history) {
            return tag;
        }

        self.by_shape(word, lower, history)
    }

    /// Tag a word that appears in the open-class tables in its base form.
    fn known_base_form(&self, lower: &str, next: Option<&str>, history: &History<'_>) -> Option<PosTag> {
        let noun = lexicon::is_noun(lower);
        let verb = lexicon::is_verb(lower);
        let adj = lexicon::is_adjective(lower);
        let adv = lexicon::is_adverb(lower);

        if !(noun || verb || adj || adv) {
            return None;
        }

        let prev = history.prev();
        let prev_tag = prev.map(|(_, t)| t);

        if verb && matches!(prev_tag, Some(PosTag::TO | PosTag::MD)) {
            return Some(PosTag::VB);
        }
        if verb && prev.is_some_and(|(w, _)| w == "n't" || w == "not") && !history.follows_be() {
            return Some(PosTag::VB);
        }
        if adj && history.follows_be() {
            return Some(PosTag::JJ);
        }
        if prev_tag.is_some_and(is_noun_context) {
            if adj && next.is_some_and(is_nominal) {
                return Some(PosTag::JJ);
            }
            if noun {
                return Some(PosTag::NN);
            }
            if adj {
                return Some(PosTag::JJ);
            }
            if verb {
                return Some(PosTag::NN);
            }
        }
        if verb && matches!(prev_tag, Some(PosTag::PRP | PosTag::NNS | PosTag::WP | PosTag::WDT)) {
            return Some(PosTag::VBP);
        }
        if verb && history.at_sentence_start() && (!noun || next.is_some_and(starts_object)) {
            return Some(PosTag::VB);
        }
        if verb && !noun && prev_tag.is_some_and(|t| t.is_noun()) {
            return Some(PosTag::VBP);
        }
        if adv {
            return Some(PosTag::RB);
        }
        if adj {
            return Some(PosTag::JJ);
        }
        if noun {
            return Some(PosTag::NN);
        }
        Some(PosTag::VB)
    }

    /// Suffix and capitalization heuristics for inflected or unknown words.
    fn by_shape(&self, word: &str, lower: &str, history: &History<'_>) -> PosTag {
        let prev_tag = history.prev_tag();

        if lexicon::irregular_plural(lower).is_some() {
            return PosTag::NNS;
        }

        if lower.len() > 4 && lower.ends_with("ing") {
            return PosTag::VBG;
        }

        if lower.len() > 3 && lower.ends_with("ed") {
            return if history.follows_auxiliary() {
                PosTag::VBN
            } else {
                PosTag::VBD
            };
        }

        if let Some(base) = plural_base(lower) {
            let noun = lexicon::is_noun(&base);
            let verb = lexicon::is_verb(&base);
            let third_person_subject = matches!(
                prev_tag,
                Some(PosTag::NN | PosTag::NNP | PosTag::PRP | PosTag::WP | PosTag::WDT)
            );
            match (noun, verb) {
                (true, false) => return PosTag::NNS,
                (false, true) => return PosTag::VBZ,
                (true, true) if third_person_subject => return PosTag::VBZ,
                (true, true) => return PosTag::NNS,
                _ => {}
            }
        }

        if lower.len() > 4 && lower.ends_with("ly") {
            return PosTag::RB;
        }

        if let Some(tag) = graded_by_suffix(lower) {
            return tag;
        }

        const ADJECTIVE_SUFFIXES: &[&str] = &["ful", "ous", "ive", "able", "ible", "less", "ic", "ish"];
        if lower.len() > 5 && ADJECTIVE_SUFFIXES.iter().any(|s| lower.ends_with(s)) {
            return PosTag::JJ;
        }

        if word.chars().next().is_some_and(|c| c.is_uppercase()) {
            return PosTag::NNP;
        }

        if lower.len() > 3
            && lower.ends_with('s')
            && !["ss", "us", "is"].iter().any(|s| lower.ends_with(s))
        {
            return PosTag::NNS;
        }

        PosTag::NN
    }
}

impl Tagger for LexiconTagger {
    fn tag(&self, tokens: &[String]) -> TaggedSequence {
        let mut entries: Vec<(String, PosTag)> = Vec::with_capacity(tokens.len());
        let mut quote_open = false;

        for (i, word) in tokens.iter().enumerate() {
            let next = tokens.get(i + 1).map(|w| w.as_str());
            let history = History { entries: &entries };
            let tag = self.tag_word(word, next, &history, quote_open);

            if word == "\"" {
                quote_open = !quote_open;
            }
            entries.push((word.to_lowercase(), tag));
        }

        TaggedSequence::new(
            tokens
                .iter()
                .zip(entries)
                .map(|(text, (_, tag))| Token::new(text.clone(), tag))
                .collect(),
        )
    }
}

fn punctuation_tag(word: &str, quote_open: bool) -> Option<PosTag> {
    let tag = match word {
        "." | "?" | "!" => PosTag::Period,
        "," => PosTag::Comma,
        ":" | ";" | "..." | "--" | "-" => PosTag::Colon,
        "(" | "[" | "{" => PosTag::OpenParen,
        ")" | "]" | "}" => PosTag::CloseParen,
        "\"" if quote_open => PosTag::CloseQuote,
        "\"" | "`" | "``" => PosTag::OpenQuote,
        "'" | "''" => PosTag::CloseQuote,
        "$" => PosTag::Dollar,
        "#" => PosTag::Hash,
        _ if word.chars().all(|c| !c.is_alphanumeric() && c != '\'') => PosTag::SYM,
        _ => return None,
    };
    Some(tag)
}

/// Function words whose tag depends on their neighbours.
fn contextual_function_word(lower: &str, next: Option<&str>, history: &History<'_>) -> Option<PosTag> {
    let prev_tag = history.prev_tag();
    let next_lower = next.map(|n| n.to_lowercase());
    let next_lower = next_lower.as_deref();

    let tag = match lower {
        "'s" => {
            let after_subject = matches!(
                prev_tag,
                Some(PosTag::PRP | PosTag::EX | PosTag::WP | PosTag::WDT | PosTag::WRB)
            ) || history
                .prev()
                .is_some_and(|(w, _)| matches!(w, "that" | "this" | "here" | "there"));
            if after_subject {
                PosTag::VBZ
            } else {
                PosTag::POS
            }
        }
        "her" => {
            if next_lower.is_some_and(is_nominal) {
                PosTag::PRPS
            } else {
                PosTag::PRP
            }
        }
        "that" => {
            if next_lower.is_some_and(|n| lexicon::is_noun(n) || lexicon::is_adjective(n)) {
                PosTag::DT
            } else if prev_tag.is_some_and(|t| t.is_noun()) {
                PosTag::WDT
            } else {
                PosTag::IN
            }
        }
        "there" => {
            let next_is_be = next_lower
                .and_then(lexicon::auxiliary)
                .is_some_and(|(base, _)| base == "be")
                || next_lower == Some("'s");
            if next_is_be {
                PosTag::EX
            } else {
                PosTag::RB
            }
        }
        "like" => match prev_tag {
            Some(PosTag::TO | PosTag::MD) => PosTag::VB,
            Some(PosTag::PRP | PosTag::NNS) => PosTag::VBP,
            _ => return None,
        },
        _ if lexicon::is_particle(lower) => {
            if prev_tag.is_some_and(|t| t.is_verb()) {
                PosTag::RP
            } else if let Some(tag) = lexicon::closed_class(lower) {
                tag
            } else if next.map_or(true, |n| punctuation_tag(n, false).is_some()) {
                PosTag::RB
            } else {
                PosTag::IN
            }
        }
        _ => return None,
    };
    Some(tag)
}

/// Tags after which a content word heads or modifies a noun phrase
fn is_noun_context(tag: PosTag) -> bool {
    matches!(
        tag,
        PosTag::DT | PosTag::PDT | PosTag::PRPS | PosTag::POS | PosTag::CD | PosTag::IN
    ) || tag.is_adjective()
}

/// Whether a (lowercase) word can plausibly continue a noun phrase
fn is_nominal(word: &str) -> bool {
    let word = word.to_lowercase();
    let word = word.as_str();
    if lexicon::is_noun(word) || lexicon::is_adjective(word) || lexicon::irregular_plural(word).is_some() {
        return true;
    }
    lexicon::closed_class(word).is_none()
        && lexicon::auxiliary(word).is_none()
        && !lexicon::is_verb(word)
        && !lexicon::is_adverb(word)
        && word.chars().all(|c| c.is_alphabetic())
}

/// Whether a word typically opens the object of an imperative verb
fn starts_object(word: &str) -> bool {
    matches!(
        lexicon::closed_class(&word.to_lowercase()),
        Some(PosTag::DT | PosTag::PRP | PosTag::PRPS | PosTag::IN)
    )
}

/// Candidate singular / base form of an "-s" inflection
fn plural_base(lower: &str) -> Option<String> {
    if lower.len() <= 3 || !lower.ends_with('s') || lower.ends_with("ss") {
        return None;
    }
    if let Some(stem) = lower.strip_suffix("ies") {
        let candidate = format!("{}y", stem);
        if lexicon::is_noun(&candidate) || lexicon::is_verb(&candidate) {
            return Some(candidate);
        }
    }
    if let Some(stem) = lower.strip_suffix("es") {
        if ["ch", "sh", "x", "s", "z", "o"].iter().any(|e| stem.ends_with(e))
            && (lexicon::is_noun(stem) || lexicon::is_verb(stem))
        {
            return Some(stem.to_string());
        }
    }
    lower.strip_suffix('s').map(str::to_string)
}

/// JJR / JJS for "-er" / "-est" forms of listed adjectives
fn graded_by_suffix(lower: &str) -> Option<PosTag> {
    for (suffix, tag) in [("est", PosTag::JJS), ("er", PosTag::JJR)] {
        if let Some(stem) = lower.strip_suffix(suffix) {
            if stem.len() >= 2
                && (lexicon::is_adjective(stem)
                    || lexicon::is_adjective(&format!("{}e", stem))
                    || stem
                        .strip_suffix('i')
                        .is_some_and(|s| lexicon::is_adjective(&format!("{}y", s))))
            {
                return Some(tag);
            }
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::text::tokenizer::Tokenizer;

    fn tag_text(text: &str) -> Vec<(String, PosTag)> {
        let tokens = Tokenizer::new().tokenize(text);
        LexiconTagger::new()
            .tag(&tokens)
            .iter()
            .map(|t| (t.text.clone(), t.tag))
            .collect()
    }

    fn tags(text: &str) -> Vec<PosTag> {
        tag_text(text).into_iter().map(|(_, t)| t).collect()
    }

    #[test]
    fn test_simple_sentence() {
        assert_eq!(
            tags("The dog ran fast. It was happy."),
            vec![
                PosTag::DT,
                PosTag::NN,
                PosTag::VBD,
                PosTag::RB,
                PosTag::Period,
                PosTag::PRP,
                PosTag::VBD,
                PosTag::JJ,
                PosTag::Period,
            ]
        );
    }

    #[test]
    fn test_gerunds_and_plurals() {
        let tagged = tag_text("The mother is washing the dishes.");
        assert_eq!(tagged[3], ("washing".to_string(), PosTag::VBG));
        assert_eq!(tagged[5], ("dishes".to_string(), PosTag::NNS));
    }

    #[test]
    fn test_third_person_verb_after_noun() {
        let tagged = tag_text("the water spills");
        assert_eq!(tagged[2].1, PosTag::VBZ);
    }

    #[test]
    fn test_passive_participle() {
        let tagged = tag_text("the cookie was taken");
        assert_eq!(tagged[3].1, PosTag::VBN);
        let tagged = tag_text("the boy has stolen a cookie");
        assert_eq!(tagged[3].1, PosTag::VBN);
    }

    #[test]
    fn test_possessive_versus_object_her() {
        let tagged = tag_text("she dries her plate");
        assert_eq!(tagged[2].1, PosTag::PRPS);
        let tagged = tag_text("he asks her.");
        assert_eq!(tagged[2].1, PosTag::PRP);
    }

    #[test]
    fn test_infinitive_after_to() {
        let tagged = tag_text("trying to reach the jar");
        assert_eq!(tagged[0].1, PosTag::VBG);
        assert_eq!(tagged[2].1, PosTag::VB);
        assert_eq!(tagged[4].1, PosTag::NN);
    }

    #[test]
    fn test_clitics() {
        let tagged = tag_text("it's the boy's stool");
        assert_eq!(tagged[1].1, PosTag::VBZ);
        assert_eq!(tagged[4].1, PosTag::POS);
    }

    #[test]
    fn test_unknown_capitalized_is_proper_noun() {
        let tagged = tag_text("we met Harrison");
        assert_eq!(tagged[2].1, PosTag::NNP);
    }

    #[test]
    fn test_noun_after_determiner_even_if_verb() {
        let tagged = tag_text("the fall");
        assert_eq!(tagged[1].1, PosTag::NN);
        let tagged = tag_text("they fall");
        assert_eq!(tagged[1].1, PosTag::VBP);
    }

    #[test]
    fn test_one_tag_per_token() {
        let tokens = Tokenizer::new().tokenize("Well, uh, the sink is overflowing... isn't it?");
        let tagged = LexiconTagger::new().tag(&tokens);
        assert_eq!(tagged.len(), tokens.len());
        assert!(tagged.words().eq(tokens.iter().map(|s| s.as_str())));
    }

    #[test]
    fn test_deterministic() {
        let text = "The boy is taking cookies from the jar while his sister watches.";
        assert_eq!(tag_text(text), tag_text(text));
    }
}
