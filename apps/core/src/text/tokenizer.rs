//! Word segmentation.
//!
//! Splits raw text into word, number and punctuation tokens. Clitics are
//! detached the way Treebank tokenizers do it ("don't" -> "do" + "n't",
//! "it's" -> "it" + "'s").

use regex::Regex;
use std::sync::LazyLock;

// NOTE: expect() is acceptable here: the patterns are constant and covered by tests.
static TOKEN_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?x)
          \d+(?:[.,:]\d+)*%?                             # numbers, times, percentages
        | (?i:mr|mrs|ms|dr|st|jr|sr|vs|etc|prof)\.       # common abbreviations
        | \p{L}+(?:[-'’]\p{L}+)*                         # words with inner hyphens / apostrophes
        | ['’](?i:s|m|re|ve|ll|d)\b                      # clitic already split off
        | \.\.\.                                         # ellipsis
        | --                                             # dash
        | [^\s\p{L}\d]                                   # any other single symbol
        ",
    )
    .expect("Invalid regex: token pattern")
});

const CLITICS: &[&str] = &["'s", "'m", "'re", "'ve", "'ll", "'d"];

/// Treebank-style word tokenizer
#[derive(Debug, Clone, Copy, Default)]
pub struct Tokenizer;

impl Tokenizer {
    /// Create a new tokenizer
    pub fn new() -> Self {
        Self
    }

    /// Split `text` into tokens, preserving their original order and casing.
    pub fn tokenize(&self, text: &str) -> Vec<String> {
        let mut tokens = Vec::new();

        for m in TOKEN_PATTERN.find_iter(text) {
            let raw = m.as_str().replace('’', "'");
            split_clitic(&raw, &mut tokens);
        }

        tokens
    }
}

/// Push `word`, detaching a trailing clitic when present.
fn split_clitic(word: &str, out: &mut Vec<String>) {
    let lower = word.to_lowercase();

    if lower.len() > 3 && lower.ends_with("n't") {
        let cut = word.len() - 3;
        out.push(word[..cut].to_string());
        out.push(word[cut..].to_string());
        return;
    }

    for clitic in CLITICS {
        if lower.len() > clitic.len() && lower.ends_with(clitic) {
            let cut = word.len() - clitic.len();
            out.push(word[..cut].to_string());
            out.push(word[cut..].to_string());
            return;
        }
    }

    out.push(word.to_string());
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(text: &str) -> Vec<String> {
        Tokenizer::new().tokenize(text)
    }

    #[test]
    fn test_splits_punctuation() {
        assert_eq!(
            tokens("The dog ran fast. It was happy."),
            vec!["The", "dog", "ran", "fast", ".", "It", "was", "happy", "."]
        );
    }

    #[test]
    fn test_contractions() {
        assert_eq!(tokens("don't"), vec!["do", "n't"]);
        assert_eq!(tokens("It's here"), vec!["It", "'s", "here"]);
        assert_eq!(tokens("the boy’s stool"), vec!["the", "boy", "'s", "stool"]);
        assert_eq!(tokens("they're"), vec!["they", "'re"]);
    }

    #[test]
    fn test_keeps_hyphenated_words_and_numbers() {
        assert_eq!(
            tokens("a well-known 3.5 percent"),
            vec!["a", "well-known", "3.5", "percent"]
        );
    }

    #[test]
    fn test_ellipsis_and_questions() {
        assert_eq!(
            tokens("and then... what?"),
            vec!["and", "then", "...", "what", "?"]
        );
    }

    #[test]
    fn test_abbreviation_keeps_period() {
        assert_eq!(tokens("Mr. Smith"), vec!["Mr.", "Smith"]);
    }

    #[test]
    fn test_empty_text() {
        assert!(tokens("").is_empty());
        assert!(tokens("   \n ").is_empty());
    }
}
