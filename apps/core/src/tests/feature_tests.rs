//! Feature Tests
//!
//! Properties of the individual statistics, checked on text that goes
//! through the real tokenizer, tagger and lemmatizer.

use crate::features::frequency::FrequencyDistribution;
use crate::features::lexical::{brunet_index, type_token_ratio};
use crate::features::{ConceptMatcher, PhraseChunker, PhraseLabel, SurfaceCounts};
use crate::text::{Lemmatizer, LexiconTagger, MorphyLemmatizer, PosHint, PosTag, Tagger, Tokenizer};

fn tag(text: &str) -> crate::text::TaggedSequence {
    LexiconTagger::new().tag(&Tokenizer::new().tokenize(text))
}

#[cfg(test)]
mod lexical_tests {
    use super::*;

    #[test]
    fn test_ttr_is_one_iff_all_tokens_distinct() {
        let cases = vec![
            ("the boy took a cookie", true),
            ("the boy took the cookie", false),
            ("water water", false),
            ("sink", true),
        ];

        for (text, distinct) in cases {
            let dist: FrequencyDistribution<String> = Tokenizer::new().tokenize(text).into_iter().collect();
            let ttr = type_token_ratio(&dist).unwrap();
            assert!(ttr > 0.0 && ttr <= 1.0, "TTR out of range for '{}'", text);
            assert_eq!(ttr == 1.0, distinct, "Unexpected TTR {} for '{}'", ttr, text);
        }
    }

    #[test]
    fn test_brunet_non_increasing_for_fixed_vocabulary() {
        for distinct in [1, 5, 40] {
            let values: Vec<f64> = (distinct..distinct + 200)
                .map(|n| brunet_index(n, distinct).unwrap())
                .collect();
            assert!(
                values.windows(2).all(|w| w[1] <= w[0]),
                "Brunet index increased for V = {}",
                distinct
            );
        }
    }
}

#[cfg(test)]
mod chunking_tests {
    use super::*;

    #[test]
    fn test_gerund_phrase_in_picture_description() {
        let sequence = tag("The mother is washing the dishes.");
        let counts = PhraseChunker::new().chunk(&sequence).counts();
        assert_eq!(counts.vgp, 1);
        assert_eq!(counts.get(PhraseLabel::Vgp), 1);
    }

    #[test]
    fn test_spans_stay_inside_sequence() {
        let sequence = tag("The boy on the stool is taking a cookie from the jar and the stool is falling.");
        let forest = PhraseChunker::new().chunk(&sequence);
        for span in forest.spans() {
            assert!(span.start < span.end);
            assert!(span.end <= sequence.len());
        }
        assert!(forest.counts().np + forest.counts().clause + forest.counts().pp > 0);
    }

    #[test]
    fn test_chunking_is_deterministic() {
        let sequence = tag("The girl is reaching for a cookie while the water spills on the floor.");
        let chunker = PhraseChunker::new();
        assert_eq!(chunker.chunk(&sequence), chunker.chunk(&sequence));
    }
}

#[cfg(test)]
mod lemma_and_concept_tests {
    use super::*;

    fn lemmas(text: &str) -> Vec<String> {
        let lemmatizer = MorphyLemmatizer::new();
        tag(text)
            .iter()
            .map(|t| lemmatizer.lemmatize(&t.text, PosHint::from_tag(t.tag)))
            .collect()
    }

    #[test]
    fn test_single_concept_term() {
        assert_eq!(ConceptMatcher::new().count(&["cookie"]), 1);
    }

    #[test]
    fn test_inflected_forms_reach_concept_lexicons() {
        // cookies -> cookie, dishes -> dish, stealing -> steal
        let lemmas = lemmas("The boy is stealing cookies and the mother dries dishes.");
        let matches = ConceptMatcher::new().analyze(&lemmas);
        assert!(matches.total >= 4, "lemmas: {:?}", lemmas);
    }

    #[test]
    fn test_verb_tags_select_verb_mode() {
        let sequence = tag("She was taking the plates.");
        let taking = &sequence.tokens()[2];
        assert_eq!(taking.tag, PosTag::VBG);
        assert_eq!(
            MorphyLemmatizer::new().lemmatize(&taking.text, PosHint::from_tag(taking.tag)),
            "take"
        );
    }
}

#[cfg(test)]
mod surface_count_tests {
    use super::*;

    #[test]
    fn test_sentence_count_is_periods_plus_questions() {
        let cases = vec![
            ("The dog ran fast. It was happy.", 2),
            ("Is that a cookie? Yes.", 2),
            ("Well... the boy fell?!", 4),
            ("no punctuation at all", 0),
        ];

        for (text, expected) in cases {
            assert_eq!(
                SurfaceCounts::from_text(text).num_sentences,
                expected,
                "Unexpected sentence count for '{}'",
                text
            );
        }
    }
}
