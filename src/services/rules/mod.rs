// Rule Corpus
// Static word lists and pattern groups shared read-only by the detector and the humanizer.
// - keywords: AI vocabulary by word class
// - replacements: substitution table and human-voice expression lists
// - patterns: compiled structural patterns

pub mod keywords;
pub mod patterns;
pub mod replacements;

pub use patterns::PatternLibrary;

use crate::models::WordClass;
use std::collections::{HashMap, HashSet};
use std::sync::OnceLock;

use keywords::{CONNECTORS, FIXED_PHRASES, FORMAL_WORDS, HIGH_FREQ_WORDS, LIST_INDICATORS, QUALIFIERS};
use replacements::{EMOTION_WORDS, FIRST_PERSON_EXPRESSIONS, WORD_REPLACEMENTS};

/// Indexed view over the static word lists. Built once, never mutated.
#[derive(Debug)]
pub struct Lexicon {
    high_freq: HashSet<&'static str>,
    connectors: HashSet<&'static str>,
    formal: HashSet<&'static str>,
    qualifiers: HashSet<&'static str>,
    emotion_groups: Vec<(&'static str, HashSet<&'static str>)>,
    first_person: HashSet<&'static str>,
    replacements: HashMap<&'static str, &'static [&'static str]>,
}

impl Lexicon {
    pub fn new() -> Self {
        Self {
            high_freq: HIGH_FREQ_WORDS.iter().copied().collect(),
            connectors: CONNECTORS.iter().copied().collect(),
            formal: FORMAL_WORDS.iter().copied().collect(),
            qualifiers: QUALIFIERS.iter().copied().collect(),
            emotion_groups: EMOTION_WORDS
                .iter()
                .map(|(name, words)| (*name, words.iter().copied().collect()))
                .collect(),
            first_person: FIRST_PERSON_EXPRESSIONS.iter().copied().collect(),
            replacements: WORD_REPLACEMENTS.iter().copied().collect(),
        }
    }

    /// Process-wide instance, indexed on first use.
    pub fn global() -> &'static Lexicon {
        static LEXICON: OnceLock<Lexicon> = OnceLock::new();
        LEXICON.get_or_init(Lexicon::new)
    }

    pub fn is_class(&self, token: &str, class: WordClass) -> bool {
        match class {
            WordClass::HighFrequency => self.high_freq.contains(token),
            WordClass::Connector => self.connectors.contains(token),
            WordClass::Formal => self.formal.contains(token),
            WordClass::Qualifier => self.qualifiers.contains(token),
        }
    }

    /// All classes the token belongs to; usually zero or one.
    pub fn classify(&self, token: &str) -> Vec<WordClass> {
        [
            WordClass::HighFrequency,
            WordClass::Connector,
            WordClass::Formal,
            WordClass::Qualifier,
        ]
        .into_iter()
        .filter(|class| self.is_class(token, *class))
        .collect()
    }

    pub fn is_emotion_word(&self, token: &str) -> bool {
        self.emotion_groups.iter().any(|(_, words)| words.contains(token))
    }

    /// Number of emotion groups containing the token.
    pub fn emotion_hits(&self, token: &str) -> usize {
        self.emotion_groups
            .iter()
            .filter(|(_, words)| words.contains(token))
            .count()
    }

    pub fn emotion_group_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.emotion_groups.iter().map(|(name, _)| *name)
    }

    pub fn is_first_person(&self, token: &str) -> bool {
        self.first_person.contains(token)
    }

    /// Candidate substitutes for `word`, or an empty slice when there are none.
    pub fn replacements(&self, word: &str) -> &'static [&'static str] {
        self.replacements.get(word).copied().unwrap_or(&[])
    }

    pub fn has_replacement(&self, word: &str) -> bool {
        !self.replacements(word).is_empty()
    }

    /// Number of fixed phrases contained in `text` (presence, not occurrences).
    pub fn fixed_phrase_hits(&self, text: &str) -> usize {
        FIXED_PHRASES.iter().filter(|p| text.contains(*p)).count()
    }

    /// Number of list indicators contained in `text` (presence, not occurrences).
    pub fn list_indicator_hits(&self, text: &str) -> usize {
        LIST_INDICATORS.iter().filter(|w| text.contains(*w)).count()
    }

    pub fn high_freq_words(&self) -> &'static [&'static str] {
        HIGH_FREQ_WORDS
    }

    pub fn formal_words(&self) -> &'static [&'static str] {
        FORMAL_WORDS
    }
}

impl Default for Lexicon {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_light_tier_words_have_replacements() {
        let lexicon = Lexicon::global();
        for word in lexicon.high_freq_words().iter().take(20) {
            assert!(lexicon.has_replacement(word), "missing replacement for {}", word);
        }
        for word in lexicon.formal_words().iter().take(10) {
            assert!(lexicon.has_replacement(word), "missing replacement for {}", word);
        }
    }

    #[test]
    fn test_replacements_never_echo_the_word() {
        for (word, candidates) in WORD_REPLACEMENTS {
            assert!(!candidates.is_empty(), "{} has no candidates", word);
            assert!(!candidates.contains(word), "{} maps to itself", word);
        }
    }

    #[test]
    fn test_classify() {
        let lexicon = Lexicon::global();
        assert_eq!(lexicon.classify("首先"), vec![WordClass::Connector]);
        assert_eq!(lexicon.classify("进行"), vec![WordClass::Formal]);
        assert!(lexicon.classify("公园").is_empty());
        let both = lexicon.classify("至关重要");
        assert!(both.contains(&WordClass::HighFrequency));
        assert!(both.contains(&WordClass::Qualifier));
    }

    #[test]
    fn test_emotion_and_first_person() {
        let lexicon = Lexicon::global();
        assert!(lexicon.is_emotion_word("开心"));
        assert_eq!(lexicon.emotion_hits("开心"), 1);
        assert!(!lexicon.is_emotion_word("技术"));
        assert!(lexicon.is_first_person("我"));
        assert!(!lexicon.is_first_person("它"));
        assert!(lexicon.emotion_group_names().count() >= 6);
    }

    #[test]
    fn test_emotion_groups_are_disjoint() {
        // keeps emotion_ratio within [0, 100]
        let lexicon = Lexicon::global();
        for (_, words) in EMOTION_WORDS {
            for word in *words {
                assert_eq!(lexicon.emotion_hits(word), 1, "{} is in several groups", word);
            }
        }
    }

    #[test]
    fn test_phrase_and_indicator_hits_count_presence() {
        let lexicon = Lexicon::global();
        assert_eq!(lexicon.list_indicator_hits("首先……首先……其次"), 2);
        assert_eq!(lexicon.fixed_phrase_hits("众所周知，众所周知。"), 1);
        assert_eq!(lexicon.replacements("公园").len(), 0);
    }
}
