// Word Substitution
// Swaps AI vocabulary for plainer synonyms, one first-occurrence replacement at a time.

use crate::models::{Change, ChangeKind};
use crate::services::random_source::{choose, RandomSource};
use crate::services::rules::Lexicon;

/// How many leading high-frequency / formal words the light tier looks at.
pub const LIGHT_HIGH_FREQ_LIMIT: usize = 20;
pub const LIGHT_FORMAL_LIMIT: usize = 10;

fn replace_first(
    text: &mut String,
    word: &str,
    lexicon: &Lexicon,
    rng: &mut dyn RandomSource,
    changes: &mut Vec<Change>,
) {
    if let Some(new_word) = choose(rng, lexicon.replacements(word)) {
        *text = text.replacen(word, new_word, 1);
        changes.push(Change::new(ChangeKind::WordSubstitution, word, *new_word));
    }
}

/// Light tier: the first occurrence of each leading high-frequency and formal word.
/// Later occurrences of the same word are left alone.
pub fn light_substitution(
    text: &str,
    lexicon: &Lexicon,
    rng: &mut dyn RandomSource,
) -> (String, Vec<Change>) {
    let mut out = text.to_string();
    let mut changes = Vec::new();

    let candidates = lexicon
        .high_freq_words()
        .iter()
        .take(LIGHT_HIGH_FREQ_LIMIT)
        .chain(lexicon.formal_words().iter().take(LIGHT_FORMAL_LIMIT));
    for word in candidates {
        if out.contains(word) && lexicon.has_replacement(word) {
            replace_first(&mut out, word, lexicon, rng, &mut changes);
        }
    }
    (out, changes)
}

/// Ratio pass: every token with replacements is drawn against `ratio`; a hit replaces
/// the first remaining occurrence of that token in the working text.
///
/// Tokens come from the text as it was before the pass, so a repeated word may have a
/// later occurrence rewritten while an earlier one survives a previous rewrite.
pub fn ratio_substitution(
    text: &str,
    tokens: &[String],
    lexicon: &Lexicon,
    ratio: f64,
    rng: &mut dyn RandomSource,
) -> (String, Vec<Change>) {
    let mut out = text.to_string();
    let mut changes = Vec::new();

    for token in tokens {
        if !lexicon.has_replacement(token) || rng.uniform() >= ratio {
            continue;
        }
        let Some(new_word) = choose(rng, lexicon.replacements(token)) else {
            continue;
        };
        if out.contains(token.as_str()) {
            out = out.replacen(token.as_str(), new_word, 1);
            changes.push(Change::new(ChangeKind::WordSubstitution, token.as_str(), *new_word));
        }
    }
    (out, changes)
}
