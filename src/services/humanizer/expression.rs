// Human-Voice Expressions
// Splices first-person lead-ins, intensifiers, hedges and sentence-final particles into text.

use crate::models::{Change, ChangeKind};
use crate::services::random_source::{choose, sample, RandomSource};
use crate::services::rules::replacements::{
    ABSOLUTE_WORDS, COLLOQUIAL_MARKERS, EMOTION_INTENSIFIERS, PERSONAL_LEADINS,
    UNCERTAINTY_EXPRESSIONS,
};
use crate::services::text_processor::{
    char_len, content_indices, split_keep_delimiters, REWRITE_TERMINATORS,
};

const PERSONAL_VOICE_TERMINATORS: &[char] = &['。', '！', '？', '\n'];
const PERSONAL_VOICE_SENTENCES: usize = 2;
const PERSONAL_VOICE_MIN_CHARS: usize = 10;
const EMOTION_SENTENCES: usize = 2;
const EMOTION_MIN_UNITS: usize = 3;
const EMOTION_PROBABILITY: f64 = 0.5;
const HEDGE_POOL: usize = 5;
const PARTICLE_POOL: usize = 5;
const PARTICLE_MIN_CHARS: usize = 5;

/// Prefix a first-person lead-in to up to two sampled sentences longer than 10 chars.
pub fn add_personal_voice(text: &str, rng: &mut dyn RandomSource) -> (String, Vec<Change>) {
    let mut pieces = split_keep_delimiters(text, PERSONAL_VOICE_TERMINATORS);
    let indices = content_indices(&pieces);
    let mut changes = Vec::new();

    for idx in sample(rng, &indices, PERSONAL_VOICE_SENTENCES) {
        if char_len(&pieces[idx]) <= PERSONAL_VOICE_MIN_CHARS {
            continue;
        }
        if let Some(leadin) = choose(rng, PERSONAL_LEADINS) {
            pieces[idx].insert_str(0, leadin);
            changes.push(Change::new(ChangeKind::PersonalVoice, "", *leadin));
        }
    }
    (pieces.concat(), changes)
}

/// With at least three sentences, sample two; each one closed by '。' gets an
/// intensifier prefix with probability one half.
pub fn add_emotion_markers(text: &str, rng: &mut dyn RandomSource) -> (String, Vec<Change>) {
    let mut pieces = split_keep_delimiters(text, REWRITE_TERMINATORS);
    let indices = content_indices(&pieces);
    let mut changes = Vec::new();
    if indices.len() < EMOTION_MIN_UNITS {
        return (text.to_string(), changes);
    }

    for idx in sample(rng, &indices, EMOTION_SENTENCES) {
        if pieces.get(idx + 1).map(String::as_str) != Some("。") {
            continue;
        }
        if rng.uniform() >= EMOTION_PROBABILITY {
            continue;
        }
        if let Some(word) = choose(rng, EMOTION_INTENSIFIERS) {
            pieces[idx].insert_str(0, word);
            changes.push(Change::new(ChangeKind::EmotionMarker, "", *word));
        }
    }
    (pieces.concat(), changes)
}

/// Replace the first occurrence of each absolute word with a hedge.
pub fn soften_certainty(text: &str, rng: &mut dyn RandomSource) -> (String, Vec<Change>) {
    let hedges = &UNCERTAINTY_EXPRESSIONS[..HEDGE_POOL.min(UNCERTAINTY_EXPRESSIONS.len())];
    let mut out = text.to_string();
    let mut changes = Vec::new();

    for word in ABSOLUTE_WORDS {
        if !out.contains(word) {
            continue;
        }
        if let Some(hedge) = choose(rng, hedges) {
            out = out.replacen(word, hedge, 1);
            changes.push(Change::new(ChangeKind::CertaintySoftening, *word, *hedge));
        }
    }
    (out, changes)
}

/// Append a sentence-final particle to up to `count` sampled sentences that are longer
/// than 5 chars and end in '。' or '！'. The particle goes before the mark.
pub fn add_colloquial_particles(
    text: &str,
    count: usize,
    rng: &mut dyn RandomSource,
) -> (String, Vec<Change>) {
    let particles = &COLLOQUIAL_MARKERS[..PARTICLE_POOL.min(COLLOQUIAL_MARKERS.len())];
    let mut pieces = split_keep_delimiters(text, REWRITE_TERMINATORS);
    let indices = content_indices(&pieces);
    let mut changes = Vec::new();

    for idx in sample(rng, &indices, count) {
        if char_len(&pieces[idx]) <= PARTICLE_MIN_CHARS {
            continue;
        }
        if !matches!(pieces.get(idx + 1).map(String::as_str), Some("。") | Some("！")) {
            continue;
        }
        if let Some(particle) = choose(rng, particles) {
            pieces[idx].push_str(particle);
            changes.push(Change::new(ChangeKind::ColloquialParticle, "", *particle));
        }
    }
    (pieces.concat(), changes)
}
