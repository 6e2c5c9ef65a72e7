// Lexical Dimension
// AI vocabulary density: high-frequency words, connectors, formal words, qualifiers, fixed phrases.

use crate::models::{DimensionScore, Metric, WordClass};
use crate::services::rules::Lexicon;
use crate::services::text_processor::round2;

pub fn analyze(text: &str, tokens: &[String], lexicon: &Lexicon) -> DimensionScore {
    let total = tokens.len();
    if total == 0 {
        return DimensionScore::empty();
    }

    let count = |class: WordClass| tokens.iter().filter(|t| lexicon.is_class(t, class)).count();
    let high_freq = count(WordClass::HighFrequency);
    let connectors = count(WordClass::Connector);
    let formal = count(WordClass::Formal);
    let qualifiers = count(WordClass::Qualifier);
    let fixed_phrases = lexicon.fixed_phrase_hits(text);

    let pct = |n: usize| n as f64 / total as f64 * 100.0;
    let high_freq_ratio = pct(high_freq);
    let connector_ratio = pct(connectors);
    let formal_ratio = pct(formal);

    let raw = high_freq_ratio * 15.0
        + connector_ratio * 15.0
        + formal_ratio * 10.0
        + qualifiers as f64 * 2.0
        + fixed_phrases as f64 * 5.0;

    let mut score = DimensionScore {
        score: round2(raw.min(100.0)),
        ..DimensionScore::default()
    };
    let details = &mut score.details;
    details.insert("high_freq_words".into(), Metric::Count(high_freq));
    details.insert("connectors".into(), Metric::Count(connectors));
    details.insert("formal_words".into(), Metric::Count(formal));
    details.insert("qualifiers".into(), Metric::Count(qualifiers));
    details.insert("fixed_phrases".into(), Metric::Count(fixed_phrases));
    details.insert("high_freq_ratio".into(), Metric::Ratio(round2(high_freq_ratio)));
    details.insert("connector_ratio".into(), Metric::Ratio(round2(connector_ratio)));
    details.insert("formal_ratio".into(), Metric::Ratio(round2(formal_ratio)));
    score
}
