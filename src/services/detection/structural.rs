// Structural Dimension
// Document skeleton: formulaic opening/closing, list indicators, paragraph length.

use crate::models::{DimensionScore, Metric, PatternCategory};
use crate::services::rules::{Lexicon, PatternLibrary};
use crate::services::text_processor::{average_char_len, char_len, round2, split_paragraphs};

const LONG_PARAGRAPH_CHARS: f64 = 100.0;

pub fn analyze(text: &str, lexicon: &Lexicon, patterns: &PatternLibrary) -> DimensionScore {
    let paragraphs = split_paragraphs(text);
    let has_opening = patterns.has_match(text, PatternCategory::Opening);
    let has_closing = patterns.has_match(text, PatternCategory::Closing);
    let list_indicators = lexicon.list_indicator_hits(text);
    let avg_para_length = average_char_len(&paragraphs).unwrap_or_else(|| char_len(text) as f64);

    let mut raw = list_indicators as f64 * 8.0;
    if has_opening {
        raw += 30.0;
    }
    if has_closing {
        raw += 30.0;
    }
    if avg_para_length > LONG_PARAGRAPH_CHARS {
        raw += 20.0;
    }

    let mut score = DimensionScore {
        score: round2(raw.min(100.0)),
        ..DimensionScore::default()
    };
    let details = &mut score.details;
    details.insert("paragraph_count".into(), Metric::Count(paragraphs.len()));
    details.insert("has_opening_pattern".into(), Metric::Flag(has_opening));
    details.insert("has_closing_pattern".into(), Metric::Flag(has_closing));
    details.insert("list_structure_count".into(), Metric::Count(list_indicators));
    details.insert("avg_paragraph_length".into(), Metric::Ratio(round2(avg_para_length)));
    score
}
