// Semantic Dimension
// Qualifier density raises the score; emotional and first-person language lowers it.

use crate::models::{DimensionScore, Metric, WordClass};
use crate::services::rules::Lexicon;
use crate::services::text_processor::round2;

pub fn analyze(tokens: &[String], lexicon: &Lexicon) -> DimensionScore {
    let total = tokens.len();
    if total == 0 {
        return DimensionScore::empty();
    }

    let qualifiers = tokens
        .iter()
        .filter(|t| lexicon.is_class(t, WordClass::Qualifier))
        .count();
    // Summed across groups: a word listed in two groups counts twice
    let emotion: usize = tokens.iter().map(|t| lexicon.emotion_hits(t)).sum();
    let first_person = tokens.iter().filter(|t| lexicon.is_first_person(t)).count();

    let emotion_ratio = emotion as f64 / total as f64 * 100.0;
    let first_person_ratio = first_person as f64 / total as f64 * 100.0;

    let raw = qualifiers as f64 * 5.0
        + (50.0 - emotion_ratio * 10.0).max(0.0)
        + (30.0 - first_person_ratio * 10.0).max(0.0);

    let mut score = DimensionScore {
        score: round2(raw.min(100.0)),
        ..DimensionScore::default()
    };
    let details = &mut score.details;
    details.insert("qualifier_count".into(), Metric::Count(qualifiers));
    details.insert("emotion_count".into(), Metric::Count(emotion));
    details.insert("first_person_count".into(), Metric::Count(first_person));
    details.insert("emotion_ratio".into(), Metric::Ratio(round2(emotion_ratio)));
    details.insert("first_person_ratio".into(), Metric::Ratio(round2(first_person_ratio)));
    score
}
