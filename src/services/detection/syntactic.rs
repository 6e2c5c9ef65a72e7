// Syntactic Dimension
// Sentence length profile plus fixed-template, parallelism and list pattern hits.

use crate::models::{DimensionScore, Metric, PatternCategory};
use crate::services::rules::PatternLibrary;
use crate::services::text_processor::{char_len, round2, split_sentences};

const LONG_SENTENCE_CHARS: usize = 40;
const SHORT_SENTENCE_CHARS: usize = 5;

pub fn analyze(text: &str, patterns: &PatternLibrary) -> DimensionScore {
    let sentences = split_sentences(text);
    if sentences.is_empty() {
        return DimensionScore::empty();
    }

    let lengths: Vec<usize> = sentences.iter().map(|s| char_len(s)).collect();
    let avg_length = lengths.iter().sum::<usize>() as f64 / sentences.len() as f64;
    let too_long = lengths.iter().filter(|&&l| l > LONG_SENTENCE_CHARS).count();
    let too_short = lengths.iter().filter(|&&l| l < SHORT_SENTENCE_CHARS).count();

    // Per-sentence hits accumulate; the same template in two sentences counts twice
    let fixed: usize = sentences
        .iter()
        .map(|s| patterns.check(s, PatternCategory::Fixed).len())
        .sum();
    let parallel: usize = sentences
        .iter()
        .map(|s| patterns.check(s, PatternCategory::Parallel).len())
        .sum();
    let list = patterns.check(text, PatternCategory::List).len();

    let raw = (avg_length / 50.0) * 20.0
        + fixed as f64 * 8.0
        + parallel as f64 * 10.0
        + list as f64 * 12.0
        + too_long as f64 * 5.0;

    let mut score = DimensionScore {
        score: round2(raw.min(100.0)),
        ..DimensionScore::default()
    };
    let details = &mut score.details;
    details.insert("sentence_count".into(), Metric::Count(sentences.len()));
    details.insert("avg_sentence_length".into(), Metric::Ratio(round2(avg_length)));
    details.insert("fixed_patterns".into(), Metric::Count(fixed));
    details.insert("parallel_patterns".into(), Metric::Count(parallel));
    details.insert("list_patterns".into(), Metric::Count(list));
    details.insert("too_long_sentences".into(), Metric::Count(too_long));
    details.insert("too_short_sentences".into(), Metric::Count(too_short));
    score
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_text_is_empty() {
        let score = analyze(" \n\n ", PatternLibrary::global());
        assert_eq!(score.score, 0.0);
        assert!(score.details.is_empty());
    }

    #[test]
    fn test_length_profile() {
        let score = analyze("你好。今天我们一起去公园散步吧！", PatternLibrary::global());
        assert_eq!(score.count("sentence_count"), 2);
        assert_eq!(score.ratio("avg_sentence_length"), 7.0);
        assert_eq!(score.count("too_short_sentences"), 1);
        assert_eq!(score.count("too_long_sentences"), 0);
        // (7 / 50) * 20
        assert_eq!(score.score, 2.8);
    }

    #[test]
    fn test_fixed_template_counts_per_sentence() {
        let text = "这样不仅节省时间而且降低成本。那样不仅提高质量而且改善体验。";
        let score = analyze(text, PatternLibrary::global());
        assert_eq!(score.count("fixed_patterns"), 2);
        assert!(score.score >= 16.0);
    }

    #[test]
    fn test_score_is_capped() {
        let sentence = "不仅节省时间而且降低成本，".repeat(10);
        let text = format!("{}。", sentence).repeat(5);
        let score = analyze(&text, PatternLibrary::global());
        assert_eq!(score.score, 100.0);
        assert_eq!(score.count("too_long_sentences"), 5);
    }
}
