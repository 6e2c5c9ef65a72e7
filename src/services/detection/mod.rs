// Detection Module
// Multi-dimensional AI text scoring, organized into specialized submodules:
// - lexical / syntactic / structural / semantic: one independent analyzer per dimension
// - aggregation: weighted combination, verdict and summary
// - report: fixed-layout text report

pub mod aggregation;
pub mod lexical;
pub mod report;
pub mod semantic;
pub mod structural;
pub mod syntactic;

pub use aggregation::{derive_verdict, dominant_dimension, score_level, summarize, weighted_score};
pub use report::generate_report;

use crate::models::{DetectionResult, DimensionScore, DimensionSet};
use crate::services::config_store::DetectionConfig;
use crate::services::rules::{Lexicon, PatternLibrary};
use crate::services::segmenter::{JiebaSegmenter, Segmenter};
use crate::services::text_processor::{char_len, preview, round2};
use tracing::{debug, info};

/// Scores text against the rule corpus. Holds only shared read-only references,
/// so one detector may serve any number of calls.
pub struct Detector<'a> {
    lexicon: &'a Lexicon,
    patterns: &'a PatternLibrary,
    segmenter: &'a dyn Segmenter,
    config: DetectionConfig,
}

impl Detector<'static> {
    /// Detector over the process-wide lexicon, pattern library and jieba segmenter.
    pub fn new() -> Self {
        Self::with_parts(
            Lexicon::global(),
            PatternLibrary::global(),
            JiebaSegmenter::global(),
        )
    }
}

impl Default for Detector<'static> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> Detector<'a> {
    pub fn with_parts(
        lexicon: &'a Lexicon,
        patterns: &'a PatternLibrary,
        segmenter: &'a dyn Segmenter,
    ) -> Self {
        Self {
            lexicon,
            patterns,
            segmenter,
            config: DetectionConfig::default(),
        }
    }

    pub fn with_config(mut self, config: DetectionConfig) -> Self {
        self.config = config;
        self
    }

    pub fn config(&self) -> &DetectionConfig {
        &self.config
    }

    pub fn detect(&self, text: &str) -> DetectionResult {
        if text.trim().is_empty() {
            debug!("[detect] empty input");
            return self.empty_result();
        }

        let tokens = self.segmenter.segment(text);
        let details = DimensionSet {
            lexical: lexical::analyze(text, &tokens, self.lexicon),
            syntactic: syntactic::analyze(text, self.patterns),
            structural: structural::analyze(text, self.lexicon, self.patterns),
            semantic: semantic::analyze(&tokens, self.lexicon),
        };
        debug!(
            "[detect] tokens={} lexical={} syntactic={} structural={} semantic={}",
            tokens.len(),
            details.lexical.score,
            details.syntactic.score,
            details.structural.score,
            details.semantic.score
        );

        let total = weighted_score(&details, &self.config.weights);
        let score = round2(total);
        let (is_ai, confidence) = derive_verdict(total, &self.config);
        let summary = summarize(score, &details);

        info!(
            "[detect] \"{}\" chars={} score={} is_ai={} level={}",
            preview(text, 20),
            char_len(text),
            score,
            is_ai,
            summary.level
        );

        DetectionResult {
            is_ai,
            confidence,
            score,
            details,
            text_length: char_len(text),
            summary,
        }
    }

    fn empty_result(&self) -> DetectionResult {
        let details = DimensionSet {
            lexical: DimensionScore::empty(),
            syntactic: DimensionScore::empty(),
            structural: DimensionScore::empty(),
            semantic: DimensionScore::empty(),
        };
        let summary = summarize(0.0, &details);
        DetectionResult {
            is_ai: false,
            confidence: 0.0,
            score: 0.0,
            details,
            text_length: 0,
            summary,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Dimension;

    /// Splits on spaces so token counts are predictable.
    struct WhitespaceSegmenter;

    impl Segmenter for WhitespaceSegmenter {
        fn segment(&self, text: &str) -> Vec<String> {
            text.split_whitespace().map(str::to_string).collect()
        }
    }

    #[test]
    fn test_empty_input() {
        let detector = Detector::new();
        for text in ["", "   ", "\n\t"] {
            let result = detector.detect(text);
            assert_eq!(result.score, 0.0);
            assert!(!result.is_ai);
            assert_eq!(result.confidence, 0.0);
            assert!(result.details.lexical.details.is_empty());
            assert!(result.details.semantic.details.is_empty());
            assert_eq!(result.summary.level, "很低");
        }
    }

    #[test]
    fn test_confidence_tracks_score() {
        let detector = Detector::new();
        let result = detector.detect("随着科技的发展，我们的生活发生了翻天覆地的变化。");
        assert!((0.0..=100.0).contains(&result.score));
        assert_eq!(result.confidence, result.score / 100.0);
    }

    #[test]
    fn test_injected_segmenter() {
        let segmenter = WhitespaceSegmenter;
        let detector = Detector::with_parts(Lexicon::global(), PatternLibrary::global(), &segmenter);
        let result = detector.detect("首先 我们 进行 讨论");
        assert_eq!(result.details.lexical.count("connectors"), 1);
        assert_eq!(result.details.lexical.count("formal_words"), 1);
        assert_eq!(result.details.lexical.score, 100.0);
        assert_eq!(result.summary.dominant_dimension, Dimension::Lexical);
    }

    #[test]
    fn test_custom_threshold() {
        let segmenter = WhitespaceSegmenter;
        let strict = DetectionConfig {
            ai_threshold: 10.0,
            ..DetectionConfig::default()
        };
        let detector = Detector::with_parts(Lexicon::global(), PatternLibrary::global(), &segmenter)
            .with_config(strict);
        let result = detector.detect("首先 我们 进行 讨论");
        assert!(result.score >= 10.0);
        assert!(result.is_ai);
    }

    #[test]
    fn test_text_length_counts_chars() {
        let result = Detector::new().detect("你好世界");
        assert_eq!(result.text_length, 4);
    }
}
