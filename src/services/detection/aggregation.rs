// Aggregation Logic
// Combines the four dimension scores into the overall score, verdict and summary.

use crate::models::{Dimension, DimensionSet, DetectionSummary};
use crate::services::config_store::{DetectionConfig, DimensionWeights};
use crate::services::text_processor::round2;

/// Score bands, highest first: (lower bound, level, conclusion).
const LEVEL_BANDS: &[(f64, &str, &str)] = &[
    (80.0, "极高", "文本具有非常明显的AI生成特征"),
    (60.0, "较高", "文本很可能由AI生成"),
    (40.0, "中等", "文本具有一些AI特征，但不明显"),
    (20.0, "较低", "文本AI特征较少，较为自然"),
];
const LOWEST_BAND: (&str, &str) = ("很低", "文本非常自然，几乎无AI特征");

/// Weighted sum of the dimension scores, clamped to `[0, 100]`. Not rounded.
pub fn weighted_score(details: &DimensionSet, weights: &DimensionWeights) -> f64 {
    let total = details.lexical.score * weights.lexical
        + details.syntactic.score * weights.syntactic
        + details.structural.score * weights.structural
        + details.semantic.score * weights.semantic;
    total.clamp(0.0, 100.0)
}

/// `(is_ai, confidence)` for a raw weighted total. The threshold applies to the
/// unrounded total; confidence follows the reported 2-decimal score.
pub fn derive_verdict(total: f64, config: &DetectionConfig) -> (bool, f64) {
    (total >= config.ai_threshold, round2(total) / 100.0)
}

/// Level and conclusion for a score.
pub fn score_level(score: f64) -> (&'static str, &'static str) {
    LEVEL_BANDS
        .iter()
        .find(|(floor, _, _)| score >= *floor)
        .map(|(_, level, conclusion)| (*level, *conclusion))
        .unwrap_or(LOWEST_BAND)
}

/// Highest-scoring dimension; on ties the earliest in evaluation order wins.
pub fn dominant_dimension(details: &DimensionSet) -> Dimension {
    let mut best = Dimension::Lexical;
    for dimension in Dimension::ORDER.into_iter().skip(1) {
        if details.get(dimension).score > details.get(best).score {
            best = dimension;
        }
    }
    best
}

pub fn summarize(score: f64, details: &DimensionSet) -> DetectionSummary {
    let (level, conclusion) = score_level(score);
    let dominant = dominant_dimension(details);
    DetectionSummary {
        level: level.to_string(),
        conclusion: conclusion.to_string(),
        dominant_dimension: dominant,
        main_issue: format!(
            "{}层面的AI特征最为明显（得分：{:.2}）",
            dominant.label(),
            details.get(dominant).score
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::DimensionScore;

    fn set(scores: [f64; 4]) -> DimensionSet {
        let dim = |score| DimensionScore {
            score,
            ..DimensionScore::default()
        };
        DimensionSet {
            lexical: dim(scores[0]),
            syntactic: dim(scores[1]),
            structural: dim(scores[2]),
            semantic: dim(scores[3]),
        }
    }

    #[test]
    fn test_weighted_score_uses_default_weights() {
        let details = set([100.0, 7.4, 38.0, 95.0]);
        // 30 + 1.85 + 9.5 + 19
        assert_eq!(round2(weighted_score(&details, &DimensionWeights::default())), 60.35);
    }

    #[test]
    fn test_verdict_threshold_inclusive() {
        let config = DetectionConfig::default();
        assert_eq!(derive_verdict(60.0, &config), (true, 0.6));
        assert!(!derive_verdict(59.99, &config).0);
    }

    #[test]
    fn test_verdict_uses_unrounded_total() {
        let config = DetectionConfig::default();
        // 0 + 25 + 25 + 9.998 rounds up to 60.00 but stays below the threshold
        let total = weighted_score(&set([0.0, 100.0, 100.0, 49.99]), &config.weights);
        assert!(total < 60.0);
        assert_eq!(round2(total), 60.0);
        let (is_ai, confidence) = derive_verdict(total, &config);
        assert!(!is_ai);
        assert_eq!(confidence, 0.6);
    }

    #[test]
    fn test_score_levels() {
        assert_eq!(score_level(95.0).0, "极高");
        assert_eq!(score_level(80.0).0, "极高");
        assert_eq!(score_level(60.0).0, "较高");
        assert_eq!(score_level(45.5).0, "中等");
        assert_eq!(score_level(20.0).0, "较低");
        assert_eq!(score_level(0.0), LOWEST_BAND);
    }

    #[test]
    fn test_dominant_dimension_stable_tie_break() {
        assert_eq!(dominant_dimension(&set([0.0, 0.0, 0.0, 0.0])), Dimension::Lexical);
        assert_eq!(dominant_dimension(&set([10.0, 40.0, 40.0, 5.0])), Dimension::Syntactic);
        assert_eq!(dominant_dimension(&set([10.0, 20.0, 30.0, 30.0])), Dimension::Structural);
    }

    #[test]
    fn test_summary_main_issue() {
        let summary = summarize(62.0, &set([10.0, 20.0, 80.5, 30.0]));
        assert_eq!(summary.level, "较高");
        assert_eq!(summary.dominant_dimension, Dimension::Structural);
        assert_eq!(summary.main_issue, "结构层面的AI特征最为明显（得分：80.50）");
    }
}
