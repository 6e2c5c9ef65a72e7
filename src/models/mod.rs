// zh-humanizer Data Models
// Results produced by the detector and the humanizer; serialized as-is by the CLI.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use crate::error::HumanizerError;

// ============ Lexicon / Pattern Types ============

/// Lexicon membership of a single token.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WordClass {
    HighFrequency,
    Connector,
    Formal,
    Qualifier,
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PatternCategory {
    Fixed,
    Parallel,
    Summary,
    List,
    Opening,
    Closing,
}

impl PatternCategory {
    pub const ALL: [PatternCategory; 6] = [
        PatternCategory::Fixed,
        PatternCategory::Parallel,
        PatternCategory::Summary,
        PatternCategory::List,
        PatternCategory::Opening,
        PatternCategory::Closing,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            PatternCategory::Fixed => "fixed",
            PatternCategory::Parallel => "parallel",
            PatternCategory::Summary => "summary",
            PatternCategory::List => "list",
            PatternCategory::Opening => "opening",
            PatternCategory::Closing => "closing",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|c| c.as_str() == name.trim().to_lowercase())
    }
}

/// One pattern hit: the category plus the source of the pattern that matched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatternMatch {
    pub category: PatternCategory,
    pub pattern: String,
}

// ============ Detection ============

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Dimension {
    Lexical,
    Syntactic,
    Structural,
    Semantic,
}

impl Dimension {
    /// Evaluation order; also the tie-break order for the dominant dimension.
    pub const ORDER: [Dimension; 4] = [
        Dimension::Lexical,
        Dimension::Syntactic,
        Dimension::Structural,
        Dimension::Semantic,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Dimension::Lexical => "词汇",
            Dimension::Syntactic => "句式",
            Dimension::Structural => "结构",
            Dimension::Semantic => "语义",
        }
    }
}

/// A single diagnostic value reported by a dimension.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Metric {
    Flag(bool),
    Count(usize),
    Ratio(f64),
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DimensionScore {
    pub score: f64,
    #[serde(default)]
    pub details: BTreeMap<String, Metric>,
}

impl DimensionScore {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn count(&self, key: &str) -> usize {
        match self.details.get(key) {
            Some(Metric::Count(n)) => *n,
            _ => 0,
        }
    }

    pub fn ratio(&self, key: &str) -> f64 {
        match self.details.get(key) {
            Some(Metric::Ratio(r)) => *r,
            Some(Metric::Count(n)) => *n as f64,
            _ => 0.0,
        }
    }

    pub fn flag(&self, key: &str) -> bool {
        matches!(self.details.get(key), Some(Metric::Flag(true)))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DimensionSet {
    pub lexical: DimensionScore,
    pub syntactic: DimensionScore,
    pub structural: DimensionScore,
    pub semantic: DimensionScore,
}

impl DimensionSet {
    pub fn get(&self, dimension: Dimension) -> &DimensionScore {
        match dimension {
            Dimension::Lexical => &self.lexical,
            Dimension::Syntactic => &self.syntactic,
            Dimension::Structural => &self.structural,
            Dimension::Semantic => &self.semantic,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DetectionSummary {
    pub level: String,
    pub conclusion: String,
    pub dominant_dimension: Dimension,
    pub main_issue: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DetectionResult {
    pub is_ai: bool,
    pub confidence: f64,
    pub score: f64,
    pub details: DimensionSet,
    pub text_length: usize,
    pub summary: DetectionSummary,
}

// ============ Humanization ============

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Intensity {
    Light,
    Medium,
    Heavy,
}

impl Intensity {
    pub fn as_str(self) -> &'static str {
        match self {
            Intensity::Light => "light",
            Intensity::Medium => "medium",
            Intensity::Heavy => "heavy",
        }
    }
}

impl Default for Intensity {
    fn default() -> Self {
        Intensity::Medium
    }
}

impl FromStr for Intensity {
    type Err = HumanizerError;

    fn from_str(val: &str) -> Result<Self, Self::Err> {
        match val.trim().to_lowercase().as_str() {
            "light" => Ok(Self::Light),
            "medium" => Ok(Self::Medium),
            "heavy" => Ok(Self::Heavy),
            _ => Err(HumanizerError::InvalidIntensity(val.to_string())),
        }
    }
}

impl fmt::Display for Intensity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChangeKind {
    WordSubstitution,
    ListBreak,
    ProgressiveRewrite,
    SentenceSplit,
    PersonalVoice,
    EmotionMarker,
    CertaintySoftening,
    ColloquialParticle,
}

/// One entry in the change log. `message` is the rendered log line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Change {
    pub kind: ChangeKind,
    pub before: String,
    pub after: String,
    pub message: String,
}

impl Change {
    pub fn new(kind: ChangeKind, before: impl Into<String>, after: impl Into<String>) -> Self {
        let before = before.into();
        let after = after.into();
        let message = match kind {
            ChangeKind::WordSubstitution => format!("词汇替换: '{}' → '{}'", before, after),
            ChangeKind::ListBreak => "句式调整: 打破'首先...其次'固定句式".to_string(),
            ChangeKind::ProgressiveRewrite => format!("句式简化: '{}' → '{}'", before, after),
            ChangeKind::SentenceSplit => "句式调整: 拆分过长句子".to_string(),
            ChangeKind::PersonalVoice => format!("添加第一人称: '{}'", after),
            ChangeKind::EmotionMarker => format!("添加情感词: '{}'", after),
            ChangeKind::CertaintySoftening => format!("降低绝对性: '{}' → '{}'", before, after),
            ChangeKind::ColloquialParticle => format!("添加语气词: '{}'", after),
        };
        Self {
            kind,
            before,
            after,
            message,
        }
    }
}

impl fmt::Display for Change {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HumanizeResult {
    pub text: String,
    pub original_length: usize,
    pub modified_length: usize,
    pub changes: Vec<Change>,
    pub change_count: usize,
    pub intensity: Intensity,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_intensity_parse() {
        assert_eq!("light".parse::<Intensity>().unwrap(), Intensity::Light);
        assert_eq!(" HEAVY ".parse::<Intensity>().unwrap(), Intensity::Heavy);
        let err = "invalid".parse::<Intensity>().unwrap_err();
        assert!(matches!(err, HumanizerError::InvalidIntensity(ref v) if v == "invalid"));
    }

    #[test]
    fn test_pattern_category_names() {
        for category in PatternCategory::ALL {
            assert_eq!(PatternCategory::from_name(category.as_str()), Some(category));
        }
        assert_eq!(PatternCategory::from_name("unknown"), None);
    }

    #[test]
    fn test_metric_serialization_is_plain() {
        let mut score = DimensionScore::empty();
        score.details.insert("sentence_count".to_string(), Metric::Count(3));
        score.details.insert("has_opening_pattern".to_string(), Metric::Flag(true));
        let json = serde_json::to_string(&score).unwrap();
        assert!(json.contains("\"sentence_count\":3"));
        assert!(json.contains("\"has_opening_pattern\":true"));
        assert_eq!(score.count("sentence_count"), 3);
        assert!(score.flag("has_opening_pattern"));
    }

    #[test]
    fn test_change_message() {
        let change = Change::new(ChangeKind::WordSubstitution, "至关重要", "很关键");
        assert_eq!(change.to_string(), "词汇替换: '至关重要' → '很关键'");
    }
}
