// Syntax Adjustment
// Breaks list scaffolding, paraphrases 不仅…而且…, and splits overlong sentences once.

use crate::models::{Change, ChangeKind};
use crate::services::random_source::RandomSource;
use crate::services::rules::PatternLibrary;
use crate::services::text_processor::{char_len, sentence_units, REWRITE_TERMINATORS};

const MAX_PROGRESSIVE_REWRITES: usize = 2;
const LONG_UNIT_CHARS: usize = 50;
const CLAUSE_COMMA: &str = "，";

/// 首先/其次 → 先说/再说, first occurrence each, only when both are present.
pub fn break_list_scaffold(text: &str) -> (String, Vec<Change>) {
    if !(text.contains("首先") && text.contains("其次")) {
        return (text.to_string(), Vec::new());
    }
    let out = text.replacen("首先", "先说", 1).replacen("其次", "再说", 1);
    (out, vec![Change::new(ChangeKind::ListBreak, "首先...其次", "先说...再说")])
}

/// Paraphrase up to two `不仅X而且Y` constructs with a randomly chosen template.
pub fn rewrite_progressive(
    text: &str,
    patterns: &PatternLibrary,
    rng: &mut dyn RandomSource,
) -> (String, Vec<Change>) {
    let found: Vec<(String, String)> = patterns
        .progressive_rewrite()
        .captures_iter(text)
        .take(MAX_PROGRESSIVE_REWRITES)
        .map(|caps| (caps[1].to_string(), caps[2].to_string()))
        .collect();

    let mut out = text.to_string();
    let mut changes = Vec::with_capacity(found.len());
    for (x, y) in found {
        let original = format!("不仅{x}而且{y}");
        let simplified = match rng.choose_index(3) {
            0 => format!("{x}，还{y}"),
            1 => format!("{x}，也{y}"),
            _ => format!("既{x}又{y}"),
        };
        out = out.replacen(&original, &simplified, 1);
        changes.push(Change::new(ChangeKind::ProgressiveRewrite, original, simplified));
    }
    (out, changes)
}

/// Split units longer than 50 chars at their middle clause comma. Single level: the
/// halves are not examined again.
pub fn split_long_sentences(text: &str) -> (String, Vec<Change>) {
    let mut out = String::with_capacity(text.len() + 8);
    let mut changes = Vec::new();

    for unit in sentence_units(text, REWRITE_TERMINATORS) {
        if char_len(&unit) > LONG_UNIT_CHARS && unit.contains(CLAUSE_COMMA) {
            let parts: Vec<&str> = unit.split(CLAUSE_COMMA).collect();
            let mid = parts.len() / 2;
            let first = format!("{}。", parts[..mid].join(CLAUSE_COMMA));
            let second = parts[mid..].join(CLAUSE_COMMA);
            out.push_str(&first);
            out.push_str(&second);
            changes.push(Change::new(ChangeKind::SentenceSplit, unit.as_str(), format!("{first}{second}")));
        } else {
            out.push_str(&unit);
        }
    }
    (out, changes)
}

/// The full syntax pass in order: scaffold, progressive rewrite, long-sentence split.
pub fn adjust_syntax(
    text: &str,
    patterns: &PatternLibrary,
    rng: &mut dyn RandomSource,
) -> (String, Vec<Change>) {
    let (out, mut changes) = break_list_scaffold(text);
    let (out, rewrites) = rewrite_progressive(&out, patterns, rng);
    changes.extend(rewrites);
    let (out, splits) = split_long_sentences(&out);
    changes.extend(splits);
    (out, changes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::random_source::ScriptedSource;

    #[test]
    fn test_scaffold_needs_both_markers() {
        let (out, changes) = break_list_scaffold("首先，我们讨论。其次，我们行动。首先再说一遍。");
        assert_eq!(out, "先说，我们讨论。再说，我们行动。首先再说一遍。");
        assert_eq!(changes.len(), 1);
        assert_eq!(changes[0].message, "句式调整: 打破'首先...其次'固定句式");

        let (out, changes) = break_list_scaffold("首先，我们讨论。");
        assert_eq!(out, "首先，我们讨论。");
        assert!(changes.is_empty());
    }

    #[test]
    fn test_progressive_rewrite_templates() {
        let mut rng = ScriptedSource::always();
        let (out, changes) =
            rewrite_progressive("它不仅速度快而且成本低。", PatternLibrary::global(), &mut rng);
        // lazy Y takes the minimum two chars
        assert_eq!(out, "它速度快，还成本低。");
        assert_eq!(changes[0].before, "不仅速度快而且成本");
        assert_eq!(changes[0].message, "句式简化: '不仅速度快而且成本' → '速度快，还成本'");
    }

    #[test]
    fn test_progressive_rewrite_caps_at_two() {
        let mut rng = ScriptedSource::always();
        let text = "不仅甲甲而且乙乙。不仅丙丙而且丁丁。不仅戊戊而且己己。";
        let (out, changes) = rewrite_progressive(text, PatternLibrary::global(), &mut rng);
        assert_eq!(changes.len(), 2);
        assert!(out.ends_with("不仅戊戊而且己己。"));
    }

    #[test]
    fn test_split_long_sentence_once() {
        let clause = "这是一个用来凑长度的分句";
        let long = format!("{}。", [clause; 5].join("，"));
        let (out, changes) = split_long_sentences(&format!("短句。{}", long));
        assert_eq!(changes.len(), 1);
        let expected = format!(
            "短句。{}。{}。",
            [clause; 2].join("，"),
            [clause; 3].join("，")
        );
        assert_eq!(out, expected);
    }

    #[test]
    fn test_long_halves_are_not_split_again() {
        let clause = "这是一个用来凑长度的分句";
        let long = format!("{}。", [clause; 8].join("，"));
        let (out, changes) = split_long_sentences(&long);
        assert_eq!(changes.len(), 1);
        let half = [clause; 4].join("，");
        assert_eq!(out, format!("{half}。{half}。"));
        // both halves still qualify on their own
        assert!(char_len(&half) > LONG_UNIT_CHARS);
        assert_eq!(split_long_sentences(&out).1.len(), 2);
    }

    #[test]
    fn test_long_sentence_without_comma_is_kept() {
        let long = format!("{}。", "字".repeat(60));
        let (out, changes) = split_long_sentences(&long);
        assert_eq!(out, long);
        assert!(changes.is_empty());
    }
}
