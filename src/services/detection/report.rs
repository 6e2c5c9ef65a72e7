// Detection Report
// Fixed human-readable layout for a DetectionResult.

use crate::models::{DetectionResult, DimensionScore};

const HEAVY_RULE: &str = "==================================================";
const LIGHT_RULE: &str = "--------------------------------------------------";

fn yes_no(flag: bool) -> &'static str {
    if flag {
        "是"
    } else {
        "否"
    }
}

fn section_header(lines: &mut Vec<String>, title: &str, dim: &DimensionScore) {
    lines.push(format!("\n【{}】得分: {:.2}/100", title, dim.score));
}

pub fn generate_report(result: &DetectionResult) -> String {
    let mut lines: Vec<String> = Vec::with_capacity(40);

    lines.push(HEAVY_RULE.to_string());
    lines.push("AI文本检测报告".to_string());
    lines.push(HEAVY_RULE.to_string());
    lines.push(String::new());

    lines.push(format!("检测结论: {}", result.summary.conclusion));
    lines.push(format!("AI特征等级: {}", result.summary.level));
    lines.push(format!("综合得分: {}/100", result.score));
    lines.push(format!("置信度: {:.2}%", result.confidence * 100.0));
    lines.push(String::new());

    lines.push(LIGHT_RULE.to_string());
    lines.push("各维度分析：".to_string());
    lines.push(LIGHT_RULE.to_string());

    let lex = &result.details.lexical;
    section_header(&mut lines, "词汇层面", lex);
    lines.push(format!(
        "  - AI高频词: {}个 ({:.2}%)",
        lex.count("high_freq_words"),
        lex.ratio("high_freq_ratio")
    ));
    lines.push(format!(
        "  - 连接词: {}个 ({:.2}%)",
        lex.count("connectors"),
        lex.ratio("connector_ratio")
    ));
    lines.push(format!(
        "  - 书面语: {}个 ({:.2}%)",
        lex.count("formal_words"),
        lex.ratio("formal_ratio")
    ));
    lines.push(format!("  - 限定词: {}个", lex.count("qualifiers")));
    lines.push(format!("  - 固定短语: {}个", lex.count("fixed_phrases")));

    let syn = &result.details.syntactic;
    section_header(&mut lines, "句式层面", syn);
    lines.push(format!("  - 句子数量: {}句", syn.count("sentence_count")));
    lines.push(format!("  - 平均句长: {:.2}字", syn.ratio("avg_sentence_length")));
    lines.push(format!("  - 固定句式: {}处", syn.count("fixed_patterns")));
    lines.push(format!("  - 排比句: {}处", syn.count("parallel_patterns")));
    lines.push(format!("  - 列表式表达: {}处", syn.count("list_patterns")));

    let st = &result.details.structural;
    section_header(&mut lines, "结构层面", st);
    lines.push(format!("  - 段落数量: {}段", st.count("paragraph_count")));
    lines.push(format!("  - 平均段长: {:.2}字", st.ratio("avg_paragraph_length")));
    lines.push(format!("  - 总起句式: {}", yes_no(st.flag("has_opening_pattern"))));
    lines.push(format!("  - 总结句式: {}", yes_no(st.flag("has_closing_pattern"))));
    lines.push(format!("  - 列表结构: {}处", st.count("list_structure_count")));

    let sem = &result.details.semantic;
    section_header(&mut lines, "语义层面", sem);
    lines.push(format!("  - 限定词: {}个", sem.count("qualifier_count")));
    lines.push(format!(
        "  - 情感词: {}个 ({:.2}%)",
        sem.count("emotion_count"),
        sem.ratio("emotion_ratio")
    ));
    lines.push(format!(
        "  - 第一人称: {}个 ({:.2}%)",
        sem.count("first_person_count"),
        sem.ratio("first_person_ratio")
    ));

    lines.push(String::new());
    lines.push(LIGHT_RULE.to_string());
    lines.push(format!("主要问题: {}", result.summary.main_issue));
    lines.push(HEAVY_RULE.to_string());

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Dimension, DimensionSet, DetectionSummary, Metric};

    fn sample_result() -> DetectionResult {
        let mut details = DimensionSet::default();
        details.lexical.score = 72.5;
        details.lexical.details.insert("high_freq_words".into(), Metric::Count(3));
        details.lexical.details.insert("high_freq_ratio".into(), Metric::Ratio(12.5));
        details.structural.details.insert("has_opening_pattern".into(), Metric::Flag(true));
        DetectionResult {
            is_ai: false,
            confidence: 0.4512,
            score: 45.12,
            details,
            text_length: 24,
            summary: DetectionSummary {
                level: "中等".into(),
                conclusion: "文本具有一些AI特征，但不明显".into(),
                dominant_dimension: Dimension::Lexical,
                main_issue: "词汇层面的AI特征最为明显（得分：72.50）".into(),
            },
        }
    }

    #[test]
    fn test_report_layout() {
        let report = generate_report(&sample_result());
        let lines: Vec<&str> = report.lines().collect();
        assert_eq!(lines[0], HEAVY_RULE);
        assert_eq!(lines[1], "AI文本检测报告");
        assert!(report.contains("综合得分: 45.12/100"));
        assert!(report.contains("置信度: 45.12%"));
        assert!(report.contains("【词汇层面】得分: 72.50/100"));
        assert!(report.contains("  - AI高频词: 3个 (12.50%)"));
        assert!(report.contains("  - 总起句式: 是"));
        assert!(report.contains("  - 总结句式: 否"));
        assert!(report.contains("主要问题: 词汇层面的AI特征最为明显（得分：72.50）"));
        assert_eq!(*lines.last().unwrap(), HEAVY_RULE);
    }

    #[test]
    fn test_report_on_empty_details_uses_zeroes() {
        let mut result = sample_result();
        result.details = DimensionSet::default();
        let report = generate_report(&result);
        assert!(report.contains("  - 句子数量: 0句"));
        assert!(report.contains("  - 平均句长: 0.00字"));
    }
}
