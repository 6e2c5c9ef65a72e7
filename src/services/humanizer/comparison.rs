// Comparison Report
// Before/after view of one humanize call.

use crate::models::HumanizeResult;

const HEAVY_RULE: &str = "==================================================";
const LIGHT_RULE: &str = "--------------------------------------------------";

fn section(lines: &mut Vec<String>, title: &str) {
    lines.push(LIGHT_RULE.to_string());
    lines.push(title.to_string());
    lines.push(LIGHT_RULE.to_string());
}

pub fn compare(original: &str, result: &HumanizeResult) -> String {
    let mut lines: Vec<String> = Vec::with_capacity(20 + result.changes.len());

    lines.push(HEAVY_RULE.to_string());
    lines.push("文本人性化处理报告".to_string());
    lines.push(HEAVY_RULE.to_string());
    lines.push(String::new());

    lines.push(format!("处理强度: {}", result.intensity));
    lines.push(format!("原文长度: {}字", result.original_length));
    lines.push(format!("处理后长度: {}字", result.modified_length));
    lines.push(format!("修改次数: {}处", result.change_count));
    lines.push(String::new());

    section(&mut lines, "修改详情：");
    for (i, change) in result.changes.iter().enumerate() {
        lines.push(format!("{}. {}", i + 1, change));
    }
    lines.push(String::new());

    section(&mut lines, "原文：");
    lines.push(original.to_string());
    lines.push(String::new());

    section(&mut lines, "处理后：");
    lines.push(result.text.clone());
    lines.push(String::new());
    lines.push(HEAVY_RULE.to_string());

    lines.join("\n")
}
