// AI 写作模式库
// Regular expressions for formulaic sentence and document structures, compiled once per process.

use crate::models::{PatternCategory, PatternMatch};
use regex::Regex;
use std::sync::OnceLock;

/// 固定句式
const FIXED_SENTENCE_PATTERNS: &[&str] = &[
    // 不仅……而且……
    r"不仅.{2,20}而且.{2,20}",
    r"不但.{2,20}而且.{2,20}",
    r"不只.{2,20}还.{2,20}",
    // 一方面……另一方面……
    r"一方面.{5,30}另一方面.{5,30}",
    r"一方面.{5,30}另外.{5,30}",
    // 既……又……
    r"既.{2,15}又.{2,15}",
    r"既.{2,15}也.{2,15}",
    // 只有……才……
    r"只有.{3,20}才能.{3,20}",
    r"只有.{3,20}才.{3,20}",
    // 无论……都……
    r"无论.{3,20}都.{3,20}",
    r"不管.{3,20}都.{3,20}",
    // 如果……就……
    r"如果.{3,25}就.{3,25}",
    r"假如.{3,25}就.{3,25}",
    r"倘若.{3,25}就.{3,25}",
    // 虽然……但是……
    r"虽然.{3,25}但是.{3,25}",
    r"虽然.{3,25}然而.{3,25}",
    r"尽管.{3,25}但是.{3,25}",
    // 因为……所以……
    r"因为.{3,25}所以.{3,25}",
    r"由于.{3,25}因此.{3,25}",
    // 通过……实现……
    r"通过.{3,20}实现.{3,20}",
    r"通过.{3,20}达到.{3,20}",
    r"借助.{3,20}实现.{3,20}",
    // 随着……
    r"随着.{3,20}的发展",
    r"随着.{3,20}的变化",
    r"随着.{3,20}的提高",
];

/// 排比句
const PARALLEL_PATTERNS: &[&str] = &[
    r"(.{2,8})[，,](.{2,8})[，,](.{2,8})",
    r"要.{2,15}[，,]要.{2,15}[，,]要.{2,15}",
    r"能.{2,15}[，,]能.{2,15}[，,]能.{2,15}",
    r"有.{2,15}[，,]有.{2,15}[，,]有.{2,15}",
    r"不仅.{2,15}[，,]还.{2,15}[，,]更.{2,15}",
];

/// 总分总结构
const SUMMARY_DETAIL_PATTERNS: &[&str] = &[
    r"^.{10,30}[。：:]",
    r"(总之|综上所述|总而言之|归根结底|综上|因此).{10,50}[。！]$",
    r"(首先|其次|再次|然后|接着|最后).{5,}[。]",
];

/// 列表式表达
const LIST_PATTERNS: &[&str] = &[
    r"第一.{5,30}第二.{5,30}",
    r"第一.{5,30}第二.{5,30}第三.{5,30}",
    r"[1１一].{5,30}[2２二].{5,30}",
    r"[1１一].{5,30}[2２二].{5,30}[3３三].{5,30}",
    r"首先.{5,30}其次.{5,30}",
    r"首先.{5,30}其次.{5,30}最后.{5,30}",
];

/// AI 开头
const OPENING_PATTERNS: &[&str] = &[
    r"^在当今社会",
    r"^在现代社会",
    r"^随着.{2,10}的发展",
    r"^近年来",
    r"^众所周知",
    r"^毋庸置疑",
    r"^显而易见",
];

/// AI 结尾
const CLOSING_PATTERNS: &[&str] = &[
    r"(总之|综上所述|总而言之).{10,}[。！]$",
    r"具有重要意义[。！]$",
    r"发挥重要作用[。！]$",
    r"产生深远影响[。！]$",
];

/// 改写用："不仅X而且Y"，X/Y 各 2-20 字，非贪婪
const PROGRESSIVE_REWRITE_PATTERN: &str = r"不仅(.{2,20}?)而且(.{2,20}?)";

#[derive(Debug)]
struct CompiledGroup {
    category: PatternCategory,
    patterns: Vec<Regex>,
}

/// Pre-compiled pattern groups, one per category, in a fixed order.
#[derive(Debug)]
pub struct PatternLibrary {
    groups: Vec<CompiledGroup>,
    progressive_rewrite: Regex,
}

fn compile_group(category: PatternCategory, sources: &[&str]) -> CompiledGroup {
    let patterns = sources
        .iter()
        .map(|src| Regex::new(src).unwrap_or_else(|e| panic!("pattern {src} failed to compile: {e}")))
        .collect();
    CompiledGroup { category, patterns }
}

impl PatternLibrary {
    pub fn new() -> Self {
        let groups = vec![
            compile_group(PatternCategory::Fixed, FIXED_SENTENCE_PATTERNS),
            compile_group(PatternCategory::Parallel, PARALLEL_PATTERNS),
            compile_group(PatternCategory::Summary, SUMMARY_DETAIL_PATTERNS),
            compile_group(PatternCategory::List, LIST_PATTERNS),
            compile_group(PatternCategory::Opening, OPENING_PATTERNS),
            compile_group(PatternCategory::Closing, CLOSING_PATTERNS),
        ];
        let progressive_rewrite =
            Regex::new(PROGRESSIVE_REWRITE_PATTERN).expect("progressive rewrite regex");
        Self {
            groups,
            progressive_rewrite,
        }
    }

    /// Process-wide instance, compiled on first use.
    pub fn global() -> &'static PatternLibrary {
        static LIBRARY: OnceLock<PatternLibrary> = OnceLock::new();
        LIBRARY.get_or_init(PatternLibrary::new)
    }

    /// Every pattern of `category` that occurs somewhere in `text`, in library order.
    pub fn check(&self, text: &str, category: PatternCategory) -> Vec<PatternMatch> {
        self.groups
            .iter()
            .filter(|g| g.category == category)
            .flat_map(|g| g.patterns.iter())
            .filter(|re| re.is_match(text))
            .map(|re| PatternMatch {
                category,
                pattern: re.as_str().to_string(),
            })
            .collect()
    }

    pub fn check_all(&self, text: &str) -> Vec<PatternMatch> {
        PatternCategory::ALL
            .into_iter()
            .flat_map(|category| self.check(text, category))
            .collect()
    }

    pub fn has_match(&self, text: &str, category: PatternCategory) -> bool {
        self.groups
            .iter()
            .filter(|g| g.category == category)
            .flat_map(|g| g.patterns.iter())
            .any(|re| re.is_match(text))
    }

    pub fn pattern_count(&self, category: PatternCategory) -> usize {
        self.groups
            .iter()
            .filter(|g| g.category == category)
            .map(|g| g.patterns.len())
            .sum()
    }

    /// The `不仅X而且Y` rewrite pattern; capture 1 is X, capture 2 is Y.
    pub fn progressive_rewrite(&self) -> &Regex {
        &self.progressive_rewrite
    }
}

impl Default for PatternLibrary {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_groups_compile() {
        let lib = PatternLibrary::new();
        assert_eq!(lib.pattern_count(PatternCategory::Fixed), FIXED_SENTENCE_PATTERNS.len());
        assert_eq!(lib.pattern_count(PatternCategory::Parallel), PARALLEL_PATTERNS.len());
        assert_eq!(lib.pattern_count(PatternCategory::Summary), SUMMARY_DETAIL_PATTERNS.len());
        assert_eq!(lib.pattern_count(PatternCategory::List), LIST_PATTERNS.len());
        assert_eq!(lib.pattern_count(PatternCategory::Opening), OPENING_PATTERNS.len());
        assert_eq!(lib.pattern_count(PatternCategory::Closing), CLOSING_PATTERNS.len());
    }

    #[test]
    fn test_fixed_pattern_match() {
        let lib = PatternLibrary::global();
        let matches = lib.check("这个方法不仅节省时间而且降低成本", PatternCategory::Fixed);
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].pattern, r"不仅.{2,20}而且.{2,20}");
    }

    #[test]
    fn test_opening_anchored_at_start() {
        let lib = PatternLibrary::global();
        assert!(lib.has_match("在当今社会，技术发展很快。", PatternCategory::Opening));
        assert!(!lib.has_match("我觉得在当今社会，技术发展很快。", PatternCategory::Opening));
    }

    #[test]
    fn test_closing_requires_terminal_mark() {
        let lib = PatternLibrary::global();
        assert!(lib.has_match("这项研究具有重要意义。", PatternCategory::Closing));
        assert!(!lib.has_match("这项研究具有重要意义，但还不够", PatternCategory::Closing));
    }

    #[test]
    fn test_list_pattern_matches_first_then_second() {
        let lib = PatternLibrary::global();
        let text = "首先，我们需要了解问题。其次，我们要采取措施。";
        let matches = lib.check(text, PatternCategory::List);
        assert!(matches.iter().any(|m| m.pattern == r"首先.{5,30}其次.{5,30}"));
    }

    #[test]
    fn test_check_all_spans_categories() {
        let lib = PatternLibrary::global();
        let text = "综上所述，人工智能的发展在未来具有重要意义。";
        let matches = lib.check_all(text);
        assert!(matches.iter().any(|m| m.category == PatternCategory::Summary));
        assert!(matches.iter().any(|m| m.category == PatternCategory::Closing));
    }

    #[test]
    fn test_progressive_rewrite_is_lazy() {
        let lib = PatternLibrary::global();
        let caps = lib
            .progressive_rewrite()
            .captures("不仅速度快而且成本低很多")
            .unwrap();
        assert_eq!(&caps[1], "速度快");
        assert_eq!(&caps[2], "成本");
    }
}
