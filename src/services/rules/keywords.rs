// AI 写作词库
// High-frequency vocabulary of AI-generated Chinese prose, grouped by class.
// Order matters for HIGH_FREQ_WORDS and FORMAL_WORDS: the light tier only reads the head of each list.

/// AI 高频词（前 20 个供轻度处理使用）
pub const HIGH_FREQ_WORDS: &[&str] = &[
    "至关重要",
    "显而易见",
    "毋庸置疑",
    "不可或缺",
    "举足轻重",
    "日益",
    "显著",
    "有效",
    "提升",
    "优化",
    "促进",
    "推动",
    "实现",
    "确保",
    "充分",
    "深入",
    "全面",
    "进一步",
    "积极",
    "重要",
    // 以下为扩展词
    "关键",
    "核心",
    "持续",
    "不断",
    "广泛",
    "大幅",
    "有助于",
    "致力于",
    "赋能",
    "助力",
    "深远",
    "意义",
    "价值",
    "领域",
    "层面",
    "维度",
    "体系",
    "机制",
    "趋势",
    "挑战",
    "机遇",
    "创新",
    "高效",
    "稳步",
    "切实",
    "极大",
    "良好",
    "多元",
    "综合",
    "方面",
    "不言而喻",
    "息息相关",
    "密不可分",
    "相辅相成",
    "与日俱增",
    "日新月异",
    "蓬勃发展",
    "发挥",
    "作用",
    "提高",
];

/// 连接词
pub const CONNECTORS: &[&str] = &[
    "首先",
    "其次",
    "再次",
    "然后",
    "最后",
    "此外",
    "另外",
    "同时",
    "因此",
    "然而",
    "而且",
    "并且",
    "总之",
    "综上所述",
    "总而言之",
    "由此可见",
    "换言之",
    "也就是说",
    "与此同时",
    "除此之外",
    "不仅",
    "一方面",
    "另一方面",
    "因而",
    "从而",
    "进而",
    "故而",
    "尽管如此",
    "具体来说",
    "具体而言",
    "值得注意的是",
    "需要指出的是",
    "事实上",
    "实际上",
    "总的来说",
    "归根结底",
    "综上",
    "可见",
    "据此",
    "由此",
];

/// 书面语（前 10 个供轻度处理使用）
pub const FORMAL_WORDS: &[&str] = &[
    "进行",
    "予以",
    "加以",
    "具有",
    "采取",
    "对于",
    "关于",
    "以及",
    "鉴于",
    "旨在",
    // 以下为扩展词
    "诸如",
    "均",
    "亦",
    "即",
    "若",
    "与否",
    "务必",
    "须",
    "拟",
    "该",
    "此类",
    "上述",
    "如下",
    "相关",
    "有关",
    "业已",
    "尚未",
    "颇为",
    "甚为",
    "逐步",
    "迄今",
    "截至",
    "彰显",
    "凸显",
    "呈现",
    "构建",
    "涵盖",
    "秉持",
    "践行",
    "着力",
];

/// 限定词 / 程度修饰
pub const QUALIFIERS: &[&str] = &[
    "能够",
    "有效",
    "有效地",
    "显著",
    "显著地",
    "深入",
    "深入地",
    "充分",
    "充分地",
    "重要",
    "至关重要",
    "一定程度上",
    "在一定程度上",
    "某种程度上",
    "相对",
    "相对而言",
    "较为",
    "尤为",
    "更加",
    "大大",
    "极大地",
    "广泛",
    "普遍",
    "通常",
    "往往",
    "一般来说",
    "基本上",
    "主要",
    "诸多",
    "各类",
    "多种",
    "高度",
    "不断地",
    "持续地",
    "积极地",
    "全面地",
    "切实地",
    "进一步地",
];

/// 固定短语（按子串包含判断）
pub const FIXED_PHRASES: &[&str] = &[
    "在当今社会",
    "在现代社会",
    "随着科技的发展",
    "随着社会的发展",
    "随着时代的发展",
    "众所周知",
    "毋庸置疑",
    "显而易见",
    "不言而喻",
    "具有重要意义",
    "具有十分重要的意义",
    "发挥着重要作用",
    "发挥重要作用",
    "起着至关重要的作用",
    "发挥着至关重要的作用",
    "产生深远影响",
    "产生了深远的影响",
    "值得我们深思",
    "值得我们关注",
    "值得我们持续关注",
    "综上所述",
    "总而言之",
    "由此可见",
    "不可否认",
    "在这个过程中",
    "从某种意义上说",
    "在一定程度上",
    "提供了有力支撑",
    "奠定了坚实基础",
    "取得了显著成效",
    "有着密切的关系",
    "引起了广泛关注",
    "是一个复杂的问题",
    "需要综合考虑",
    "值得注意的是",
    "需要指出的是",
    "希望对你有所帮助",
    "让我们一起",
];

/// 结构层面的列表指示词
pub const LIST_INDICATORS: &[&str] = &["第一", "第二", "第三", "首先", "其次", "最后"];
