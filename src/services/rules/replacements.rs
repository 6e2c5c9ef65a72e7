// 替换词库与人性化表达
// Candidate substitutes for AI vocabulary, plus the expression lists the humanizer splices in.

/// 词汇替换表：AI 词 → 候选口语替换
pub const WORD_REPLACEMENTS: &[(&str, &[&str])] = &[
    // 高频词
    ("至关重要", &["很关键", "特别重要", "非常要紧"]),
    ("显而易见", &["很明显", "一看就知道", "明摆着"]),
    ("毋庸置疑", &["没什么好怀疑的", "不用多说", "说白了"]),
    ("不可或缺", &["少不了", "离不开", "缺了不行"]),
    ("举足轻重", &["分量很重", "很有分量", "说话算数"]),
    ("日益", &["越来越", "一天比一天"]),
    ("显著", &["明显", "挺明显"]),
    ("有效", &["管用", "有用", "见效"]),
    ("提升", &["提高", "拉高", "往上提"]),
    ("优化", &["改进", "改善", "调整"]),
    ("促进", &["带动", "推一把", "帮着"]),
    ("推动", &["带动", "推着"]),
    ("实现", &["做到", "达成"]),
    ("确保", &["保证", "尽量保证"]),
    ("充分", &["好好", "尽量"]),
    ("深入", &["仔细", "往深里"]),
    ("全面", &["各方面", "整体上"]),
    ("进一步", &["再", "更"]),
    ("积极", &["主动", "上心"]),
    ("重要", &["要紧", "关键"]),
    ("关键", &["要紧", "最要命"]),
    ("核心", &["最要紧的", "中心"]),
    ("持续", &["一直", "接着"]),
    ("不断", &["一直", "老是"]),
    ("广泛", &["到处", "很多地方"]),
    ("大幅", &["大大", "一下子"]),
    ("有助于", &["能帮着", "能帮上"]),
    ("致力于", &["一心想", "专门做"]),
    ("赋能", &["帮上忙", "加把劲"]),
    ("助力", &["帮忙", "帮一把"]),
    ("深远", &["长远", "很大"]),
    ("意义", &["用处", "价值"]),
    ("领域", &["行当", "方面"]),
    ("层面", &["方面", "角度"]),
    ("维度", &["角度", "方面"]),
    ("体系", &["一套做法", "系统"]),
    ("机制", &["办法", "规矩"]),
    ("趋势", &["苗头", "走向"]),
    ("挑战", &["难题", "麻烦"]),
    ("机遇", &["机会", "好时候"]),
    ("创新", &["新花样", "新点子"]),
    ("高效", &["利索", "快"]),
    ("稳步", &["慢慢", "一步步"]),
    ("切实", &["实实在在地", "真正"]),
    ("良好", &["不错", "挺好"]),
    ("不言而喻", &["不用说", "大家都懂"]),
    ("息息相关", &["关系很大", "分不开"]),
    ("密不可分", &["分不开", "连在一起"]),
    ("相辅相成", &["互相帮衬", "互相成全"]),
    ("与日俱增", &["越来越多", "一天天多起来"]),
    ("日新月异", &["变得飞快", "一天一个样"]),
    ("蓬勃发展", &["发展得很快", "红红火火"]),
    ("发挥", &["起到", "派上"]),
    ("提高", &["提上去", "拉高"]),
    // 连接词
    ("首先", &["先", "一开始", "头一个"]),
    ("其次", &["再有", "还有"]),
    ("再次", &["再说", "还有"]),
    ("最后", &["最后呢", "末了"]),
    ("此外", &["另外", "还有"]),
    ("同时", &["一边", "也"]),
    ("因此", &["所以", "这样一来"]),
    ("然而", &["不过", "可是"]),
    ("而且", &["还", "再说"]),
    ("并且", &["还", "也"]),
    ("总之", &["反正", "说到底"]),
    ("综上所述", &["说了这么多", "总的看"]),
    ("总而言之", &["一句话", "说到底"]),
    ("由此可见", &["看得出来", "这么看"]),
    ("换言之", &["换句话说", "也就是"]),
    ("与此同时", &["同一时间", "这时候"]),
    ("除此之外", &["另外", "还有就是"]),
    ("从而", &["这样就", "好让"]),
    ("进而", &["接着", "再"]),
    ("事实上", &["其实", "说实话"]),
    ("实际上", &["其实", "说白了"]),
    ("总的来说", &["大体上", "整体看"]),
    ("值得注意的是", &["要留意的是", "有一点得说"]),
    ("需要指出的是", &["得说一句", "要提一下"]),
    // 书面语
    ("进行", &["做", "搞"]),
    ("予以", &["给", "给予"]),
    ("加以", &["去", "来"]),
    ("具有", &["有", "带着"]),
    ("采取", &["用", "拿出"]),
    ("对于", &["对", "对着"]),
    ("关于", &["说到", "讲到"]),
    ("以及", &["还有", "和"]),
    ("鉴于", &["考虑到", "因为"]),
    ("旨在", &["是为了", "想要"]),
    ("诸如", &["比如", "像"]),
    ("务必", &["千万", "一定得"]),
    ("上述", &["上面说的", "前面这些"]),
    ("彰显", &["显出", "看出"]),
    ("凸显", &["显出来", "露出来"]),
    ("呈现", &["显出", "摆出"]),
    ("构建", &["搭", "建"]),
    ("涵盖", &["包括", "管到"]),
    ("着力", &["使劲", "用心"]),
    // 限定词
    ("能够", &["能", "可以"]),
    ("有效地", &["管用地", "实在地"]),
    ("显著地", &["明显地", "一下子"]),
    ("深入地", &["仔细地", "好好地"]),
    ("较为", &["比较", "还算"]),
    ("尤为", &["特别", "格外"]),
];

/// 第一人称前缀
pub const PERSONAL_LEADINS: &[&str] = &["我觉得", "我认为", "个人觉得", "依我看"];

/// 情感词，按情绪分组
pub const EMOTION_WORDS: &[(&str, &[&str])] = &[
    (
        "喜悦",
        &["开心", "高兴", "快乐", "兴奋", "愉快", "欣喜", "幸福", "满足", "真好", "好玩", "有趣", "哈哈", "爽"],
    ),
    (
        "悲伤",
        &["难过", "伤心", "失望", "郁闷", "沮丧", "心疼", "遗憾", "可惜", "委屈", "唉"],
    ),
    (
        "愤怒",
        &["生气", "气愤", "恼火", "烦", "烦人", "讨厌", "受不了", "无语"],
    ),
    (
        "惊讶",
        &["惊讶", "吃惊", "没想到", "居然", "竟然", "天哪", "哇", "震惊"],
    ),
    (
        "喜爱",
        &["喜欢", "热爱", "着迷", "心动", "舒服", "温暖", "感动", "不得了"],
    ),
    (
        "担忧",
        &["担心", "害怕", "紧张", "焦虑", "不安", "发愁"],
    ),
    (
        "强调",
        &["真的", "确实", "挺", "太", "特别", "超级"],
    ),
];

/// 第一人称表达
pub const FIRST_PERSON_EXPRESSIONS: &[&str] = &[
    "我",
    "我们",
    "咱",
    "咱们",
    "俺",
    "本人",
    "自己",
    "我觉得",
    "我认为",
    "我想",
    "个人觉得",
    "依我看",
    "在我看来",
    "我发现",
    "我感觉",
];

/// 情感强调词（重度处理使用）
pub const EMOTION_INTENSIFIERS: &[&str] = &["真的", "确实", "挺"];

/// 绝对化表达
pub const ABSOLUTE_WORDS: &[&str] = &["一定", "必须", "肯定", "绝对"];

/// 不确定表达（前 5 个用于降低绝对性）
pub const UNCERTAINTY_EXPRESSIONS: &[&str] = &[
    "可能",
    "也许",
    "大概",
    "或许",
    "说不定",
    "估计",
    "应该",
    "差不多",
    "好像",
    "似乎",
    "八成",
    "多半",
];

/// 口语语气词（前 5 个用于句末插入）
pub const COLLOQUIAL_MARKERS: &[&str] = &["吧", "呢", "啊", "嘛", "呀", "啦", "哦", "咯", "喔", "哈"];
