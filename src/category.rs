//! Static work-category table and the declared parallel groups.
//!
//! Declaration order matters: the classifier returns the first rule with any
//! keyword hit, and the scheduler picks the first parallel group that has two
//! or more ready members.

use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryRule {
    pub key: &'static str,
    pub display_name: &'static str,
    pub base_duration_days: i64,
    pub order: u32,
    pub keywords: &'static [&'static str],
    /// Presentation only.
    pub color: &'static str,
}

pub const DEFAULT_CATEGORY: &str = "finishing";

pub const CATEGORY_RULES: &[CategoryRule] = &[
    CategoryRule {
        key: "preparation",
        display_name: "準備工",
        base_duration_days: 2,
        order: 1,
        keywords: &["準備", "仮設", "養生", "測量", "preparation", "survey"],
        color: "#9e9e9e",
    },
    CategoryRule {
        key: "demolition",
        display_name: "解体撤去工",
        base_duration_days: 3,
        order: 2,
        keywords: &[
            "解体",
            "撤去",
            "伐採",
            "抜根",
            "処分",
            "demolition",
            "removal",
        ],
        color: "#795548",
    },
    CategoryRule {
        key: "earthwork",
        display_name: "土工",
        base_duration_days: 5,
        order: 3,
        keywords: &[
            "土工",
            "掘削",
            "盛土",
            "整地",
            "残土",
            "造成",
            "客土",
            "excavation",
            "grading",
        ],
        color: "#8d6e63",
    },
    CategoryRule {
        key: "drainage",
        display_name: "排水工",
        base_duration_days: 3,
        order: 4,
        keywords: &["排水", "側溝", "集水", "暗渠", "雨水", "drainage"],
        color: "#42a5f5",
    },
    CategoryRule {
        key: "electrical",
        display_name: "電気設備工",
        base_duration_days: 2,
        order: 5,
        keywords: &["電気", "照明", "配線", "電源", "electrical", "lighting"],
        color: "#ffca28",
    },
    CategoryRule {
        key: "structures",
        display_name: "構造物工",
        base_duration_days: 7,
        order: 6,
        keywords: &[
            "構造物",
            "ブロック",
            "フェンス",
            "擁壁",
            "門扉",
            "門柱",
            "塀",
            "ウッドデッキ",
            "カーポート",
            "fence",
            "deck",
            "wall",
        ],
        color: "#607d8b",
    },
    CategoryRule {
        key: "paving",
        display_name: "舗装工",
        base_duration_days: 4,
        order: 7,
        keywords: &[
            "舗装",
            "コンクリート",
            "土間",
            "平板",
            "インターロッキング",
            "アスファルト",
            "砂利",
            "paving",
            "concrete",
        ],
        color: "#78909c",
    },
    CategoryRule {
        key: "irrigation",
        display_name: "灌水設備工",
        base_duration_days: 2,
        order: 8,
        keywords: &["灌水", "散水", "給水", "irrigation", "sprinkler"],
        color: "#26c6da",
    },
    CategoryRule {
        key: "planting",
        display_name: "植栽工",
        base_duration_days: 4,
        order: 9,
        keywords: &[
            "植栽",
            "植樹",
            "高木",
            "中木",
            "低木",
            "生垣",
            "樹木",
            "planting",
            "shrub",
        ],
        color: "#66bb6a",
    },
    CategoryRule {
        key: "lawn",
        display_name: "芝生工",
        base_duration_days: 3,
        order: 10,
        keywords: &["芝", "芝生", "張芝", "人工芝", "lawn", "turf"],
        color: "#9ccc65",
    },
    CategoryRule {
        key: "finishing",
        display_name: "仕上げ工",
        base_duration_days: 2,
        order: 11,
        keywords: &[
            "仕上",
            "清掃",
            "片付",
            "手直し",
            "引渡",
            "finishing",
            "cleaning",
        ],
        color: "#ab47bc",
    },
];

/// Category sets allowed to run concurrently when two or more members are ready.
pub const PARALLEL_GROUPS: &[&[&str]] = &[
    &["drainage", "electrical", "irrigation"],
    &["structures", "paving"],
    &["planting", "irrigation"],
    &["preparation", "demolition"],
];

pub fn category_rule(key: &str) -> Option<&'static CategoryRule> {
    CATEGORY_RULES.iter().find(|rule| rule.key == key)
}

pub fn default_category() -> &'static CategoryRule {
    // The default key is part of the constant table above.
    category_rule(DEFAULT_CATEGORY).unwrap_or(&CATEGORY_RULES[CATEGORY_RULES.len() - 1])
}
