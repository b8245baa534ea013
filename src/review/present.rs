use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

use super::result::{Dimension, ReviewData};

// 建议分类关键词，按声明顺序匹配，命中即停
static HEADLINE_TERMS: Lazy<Regex> =
    Lazy::new(|| Regex::new("标题").expect("Failed to compile headline terms regex"));

static SOURCING_TERMS: Lazy<Regex> =
    Lazy::new(|| Regex::new("信源|据了解|据悉").expect("Failed to compile sourcing terms regex"));

static ENDING_TERMS: Lazy<Regex> =
    Lazy::new(|| Regex::new("结尾|结束|闭环").expect("Failed to compile ending terms regex"));

static NUMERIC_TERMS: Lazy<Regex> =
    Lazy::new(|| Regex::new("数据|数字").expect("Failed to compile numeric terms regex"));

static STRUCTURE_TERMS: Lazy<Regex> =
    Lazy::new(|| Regex::new("段落|结构").expect("Failed to compile structure terms regex"));

// 「…」括注内容的强调标记
static EMPHASIS_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new("「([^」]+)」").expect("Failed to compile emphasis regex"));

/// 综合分档位
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ScoreTier {
    pub text: &'static str,
    pub css_class: &'static str,
    pub icon: &'static str,
}

/// 综合分：五个主维度的算术平均，四舍五入取整
///
/// language 维度单独展示，不参与平均。
pub fn composite_score(data: &ReviewData) -> u8 {
    let sum: u32 = Dimension::ALL
        .iter()
        .map(|dim| data.dimension(*dim).score as u32)
        .sum();
    (sum as f64 / Dimension::ALL.len() as f64).round() as u8
}

/// 按固定阈值自上而下评档，各档位下界含等号
pub fn score_tier(score: u8) -> ScoreTier {
    if score >= 85 {
        return ScoreTier { text: "优秀", css_class: "grade-excellent", icon: "Award" };
    }
    if score >= 70 {
        return ScoreTier { text: "良好", css_class: "grade-good", icon: "ThumbsUp" };
    }
    if score >= 55 {
        return ScoreTier { text: "一般", css_class: "grade-average", icon: "Minus" };
    }
    ScoreTier { text: "待改进", css_class: "grade-poor", icon: "AlertTriangle" }
}

/// 得分等于最低分的维度，全部标记（允许并列）
pub fn lowest_dimensions(data: &ReviewData) -> Vec<Dimension> {
    let min = Dimension::ALL
        .iter()
        .map(|dim| data.dimension(*dim).score)
        .min()
        .unwrap_or(0);

    Dimension::ALL
        .iter()
        .copied()
        .filter(|dim| data.dimension(*dim).score == min)
        .collect()
}

/// 为改进建议打标签：按固定顺序逐个匹配关键词，命中第一个即返回
pub fn tag_suggestion(text: &str) -> &'static str {
    if HEADLINE_TERMS.is_match(text) {
        return "标题优化";
    }
    if SOURCING_TERMS.is_match(text) {
        return "信源规范";
    }
    if ENDING_TERMS.is_match(text) {
        return "结尾完善";
    }
    if NUMERIC_TERMS.is_match(text) {
        return "数据补充";
    }
    if STRUCTURE_TERMS.is_match(text) {
        return "结构调整";
    }
    "内容优化"
}

/// 将「…」括注的内容包裹为 <em> 强调标记
///
/// 纯文本替换，不做转义；调用方自行处理渲染上下文的安全问题。
pub fn highlight_keywords(text: &str) -> String {
    EMPHASIS_PATTERN
        .replace_all(text, "<em>「${1}」</em>")
        .into_owned()
}

/// 带标签与强调标记的单条建议
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TaggedSuggestion {
    pub tag: &'static str,
    pub text: String,
}

/// 一次渲染周期所需的全部派生展示值
#[derive(Debug, Clone, Serialize)]
pub struct ReviewPresentation {
    pub composite: u8,
    pub tier: ScoreTier,
    pub lowest: Vec<Dimension>,
    pub suggestions: Vec<TaggedSuggestion>,
}

impl ReviewPresentation {
    pub fn derive(data: &ReviewData) -> Self {
        let composite = composite_score(data);
        Self {
            composite,
            tier: score_tier(composite),
            lowest: lowest_dimensions(data),
            suggestions: data
                .suggestions
                .iter()
                .map(|text| TaggedSuggestion {
                    tag: tag_suggestion(text),
                    text: highlight_keywords(text),
                })
                .collect(),
        }
    }
}
