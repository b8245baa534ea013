use serde::{Deserialize, Serialize};

/// 单个维度的评分
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DimensionScore {
    /// 0-100 的整数分
    pub score: u8,

    /// 一句话评语，约 30 字以内
    pub comment: String,
}

/// 语病修正：原文 → 修正后
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LanguageCorrection {
    pub original: String,
    pub corrected: String,
    #[serde(rename = "type")]
    pub correction_type: String,
}

/// 语言规范维度：评分之外附带逐条修正
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LanguageScore {
    pub score: u8,
    pub comment: String,
    #[serde(default)]
    pub corrections: Vec<LanguageCorrection>,
}

/// 一次评审的完整结果，按请求创建，不持久化
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReviewData {
    pub objectivity: DimensionScore,
    pub density: DimensionScore,
    pub readability: DimensionScore,
    pub headline: DimensionScore,
    pub structure: DimensionScore,

    /// 可选的第六维度，不参与综合分计算
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<LanguageScore>,

    /// 有序的改进建议，可为空
    #[serde(default)]
    pub suggestions: Vec<String>,
}

impl ReviewData {
    /// 按维度取评分
    pub fn dimension(&self, dim: Dimension) -> &DimensionScore {
        match dim {
            Dimension::Objectivity => &self.objectivity,
            Dimension::Density => &self.density,
            Dimension::Readability => &self.readability,
            Dimension::Headline => &self.headline,
            Dimension::Structure => &self.structure,
        }
    }
}

/// 五个主维度的封闭枚举
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Dimension {
    Objectivity,
    Density,
    Readability,
    Headline,
    Structure,
}

impl Dimension {
    pub const ALL: [Dimension; 5] = [
        Dimension::Objectivity,
        Dimension::Density,
        Dimension::Readability,
        Dimension::Headline,
        Dimension::Structure,
    ];

    /// JSON 字段名
    pub fn key(&self) -> &'static str {
        match self {
            Dimension::Objectivity => "objectivity",
            Dimension::Density => "density",
            Dimension::Readability => "readability",
            Dimension::Headline => "headline",
            Dimension::Structure => "structure",
        }
    }

    /// 展示名称
    pub fn display_name(&self) -> &'static str {
        match self {
            Dimension::Objectivity => "客观性",
            Dimension::Density => "信息密度",
            Dimension::Readability => "可读性",
            Dimension::Headline => "标题吸引力",
            Dimension::Structure => "结构完整度",
        }
    }

    /// 前端图标名
    pub fn icon(&self) -> &'static str {
        match self {
            Dimension::Objectivity => "Scale",
            Dimension::Density => "Layers",
            Dimension::Readability => "BookOpen",
            Dimension::Headline => "Sparkles",
            Dimension::Structure => "GitBranch",
        }
    }

    /// 维度说明
    pub fn description(&self) -> &'static str {
        match self {
            Dimension::Objectivity => "是否客观中立，有无主观臆断",
            Dimension::Density => "单位篇幅内有效信息量",
            Dimension::Readability => "语言是否流畅，逻辑是否清晰",
            Dimension::Headline => "标题是否准确且有吸引力",
            Dimension::Structure => "导语、主体、结尾是否完整",
        }
    }
}
