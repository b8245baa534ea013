use serde_json::Value;

use super::error::ReviewError;
use super::result::{Dimension, DimensionScore, LanguageScore, ReviewData};

/// 清理模型回复外层可能包裹的 markdown 代码块标记
///
/// 对未包裹的输入是恒等变换，重复调用结果不变。
pub fn strip_code_fence(raw: &str) -> &str {
    let mut content = raw.trim();

    if let Some(rest) = content.strip_prefix("```json") {
        content = rest;
    } else if let Some(rest) = content.strip_prefix("```") {
        content = rest;
    }
    if let Some(rest) = content.strip_suffix("```") {
        content = rest;
    }

    content.trim()
}

/// 将模型回复文本规整为 `ReviewData`
///
/// 五个主维度必须齐全且 score 为 0-100 的整数，否则整体判定为格式异常，
/// 不让残缺结果流向前端。language 维度与 suggestions 是可选的附加信息，
/// 解析失败时分别退化为缺省值。
pub fn normalize(raw: &str) -> Result<ReviewData, ReviewError> {
    let cleaned = strip_code_fence(raw);

    let value: Value = serde_json::from_str(cleaned).map_err(|e| {
        // 原始回复只进日志，不展示给用户
        tracing::error!("AI 返回内容无法解析为 JSON: {}, 原文: {}", e, raw);
        ReviewError::malformed(format!("JSON 解析失败: {}", e))
    })?;

    let objectivity = parse_dimension(&value, Dimension::Objectivity)?;
    let density = parse_dimension(&value, Dimension::Density)?;
    let readability = parse_dimension(&value, Dimension::Readability)?;
    let headline = parse_dimension(&value, Dimension::Headline)?;
    let structure = parse_dimension(&value, Dimension::Structure)?;

    // 可选维度：结构不符时退化为缺失，不影响整体结果
    let language = value
        .get("language")
        .cloned()
        .and_then(|v| serde_json::from_value::<LanguageScore>(v).ok());

    let suggestions = value
        .get("suggestions")
        .cloned()
        .and_then(|v| serde_json::from_value::<Vec<String>>(v).ok())
        .unwrap_or_default();

    Ok(ReviewData {
        objectivity,
        density,
        readability,
        headline,
        structure,
        language,
        suggestions,
    })
}

fn parse_dimension(value: &Value, dim: Dimension) -> Result<DimensionScore, ReviewError> {
    let entry = value.get(dim.key()).ok_or_else(|| {
        tracing::error!("AI 返回内容缺少维度 {}", dim.key());
        ReviewError::malformed(format!("缺少维度 {}", dim.key()))
    })?;

    let score = entry
        .get("score")
        .and_then(Value::as_u64)
        .ok_or_else(|| {
            tracing::error!("维度 {} 的 score 不是整数: {}", dim.key(), entry);
            ReviewError::malformed(format!("维度 {} 的 score 不是整数", dim.key()))
        })?;
    if score > 100 {
        tracing::error!("维度 {} 的 score 超出范围: {}", dim.key(), score);
        return Err(ReviewError::malformed(format!(
            "维度 {} 的 score 超出 0-100",
            dim.key()
        )));
    }

    let comment = entry
        .get("comment")
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string();

    Ok(DimensionScore {
        score: score as u8,
        comment,
    })
}
