pub mod error;
pub mod normalize;
pub mod present;
pub mod result;

use crate::ai;
use crate::config::Config;

pub use error::ReviewError;
pub use result::{Dimension, DimensionScore, LanguageCorrection, LanguageScore, ReviewData};

/// 评审入口：校验输入 → 调用 AI 服务 → 规整响应
///
/// 输入不合法时直接返回校验错误，不发起任何网络请求。
pub async fn analyze(config: &Config, article: &str) -> Result<ReviewData, ReviewError> {
    let article = article.trim();

    if article.is_empty() {
        return Err(ReviewError::validation("请提供新闻稿内容"));
    }
    // 按字符数而非字节数计算长度，中文稿件一个汉字算一个字符
    if article.chars().count() < 20 {
        return Err(ReviewError::validation(
            "新闻稿内容过短，请至少提供20个字符",
        ));
    }

    let api_key = config
        .siliconflow_api_key
        .as_deref()
        .ok_or(ReviewError::Configuration)?;

    let content = ai::request_review(config, api_key, article).await?;
    normalize::normalize(&content)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config(api_key: Option<&str>) -> Config {
        Config {
            model: "deepseek-ai/DeepSeek-V3".to_string(),
            siliconflow_api_key: api_key.map(|k| k.to_string()),
            siliconflow_url: "https://api.siliconflow.cn/v1/chat/completions".to_string(),
            port: 8080,
            debug: false,
        }
    }

    #[tokio::test]
    async fn test_analyze_empty_article() {
        let config = test_config(Some("test-key"));
        let err = analyze(&config, "   \n\t ").await.unwrap_err();

        assert!(matches!(err, ReviewError::Validation { .. }));
        assert_eq!(err.to_string(), "请提供新闻稿内容");
    }

    #[tokio::test]
    async fn test_analyze_short_article() {
        let config = test_config(Some("test-key"));
        let err = analyze(&config, "太短的新闻稿").await.unwrap_err();

        assert!(matches!(err, ReviewError::Validation { .. }));
        assert_eq!(err.to_string(), "新闻稿内容过短，请至少提供20个字符");
    }

    #[tokio::test]
    async fn test_analyze_length_counts_chars_not_bytes() {
        // 18 个汉字 = 54 字节，按字符数仍然过短
        let config = test_config(Some("test-key"));
        let article = "这是一篇不足二十个汉字长度的测试新闻";
        assert_eq!(article.chars().count(), 18);

        let err = analyze(&config, article).await.unwrap_err();
        assert!(matches!(err, ReviewError::Validation { .. }));
    }

    #[tokio::test]
    async fn test_analyze_missing_api_key() {
        let config = test_config(None);
        let article = "新华社北京电，记者从住房和城乡建设部获悉，城市更新行动取得显著成效。";

        let err = analyze(&config, article).await.unwrap_err();
        assert!(matches!(err, ReviewError::Configuration));
    }
}
