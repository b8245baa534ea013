use once_cell::sync::Lazy;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::config::Config;
use crate::review::error::ReviewError;

pub mod prompt;

// 全局 HTTP 客户端复用
static HTTP_CLIENT: Lazy<Client> = Lazy::new(|| {
    Client::builder()
        .pool_max_idle_per_host(10)
        .pool_idle_timeout(std::time::Duration::from_secs(30))
        .build()
        .expect("Failed to create HTTP client")
});

/// 对话补全请求（SiliconFlow，与 OpenAI 兼容）
#[derive(Debug, Serialize)]
pub struct ChatRequest<'a> {
    pub model: &'a str,
    pub messages: Vec<ChatMessage<'a>>,
    pub temperature: f32,
    pub max_tokens: u32,
    pub response_format: ResponseFormat<'a>,
}

/// 消息结构
#[derive(Debug, Serialize)]
pub struct ChatMessage<'a> {
    pub role: &'a str,
    pub content: &'a str,
}

/// JSON 输出格式提示
#[derive(Debug, Serialize)]
pub struct ResponseFormat<'a> {
    #[serde(rename = "type")]
    pub format_type: &'a str,
}

/// 对话补全响应
#[derive(Debug, Deserialize)]
pub struct ChatResponse {
    pub choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
pub struct ChatChoice {
    pub message: ChatResponseMessage,
}

#[derive(Debug, Deserialize)]
pub struct ChatResponseMessage {
    pub content: String,
}

/// 构建评审请求体
fn build_request<'a>(config: &'a Config, system: &'a str, user: &'a str) -> ChatRequest<'a> {
    ChatRequest {
        model: &config.model,
        messages: vec![
            ChatMessage {
                role: "system",
                content: system,
            },
            ChatMessage {
                role: "user",
                content: user,
            },
        ],
        // 低温度偏向确定性输出，上限放宽到完整 JSON 所需的长度
        temperature: 0.3,
        max_tokens: 2000,
        response_format: ResponseFormat {
            format_type: "json_object",
        },
    }
}

/// 调用 AI 服务评审新闻稿，返回模型回复的文本内容
///
/// 每次调用恰好发起一次外部请求：不重试、不缓存、不限流。
pub async fn request_review(
    config: &Config,
    api_key: &str,
    article: &str,
) -> Result<String, ReviewError> {
    let system = prompt::system_prompt();
    let user = prompt::user_prompt(article);
    let request = build_request(config, &system, &user);

    let res = HTTP_CLIENT
        .post(&config.siliconflow_url)
        .bearer_auth(api_key)
        .json(&request)
        .send()
        .await
        .map_err(|e| {
            tracing::error!("请求 AI 服务失败: {}", e);
            ReviewError::transport(e)
        })?;

    let status = res.status();
    if !status.is_success() {
        let body = res.text().await.unwrap_or_default();
        // 上游错误详情只进日志，不返回给用户
        tracing::error!("AI 服务返回错误: 状态码 {}, 响应体: {}", status, body);
        return Err(ReviewError::Upstream {
            status: status.as_u16(),
        });
    }

    let text = res.text().await.map_err(|e| {
        tracing::error!("读取 AI 服务响应失败: {}", e);
        ReviewError::transport(e)
    })?;

    let completion: ChatResponse = serde_json::from_str(&text).map_err(|e| {
        tracing::error!("AI 服务响应结构异常: {}, 响应体: {}", e, text);
        ReviewError::malformed(format!("响应结构异常: {}", e))
    })?;

    let content = completion
        .choices
        .first()
        .map(|choice| choice.message.content.clone())
        .ok_or_else(|| {
            tracing::error!("AI 服务响应缺少 choices: {}", text);
            ReviewError::malformed("响应缺少 choices")
        })?;

    Ok(content)
}
