use axum::http::StatusCode;
use thiserror::Error;

/// 评审错误类型
///
/// `Display` 输出即面向用户的提示语；上游响应体、解析细节等运维信息
/// 只进日志，不随错误返回。
#[derive(Error, Debug)]
pub enum ReviewError {
    /// 用户输入不合法（为空或过短），不发起网络请求
    #[error("{message}")]
    Validation { message: String },

    /// 缺少 AI 服务凭证
    #[error("服务器未配置 NEWS_REVIEW_SILICONFLOW_API_KEY 环境变量")]
    Configuration,

    /// AI 服务返回非成功状态码
    #[error("AI服务返回错误 ({status})，请稍后重试")]
    Upstream { status: u16 },

    /// 网络或传输层失败
    #[error("无法连接AI服务，请检查网络")]
    Transport {
        #[source]
        source: reqwest::Error,
    },

    /// AI 返回内容无法解析为约定的 JSON 结构
    #[error("AI返回的数据格式异常，请重试")]
    MalformedResponse { detail: String },
}

impl ReviewError {
    /// 创建校验错误
    pub fn validation(message: impl Into<String>) -> Self {
        ReviewError::Validation {
            message: message.into(),
        }
    }

    /// 创建传输错误
    pub fn transport(source: reqwest::Error) -> Self {
        ReviewError::Transport { source }
    }

    /// 创建格式异常错误（detail 仅用于日志）
    pub fn malformed(detail: impl Into<String>) -> Self {
        ReviewError::MalformedResponse {
            detail: detail.into(),
        }
    }

    /// 映射到 HTTP 状态码
    pub fn status_code(&self) -> StatusCode {
        match self {
            ReviewError::Validation { .. } => StatusCode::BAD_REQUEST,
            ReviewError::Configuration => StatusCode::INTERNAL_SERVER_ERROR,
            ReviewError::Upstream { .. } => StatusCode::BAD_GATEWAY,
            ReviewError::Transport { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            ReviewError::MalformedResponse { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}
