use std::sync::Arc;

use axum::body::Bytes;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use tower_http::cors::CorsLayer;
use tracing::info;

use crate::config::Config;
use crate::review::present::ReviewPresentation;
use crate::review::{self, ReviewData, ReviewError};

/// 内置演示稿件，供前端“加载示例”按钮使用
pub const DEMO_ARTICLE: &str = r#"新华社北京2月26日电（记者张三）记者从住房和城乡建设部获悉，2025年全国城市更新行动取得显著成效，全年完成投资超过3万亿元，惠及居民超过5000万户。

据了解，住建部今年重点推进了老旧小区改造、城市基础设施更新、历史文化保护等三大领域。其中，老旧小区改造完成5.3万个，超额完成年度目标的106%。

住建部相关负责人表示，城市更新不是简单的"拆旧建新"，而是要在保留城市记忆的基础上，提升城市功能和居民生活品质。"我们坚持'留改拆'并举，能保留的尽量保留，需要改造的精心改造。"

在资金保障方面，据悉中央财政今年安排城市更新专项资金1200亿元，同比增长15%。各地也积极创新融资模式，引入社会资本参与城市更新项目。

下一步，住建部将继续深入推进城市更新行动，计划在2026年完成老旧小区改造任务的80%，并启动新一轮城市基础设施体检工作。"#;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
}

/// 评审请求体
#[derive(Debug, Deserialize)]
pub struct AnalyzeRequest {
    #[serde(default)]
    pub article: String,
}

/// 评审成功响应
#[derive(Debug, Serialize)]
pub struct AnalyzeResponse {
    pub success: bool,
    pub data: ReviewData,
}

/// 错误响应体
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// 评审接口错误：状态码 + 面向用户的提示语
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    message: String,
}

impl ApiError {
    fn bad_request(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: message.into(),
        }
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }
}

impl From<ReviewError> for ApiError {
    fn from(err: ReviewError) -> Self {
        Self {
            status: err.status_code(),
            message: err.to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (
            self.status,
            Json(ErrorResponse {
                error: self.message,
            }),
        )
            .into_response()
    }
}

pub fn routes(state: AppState) -> Router {
    Router::new()
        .route("/api/analyze", post(analyze_article))
        .route("/api/demo", get(demo_article))
        .route("/api/health", get(health))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// POST /api/analyze：评审一篇新闻稿
///
/// 请求体手动解析，保证格式错误时返回与其他错误一致的 `{error}` 结构。
pub async fn analyze_article(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<AnalyzeResponse>, ApiError> {
    let request: AnalyzeRequest =
        serde_json::from_slice(&body).map_err(|_| ApiError::bad_request("请求格式错误"))?;

    let data = review::analyze(&state.config, &request.article).await?;

    // 运维日志记录本次评审的综合档位
    let presentation = ReviewPresentation::derive(&data);
    info!(
        "评审完成: 综合分 {} ({}), {} 条建议",
        presentation.composite,
        presentation.tier.text,
        presentation.suggestions.len()
    );

    Ok(Json(AnalyzeResponse {
        success: true,
        data,
    }))
}

/// GET /api/demo：返回内置演示稿件
pub async fn demo_article() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "article": DEMO_ARTICLE }))
}

/// GET /api/health：健康检查
pub async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "ok" }))
}
