//! Service Handlers
//!
//! 服务描述、健康检查与未匹配路由

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use chrono::Utc;
use std::sync::Arc;

use crate::application::GetServiceStats;
use crate::infrastructure::http::dto::{EndpointsInfo, HealthResponse, ServiceInfoResponse};
use crate::infrastructure::http::error::{ApiError, ErrorResponse};
use crate::infrastructure::http::state::AppState;

/// 服务描述
pub async fn service_info(State(state): State<Arc<AppState>>) -> Json<ServiceInfoResponse> {
    Json(ServiceInfoResponse {
        service: "TxVoc API",
        version: env!("CARGO_PKG_VERSION"),
        status: "running",
        endpoints: EndpointsInfo {
            voices: "/voices - Manage voices",
            synthesis: "/synthesize - Generate speech",
            health: "/health - Health check",
        },
        frontend_url: state.frontend_url.clone(),
    })
}

/// 健康检查
pub async fn health(State(state): State<Arc<AppState>>) -> Result<Json<HealthResponse>, ApiError> {
    let stats = state
        .get_service_stats_handler
        .handle(GetServiceStats)
        .await
        .map_err(ApiError::with_context("Health check failed"))?;

    Ok(Json(HealthResponse {
        status: "healthy",
        timestamp: Utc::now().to_rfc3339(),
        voice_count: stats.voice_count,
        synthesis_count: stats.synthesis_count,
        engine_ready: stats.engine_ready,
    }))
}

/// 未匹配路由
pub async fn not_found() -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        Json(ErrorResponse::handled(StatusCode::NOT_FOUND, "Not found")),
    )
}
