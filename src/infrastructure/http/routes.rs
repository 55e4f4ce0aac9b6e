//! HTTP Routes
//!
//! API Endpoints:
//! - /                          GET     服务描述
//! - /health                    GET     健康检查
//! - /voices                    GET     列出所有音色
//! - /voices                    POST    上传音色（multipart）
//! - /voices/:voice_id          GET     获取音色详情
//! - /voices/:voice_id          DELETE  删除音色
//! - /synthesize                POST    语音合成
//! - /synthesis                 GET     列出合成任务
//! - /synthesis/:synthesis_id   GET     获取合成任务
//! - /audio/:filename           GET     下载合成产物

use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;

use super::handlers;
use super::state::AppState;

/// 创建所有路由
pub fn create_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/", get(handlers::service_info))
        .route("/health", get(handlers::health))
        .merge(voice_routes())
        .merge(synthesis_routes())
        .route("/audio/:filename", get(handlers::serve_audio))
        .fallback(handlers::not_found)
}

/// Voice 路由
fn voice_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route(
            "/voices",
            get(handlers::list_voices).post(handlers::upload_voice),
        )
        .route(
            "/voices/:voice_id",
            get(handlers::get_voice).delete(handlers::delete_voice),
        )
}

/// Synthesis 路由
fn synthesis_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/synthesize", post(handlers::synthesize))
        .route("/synthesis", get(handlers::list_syntheses))
        .route("/synthesis/:synthesis_id", get(handlers::get_synthesis))
}
