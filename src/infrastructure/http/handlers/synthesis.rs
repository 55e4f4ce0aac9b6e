//! Synthesis HTTP Handlers

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    http::StatusCode,
    Json,
};
use std::sync::Arc;

use crate::application::{GetSynthesis, ListSyntheses, Synthesize};
use crate::infrastructure::http::dto::{SynthesisResponse, SynthesizeRequest};
use crate::infrastructure::http::error::ApiError;
use crate::infrastructure::http::state::AppState;

/// 提交合成请求（同步完成）
pub async fn synthesize(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<SynthesizeRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<SynthesisResponse>), ApiError> {
    let Json(req) = payload?;

    let command = Synthesize {
        text: req.text,
        voice_id: req.voice_id,
        speed: req.speed,
        pitch: req.pitch,
    };

    let job = state
        .synthesize_handler
        .handle(command)
        .await
        .map_err(ApiError::with_context("Failed to synthesize speech"))?;

    Ok((StatusCode::CREATED, Json(SynthesisResponse::from(&job))))
}

/// 获取合成任务
pub async fn get_synthesis(
    State(state): State<Arc<AppState>>,
    synthesis_id: Result<Path<String>, PathRejection>,
) -> Result<Json<SynthesisResponse>, ApiError> {
    let Path(synthesis_id) = synthesis_id?;
    let job = state
        .get_synthesis_handler
        .handle(GetSynthesis { synthesis_id })
        .await
        .map_err(ApiError::with_context("Failed to get synthesis"))?;

    Ok(Json(SynthesisResponse::from(&job)))
}

/// 列出合成任务
pub async fn list_syntheses(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<SynthesisResponse>>, ApiError> {
    let jobs = state
        .list_syntheses_handler
        .handle(ListSyntheses)
        .await
        .map_err(ApiError::with_context("Failed to list syntheses"))?;

    Ok(Json(jobs.iter().map(SynthesisResponse::from).collect()))
}
