//! Audio Handlers - 合成产物下载

use axum::{
    body::Body,
    extract::{rejection::PathRejection, Path, State},
    http::header,
    response::{IntoResponse, Response},
};
use std::sync::Arc;
use tokio_util::io::ReaderStream;

use crate::application::GetArtifactQuery;
use crate::infrastructure::http::error::ApiError;
use crate::infrastructure::http::state::AppState;

/// 下载合成产物（流式传输）
pub async fn serve_audio(
    State(state): State<Arc<AppState>>,
    filename: Result<Path<String>, PathRejection>,
) -> Result<Response, ApiError> {
    let Path(filename) = filename?;
    let artifact = state
        .get_artifact_handler
        .handle(GetArtifactQuery {
            file_name: filename,
        })
        .await
        .map_err(ApiError::with_context("Failed to read audio file"))?;

    tracing::debug!(
        file = %artifact.file_name,
        size = artifact.size,
        "Serving artifact"
    );

    let body = Body::from_stream(ReaderStream::new(artifact.file));
    let headers = [
        (header::CONTENT_TYPE, artifact.content_type.to_string()),
        (header::CONTENT_LENGTH, artifact.size.to_string()),
        (
            header::CONTENT_DISPOSITION,
            format!("attachment; filename=\"{}\"", artifact.file_name),
        ),
    ];

    Ok((headers, body).into_response())
}
