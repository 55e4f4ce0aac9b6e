//! Voice HTTP Handlers

use axum::{
    extract::{
        multipart::MultipartRejection, rejection::PathRejection, Multipart, Path, Query, State,
    },
    http::StatusCode,
    Json,
};
use std::sync::Arc;

use crate::application::{CreateVoice, DeleteVoice, GetVoice, ListVoices};
use crate::infrastructure::http::dto::{MessageResponse, UploadVoiceParams, VoiceResponse};
use crate::infrastructure::http::error::ApiError;
use crate::infrastructure::http::state::AppState;

/// multipart 中的上传内容
struct UploadedFile {
    file_name: Option<String>,
    content_type: Option<String>,
    data: Vec<u8>,
}

/// 上传音色
pub async fn upload_voice(
    State(state): State<Arc<AppState>>,
    Query(params): Query<UploadVoiceParams>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<(StatusCode, Json<VoiceResponse>), ApiError> {
    let mut multipart = multipart?;

    let mut name = params.name;
    let mut description = params.description;
    let mut language = params.language;
    let mut file: Option<UploadedFile> = None;

    while let Some(field) = multipart.next_field().await? {
        let field_name = field.name().unwrap_or_default().to_string();

        match field_name.as_str() {
            "name" => name = Some(field.text().await?),
            "description" => description = Some(field.text().await?),
            "language" => language = Some(field.text().await?),
            "file" => {
                let file_name = field.file_name().map(str::to_string);
                let content_type = field.content_type().map(str::to_string);
                let data = field.bytes().await?.to_vec();
                file = Some(UploadedFile {
                    file_name,
                    content_type,
                    data,
                });
            }
            _ => {}
        }
    }

    let file = file.ok_or_else(|| ApiError::BadRequest("Audio file is required".to_string()))?;

    let command = CreateVoice {
        name,
        description,
        language,
        file_name: file.file_name,
        content_type: file.content_type,
        data: file.data,
    };

    let voice = state
        .create_voice_handler
        .handle(command)
        .await
        .map_err(ApiError::with_context("Failed to upload voice"))?;

    Ok((StatusCode::CREATED, Json(VoiceResponse::from(&voice))))
}

/// 获取音色列表
pub async fn list_voices(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<VoiceResponse>>, ApiError> {
    let voices = state
        .list_voices_handler
        .handle(ListVoices)
        .await
        .map_err(ApiError::with_context("Failed to list voices"))?;

    Ok(Json(voices.iter().map(VoiceResponse::from).collect()))
}

/// 获取音色详情
pub async fn get_voice(
    State(state): State<Arc<AppState>>,
    voice_id: Result<Path<String>, PathRejection>,
) -> Result<Json<VoiceResponse>, ApiError> {
    let Path(voice_id) = voice_id?;
    let voice = state
        .get_voice_handler
        .handle(GetVoice { voice_id })
        .await
        .map_err(ApiError::with_context("Failed to get voice"))?;

    Ok(Json(VoiceResponse::from(&voice)))
}

/// 删除音色
pub async fn delete_voice(
    State(state): State<Arc<AppState>>,
    voice_id: Result<Path<String>, PathRejection>,
) -> Result<Json<MessageResponse>, ApiError> {
    let Path(voice_id) = voice_id?;
    let voice = state
        .delete_voice_handler
        .handle(DeleteVoice { voice_id })
        .await
        .map_err(ApiError::with_context("Failed to delete voice"))?;

    Ok(Json(MessageResponse {
        message: format!("Voice '{}' deleted successfully", voice.name().as_str()),
    }))
}
