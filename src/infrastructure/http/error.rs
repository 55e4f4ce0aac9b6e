//! HTTP Error Handling
//!
//! 应用层错误到 HTTP 状态码与响应体的显式映射

use axum::{
    extract::multipart::{MultipartError, MultipartRejection},
    extract::path::ErrorKind,
    extract::rejection::{JsonRejection, PathRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::application::ApplicationError;

/// 统一错误响应格式
///
/// - 已处理的错误：`{"error": ..., "status_code": ...}`
/// - 内部错误：`{"error": "Internal server error", "detail": ...}`
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status_code: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

impl ErrorResponse {
    pub fn handled(status: StatusCode, error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            status_code: Some(status.as_u16()),
            detail: None,
        }
    }

    pub fn internal(detail: impl Into<String>) -> Self {
        Self {
            error: "Internal server error".to_string(),
            status_code: None,
            detail: Some(detail.into()),
        }
    }
}

/// API 错误
#[derive(Debug)]
pub enum ApiError {
    NotFound(String),
    BadRequest(String),
    Unprocessable(String),
    /// 请求体提取失败，沿用提取器给出的状态码（如 413、415）
    Rejected {
        status: StatusCode,
        message: String,
    },
    /// `context` 返回给客户端，`source` 只写入服务端日志
    Internal {
        context: String,
        source: String,
    },
}

impl ApiError {
    pub fn internal(context: impl Into<String>, source: impl std::fmt::Display) -> Self {
        Self::Internal {
            context: context.into(),
            source: source.to_string(),
        }
    }

    /// 为应用层错误附加操作上下文（仅影响内部错误的 detail）
    pub fn with_context(context: &'static str) -> impl Fn(ApplicationError) -> ApiError {
        move |e| match e {
            ApplicationError::NotFound { .. } => ApiError::NotFound(e.to_string()),
            ApplicationError::InvalidInput(msg) => ApiError::BadRequest(msg),
            ApplicationError::ValidationError(msg) => ApiError::Unprocessable(msg),
            ApplicationError::RepositoryError(_)
            | ApplicationError::ExternalServiceError(_)
            | ApplicationError::StorageError(_) => ApiError::internal(context, e),
        }
    }

    fn status(&self) -> StatusCode {
        match self {
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Unprocessable(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::Rejected { status, .. } => *status,
            ApiError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = match self {
            ApiError::NotFound(msg) => {
                tracing::warn!(status = status.as_u16(), error = %msg, "Resource not found");
                ErrorResponse::handled(status, msg)
            }
            ApiError::BadRequest(msg) => {
                tracing::warn!(status = status.as_u16(), error = %msg, "Bad request");
                ErrorResponse::handled(status, msg)
            }
            ApiError::Unprocessable(msg) => {
                tracing::warn!(status = status.as_u16(), error = %msg, "Validation failed");
                ErrorResponse::handled(status, msg)
            }
            ApiError::Rejected { message, .. } => {
                tracing::warn!(status = status.as_u16(), error = %message, "Request rejected");
                ErrorResponse::handled(status, message)
            }
            ApiError::Internal { context, source } => {
                tracing::error!(error = %source, context = %context, "Internal server error");
                ErrorResponse::internal(context)
            }
        };

        (status, Json(body)).into_response()
    }
}

impl From<ApplicationError> for ApiError {
    fn from(e: ApplicationError) -> Self {
        ApiError::with_context("Request failed")(e)
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        match rejection {
            JsonRejection::JsonDataError(e) => ApiError::Unprocessable(e.body_text()),
            JsonRejection::JsonSyntaxError(e) => ApiError::BadRequest(e.body_text()),
            other => ApiError::Rejected {
                status: other.status(),
                message: other.body_text(),
            },
        }
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        match rejection {
            // 无法解码为 UTF-8 的标识符不可能对应任何记录
            PathRejection::FailedToDeserializePathParams(e)
                if matches!(e.kind(), ErrorKind::InvalidUtf8InPathParam { .. }) =>
            {
                ApiError::NotFound(e.body_text())
            }
            other => ApiError::Rejected {
                status: other.status(),
                message: other.body_text(),
            },
        }
    }
}

impl From<MultipartRejection> for ApiError {
    fn from(rejection: MultipartRejection) -> Self {
        ApiError::Rejected {
            status: rejection.status(),
            message: rejection.body_text(),
        }
    }
}

impl From<MultipartError> for ApiError {
    fn from(e: MultipartError) -> Self {
        ApiError::Rejected {
            status: e.status(),
            message: format!("Failed to read multipart body: {}", e.body_text()),
        }
    }
}
