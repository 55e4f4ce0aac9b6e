//! 应用层错误定义
//!
//! 统一的命令/查询错误类型

use thiserror::Error;

use crate::application::ports::{AudioStorageError, RepositoryError, TtsError};
use crate::domain::synthesis::SynthesisError;
use crate::domain::voice::VoiceError;

/// 应用层错误
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// 资源未找到
    #[error("{resource_type} with ID '{id}' not found")]
    NotFound {
        resource_type: &'static str,
        id: String,
    },

    /// 客户端输入无效（如不支持的上传类型）
    #[error("{0}")]
    InvalidInput(String),

    /// 请求参数校验失败（如文本长度、语速范围）
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// 仓储错误
    #[error("Repository error: {0}")]
    RepositoryError(String),

    /// 外部服务错误
    #[error("External service error: {0}")]
    ExternalServiceError(String),

    /// 存储错误
    #[error("Storage error: {0}")]
    StorageError(String),
}

impl ApplicationError {
    /// 创建 NotFound 错误
    pub fn not_found(resource_type: &'static str, id: impl std::fmt::Display) -> Self {
        Self::NotFound {
            resource_type,
            id: id.to_string(),
        }
    }
}

impl From<RepositoryError> for ApplicationError {
    fn from(err: RepositoryError) -> Self {
        Self::RepositoryError(err.to_string())
    }
}

impl From<AudioStorageError> for ApplicationError {
    fn from(err: AudioStorageError) -> Self {
        match err {
            AudioStorageError::FileNotFound(name) => Self::not_found("Audio file", name),
            other => Self::StorageError(other.to_string()),
        }
    }
}

impl From<TtsError> for ApplicationError {
    fn from(err: TtsError) -> Self {
        Self::ExternalServiceError(err.to_string())
    }
}

impl From<VoiceError> for ApplicationError {
    fn from(err: VoiceError) -> Self {
        Self::InvalidInput(err.to_string())
    }
}

impl From<SynthesisError> for ApplicationError {
    fn from(err: SynthesisError) -> Self {
        Self::ValidationError(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_names_identifier() {
        let err = ApplicationError::not_found("Voice", "unknown-id");
        assert_eq!(err.to_string(), "Voice with ID 'unknown-id' not found");
    }

    #[test]
    fn test_domain_errors_map_to_client_variants() {
        let err: ApplicationError = VoiceError::UnsupportedContentType(None).into();
        assert!(matches!(err, ApplicationError::InvalidInput(_)));

        let err: ApplicationError = SynthesisError::InvalidTextLength(0).into();
        assert!(matches!(err, ApplicationError::ValidationError(_)));
    }

    #[test]
    fn test_missing_file_maps_to_not_found() {
        let err: ApplicationError = AudioStorageError::FileNotFound("x.wav".into()).into();
        assert!(matches!(err, ApplicationError::NotFound { .. }));
    }
}
