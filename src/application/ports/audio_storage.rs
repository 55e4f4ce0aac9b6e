//! Audio Storage Port - 出站端口
//!
//! 定义参考音频与合成产物的文件存储抽象接口

use async_trait::async_trait;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tokio::fs::File;

use crate::domain::voice::VoiceId;

/// 音频存储错误
#[derive(Debug, Error)]
pub enum AudioStorageError {
    #[error("File not found: {0}")]
    FileNotFound(String),

    #[error("IO error: {0}")]
    IoError(String),
}

/// 已打开的合成产物文件
#[derive(Debug)]
pub struct ArtifactFile {
    pub file: File,
    pub size: u64,
}

/// Audio Storage Port - 出站端口
///
/// 目录布局：
/// - `voices/`：上传的参考音频，文件名为 `<voice-id><ext>`
/// - `audio/`：合成产物
/// - `temp/`：保留目录
#[async_trait]
pub trait AudioStoragePort: Send + Sync {
    /// 保存参考音频，`extension` 带前导点（如 ".wav"）
    async fn save_voice_audio(
        &self,
        voice_id: &VoiceId,
        extension: &str,
        data: &[u8],
    ) -> Result<PathBuf, AudioStorageError>;

    /// 删除参考音频，文件不存在时返回 `Ok(false)`
    async fn delete_voice_audio(&self, path: &Path) -> Result<bool, AudioStorageError>;

    /// 保存合成产物，文件名必须是单一路径分量
    async fn save_artifact(&self, file_name: &str, data: &[u8]) -> Result<PathBuf, AudioStorageError>;

    /// 删除合成产物，文件不存在时返回 `Ok(false)`
    async fn delete_artifact(&self, file_name: &str) -> Result<bool, AudioStorageError>;

    /// 打开合成产物，路径逃逸或文件不存在均返回 FileNotFound
    async fn open_artifact(&self, file_name: &str) -> Result<ArtifactFile, AudioStorageError>;
}
