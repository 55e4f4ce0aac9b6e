//! File Storage - 文件系统音频存储实现
//!
//! 实现 AudioStoragePort trait

use async_trait::async_trait;
use std::io::ErrorKind;
use std::path::{Component, Path, PathBuf};
use tokio::fs;

use crate::application::ports::{ArtifactFile, AudioStorageError, AudioStoragePort};
use crate::domain::voice::VoiceId;

const VOICES_DIR: &str = "voices";
const AUDIO_DIR: &str = "audio";
const TEMP_DIR: &str = "temp";

/// 文件系统音频存储
pub struct FileAudioStorage {
    /// 存储根目录
    root: PathBuf,
    voices_dir: PathBuf,
    audio_dir: PathBuf,
    temp_dir: PathBuf,
}

impl FileAudioStorage {
    /// 创建新的文件存储，并确保 voices/、audio/、temp/ 目录存在
    pub async fn new(root: impl AsRef<Path>) -> Result<Self, AudioStorageError> {
        let root = root.as_ref().to_path_buf();
        let storage = Self {
            voices_dir: root.join(VOICES_DIR),
            audio_dir: root.join(AUDIO_DIR),
            temp_dir: root.join(TEMP_DIR),
            root,
        };

        for dir in [&storage.voices_dir, &storage.audio_dir, &storage.temp_dir] {
            fs::create_dir_all(dir)
                .await
                .map_err(|e| AudioStorageError::IoError(format!("{}: {}", dir.display(), e)))?;
        }

        tracing::debug!(root = %storage.root.display(), "File storage ready");

        Ok(storage)
    }

    /// 获取存储根目录
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// 将外部传入的文件名限定在 audio/ 目录内
    ///
    /// 只接受单一的普通路径分量，其余（空串、分隔符、`..`、绝对路径）一律视为不存在
    fn confine_artifact(&self, file_name: &str) -> Result<PathBuf, AudioStorageError> {
        let mut components = Path::new(file_name).components();
        match (components.next(), components.next()) {
            (Some(Component::Normal(name)), None) if name == file_name => {
                Ok(self.audio_dir.join(name))
            }
            _ => Err(AudioStorageError::FileNotFound(file_name.to_string())),
        }
    }
}

/// 删除文件，文件不存在不视为错误
async fn remove_if_exists(path: &Path) -> Result<bool, AudioStorageError> {
    match fs::remove_file(path).await {
        Ok(()) => Ok(true),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(false),
        Err(e) => Err(AudioStorageError::IoError(e.to_string())),
    }
}

#[async_trait]
impl AudioStoragePort for FileAudioStorage {
    async fn save_voice_audio(
        &self,
        voice_id: &VoiceId,
        extension: &str,
        data: &[u8],
    ) -> Result<PathBuf, AudioStorageError> {
        let path = self.voices_dir.join(format!("{}{}", voice_id, extension));

        fs::write(&path, data)
            .await
            .map_err(|e| AudioStorageError::IoError(e.to_string()))?;

        tracing::debug!(
            "Saved voice audio: voice={}, path={}, size={} bytes",
            voice_id,
            path.display(),
            data.len()
        );

        Ok(path)
    }

    async fn delete_voice_audio(&self, path: &Path) -> Result<bool, AudioStorageError> {
        let deleted = remove_if_exists(path).await?;
        if deleted {
            tracing::debug!("Deleted voice audio: path={}", path.display());
        }
        Ok(deleted)
    }

    async fn save_artifact(&self, file_name: &str, data: &[u8]) -> Result<PathBuf, AudioStorageError> {
        let path = self
            .confine_artifact(file_name)
            .map_err(|_| AudioStorageError::IoError(format!("Invalid artifact name: {}", file_name)))?;

        fs::write(&path, data)
            .await
            .map_err(|e| AudioStorageError::IoError(e.to_string()))?;

        tracing::debug!(
            "Saved artifact: file={}, size={} bytes",
            file_name,
            data.len()
        );

        Ok(path)
    }

    async fn delete_artifact(&self, file_name: &str) -> Result<bool, AudioStorageError> {
        let path = self.confine_artifact(file_name)?;
        remove_if_exists(&path).await
    }

    async fn open_artifact(&self, file_name: &str) -> Result<ArtifactFile, AudioStorageError> {
        let path = self.confine_artifact(file_name)?;

        // 打开失败（包括与删除竞争导致的不存在）统一按 NotFound 处理
        let file = fs::File::open(&path).await.map_err(|e| match e.kind() {
            ErrorKind::NotFound => AudioStorageError::FileNotFound(file_name.to_string()),
            _ => AudioStorageError::IoError(e.to_string()),
        })?;

        let metadata = file
            .metadata()
            .await
            .map_err(|e| AudioStorageError::IoError(e.to_string()))?;
        if !metadata.is_file() {
            return Err(AudioStorageError::FileNotFound(file_name.to_string()));
        }

        Ok(ArtifactFile {
            file,
            size: metadata.len(),
        })
    }
}
