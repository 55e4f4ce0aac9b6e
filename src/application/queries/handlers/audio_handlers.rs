//! Audio Query Handlers

use std::sync::Arc;

use crate::application::error::ApplicationError;
use crate::application::ports::{AudioStorageError, AudioStoragePort};
use crate::application::queries::audio_queries::{GetArtifactQuery, GetArtifactResponse};
use crate::domain::synthesis::ArtifactFormat;

/// GetArtifact Handler - 打开合成产物供下载
pub struct GetArtifactHandler {
    storage: Arc<dyn AudioStoragePort>,
}

impl GetArtifactHandler {
    pub fn new(storage: Arc<dyn AudioStoragePort>) -> Self {
        Self { storage }
    }

    pub async fn handle(&self, query: GetArtifactQuery) -> Result<GetArtifactResponse, ApplicationError> {
        let artifact = self
            .storage
            .open_artifact(&query.file_name)
            .await
            .map_err(|e| match e {
                AudioStorageError::FileNotFound(_) => {
                    ApplicationError::not_found("Audio file", &query.file_name)
                }
                other => other.into(),
            })?;

        Ok(GetArtifactResponse {
            file: artifact.file,
            size: artifact.size,
            content_type: ArtifactFormat::content_type_for(&query.file_name),
            file_name: query.file_name,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::adapters::FileAudioStorage;
    use tempfile::tempdir;

    #[tokio::test]
    async fn test_get_artifact() {
        let dir = tempdir().unwrap();
        let storage = Arc::new(FileAudioStorage::new(dir.path()).await.unwrap());
        storage.save_artifact("clip.wav", b"RIFF").await.unwrap();
        storage.save_artifact("blob.xyz", b"??").await.unwrap();

        let handler = GetArtifactHandler::new(storage);

        let wav = handler
            .handle(GetArtifactQuery {
                file_name: "clip.wav".to_string(),
            })
            .await
            .unwrap();
        assert_eq!(wav.content_type, "audio/wav");
        assert_eq!(wav.size, 4);

        let blob = handler
            .handle(GetArtifactQuery {
                file_name: "blob.xyz".to_string(),
            })
            .await
            .unwrap();
        assert_eq!(blob.content_type, "application/octet-stream");

        let err = handler
            .handle(GetArtifactQuery {
                file_name: "does-not-exist.wav".to_string(),
            })
            .await
            .unwrap_err();
        assert!(matches!(err, ApplicationError::NotFound { .. }));
    }
}
