//! Voice Command Handlers

use std::sync::Arc;

use crate::application::commands::{CreateVoice, DeleteVoice, SeedDefaultVoice};
use crate::application::error::ApplicationError;
use crate::application::ports::{AudioStoragePort, VoiceRepositoryPort};
use crate::domain::voice::{
    AudioFormat, AudioRef, LanguageCode, Voice, VoiceDescription, VoiceId, VoiceName,
};

/// 未提供名称时的默认音色名
pub const DEFAULT_UPLOAD_NAME: &str = "Custom Voice";

// ============================================================================
// CreateVoice
// ============================================================================

/// CreateVoice Handler
pub struct CreateVoiceHandler {
    voice_repo: Arc<dyn VoiceRepositoryPort>,
    storage: Arc<dyn AudioStoragePort>,
    sample_rate: u32,
}

impl CreateVoiceHandler {
    pub fn new(
        voice_repo: Arc<dyn VoiceRepositoryPort>,
        storage: Arc<dyn AudioStoragePort>,
        sample_rate: u32,
    ) -> Self {
        Self {
            voice_repo,
            storage,
            sample_rate,
        }
    }

    pub async fn handle(&self, command: CreateVoice) -> Result<Voice, ApplicationError> {
        // 所有输入校验在写文件之前完成
        let format = AudioFormat::validate_content_type(command.content_type.as_deref())?;
        let name = VoiceName::new(
            command
                .name
                .unwrap_or_else(|| DEFAULT_UPLOAD_NAME.to_string()),
        )?;
        let description = VoiceDescription::new(command.description.unwrap_or_default())?;
        let language = match command.language {
            Some(code) => LanguageCode::new(code)?,
            None => LanguageCode::default(),
        };
        let extension = AudioRef::upload_extension(command.file_name.as_deref());

        let voice_id = VoiceId::new();
        let path = self
            .storage
            .save_voice_audio(&voice_id, &extension, &command.data)
            .await?;

        let voice = Voice::uploaded(
            voice_id,
            name,
            description,
            language,
            AudioRef::new(path.clone(), format),
            self.sample_rate,
        );

        if let Err(e) = self.voice_repo.save(&voice).await {
            // 注册失败时回收已写入的文件
            if let Err(cleanup) = self.storage.delete_voice_audio(&path).await {
                tracing::warn!(
                    path = %path.display(),
                    error = %cleanup,
                    "Failed to remove orphaned voice audio"
                );
            }
            return Err(e.into());
        }

        tracing::info!(
            voice_id = %voice.id(),
            name = %voice.name(),
            format = ?voice.reference_audio().map(AudioRef::format),
            size = command.data.len(),
            "Voice uploaded"
        );

        Ok(voice)
    }
}

// ============================================================================
// DeleteVoice
// ============================================================================

/// DeleteVoice Handler
pub struct DeleteVoiceHandler {
    voice_repo: Arc<dyn VoiceRepositoryPort>,
    storage: Arc<dyn AudioStoragePort>,
}

impl DeleteVoiceHandler {
    pub fn new(
        voice_repo: Arc<dyn VoiceRepositoryPort>,
        storage: Arc<dyn AudioStoragePort>,
    ) -> Self {
        Self {
            voice_repo,
            storage,
        }
    }

    /// 删除音色及其参考音频，返回被删除的记录
    pub async fn handle(&self, command: DeleteVoice) -> Result<Voice, ApplicationError> {
        let voice_id = VoiceId::from_string(command.voice_id);

        let voice = self
            .voice_repo
            .delete(&voice_id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("Voice", &voice_id))?;

        if let Some(audio) = voice.reference_audio() {
            if let Err(e) = self.storage.delete_voice_audio(audio.path()).await {
                // 文件仍在磁盘上，恢复记录
                self.voice_repo.upsert(&voice).await?;
                return Err(e.into());
            }
        }

        tracing::info!(
            voice_id = %voice_id,
            name = %voice.name(),
            "Voice deleted"
        );

        Ok(voice)
    }
}

// ============================================================================
// SeedDefaultVoice
// ============================================================================

/// SeedDefaultVoice Handler
pub struct SeedDefaultVoiceHandler {
    voice_repo: Arc<dyn VoiceRepositoryPort>,
    sample_rate: u32,
}

impl SeedDefaultVoiceHandler {
    pub fn new(voice_repo: Arc<dyn VoiceRepositoryPort>, sample_rate: u32) -> Self {
        Self {
            voice_repo,
            sample_rate,
        }
    }

    pub async fn handle(&self, _command: SeedDefaultVoice) -> Result<Voice, ApplicationError> {
        let voice = Voice::builtin_default(self.sample_rate);
        self.voice_repo.upsert(&voice).await?;

        tracing::info!(voice_id = %voice.id(), "Default voice registered");

        Ok(voice)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::voice::DEFAULT_SAMPLE_RATE;
    use crate::infrastructure::adapters::FileAudioStorage;
    use crate::application::ports::RepositoryError;
    use crate::infrastructure::memory::InMemoryVoiceRepository;
    use async_trait::async_trait;
    use tempfile::{tempdir, TempDir};

    /// 拒绝所有写入的音色仓储
    struct RejectingVoiceRepository;

    #[async_trait]
    impl VoiceRepositoryPort for RejectingVoiceRepository {
        async fn save(&self, voice: &Voice) -> Result<(), RepositoryError> {
            Err(RepositoryError::Duplicate(voice.id().to_string()))
        }

        async fn upsert(&self, voice: &Voice) -> Result<(), RepositoryError> {
            Err(RepositoryError::Duplicate(voice.id().to_string()))
        }

        async fn find_by_id(&self, _id: &VoiceId) -> Result<Option<Voice>, RepositoryError> {
            Ok(None)
        }

        async fn find_all(&self) -> Result<Vec<Voice>, RepositoryError> {
            Ok(Vec::new())
        }

        async fn delete(&self, _id: &VoiceId) -> Result<Option<Voice>, RepositoryError> {
            Ok(None)
        }

        async fn count(&self) -> Result<usize, RepositoryError> {
            Ok(0)
        }
    }

    struct Fixture {
        dir: TempDir,
        repo: Arc<InMemoryVoiceRepository>,
        create: CreateVoiceHandler,
        delete: DeleteVoiceHandler,
    }

    async fn fixture() -> Fixture {
        let dir = tempdir().unwrap();
        let storage = Arc::new(FileAudioStorage::new(dir.path()).await.unwrap());
        let repo = InMemoryVoiceRepository::new().arc();
        Fixture {
            create: CreateVoiceHandler::new(repo.clone(), storage.clone(), DEFAULT_SAMPLE_RATE),
            delete: DeleteVoiceHandler::new(repo.clone(), storage),
            repo,
            dir,
        }
    }

    fn upload(file_name: &str, content_type: Option<&str>) -> CreateVoice {
        CreateVoice {
            name: Some("Narrator".to_string()),
            description: None,
            language: None,
            file_name: Some(file_name.to_string()),
            content_type: content_type.map(str::to_string),
            data: b"RIFF....WAVE".to_vec(),
        }
    }

    #[tokio::test]
    async fn test_create_voice_writes_file() {
        let f = fixture().await;

        let voice = f
            .create
            .handle(upload("a.wav", Some("audio/wav")))
            .await
            .unwrap();

        let audio = voice.reference_audio().unwrap();
        assert!(audio.path().exists());
        assert!(audio.path().to_string_lossy().ends_with(".wav"));
        assert_eq!(voice.sample_rate(), Some(22050));
        assert_eq!(voice.description().as_str(), "");
        assert_eq!(voice.language().as_str(), "en");
        assert_eq!(f.repo.find_by_id(voice.id()).await.unwrap(), Some(voice));
    }

    #[tokio::test]
    async fn test_create_voice_ids_are_unique() {
        let f = fixture().await;
        let a = f.create.handle(upload("a.wav", Some("audio/wav"))).await.unwrap();
        let b = f.create.handle(upload("a.wav", Some("audio/wav"))).await.unwrap();
        assert_ne!(a.id(), b.id());
        assert_ne!(
            a.reference_audio().unwrap().path(),
            b.reference_audio().unwrap().path()
        );
    }

    #[tokio::test]
    async fn test_create_voice_defaults_name() {
        let f = fixture().await;
        let mut command = upload("clip.flac", Some("audio/flac"));
        command.name = None;

        let voice = f.create.handle(command).await.unwrap();
        assert_eq!(voice.name().as_str(), DEFAULT_UPLOAD_NAME);
        assert!(voice
            .reference_audio()
            .unwrap()
            .path()
            .to_string_lossy()
            .ends_with(".flac"));
    }

    #[tokio::test]
    async fn test_create_voice_rejects_content_type_without_side_effects() {
        let f = fixture().await;

        for content_type in [Some("text/plain"), None] {
            let err = f
                .create
                .handle(upload("a.wav", content_type))
                .await
                .unwrap_err();
            assert!(matches!(err, ApplicationError::InvalidInput(_)));
        }

        assert_eq!(f.repo.count().await.unwrap(), 0);
        let mut entries = std::fs::read_dir(f.dir.path().join("voices")).unwrap();
        assert!(entries.next().is_none());
    }

    #[tokio::test]
    async fn test_create_voice_removes_file_when_save_fails() {
        let dir = tempdir().unwrap();
        let storage = Arc::new(FileAudioStorage::new(dir.path()).await.unwrap());
        let handler =
            CreateVoiceHandler::new(Arc::new(RejectingVoiceRepository), storage, DEFAULT_SAMPLE_RATE);

        let err = handler
            .handle(upload("a.wav", Some("audio/wav")))
            .await
            .unwrap_err();
        assert!(matches!(err, ApplicationError::RepositoryError(_)));

        let mut entries = std::fs::read_dir(dir.path().join("voices")).unwrap();
        assert!(entries.next().is_none());
    }

    #[tokio::test]
    async fn test_delete_voice_restores_record_when_file_removal_fails() {
        let f = fixture().await;
        let a = f.create.handle(upload("a.wav", Some("audio/wav"))).await.unwrap();
        let b = f.create.handle(upload("b.wav", Some("audio/wav"))).await.unwrap();

        // 目录无法按文件删除
        let path = a.reference_audio().unwrap().path().to_path_buf();
        std::fs::remove_file(&path).unwrap();
        std::fs::create_dir(&path).unwrap();

        let err = f
            .delete
            .handle(DeleteVoice {
                voice_id: a.id().to_string(),
            })
            .await
            .unwrap_err();
        assert!(matches!(err, ApplicationError::StorageError(_)));

        assert_eq!(f.repo.find_by_id(a.id()).await.unwrap(), Some(a.clone()));
        let ids: Vec<VoiceId> = f
            .repo
            .find_all()
            .await
            .unwrap()
            .iter()
            .map(|v| v.id().clone())
            .collect();
        assert_eq!(ids, vec![a.id().clone(), b.id().clone()]);
        assert!(path.exists());
    }

    #[tokio::test]
    async fn test_delete_voice_removes_record_and_file() {
        let f = fixture().await;
        let voice = f.create.handle(upload("a.mp3", Some("audio/mpeg"))).await.unwrap();
        let path = voice.reference_audio().unwrap().path().to_path_buf();

        let deleted = f
            .delete
            .handle(DeleteVoice {
                voice_id: voice.id().to_string(),
            })
            .await
            .unwrap();
        assert_eq!(deleted.id(), voice.id());
        assert!(!path.exists());
        assert!(f.repo.find_all().await.unwrap().is_empty());

        let err = f
            .delete
            .handle(DeleteVoice {
                voice_id: voice.id().to_string(),
            })
            .await
            .unwrap_err();
        assert!(matches!(err, ApplicationError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_delete_voice_tolerates_missing_file() {
        let f = fixture().await;
        let voice = f.create.handle(upload("a.ogg", Some("audio/ogg"))).await.unwrap();
        std::fs::remove_file(voice.reference_audio().unwrap().path()).unwrap();

        assert!(f
            .delete
            .handle(DeleteVoice {
                voice_id: voice.id().to_string(),
            })
            .await
            .is_ok());
    }

    #[tokio::test]
    async fn test_seed_default_voice() {
        let f = fixture().await;
        let seed = SeedDefaultVoiceHandler::new(f.repo.clone(), DEFAULT_SAMPLE_RATE);

        seed.handle(SeedDefaultVoice).await.unwrap();
        seed.handle(SeedDefaultVoice).await.unwrap();

        let voices = f.repo.find_all().await.unwrap();
        assert_eq!(voices.len(), 1);
        assert_eq!(voices[0].id().as_str(), "default");

        // 内置音色没有文件，可直接删除
        let deleted = f
            .delete
            .handle(DeleteVoice {
                voice_id: "default".to_string(),
            })
            .await
            .unwrap();
        assert!(deleted.reference_audio().is_none());
    }
}
