//! Synthesis Command Handlers

use std::sync::Arc;

use crate::application::commands::Synthesize;
use crate::application::error::ApplicationError;
use crate::application::ports::{
    AudioStoragePort, InferRequest, SynthesisRepositoryPort, TtsEnginePort, VoiceRepositoryPort,
};
use crate::domain::synthesis::{SynthesisId, SynthesisJob, SynthesisParams};
use crate::domain::voice::VoiceId;

/// 合成产物的下载路由前缀
pub const ARTIFACT_URL_PREFIX: &str = "/audio";

/// Synthesize Handler
///
/// 流程：参数校验 -> 音色存在性检查 -> 引擎合成 -> 写入产物 -> 登记任务
/// 任一步失败都不会留下任务记录；登记失败时删除已写入的产物
pub struct SynthesizeHandler {
    voice_repo: Arc<dyn VoiceRepositoryPort>,
    synthesis_repo: Arc<dyn SynthesisRepositoryPort>,
    storage: Arc<dyn AudioStoragePort>,
    tts_engine: Arc<dyn TtsEnginePort>,
}

impl SynthesizeHandler {
    pub fn new(
        voice_repo: Arc<dyn VoiceRepositoryPort>,
        synthesis_repo: Arc<dyn SynthesisRepositoryPort>,
        storage: Arc<dyn AudioStoragePort>,
        tts_engine: Arc<dyn TtsEnginePort>,
    ) -> Self {
        Self {
            voice_repo,
            synthesis_repo,
            storage,
            tts_engine,
        }
    }

    pub async fn handle(&self, command: Synthesize) -> Result<SynthesisJob, ApplicationError> {
        let params = SynthesisParams::validate(command.text, command.speed, command.pitch)?;

        let voice_id = VoiceId::from_string(command.voice_id);
        let voice = self
            .voice_repo
            .find_by_id(&voice_id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("Voice", &voice_id))?;

        let synthesis_id = SynthesisId::new();
        let response = self
            .tts_engine
            .infer(InferRequest {
                synthesis_id,
                text: params.text().to_string(),
                voice,
                speed: params.speed(),
                pitch: params.pitch(),
            })
            .await?;

        let file_name = response.format.artifact_file_name(&synthesis_id);
        self.storage.save_artifact(&file_name, &response.data).await?;

        let duration = response
            .duration_secs
            .unwrap_or_else(|| self.tts_engine.estimate_duration(params.text()));

        let job = SynthesisJob::new(
            synthesis_id,
            voice_id,
            params.text().to_string(),
            format!("{}/{}", ARTIFACT_URL_PREFIX, file_name),
            Some(duration),
        );

        if let Err(e) = self.synthesis_repo.save(&job).await {
            if let Err(cleanup) = self.storage.delete_artifact(&file_name).await {
                tracing::warn!(
                    file = %file_name,
                    error = %cleanup,
                    "Failed to remove orphaned artifact"
                );
            }
            return Err(e.into());
        }

        tracing::info!(
            synthesis_id = %synthesis_id,
            voice_id = %job.voice_id(),
            chars = params.char_count(),
            duration,
            "Speech synthesized"
        );

        Ok(job)
    }
}
