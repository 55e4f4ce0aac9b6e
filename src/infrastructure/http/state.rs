//! Application State
//!
//! 持有所有端口与 Command/Query Handlers

use std::sync::Arc;

use crate::application::{
    // Command handlers
    CreateVoiceHandler, DeleteVoiceHandler, SeedDefaultVoiceHandler, SynthesizeHandler,
    // Query handlers
    GetArtifactHandler, GetServiceStatsHandler, GetSynthesisHandler, GetVoiceHandler,
    ListSynthesesHandler, ListVoicesHandler,
    // Ports
    AudioStoragePort, SynthesisRepositoryPort, TtsEnginePort, VoiceRepositoryPort,
};
use crate::config::AppConfig;

/// 应用状态
///
/// 音色表与合成任务表为进程内内存实现，进程退出即丢弃
pub struct AppState {
    // ========== Ports ==========
    pub voice_repo: Arc<dyn VoiceRepositoryPort>,
    pub synthesis_repo: Arc<dyn SynthesisRepositoryPort>,
    pub storage: Arc<dyn AudioStoragePort>,
    pub tts_engine: Arc<dyn TtsEnginePort>,

    /// 服务描述中返回的前端地址
    pub frontend_url: Option<String>,

    // ========== Command Handlers ==========
    pub create_voice_handler: CreateVoiceHandler,
    pub delete_voice_handler: DeleteVoiceHandler,
    pub seed_default_voice_handler: SeedDefaultVoiceHandler,
    pub synthesize_handler: SynthesizeHandler,

    // ========== Query Handlers ==========
    pub get_voice_handler: GetVoiceHandler,
    pub list_voices_handler: ListVoicesHandler,
    pub get_synthesis_handler: GetSynthesisHandler,
    pub list_syntheses_handler: ListSynthesesHandler,
    pub get_artifact_handler: GetArtifactHandler,
    pub get_service_stats_handler: GetServiceStatsHandler,
}

impl AppState {
    /// 创建应用状态
    pub fn new(
        voice_repo: Arc<dyn VoiceRepositoryPort>,
        synthesis_repo: Arc<dyn SynthesisRepositoryPort>,
        storage: Arc<dyn AudioStoragePort>,
        tts_engine: Arc<dyn TtsEnginePort>,
        config: &AppConfig,
    ) -> Self {
        let sample_rate = config.synthesis.default_sample_rate;

        Self {
            // Command handlers
            create_voice_handler: CreateVoiceHandler::new(
                voice_repo.clone(),
                storage.clone(),
                sample_rate,
            ),
            delete_voice_handler: DeleteVoiceHandler::new(voice_repo.clone(), storage.clone()),
            seed_default_voice_handler: SeedDefaultVoiceHandler::new(
                voice_repo.clone(),
                sample_rate,
            ),
            synthesize_handler: SynthesizeHandler::new(
                voice_repo.clone(),
                synthesis_repo.clone(),
                storage.clone(),
                tts_engine.clone(),
            ),

            // Query handlers
            get_voice_handler: GetVoiceHandler::new(voice_repo.clone()),
            list_voices_handler: ListVoicesHandler::new(voice_repo.clone()),
            get_synthesis_handler: GetSynthesisHandler::new(synthesis_repo.clone()),
            list_syntheses_handler: ListSynthesesHandler::new(synthesis_repo.clone()),
            get_artifact_handler: GetArtifactHandler::new(storage.clone()),
            get_service_stats_handler: GetServiceStatsHandler::new(
                voice_repo.clone(),
                synthesis_repo.clone(),
                tts_engine.clone(),
            ),

            frontend_url: config.server.frontend_url().map(str::to_string),

            // Ports
            voice_repo,
            synthesis_repo,
            storage,
            tts_engine,
        }
    }
}
