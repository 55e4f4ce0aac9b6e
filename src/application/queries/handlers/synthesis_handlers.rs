//! Synthesis Query Handlers

use std::sync::Arc;

use crate::application::error::ApplicationError;
use crate::application::ports::{SynthesisRepositoryPort, TtsEnginePort, VoiceRepositoryPort};
use crate::application::queries::{GetServiceStats, GetSynthesis, ListSyntheses, ServiceStats};
use crate::domain::synthesis::{SynthesisId, SynthesisJob};

/// GetSynthesis Handler
pub struct GetSynthesisHandler {
    synthesis_repo: Arc<dyn SynthesisRepositoryPort>,
}

impl GetSynthesisHandler {
    pub fn new(synthesis_repo: Arc<dyn SynthesisRepositoryPort>) -> Self {
        Self { synthesis_repo }
    }

    pub async fn handle(&self, query: GetSynthesis) -> Result<SynthesisJob, ApplicationError> {
        // 非 UUID 的 ID 不可能存在
        let not_found = || ApplicationError::not_found("Synthesis", &query.synthesis_id);
        let synthesis_id = SynthesisId::parse(&query.synthesis_id).ok_or_else(not_found)?;

        self.synthesis_repo
            .find_by_id(&synthesis_id)
            .await?
            .ok_or_else(not_found)
    }
}

/// ListSyntheses Handler
pub struct ListSynthesesHandler {
    synthesis_repo: Arc<dyn SynthesisRepositoryPort>,
}

impl ListSynthesesHandler {
    pub fn new(synthesis_repo: Arc<dyn SynthesisRepositoryPort>) -> Self {
        Self { synthesis_repo }
    }

    pub async fn handle(&self, _query: ListSyntheses) -> Result<Vec<SynthesisJob>, ApplicationError> {
        Ok(self.synthesis_repo.find_all().await?)
    }
}

/// GetServiceStats Handler
pub struct GetServiceStatsHandler {
    voice_repo: Arc<dyn VoiceRepositoryPort>,
    synthesis_repo: Arc<dyn SynthesisRepositoryPort>,
    tts_engine: Arc<dyn TtsEnginePort>,
}

impl GetServiceStatsHandler {
    pub fn new(
        voice_repo: Arc<dyn VoiceRepositoryPort>,
        synthesis_repo: Arc<dyn SynthesisRepositoryPort>,
        tts_engine: Arc<dyn TtsEnginePort>,
    ) -> Self {
        Self {
            voice_repo,
            synthesis_repo,
            tts_engine,
        }
    }

    pub async fn handle(&self, _query: GetServiceStats) -> Result<ServiceStats, ApplicationError> {
        Ok(ServiceStats {
            voice_count: self.voice_repo.count().await?,
            synthesis_count: self.synthesis_repo.count().await?,
            engine_ready: self.tts_engine.health_check().await,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::voice::VoiceId;
    use crate::infrastructure::adapters::PlaceholderTtsEngine;
    use crate::infrastructure::memory::{InMemorySynthesisRepository, InMemoryVoiceRepository};

    #[tokio::test]
    async fn test_get_synthesis() {
        let repo = InMemorySynthesisRepository::new().arc();
        let id = SynthesisId::new();
        let job = SynthesisJob::new(
            id,
            VoiceId::from_string("default"),
            "hello".to_string(),
            format!("/audio/synthesis_{}.txt", id),
            Some(0.5),
        );
        repo.save(&job).await.unwrap();

        let handler = GetSynthesisHandler::new(repo.clone());
        let found = handler
            .handle(GetSynthesis {
                synthesis_id: id.to_string(),
            })
            .await
            .unwrap();
        assert_eq!(found, job);

        for missing in [SynthesisId::new().to_string(), "not-a-uuid".to_string()] {
            let err = handler
                .handle(GetSynthesis {
                    synthesis_id: missing.clone(),
                })
                .await
                .unwrap_err();
            assert!(matches!(err, ApplicationError::NotFound { ref id, .. } if *id == missing));
        }

        let all = ListSynthesesHandler::new(repo).handle(ListSyntheses).await.unwrap();
        assert_eq!(all, vec![job]);
    }

    #[tokio::test]
    async fn test_service_stats() {
        let handler = GetServiceStatsHandler::new(
            InMemoryVoiceRepository::new().arc(),
            InMemorySynthesisRepository::new().arc(),
            Arc::new(PlaceholderTtsEngine::with_defaults()),
        );

        let stats = handler.handle(GetServiceStats).await.unwrap();
        assert_eq!(stats.voice_count, 0);
        assert_eq!(stats.synthesis_count, 0);
        assert!(stats.engine_ready);
    }
}
