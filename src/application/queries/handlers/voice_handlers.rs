//! Voice Query Handlers

use std::sync::Arc;

use crate::application::error::ApplicationError;
use crate::application::ports::VoiceRepositoryPort;
use crate::application::queries::{GetVoice, ListVoices};
use crate::domain::voice::{Voice, VoiceId};

/// GetVoice Handler
pub struct GetVoiceHandler {
    voice_repo: Arc<dyn VoiceRepositoryPort>,
}

impl GetVoiceHandler {
    pub fn new(voice_repo: Arc<dyn VoiceRepositoryPort>) -> Self {
        Self { voice_repo }
    }

    pub async fn handle(&self, query: GetVoice) -> Result<Voice, ApplicationError> {
        let voice_id = VoiceId::from_string(query.voice_id);
        self.voice_repo
            .find_by_id(&voice_id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("Voice", &voice_id))
    }
}

/// ListVoices Handler
pub struct ListVoicesHandler {
    voice_repo: Arc<dyn VoiceRepositoryPort>,
}

impl ListVoicesHandler {
    pub fn new(voice_repo: Arc<dyn VoiceRepositoryPort>) -> Self {
        Self { voice_repo }
    }

    pub async fn handle(&self, _query: ListVoices) -> Result<Vec<Voice>, ApplicationError> {
        tracing::debug!("Fetching all voices");
        Ok(self.voice_repo.find_all().await?)
    }
}
