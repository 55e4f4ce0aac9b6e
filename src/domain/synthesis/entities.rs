//! Synthesis Context - Entities

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::SynthesisId;
use crate::domain::voice::VoiceId;

/// 合成任务记录
///
/// 创建后不可变；voice_id 仅保证创建时对应的音色存在，删除音色不会级联删除任务
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SynthesisJob {
    id: SynthesisId,
    voice_id: VoiceId,
    text: String,
    audio_url: String,
    duration: Option<f64>,
    created_at: DateTime<Utc>,
}

impl SynthesisJob {
    pub fn new(
        id: SynthesisId,
        voice_id: VoiceId,
        text: String,
        audio_url: String,
        duration: Option<f64>,
    ) -> Self {
        Self {
            id,
            voice_id,
            text,
            audio_url,
            duration,
            created_at: Utc::now(),
        }
    }

    pub fn id(&self) -> &SynthesisId {
        &self.id
    }

    pub fn voice_id(&self) -> &VoiceId {
        &self.voice_id
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn audio_url(&self) -> &str {
        &self.audio_url
    }

    pub fn duration(&self) -> Option<f64> {
        self.duration
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}
