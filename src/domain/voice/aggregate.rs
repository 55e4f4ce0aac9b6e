//! Voice Context - Aggregate Root

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{AudioRef, LanguageCode, VoiceDescription, VoiceId, VoiceName};

/// 内置音色的固定 ID
pub const DEFAULT_VOICE_ID: &str = "default";

/// 上传音色的默认采样率（Hz）
pub const DEFAULT_SAMPLE_RATE: u32 = 22050;

/// Voice 聚合根
///
/// 不变量:
/// - 上传的音色独占其参考音频文件，删除音色时必须删除该文件
/// - 内置音色没有参考音频
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Voice {
    id: VoiceId,
    name: VoiceName,
    description: VoiceDescription,
    language: LanguageCode,
    reference_audio: Option<AudioRef>,
    /// 参考音频时长（秒），不解码音频，始终未设置
    duration: Option<f64>,
    sample_rate: Option<u32>,
    created_at: DateTime<Utc>,
}

impl Voice {
    /// 创建上传音色
    pub fn uploaded(
        id: VoiceId,
        name: VoiceName,
        description: VoiceDescription,
        language: LanguageCode,
        reference_audio: AudioRef,
        sample_rate: u32,
    ) -> Self {
        Self {
            id,
            name,
            description,
            language,
            reference_audio: Some(reference_audio),
            duration: None,
            sample_rate: Some(sample_rate),
            created_at: Utc::now(),
        }
    }

    /// 启动时注册的内置音色
    pub fn builtin_default(sample_rate: u32) -> Self {
        Self {
            id: VoiceId::from_string(DEFAULT_VOICE_ID),
            name: VoiceName("Default Voice".to_string()),
            description: VoiceDescription("Built-in default voice for testing".to_string()),
            language: LanguageCode::default(),
            reference_audio: None,
            duration: None,
            sample_rate: Some(sample_rate),
            created_at: Utc::now(),
        }
    }

    // Getters
    pub fn id(&self) -> &VoiceId {
        &self.id
    }

    pub fn name(&self) -> &VoiceName {
        &self.name
    }

    pub fn description(&self) -> &VoiceDescription {
        &self.description
    }

    pub fn language(&self) -> &LanguageCode {
        &self.language
    }

    pub fn reference_audio(&self) -> Option<&AudioRef> {
        self.reference_audio.as_ref()
    }

    pub fn duration(&self) -> Option<f64> {
        self.duration
    }

    pub fn sample_rate(&self) -> Option<u32> {
        self.sample_rate
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}
