//! Synthesis Context - Value Objects

use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;
use std::path::Path;
use uuid::Uuid;

use super::SynthesisError;

/// 合成任务唯一标识
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SynthesisId(Uuid);

impl SynthesisId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// 解析外部传入的 ID 字符串，格式无效时返回 None
    pub fn parse(id: &str) -> Option<Self> {
        Uuid::parse_str(id).ok().map(Self)
    }
}

impl Default for SynthesisId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for SynthesisId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// 合成参数
///
/// 不变量（由 `validate` 保证）:
/// - text 为 1 到 5000 个字符
/// - speed 与 pitch 均在 [0.5, 2.0] 之间
#[derive(Debug, Clone, PartialEq)]
pub struct SynthesisParams {
    text: String,
    speed: f64,
    pitch: f64,
}

impl SynthesisParams {
    pub const MAX_TEXT_CHARS: usize = 5000;
    pub const FACTOR_RANGE: RangeInclusive<f64> = 0.5..=2.0;

    pub fn validate(text: String, speed: f64, pitch: f64) -> Result<Self, SynthesisError> {
        let chars = text.chars().count();
        if chars == 0 || chars > Self::MAX_TEXT_CHARS {
            return Err(SynthesisError::InvalidTextLength(chars));
        }
        // NaN 不在任何区间内，会在这里被拒绝
        if !Self::FACTOR_RANGE.contains(&speed) {
            return Err(SynthesisError::SpeedOutOfRange(speed));
        }
        if !Self::FACTOR_RANGE.contains(&pitch) {
            return Err(SynthesisError::PitchOutOfRange(pitch));
        }
        Ok(Self { text, speed, pitch })
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn speed(&self) -> f64 {
        self.speed
    }

    pub fn pitch(&self) -> f64 {
        self.pitch
    }

    /// 文本字符数
    pub fn char_count(&self) -> usize {
        self.text.chars().count()
    }
}

/// 合成产物格式
///
/// `Text` 为占位实现生成的描述文件
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArtifactFormat {
    Wav,
    Mp3,
    Ogg,
    Flac,
    Text,
}

impl ArtifactFormat {
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_ascii_lowercase().as_str() {
            "wav" => Some(Self::Wav),
            "mp3" => Some(Self::Mp3),
            "ogg" => Some(Self::Ogg),
            "flac" => Some(Self::Flac),
            "txt" => Some(Self::Text),
            _ => None,
        }
    }

    pub fn extension(&self) -> &'static str {
        match self {
            Self::Wav => "wav",
            Self::Mp3 => "mp3",
            Self::Ogg => "ogg",
            Self::Flac => "flac",
            Self::Text => "txt",
        }
    }

    pub fn content_type(&self) -> &'static str {
        match self {
            Self::Wav => "audio/wav",
            Self::Mp3 => "audio/mpeg",
            Self::Ogg => "audio/ogg",
            Self::Flac => "audio/flac",
            Self::Text => "text/plain",
        }
    }

    /// 按文件扩展名选择响应 Content-Type，无法识别时返回 `application/octet-stream`
    pub fn content_type_for(file_name: &str) -> &'static str {
        Path::new(file_name)
            .extension()
            .and_then(|e| e.to_str())
            .and_then(Self::from_extension)
            .map(|f| f.content_type())
            .unwrap_or("application/octet-stream")
    }

    /// 合成产物文件名
    pub fn artifact_file_name(&self, id: &SynthesisId) -> String {
        format!("synthesis_{}.{}", id, self.extension())
    }
}
