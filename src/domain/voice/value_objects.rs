//! Voice Context - Value Objects

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use uuid::Uuid;

use super::VoiceError;

/// 音色唯一标识
///
/// 上传的音色使用 UUID v4 字符串，内置音色使用固定字符串（如 "default"）
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VoiceId(String);

impl VoiceId {
    pub fn new() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn from_string(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for VoiceId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for VoiceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// 音色名称
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VoiceName(pub(super) String);

impl VoiceName {
    pub const MAX_CHARS: usize = 100;

    pub fn new(name: impl Into<String>) -> Result<Self, VoiceError> {
        let name = name.into();
        if name.is_empty() {
            return Err(VoiceError::InvalidName("name must not be empty"));
        }
        if name.chars().count() > Self::MAX_CHARS {
            return Err(VoiceError::InvalidName("name must be at most 100 characters"));
        }
        Ok(Self(name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for VoiceName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// 音色描述（可为空）
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VoiceDescription(pub(super) String);

impl VoiceDescription {
    pub const MAX_CHARS: usize = 500;

    pub fn new(description: impl Into<String>) -> Result<Self, VoiceError> {
        let description = description.into();
        if description.chars().count() > Self::MAX_CHARS {
            return Err(VoiceError::InvalidDescription(
                "description must be at most 500 characters",
            ));
        }
        Ok(Self(description))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// 语言代码（如 "en"、"zh-CN"）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LanguageCode(String);

impl LanguageCode {
    pub fn new(code: impl Into<String>) -> Result<Self, VoiceError> {
        let code = code.into();
        if code.is_empty() {
            return Err(VoiceError::InvalidLanguage("language must not be empty"));
        }
        if code.len() > 35 || !code.chars().all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_') {
            return Err(VoiceError::InvalidLanguage(
                "language must be a short alphanumeric tag",
            ));
        }
        Ok(Self(code))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for LanguageCode {
    fn default() -> Self {
        Self("en".to_string())
    }
}

/// 参考音频格式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AudioFormat {
    Wav,
    Mp3,
    Flac,
    Ogg,
}

impl AudioFormat {
    /// 根据上传时声明的 Content-Type 识别格式
    pub fn from_content_type(content_type: &str) -> Option<Self> {
        match content_type.to_ascii_lowercase().as_str() {
            "audio/wav" => Some(Self::Wav),
            "audio/mpeg" | "audio/mp3" => Some(Self::Mp3),
            "audio/ogg" => Some(Self::Ogg),
            "audio/flac" => Some(Self::Flac),
            _ => None,
        }
    }

    /// 校验上传的 Content-Type，缺失或不在白名单内均视为无效
    pub fn validate_content_type(content_type: Option<&str>) -> Result<Self, VoiceError> {
        content_type
            .and_then(Self::from_content_type)
            .ok_or_else(|| VoiceError::UnsupportedContentType(content_type.map(str::to_string)))
    }
}

/// 参考音频引用 - 上传文件在磁盘上的位置及声明格式
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AudioRef {
    path: PathBuf,
    format: AudioFormat,
}

impl AudioRef {
    pub fn new(path: PathBuf, format: AudioFormat) -> Self {
        Self { path, format }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn format(&self) -> AudioFormat {
        self.format
    }

    /// 从上传文件名推断保存时使用的扩展名（带前导点）
    ///
    /// 文件名缺失时按 "audio.wav" 处理；扩展名缺失或含非字母数字字符时回退为 ".wav"
    pub fn upload_extension(file_name: Option<&str>) -> String {
        let file_name = file_name.filter(|f| !f.is_empty()).unwrap_or("audio.wav");
        Path::new(file_name)
            .extension()
            .and_then(|e| e.to_str())
            .filter(|e| !e.is_empty() && e.chars().all(|c| c.is_ascii_alphanumeric()))
            .map(|e| format!(".{}", e.to_ascii_lowercase()))
            .unwrap_or_else(|| ".wav".to_string())
    }
}
