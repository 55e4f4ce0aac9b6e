//! Data Transfer Objects

use serde::{Deserialize, Serialize};

use crate::domain::synthesis::SynthesisJob;
use crate::domain::voice::Voice;

// ============================================================================
// Service DTOs
// ============================================================================

#[derive(Debug, Serialize)]
pub struct EndpointsInfo {
    pub voices: &'static str,
    pub synthesis: &'static str,
    pub health: &'static str,
}

#[derive(Debug, Serialize)]
pub struct ServiceInfoResponse {
    pub service: &'static str,
    pub version: &'static str,
    pub status: &'static str,
    pub endpoints: EndpointsInfo,
    pub frontend_url: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub timestamp: String,
    pub voice_count: usize,
    pub synthesis_count: usize,
    pub engine_ready: bool,
}

// ============================================================================
// Voice DTOs
// ============================================================================

/// 上传元数据（query 参数形式，multipart 字段优先）
#[derive(Debug, Default, Deserialize)]
pub struct UploadVoiceParams {
    pub name: Option<String>,
    pub description: Option<String>,
    pub language: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct VoiceResponse {
    pub id: String,
    pub name: String,
    pub description: String,
    pub language: String,
    pub created_at: String,
    pub file_path: Option<String>,
    pub duration: Option<f64>,
    pub sample_rate: Option<u32>,
}

impl From<&Voice> for VoiceResponse {
    fn from(voice: &Voice) -> Self {
        Self {
            id: voice.id().to_string(),
            name: voice.name().as_str().to_string(),
            description: voice.description().as_str().to_string(),
            language: voice.language().as_str().to_string(),
            created_at: voice.created_at().to_rfc3339(),
            file_path: voice
                .reference_audio()
                .map(|audio| audio.path().to_string_lossy().into_owned()),
            duration: voice.duration(),
            sample_rate: voice.sample_rate(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

// ============================================================================
// Synthesis DTOs
// ============================================================================

fn default_factor() -> f64 {
    1.0
}

#[derive(Debug, Deserialize)]
pub struct SynthesizeRequest {
    pub text: String,
    pub voice_id: String,
    #[serde(default = "default_factor")]
    pub speed: f64,
    #[serde(default = "default_factor")]
    pub pitch: f64,
}

#[derive(Debug, Serialize)]
pub struct SynthesisResponse {
    pub id: String,
    pub audio_url: String,
    pub duration: Option<f64>,
    pub voice_id: String,
    pub text: String,
    pub created_at: String,
}

impl From<&SynthesisJob> for SynthesisResponse {
    fn from(job: &SynthesisJob) -> Self {
        Self {
            id: job.id().to_string(),
            audio_url: job.audio_url().to_string(),
            duration: job.duration(),
            voice_id: job.voice_id().to_string(),
            text: job.text().to_string(),
            created_at: job.created_at().to_rfc3339(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_synthesize_request_defaults() {
        let req: SynthesizeRequest =
            serde_json::from_str(r#"{"text": "hello", "voice_id": "default"}"#).unwrap();
        assert_eq!(req.speed, 1.0);
        assert_eq!(req.pitch, 1.0);
    }

    #[test]
    fn test_default_voice_response() {
        let voice = Voice::builtin_default(22050);
        let json = serde_json::to_value(VoiceResponse::from(&voice)).unwrap();

        assert_eq!(json["id"], "default");
        assert_eq!(json["name"], "Default Voice");
        assert_eq!(json["language"], "en");
        assert_eq!(json["sample_rate"], 22050);
        assert!(json["file_path"].is_null());
        assert!(json["duration"].is_null());
    }
}
