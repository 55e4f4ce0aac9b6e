//! Placeholder TTS Engine - 占位合成引擎
//!
//! 不生成音频，只输出一份描述本次合成请求的文本文件；
//! 时长按字符数线性估算

use async_trait::async_trait;
use chrono::Utc;

use crate::application::ports::{InferRequest, InferResponse, TtsEnginePort, TtsError};
use crate::domain::synthesis::ArtifactFormat;

/// 占位引擎配置
#[derive(Debug, Clone)]
pub struct PlaceholderTtsConfig {
    /// 每个字符对应的估算时长（秒）
    pub seconds_per_char: f64,
}

impl Default for PlaceholderTtsConfig {
    fn default() -> Self {
        Self {
            seconds_per_char: 0.1,
        }
    }
}

/// Placeholder TTS Engine
pub struct PlaceholderTtsEngine {
    config: PlaceholderTtsConfig,
}

impl PlaceholderTtsEngine {
    pub fn new(config: PlaceholderTtsConfig) -> Self {
        tracing::info!(
            seconds_per_char = config.seconds_per_char,
            "PlaceholderTtsEngine initialized"
        );
        Self { config }
    }

    pub fn with_defaults() -> Self {
        Self::new(PlaceholderTtsConfig::default())
    }

    fn render(request: &InferRequest) -> String {
        format!(
            "TxVoc Speech Synthesis\n\
             =====================\n\
             ID: {id}\n\
             Text: {text}\n\
             Voice: {voice}\n\
             Speed: {speed}x\n\
             Pitch: {pitch}x\n\
             Generated: {generated}\n\
             \n\
             This is a placeholder file. A real engine would write the audio\n\
             synthesized from the text above with the selected voice.\n",
            id = request.synthesis_id,
            text = request.text,
            voice = request.voice.id(),
            speed = request.speed,
            pitch = request.pitch,
            generated = Utc::now().to_rfc3339(),
        )
    }
}

#[async_trait]
impl TtsEnginePort for PlaceholderTtsEngine {
    fn estimate_duration(&self, text: &str) -> f64 {
        text.chars().count() as f64 * self.config.seconds_per_char
    }

    async fn infer(&self, request: InferRequest) -> Result<InferResponse, TtsError> {
        tracing::debug!(
            synthesis_id = %request.synthesis_id,
            voice_id = %request.voice.id(),
            text_len = request.text.chars().count(),
            "PlaceholderTtsEngine: writing descriptive artifact"
        );

        Ok(InferResponse {
            data: Self::render(&request).into_bytes(),
            format: ArtifactFormat::Text,
            duration_secs: None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::synthesis::SynthesisId;
    use crate::domain::voice::{Voice, DEFAULT_SAMPLE_RATE};

    #[test]
    fn test_estimate_is_linear_in_characters() {
        let engine = PlaceholderTtsEngine::with_defaults();
        assert!((engine.estimate_duration("hello") - 0.5).abs() < 1e-9);
        assert!((engine.estimate_duration("你好") - 0.2).abs() < 1e-9);
        assert_eq!(engine.estimate_duration(""), 0.0);
    }

    #[tokio::test]
    async fn test_infer_describes_request() {
        let engine = PlaceholderTtsEngine::with_defaults();
        let synthesis_id = SynthesisId::new();
        let response = engine
            .infer(InferRequest {
                synthesis_id,
                text: "hello".to_string(),
                voice: Voice::builtin_default(DEFAULT_SAMPLE_RATE),
                speed: 1.5,
                pitch: 0.75,
            })
            .await
            .unwrap();

        assert_eq!(response.format, ArtifactFormat::Text);
        assert!(response.duration_secs.is_none());

        let content = String::from_utf8(response.data).unwrap();
        assert!(content.contains(&format!("ID: {}", synthesis_id)));
        assert!(content.contains("Text: hello"));
        assert!(content.contains("Voice: default"));
        assert!(content.contains("Speed: 1.5x"));
        assert!(content.contains("Pitch: 0.75x"));
    }
}
