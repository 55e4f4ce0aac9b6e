//! TTS Engine Port - TTS 合成引擎抽象
//!
//! 定义语音合成的抽象接口，具体实现在 infrastructure/adapters 层
//! 替换为真实 TTS 引擎时无需改动 HTTP 层

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::synthesis::{ArtifactFormat, SynthesisId};
use crate::domain::voice::Voice;

/// TTS 错误
#[derive(Debug, Error)]
pub enum TtsError {
    #[error("Engine error: {0}")]
    EngineError(String),
}

/// TTS 合成请求
#[derive(Debug, Clone)]
pub struct InferRequest {
    /// 合成任务 ID（写入产物，便于追踪）
    pub synthesis_id: SynthesisId,
    /// 要合成的文本内容
    pub text: String,
    /// 使用的音色
    pub voice: Voice,
    /// 语速倍率
    pub speed: f64,
    /// 音调倍率
    pub pitch: f64,
}

/// TTS 合成响应
#[derive(Debug, Clone)]
pub struct InferResponse {
    /// 产物数据
    pub data: Vec<u8>,
    /// 产物格式，决定文件扩展名与下载时的 Content-Type
    pub format: ArtifactFormat,
    /// 引擎给出的真实时长（秒），占位实现为 None
    pub duration_secs: Option<f64>,
}

/// TTS Engine Port
#[async_trait]
pub trait TtsEnginePort: Send + Sync {
    /// 根据文本估算合成时长（秒）
    fn estimate_duration(&self, text: &str) -> f64;

    /// 执行合成
    async fn infer(&self, request: InferRequest) -> Result<InferResponse, TtsError>;

    /// 检查引擎是否可用
    async fn health_check(&self) -> bool {
        true // 默认实现
    }
}
