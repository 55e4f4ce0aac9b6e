//! Synthesis Commands

/// 语音合成命令
#[derive(Debug, Clone)]
pub struct Synthesize {
    pub text: String,
    pub voice_id: String,
    pub speed: f64,
    pub pitch: f64,
}
