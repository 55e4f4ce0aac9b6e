//! TTS Adapter - 合成引擎实现

mod placeholder_tts_engine;

pub use placeholder_tts_engine::{PlaceholderTtsConfig, PlaceholderTtsEngine};
