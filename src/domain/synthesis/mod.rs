//! Synthesis Context - 语音合成限界上下文
//!
//! 职责:
//! - 合成参数校验
//! - 合成任务记录
//! - 合成产物（artifact）格式

mod entities;
mod errors;
mod value_objects;

pub use entities::SynthesisJob;
pub use errors::SynthesisError;
pub use value_objects::{ArtifactFormat, SynthesisId, SynthesisParams};
