//! Memory Layer - In-Memory State Management
//!
//! 音色表与合成任务表的进程内实现，进程退出即丢弃

mod synthesis_repo;
mod voice_repo;

pub use synthesis_repo::InMemorySynthesisRepository;
pub use voice_repo::InMemoryVoiceRepository;
