//! 应用层 - 用例编排
//!
//! 包含：
//! - ports: 六边形架构端口定义（TtsEngine、Repository、AudioStorage）
//! - commands: CQRS 命令及处理器
//! - queries: CQRS 查询及处理器
//! - error: 应用层错误定义

pub mod commands;
pub mod error;
pub mod ports;
pub mod queries;

// Re-exports
pub use commands::{
    // Voice commands
    CreateVoice,
    DeleteVoice,
    SeedDefaultVoice,
    // Synthesis commands
    Synthesize,
    // Handlers
    handlers::{
        CreateVoiceHandler, DeleteVoiceHandler, SeedDefaultVoiceHandler, SynthesizeHandler,
        ARTIFACT_URL_PREFIX, DEFAULT_UPLOAD_NAME,
    },
};

pub use error::ApplicationError;

pub use ports::{
    // Audio storage
    ArtifactFile,
    AudioStorageError,
    AudioStoragePort,
    // Repositories
    RepositoryError,
    SynthesisRepositoryPort,
    VoiceRepositoryPort,
    // TTS engine
    InferRequest,
    InferResponse,
    TtsEnginePort,
    TtsError,
};

pub use queries::{
    // Audio queries
    GetArtifactQuery,
    GetArtifactResponse,
    // Synthesis queries
    GetServiceStats,
    GetSynthesis,
    ListSyntheses,
    ServiceStats,
    // Voice queries
    GetVoice,
    ListVoices,
    // Handlers
    handlers::{
        GetArtifactHandler, GetServiceStatsHandler, GetSynthesisHandler, GetVoiceHandler,
        ListSynthesesHandler, ListVoicesHandler,
    },
};
