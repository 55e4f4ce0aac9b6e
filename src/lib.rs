//! TxVoc - 音色上传与语音合成服务
//!
//! 架构设计: DDD + CQRS + Hexagonal Architecture
//!
//! 领域层 (domain/):
//! - Voice Context: 音色管理上下文
//! - Synthesis Context: 合成任务上下文
//!
//! 应用层 (application/):
//! - Ports: 端口定义（Repositories, AudioStorage, TtsEngine）
//! - Commands: CQRS 命令处理器
//! - Queries: CQRS 查询处理器
//!
//! 基础设施层 (infrastructure/):
//! - HTTP: RESTful API
//! - Memory: 内存表（进程内有效）
//! - Adapters: 文件存储, 占位 TTS 引擎

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::{load_config, AppConfig};
