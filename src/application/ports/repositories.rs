//! Repository Ports - 出站端口
//!
//! 定义音色表与合成任务表的抽象接口
//! 具体实现在 infrastructure 层（进程内存）

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::synthesis::{SynthesisId, SynthesisJob};
use crate::domain::voice::{Voice, VoiceId};

/// Repository 错误
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("Duplicate entity: {0}")]
    Duplicate(String),
}

// ============================================================================
// Voice Repository
// ============================================================================

/// Voice Repository Port
#[async_trait]
pub trait VoiceRepositoryPort: Send + Sync {
    /// 保存新音色，ID 已存在时返回 Duplicate
    async fn save(&self, voice: &Voice) -> Result<(), RepositoryError>;

    /// 覆盖写入（用于启动时注册内置音色，以及删除失败后的回滚）
    async fn upsert(&self, voice: &Voice) -> Result<(), RepositoryError>;

    /// 根据 ID 查找音色
    async fn find_by_id(&self, id: &VoiceId) -> Result<Option<Voice>, RepositoryError>;

    /// 获取所有音色（按创建时间排序）
    async fn find_all(&self) -> Result<Vec<Voice>, RepositoryError>;

    /// 原子地移除音色，返回被移除的记录
    async fn delete(&self, id: &VoiceId) -> Result<Option<Voice>, RepositoryError>;

    /// 音色数量
    async fn count(&self) -> Result<usize, RepositoryError>;
}

// ============================================================================
// Synthesis Repository
// ============================================================================

/// Synthesis Repository Port
///
/// 合成任务只增不改
#[async_trait]
pub trait SynthesisRepositoryPort: Send + Sync {
    /// 保存合成任务，ID 已存在时返回 Duplicate
    async fn save(&self, job: &SynthesisJob) -> Result<(), RepositoryError>;

    /// 根据 ID 查找合成任务
    async fn find_by_id(&self, id: &SynthesisId) -> Result<Option<SynthesisJob>, RepositoryError>;

    /// 获取所有合成任务（按创建时间排序）
    async fn find_all(&self) -> Result<Vec<SynthesisJob>, RepositoryError>;

    /// 合成任务数量
    async fn count(&self) -> Result<usize, RepositoryError>;
}
