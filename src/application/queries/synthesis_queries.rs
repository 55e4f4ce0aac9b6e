//! Synthesis Queries

/// 获取合成任务查询
#[derive(Debug, Clone)]
pub struct GetSynthesis {
    pub synthesis_id: String,
}

/// 列出所有合成任务查询
#[derive(Debug, Clone)]
pub struct ListSyntheses;

/// 服务统计查询（健康检查使用）
#[derive(Debug, Clone)]
pub struct GetServiceStats;

/// 服务统计
#[derive(Debug, Clone)]
pub struct ServiceStats {
    pub voice_count: usize,
    pub synthesis_count: usize,
    pub engine_ready: bool,
}
