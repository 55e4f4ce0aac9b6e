//! Audio Queries - 合成产物下载

use tokio::fs::File;

/// 获取合成产物查询
#[derive(Debug, Clone)]
pub struct GetArtifactQuery {
    pub file_name: String,
}

/// 获取合成产物响应
#[derive(Debug)]
pub struct GetArtifactResponse {
    pub file: File,
    pub size: u64,
    pub content_type: &'static str,
    pub file_name: String,
}
