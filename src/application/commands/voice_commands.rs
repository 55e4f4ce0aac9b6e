//! Voice Commands

/// 上传音色命令
///
/// 元数据字段缺失时使用默认值（name = "Custom Voice"，description = ""，language = "en"）
#[derive(Debug, Clone)]
pub struct CreateVoice {
    pub name: Option<String>,
    pub description: Option<String>,
    pub language: Option<String>,
    /// 上传时的原始文件名
    pub file_name: Option<String>,
    /// 上传时声明的 Content-Type
    pub content_type: Option<String>,
    pub data: Vec<u8>,
}

/// 删除音色命令
#[derive(Debug, Clone)]
pub struct DeleteVoice {
    pub voice_id: String,
}

/// 注册内置默认音色命令（启动时执行）
#[derive(Debug, Clone, Copy)]
pub struct SeedDefaultVoice;
