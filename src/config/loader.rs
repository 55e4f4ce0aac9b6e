//! Configuration Loader
//!
//! 分层加载：默认值 < 配置文件 < 环境变量

use config::{builder::DefaultState, Config, ConfigBuilder, Environment, File};
use std::path::Path;
use thiserror::Error;

use super::types::AppConfig;

/// 配置加载错误
#[derive(Debug, Error)]
pub enum ConfigError {
    /// 读取或合并配置源失败（含反序列化失败）
    #[error("Failed to read configuration: {0}")]
    Source(#[from] config::ConfigError),

    #[error("Invalid configuration value `{key}`: {reason}")]
    Invalid {
        key: &'static str,
        reason: &'static str,
    },
}

/// 未指定路径时按顺序尝试的配置文件（均可缺省，后者覆盖前者）
const DEFAULT_FILES: [&str; 2] = ["config", "config.local"];

/// 环境变量前缀，层级使用 `__` 分隔
const ENV_PREFIX: &str = "TXVOC";

/// 加载应用配置
///
/// # 环境变量示例
/// - `TXVOC_SERVER__PORT=9000`
/// - `TXVOC_SERVER__CORS_ORIGINS=http://a.example,http://b.example`
/// - `TXVOC_STORAGE__ROOT=/data/txvoc`
/// - `TXVOC_LOG__JSON=true`
pub fn load_config() -> Result<AppConfig, ConfigError> {
    load_config_from_path(None)
}

/// 加载配置；给定 `config_path` 时该文件必须存在，否则使用默认文件列表
pub fn load_config_from_path(config_path: Option<&Path>) -> Result<AppConfig, ConfigError> {
    let mut builder = with_defaults(Config::builder())?;

    builder = match config_path {
        Some(path) => builder.add_source(File::from(path)),
        None => DEFAULT_FILES.iter().fold(builder, |b, name| {
            b.add_source(File::with_name(name).required(false))
        }),
    };

    let settings: AppConfig = builder
        .add_source(
            Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true)
                .list_separator(",")
                .with_list_parse_key("server.cors_origins"),
        )
        .build()?
        .try_deserialize()?;

    validate(&settings)?;
    Ok(settings)
}

fn with_defaults(
    builder: ConfigBuilder<DefaultState>,
) -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    Ok(builder
        .set_default("server.host", "0.0.0.0")?
        .set_default("server.port", 8000)?
        .set_default("storage.root", "storage")?
        .set_default("storage.max_upload_size", 50 * 1024 * 1024)?
        .set_default("synthesis.seconds_per_char", 0.1)?
        .set_default("synthesis.default_sample_rate", 22050)?
        .set_default("log.level", "info")?
        .set_default("log.json", false)?)
}

fn validate(settings: &AppConfig) -> Result<(), ConfigError> {
    let invalid = |key, reason| Err(ConfigError::Invalid { key, reason });

    if settings.server.port == 0 {
        return invalid("server.port", "must not be 0");
    }
    if settings.storage.root.as_os_str().is_empty() {
        return invalid("storage.root", "must not be empty");
    }
    let seconds_per_char = settings.synthesis.seconds_per_char;
    if seconds_per_char.is_nan() || seconds_per_char <= 0.0 {
        return invalid("synthesis.seconds_per_char", "must be positive");
    }
    if settings.synthesis.default_sample_rate == 0 {
        return invalid("synthesis.default_sample_rate", "must not be 0");
    }

    Ok(())
}

/// 启动时输出生效配置
pub fn print_config(settings: &AppConfig) {
    tracing::info!(
        addr = %settings.server.addr(),
        cors_origins = ?settings.server.cors_origins,
        "Server settings"
    );
    tracing::info!(
        root = %settings.storage.root.display(),
        max_upload_size = settings.storage.max_upload_size,
        "Storage settings"
    );
    tracing::info!(
        seconds_per_char = settings.synthesis.seconds_per_char,
        default_sample_rate = settings.synthesis.default_sample_rate,
        "Synthesis settings"
    );
    tracing::info!(
        level = %settings.log.level,
        json = settings.log.json,
        "Log settings"
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn rejected_key(settings: &AppConfig) -> Option<&'static str> {
        match validate(settings) {
            Err(ConfigError::Invalid { key, .. }) => Some(key),
            _ => None,
        }
    }

    #[test]
    fn test_defaults_are_valid() {
        assert!(validate(&AppConfig::default()).is_ok());
    }

    #[test]
    fn test_rejects_out_of_range_values() {
        let mut settings = AppConfig::default();
        settings.server.port = 0;
        assert_eq!(rejected_key(&settings), Some("server.port"));

        let mut settings = AppConfig::default();
        settings.storage.root = Default::default();
        assert_eq!(rejected_key(&settings), Some("storage.root"));

        let mut settings = AppConfig::default();
        settings.synthesis.seconds_per_char = f64::NAN;
        assert_eq!(rejected_key(&settings), Some("synthesis.seconds_per_char"));
        settings.synthesis.seconds_per_char = -1.0;
        assert_eq!(rejected_key(&settings), Some("synthesis.seconds_per_char"));

        let mut settings = AppConfig::default();
        settings.synthesis.default_sample_rate = 0;
        assert_eq!(rejected_key(&settings), Some("synthesis.default_sample_rate"));
    }

    #[test]
    fn test_file_overrides_defaults() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(
            file,
            "[server]\nport = 9100\ncors_origins = []\n\n[storage]\nroot = \"/tmp/txvoc\""
        )
        .unwrap();

        let settings = load_config_from_path(Some(file.path())).unwrap();
        assert_eq!(settings.server.port, 9100);
        assert_eq!(settings.server.host, "0.0.0.0");
        assert!(settings.server.cors_origins.is_empty());
        assert_eq!(settings.storage.root, std::path::PathBuf::from("/tmp/txvoc"));
        assert_eq!(settings.synthesis.default_sample_rate, 22050);
    }

    #[test]
    fn test_missing_explicit_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("absent.toml");
        assert!(matches!(
            load_config_from_path(Some(&missing)),
            Err(ConfigError::Source(_))
        ));
    }
}
