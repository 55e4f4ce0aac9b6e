//! TxVoc - 音色上传与语音合成服务
//!
//! - Domain: voice/, synthesis/
//! - Application: commands, queries, ports
//! - Infrastructure: http, memory, adapters

use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use txvoc::application::{SeedDefaultVoice, VoiceRepositoryPort};
use txvoc::config::{load_config, print_config, LogConfig};
use txvoc::infrastructure::adapters::{FileAudioStorage, PlaceholderTtsConfig, PlaceholderTtsEngine};
use txvoc::infrastructure::http::{AppState, HttpServer, ServerConfig};
use txvoc::infrastructure::memory::{InMemorySynthesisRepository, InMemoryVoiceRepository};

fn init_tracing(config: &LogConfig) {
    let log_filter = format!("{},txvoc={},tower_http=debug", config.level, config.level);
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&log_filter));

    if config.json {
        tracing_subscriber::fmt().json().with_env_filter(filter).init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 加载配置（优先级：环境变量 > 配置文件 > 默认值）
    let config = load_config().map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))?;

    init_tracing(&config.log);

    tracing::info!("TxVoc - 音色上传与语音合成服务");
    print_config(&config);

    // 创建存储目录 voices/ audio/ temp/
    let storage = Arc::new(FileAudioStorage::new(&config.storage.root).await?);
    tracing::info!(root = %storage.root().display(), "Storage initialized");

    // 内存表
    let voice_repo = InMemoryVoiceRepository::new().arc();
    let synthesis_repo = InMemorySynthesisRepository::new().arc();

    let tts_engine = Arc::new(PlaceholderTtsEngine::new(PlaceholderTtsConfig {
        seconds_per_char: config.synthesis.seconds_per_char,
    }));

    let state = Arc::new(AppState::new(
        voice_repo.clone(),
        synthesis_repo,
        storage,
        tts_engine,
        &config,
    ));

    state
        .seed_default_voice_handler
        .handle(SeedDefaultVoice)
        .await?;
    tracing::info!(
        voice_count = voice_repo.count().await?,
        "Voice table initialized"
    );

    let server = HttpServer::new(ServerConfig::from_app_config(&config), state);

    // 启动服务器（带优雅关闭）
    server
        .run_with_shutdown(async {
            if let Err(e) = tokio::signal::ctrl_c().await {
                tracing::error!(error = %e, "Failed to listen for ctrl-c");
                std::future::pending::<()>().await;
            }
            tracing::info!("Received shutdown signal");
        })
        .await?;

    tracing::info!("Server shutdown complete, in-memory tables discarded");

    Ok(())
}
