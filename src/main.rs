//! Lector - 文档朗读服务
//!
//! 上传 PDF / Word，提取文本并调用外部 TTS 服务合成语音，
//! 在线播放或下载 MP3

use std::sync::Arc;
use std::time::Duration;

use lector::config::{load_config, print_config};
use lector::infrastructure::http::{AppState, HttpServer, ServerConfig};
use lector::infrastructure::speech::{SpeechHttpClient, SpeechHttpClientConfig};
use lector::infrastructure::storage::{spawn_reaper, ReaperPolicy, TempFileStore};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 加载配置（优先级：环境变量 > 配置文件 > 默认值）
    let config = load_config().map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))?;

    // 初始化日志
    let log_filter = format!(
        "{},lector={},tower_http=debug",
        config.log.level, config.log.level
    );
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&log_filter)),
        )
        .init();

    tracing::info!("Lector - 文档朗读服务");
    print_config(&config);

    // 临时文件存储（上传文档 + 生成音频）
    let store = Arc::new(TempFileStore::new(&config.storage.scratch_dir).await?);

    // 后台清理：按 TTL 回收生成的音频
    if config.reaper.enabled {
        spawn_reaper(
            store.clone(),
            ReaperPolicy {
                interval: Duration::from_secs(config.reaper.interval_secs),
                ttl: Duration::from_secs(config.reaper.ttl_secs),
            },
        );
    }

    // 外部语音合成客户端
    let speech_config = SpeechHttpClientConfig::new(config.speech.url.clone())
        .with_timeout(config.speech.timeout_secs);
    let synthesizer = Arc::new(SpeechHttpClient::new(speech_config)?);

    // 创建 HTTP 服务器
    let server_config = ServerConfig {
        host: config.server.host.clone(),
        port: config.server.port,
        max_upload_size: config.server.max_upload_size,
    };
    let state = AppState::new(store, synthesizer);
    let server = HttpServer::new(server_config, state);

    tracing::info!("Starting HTTP server...");

    // 启动服务器（带优雅关闭）
    server
        .run_with_shutdown(async {
            tokio::signal::ctrl_c()
                .await
                .expect("Failed to listen for ctrl-c");
            tracing::info!("Received shutdown signal");
        })
        .await?;

    tracing::info!("Server shutdown complete");

    Ok(())
}
