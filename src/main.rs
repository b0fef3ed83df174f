//! Podgen - 文本转播客生成服务
//!
//! 架构:
//! - Domain: script/, source/, audio/ 纯逻辑
//! - Application: ports + 流水线编排
//! - Infrastructure: http, adapters (Gemini / TTS / 抓取 / 提取 / 存储)

use std::sync::Arc;
use std::time::Duration;

use podgen::application::{
    AudioStoragePort, ContentAcquirer, GeneratorConfig, PodcastPipeline, ScriptGenerator,
    SpeechSynthesizer, VoiceMap,
};
use podgen::config::{load_config, print_config};
use podgen::infrastructure::adapters::{
    FileAudioStorage, GeminiClient, GeminiClientConfig, HttpPageFetcher, HttpPageFetcherConfig,
    HttpTtsClient, HttpTtsClientConfig, ScraperExtractor,
};
// use podgen::infrastructure::adapters::{FakeLlmClient, FakeLlmClientConfig};
use podgen::infrastructure::http::{AppState, HttpServer, ServerConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 加载配置（优先级：环境变量 > 配置文件 > 默认值）
    let config = load_config().map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))?;

    // 初始化日志
    let log_filter = format!(
        "{},podgen={},tower_http=debug",
        config.log.level, config.log.level
    );
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&log_filter)),
        )
        .init();

    tracing::info!("Podgen - 文本转播客生成服务");
    print_config(&config);

    if config.llm.api_key.is_empty() {
        tracing::warn!("LLM API key is not set; script generation will fail (PODGEN_LLM__API_KEY)");
    }

    // 确保数据目录存在
    tokio::fs::create_dir_all(&config.storage.audio_dir).await?;

    // 音频存储
    let storage = Arc::new(FileAudioStorage::new(&config.storage.audio_dir).await?);

    // Gemini 客户端
    let llm = Arc::new(GeminiClient::new(GeminiClientConfig {
        api_url: config.llm.api_url.clone(),
        api_key: config.llm.api_key.clone(),
        model: config.llm.model.clone(),
        timeout_secs: config.llm.timeout_secs,
    })?);

    // TTS 客户端
    let tts = Arc::new(HttpTtsClient::new(
        HttpTtsClientConfig::new(&config.tts.url).with_timeout(config.tts.timeout_secs),
    )?);

    // 网页抓取与正文提取
    let fetcher = Arc::new(HttpPageFetcher::new(HttpPageFetcherConfig {
        timeout_secs: config.fetch.timeout_secs,
        user_agent: config.fetch.user_agent.clone(),
    })?);
    let extractor = Arc::new(ScraperExtractor::new());

    // 组装流水线
    let pipeline = PodcastPipeline::new(
        ContentAcquirer::new(fetcher, extractor),
        ScriptGenerator::new(
            llm,
            GeneratorConfig {
                max_content_chars: config.llm.max_content_chars,
            },
        ),
        SpeechSynthesizer::new(
            tts,
            storage.clone(),
            VoiceMap {
                alex: config.tts.alex_voice.clone(),
                sam: config.tts.sam_voice.clone(),
            },
        ),
        storage.clone(),
    );

    // 定时清理过期任务目录
    if config.sweep.enabled {
        let sweep_storage = storage.clone();
        let interval = Duration::from_secs(config.sweep.interval_secs);
        let max_age = Duration::from_secs(config.sweep.max_age_secs);

        tokio::spawn(async move {
            let mut ticker = tokio::time::interval(interval);
            loop {
                ticker.tick().await;
                if let Err(e) = sweep_storage.sweep_stale(max_age).await {
                    tracing::warn!(error = %e, "Stale job sweep failed");
                }
            }
        });
    }

    // 创建 HTTP 服务器
    let server_config = ServerConfig::new(&config.server.host, config.server.port);
    let state = AppState::new(pipeline, storage);
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
