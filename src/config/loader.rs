//! Configuration Loader
//!
//! 实现多源配置加载与合并逻辑
//!
//! 优先级（从高到低）：
//! 1. 环境变量
//! 2. 配置文件（config.toml）
//! 3. 默认值

use config::{Config, ConfigError as ConfigCrateError, Environment, File};
use std::path::Path;
use thiserror::Error;

use super::types::AppConfig;

/// 配置加载错误
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to load configuration: {0}")]
    LoadError(String),

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Configuration validation failed: {0}")]
    ValidationError(String),
}

impl From<ConfigCrateError> for ConfigError {
    fn from(err: ConfigCrateError) -> Self {
        ConfigError::LoadError(err.to_string())
    }
}

/// 配置文件搜索路径
const CONFIG_FILE_NAMES: &[&str] = &["config", "config.local"];

/// 加载应用配置
///
/// 按优先级从高到低合并配置：
/// 1. 环境变量（前缀 `PODGEN_`，层级分隔符 `__`）
/// 2. 配置文件（config.toml 或 config.local.toml）
/// 3. 默认值
///
/// # 环境变量示例
/// - `PODGEN_SERVER__PORT=8080`
/// - `PODGEN_LLM__API_KEY=xxxx`
/// - `PODGEN_TTS__URL=http://tts-server:8000`
/// - `PODGEN_STORAGE__AUDIO_DIR=/data/audio`
pub fn load_config() -> Result<AppConfig, ConfigError> {
    load_config_from_path(None)
}

/// 从指定路径加载配置
///
/// # 参数
/// - `config_path` - 可选的配置文件路径，如果为 None 则使用默认搜索路径
pub fn load_config_from_path(config_path: Option<&Path>) -> Result<AppConfig, ConfigError> {
    let mut builder = Config::builder();

    // 1. 首先设置默认值（最低优先级）
    builder = builder
        .set_default("server.host", "0.0.0.0")?
        .set_default("server.port", 5080)?
        .set_default("llm.api_url", "https://generativelanguage.googleapis.com")?
        .set_default("llm.api_key", "")?
        .set_default("llm.model", "gemini-2.0-flash")?
        .set_default("llm.timeout_secs", 60)?
        .set_default("llm.max_content_chars", 4000)?
        .set_default("tts.url", "http://localhost:8000")?
        .set_default("tts.timeout_secs", 60)?
        .set_default("tts.alex_voice", "en-US-GuyNeural")?
        .set_default("tts.sam_voice", "en-US-JennyNeural")?
        .set_default("fetch.timeout_secs", 15)?
        .set_default("storage.audio_dir", "data/audio")?
        .set_default("sweep.enabled", true)?
        .set_default("sweep.interval_secs", 3600)?
        .set_default("sweep.max_age_secs", 86400)?
        .set_default("log.level", "info")?
        .set_default("log.json", false)?;

    // 2. 添加配置文件（如果存在）
    if let Some(path) = config_path {
        builder = builder.add_source(File::from(path).required(true));
    } else {
        // 搜索默认配置文件
        for name in CONFIG_FILE_NAMES {
            builder = builder.add_source(File::with_name(name).required(false));
        }
    }

    // 3. 添加环境变量（最高优先级）
    // 前缀: PODGEN_
    // 层级分隔符: __ (双下划线)
    // 例如: PODGEN_LLM__API_KEY=xxxx
    builder = builder.add_source(
        Environment::with_prefix("PODGEN")
            .prefix_separator("_")
            .separator("__")
            .try_parsing(true),
    );

    // 4. 构建配置
    let config = builder.build()?;

    // 5. 反序列化为 AppConfig
    let app_config: AppConfig = config
        .try_deserialize()
        .map_err(|e| ConfigError::ParseError(format!("Failed to deserialize config: {}", e)))?;

    // 6. 验证配置
    validate_config(&app_config)?;

    Ok(app_config)
}

/// 验证配置有效性
fn validate_config(config: &AppConfig) -> Result<(), ConfigError> {
    if config.server.port == 0 {
        return Err(ConfigError::ValidationError(
            "Server port cannot be 0".to_string(),
        ));
    }

    if config.llm.api_url.is_empty() {
        return Err(ConfigError::ValidationError(
            "LLM API URL cannot be empty".to_string(),
        ));
    }

    if config.llm.model.is_empty() {
        return Err(ConfigError::ValidationError(
            "LLM model cannot be empty".to_string(),
        ));
    }

    if config.llm.max_content_chars == 0 {
        return Err(ConfigError::ValidationError(
            "LLM max_content_chars cannot be 0".to_string(),
        ));
    }

    if config.tts.url.is_empty() {
        return Err(ConfigError::ValidationError(
            "TTS URL cannot be empty".to_string(),
        ));
    }

    if config.tts.alex_voice.is_empty() || config.tts.sam_voice.is_empty() {
        return Err(ConfigError::ValidationError(
            "TTS voices cannot be empty".to_string(),
        ));
    }

    if config.sweep.enabled && config.sweep.interval_secs == 0 {
        return Err(ConfigError::ValidationError(
            "Sweep interval cannot be 0 when sweeping is enabled".to_string(),
        ));
    }

    Ok(())
}

/// 打印配置信息（用于启动时日志，API Key 只打印是否已设置）
pub fn print_config(config: &AppConfig) {
    tracing::info!("=== Application Configuration ===");
    tracing::info!("Server: {}:{}", config.server.host, config.server.port);
    tracing::info!("Public Base URL: {}", config.server.public_base_url());
    tracing::info!("LLM API: {}", config.llm.api_url);
    tracing::info!("LLM Model: {}", config.llm.model);
    tracing::info!(
        "LLM API Key: {}",
        if config.llm.api_key.is_empty() {
            "NOT SET"
        } else {
            "set"
        }
    );
    tracing::info!("LLM Timeout: {}s", config.llm.timeout_secs);
    tracing::info!("Content Prefix Cap: {} chars", config.llm.max_content_chars);
    tracing::info!("TTS URL: {}", config.tts.url);
    tracing::info!("TTS Timeout: {}s", config.tts.timeout_secs);
    tracing::info!(
        "TTS Voices: Alex={}, Sam={}",
        config.tts.alex_voice,
        config.tts.sam_voice
    );
    tracing::info!("Fetch Timeout: {}s", config.fetch.timeout_secs);
    tracing::info!("Audio Directory: {:?}", config.storage.audio_dir);
    tracing::info!("Sweep Enabled: {}", config.sweep.enabled);
    if config.sweep.enabled {
        tracing::info!("Sweep Interval: {}s", config.sweep.interval_secs);
        tracing::info!("Job Max Age: {}s", config.sweep.max_age_secs);
    }
    tracing::info!("Log Level: {}", config.log.level);
    tracing::info!("=================================");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_passes_validation() {
        let config = AppConfig::default();
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn test_validation_error_for_zero_port() {
        let mut config = AppConfig::default();
        config.server.port = 0;
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_validation_error_for_empty_tts_url() {
        let mut config = AppConfig::default();
        config.tts.url = String::new();
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_validation_error_for_empty_model() {
        let mut config = AppConfig::default();
        config.llm.model = String::new();
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_validation_error_for_empty_voice() {
        let mut config = AppConfig::default();
        config.tts.sam_voice = String::new();
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_validation_error_for_zero_sweep_interval() {
        let mut config = AppConfig::default();
        config.sweep.interval_secs = 0;
        assert!(validate_config(&config).is_err());
    }
}
