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
/// 1. 环境变量（前缀 `LECTOR_`，层级分隔符 `__`）
/// 2. 配置文件（config.toml 或 config.local.toml）
/// 3. 默认值
///
/// # 环境变量示例
/// - `LECTOR_SERVER__PORT=8080`
/// - `LECTOR_SPEECH__URL=http://tts-server:8000`
/// - `LECTOR_STORAGE__SCRATCH_DIR=/var/lib/lector/scratch`
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
        .set_default("server.port", 5000)?
        .set_default("server.max_upload_size", 0)?
        .set_default("speech.url", "http://localhost:8000")?
        .set_default("speech.timeout_secs", 120)?
        .set_default("storage.scratch_dir", "data/scratch")?
        .set_default("reaper.enabled", true)?
        .set_default("reaper.interval_secs", 600)?
        .set_default("reaper.ttl_secs", 3600)?
        .set_default("log.level", "info")?;

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
    // 前缀: LECTOR_
    // 层级分隔符: __ (双下划线)
    // 例如: LECTOR_SPEECH__URL=http://tts-server:8000
    builder = builder.add_source(
        Environment::with_prefix("LECTOR")
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

    if config.speech.url.is_empty() {
        return Err(ConfigError::ValidationError(
            "Speech service URL cannot be empty".to_string(),
        ));
    }

    if config.storage.scratch_dir.as_os_str().is_empty() {
        return Err(ConfigError::ValidationError(
            "Scratch directory cannot be empty".to_string(),
        ));
    }

    if config.reaper.enabled && config.reaper.interval_secs == 0 {
        return Err(ConfigError::ValidationError(
            "Reaper interval cannot be 0 when the reaper is enabled".to_string(),
        ));
    }

    Ok(())
}

/// 打印配置信息（用于启动时日志）
pub fn print_config(config: &AppConfig) {
    tracing::info!("=== Application Configuration ===");
    tracing::info!("Server: {}", config.server.addr());
    tracing::info!(
        "Max Upload Size: {}",
        if config.server.max_upload_size == 0 {
            "unlimited".to_string()
        } else {
            format!("{} bytes", config.server.max_upload_size)
        }
    );
    tracing::info!("Speech URL: {}", config.speech.url);
    tracing::info!("Speech Timeout: {}s", config.speech.timeout_secs);
    tracing::info!("Scratch Directory: {:?}", config.storage.scratch_dir);
    tracing::info!("Reaper Enabled: {}", config.reaper.enabled);
    if config.reaper.enabled {
        tracing::info!("Reaper Interval: {}s", config.reaper.interval_secs);
        tracing::info!("Audio TTL: {}s", config.reaper.ttl_secs);
    }
    tracing::info!("Log Level: {}", config.log.level);
    tracing::info!("=================================");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_passes_for_valid_config() {
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
    fn test_validation_error_for_empty_speech_url() {
        let mut config = AppConfig::default();
        config.speech.url = String::new();
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_validation_error_for_zero_reaper_interval() {
        let mut config = AppConfig::default();
        config.reaper.interval_secs = 0;
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_disabled_reaper_allows_zero_interval() {
        let mut config = AppConfig::default();
        config.reaper.enabled = false;
        config.reaper.interval_secs = 0;
        assert!(validate_config(&config).is_ok());
    }
}
