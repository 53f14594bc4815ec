//! 配置模块
//!
//! - types: 配置结构体定义
//! - loader: 多源加载与验证

pub mod loader;
pub mod types;

pub use loader::{load_config, load_config_from_path, print_config, ConfigError};
pub use types::{AppConfig, LogConfig, ReaperConfig, ServerConfig, SpeechConfig, StorageConfig};
