//! Lector - 文档朗读服务
//!
//! 上传 PDF / Word 文档，提取文本，经外部 TTS 服务合成语音，
//! 返回在线播放页或可下载的 MP3
//!
//! 领域层 (domain/):
//! - 文本规范化、文档格式分发、音色与响应方式
//!
//! 应用层 (application/):
//! - Ports: 端口定义（TextExtractor, SpeechSynthesizer, TempStore）
//! - Pipeline: 上传到音频的顺序管线
//!
//! 基础设施层 (infrastructure/):
//! - HTTP: Axum 服务器与各端点
//! - Extract: pdf-extract / docx-rs 提取适配器
//! - Speech: reqwest 合成客户端与测试替身
//! - Storage: 临时文件存储与 TTL 清理
//! - View: 页面渲染

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::{load_config, AppConfig};
