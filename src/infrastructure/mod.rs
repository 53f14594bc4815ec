//! 基础设施层
//!
//! - http: Axum 服务器、路由与处理器
//! - extract: PDF / DOCX 文本提取适配器
//! - speech: 外部语音合成客户端（生产 + 测试替身）
//! - storage: 临时文件存储与清理任务
//! - view: 页面渲染

pub mod extract;
pub mod http;
pub mod speech;
pub mod storage;
pub mod view;
