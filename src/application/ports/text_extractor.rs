//! Text Extractor Port - 文档文本提取抽象
//!
//! 每种文档格式一个实现，具体实现在 infrastructure/extract 层。
//! 提取是阻塞操作（底层解析库为同步实现），
//! 由调用方负责放到阻塞线程池上执行

use std::path::Path;

use thiserror::Error;

use crate::domain::DocumentFormat;

/// 提取错误
#[derive(Debug, Error)]
pub enum ExtractError {
    /// 解析库内部失败（损坏的文件、不支持的编码等）
    #[error("Failed to parse document: {0}")]
    ParseFailed(String),

    #[error("I/O error: {0}")]
    Io(String),
}

impl From<std::io::Error> for ExtractError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

/// Text Extractor Port
///
/// 给定落盘后的文档路径，返回按文档顺序拼接的纯文本。
/// 约定：只拼接非空片段（页/段落），片段之间以单个空格分隔；
/// 不提取图片、表格和嵌入对象
pub trait TextExtractorPort: Send + Sync {
    /// 本提取器负责的格式
    fn format(&self) -> DocumentFormat;

    /// 提取文档全文
    fn extract(&self, path: &Path) -> Result<String, ExtractError>;
}
