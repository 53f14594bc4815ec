//! 应用层错误定义
//!
//! 管线各阶段的统一错误类型。
//! 所有取值最终都转换为面向用户的带内文本响应（见 infrastructure/http/error.rs），
//! 库内部失败（提取/合成）在边界处被包装，不向客户端泄露服务器故障

use thiserror::Error;

use crate::application::ports::{ExtractError, SpeechError, StorageError};

/// 管线错误
#[derive(Debug, Error)]
pub enum PipelineError {
    /// 上传中没有文件字段或文件为空
    #[error("No file was provided in the upload")]
    NoFileProvided,

    /// 扩展名不是 .pdf / .docx
    #[error("Unsupported document format: {0}")]
    UnsupportedFormat(String),

    /// 解析库失败（损坏文件等）
    #[error("Text extraction failed: {0}")]
    ExtractionFailed(String),

    /// 规范化后文本不足最小可朗读长度
    #[error("Document contains no recognizable text")]
    EmptyText,

    /// 外部合成服务失败
    #[error("Speech synthesis failed: {0}")]
    SynthesisFailed(String),

    /// 临时文件读写失败
    #[error("Storage error: {0}")]
    Storage(String),
}

impl From<ExtractError> for PipelineError {
    fn from(err: ExtractError) -> Self {
        Self::ExtractionFailed(err.to_string())
    }
}

impl From<SpeechError> for PipelineError {
    fn from(err: SpeechError) -> Self {
        Self::SynthesisFailed(err.to_string())
    }
}

impl From<StorageError> for PipelineError {
    fn from(err: StorageError) -> Self {
        Self::Storage(err.to_string())
    }
}
