//! Speech Synthesizer Port - 语音合成服务抽象
//!
//! 定义外部 TTS 服务的抽象接口，具体实现在 infrastructure/speech 层

use std::path::Path;

use async_trait::async_trait;
use thiserror::Error;

/// 合成错误
#[derive(Debug, Error)]
pub enum SpeechError {
    #[error("Network error: {0}")]
    NetworkError(String),

    #[error("Request timeout")]
    Timeout,

    #[error("Service error: {0}")]
    ServiceError(String),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("I/O error: {0}")]
    Io(String),
}

/// 合成请求
#[derive(Debug, Clone)]
pub struct SynthesisRequest {
    /// 要合成的文本（已规范化）
    pub text: String,
    /// 音色标识（不透明字符串，原样透传给服务）
    pub voice: String,
}

/// Speech Synthesizer Port
///
/// 一次请求一次合成，无批处理、无流式输出。
/// 成功时结果 MP3 已完整写入 `output` 指定的路径
#[async_trait]
pub trait SpeechSynthesizerPort: Send + Sync {
    /// 合成语音并写入目标文件
    async fn synthesize(
        &self,
        request: &SynthesisRequest,
        output: &Path,
    ) -> Result<(), SpeechError>;

    /// 检查合成服务是否可用
    async fn health_check(&self) -> bool {
        true // 默认实现
    }
}
