//! HTTP 错误响应
//!
//! 管线错误统一转换为带内文本响应：预期内的拒绝（无文件、
//! 格式不支持、文本为空）和库内部失败（提取、合成）都以
//! HTTP 200 加说明文案返回，不向客户端暴露服务器故障；
//! 只有音频不存在返回 404。文案为产品侧俄语文本

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::application::PipelineError;

/// 上传中没有文件
pub const MSG_NO_FILE: &str = "Файл не выбран!";

/// 格式不支持
pub const MSG_UNSUPPORTED: &str = "Я умею читать только PDF и Word 😅";

/// 文本为空或无法识别
pub const MSG_EMPTY_TEXT: &str = "Файл пустой или текст не распознан 😢";

/// 文档解析失败
pub const MSG_EXTRACTION_FAILED: &str = "Не получилось прочитать файл 😢 Попробуй другой документ.";

/// 合成服务失败
pub const MSG_SYNTHESIS_FAILED: &str = "Не получилось озвучить текст 😢 Попробуй ещё раз позже.";

/// 服务器内部问题
pub const MSG_SERVER_TROUBLE: &str = "Что-то пошло не так 😢 Попробуй ещё раз.";

/// 音频不存在
pub const MSG_AUDIO_NOT_FOUND: &str = "Аудиофайл не найден";

/// 管线错误的 HTTP 包装
#[derive(Debug)]
pub struct Reject(pub PipelineError);

impl IntoResponse for Reject {
    fn into_response(self) -> Response {
        let message = match &self.0 {
            PipelineError::NoFileProvided => {
                tracing::warn!("Upload without a file");
                MSG_NO_FILE
            }
            PipelineError::UnsupportedFormat(filename) => {
                tracing::warn!(filename = %filename, "Unsupported document format");
                MSG_UNSUPPORTED
            }
            PipelineError::EmptyText => {
                tracing::warn!("Document yielded no speakable text");
                MSG_EMPTY_TEXT
            }
            PipelineError::ExtractionFailed(cause) => {
                tracing::error!(cause = %cause, "Text extraction failed");
                MSG_EXTRACTION_FAILED
            }
            PipelineError::SynthesisFailed(cause) => {
                tracing::error!(cause = %cause, "Speech synthesis failed");
                MSG_SYNTHESIS_FAILED
            }
            PipelineError::Storage(cause) => {
                tracing::error!(cause = %cause, "Scratch storage failure");
                MSG_SERVER_TROUBLE
            }
        };

        (StatusCode::OK, message).into_response()
    }
}

impl From<PipelineError> for Reject {
    fn from(err: PipelineError) -> Self {
        Self(err)
    }
}
