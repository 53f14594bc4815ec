//! Upload Handler - 朗读管线入口
//!
//! 接收 multipart 上传（file / voice / action 字段），执行管线，
//! 按 action 返回播放页或 MP3 附件

use std::path::Path;
use std::sync::Arc;

use axum::{
    body::Body,
    extract::{Multipart, State},
    http::{header, StatusCode},
    response::{Html, IntoResponse, Response},
};
use tokio_util::io::ReaderStream;

use crate::application::{PipelineError, ReadAloudCommand};
use crate::domain::{ActionChoice, DEFAULT_VOICE};
use crate::infrastructure::http::error::Reject;
use crate::infrastructure::http::state::AppState;
use crate::infrastructure::view;

/// 处理上传并合成
pub async fn upload_document(
    State(state): State<Arc<AppState>>,
    mut multipart: Multipart,
) -> Response {
    let mut filename: Option<String> = None;
    let mut bytes: Option<Vec<u8>> = None;
    let mut voice: Option<String> = None;
    let mut action = ActionChoice::default();

    loop {
        let field = match multipart.next_field().await {
            Ok(Some(field)) => field,
            Ok(None) => break,
            Err(e) => {
                tracing::warn!(error = %e, "Failed to read multipart field");
                return Reject(PipelineError::NoFileProvided).into_response();
            }
        };

        let field_name = field.name().unwrap_or_default().to_string();
        match field_name.as_str() {
            "file" => {
                filename = field.file_name().map(|s| s.to_string());
                match field.bytes().await {
                    Ok(data) => bytes = Some(data.to_vec()),
                    Err(e) => {
                        tracing::warn!(error = %e, "Failed to read uploaded file");
                        return Reject(PipelineError::NoFileProvided).into_response();
                    }
                }
            }
            "voice" => {
                voice = field.text().await.ok();
            }
            "action" => {
                if let Ok(value) = field.text().await {
                    action = ActionChoice::parse(&value);
                }
            }
            _ => {}
        }
    }

    let Some(bytes) = bytes.filter(|b| !b.is_empty()) else {
        return Reject(PipelineError::NoFileProvided).into_response();
    };

    let command = ReadAloudCommand {
        filename: filename.unwrap_or_default(),
        bytes,
        voice: voice
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| DEFAULT_VOICE.to_string()),
    };

    let speech = match state.read_aloud_handler.handle(command).await {
        Ok(speech) => speech,
        Err(e) => return Reject(e).into_response(),
    };

    match action {
        ActionChoice::Play => Html(view::render_player_page(&speech.audio_name)).into_response(),
        ActionChoice::Download => serve_attachment(&speech.audio_path).await,
    }
}

/// 以附件形式返回生成的 MP3，附件名固定（本地化文件名）
async fn serve_attachment(path: &Path) -> Response {
    let file = match tokio::fs::File::open(path).await {
        Ok(file) => file,
        Err(e) => {
            return Reject(PipelineError::Storage(format!(
                "Failed to open synthesized audio: {}",
                e
            )))
            .into_response()
        }
    };

    let file_size = match file.metadata().await {
        Ok(metadata) => metadata.len(),
        Err(e) => {
            return Reject(PipelineError::Storage(format!(
                "Failed to stat synthesized audio: {}",
                e
            )))
            .into_response()
        }
    };

    let stream = ReaderStream::new(file);

    Response::builder()
        .status(StatusCode::OK)
        .header(header::CONTENT_TYPE, "audio/mpeg")
        .header(header::CONTENT_LENGTH, file_size)
        .header(
            header::CONTENT_DISPOSITION,
            attachment_disposition(view::DOWNLOAD_FILENAME),
        )
        .body(Body::from_stream(stream))
        .unwrap()
}

/// 构造附件的 Content-Disposition
///
/// 附件名含西里尔字符，header 值必须是 ASCII：
/// 按 RFC 5987 以 filename* 传 UTF-8 名，另给 ASCII 回退名
fn attachment_disposition(utf8_name: &str) -> String {
    format!(
        "attachment; filename=\"speech.mp3\"; filename*=UTF-8''{}",
        rfc5987_encode(utf8_name)
    )
}

fn rfc5987_encode(value: &str) -> String {
    let mut encoded = String::with_capacity(value.len() * 3);
    for byte in value.bytes() {
        match byte {
            b'a'..=b'z' | b'A'..=b'Z' | b'0'..=b'9' | b'-' | b'.' | b'_' | b'~' => {
                encoded.push(byte as char)
            }
            _ => {
                encoded.push('%');
                encoded.push_str(&format!("{:02X}", byte));
            }
        }
    }
    encoded
}
