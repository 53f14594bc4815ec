//! Audio Handler - 按名返回生成的音频
//!
//! 路径里的文件名来自客户端，是信任边界：
//! 必须先通过生成规则校验（UUID + .mp3）才会触碰文件系统，
//! 校验失败与文件缺失一样返回 404

use std::sync::Arc;

use axum::{
    body::Body,
    extract::{Path, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};
use tokio_util::io::ReaderStream;

use crate::application::ports::temp_store::TempStorePort;
use crate::infrastructure::http::error::MSG_AUDIO_NOT_FOUND;
use crate::infrastructure::http::state::AppState;

/// GET /audio/{filename}
pub async fn serve_audio(
    State(state): State<Arc<AppState>>,
    Path(filename): Path<String>,
) -> Response {
    let Some(path) = state.store.resolve_audio(&filename) else {
        tracing::warn!(filename = %filename, "Rejected audio name");
        return audio_not_found();
    };

    let file = match tokio::fs::File::open(&path).await {
        Ok(file) => file,
        Err(_) => {
            tracing::warn!(filename = %filename, "Audio file not found");
            return audio_not_found();
        }
    };

    let file_size = match file.metadata().await {
        Ok(metadata) => metadata.len(),
        Err(_) => return audio_not_found(),
    };

    let stream = ReaderStream::new(file);

    Response::builder()
        .status(StatusCode::OK)
        .header(header::CONTENT_TYPE, "audio/mpeg")
        .header(header::CONTENT_LENGTH, file_size)
        .body(Body::from_stream(stream))
        .unwrap()
}

fn audio_not_found() -> Response {
    (StatusCode::NOT_FOUND, MSG_AUDIO_NOT_FOUND).into_response()
}
