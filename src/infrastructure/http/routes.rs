//! HTTP Routes
//!
//! API Endpoints:
//! - /                  GET   上传表单页
//! - /upload            POST  执行朗读管线（multipart: file, voice, action）
//! - /audio/{filename}  GET   返回生成的音频
//! - /ping              GET   健康检查

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers;
use super::state::AppState;

/// 创建所有路由
pub fn create_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/", get(handlers::index))
        .route("/upload", post(handlers::upload_document))
        .route("/audio/:filename", get(handlers::serve_audio))
        .route("/ping", get(handlers::ping))
}
