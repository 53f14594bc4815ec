//! Page Handlers
//!
//! 上传表单首页

use axum::response::Html;

use crate::infrastructure::view;

/// 首页 - 上传表单
pub async fn index() -> Html<String> {
    Html(view::render_index_page())
}
