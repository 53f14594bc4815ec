//! HTTP 基础设施
//!
//! - server: Axum 服务器
//! - routes: 路由表
//! - state: 应用状态
//! - handlers: 各端点处理器
//! - error: 管线错误到带内响应的转换

pub mod error;
pub mod handlers;
pub mod routes;
pub mod server;
pub mod state;

pub use routes::create_routes;
pub use server::{HttpServer, ServerConfig};
pub use state::AppState;
