//! HTTP Routes
//!
//! API 路由定义
//!
//! Endpoints:
//! - /                    GET   渲染提交表单
//! - /                    POST  运行流水线，渲染结果或错误页
//! - /audio/{job_id}      GET   内联播放（audio/mpeg）
//! - /download/{job_id}   GET   强制下载（固定建议文件名）
//! - /api/ping            GET   健康检查

use axum::{routing::get, Router};
use std::sync::Arc;

use super::handlers;
use super::state::AppState;

/// 创建所有路由
pub fn create_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route(
            "/",
            get(handlers::show_form).post(handlers::generate_podcast),
        )
        .route("/audio/:job_id", get(handlers::play_audio))
        .route("/download/:job_id", get(handlers::download_audio))
        .route("/api/ping", get(handlers::ping))
}
