//! HTTP Error Handling
//!
//! 音频端点使用的 API 错误。表单端点不走这里：流水线失败在
//! handler 里直接渲染成错误页面。

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

/// API 错误
#[derive(Debug)]
pub enum ApiError {
    NotFound(String),
    Internal(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::NotFound(msg) => {
                tracing::warn!(error = %msg, "Resource not found");
                (StatusCode::NOT_FOUND, "Not Found").into_response()
            }
            ApiError::Internal(msg) => {
                tracing::error!(error = %msg, "Internal server error");
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error").into_response()
            }
        }
    }
}
