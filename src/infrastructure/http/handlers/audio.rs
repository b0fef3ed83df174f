//! Audio Handlers - 播放与下载端点
//!
//! 两个端点返回同一份最终产物：播放端点内联（浏览器 <audio> 引用），
//! 下载端点带固定建议文件名强制下载。最终产物按任务 ID 定位。

use axum::{
    body::Body,
    extract::{Path, State},
    http::{header, StatusCode},
    response::Response,
};
use std::sync::Arc;
use tokio_util::io::ReaderStream;
use uuid::Uuid;

use crate::domain::{AUDIO_MIME, DOWNLOAD_FILENAME};
use crate::infrastructure::http::error::ApiError;
use crate::infrastructure::http::state::AppState;

/// 打开任务的最终产物文件
async fn open_final(
    state: &AppState,
    job_id: Uuid,
) -> Result<(tokio::fs::File, u64), ApiError> {
    let path = state.storage.final_path(job_id);

    let file = tokio::fs::File::open(&path)
        .await
        .map_err(|_| ApiError::NotFound(format!("no audio for job {}", job_id)))?;

    let size = file
        .metadata()
        .await
        .map_err(|e| ApiError::Internal(e.to_string()))?
        .len();

    Ok((file, size))
}

fn stream_response(
    file: tokio::fs::File,
    size: u64,
    disposition: Option<&str>,
) -> Result<Response, ApiError> {
    let mut builder = Response::builder()
        .status(StatusCode::OK)
        .header(header::CONTENT_TYPE, AUDIO_MIME)
        .header(header::CONTENT_LENGTH, size);

    if let Some(disposition) = disposition {
        builder = builder.header(header::CONTENT_DISPOSITION, disposition);
    }

    builder
        .body(Body::from_stream(ReaderStream::new(file)))
        .map_err(|e| ApiError::Internal(e.to_string()))
}

/// GET /audio/{job_id} - 内联播放
pub async fn play_audio(
    State(state): State<Arc<AppState>>,
    Path(job_id): Path<Uuid>,
) -> Result<Response, ApiError> {
    let (file, size) = open_final(&state, job_id).await?;
    stream_response(file, size, None)
}

/// GET /download/{job_id} - 强制下载，固定建议文件名
pub async fn download_audio(
    State(state): State<Arc<AppState>>,
    Path(job_id): Path<Uuid>,
) -> Result<Response, ApiError> {
    let (file, size) = open_final(&state, job_id).await?;
    let disposition = format!("attachment; filename=\"{}\"", DOWNLOAD_FILENAME);
    stream_response(file, size, Some(&disposition))
}
