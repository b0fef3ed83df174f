//! Application State
//!
//! HTTP 层共享的应用状态：流水线与音频存储端口

use std::sync::Arc;

use crate::application::{AudioStoragePort, PodcastPipeline};

/// 应用状态
pub struct AppState {
    /// 播客生成流水线
    pub pipeline: PodcastPipeline,
    /// 音频存储（播放/下载端点直接读取最终产物）
    pub storage: Arc<dyn AudioStoragePort>,
}

impl AppState {
    /// 创建应用状态
    pub fn new(pipeline: PodcastPipeline, storage: Arc<dyn AudioStoragePort>) -> Self {
        Self { pipeline, storage }
    }
}
