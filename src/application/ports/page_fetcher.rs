//! Page Fetcher Port - 网页抓取抽象
//!
//! URL 模式下抓取页面原始 HTML，具体实现在 infrastructure/adapters 层

use async_trait::async_trait;
use thiserror::Error;

/// 抓取错误
#[derive(Debug, Error)]
pub enum PageFetchError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Request timeout")]
    Timeout,

    #[error("HTTP status {0}")]
    Status(u16),
}

/// Page Fetcher Port
///
/// 带超时与浏览器 User-Agent 的 HTTP GET；非 2xx 状态视为失败
#[async_trait]
pub trait PageFetcherPort: Send + Sync {
    /// 抓取页面，返回响应体文本
    async fn fetch(&self, url: &str) -> Result<String, PageFetchError>;
}
