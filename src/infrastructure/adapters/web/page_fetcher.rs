//! HTTP Page Fetcher - 抓取用户提交的 URL
//!
//! 实现 PageFetcherPort trait。带超时的 GET，使用浏览器 User-Agent
//! （不少站点会直接拒绝默认的程序化 UA）

use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;

use crate::application::ports::{PageFetchError, PageFetcherPort};

/// 页面抓取配置
#[derive(Debug, Clone)]
pub struct HttpPageFetcherConfig {
    /// 请求超时时间（秒）
    pub timeout_secs: u64,
    /// 请求使用的 User-Agent
    pub user_agent: String,
}

impl Default for HttpPageFetcherConfig {
    fn default() -> Self {
        Self {
            timeout_secs: 15,
            user_agent: "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0 Safari/537.36".to_string(),
        }
    }
}

/// HTTP 页面抓取器
pub struct HttpPageFetcher {
    client: Client,
}

impl HttpPageFetcher {
    /// 创建新的页面抓取器
    pub fn new(config: HttpPageFetcherConfig) -> Result<Self, PageFetchError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(&config.user_agent)
            .build()
            .map_err(|e| PageFetchError::Network(e.to_string()))?;

        Ok(Self { client })
    }
}

#[async_trait]
impl PageFetcherPort for HttpPageFetcher {
    async fn fetch(&self, url: &str) -> Result<String, PageFetchError> {
        tracing::debug!(url = %url, "Fetching page");

        let response = self.client.get(url).send().await.map_err(|e| {
            if e.is_timeout() {
                PageFetchError::Timeout
            } else {
                PageFetchError::Network(e.to_string())
            }
        })?;

        let status = response.status();
        if !status.is_success() {
            return Err(PageFetchError::Status(status.as_u16()));
        }

        let body = response
            .text()
            .await
            .map_err(|e| PageFetchError::Network(e.to_string()))?;

        tracing::debug!(url = %url, body_len = body.len(), "Page fetched");

        Ok(body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = HttpPageFetcherConfig::default();
        assert_eq!(config.timeout_secs, 15);
        assert!(config.user_agent.starts_with("Mozilla/5.0"));
    }

    #[test]
    fn test_fetcher_builds_with_default_config() {
        assert!(HttpPageFetcher::new(HttpPageFetcherConfig::default()).is_ok());
    }
}
