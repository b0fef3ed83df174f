//! Content Acquirer - 内容获取
//!
//! 把粘贴文本或 URL 统一变成一段校验过的纯文本。
//! 所有校验都发生在调用语言模型之前，无效输入不消耗任何外部配额。

use std::sync::Arc;

use crate::application::error::PipelineError;
use crate::application::ports::{ContentExtractorPort, PageFetcherPort};
use crate::domain::{AcquireMode, ContentError, SourceContent};

/// 内容获取服务
pub struct ContentAcquirer {
    fetcher: Arc<dyn PageFetcherPort>,
    extractor: Arc<dyn ContentExtractorPort>,
}

impl ContentAcquirer {
    pub fn new(fetcher: Arc<dyn PageFetcherPort>, extractor: Arc<dyn ContentExtractorPort>) -> Self {
        Self { fetcher, extractor }
    }

    /// 获取输入内容
    ///
    /// - 粘贴模式：去空白、非空校验、最短长度校验（50 字符，含边界）
    /// - URL 模式：抓取 → 正文提取 → 与粘贴模式相同的长度校验
    pub async fn acquire(&self, mode: &AcquireMode) -> Result<SourceContent, PipelineError> {
        match mode {
            AcquireMode::Pasted { text } => {
                SourceContent::from_pasted(text).map_err(|e| match e {
                    ContentError::Empty => PipelineError::EmptyInput,
                    ContentError::TooShort => PipelineError::too_short(),
                })
            }
            AcquireMode::Url { url } => {
                let html = self
                    .fetcher
                    .fetch(url)
                    .await
                    .map_err(|e| PipelineError::FetchError(e.to_string()))?;

                tracing::debug!(url = %url, html_len = html.len(), "Page fetched");

                let text = self
                    .extractor
                    .extract(&html)
                    .ok_or(PipelineError::ExtractionFailed)?;

                SourceContent::from_extracted(url, &text).map_err(|e| match e {
                    // 提取结果为空等价于没提取到正文
                    ContentError::Empty => PipelineError::ExtractionFailed,
                    ContentError::TooShort => PipelineError::too_short(),
                })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;

    use crate::application::ports::PageFetchError;

    struct StubFetcher {
        result: Result<String, u16>,
    }

    #[async_trait]
    impl PageFetcherPort for StubFetcher {
        async fn fetch(&self, _url: &str) -> Result<String, PageFetchError> {
            match &self.result {
                Ok(html) => Ok(html.clone()),
                Err(status) => Err(PageFetchError::Status(*status)),
            }
        }
    }

    struct PassthroughExtractor;

    impl ContentExtractorPort for PassthroughExtractor {
        fn extract(&self, html: &str) -> Option<String> {
            if html.is_empty() {
                None
            } else {
                Some(html.to_string())
            }
        }
    }

    fn acquirer(fetch_result: Result<String, u16>) -> ContentAcquirer {
        ContentAcquirer::new(
            Arc::new(StubFetcher {
                result: fetch_result,
            }),
            Arc::new(PassthroughExtractor),
        )
    }

    #[tokio::test]
    async fn test_pasted_text_passes_validation() {
        let acquirer = acquirer(Ok(String::new()));
        let mode = AcquireMode::Pasted {
            text: "x".repeat(50),
        };
        assert!(acquirer.acquire(&mode).await.is_ok());
    }

    #[tokio::test]
    async fn test_pasted_empty_maps_to_empty_input() {
        let acquirer = acquirer(Ok(String::new()));
        let mode = AcquireMode::Pasted {
            text: "  ".to_string(),
        };
        assert!(matches!(
            acquirer.acquire(&mode).await,
            Err(PipelineError::EmptyInput)
        ));
    }

    #[tokio::test]
    async fn test_non_success_status_maps_to_fetch_error() {
        let acquirer = acquirer(Err(404));
        let mode = AcquireMode::Url {
            url: "https://example.com/missing".to_string(),
        };
        assert!(matches!(
            acquirer.acquire(&mode).await,
            Err(PipelineError::FetchError(_))
        ));
    }

    #[tokio::test]
    async fn test_contentless_page_maps_to_extraction_failed() {
        let acquirer = acquirer(Ok(String::new()));
        let mode = AcquireMode::Url {
            url: "https://example.com".to_string(),
        };
        assert!(matches!(
            acquirer.acquire(&mode).await,
            Err(PipelineError::ExtractionFailed)
        ));
    }

    #[tokio::test]
    async fn test_short_extracted_text_maps_to_too_short() {
        let acquirer = acquirer(Ok("tiny article".to_string()));
        let mode = AcquireMode::Url {
            url: "https://example.com".to_string(),
        };
        assert!(matches!(
            acquirer.acquire(&mode).await,
            Err(PipelineError::TooShort { .. })
        ));
    }
}
