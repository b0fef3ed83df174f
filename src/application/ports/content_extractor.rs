//! Content Extractor Port - 正文提取抽象
//!
//! 从抓到的 HTML 里剔除非正文元素并提取可见文本。纯计算，同步接口，
//! 具体实现在 infrastructure/adapters 层

/// Content Extractor Port
pub trait ContentExtractorPort: Send + Sync {
    /// 提取页面正文
    ///
    /// 返回空白折叠后的纯文本；找不到任何正文时返回 None
    fn extract(&self, html: &str) -> Option<String>;
}
