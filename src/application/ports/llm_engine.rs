//! LLM Engine Port - 生成式语言模型抽象
//!
//! 定义一次补全调用的抽象接口，具体实现在 infrastructure/adapters 层

use async_trait::async_trait;
use thiserror::Error;

/// LLM 错误
#[derive(Debug, Error)]
pub enum LlmError {
    #[error("Network error: {0}")]
    NetworkError(String),

    #[error("Request timeout")]
    Timeout,

    #[error("Service error: {0}")]
    ServiceError(String),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

/// 补全请求
#[derive(Debug, Clone)]
pub struct CompleteRequest {
    /// 完整的提示词（人设 + 长度提示 + 正文前缀）
    pub prompt: String,
}

/// 补全响应
#[derive(Debug, Clone)]
pub struct CompleteResponse {
    /// 模型返回的自由文本补全
    pub text: String,
    /// 提示词 token 数（服务端统计，用于日志）
    pub prompt_tokens: Option<u32>,
    /// 补全 token 数
    pub completion_tokens: Option<u32>,
}

/// LLM Engine Port
///
/// 外部生成式文本服务的抽象接口：一个提示词进，一个补全出
#[async_trait]
pub trait LlmEnginePort: Send + Sync {
    /// 执行一次补全
    async fn complete(&self, request: CompleteRequest) -> Result<CompleteResponse, LlmError>;
}
