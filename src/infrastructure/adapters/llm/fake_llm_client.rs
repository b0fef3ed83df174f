//! Fake LLM Client - 用于测试的语言模型客户端
//!
//! 始终返回固定补全（或固定失败），不实际调用外部服务

use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::application::ports::{CompleteRequest, CompleteResponse, LlmEnginePort, LlmError};

/// Fake LLM Client 配置
#[derive(Debug, Clone, Default)]
pub struct FakeLlmClientConfig {
    /// 固定返回的补全文本
    pub completion: String,
    /// 设置后每次调用都返回该服务错误
    pub fail_with: Option<String>,
}

impl FakeLlmClientConfig {
    /// 固定返回给定补全
    pub fn completing(completion: &str) -> Self {
        Self {
            completion: completion.to_string(),
            fail_with: None,
        }
    }

    /// 固定返回服务错误
    pub fn failing(message: &str) -> Self {
        Self {
            completion: String::new(),
            fail_with: Some(message.to_string()),
        }
    }
}

/// Fake LLM Client
pub struct FakeLlmClient {
    config: FakeLlmClientConfig,
    calls: AtomicUsize,
}

impl FakeLlmClient {
    pub fn new(config: FakeLlmClientConfig) -> Self {
        Self {
            config,
            calls: AtomicUsize::new(0),
        }
    }

    /// 已收到的调用次数
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl LlmEnginePort for FakeLlmClient {
    async fn complete(&self, request: CompleteRequest) -> Result<CompleteResponse, LlmError> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        tracing::debug!(
            prompt_len = request.prompt.len(),
            "FakeLlmClient: returning fixed completion"
        );

        if let Some(message) = &self.config.fail_with {
            return Err(LlmError::ServiceError(message.clone()));
        }

        Ok(CompleteResponse {
            text: self.config.completion.clone(),
            prompt_tokens: None,
            completion_tokens: None,
        })
    }
}
