//! TTS Engine Port - 语音合成引擎抽象
//!
//! 定义单句语音合成的抽象接口，具体实现在 infrastructure/adapters 层

use async_trait::async_trait;
use thiserror::Error;

/// TTS 错误
#[derive(Debug, Error)]
pub enum TtsError {
    #[error("Network error: {0}")]
    NetworkError(String),

    #[error("Request timeout")]
    Timeout,

    #[error("Service error: {0}")]
    ServiceError(String),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

/// 语音合成请求
#[derive(Debug, Clone)]
pub struct SpeakRequest {
    /// 要合成的台词文本
    pub text: String,
    /// 音色标识（如 en-US-GuyNeural）
    pub voice: String,
}

/// 语音合成响应
#[derive(Debug, Clone)]
pub struct SpeakResponse {
    /// MP3 音频数据
    pub audio_data: Vec<u8>,
    /// 音频时长（毫秒，服务端可选提供）
    pub duration_ms: Option<u64>,
}

/// TTS Engine Port
///
/// 外部 TTS 服务的抽象接口：一句文本加一个音色，换一段音频
#[async_trait]
pub trait TtsEnginePort: Send + Sync {
    /// 合成一句语音
    async fn synthesize(&self, request: SpeakRequest) -> Result<SpeakResponse, TtsError>;

    /// 检查 TTS 服务是否可用
    async fn health_check(&self) -> bool {
        true // 默认实现
    }
}
