//! Fake TTS Client - 用于测试的 TTS 客户端
//!
//! 始终返回固定的音频字节，可配置在第 N 次调用时失败，
//! 不实际调用 TTS 服务

use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::application::ports::{SpeakRequest, SpeakResponse, TtsEnginePort, TtsError};

/// Fake TTS Client 配置
#[derive(Debug, Clone)]
pub struct FakeTtsClientConfig {
    /// 固定返回的音频数据
    pub audio_data: Vec<u8>,
    /// 设置后第 N 次调用（从 0 计）返回服务错误
    pub fail_at_call: Option<usize>,
    /// 固定返回的音频时长（毫秒）
    pub duration_ms: u64,
}

impl Default for FakeTtsClientConfig {
    fn default() -> Self {
        Self {
            audio_data: b"fake mp3 frame".to_vec(),
            fail_at_call: None,
            duration_ms: 1200,
        }
    }
}

/// Fake TTS Client
pub struct FakeTtsClient {
    config: FakeTtsClientConfig,
    calls: AtomicUsize,
}

impl FakeTtsClient {
    pub fn new(config: FakeTtsClientConfig) -> Self {
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
impl TtsEnginePort for FakeTtsClient {
    async fn synthesize(&self, request: SpeakRequest) -> Result<SpeakResponse, TtsError> {
        let call = self.calls.fetch_add(1, Ordering::SeqCst);

        tracing::debug!(
            call,
            text_len = request.text.len(),
            voice = %request.voice,
            "FakeTtsClient: returning fixed audio"
        );

        if self.config.fail_at_call == Some(call) {
            return Err(TtsError::ServiceError(format!(
                "synthetic failure at call {}",
                call
            )));
        }

        Ok(SpeakResponse {
            audio_data: self.config.audio_data.clone(),
            duration_ms: Some(self.config.duration_ms),
        })
    }

    async fn health_check(&self) -> bool {
        true
    }
}
