//! HTTP TTS Client - 调用外部 TTS HTTP 服务
//!
//! 实现 TtsEnginePort trait，通过 HTTP 调用外部 TTS 网关
//!
//! 外部 TTS API:
//! POST {base_url}/api/tts
//! Request: {"text": "...", "voice": "en-US-GuyNeural"}  (JSON)
//! Response: audio/mpeg binary, duration in headers

use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;
use std::time::Duration;

use crate::application::ports::{SpeakRequest, SpeakResponse, TtsEnginePort, TtsError};

/// 语音合成请求体 (JSON)
#[derive(Debug, Serialize)]
struct TtsHttpRequest {
    /// 要合成的文本
    text: String,
    /// 音色标识
    voice: String,
}

/// HTTP TTS 客户端配置
#[derive(Debug, Clone)]
pub struct HttpTtsClientConfig {
    /// TTS 服务基础 URL
    pub base_url: String,
    /// 请求超时时间（秒）
    pub timeout_secs: u64,
}

impl Default for HttpTtsClientConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8000".to_string(),
            timeout_secs: 60,
        }
    }
}

impl HttpTtsClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Default::default()
        }
    }

    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

/// HTTP TTS 客户端
pub struct HttpTtsClient {
    client: Client,
    config: HttpTtsClientConfig,
}

impl HttpTtsClient {
    /// 创建新的 HTTP TTS 客户端
    pub fn new(config: HttpTtsClientConfig) -> Result<Self, TtsError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| TtsError::NetworkError(e.to_string()))?;

        Ok(Self { client, config })
    }

    /// 获取合成 URL
    fn speak_url(&self) -> String {
        format!("{}/api/tts", self.config.base_url)
    }

    /// 获取健康检查 URL
    fn health_url(&self) -> String {
        format!("{}/health", self.config.base_url)
    }
}

#[async_trait]
impl TtsEnginePort for HttpTtsClient {
    async fn synthesize(&self, request: SpeakRequest) -> Result<SpeakResponse, TtsError> {
        let http_request = TtsHttpRequest {
            text: request.text,
            voice: request.voice,
        };

        tracing::debug!(
            url = %self.speak_url(),
            text_len = http_request.text.len(),
            voice = %http_request.voice,
            "Sending TTS request"
        );

        let response = self
            .client
            .post(self.speak_url())
            .json(&http_request)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    TtsError::Timeout
                } else if e.is_connect() {
                    TtsError::NetworkError(format!("Cannot connect to TTS service: {}", e))
                } else {
                    TtsError::NetworkError(e.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(TtsError::ServiceError(format!(
                "HTTP {}: {}",
                status, error_text
            )));
        }

        // 时长是可选的元数据，从 header 提取
        let duration_ms = response
            .headers()
            .get("X-Speech-Duration-Ms")
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.parse().ok());

        let audio_data = response
            .bytes()
            .await
            .map_err(|e| TtsError::InvalidResponse(format!("Failed to read audio: {}", e)))?
            .to_vec();

        if audio_data.is_empty() {
            return Err(TtsError::InvalidResponse(
                "TTS service returned empty audio".to_string(),
            ));
        }

        tracing::debug!(
            voice = %http_request.voice,
            duration_ms = ?duration_ms,
            audio_size = audio_data.len(),
            "TTS synthesis completed"
        );

        Ok(SpeakResponse {
            audio_data,
            duration_ms,
        })
    }

    async fn health_check(&self) -> bool {
        match self
            .client
            .get(self.health_url())
            .timeout(Duration::from_secs(5))
            .send()
            .await
        {
            Ok(response) => response.status().is_success(),
            Err(_) => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = HttpTtsClientConfig::default();
        assert_eq!(config.base_url, "http://localhost:8000");
        assert_eq!(config.timeout_secs, 60);
    }

    #[test]
    fn test_config_builder() {
        let config = HttpTtsClientConfig::new("http://tts.internal:9000").with_timeout(30);
        assert_eq!(config.base_url, "http://tts.internal:9000");
        assert_eq!(config.timeout_secs, 30);
    }

    #[test]
    fn test_speak_url() {
        let client = HttpTtsClient::new(HttpTtsClientConfig::default()).unwrap();
        assert_eq!(client.speak_url(), "http://localhost:8000/api/tts");
    }
}
