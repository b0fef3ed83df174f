//! Speech Synthesizer - 语音合成
//!
//! 对脚本逐行顺序调用 TTS：主播标签决定音色，任何一行失败则整个
//! 操作失败并携带失败行下标。每行合成成功后立即把临时片段写入
//! 任务工作目录；部分成功的片段由流水线在失败路径上统一清理。

use std::sync::Arc;
use uuid::Uuid;

use crate::application::error::PipelineError;
use crate::application::ports::{AudioStoragePort, SpeakRequest, TtsEnginePort};
use crate::domain::{AudioArtifact, DialogueScript, Speaker};

/// 主播到音色的固定映射
#[derive(Debug, Clone)]
pub struct VoiceMap {
    pub alex: String,
    pub sam: String,
}

impl Default for VoiceMap {
    fn default() -> Self {
        Self {
            alex: "en-US-GuyNeural".to_string(),
            sam: "en-US-JennyNeural".to_string(),
        }
    }
}

impl VoiceMap {
    /// 取主播对应的音色标识（确定性映射，两位主播两种音色）
    pub fn voice_for(&self, speaker: Speaker) -> &str {
        match speaker {
            Speaker::Alex => &self.alex,
            Speaker::Sam => &self.sam,
        }
    }
}

/// 语音合成服务
pub struct SpeechSynthesizer {
    tts: Arc<dyn TtsEnginePort>,
    storage: Arc<dyn AudioStoragePort>,
    voices: VoiceMap,
}

impl SpeechSynthesizer {
    pub fn new(
        tts: Arc<dyn TtsEnginePort>,
        storage: Arc<dyn AudioStoragePort>,
        voices: VoiceMap,
    ) -> Self {
        Self {
            tts,
            storage,
            voices,
        }
    }

    /// 逐行合成整个脚本
    ///
    /// 返回与脚本同序的音频片段；片段数量等于对话行数。
    /// 无法识别的主播不会走到这里，脚本生成阶段已经过滤。
    pub async fn synthesize(
        &self,
        job_id: Uuid,
        script: &DialogueScript,
    ) -> Result<Vec<AudioArtifact>, PipelineError> {
        let mut artifacts = Vec::with_capacity(script.len());

        for (index, line) in script.lines().iter().enumerate() {
            let voice = self.voices.voice_for(line.speaker);

            let response = self
                .tts
                .synthesize(SpeakRequest {
                    text: line.utterance.clone(),
                    voice: voice.to_string(),
                })
                .await
                .map_err(|e| PipelineError::SynthesisError {
                    line: index,
                    message: e.to_string(),
                })?;

            tracing::debug!(
                job_id = %job_id,
                line = index,
                speaker = %line.speaker,
                voice = %voice,
                audio_size = response.audio_data.len(),
                duration_ms = ?response.duration_ms,
                "Line synthesized"
            );

            self.storage
                .save_line(job_id, index, &response.audio_data)
                .await?;

            artifacts.push(AudioArtifact::new(response.audio_data));
        }

        if artifacts.is_empty() {
            return Err(PipelineError::NoAudioProduced);
        }

        Ok(artifacts)
    }
}
