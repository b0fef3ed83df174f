//! Podcast Pipeline - 流水线编排
//!
//! 严格线性同步：获取 → 生成 → 合成 → 拼接 → 落盘。
//! 每个阶段的输出是下一阶段的必需输入，任何阶段失败立即终止，
//! 不保留部分结果（脚本没有音频、音频没有拼接都不算成功）。
//!
//! 每次运行分配一个任务 ID，所有临时与最终产物都放在以该 ID 命名
//! 的目录里，并发请求之间互不干扰。逐行临时片段在拼接完成后删除，
//! 失败路径上整个任务目录一并删除。

use chrono::{DateTime, Utc};
use std::sync::Arc;
use uuid::Uuid;

use crate::application::acquire::ContentAcquirer;
use crate::application::error::PipelineError;
use crate::application::generate::ScriptGenerator;
use crate::application::ports::AudioStoragePort;
use crate::application::synthesize::SpeechSynthesizer;
use crate::domain::{assemble, DialogueScript, GenerationRequest};

/// 一次成功运行的结果
#[derive(Debug, Clone)]
pub struct PodcastJob {
    /// 任务 ID，播放与下载 URL 以它为键
    pub job_id: Uuid,
    pub created_at: DateTime<Utc>,
    /// 解析出的对话脚本（用于页面展示）
    pub script: DialogueScript,
    /// 最终产物大小（字节）
    pub audio_bytes: u64,
}

/// 播客生成流水线
pub struct PodcastPipeline {
    acquirer: ContentAcquirer,
    generator: ScriptGenerator,
    synthesizer: SpeechSynthesizer,
    storage: Arc<dyn AudioStoragePort>,
}

impl PodcastPipeline {
    pub fn new(
        acquirer: ContentAcquirer,
        generator: ScriptGenerator,
        synthesizer: SpeechSynthesizer,
        storage: Arc<dyn AudioStoragePort>,
    ) -> Self {
        Self {
            acquirer,
            generator,
            synthesizer,
            storage,
        }
    }

    /// 运行完整流水线
    pub async fn run(&self, request: GenerationRequest) -> Result<PodcastJob, PipelineError> {
        let job_id = Uuid::new_v4();
        let created_at = Utc::now();

        tracing::info!(job_id = %job_id, tier = request.tier.as_str(), "Pipeline started");

        // 输入校验与获取：外部生成调用之前完成
        let content = self.acquirer.acquire(&request.mode).await?;

        let script = self
            .generator
            .generate(content.text(), request.tier)
            .await?;

        match self.synthesize_and_assemble(job_id, &script).await {
            Ok(audio_bytes) => {
                tracing::info!(
                    job_id = %job_id,
                    lines = script.len(),
                    audio_bytes,
                    "Pipeline completed"
                );
                Ok(PodcastJob {
                    job_id,
                    created_at,
                    script,
                    audio_bytes,
                })
            }
            Err(e) => {
                // 失败路径同样释放所有中间产物
                if let Err(cleanup_err) = self.storage.delete_job(job_id).await {
                    tracing::warn!(
                        job_id = %job_id,
                        error = %cleanup_err,
                        "Failed to clean up job directory after pipeline error"
                    );
                }
                Err(e)
            }
        }
    }

    /// 合成、拼接并落盘，返回最终产物大小
    async fn synthesize_and_assemble(
        &self,
        job_id: Uuid,
        script: &DialogueScript,
    ) -> Result<u64, PipelineError> {
        let artifacts = self.synthesizer.synthesize(job_id, script).await?;

        debug_assert_eq!(artifacts.len(), script.len());

        let combined = assemble(&artifacts);
        let audio_bytes = combined.len() as u64;

        self.storage
            .save_final(job_id, combined.as_bytes())
            .await?;

        // 拼接完成后立即释放逐行临时片段
        let removed = self.storage.delete_lines(job_id).await?;
        tracing::debug!(job_id = %job_id, removed, "Intermediate line artifacts released");

        Ok(audio_bytes)
    }
}
