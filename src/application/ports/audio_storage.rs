//! Audio Storage Port - 出站端口
//!
//! 管理每个任务的工作目录：逐行的临时片段、最终拼接产物，以及
//! 过期任务目录的清理。所有路径都以任务 ID 为键，并发请求之间
//! 不会出现文件名冲突。

use async_trait::async_trait;
use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;
use uuid::Uuid;

/// 音频存储错误
#[derive(Debug, Error)]
pub enum AudioStorageError {
    #[error("File not found: {0}")]
    FileNotFound(String),

    #[error("IO error: {0}")]
    IoError(String),
}

/// 清理结果
#[derive(Debug, Clone, Default)]
pub struct SweepResult {
    /// 删除的任务目录数量
    pub removed_jobs: u64,
    /// 释放的空间（字节）
    pub freed_bytes: u64,
}

/// Audio Storage Port - 出站端口
#[async_trait]
pub trait AudioStoragePort: Send + Sync {
    /// 任务的工作目录
    fn job_dir(&self, job_id: Uuid) -> PathBuf;

    /// 某一行临时片段的路径
    fn line_path(&self, job_id: Uuid, index: usize) -> PathBuf;

    /// 最终拼接产物的路径
    fn final_path(&self, job_id: Uuid) -> PathBuf;

    /// 保存一行的临时片段
    async fn save_line(
        &self,
        job_id: Uuid,
        index: usize,
        data: &[u8],
    ) -> Result<PathBuf, AudioStorageError>;

    /// 保存最终拼接产物
    async fn save_final(&self, job_id: Uuid, data: &[u8]) -> Result<PathBuf, AudioStorageError>;

    /// 读取最终拼接产物
    async fn read_final(&self, job_id: Uuid) -> Result<Vec<u8>, AudioStorageError>;

    /// 最终产物是否存在
    async fn final_exists(&self, job_id: Uuid) -> bool;

    /// 删除任务目录下所有逐行临时片段，返回删除数量
    async fn delete_lines(&self, job_id: Uuid) -> Result<u64, AudioStorageError>;

    /// 删除整个任务目录（包括最终产物）
    async fn delete_job(&self, job_id: Uuid) -> Result<(), AudioStorageError>;

    /// 删除超龄的任务目录
    async fn sweep_stale(&self, max_age: Duration) -> Result<SweepResult, AudioStorageError>;
}
