//! File Storage - 文件系统音频存储实现
//!
//! 实现 AudioStoragePort trait。目录结构：
//!
//! ```text
//! {base_dir}/{job_id}/line_{index}.mp3   逐行临时片段
//! {base_dir}/{job_id}/podcast.mp3        最终拼接产物
//! ```

use async_trait::async_trait;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tokio::fs;
use uuid::Uuid;

use crate::application::ports::{AudioStorageError, AudioStoragePort, SweepResult};

/// 最终产物的文件名
const FINAL_FILE_NAME: &str = "podcast.mp3";

/// 文件系统音频存储
pub struct FileAudioStorage {
    /// 存储根目录
    base_dir: PathBuf,
}

impl FileAudioStorage {
    /// 创建新的文件存储
    pub async fn new(base_dir: impl AsRef<Path>) -> Result<Self, AudioStorageError> {
        let base_dir = base_dir.as_ref().to_path_buf();

        // 确保目录存在
        fs::create_dir_all(&base_dir)
            .await
            .map_err(|e| AudioStorageError::IoError(e.to_string()))?;

        Ok(Self { base_dir })
    }

    /// 获取存储根目录
    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    async fn write_file(&self, path: &Path, data: &[u8]) -> Result<(), AudioStorageError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .await
                .map_err(|e| AudioStorageError::IoError(e.to_string()))?;
        }
        fs::write(path, data)
            .await
            .map_err(|e| AudioStorageError::IoError(e.to_string()))
    }
}

#[async_trait]
impl AudioStoragePort for FileAudioStorage {
    fn job_dir(&self, job_id: Uuid) -> PathBuf {
        self.base_dir.join(job_id.to_string())
    }

    fn line_path(&self, job_id: Uuid, index: usize) -> PathBuf {
        self.job_dir(job_id).join(format!("line_{}.mp3", index))
    }

    fn final_path(&self, job_id: Uuid) -> PathBuf {
        self.job_dir(job_id).join(FINAL_FILE_NAME)
    }

    async fn save_line(
        &self,
        job_id: Uuid,
        index: usize,
        data: &[u8],
    ) -> Result<PathBuf, AudioStorageError> {
        let path = self.line_path(job_id, index);
        self.write_file(&path, data).await?;

        tracing::debug!(
            job_id = %job_id,
            index,
            size = data.len(),
            "Saved line artifact"
        );

        Ok(path)
    }

    async fn save_final(&self, job_id: Uuid, data: &[u8]) -> Result<PathBuf, AudioStorageError> {
        let path = self.final_path(job_id);
        self.write_file(&path, data).await?;

        tracing::info!(
            job_id = %job_id,
            size = data.len(),
            "Saved assembled artifact"
        );

        Ok(path)
    }

    async fn read_final(&self, job_id: Uuid) -> Result<Vec<u8>, AudioStorageError> {
        let path = self.final_path(job_id);

        if !path.exists() {
            return Err(AudioStorageError::FileNotFound(
                path.to_string_lossy().to_string(),
            ));
        }

        fs::read(&path)
            .await
            .map_err(|e| AudioStorageError::IoError(e.to_string()))
    }

    async fn final_exists(&self, job_id: Uuid) -> bool {
        self.final_path(job_id).exists()
    }

    async fn delete_lines(&self, job_id: Uuid) -> Result<u64, AudioStorageError> {
        let job_dir = self.job_dir(job_id);

        if !job_dir.exists() {
            return Ok(0);
        }

        let mut deleted = 0u64;
        let mut entries = fs::read_dir(&job_dir)
            .await
            .map_err(|e| AudioStorageError::IoError(e.to_string()))?;

        while let Some(entry) = entries
            .next_entry()
            .await
            .map_err(|e| AudioStorageError::IoError(e.to_string()))?
        {
            let name = entry.file_name();
            let is_line = name
                .to_str()
                .map_or(false, |n| n.starts_with("line_") && n.ends_with(".mp3"));

            if is_line {
                fs::remove_file(entry.path())
                    .await
                    .map_err(|e| AudioStorageError::IoError(e.to_string()))?;
                deleted += 1;
            }
        }

        Ok(deleted)
    }

    async fn delete_job(&self, job_id: Uuid) -> Result<(), AudioStorageError> {
        let job_dir = self.job_dir(job_id);

        if job_dir.exists() {
            fs::remove_dir_all(&job_dir)
                .await
                .map_err(|e| AudioStorageError::IoError(e.to_string()))?;

            tracing::debug!(job_id = %job_id, "Deleted job directory");
        }

        Ok(())
    }

    async fn sweep_stale(&self, max_age: Duration) -> Result<SweepResult, AudioStorageError> {
        let mut result = SweepResult::default();

        let mut entries = fs::read_dir(&self.base_dir)
            .await
            .map_err(|e| AudioStorageError::IoError(e.to_string()))?;

        while let Some(entry) = entries
            .next_entry()
            .await
            .map_err(|e| AudioStorageError::IoError(e.to_string()))?
        {
            let path = entry.path();
            if !path.is_dir() {
                continue;
            }

            let Ok(metadata) = entry.metadata().await else {
                continue;
            };
            let Ok(modified) = metadata.modified() else {
                continue;
            };
            let Ok(age) = modified.elapsed() else {
                continue;
            };

            if age > max_age {
                let freed = dir_size(&path).await;
                if fs::remove_dir_all(&path).await.is_ok() {
                    result.removed_jobs += 1;
                    result.freed_bytes += freed;
                }
            }
        }

        if result.removed_jobs > 0 {
            tracing::info!(
                removed_jobs = result.removed_jobs,
                freed_bytes = result.freed_bytes,
                "Swept stale job directories"
            );
        }

        Ok(result)
    }
}

/// 统计目录下所有文件的大小
async fn dir_size(dir: &Path) -> u64 {
    let mut total = 0u64;
    if let Ok(mut entries) = fs::read_dir(dir).await {
        while let Ok(Some(entry)) = entries.next_entry().await {
            if let Ok(metadata) = entry.metadata().await {
                if metadata.is_file() {
                    total += metadata.len();
                }
            }
        }
    }
    total
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[tokio::test]
    async fn test_save_and_read_final() {
        let temp_dir = tempdir().unwrap();
        let storage = FileAudioStorage::new(temp_dir.path()).await.unwrap();

        let job_id = Uuid::new_v4();
        let data = b"assembled mp3 bytes";

        let path = storage.save_final(job_id, data).await.unwrap();
        assert!(path.exists());
        assert!(storage.final_exists(job_id).await);

        let read_back = storage.read_final(job_id).await.unwrap();
        assert_eq!(read_back, data);
    }

    #[tokio::test]
    async fn test_read_missing_final_is_not_found() {
        let temp_dir = tempdir().unwrap();
        let storage = FileAudioStorage::new(temp_dir.path()).await.unwrap();

        let result = storage.read_final(Uuid::new_v4()).await;
        assert!(matches!(result, Err(AudioStorageError::FileNotFound(_))));
    }

    #[tokio::test]
    async fn test_delete_lines_keeps_final() {
        let temp_dir = tempdir().unwrap();
        let storage = FileAudioStorage::new(temp_dir.path()).await.unwrap();

        let job_id = Uuid::new_v4();
        for i in 0..3 {
            storage.save_line(job_id, i, b"line data").await.unwrap();
        }
        storage.save_final(job_id, b"final").await.unwrap();

        let deleted = storage.delete_lines(job_id).await.unwrap();
        assert_eq!(deleted, 3);

        assert!(!storage.line_path(job_id, 0).exists());
        assert!(storage.final_exists(job_id).await);
    }

    #[tokio::test]
    async fn test_delete_job_removes_everything() {
        let temp_dir = tempdir().unwrap();
        let storage = FileAudioStorage::new(temp_dir.path()).await.unwrap();

        let job_id = Uuid::new_v4();
        storage.save_line(job_id, 0, b"line").await.unwrap();
        storage.save_final(job_id, b"final").await.unwrap();

        storage.delete_job(job_id).await.unwrap();

        assert!(!storage.job_dir(job_id).exists());
    }

    #[tokio::test]
    async fn test_paths_are_keyed_by_job_id() {
        let temp_dir = tempdir().unwrap();
        let storage = FileAudioStorage::new(temp_dir.path()).await.unwrap();

        let a = Uuid::new_v4();
        let b = Uuid::new_v4();

        assert_ne!(storage.final_path(a), storage.final_path(b));
        assert_ne!(storage.line_path(a, 0), storage.line_path(b, 0));
    }

    #[tokio::test]
    async fn test_sweep_keeps_fresh_jobs() {
        let temp_dir = tempdir().unwrap();
        let storage = FileAudioStorage::new(temp_dir.path()).await.unwrap();

        let job_id = Uuid::new_v4();
        storage.save_final(job_id, b"fresh").await.unwrap();

        let result = storage
            .sweep_stale(Duration::from_secs(3600))
            .await
            .unwrap();

        assert_eq!(result.removed_jobs, 0);
        assert!(storage.final_exists(job_id).await);
    }

    #[tokio::test]
    async fn test_sweep_removes_stale_jobs() {
        let temp_dir = tempdir().unwrap();
        let storage = FileAudioStorage::new(temp_dir.path()).await.unwrap();

        let job_id = Uuid::new_v4();
        storage.save_final(job_id, b"stale").await.unwrap();

        // max_age 为零，任何目录都算过期
        tokio::time::sleep(Duration::from_millis(20)).await;
        let result = storage.sweep_stale(Duration::ZERO).await.unwrap();

        assert_eq!(result.removed_jobs, 1);
        assert!(!storage.final_exists(job_id).await);
    }
}
