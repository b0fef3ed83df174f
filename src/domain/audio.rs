//! 音频片段与拼接
//!
//! 整条流水线固定使用一种编码（MP3），逐行合成的片段按脚本顺序
//! 做字节级拼接。MP3 帧是自同步的，顺序拼接后的文件可以从头到尾
//! 正常解码播放，因此这里不做任何容器级封装。

/// 全流程固定的音频 MIME 类型
pub const AUDIO_MIME: &str = "audio/mpeg";

/// 下载时建议的文件名
pub const DOWNLOAD_FILENAME: &str = "podcast.mp3";

/// 不透明的音频字节块
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AudioArtifact {
    data: Vec<u8>,
}

impl AudioArtifact {
    pub fn new(data: Vec<u8>) -> Self {
        Self { data }
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.data
    }
}

impl From<Vec<u8>> for AudioArtifact {
    fn from(data: Vec<u8>) -> Self {
        Self::new(data)
    }
}

/// 按输入顺序拼接音频片段
///
/// 输出长度等于各输入长度之和，字节内容等于各输入按序连接。
pub fn assemble(artifacts: &[AudioArtifact]) -> AudioArtifact {
    let total: usize = artifacts.iter().map(AudioArtifact::len).sum();
    let mut data = Vec::with_capacity(total);
    for artifact in artifacts {
        data.extend_from_slice(artifact.as_bytes());
    }
    AudioArtifact::new(data)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_assemble_concatenates_in_order() {
        let artifacts = vec![
            AudioArtifact::new(b"AAA".to_vec()),
            AudioArtifact::new(b"BB".to_vec()),
            AudioArtifact::new(b"CCCC".to_vec()),
        ];

        let combined = assemble(&artifacts);

        assert_eq!(combined.len(), 9);
        assert_eq!(combined.as_bytes(), b"AAABBCCCC");
    }

    #[test]
    fn test_assemble_length_equals_sum_of_inputs() {
        let artifacts: Vec<AudioArtifact> = (1..=5)
            .map(|n| AudioArtifact::new(vec![n as u8; n * 10]))
            .collect();
        let expected: usize = artifacts.iter().map(AudioArtifact::len).sum();

        assert_eq!(assemble(&artifacts).len(), expected);
    }

    #[test]
    fn test_assemble_is_idempotent_for_same_inputs() {
        let artifacts = vec![
            AudioArtifact::new(b"one".to_vec()),
            AudioArtifact::new(b"two".to_vec()),
        ];

        assert_eq!(assemble(&artifacts), assemble(&artifacts));
    }

    #[test]
    fn test_assemble_empty_sequence_yields_empty_artifact() {
        let combined = assemble(&[]);
        assert!(combined.is_empty());
    }
}
