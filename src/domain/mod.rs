//! Domain Layer - 领域层
//!
//! 纯类型与纯逻辑，无 I/O、无异步：
//! - script: 主播、对话行、脚本分词器
//! - source: 输入内容校验与时长档位
//! - audio: 音频片段与字节级拼接

pub mod audio;
pub mod script;
pub mod source;

pub use audio::{assemble, AudioArtifact, AUDIO_MIME, DOWNLOAD_FILENAME};
pub use script::{parse_script, DialogueLine, DialogueScript, ParsedScript, Speaker};
pub use source::{
    AcquireMode, ContentError, GenerationRequest, LengthTier, SourceContent, SourceOrigin,
    MIN_CONTENT_CHARS,
};
