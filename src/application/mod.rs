//! 应用层 - 用例编排
//!
//! 包含：
//! - ports: 六边形架构端口定义（LlmEngine、TtsEngine、PageFetcher、ContentExtractor、AudioStorage）
//! - acquire / generate / synthesize: 流水线的三个阶段服务
//! - pipeline: 获取 → 生成 → 合成 → 拼接 的编排
//! - error: 流水线错误分类

pub mod acquire;
pub mod error;
pub mod generate;
pub mod pipeline;
pub mod ports;
pub mod synthesize;

pub use acquire::ContentAcquirer;
pub use error::PipelineError;
pub use generate::{GeneratorConfig, ScriptGenerator, DEFAULT_MAX_CONTENT_CHARS};
pub use pipeline::{PodcastJob, PodcastPipeline};
pub use synthesize::{SpeechSynthesizer, VoiceMap};

pub use ports::{
    AudioStorageError, AudioStoragePort, CompleteRequest, CompleteResponse, ContentExtractorPort,
    LlmEnginePort, LlmError, PageFetchError, PageFetcherPort, SpeakRequest, SpeakResponse,
    SweepResult, TtsEnginePort, TtsError,
};
