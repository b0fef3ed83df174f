//! Podgen - 文本转播客生成服务
//!
//! 架构设计: Hexagonal Architecture
//!
//! 领域层 (domain/):
//! - script: 双主播对话脚本与分词器
//! - source: 输入内容与时长档位
//! - audio: 音频片段与字节级拼接
//!
//! 应用层 (application/):
//! - Ports: 端口定义（LlmEngine, TtsEngine, PageFetcher, ContentExtractor, AudioStorage）
//! - Pipeline: 获取 → 生成 → 合成 → 拼接 的同步流水线编排
//!
//! 基础设施层 (infrastructure/):
//! - HTTP: 提交表单、播放与下载端点
//! - Adapters: Gemini 客户端、TTS HTTP 客户端、网页抓取与正文提取、文件存储

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::{load_config, AppConfig};
