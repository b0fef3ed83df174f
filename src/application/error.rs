//! 应用层错误定义
//!
//! 流水线各阶段的统一错误分类。每个阶段失败都以类型化的值传播到
//! HTTP 编排边界，由那里转换成唯一一条面向用户的提示；不自动重试。

use thiserror::Error;

use crate::domain::MIN_CONTENT_CHARS;

/// 流水线错误
#[derive(Debug, Error)]
pub enum PipelineError {
    /// 粘贴文本去除空白后为空
    #[error("input text is empty")]
    EmptyInput,

    /// 内容短于最低字符数
    #[error("input text is shorter than {min} characters")]
    TooShort { min: usize },

    /// URL 抓取失败（非 2xx、网络错误或超时）
    #[error("page fetch failed: {0}")]
    FetchError(String),

    /// 页面里找不到可读正文
    #[error("no readable content found in the page")]
    ExtractionFailed,

    /// 语言模型调用失败
    #[error("script generation failed: {0}")]
    GenerationError(String),

    /// 补全解析后没有任何对话行
    #[error("generated completion contained no dialogue lines")]
    EmptyScript,

    /// 某一行语音合成失败（携带失败行下标，从 0 计）
    #[error("speech synthesis failed on line {line}: {message}")]
    SynthesisError { line: usize, message: String },

    /// 合成结束却没有任何音频片段
    #[error("synthesis produced no audio")]
    NoAudioProduced,

    /// 其余未预期的内部失败
    #[error("internal error: {0}")]
    Internal(String),
}

impl PipelineError {
    /// 创建 TooShort 错误（使用全局最低长度）
    pub fn too_short() -> Self {
        Self::TooShort {
            min: MIN_CONTENT_CHARS,
        }
    }

    /// 创建内部错误
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    /// 面向用户的单条提示文案
    pub fn user_message(&self) -> String {
        match self {
            PipelineError::EmptyInput => "Please enter some text.".to_string(),
            PipelineError::TooShort { min } => {
                format!("Please enter more text (at least {} characters).", min)
            }
            PipelineError::FetchError(_) => {
                "Could not fetch that URL. Check the address and try again.".to_string()
            }
            PipelineError::ExtractionFailed => {
                "Could not find readable content on that page. Try pasting the text instead."
                    .to_string()
            }
            PipelineError::GenerationError(_) => {
                "The script generator is unavailable right now. Please try again.".to_string()
            }
            PipelineError::EmptyScript => {
                "Could not turn that text into a dialogue. Try different text.".to_string()
            }
            PipelineError::SynthesisError { line, .. } => {
                format!("Audio generation failed on line {}.", line + 1)
            }
            PipelineError::NoAudioProduced => {
                "Could not generate audio. Try different text.".to_string()
            }
            PipelineError::Internal(_) => "Something went wrong. Please try again.".to_string(),
        }
    }
}

impl From<crate::application::ports::AudioStorageError> for PipelineError {
    fn from(err: crate::application::ports::AudioStorageError) -> Self {
        Self::Internal(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_too_short_carries_global_minimum() {
        match PipelineError::too_short() {
            PipelineError::TooShort { min } => assert_eq!(min, MIN_CONTENT_CHARS),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_synthesis_error_message_is_one_based_for_users() {
        let err = PipelineError::SynthesisError {
            line: 2,
            message: "boom".to_string(),
        };
        assert!(err.user_message().contains("line 3"));
    }

    #[test]
    fn test_internal_details_are_not_shown_to_users() {
        let err = PipelineError::internal("sqlite went away");
        assert!(!err.user_message().contains("sqlite"));
    }
}
