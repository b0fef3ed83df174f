//! 输入内容
//!
//! 一次生成请求的输入：粘贴文本或 URL 提取的正文，以及时长档位。
//! 最短长度校验在任何外部调用之前完成。

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// 内容最短字符数（含边界：恰好 50 字符通过）
pub const MIN_CONTENT_CHARS: usize = 50;

/// 内容校验错误
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ContentError {
    #[error("content is empty")]
    Empty,

    #[error("content is shorter than {MIN_CONTENT_CHARS} characters")]
    TooShort,
}

/// 内容来源
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceOrigin {
    /// 用户直接粘贴
    Pasted,
    /// 从 URL 抓取并提取正文
    Url(String),
}

/// 校验通过的纯文本输入
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceContent {
    text: String,
    origin: SourceOrigin,
}

impl SourceContent {
    /// 从粘贴文本构造：去除首尾空白，校验非空与最短长度
    pub fn from_pasted(raw: &str) -> Result<Self, ContentError> {
        let text = Self::validate(raw)?;
        Ok(Self {
            text,
            origin: SourceOrigin::Pasted,
        })
    }

    /// 从 URL 提取的正文构造，校验规则与粘贴文本一致
    pub fn from_extracted(url: &str, raw: &str) -> Result<Self, ContentError> {
        let text = Self::validate(raw)?;
        Ok(Self {
            text,
            origin: SourceOrigin::Url(url.to_string()),
        })
    }

    fn validate(raw: &str) -> Result<String, ContentError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(ContentError::Empty);
        }
        if trimmed.chars().count() < MIN_CONTENT_CHARS {
            return Err(ContentError::TooShort);
        }
        Ok(trimmed.to_string())
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn origin(&self) -> &SourceOrigin {
        &self.origin
    }
}

/// 时长档位
///
/// 仅作为传给语言模型的建议，不做事后截断或填充。
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LengthTier {
    Short,
    #[default]
    Medium,
    Long,
}

impl LengthTier {
    /// 目标词数（建议值）
    pub fn target_words(&self) -> u32 {
        match self {
            LengthTier::Short => 150,
            LengthTier::Medium => 300,
            LengthTier::Long => 500,
        }
    }

    /// 口播时长提示（建议值）
    pub fn duration_hint(&self) -> &'static str {
        match self {
            LengthTier::Short => "about one minute",
            LengthTier::Medium => "about two minutes",
            LengthTier::Long => "about four minutes",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            LengthTier::Short => "short",
            LengthTier::Medium => "medium",
            LengthTier::Long => "long",
        }
    }
}

/// 获取方式：粘贴文本或 URL
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AcquireMode {
    Pasted { text: String },
    Url { url: String },
}

/// 一次完整的生成请求
#[derive(Debug, Clone)]
pub struct GenerationRequest {
    pub mode: AcquireMode,
    pub tier: LengthTier,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text_of_len(n: usize) -> String {
        "a".repeat(n)
    }

    #[test]
    fn test_empty_input_is_rejected() {
        assert_eq!(SourceContent::from_pasted(""), Err(ContentError::Empty));
        assert_eq!(SourceContent::from_pasted("   \n\t"), Err(ContentError::Empty));
    }

    #[test]
    fn test_49_chars_is_too_short() {
        assert_eq!(
            SourceContent::from_pasted(&text_of_len(49)),
            Err(ContentError::TooShort)
        );
    }

    #[test]
    fn test_50_chars_passes_inclusive_boundary() {
        let content = SourceContent::from_pasted(&text_of_len(50)).unwrap();
        assert_eq!(content.text().chars().count(), 50);
        assert_eq!(content.origin(), &SourceOrigin::Pasted);
    }

    #[test]
    fn test_length_is_checked_after_trim() {
        // 49 个有效字符加上首尾空白仍然太短
        let padded = format!("   {}   ", text_of_len(49));
        assert_eq!(
            SourceContent::from_pasted(&padded),
            Err(ContentError::TooShort)
        );
    }

    #[test]
    fn test_char_count_not_byte_count() {
        // 50 个多字节字符应当通过
        let text = "好".repeat(50);
        assert!(SourceContent::from_pasted(&text).is_ok());
    }

    #[test]
    fn test_extracted_content_records_url() {
        let content = SourceContent::from_extracted("https://example.com", &text_of_len(60)).unwrap();
        assert_eq!(
            content.origin(),
            &SourceOrigin::Url("https://example.com".to_string())
        );
    }

    #[test]
    fn test_tier_targets() {
        assert_eq!(LengthTier::Short.target_words(), 150);
        assert_eq!(LengthTier::Medium.target_words(), 300);
        assert_eq!(LengthTier::Long.target_words(), 500);
        assert_eq!(LengthTier::default(), LengthTier::Medium);
    }
}
