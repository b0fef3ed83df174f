//! Script Generator - 脚本生成
//!
//! 把校验过的正文截断到固定前缀，拼上人设提示与时长建议，提交给
//! 语言模型，并把自由文本补全解析成对话脚本。
//!
//! 截断只是成本与延迟控制，与档位无关；模型实际返回多长就是多长，
//! 这里不做事后截断或填充。

use std::sync::Arc;

use crate::application::error::PipelineError;
use crate::application::ports::{CompleteRequest, LlmEnginePort};
use crate::domain::{parse_script, DialogueScript, LengthTier};

/// 默认正文前缀上限（字符数）
pub const DEFAULT_MAX_CONTENT_CHARS: usize = 4000;

/// 两位主播的人设与格式约定
const PERSONA_PROMPT: &str = "\
You are writing the script for a casual, engaging podcast between two friends \
who are genuinely excited about what they are discussing.

HOSTS:
- Alex (male): curious, asks good questions, reacts naturally with \"wow\", \"wait, really?\", \"that's wild\"
- Sam (female): knowledgeable but never preachy, explains things simply, says \"honestly\", \"here's the thing\", \"right?\"

STYLE RULES:
- Sound like real friends talking, not a formal interview
- Use contractions and simple words, keep the energy up
- Hosts may react to or build on each other's points
- Open with a hook, close with a memorable takeaway

FORMAT:
- Write every line as \"Alex: ...\" or \"Sam: ...\"
- No headings, no stage directions, no narrator";

/// 生成配置
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    /// 提交给模型的正文前缀上限（字符数）
    pub max_content_chars: usize,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            max_content_chars: DEFAULT_MAX_CONTENT_CHARS,
        }
    }
}

/// 脚本生成服务
pub struct ScriptGenerator {
    llm: Arc<dyn LlmEnginePort>,
    config: GeneratorConfig,
}

impl ScriptGenerator {
    pub fn new(llm: Arc<dyn LlmEnginePort>, config: GeneratorConfig) -> Self {
        Self { llm, config }
    }

    /// 生成对话脚本
    pub async fn generate(
        &self,
        content: &str,
        tier: LengthTier,
    ) -> Result<DialogueScript, PipelineError> {
        let prefix = truncate_chars(content, self.config.max_content_chars);
        let prompt = build_prompt(prefix, tier);

        tracing::debug!(
            tier = tier.as_str(),
            content_chars = prefix.chars().count(),
            "Requesting script completion"
        );

        let response = self
            .llm
            .complete(CompleteRequest { prompt })
            .await
            .map_err(|e| PipelineError::GenerationError(e.to_string()))?;

        let parsed = parse_script(&response.text);

        if parsed.skipped_lines > 0 {
            // 模型偶尔会夹带开场白或舞台说明，按约定静默丢弃
            tracing::debug!(
                skipped = parsed.skipped_lines,
                "Dropped completion lines without a recognized speaker label"
            );
        }

        if parsed.script.is_empty() {
            return Err(PipelineError::EmptyScript);
        }

        tracing::info!(
            lines = parsed.script.len(),
            tier = tier.as_str(),
            "Dialogue script parsed"
        );

        Ok(parsed.script)
    }
}

/// 组装完整提示词
fn build_prompt(content_prefix: &str, tier: LengthTier) -> String {
    format!(
        "{persona}\n\nLENGTH:\n- Aim for roughly {words} words total ({duration} of speech)\n\nTEXT TO DISCUSS:\n{content}",
        persona = PERSONA_PROMPT,
        words = tier.target_words(),
        duration = tier.duration_hint(),
        content = content_prefix,
    )
}

/// 按字符数截断，保证不切在多字节字符中间
fn truncate_chars(s: &str, max_chars: usize) -> &str {
    match s.char_indices().nth(max_chars) {
        Some((byte_index, _)) => &s[..byte_index],
        None => s,
    }
}
