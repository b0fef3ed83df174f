//! 对话脚本
//!
//! 双主播播客脚本的领域模型与分词器。
//!
//! 语言模型返回的补全是自由文本，约定格式为每行 `Alex: ...` 或
//! `Sam: ...`。分词器采用封闭的主播标签集：只有以已知标签加冒号
//! 开头的行才会进入脚本，空行与无法识别的行一律静默跳过。

use serde::{Deserialize, Serialize};

/// 主播标签分隔符
const LABEL_DELIMITER: char = ':';

/// 主播（封闭集合，恰好两位）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Speaker {
    /// Alex - 好奇提问型男主播
    Alex,
    /// Sam - 知识输出型女主播
    Sam,
}

impl Speaker {
    /// 全部主播，按固定顺序
    pub const ALL: [Speaker; 2] = [Speaker::Alex, Speaker::Sam];

    /// 脚本中使用的显示标签
    pub fn label(&self) -> &'static str {
        match self {
            Speaker::Alex => "Alex",
            Speaker::Sam => "Sam",
        }
    }
}

impl std::fmt::Display for Speaker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// 一句带主播归属的台词
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DialogueLine {
    pub speaker: Speaker,
    /// 已去掉标签前缀的台词文本（非空）
    pub utterance: String,
}

/// 有序的对话脚本
///
/// 顺序在全流程中保持不变：脚本顺序 = 合成顺序 = 拼接顺序
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DialogueScript {
    lines: Vec<DialogueLine>,
}

impl DialogueScript {
    pub fn new(lines: Vec<DialogueLine>) -> Self {
        Self { lines }
    }

    pub fn lines(&self) -> &[DialogueLine] {
        &self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

impl<'a> IntoIterator for &'a DialogueScript {
    type Item = &'a DialogueLine;
    type IntoIter = std::slice::Iter<'a, DialogueLine>;

    fn into_iter(self) -> Self::IntoIter {
        self.lines.iter()
    }
}

/// 分词结果
#[derive(Debug, Clone)]
pub struct ParsedScript {
    pub script: DialogueScript,
    /// 非空但没有可识别主播标签、被跳过的行数
    pub skipped_lines: usize,
}

/// 尝试把一行解析为 `(主播, 台词)`
///
/// 标签必须精确匹配（区分大小写），其后紧跟冒号；行首空白可以容忍。
fn match_dialogue_line(line: &str) -> Option<(Speaker, &str)> {
    for speaker in Speaker::ALL {
        if let Some(rest) = line.strip_prefix(speaker.label()) {
            if let Some(utterance) = rest.strip_prefix(LABEL_DELIMITER) {
                return Some((speaker, utterance.trim()));
            }
        }
    }
    None
}

/// 把自由文本补全解析为对话脚本
///
/// 逐行扫描：
/// - 空行跳过（不计数）
/// - 无法识别的行跳过并计数（调用方决定是否记录）
/// - 去掉标签后为空的行同样跳过
pub fn parse_script(completion: &str) -> ParsedScript {
    let mut lines = Vec::new();
    let mut skipped = 0usize;

    for raw_line in completion.lines() {
        let line = raw_line.trim();
        if line.is_empty() {
            continue;
        }

        match match_dialogue_line(line) {
            Some((speaker, utterance)) if !utterance.is_empty() => {
                lines.push(DialogueLine {
                    speaker,
                    utterance: utterance.to_string(),
                });
            }
            _ => skipped += 1,
        }
    }

    ParsedScript {
        script: DialogueScript::new(lines),
        skipped_lines: skipped,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_alternating_lines() {
        let completion = "Alex: Did you hear about this?\nSam: Honestly, it surprised me too.";
        let parsed = parse_script(completion);

        assert_eq!(parsed.script.len(), 2);
        assert_eq!(parsed.skipped_lines, 0);
        assert_eq!(parsed.script.lines()[0].speaker, Speaker::Alex);
        assert_eq!(parsed.script.lines()[0].utterance, "Did you hear about this?");
        assert_eq!(parsed.script.lines()[1].speaker, Speaker::Sam);
    }

    #[test]
    fn test_blank_lines_are_skipped_without_counting() {
        let completion = "Alex: Hello.\n\n\nSam: Hi.";
        let parsed = parse_script(completion);

        assert_eq!(parsed.script.len(), 2);
        assert_eq!(parsed.skipped_lines, 0);
    }

    #[test]
    fn test_unrecognized_lines_are_skipped_and_counted() {
        let completion = "Here is your podcast script:\nAlex: Welcome back.\n[intro music]\nSam: Great to be here.";
        let parsed = parse_script(completion);

        assert_eq!(parsed.script.len(), 2);
        assert_eq!(parsed.skipped_lines, 2);
    }

    #[test]
    fn test_label_case_variants_are_not_recognized() {
        let completion = "ALEX: shouting\nalex: whispering\nAlex: normal";
        let parsed = parse_script(completion);

        assert_eq!(parsed.script.len(), 1);
        assert_eq!(parsed.skipped_lines, 2);
        assert_eq!(parsed.script.lines()[0].utterance, "normal");
    }

    #[test]
    fn test_label_without_delimiter_is_not_recognized() {
        let parsed = parse_script("Alex said something");
        assert!(parsed.script.is_empty());
        assert_eq!(parsed.skipped_lines, 1);
    }

    #[test]
    fn test_empty_utterance_after_strip_is_dropped() {
        let parsed = parse_script("Alex:\nSam:   \nAlex: real line");
        assert_eq!(parsed.script.len(), 1);
        assert_eq!(parsed.skipped_lines, 2);
    }

    #[test]
    fn test_leading_whitespace_is_tolerated() {
        let parsed = parse_script("   Sam: indented but valid");
        assert_eq!(parsed.script.len(), 1);
        assert_eq!(parsed.script.lines()[0].speaker, Speaker::Sam);
    }

    #[test]
    fn test_order_is_preserved() {
        let completion = "Sam: one\nAlex: two\nSam: three";
        let parsed = parse_script(completion);

        let speakers: Vec<Speaker> = parsed
            .script
            .lines()
            .iter()
            .map(|l| l.speaker)
            .collect();
        assert_eq!(speakers, vec![Speaker::Sam, Speaker::Alex, Speaker::Sam]);
    }

    #[test]
    fn test_every_parsed_speaker_is_in_the_closed_set() {
        let completion = "Alex: a\nNarrator: b\nSam: c\nBob: d";
        let parsed = parse_script(completion);

        assert_eq!(parsed.script.len(), 2);
        for line in &parsed.script {
            assert!(Speaker::ALL.contains(&line.speaker));
            assert!(!line.utterance.is_empty());
        }
    }
}
