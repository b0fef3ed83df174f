//! HTML Views
//!
//! 提交表单与结果页的渲染。整个服务只有一张页面：表单常驻，
//! 下面按本次请求的结果追加播放器或错误提示。

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::domain::{DialogueScript, LengthTier};

/// 页面渲染上下文
pub struct PageView<'a> {
    /// 回显的粘贴文本
    pub text: &'a str,
    /// 回显的 URL
    pub url: &'a str,
    /// 是否选中 URL 模式
    pub use_url: bool,
    /// 选中的时长档位
    pub tier: LengthTier,
    /// 本次请求的错误提示
    pub error: Option<&'a str>,
    /// 本次请求的成功结果
    pub result: Option<ResultView<'a>>,
}

impl Default for PageView<'_> {
    fn default() -> Self {
        Self {
            text: "",
            url: "",
            use_url: false,
            tier: LengthTier::default(),
            error: None,
            result: None,
        }
    }
}

/// 成功结果的展示数据
pub struct ResultView<'a> {
    pub job_id: Uuid,
    pub script: &'a DialogueScript,
    pub created_at: DateTime<Utc>,
    pub audio_bytes: u64,
}

/// HTML 转义（属性值与文本节点通用）
fn escape_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

fn checked(flag: bool) -> &'static str {
    if flag {
        " checked"
    } else {
        ""
    }
}

fn selected(flag: bool) -> &'static str {
    if flag {
        " selected"
    } else {
        ""
    }
}

fn render_tier_options(current: LengthTier) -> String {
    [LengthTier::Short, LengthTier::Medium, LengthTier::Long]
        .iter()
        .map(|tier| {
            format!(
                r#"<option value="{value}"{sel}>{value} (~{words} words)</option>"#,
                value = tier.as_str(),
                sel = selected(*tier == current),
                words = tier.target_words(),
            )
        })
        .collect()
}

fn render_script(script: &DialogueScript) -> String {
    script
        .lines()
        .iter()
        .map(|line| {
            format!(
                r#"<p class="line"><b>{}:</b> {}</p>"#,
                line.speaker,
                escape_html(&line.utterance)
            )
        })
        .collect()
}

fn render_result(result: &ResultView) -> String {
    format!(
        r#"<div class="result">
  <h3>Your podcast is ready</h3>
  <p class="meta">generated at {created} &middot; {kb} KB</p>
  <audio controls autoplay>
    <source src="/audio/{job_id}" type="audio/mpeg">
  </audio>
  <a class="download" href="/download/{job_id}">Download MP3</a>
  <div class="script">{script}</div>
</div>"#,
        created = result.created_at.format("%Y-%m-%d %H:%M UTC"),
        kb = result.audio_bytes / 1024,
        job_id = result.job_id,
        script = render_script(result.script),
    )
}

/// 渲染整张页面
pub fn render_page(view: &PageView) -> String {
    let error_block = view
        .error
        .map(|msg| format!(r#"<div class="error">{}</div>"#, escape_html(msg)))
        .unwrap_or_default();

    let result_block = view
        .result
        .as_ref()
        .map(render_result)
        .unwrap_or_default();

    format!(
        r#"<!DOCTYPE html>
<html>
<head>
<meta charset="utf-8">
<title>Podgen - Text to Podcast</title>
<style>
  body {{ font-family: -apple-system, "Segoe UI", Roboto, sans-serif; max-width: 760px;
         margin: 0 auto; padding: 40px 20px; background: #0f0f0f; color: #fff; }}
  h1 {{ text-align: center; margin-bottom: 0.25rem; }}
  .subtitle {{ text-align: center; color: #888; margin-bottom: 2rem; }}
  textarea, input[type=url], select {{ width: 100%; padding: 12px; border: 1px solid #333;
         border-radius: 8px; background: #1a1a1a; color: #fff; font-size: 15px; }}
  textarea {{ height: 180px; resize: vertical; }}
  .field {{ margin-top: 12px; }}
  .modes {{ margin-top: 12px; color: #aaa; }}
  button {{ width: 100%; margin-top: 16px; padding: 14px; font-size: 17px; border: none;
         border-radius: 8px; background: #0066ff; color: #fff; cursor: pointer; }}
  button:hover {{ background: #0052cc; }}
  .result {{ margin-top: 32px; padding: 24px; background: #1a1a1a; border-radius: 8px; }}
  .result audio {{ width: 100%; margin: 12px 0; }}
  .download {{ color: #22c55e; }}
  .script {{ margin-top: 16px; color: #ccc; }}
  .meta {{ color: #888; font-size: 13px; }}
  .error {{ margin-top: 24px; padding: 16px; background: #1a1a1a; border-radius: 8px; color: #ff4444; }}
</style>
</head>
<body>
<h1>Podgen</h1>
<p class="subtitle">Paste text or a link - get a two-host podcast</p>

<form method="POST" action="/">
  <div class="modes">
    <label><input type="radio" name="mode" value="text"{text_checked}> Paste text</label>
    <label><input type="radio" name="mode" value="url"{url_checked}> From URL</label>
  </div>
  <div class="field">
    <textarea name="text" placeholder="Paste your article, news, or any text here...">{text}</textarea>
  </div>
  <div class="field">
    <input type="url" name="url" placeholder="https://example.com/article" value="{url}">
  </div>
  <div class="field">
    <select name="length">{tier_options}</select>
  </div>
  <button type="submit">Generate Podcast</button>
</form>

{error_block}
{result_block}
</body>
</html>"#,
        text_checked = checked(!view.use_url),
        url_checked = checked(view.use_url),
        text = escape_html(view.text),
        url = escape_html(view.url),
        tier_options = render_tier_options(view.tier),
        error_block = error_block,
        result_block = result_block,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{DialogueLine, Speaker};

    #[test]
    fn test_escape_html() {
        assert_eq!(
            escape_html(r#"<b>"a" & 'b'</b>"#),
            "&lt;b&gt;&quot;a&quot; &amp; &#39;b&#39;&lt;/b&gt;"
        );
    }

    #[test]
    fn test_empty_page_has_form_and_no_result() {
        let html = render_page(&PageView::default());
        assert!(html.contains("<form method=\"POST\""));
        assert!(html.contains("name=\"length\""));
        assert!(!html.contains("class=\"result\""));
        assert!(!html.contains("class=\"error\""));
    }

    #[test]
    fn test_error_page_echoes_input() {
        let view = PageView {
            text: "my <script> text",
            error: Some("Please enter more text (at least 50 characters)."),
            ..Default::default()
        };
        let html = render_page(&view);

        assert!(html.contains("class=\"error\""));
        assert!(html.contains("my &lt;script&gt; text"));
        assert!(!html.contains("my <script> text"));
    }

    #[test]
    fn test_result_page_links_job_endpoints() {
        let script = DialogueScript::new(vec![DialogueLine {
            speaker: Speaker::Alex,
            utterance: "Hello world".to_string(),
        }]);
        let job_id = Uuid::new_v4();
        let view = PageView {
            result: Some(ResultView {
                job_id,
                script: &script,
                created_at: Utc::now(),
                audio_bytes: 4096,
            }),
            ..Default::default()
        };

        let html = render_page(&view);
        assert!(html.contains(&format!("/audio/{}", job_id)));
        assert!(html.contains(&format!("/download/{}", job_id)));
        assert!(html.contains("<b>Alex:</b> Hello world"));
    }

    #[test]
    fn test_selected_tier_is_marked() {
        let view = PageView {
            tier: LengthTier::Long,
            ..Default::default()
        };
        let html = render_page(&view);
        assert!(html.contains(r#"<option value="long" selected>"#));
    }
}
