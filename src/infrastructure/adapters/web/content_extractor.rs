//! Scraper Content Extractor - 网页正文提取
//!
//! 实现 ContentExtractorPort trait。提取规则：
//! 1. 解析整个文档
//! 2. 按候选容器优先级（语义化容器优先，body 兜底）找第一个
//!    能产出文本的容器
//! 3. 收集可见文本时跳过非正文子树（脚本、样式、导航、页眉页脚、
//!    侧栏、表单控件、内嵌框架）
//! 4. 把连续空白折叠为单个空格

use scraper::{ElementRef, Html, Selector};

use crate::application::ports::ContentExtractorPort;

/// 候选正文容器，从最具体到最宽泛
const CONTENT_SELECTORS: &[&str] = &[
    "article",
    "main",
    "[role=\"main\"]",
    "#content",
    ".content",
    ".post",
    "body",
];

/// 收集文本时整棵跳过的标签
const NOISE_TAGS: &[&str] = &[
    "script", "style", "nav", "header", "footer", "aside", "form", "button", "input", "select",
    "textarea", "iframe", "noscript",
];

fn is_noise_tag(name: &str) -> bool {
    NOISE_TAGS.contains(&name)
}

/// 递归收集一个元素下的可见文本，跳过非正文子树
fn collect_visible_text(element: ElementRef, out: &mut String) {
    for child in element.children() {
        if let Some(text) = child.value().as_text() {
            out.push_str(text);
        } else if let Some(child_element) = ElementRef::wrap(child) {
            if !is_noise_tag(child_element.value().name()) {
                collect_visible_text(child_element, out);
                // 元素边界补一个空格，避免相邻块的词粘连
                out.push(' ');
            }
        }
    }
}

/// 把空白折叠为单个空格
fn collapse_whitespace(raw: &str) -> String {
    raw.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// 基于 scraper 的正文提取器
#[derive(Debug, Default)]
pub struct ScraperExtractor;

impl ScraperExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl ContentExtractorPort for ScraperExtractor {
    fn extract(&self, html: &str) -> Option<String> {
        let document = Html::parse_document(html);

        for selector in CONTENT_SELECTORS
            .iter()
            .filter_map(|s| Selector::parse(s).ok())
        {
            if let Some(container) = document.select(&selector).next() {
                let mut raw = String::new();
                collect_visible_text(container, &mut raw);
                let text = collapse_whitespace(&raw);

                if !text.is_empty() {
                    tracing::debug!(text_len = text.len(), "Content container matched");
                    return Some(text);
                }
            }
        }

        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn extract(html: &str) -> Option<String> {
        ScraperExtractor::new().extract(html)
    }

    #[test]
    fn test_prefers_article_over_body() {
        let html = r#"
            <html><body>
                <div>sidebar junk</div>
                <article><p>The actual story.</p></article>
            </body></html>
        "#;

        assert_eq!(extract(html).unwrap(), "The actual story.");
    }

    #[test]
    fn test_falls_back_to_body() {
        let html = "<html><body><p>Plain page text.</p></body></html>";
        assert_eq!(extract(html).unwrap(), "Plain page text.");
    }

    #[test]
    fn test_strips_scripts_and_navigation() {
        let html = r#"
            <html><body>
                <nav>Home | About</nav>
                <script>var x = "tracking";</script>
                <style>.a { color: red }</style>
                <p>Real content here.</p>
                <footer>copyright</footer>
            </body></html>
        "#;

        let text = extract(html).unwrap();
        assert_eq!(text, "Real content here.");
        assert!(!text.contains("tracking"));
        assert!(!text.contains("Home"));
    }

    #[test]
    fn test_collapses_whitespace_runs() {
        let html = "<html><body><p>spaced\n\n   out\t\ttext</p></body></html>";
        assert_eq!(extract(html).unwrap(), "spaced out text");
    }

    #[test]
    fn test_adjacent_blocks_do_not_join_words() {
        let html = "<html><body><article><p>first</p><p>second</p></article></body></html>";
        assert_eq!(extract(html).unwrap(), "first second");
    }

    #[test]
    fn test_contentless_page_returns_none() {
        let html = "<html><body><script>only()</script><nav>menu</nav></body></html>";
        assert!(extract(html).is_none());
    }

    #[test]
    fn test_empty_input_returns_none() {
        assert!(extract("").is_none());
    }
}
