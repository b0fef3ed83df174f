//! Podcast Handlers - 表单渲染与流水线触发

use axum::{
    extract::State,
    response::Html,
    Form,
};
use serde::Deserialize;
use std::sync::Arc;

use crate::domain::{AcquireMode, GenerationRequest, LengthTier};
use crate::infrastructure::http::state::AppState;
use crate::infrastructure::http::views::{render_page, PageView, ResultView};

/// 输入模式选择
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InputMode {
    #[default]
    Text,
    Url,
}

/// 提交表单字段
#[derive(Debug, Deserialize)]
pub struct GenerateForm {
    #[serde(default)]
    pub mode: InputMode,
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub length: LengthTier,
}

impl GenerateForm {
    fn acquire_mode(&self) -> AcquireMode {
        match self.mode {
            InputMode::Text => AcquireMode::Pasted {
                text: self.text.clone(),
            },
            InputMode::Url => AcquireMode::Url {
                url: self.url.trim().to_string(),
            },
        }
    }
}

/// GET / - 渲染空表单
pub async fn show_form() -> Html<String> {
    Html(render_page(&PageView::default()))
}

/// POST / - 运行完整流水线并渲染结果或错误页
///
/// 整个请求同步阻塞到流水线结束；失败时回显用户输入
pub async fn generate_podcast(
    State(state): State<Arc<AppState>>,
    Form(form): Form<GenerateForm>,
) -> Html<String> {
    let request = GenerationRequest {
        mode: form.acquire_mode(),
        tier: form.length,
    };

    match state.pipeline.run(request).await {
        Ok(job) => Html(render_page(&PageView {
            text: &form.text,
            url: &form.url,
            use_url: form.mode == InputMode::Url,
            tier: form.length,
            error: None,
            result: Some(ResultView {
                job_id: job.job_id,
                script: &job.script,
                created_at: job.created_at,
                audio_bytes: job.audio_bytes,
            }),
        })),
        Err(e) => {
            tracing::warn!(error = %e, "Pipeline failed");
            Html(render_page(&PageView {
                text: &form.text,
                url: &form.url,
                use_url: form.mode == InputMode::Url,
                tier: form.length,
                error: Some(&e.user_message()),
                result: None,
            }))
        }
    }
}
