//! LLM Adapters

mod fake_llm_client;
mod gemini_client;

pub use fake_llm_client::{FakeLlmClient, FakeLlmClientConfig};
pub use gemini_client::{GeminiClient, GeminiClientConfig};
