//! Generative provider boundary.
//!
//! The enrichment gateway only needs one capability: turn a system instruction
//! and a prompt into text. [`TextCompletion`] is that seam; [`OpenAiProvider`]
//! implements it against any OpenAI-compatible chat-completions endpoint.

mod openai;

pub use openai::OpenAiProvider;

use crate::Result;
use async_trait::async_trait;

/// A single text-completion request.
#[derive(Debug, Clone)]
pub struct CompletionRequest {
    pub system: String,
    pub prompt: String,
    pub max_tokens: u32,
    pub temperature: f64,
}

/// Opaque text-completion capability.
#[async_trait]
pub trait TextCompletion: Send + Sync {
    async fn complete(&self, request: CompletionRequest) -> Result<String>;
    fn name(&self) -> &'static str;
}
