//! Remote generation client for the companion system.
//!
//! One provider is supported: Google's Generative Language API, accessed
//! through [`GeminiClient`]. The [`Generate`] trait is the seam the resolver
//! depends on, so tests can substitute a stub backend.

mod gemini;

use async_trait::async_trait;
use kindred_core::CoachError;

pub use gemini::{plausible_api_key, GeminiClient};

/// Timing and token accounting for one generation call.
#[derive(Debug, Clone, Default)]
pub struct LlmMetrics {
    pub input_tokens: u32,
    pub output_tokens: u32,
    pub elapsed_ms: u64,
}

/// A completed generation call.
#[derive(Debug, Clone)]
pub struct LlmResponse {
    pub content: String,
    pub metrics: LlmMetrics,
}

/// A backend that can turn a system prompt plus user input into text.
#[async_trait]
pub trait Generate: Send + Sync {
    async fn complete(&self, system_prompt: &str, user_input: &str)
        -> Result<LlmResponse, CoachError>;
}
