//! Gemini (Generative Language API) client.

use std::time::{Duration, Instant};

use async_trait::async_trait;
use kindred_core::CoachError;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::{Generate, LlmMetrics, LlmResponse};

const GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta/models";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Superficial well-formedness check for a Google API key: non-empty and
/// carrying the `AIza` prefix Google issues. A key that fails this check is
/// never sent anywhere.
pub fn plausible_api_key(key: &str) -> bool {
    let key = key.trim();
    !key.is_empty() && key.starts_with("AIza")
}

#[derive(Serialize)]
struct Part {
    text: String,
}

#[derive(Serialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    temperature: f32,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateRequest {
    system_instruction: Content,
    contents: Vec<Content>,
    generation_config: GenerationConfig,
}

#[derive(Deserialize)]
struct ResponsePart {
    text: Option<String>,
}

#[derive(Deserialize)]
struct ResponseContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Option<ResponseContent>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct UsageMetadata {
    prompt_token_count: Option<u32>,
    candidates_token_count: Option<u32>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
    usage_metadata: Option<UsageMetadata>,
}

/// Concatenates the text parts of the first candidate. Parsing is separated
/// from transport so it can be unit tested against captured payloads.
fn extract_text(response: &GenerateResponse) -> Result<String, CoachError> {
    let text: String = response
        .candidates
        .first()
        .and_then(|c| c.content.as_ref())
        .map(|content| {
            content
                .parts
                .iter()
                .filter_map(|p| p.text.as_deref())
                .collect::<Vec<_>>()
                .join("")
        })
        .unwrap_or_default();

    if text.trim().is_empty() {
        return Err(CoachError::EmptyCompletion);
    }
    Ok(text)
}

/// Client for Gemini's `generateContent` endpoint.
pub struct GeminiClient {
    client: Client,
    model: String,
    api_key: String,
}

impl GeminiClient {
    pub fn new(api_key: &str, model: &str) -> Self {
        Self {
            client: Client::new(),
            model: model.to_string(),
            api_key: api_key.to_string(),
        }
    }

    async fn generate(
        &self,
        system_prompt: &str,
        user_input: &str,
    ) -> Result<LlmResponse, CoachError> {
        let start = Instant::now();

        let request = GenerateRequest {
            system_instruction: Content {
                parts: vec![Part { text: system_prompt.to_string() }],
            },
            contents: vec![Content {
                parts: vec![Part { text: user_input.to_string() }],
            }],
            generation_config: GenerationConfig { temperature: 0.7 },
        };

        let url = format!("{}/{}:generateContent", GEMINI_API_BASE, self.model);
        let response = self
            .client
            .post(&url)
            .timeout(REQUEST_TIMEOUT)
            .header("x-goog-api-key", &self.api_key)
            .header("content-type", "application/json")
            .json(&request)
            .send()
            .await
            .map_err(|e| CoachError::Generation(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(CoachError::Generation(format!(
                "Gemini API error {}: {}",
                status, body
            )));
        }

        let resp: GenerateResponse = response
            .json()
            .await
            .map_err(|e| CoachError::Generation(e.to_string()))?;

        let content = extract_text(&resp)?;

        let (input_tokens, output_tokens) = resp
            .usage_metadata
            .map(|u| {
                (
                    u.prompt_token_count.unwrap_or(0),
                    u.candidates_token_count.unwrap_or(0),
                )
            })
            .unwrap_or((0, 0));

        let elapsed_ms = start.elapsed().as_millis() as u64;
        info!(
            "Gemini: {}ms, tokens: {}/{} (in/out)",
            elapsed_ms, input_tokens, output_tokens
        );

        Ok(LlmResponse {
            content,
            metrics: LlmMetrics {
                input_tokens,
                output_tokens,
                elapsed_ms,
            },
        })
    }
}

#[async_trait]
impl Generate for GeminiClient {
    async fn complete(
        &self,
        system_prompt: &str,
        user_input: &str,
    ) -> Result<LlmResponse, CoachError> {
        self.generate(system_prompt, user_input).await
    }
}
