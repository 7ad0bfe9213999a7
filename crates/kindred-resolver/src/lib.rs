//! The response resolver: persona selection, a single generation attempt,
//! and randomized canned degradation when the attempt fails.
//!
//! The resolver never raises past its boundary. Callers always receive a
//! populated [`ResolutionResult`]; the `source` tag records which path
//! produced it.

use std::sync::Arc;

use kindred_core::{Category, CoachError, Persona, ResolutionResult};
use kindred_llm::{plausible_api_key, GeminiClient, Generate};
use kindred_personas::{persona_for, pick_fallback, system_prompt};
use tracing::{info, warn};

/// Explicit construction inputs for the resolver. The credential comes from
/// the host's configuration loading; it is never read from globals here.
/// No `Debug` impl: the credential must stay out of logs.
#[derive(Clone)]
pub struct ResolverConfig {
    pub api_key: String,
    pub model: String,
}

impl ResolverConfig {
    pub fn new(api_key: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            model: model.into(),
        }
    }
}

/// Routes free text to a persona and produces exactly one response per call.
///
/// Whether live generation is usable is decided once at construction and
/// never revisited: a missing or malformed credential means every call for
/// the process lifetime goes straight to the fallback pool.
pub struct Resolver {
    generator: Option<Arc<dyn Generate>>,
}

impl Resolver {
    pub fn new(config: &ResolverConfig) -> Self {
        let generator: Option<Arc<dyn Generate>> = if plausible_api_key(&config.api_key) {
            info!("RESOLVER: live generation enabled (model: {})", config.model);
            Some(Arc::new(GeminiClient::new(&config.api_key, &config.model)))
        } else {
            warn!("RESOLVER: credential missing or malformed, serving canned responses only");
            None
        };
        Self { generator }
    }

    /// Builds a resolver around an explicit backend. Used by tests to drive
    /// the live path without a network.
    pub fn with_generator(generator: Arc<dyn Generate>) -> Self {
        Self {
            generator: Some(generator),
        }
    }

    /// Whether live generation is available. Read once by the shell at
    /// startup to decide on its configuration warning banner.
    pub fn is_configured(&self) -> bool {
        self.generator.is_some()
    }

    /// Resolves free text against a category: one generation attempt, then
    /// the category's fallback pool on any failure. Input validation is the
    /// caller's responsibility.
    pub async fn resolve(&self, user_text: &str, category: Category) -> ResolutionResult {
        let persona = persona_for(category);

        match self.try_generate(persona, user_text).await {
            Ok(content) => {
                info!("RESOLVER: {} responded live", persona.name);
                ResolutionResult::live(persona, content)
            }
            Err(e) => {
                warn!(
                    "RESOLVER: {} falling back to canned response: {}",
                    persona.name, e
                );
                ResolutionResult::canned(persona, pick_fallback(category))
            }
        }
    }

    async fn try_generate(
        &self,
        persona: &Persona,
        user_text: &str,
    ) -> Result<String, CoachError> {
        let generator = self.generator.as_ref().ok_or(CoachError::NotConfigured)?;

        let response = generator
            .complete(&system_prompt(persona), user_text)
            .await?;

        if response.content.trim().is_empty() {
            return Err(CoachError::EmptyCompletion);
        }
        Ok(response.content)
    }
}
