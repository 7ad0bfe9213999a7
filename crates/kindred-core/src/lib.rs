//! Core domain types and error definitions.
//!
//! This crate defines the types shared across the companion system:
//! interaction categories, personas, resolution results, and check-in
//! records.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur while producing a coaching response.
///
/// Every variant is recoverable: the resolver converts all of them into a
/// canned fallback response at its boundary.
#[derive(Error, Debug)]
pub enum CoachError {
    #[error("generation request failed: {0}")]
    Generation(String),

    #[error("generation backend is not configured")]
    NotConfigured,

    #[error("backend returned an empty completion")]
    EmptyCompletion,
}

/// Classification of an interaction, driving persona and fallback-pool
/// selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Crisis,
    Reflection,
    #[default]
    General,
}

impl Category {
    /// Maps a shell context key to a category. Unknown keys route to
    /// [`Category::General`]; there is no unmapped category.
    pub fn from_context(context: &str) -> Category {
        match context.trim().to_lowercase().as_str() {
            "sos" => Category::Crisis,
            "journal" => Category::Reflection,
            _ => Category::General,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Crisis => "crisis",
            Category::Reflection => "reflection",
            Category::General => "general",
        }
    }
}

/// A fixed role/tone template applied to generation requests.
///
/// Personas are defined once as constants and live for the process lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Persona {
    pub name: &'static str,
    pub goal: &'static str,
    pub backstory: &'static str,
}

/// Which path produced a resolution: a live generation call or a canned
/// fallback string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResponseSource {
    Live,
    Canned,
}

/// The outcome of one resolution request. `content` is always populated,
/// by one path or the other.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResolutionResult {
    pub persona_name: String,
    pub content: String,
    pub source: ResponseSource,
}

impl ResolutionResult {
    /// Creates a result from a successful generation call.
    pub fn live(persona: &Persona, content: String) -> Self {
        Self {
            persona_name: persona.name.to_string(),
            content,
            source: ResponseSource::Live,
        }
    }

    /// Creates a result from the fallback pool.
    pub fn canned(persona: &Persona, content: impl Into<String>) -> Self {
        Self {
            persona_name: persona.name.to_string(),
            content: content.into(),
            source: ResponseSource::Canned,
        }
    }
}

/// One daily mood/urge check-in, owned by the dashboard shell.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckInRecord {
    pub date: NaiveDate,
    pub mood: u8,
    pub urge: u8,
}
