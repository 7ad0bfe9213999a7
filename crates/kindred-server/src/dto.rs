//! Data transfer objects for HTTP message serialization.

use kindred_core::{CheckInRecord, ResolutionResult};
use serde::{Deserialize, Serialize};

/// Response from session creation.
#[derive(Debug, Serialize, Deserialize)]
pub struct CreateSessionResponse {
    pub session_id: String,
}

/// Session summary for the sidebar.
#[derive(Debug, Serialize, Deserialize)]
pub struct SessionSummary {
    pub days_in_recovery: u32,
    pub check_ins: Vec<CheckInRecord>,
    pub journal_entries: usize,
}

/// Response from the day-counter increment.
#[derive(Debug, Serialize, Deserialize)]
pub struct DayResponse {
    pub days_in_recovery: u32,
}

/// Request body for a daily check-in.
#[derive(Debug, Deserialize)]
pub struct CheckInRequest {
    pub mood: u8,
    pub urge: u8,
}

/// Request body for the guidance endpoints (sos / journal / ask).
#[derive(Debug, Deserialize)]
pub struct GuidanceRequest {
    pub message: String,
    #[serde(default)]
    pub context: Option<String>,
}

/// A coaching reply. This is the entire resolver boundary as seen by
/// clients: the internal response source is not serialized.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GuidanceReply {
    pub agent_name: String,
    pub content: String,
}

impl From<ResolutionResult> for GuidanceReply {
    fn from(result: ResolutionResult) -> Self {
        Self {
            agent_name: result.persona_name,
            content: result.content,
        }
    }
}

/// One journal exchange kept in the session history.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JournalEntry {
    pub user: String,
    pub agent_name: String,
    pub content: String,
}

/// Startup configuration visibility for the warning banner.
#[derive(Debug, Serialize, Deserialize)]
pub struct StatusResponse {
    pub configured: bool,
}

/// A static crisis-resource entry.
#[derive(Debug, Serialize, Deserialize)]
pub struct ResourceEntry {
    pub label: String,
    pub contact: String,
}
