//! Application and session state.

use std::env;

use chrono::{Duration, Local};
use dashmap::DashMap;
use kindred_core::CheckInRecord;
use kindred_resolver::{Resolver, ResolverConfig};
use uuid::Uuid;

use crate::dto::JournalEntry;

const DEFAULT_MODEL: &str = "gemini-1.5-flash";

/// Ephemeral UI state for one dashboard session. Only the shell mutates it.
#[derive(Debug, Default)]
pub struct SessionState {
    pub days_in_recovery: u32,
    pub check_ins: Vec<CheckInRecord>,
    pub journal: Vec<JournalEntry>,
}

impl SessionState {
    /// A fresh session pre-populated with the demo check-in trend.
    fn seeded() -> Self {
        let today = Local::now().date_naive();
        let check_ins = [(3, 6, 4), (2, 7, 2), (1, 5, 5)]
            .into_iter()
            .map(|(days_ago, mood, urge)| CheckInRecord {
                date: today - Duration::days(days_ago),
                mood,
                urge,
            })
            .collect();

        Self {
            days_in_recovery: 0,
            check_ins,
            journal: Vec::new(),
        }
    }
}

/// Shared server state: the resolver plus the in-memory session store.
pub struct AppState {
    pub resolver: Resolver,
    pub sessions: DashMap<String, SessionState>,
}

impl AppState {
    pub fn new(resolver: Resolver) -> Self {
        Self {
            resolver,
            sessions: DashMap::new(),
        }
    }

    /// Reads the credential and model from the environment and constructs
    /// the resolver once for the process lifetime.
    pub fn from_env() -> Self {
        let api_key = env::var("GEMINI_API_KEY").unwrap_or_default();
        let model = env::var("GEMINI_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string());
        Self::new(Resolver::new(&ResolverConfig::new(api_key, model)))
    }

    /// Creates a new seeded session and returns its id.
    pub fn create_session(&self) -> String {
        let id = Uuid::new_v4().to_string();
        self.sessions.insert(id.clone(), SessionState::seeded());
        id
    }
}
