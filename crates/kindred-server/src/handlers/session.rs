//! Session lifecycle, day counter, and check-in handlers.

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::Json;
use chrono::Local;
use kindred_core::CheckInRecord;
use tracing::info;

use crate::dto::{CheckInRequest, CreateSessionResponse, DayResponse, SessionSummary};
use crate::error::AppError;
use crate::state::AppState;

fn unknown_session(id: &str) -> AppError {
    AppError::NotFound(format!("unknown session: {id}"))
}

pub async fn create(State(state): State<Arc<AppState>>) -> Json<CreateSessionResponse> {
    let session_id = state.create_session();
    info!("SHELL: created session {}", session_id);
    Json(CreateSessionResponse { session_id })
}

pub async fn summary(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<SessionSummary>, AppError> {
    let session = state.sessions.get(&id).ok_or_else(|| unknown_session(&id))?;
    Ok(Json(SessionSummary {
        days_in_recovery: session.days_in_recovery,
        check_ins: session.check_ins.clone(),
        journal_entries: session.journal.len(),
    }))
}

pub async fn add_day(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<DayResponse>, AppError> {
    let mut session = state.sessions.get_mut(&id).ok_or_else(|| unknown_session(&id))?;
    session.days_in_recovery += 1;
    Ok(Json(DayResponse {
        days_in_recovery: session.days_in_recovery,
    }))
}

pub async fn check_in(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Json(req): Json<CheckInRequest>,
) -> Result<Json<CheckInRecord>, AppError> {
    if !(1..=10).contains(&req.mood) || !(1..=10).contains(&req.urge) {
        return Err(AppError::BadRequest(
            "mood and urge must be between 1 and 10".into(),
        ));
    }

    let mut session = state.sessions.get_mut(&id).ok_or_else(|| unknown_session(&id))?;
    let record = CheckInRecord {
        date: Local::now().date_naive(),
        mood: req.mood,
        urge: req.urge,
    };
    session.check_ins.push(record.clone());
    Ok(Json(record))
}

pub async fn check_ins(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<Vec<CheckInRecord>>, AppError> {
    let session = state.sessions.get(&id).ok_or_else(|| unknown_session(&id))?;
    Ok(Json(session.check_ins.clone()))
}
