//! Guidance handlers: the three persona-routed actions.
//!
//! Empty input is filtered here; the resolver itself does not validate.

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::Json;
use kindred_core::Category;

use crate::dto::{GuidanceReply, GuidanceRequest, JournalEntry};
use crate::error::AppError;
use crate::state::AppState;

fn unknown_session(id: &str) -> AppError {
    AppError::NotFound(format!("unknown session: {id}"))
}

fn ensure_session(state: &AppState, id: &str) -> Result<(), AppError> {
    if state.sessions.contains_key(id) {
        Ok(())
    } else {
        Err(unknown_session(id))
    }
}

fn validated_message(req: &GuidanceRequest) -> Result<&str, AppError> {
    let message = req.message.trim();
    if message.is_empty() {
        return Err(AppError::BadRequest("message must not be empty".into()));
    }
    Ok(message)
}

/// Crisis de-escalation ("activate guardian").
pub async fn sos(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Json(req): Json<GuidanceRequest>,
) -> Result<Json<GuidanceReply>, AppError> {
    ensure_session(&state, &id)?;
    let message = validated_message(&req)?;
    let result = state.resolver.resolve(message, Category::Crisis).await;
    Ok(Json(result.into()))
}

/// Reflective journaling. The exchange is appended to the session history.
pub async fn journal(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Json(req): Json<GuidanceRequest>,
) -> Result<Json<GuidanceReply>, AppError> {
    ensure_session(&state, &id)?;
    let message = validated_message(&req)?.to_string();

    let reply: GuidanceReply = state
        .resolver
        .resolve(&message, Category::Reflection)
        .await
        .into();

    if let Some(mut session) = state.sessions.get_mut(&id) {
        session.journal.push(JournalEntry {
            user: message,
            agent_name: reply.agent_name.clone(),
            content: reply.content.clone(),
        });
    }

    Ok(Json(reply))
}

/// Journal history, newest first.
pub async fn journal_history(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<Vec<JournalEntry>>, AppError> {
    let session = state.sessions.get(&id).ok_or_else(|| unknown_session(&id))?;
    Ok(Json(session.journal.iter().rev().cloned().collect()))
}

/// General coaching question. The optional context key is routed through
/// the category mapping; unknown keys land on the general persona.
pub async fn ask(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Json(req): Json<GuidanceRequest>,
) -> Result<Json<GuidanceReply>, AppError> {
    ensure_session(&state, &id)?;
    let message = validated_message(&req)?;
    let category = req
        .context
        .as_deref()
        .map(Category::from_context)
        .unwrap_or_default();
    let result = state.resolver.resolve(message, category).await;
    Ok(Json(result.into()))
}
