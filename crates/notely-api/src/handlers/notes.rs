//! Save and read handlers for notes.
//!
//! Validation runs before any storage call, so rejected requests never
//! reach a backend.

use crate::error::{HttpAppError, ValidatedJson};
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    response::IntoResponse,
    Json,
};
use notely_core::validation::validate_note;
use notely_core::{Note, ValidationError};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

#[derive(Debug, Deserialize)]
pub struct SaveNoteRequest {
    pub subject: String,
    pub content: String,
}

#[derive(Debug, Serialize)]
pub struct SaveNoteResponse {
    pub message: String,
    pub subject: String,
    pub word_count: usize,
}

/// POST /api/save
pub async fn save_note(
    State(state): State<Arc<AppState>>,
    ValidatedJson(request): ValidatedJson<SaveNoteRequest>,
) -> Result<impl IntoResponse, HttpAppError> {
    let validated = validate_note(&request.subject, &request.content)?;

    let key = state
        .storage
        .save(&validated.subject, &validated.content)
        .await?;

    tracing::info!(
        subject = %validated.subject,
        key = %key,
        word_count = validated.word_count,
        "Note saved"
    );

    Ok(Json(SaveNoteResponse {
        message: "Content saved successfully".to_string(),
        subject: validated.subject,
        word_count: validated.word_count,
    }))
}

/// GET /api/read/{subject}
pub async fn read_note(
    State(state): State<Arc<AppState>>,
    Path(subject): Path<String>,
) -> Result<impl IntoResponse, HttpAppError> {
    let subject = subject.trim().to_string();
    if subject.is_empty() {
        return Err(ValidationError::EmptySubject.into());
    }

    let content = state.storage.load(&subject).await?;

    // word_count is never persisted; Note::new recomputes it from the
    // stored text.
    Ok(Json(Note::new(subject, content)))
}
