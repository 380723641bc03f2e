//! Handlers for the notes resource.
//!
//! Each handler validates its input before touching the store, issues a
//! single repository call, and maps the outcome to a status code and JSON
//! body. Store failures become `500 { "error": "Failed to <action>" }`.

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use notes_core::error::CoreError;
use notes_core::notes::{parse_note_id, NOTE_ENTITY};
use notes_core::types::DbId;
use notes_db::models::note::{CreateNote, NotePayload, UpdateNote};
use notes_db::repositories::NoteRepo;

use crate::error::{AppError, AppResult};
use crate::extract::{AppJson, AppPath};
use crate::query::SearchParams;
use crate::response::{CreatedResponse, MessageResponse};
use crate::state::AppState;

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: NOTE_ENTITY,
        id,
    })
}

/// GET /notes?search=
///
/// List all notes newest first, optionally filtered by a substring of the
/// title, category, or description.
pub async fn list_notes(
    State(state): State<AppState>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> AppResult<impl IntoResponse> {
    let params = SearchParams::from_pairs(pairs);
    let notes = NoteRepo::list(state.store.pool(), params.search.as_deref())
        .await
        .map_err(AppError::persistence("retrieve notes"))?;

    Ok(Json(notes))
}

/// POST /notes
///
/// Create a note. `title` and `description` are required; `category`
/// defaults to `Others`.
pub async fn create_note(
    State(state): State<AppState>,
    AppJson(payload): AppJson<NotePayload>,
) -> AppResult<impl IntoResponse> {
    let input = CreateNote::try_from(&payload)?;

    let note = NoteRepo::create(state.store.pool(), &input)
        .await
        .map_err(AppError::persistence("create note"))?;

    tracing::info!(note_id = note.id, category = %note.category, "Note created");

    Ok((
        StatusCode::CREATED,
        Json(CreatedResponse {
            id: note.id,
            message: "Note created successfully",
            note,
        }),
    ))
}

/// PUT /notes/{id}
///
/// Replace a note's title and description. A blank or absent `category`
/// leaves the stored one untouched.
pub async fn update_note(
    State(state): State<AppState>,
    AppPath(raw_id): AppPath<String>,
    AppJson(payload): AppJson<NotePayload>,
) -> AppResult<impl IntoResponse> {
    let id = parse_note_id(&raw_id)?;
    let input = UpdateNote::try_from(&payload)?;

    let changed = NoteRepo::update(state.store.pool(), id, &input)
        .await
        .map_err(AppError::persistence("update note"))?;
    if changed == 0 {
        return Err(not_found(id));
    }

    tracing::info!(note_id = id, "Note updated");

    Ok(Json(MessageResponse {
        message: "Note updated successfully",
        id,
    }))
}

/// DELETE /notes/{id}
///
/// Hard-delete a note.
pub async fn delete_note(
    State(state): State<AppState>,
    AppPath(raw_id): AppPath<String>,
) -> AppResult<impl IntoResponse> {
    let id = parse_note_id(&raw_id)?;

    let changed = NoteRepo::delete(state.store.pool(), id)
        .await
        .map_err(AppError::persistence("delete note"))?;
    if changed == 0 {
        return Err(not_found(id));
    }

    tracing::info!(note_id = id, "Note deleted");

    Ok(Json(MessageResponse {
        message: "Note deleted successfully",
        id,
    }))
}

/// Fallback for unmatched paths and unsupported methods.
pub async fn route_not_found() -> AppError {
    AppError::RouteNotFound
}
