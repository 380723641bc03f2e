//! Route definitions for the notes resource.
//!
//! Mounted under `/api` by `api_routes()`.

use axum::routing::{get, put};
use axum::Router;

use crate::handlers::notes;
use crate::state::AppState;

/// Note routes.
///
/// ```text
/// GET    /notes              -> list_notes (?search)
/// POST   /notes              -> create_note
/// PUT    /notes/{id}         -> update_note
/// DELETE /notes/{id}         -> delete_note
/// ```
///
/// Unsupported methods on these paths answer like unknown routes.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/notes", get(notes::list_notes).post(notes::create_note))
        .route(
            "/notes/{id}",
            put(notes::update_note).delete(notes::delete_note),
        )
        .method_not_allowed_fallback(notes::route_not_found)
}
