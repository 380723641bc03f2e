pub mod health;
pub mod notes;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /notes                  list (?search), create
/// /notes/{id}             update, delete
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new().merge(notes::router())
}
