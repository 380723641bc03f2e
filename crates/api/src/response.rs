//! Response body types for the notes endpoints.

use notes_core::types::DbId;
use serde::Serialize;

/// Body of `201 Created` after inserting a note.
#[derive(Debug, Serialize)]
pub struct CreatedResponse<T: Serialize> {
    pub id: DbId,
    pub message: &'static str,
    pub note: T,
}

/// Body of a successful update or delete: `{ "message", "id" }`.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
    pub id: DbId,
}
