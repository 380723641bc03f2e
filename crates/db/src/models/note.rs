//! Note model.

use notes_core::error::CoreError;
use notes_core::notes::{category_or_default, normalize_category, validate_note_fields};
use notes_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `notes` table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, FromRow)]
pub struct Note {
    pub id: DbId,
    pub title: String,
    pub description: String,
    pub category: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Request body for creating or updating a note, as sent by the client.
///
/// Every field is optional here; required-ness is checked when converting
/// into [`CreateNote`] or [`UpdateNote`].
#[derive(Debug, Default, Deserialize)]
pub struct NotePayload {
    pub title: Option<String>,
    pub description: Option<String>,
    pub category: Option<String>,
}

/// Validated DTO for inserting a note.
#[derive(Debug, Clone)]
pub struct CreateNote {
    pub title: String,
    pub description: String,
    pub category: String,
}

/// Validated DTO for updating a note.
///
/// `category: None` keeps the stored category.
#[derive(Debug, Clone)]
pub struct UpdateNote {
    pub title: String,
    pub description: String,
    pub category: Option<String>,
}

impl TryFrom<&NotePayload> for CreateNote {
    type Error = CoreError;

    fn try_from(payload: &NotePayload) -> Result<Self, Self::Error> {
        let (title, description) =
            validate_note_fields(payload.title.as_deref(), payload.description.as_deref())?;
        Ok(Self {
            title,
            description,
            category: category_or_default(payload.category.as_deref()),
        })
    }
}

impl TryFrom<&NotePayload> for UpdateNote {
    type Error = CoreError;

    fn try_from(payload: &NotePayload) -> Result<Self, Self::Error> {
        let (title, description) =
            validate_note_fields(payload.title.as_deref(), payload.description.as_deref())?;
        Ok(Self {
            title,
            description,
            category: normalize_category(payload.category.as_deref()),
        })
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    fn payload(title: &str, description: &str, category: Option<&str>) -> NotePayload {
        NotePayload {
            title: Some(title.to_string()),
            description: Some(description.to_string()),
            category: category.map(str::to_string),
        }
    }

    #[test]
    fn create_defaults_blank_category() {
        let input = CreateNote::try_from(&payload(" Buy milk ", "2%", Some("  "))).unwrap();
        assert_eq!(input.title, "Buy milk");
        assert_eq!(input.category, "Others");
    }

    #[test]
    fn update_keeps_absent_category_unset() {
        let input = UpdateNote::try_from(&payload("Buy milk", "2%", None)).unwrap();
        assert_eq!(input.category, None);
    }

    #[test]
    fn empty_payload_rejected() {
        assert_matches!(
            CreateNote::try_from(&NotePayload::default()),
            Err(CoreError::Validation(_))
        );
        assert_matches!(
            UpdateNote::try_from(&NotePayload::default()),
            Err(CoreError::Validation(_))
        );
    }
}
