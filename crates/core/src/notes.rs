//! Note constants and validation functions.
//!
//! Request payloads arrive with every field optional. These helpers decide
//! whether a payload is acceptable and produce the trimmed values that get
//! persisted.

use crate::error::CoreError;
use crate::types::DbId;

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Category assigned when a note is created without one (or with a blank one).
pub const DEFAULT_CATEGORY: &str = "Others";

/// Message returned when `title` or `description` is missing or blank.
pub const REQUIRED_FIELDS_MESSAGE: &str =
    "Title and description are required and cannot be empty";

/// Message returned when a path id is not an integer.
pub const INVALID_ID_MESSAGE: &str = "Invalid note ID";

/// Entity label used in `CoreError::NotFound`.
pub const NOTE_ENTITY: &str = "Note";

// ---------------------------------------------------------------------------
// Validation functions
// ---------------------------------------------------------------------------

/// Validate the required text fields of a note and return them trimmed.
///
/// Both `title` and `description` must be present and non-empty after
/// trimming surrounding whitespace.
pub fn validate_note_fields(
    title: Option<&str>,
    description: Option<&str>,
) -> Result<(String, String), CoreError> {
    let title = title.map(str::trim).unwrap_or_default();
    let description = description.map(str::trim).unwrap_or_default();

    if title.is_empty() || description.is_empty() {
        return Err(CoreError::Validation(REQUIRED_FIELDS_MESSAGE.to_string()));
    }

    Ok((title.to_string(), description.to_string()))
}

/// Trim a category, treating an absent or blank value as "not provided".
pub fn normalize_category(category: Option<&str>) -> Option<String> {
    category
        .map(str::trim)
        .filter(|c| !c.is_empty())
        .map(str::to_string)
}

/// Trim a category, falling back to [`DEFAULT_CATEGORY`].
pub fn category_or_default(category: Option<&str>) -> String {
    normalize_category(category).unwrap_or_else(|| DEFAULT_CATEGORY.to_string())
}

/// Parse a note id taken from a URL path segment.
pub fn parse_note_id(raw: &str) -> Result<DbId, CoreError> {
    raw.trim()
        .parse::<DbId>()
        .map_err(|_| CoreError::Validation(INVALID_ID_MESSAGE.to_string()))
}

/// Build the `LIKE` pattern for a substring search.
pub fn search_pattern(term: &str) -> String {
    format!("%{term}%")
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
