//! Repository for the `notes` table.

use chrono::Utc;
use notes_core::notes::search_pattern;
use notes_core::types::DbId;

use crate::models::note::{CreateNote, Note, UpdateNote};
use crate::DbPool;

/// Column list for notes queries.
const COLUMNS: &str = "id, title, description, category, created_at, updated_at";

/// Provides CRUD operations for notes.
pub struct NoteRepo;

impl NoteRepo {
    /// List notes, newest first.
    ///
    /// With a non-empty `search` term only notes whose title, category, or
    /// description contain the term (SQLite `LIKE`) are returned.
    pub async fn list(pool: &DbPool, search: Option<&str>) -> Result<Vec<Note>, sqlx::Error> {
        match search.filter(|term| !term.is_empty()) {
            Some(term) => {
                let pattern = search_pattern(term);
                let query = format!(
                    "SELECT {COLUMNS} FROM notes
                     WHERE title LIKE ? OR category LIKE ? OR description LIKE ?
                     ORDER BY created_at DESC, id DESC"
                );
                sqlx::query_as::<_, Note>(&query)
                    .bind(&pattern)
                    .bind(&pattern)
                    .bind(&pattern)
                    .fetch_all(pool)
                    .await
            }
            None => {
                let query =
                    format!("SELECT {COLUMNS} FROM notes ORDER BY created_at DESC, id DESC");
                sqlx::query_as::<_, Note>(&query).fetch_all(pool).await
            }
        }
    }

    /// Find a note by its ID.
    pub async fn find_by_id(pool: &DbPool, id: DbId) -> Result<Option<Note>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM notes WHERE id = ?");
        sqlx::query_as::<_, Note>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Insert a note, returning the stored row.
    ///
    /// `created_at` and `updated_at` receive the same instant.
    pub async fn create(pool: &DbPool, input: &CreateNote) -> Result<Note, sqlx::Error> {
        let now = Utc::now();
        let query = format!(
            "INSERT INTO notes (title, description, category, created_at, updated_at)
             VALUES (?, ?, ?, ?, ?)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Note>(&query)
            .bind(&input.title)
            .bind(&input.description)
            .bind(&input.category)
            .bind(now)
            .bind(now)
            .fetch_one(pool)
            .await
    }

    /// Update a note by ID, returning the number of rows changed (0 or 1).
    ///
    /// A `None` category keeps the stored value. `updated_at` never drops
    /// below `created_at`, even if the wall clock has moved backwards.
    pub async fn update(pool: &DbPool, id: DbId, input: &UpdateNote) -> Result<u64, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE notes SET
                title = ?,
                description = ?,
                category = COALESCE(?, category),
                updated_at = MAX(?, created_at)
             WHERE id = ?",
        )
        .bind(&input.title)
        .bind(&input.description)
        .bind(&input.category)
        .bind(Utc::now())
        .bind(id)
        .execute(pool)
        .await?;
        Ok(result.rows_affected())
    }

    /// Delete a note by ID, returning the number of rows removed (0 or 1).
    pub async fn delete(pool: &DbPool, id: DbId) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("DELETE FROM notes WHERE id = ?")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected())
    }
}
