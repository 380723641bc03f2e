use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use notes_core::error::CoreError;
use notes_core::notes::{INVALID_ID_MESSAGE, REQUIRED_FIELDS_MESSAGE};
use serde_json::json;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and adds HTTP-specific variants.
/// Implements [`IntoResponse`] to produce consistent JSON error responses.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `notes_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A store failure while performing `action` (e.g. "create note").
    #[error("Failed to {action}: {source}")]
    Persistence {
        action: &'static str,
        #[source]
        source: sqlx::Error,
    },

    /// The request body could not be parsed as JSON.
    #[error("Invalid JSON")]
    InvalidJson,

    /// No route matched the request.
    #[error("Route not found")]
    RouteNotFound,
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    /// Build a `map_err` adapter tagging a store error with the failed action.
    ///
    /// ```ignore
    /// NoteRepo::list(pool, None).await.map_err(AppError::persistence("retrieve notes"))?;
    /// ```
    pub fn persistence(action: &'static str) -> impl FnOnce(sqlx::Error) -> AppError {
        move |source| AppError::Persistence { action, source }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            // --- CoreError variants ---
            AppError::Core(core) => match core {
                CoreError::NotFound { entity, id } => {
                    tracing::debug!(entity, id, "Entity not found");
                    (
                        StatusCode::NOT_FOUND,
                        "NOT_FOUND",
                        format!("{entity} not found"),
                    )
                }
                CoreError::Validation(msg) => {
                    (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone())
                }
            },

            // --- Store errors: logged, never leaked ---
            AppError::Persistence { action, source } => {
                tracing::error!(error = %source, action, "Store operation failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    format!("Failed to {action}"),
                )
            }

            // --- HTTP-specific errors ---
            AppError::InvalidJson => (
                StatusCode::BAD_REQUEST,
                "INVALID_JSON",
                "Invalid JSON".to_string(),
            ),
            AppError::RouteNotFound => (
                StatusCode::NOT_FOUND,
                "ROUTE_NOT_FOUND",
                "Route not found".to_string(),
            ),
        };

        let body = json!({
            "error": message,
            "code": code,
        });

        (status, axum::Json(body)).into_response()
    }
}

/// Classify a JSON body rejection.
///
/// - Syntactically broken bodies map to [`AppError::InvalidJson`].
/// - Well-formed JSON of the wrong shape is treated as missing fields.
impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        match rejection {
            JsonRejection::JsonDataError(err) => {
                tracing::debug!(error = %err, "Request body has unexpected shape");
                AppError::Core(CoreError::Validation(REQUIRED_FIELDS_MESSAGE.to_string()))
            }
            other => {
                tracing::debug!(error = %other, "Rejected malformed request body");
                AppError::InvalidJson
            }
        }
    }
}

/// A path segment that cannot be decoded is reported as an invalid id.
impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        tracing::debug!(error = %rejection, "Rejected path parameters");
        AppError::Core(CoreError::Validation(INVALID_ID_MESSAGE.to_string()))
    }
}
