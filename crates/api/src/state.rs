use std::sync::Arc;

use notes_db::Store;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Note store (owns the connection pool).
    pub store: Store,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
}
