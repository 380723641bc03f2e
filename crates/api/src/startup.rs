//! Process startup: tracing, store bootstrap, and the HTTP server loop.
//!
//! Every failure is returned to the caller as a [`StartupError`]; only
//! `main` decides whether to terminate the process.

use std::net::SocketAddr;
use std::sync::Arc;

use notes_db::{Store, StoreError};
use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::{ConfigError, LogFormat, ServerConfig};
use crate::router::build_app_router;
use crate::state::AppState;

/// Filter used when `RUST_LOG` is unset.
pub const DEFAULT_LOG_FILTER: &str = "notes_api=debug,notes_db=debug,tower_http=debug";

/// Fatal errors raised before or while serving.
#[derive(Debug, thiserror::Error)]
pub enum StartupError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error("Failed to bind {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        #[source]
        source: std::io::Error,
    },

    #[error("Server error: {0}")]
    Serve(#[source] std::io::Error),
}

/// Install the global tracing subscriber.
pub fn init_tracing(format: LogFormat) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| DEFAULT_LOG_FILTER.into());
    let registry = tracing_subscriber::registry().with(filter);

    match format {
        LogFormat::Pretty => registry.with(tracing_subscriber::fmt::layer()).init(),
        LogFormat::Json => registry
            .with(tracing_subscriber::fmt::layer().json())
            .init(),
    }
}

/// Open the store, bind the listener, and serve until a shutdown signal.
pub async fn run(config: ServerConfig) -> Result<(), StartupError> {
    tracing::info!(
        host = %config.host,
        port = config.port,
        database = %config.database_path.display(),
        "Loaded server configuration"
    );

    let store = Store::initialize(&config.store_config()).await?;

    let addr = config.socket_addr()?;
    let listener = match TcpListener::bind(addr).await {
        Ok(listener) => listener,
        Err(source) => {
            store.close().await;
            return Err(StartupError::Bind { addr, source });
        }
    };

    serve(listener, store, config).await
}

/// Serve the API on an already-bound listener, closing the store afterwards.
pub async fn serve(
    listener: TcpListener,
    store: Store,
    config: ServerConfig,
) -> Result<(), StartupError> {
    let state = AppState {
        store: store.clone(),
        config: Arc::new(config),
    };
    let app = build_app_router(state);

    match listener.local_addr() {
        Ok(addr) => tracing::info!(%addr, "Server is running at http://{addr}"),
        Err(e) => tracing::warn!(error = %e, "Server is running (local address unknown)"),
    }

    let result = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await;

    tracing::info!("Server stopped accepting connections, closing store");
    store.close().await;

    result.map_err(StartupError::Serve)
}

/// Wait for SIGINT (Ctrl-C) or, on Unix, SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to install Ctrl-C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            tracing::info!("Received SIGINT (Ctrl-C), starting graceful shutdown");
        }
        () = terminate => {
            tracing::info!("Received SIGTERM, starting graceful shutdown");
        }
    }
}
