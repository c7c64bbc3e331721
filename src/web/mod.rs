//! Axum HTTP surface for the activity directory.
//!
//! ## URL layout
//!
//! ```text
//! GET  /activities                         — every activity, in directory order
//! POST /activities/{name}/signup?email=…
//! POST /activities/{name}/unregister?email=…
//! GET  /                                   → 307 /static/index.html
//! GET  /static/{*path}                     — static frontend
//! ```
//!
//! The [`ActivityDirectory`] is injected through [`WebState`]; handlers never
//! reach for process globals, so tests can hand each router its own store.

mod api;
mod ui;

use std::path::Path;
use std::sync::Arc;

use axum::{
    Router,
    routing::{get, post},
};
use tokio::net::TcpListener;
use tokio_util::sync::CancellationToken;
use tracing::info;

use crate::activities::ActivityDirectory;
use crate::error::AppError;

pub use ui::{StaticAssets, StaticResponse};

// ── Shared request state ──────────────────────────────────────────────────────

/// Router state injected into every handler via [`axum::extract::State`].
///
/// Cheap to clone — all fields are reference-counted.
#[derive(Clone)]
pub struct WebState {
    pub directory: Arc<ActivityDirectory>,
    pub assets: Arc<StaticAssets>,
}

impl WebState {
    pub fn new(directory: Arc<ActivityDirectory>, static_dir: &Path) -> Self {
        Self {
            directory,
            assets: Arc::new(StaticAssets::new(static_dir)),
        }
    }
}

// ── Router ────────────────────────────────────────────────────────────────────

pub fn build_router(state: WebState) -> Router {
    Router::new()
        .route("/activities",                            get(api::list_activities))
        .route("/activities/{activity_name}/signup",     post(api::signup))
        .route("/activities/{activity_name}/unregister", post(api::unregister))
        .route("/",                                      get(ui::root))
        .route("/static/{*path}",                        get(ui::serve_static))
        .with_state(state)
}

// ── Server loop ───────────────────────────────────────────────────────────────

/// Bind the listener. Split from [`serve`] so callers can log the resolved
/// address (e.g. when binding port 0).
pub async fn bind(bind_addr: &str) -> Result<TcpListener, AppError> {
    TcpListener::bind(bind_addr)
        .await
        .map_err(|e| AppError::Server(format!("bind failed on {bind_addr}: {e}")))
}

/// Serve until `shutdown` is cancelled, then drain in-flight requests.
pub async fn serve(
    listener: TcpListener,
    state: WebState,
    shutdown: CancellationToken,
) -> Result<(), AppError> {
    let local_addr = listener.local_addr()?;
    let router = build_router(state);

    info!(%local_addr, "http listener ready");

    axum::serve(listener, router)
        .with_graceful_shutdown(async move { shutdown.cancelled().await })
        .await
        .map_err(|e| AppError::Server(format!("axum server error: {e}")))?;

    info!(%local_addr, "http listener shut down");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn bind_rejects_garbage_address() {
        let err = bind("not-an-address").await.unwrap_err();
        assert!(err.to_string().contains("bind failed on not-an-address"));
    }

    #[tokio::test]
    async fn serve_returns_once_cancelled() {
        let listener = bind("127.0.0.1:0").await.unwrap();
        let state = WebState::new(
            Arc::new(ActivityDirectory::seeded()),
            Path::new("/nonexistent/static"),
        );
        let shutdown = CancellationToken::new();
        shutdown.cancel();
        serve(listener, state, shutdown).await.unwrap();
    }
}
