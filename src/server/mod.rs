mod error;
mod routes;

pub use error::ApiError;

use axum::Router;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::api::MockProvider;
use crate::config::Config;

/// Shared state for API handlers.
#[derive(Debug)]
pub struct ServerState {
    pub provider: MockProvider,
}

impl ServerState {
    pub fn new(provider: MockProvider) -> Arc<Self> {
        Arc::new(Self { provider })
    }
}

/// API routes, with everything else served from `static_dirs` in order.
pub fn router(state: Arc<ServerState>, static_dirs: &[PathBuf]) -> Router {
    Router::new()
        .merge(routes::api_router())
        .fallback_service(static_files(static_dirs))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Chain one `ServeDir` per root; a miss in one root falls through to the next.
fn static_files(dirs: &[PathBuf]) -> Router {
    dirs.iter().rev().fold(Router::new(), |next, dir| {
        Router::new().fallback_service(ServeDir::new(dir).fallback(next))
    })
}

pub async fn serve(config: &Config) -> anyhow::Result<()> {
    let state = ServerState::new(MockProvider::new());
    let app = router(state, &config.static_dirs);

    let listener = TcpListener::bind((config.bind.as_str(), config.port)).await?;
    let url = config.server_url();
    tracing::info!("Server running on {url}");
    tracing::info!("Access the app at {url}/index.html");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("failed to install Ctrl+C handler: {e}");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received, gracefully stopping…");
}
