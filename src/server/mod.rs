//! Server setup
//!
//! Router wiring and the listen loop.

use std::path::Path;
use std::sync::Arc;

use anyhow::Result;
use axum::{
    routing::{get, post},
    Router,
};
use tower_http::cors::CorsLayer;
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::config::AppConfig;
use crate::gateway::ChatGateway;
use crate::handlers::{convert, current_time, ApiState};

/// Main HTTP server.
pub struct ApiServer {
    config: AppConfig,
    state: Arc<ApiState>,
}

impl ApiServer {
    /// Create a server around the given configuration and gateway.
    pub fn new(config: AppConfig, gateway: Arc<dyn ChatGateway>) -> Self {
        let state = Arc::new(ApiState { gateway });
        Self { config, state }
    }

    /// Bind and serve until the process is stopped.
    pub async fn start(&self) -> Result<()> {
        let app = build_router(self.state.clone(), &self.config.asset_root);

        let addr = format!("{}:{}", self.config.host, self.config.port);
        let listener = tokio::net::TcpListener::bind(&addr).await?;
        info!("toneshift listening on {}", listener.local_addr()?);

        axum::serve(listener, app)
            .await
            .map_err(|e| anyhow::anyhow!("server error: {}", e))?;

        Ok(())
    }
}

/// Build the application router.
///
/// API routes first, then the static frontend: the entry document at `/`,
/// css/js pass-through, favicon. Cross-origin requests are allowed from any
/// origin.
pub fn build_router(state: Arc<ApiState>, asset_root: &Path) -> Router {
    Router::new()
        .route("/convert", post(convert))
        .route("/api/time", get(current_time))
        .with_state(state)
        .route_service("/", ServeFile::new(asset_root.join("index.html")))
        .nest_service("/css", ServeDir::new(asset_root.join("css")))
        .nest_service("/js", ServeDir::new(asset_root.join("js")))
        .route_service("/favicon.ico", ServeFile::new(asset_root.join("favicon.ico")))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}
