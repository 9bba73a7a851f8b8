//! toneshift entry point
//!
//! Loads `.env`, initializes logging, reads configuration, and serves.
//! A missing API key aborts startup before the listener binds.

use std::sync::Arc;

use anyhow::Result;
use tracing_subscriber::EnvFilter;

use toneshift::config::AppConfig;
use toneshift::gateway::GroqGateway;
use toneshift::server::ApiServer;

#[tokio::main]
async fn main() -> Result<()> {
    // .env is optional; real environment variables win.
    dotenv::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = AppConfig::from_env()?;
    let gateway = Arc::new(GroqGateway::new(
        config.base_url.clone(),
        config.api_key.clone(),
    )?);

    let server = ApiServer::new(config, gateway);
    server.start().await
}
