mod auth;
mod backend;
mod config;
mod cookies;
mod errors;
mod models;
mod render;
mod routes;
mod search;
mod state;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::auth::AuthContext;
use crate::backend::{Backend, MemoryBackend, RestBackend};
use crate::config::{Config, DataSource};
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!(
                "{}={}",
                env!("CARGO_PKG_NAME").replace('-', "_"),
                &config.rust_log
            ))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting job board API v{}", env!("CARGO_PKG_VERSION"));

    let backend = build_backend(&config)?;

    let state = AppState {
        backend,
        auth: AuthContext::new(),
        config: config.clone(),
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Picks the backend for the configured data source. A REST source without
/// credentials starts anyway; searches then report the missing configuration.
fn build_backend(config: &Config) -> Result<Option<Arc<dyn Backend>>> {
    match config.data_source {
        DataSource::Memory => {
            info!("Using in-memory demo data");
            Ok(Some(Arc::new(MemoryBackend::seeded())))
        }
        DataSource::Rest => match config.rest_credentials() {
            Some((url, key)) => {
                info!("Using REST backend at {url}");
                Ok(Some(Arc::new(RestBackend::new(url, key)?)))
            }
            None => {
                warn!("SUPABASE_URL / SUPABASE_ANON_KEY not set; searches will fail until configured");
                Ok(None)
            }
        },
    }
}
