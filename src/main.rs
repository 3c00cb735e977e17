//! Neighborhood Leaderboard Backend
//!
//! Relays the challenge roster from the upstream provider and serves dashboard
//! statistics and searchable participant listings derived from it.

mod aggregate;
mod api;
mod config;
mod errors;
mod models;
mod query;
mod upstream;

use std::sync::Arc;

use axum::{routing::get, Router};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use config::{Config, LogFormat};
use upstream::RosterProvider;

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    pub provider: Arc<RosterProvider>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load configuration
    let config = Config::from_env()?;

    // Initialize logging
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    let registry = tracing_subscriber::registry().with(env_filter);
    match config.log_format {
        LogFormat::Json => registry.with(tracing_subscriber::fmt::layer().json()).init(),
        LogFormat::Text => registry.with(tracing_subscriber::fmt::layer()).init(),
    }

    tracing::info!("Starting Neighborhood Leaderboard Backend");
    tracing::info!("Upstream roster: {}", config.upstream_url);
    tracing::info!("Upstream timeout: {:?}", config.upstream_timeout);
    tracing::info!("Bind address: {}", config.bind_addr);

    let provider = Arc::new(RosterProvider::new(
        config.upstream_url.clone(),
        config.upstream_timeout,
    )?);

    // Startup reachability check; failures are logged, never fatal
    let roster = provider.fetch_roster_or_empty().await;
    if roster.is_empty() {
        tracing::warn!("Upstream roster is empty or unreachable at startup");
    } else {
        tracing::info!("Upstream roster has {} participants", roster.len());
    }

    // Create application state
    let state = AppState { provider };

    // Build router
    let app = create_router(state);

    // Start server
    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    tracing::info!("Server listening on {}", config.bind_addr);

    axum::serve(listener, app).await?;

    Ok(())
}

/// Create the application router with all routes.
pub fn create_router(state: AppState) -> Router {
    tracing::debug!("Routing roster requests to {}", state.provider.url());

    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // API routes
    let api_routes = Router::new()
        // Relay
        .route("/neighbors", get(api::relay_neighbors))
        // Dashboard
        .route("/stats", get(api::get_stats))
        // Participants
        .route("/participants", get(api::list_participants))
        .route("/participants/{key}", get(api::get_participant));

    // Health check (never touches the upstream)
    let health_routes = Router::new().route("/health", get(health_check));

    Router::new()
        .nest("/api", api_routes)
        .merge(health_routes)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check endpoint.
async fn health_check() -> &'static str {
    "OK"
}
