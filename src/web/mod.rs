// Web server — the Axum HTTP surface of the analysis service.
//
// Two routes: GET / for the health check and POST /analyze for document
// uploads. The analyzers live in shared read-only state; each request gets
// its own upload payload and derived text, both dropped at response time.

use std::sync::Arc;

use anyhow::Result;
use axum::extract::DefaultBodyLimit;
use axum::http::header;
use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::config::Config;
use crate::pipeline::Analyzers;

pub mod error;
pub mod handlers;

/// Shared application state threaded through all Axum handlers.
#[derive(Clone)]
pub struct AppState {
    pub analyzers: Arc<Analyzers>,
    pub config: Arc<Config>,
}

/// Start the web server and block until it exits.
pub async fn run_server(config: Config, analyzers: Arc<Analyzers>) -> Result<()> {
    let addr = format!("{}:{}", config.bind, config.port);
    let state = AppState {
        analyzers,
        config: Arc::new(config),
    };

    let app = build_router(state);

    info!("Docsense listening on http://{addr}");
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}

/// Build the router. Public so HTTP-level tests can drive it directly.
pub fn build_router(state: AppState) -> Router {
    let max_upload = state.config.max_upload_bytes;

    Router::new()
        .route("/", get(handlers::health::health_check))
        .route("/analyze", post(handlers::analyze::analyze_upload))
        .layer(DefaultBodyLimit::max(max_upload))
        .layer(
            CorsLayer::new()
                .allow_origin(tower_http::cors::Any)
                .allow_methods([
                    axum::http::Method::GET,
                    axum::http::Method::POST,
                    axum::http::Method::OPTIONS,
                ])
                .allow_headers([header::CONTENT_TYPE]),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
