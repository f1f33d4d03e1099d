//! Stub API server — Axum JSON endpoints mirroring the facade.
//!
//! Serves the facade's operations under `/api`, backed by the mock
//! backend. Point `[remote].base_url` here and set `mode = "remote"` to
//! exercise the real-fetch path end to end. CORS enabled for local
//! development.

pub mod routes;

use anyhow::Result;
use axum::{
    http::{header, HeaderValue, Method},
    routing::{get, post},
    Router,
};
use tower_http::cors::CorsLayer;
use tracing::info;

use routes::ApiState;

/// Start the stub API server.
///
/// This spawns a background task — it doesn't block.
pub fn spawn(state: ApiState, port: u16) -> Result<()> {
    let app = build_router(state);

    tokio::spawn(async move {
        let addr = std::net::SocketAddr::from(([0, 0, 0, 0], port));
        info!(port, "Stub API server starting on http://localhost:{port}/api");

        let listener = tokio::net::TcpListener::bind(addr)
            .await
            .expect("Failed to bind stub API port");

        axum::serve(listener, app)
            .await
            .expect("Stub API server error");
    });

    Ok(())
}

/// Build the Axum router with all routes and middleware.
pub fn build_router(state: ApiState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin("*".parse::<HeaderValue>().unwrap())
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE]);

    Router::new()
        .route("/api/journey/init", post(routes::init_journey))
        .route("/api/guidance", post(routes::guidance))
        .route("/api/recommendations", get(routes::recommendations))
        .route("/api/market/insights", get(routes::market_insights))
        .route("/api/progress", get(routes::progress))
        .route("/api/challenges/:id/join", post(routes::join_challenge))
        .route("/api/modules/:id/start", post(routes::start_module))
        .route("/api/jobs/:id/apply", post(routes::apply_for_job))
        .route("/api/jobs/:id/save", post(routes::save_job))
        .route("/health", get(routes::health))
        .layer(cors)
        .with_state(state)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
