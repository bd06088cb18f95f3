//! Public HTTP surface of the gateway.

pub mod customers;
pub mod error;

use std::sync::Arc;

use axum::{Router, http::StatusCode, response::IntoResponse, routing::get};
use tower_http::trace::TraceLayer;

use crate::backend::RewardsBackend;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    pub backend: Arc<dyn RewardsBackend>,
}

impl AppState {
    pub fn new(backend: Arc<dyn RewardsBackend>) -> Self {
        Self { backend }
    }
}

/// Create the gateway router with all customer routes.
pub fn create_router(state: AppState) -> Router<()> {
    Router::new()
        // Customer endpoints
        .route(
            "/api/v2/customers",
            get(customers::list_customers).post(customers::create_customer),
        )
        .route("/api/v2/customers/{id}", get(customers::get_customer))
        // Reward point endpoints
        .route(
            "/api/v2/customers/{id}/reward-points",
            get(customers::get_reward_points).post(customers::adjust_reward_points),
        )
        .route("/healthz", get(health_check))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check endpoint
async fn health_check() -> impl IntoResponse {
    (StatusCode::OK, "ok")
}

/// Start the gateway server on the specified port.
pub async fn start_server(state: AppState, port: u16) -> Result<(), Box<dyn std::error::Error>> {
    let app = create_router(state);

    let addr = format!("0.0.0.0:{}", port);
    tracing::info!("Starting PointsBridge gateway on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
