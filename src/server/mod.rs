//! HTTP surface.
//!
//! One upload endpoint plus a liveness route. Everything interesting happens
//! in the orchestrator; this layer only validates the multipart input and
//! maps outcomes and errors to JSON bodies.

mod routes;

pub use routes::app;

use crate::orchestrator::Orchestrator;
use crate::Result;
use axum::extract::DefaultBodyLimit;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};

const MAX_BODY_SIZE_10MB: usize = 10 * 1024 * 1024;

#[derive(Clone)]
pub struct AppState {
    pub orchestrator: Arc<Orchestrator>,
    pub default_threshold: f32,
}

impl AppState {
    pub fn new(orchestrator: Arc<Orchestrator>, default_threshold: f32) -> Self {
        Self {
            orchestrator,
            default_threshold,
        }
    }
}

pub async fn serve(addr: SocketAddr, state: AppState) -> Result<()> {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let app = app(state)
        .layer(DefaultBodyLimit::max(MAX_BODY_SIZE_10MB))
        .layer(cors);

    tracing::info!("listening on http://{}", addr);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
