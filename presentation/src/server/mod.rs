//! HTTP API
//!
//! Exposes the summary and impact workflows over axum:
//!
//! - `GET /` service descriptor
//! - `GET /healthz` Imaging connectivity (always 200)
//! - `POST /query` application summary
//! - `POST /impact` impact analysis

pub mod error;
pub mod routes;
pub mod schemas;

use axum::Router;
use axum::routing::{get, post};
use imaging_application::{
    LlmGateway, RenderParams, RenderReportUseCase, SessionProvider, WorkflowParams,
};
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

/// Shared state for every request.
///
/// Each request opens its own tool session through `provider`.
pub struct AppState {
    pub(crate) provider: Arc<dyn SessionProvider>,
    pub(crate) renderer: Option<RenderReportUseCase<dyn LlmGateway>>,
    pub(crate) workflow: WorkflowParams,
}

impl AppState {
    pub fn new(provider: Arc<dyn SessionProvider>) -> Self {
        Self {
            provider,
            renderer: None,
            workflow: WorkflowParams::default(),
        }
    }

    pub fn with_workflow_params(mut self, params: WorkflowParams) -> Self {
        self.workflow = params;
        self
    }

    /// Render reports with `gateway`. Without a renderer, responses carry the
    /// aggregated payload as pretty JSON in place of the report.
    pub fn with_renderer(mut self, gateway: Arc<dyn LlmGateway>, params: RenderParams) -> Self {
        self.renderer = Some(RenderReportUseCase::new(gateway).with_params(params));
        self
    }
}

/// Build the router with CORS and request tracing.
pub fn router(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(routes::root))
        .route("/healthz", get(routes::health))
        .route("/query", post(routes::query))
        .route("/impact", post(routes::impact))
        .with_state(state)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}

/// Serve the API on `addr` until Ctrl-C.
pub async fn serve(state: Arc<AppState>, addr: &str) -> std::io::Result<()> {
    let listener = TcpListener::bind(addr).await?;
    info!("Listening on http://{}", listener.local_addr()?);

    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown_signal(tokio::signal::ctrl_c()))
        .await
}

/// Resolves once `signal` fires. A failed signal registration is logged and
/// also ends the server.
async fn shutdown_signal<F>(signal: F)
where
    F: Future<Output = std::io::Result<()>>,
{
    match signal.await {
        Ok(()) => info!("Shutting down"),
        Err(e) => warn!("Failed to listen for Ctrl-C, shutting down: {}", e),
    }
}
