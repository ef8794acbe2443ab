//! Route handlers

use super::AppState;
use super::error::ApiError;
use super::schemas::{
    EndpointInfo, HealthResponse, ImagingHealth, ImpactRequest, ImpactResponse, QueryRequest,
    QueryResponse, ServiceDescriptor,
};
use crate::output::console::ConsoleFormatter;
use axum::Json;
use axum::extract::State;
use imaging_application::{
    BuildImpactInput, BuildImpactUseCase, BuildSummaryInput, BuildSummaryUseCase,
    InspectServerUseCase,
};
use serde_json::{Map, Value};
use std::sync::Arc;
use tracing::{info, warn};

pub async fn root() -> Json<ServiceDescriptor> {
    Json(ServiceDescriptor {
        name: "imaging-copilot",
        version: env!("CARGO_PKG_VERSION"),
        description: "Application summaries and impact analysis over an Imaging MCP server",
        endpoints: vec![
            EndpointInfo {
                method: "GET",
                path: "/healthz",
                description: "Imaging connectivity check",
            },
            EndpointInfo {
                method: "POST",
                path: "/query",
                description: "Summarize an application: {question, application_hint?}",
            },
            EndpointInfo {
                method: "POST",
                path: "/impact",
                description: "Impact of changing an object: {question?, object_hint, application_hint?}",
            },
        ],
    })
}

pub async fn health(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    let endpoint = state.provider.endpoint();

    let response = match InspectServerUseCase::new(Arc::clone(&state.provider)).execute().await {
        Ok(inventory) => {
            let missing = inventory.missing_mandatory();
            if !missing.is_empty() {
                warn!("Health check: required capabilities not offered: {:?}", missing);
            }
            HealthResponse {
                status: if missing.is_empty() { "ok" } else { "degraded" },
                imaging: ImagingHealth::Connected {
                    endpoint,
                    available_tools: inventory.tools.len(),
                    missing_capabilities: missing,
                },
            }
        }
        Err(e) => {
            warn!("Health check failed: {}", e);
            HealthResponse {
                status: "degraded",
                imaging: ImagingHealth::Error {
                    endpoint,
                    error: e.to_string(),
                },
            }
        }
    };

    Json(response)
}

pub async fn query(
    State(state): State<Arc<AppState>>,
    Json(request): Json<QueryRequest>,
) -> Result<Json<QueryResponse>, ApiError> {
    info!("POST /query: {:?}", request.question);

    let input = BuildSummaryInput::new(request.question).with_application_hint(request.application_hint);
    let payload = BuildSummaryUseCase::new(Arc::clone(&state.provider))
        .with_params(state.workflow.clone())
        .execute(input)
        .await?;

    let summary = match &state.renderer {
        Some(renderer) => renderer.render_summary(&payload).await?,
        None => ConsoleFormatter::format_json(&payload),
    };

    Ok(Json(QueryResponse {
        application: payload.selected_application.to_record(),
        summary,
    }))
}

pub async fn impact(
    State(state): State<Arc<AppState>>,
    Json(request): Json<ImpactRequest>,
) -> Result<Json<ImpactResponse>, ApiError> {
    info!("POST /impact: {:?}", request.object_hint);

    let input = BuildImpactInput::new(request.question, request.object_hint)
        .with_application_hint(request.application_hint);
    let payload = BuildImpactUseCase::new(Arc::clone(&state.provider))
        .with_params(state.workflow.clone())
        .execute(input)
        .await?;

    let summary = match &state.renderer {
        Some(renderer) => renderer.render_impact(&payload).await?,
        None => ConsoleFormatter::format_json(&payload),
    };

    let object = match &payload.object_details {
        Value::Null => Value::Object(Map::new()),
        details => details.clone(),
    };

    Ok(Json(ImpactResponse {
        application: payload.selected_application.to_record(),
        object,
        summary,
    }))
}
