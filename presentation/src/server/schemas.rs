//! Request and response bodies

use imaging_application::BuildImpactInput;
use imaging_domain::Capability;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

#[derive(Debug, Clone, Deserialize)]
pub struct QueryRequest {
    pub question: String,
    #[serde(default)]
    pub application_hint: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct QueryResponse {
    pub application: Map<String, Value>,
    pub summary: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ImpactRequest {
    #[serde(default = "default_impact_question")]
    pub question: String,
    pub object_hint: String,
    #[serde(default)]
    pub application_hint: Option<String>,
}

fn default_impact_question() -> String {
    BuildImpactInput::DEFAULT_QUESTION.to_string()
}

#[derive(Debug, Clone, Serialize)]
pub struct ImpactResponse {
    pub application: Map<String, Value>,
    pub object: Value,
    pub summary: String,
}

/// `GET /healthz` body. Always returned with status 200.
///
/// `status` is `degraded` when the server is unreachable or lacks a
/// required capability.
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub imaging: ImagingHealth,
}

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ImagingHealth {
    Connected {
        endpoint: String,
        available_tools: usize,
        /// Required capabilities no advertised tool resolves to
        missing_capabilities: Vec<Capability>,
    },
    Error {
        endpoint: String,
        error: String,
    },
}

/// `GET /` body
#[derive(Debug, Clone, Serialize)]
pub struct ServiceDescriptor {
    pub name: &'static str,
    pub version: &'static str,
    pub description: &'static str,
    pub endpoints: Vec<EndpointInfo>,
}

#[derive(Debug, Clone, Serialize)]
pub struct EndpointInfo {
    pub method: &'static str,
    pub path: &'static str,
    pub description: &'static str,
}
