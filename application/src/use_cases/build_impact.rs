//! Build Impact use case
//!
//! Resolves a target-of-change object and gathers everything that depends on
//! it into an [`ImpactPayload`].
//!
//! Object resolution probes `object_details` with the hint bound to each of
//! [`OBJECT_PROBE_KEYS`] in turn, because the expected argument name is not
//! knowable from the tool name. The first non-empty answer wins.

use super::error::{AggregationError, Workflow, WorkflowError};
use super::select_application::select_application;
use super::shared::{invoke_optional, list_catalog, open_session};
use crate::config::WorkflowParams;
use crate::ports::progress::{NoProgress, WorkflowProgress, WorkflowStep};
use crate::ports::tool_session::{SessionProvider, ToolSession};
use imaging_domain::{
    Capability, ImpactPayload, OBJECT_PROBE_KEYS, ToolCall, ToolCatalog, is_empty_value,
    object_identifier,
};
use serde_json::Value;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info};

/// Errors that can occur while resolving the target object
#[derive(Error, Debug)]
pub enum ObjectResolutionError {
    #[error("'{0}' tool not found among advertised tools")]
    CapabilityNotFound(Capability),

    #[error(
        "Unable to resolve object '{object}' via {tool} after {attempts} attempts. Last error: {}",
        .last_error.as_deref().unwrap_or("none (every probe returned an empty result)")
    )]
    Exhausted {
        object: String,
        tool: String,
        attempts: usize,
        last_error: Option<String>,
    },
}

/// Input for the BuildImpact use case
#[derive(Debug, Clone, PartialEq)]
pub struct BuildImpactInput {
    pub question: String,
    pub object_hint: String,
    pub application_hint: Option<String>,
}

impl BuildImpactInput {
    pub const DEFAULT_QUESTION: &'static str = "What breaks if we change X?";

    pub fn new(question: impl Into<String>, object_hint: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            object_hint: object_hint.into(),
            application_hint: None,
        }
    }

    pub fn with_application_hint(mut self, hint: Option<impl Into<String>>) -> Self {
        self.application_hint = hint.map(Into::into);
        self
    }
}

/// Use case for assessing the impact of changing one object
pub struct BuildImpactUseCase<P: SessionProvider + ?Sized + 'static> {
    provider: Arc<P>,
    params: WorkflowParams,
}

impl<P: SessionProvider + ?Sized + 'static> BuildImpactUseCase<P> {
    pub fn new(provider: Arc<P>) -> Self {
        Self {
            provider,
            params: WorkflowParams::default(),
        }
    }

    pub fn with_params(mut self, params: WorkflowParams) -> Self {
        self.params = params;
        self
    }

    /// Execute the use case with default (no-op) progress
    pub async fn execute(&self, input: BuildImpactInput) -> Result<ImpactPayload, AggregationError> {
        self.execute_with_progress(input, &NoProgress).await
    }

    /// Execute the use case with progress callbacks
    ///
    /// The session is closed before returning, whatever the outcome.
    pub async fn execute_with_progress(
        &self,
        input: BuildImpactInput,
        progress: &dyn WorkflowProgress,
    ) -> Result<ImpactPayload, AggregationError> {
        info!("Building impact analysis for object {:?}", input.object_hint);

        let result = match open_session(self.provider.as_ref(), progress).await {
            Ok(session) => {
                let result = self.run(session.as_ref(), &input, progress).await;
                session.close().await;
                result
            }
            Err(e) => Err(e),
        };

        result.map_err(|source| AggregationError {
            workflow: Workflow::Impact,
            question: input.question.clone(),
            application_hint: input.application_hint.clone(),
            object_hint: Some(input.object_hint.clone()),
            source,
        })
    }

    async fn run(
        &self,
        session: &dyn ToolSession,
        input: &BuildImpactInput,
        progress: &dyn WorkflowProgress,
    ) -> Result<ImpactPayload, WorkflowError> {
        let catalog = list_catalog(session, progress).await?;
        let selected = select_application(
            session,
            &catalog,
            &input.question,
            input.application_hint.as_deref(),
            progress,
        )
        .await?;
        let app_id = selected.application.app_id();

        progress.on_step_start(WorkflowStep::ResolveObject);
        let object_details = resolve_object(session, &catalog, &app_id, &input.object_hint).await?;
        let object_id = object_identifier(&object_details, &input.object_hint);
        info!("Resolved object '{}' to id {}", input.object_hint, object_id);
        progress.on_step_complete(WorkflowStep::ResolveObject);

        progress.on_step_start(WorkflowStep::Gather);

        let limit = self.params.result_limit;
        let object_call = |capability: Capability| {
            catalog.find(capability).map(|tool| {
                ToolCall::new(tool)
                    .with_arg("app_id", app_id.clone())
                    .with_arg("object_id", object_id.clone())
                    .with_arg("limit", limit)
            })
        };

        let transactions_call = object_call(Capability::TransactionsUsingObject);
        let data_graphs_call = object_call(Capability::DataGraphsInvolvingObject);
        let dependencies_call = object_call(Capability::InterApplicationsDependencies);

        let (transactions_using_object, data_graphs_involving_object, inter_applications_dependencies) = tokio::join!(
            invoke_optional(
                session,
                Capability::TransactionsUsingObject,
                transactions_call,
                progress
            ),
            invoke_optional(
                session,
                Capability::DataGraphsInvolvingObject,
                data_graphs_call,
                progress
            ),
            invoke_optional(
                session,
                Capability::InterApplicationsDependencies,
                dependencies_call,
                progress
            )
        );

        progress.on_step_complete(WorkflowStep::Gather);

        Ok(ImpactPayload {
            question: input.question.clone(),
            selected_application: selected.application,
            object_hint: input.object_hint.clone(),
            object_details,
            transactions_using_object,
            data_graphs_involving_object,
            inter_applications_dependencies,
            tool_names: catalog.names().to_vec(),
        })
    }
}

/// Probe `object_details` until one argument name yields a non-empty result.
async fn resolve_object(
    session: &dyn ToolSession,
    catalog: &ToolCatalog,
    app_id: &Value,
    hint: &str,
) -> Result<Value, ObjectResolutionError> {
    let tool = catalog
        .find(Capability::ObjectDetails)
        .ok_or(ObjectResolutionError::CapabilityNotFound(Capability::ObjectDetails))?;

    let mut last_error = None;
    for key in OBJECT_PROBE_KEYS {
        let call = ToolCall::new(tool)
            .with_arg("app_id", app_id.clone())
            .with_arg(key, hint);

        match session.call_tool(&call).await {
            Ok(details) if !is_empty_value(&details) => {
                debug!("Object '{}' resolved with '{}' argument", hint, key);
                return Ok(details);
            }
            Ok(_) => debug!("Probe '{}' returned nothing for '{}'", key, hint),
            Err(e) => {
                debug!("Probe '{}' failed for '{}': {}", key, hint, e);
                last_error = Some(e.to_string());
            }
        }
    }

    Err(ObjectResolutionError::Exhausted {
        object: hint.to_string(),
        tool: tool.to_string(),
        attempts: OBJECT_PROBE_KEYS.len(),
        last_error,
    })
}
