//! Build Summary use case
//!
//! Gathers everything the Imaging server knows about one application into a
//! [`SummaryPayload`]. Four independent analyses run concurrently, then
//! transactions and data graphs are fetched in turn. Any optional capability
//! that is missing or fails leaves its slot `null`.

use super::error::{AggregationError, Workflow, WorkflowError};
use super::select_application::select_application;
use super::shared::{invoke_optional, list_catalog, open_session};
use crate::config::WorkflowParams;
use crate::ports::progress::{NoProgress, WorkflowProgress, WorkflowStep};
use crate::ports::tool_session::{SessionProvider, ToolSession};
use imaging_domain::{Capability, SummaryPayload, ToolCall};
use std::sync::Arc;
use tracing::info;

/// Input for the BuildSummary use case
#[derive(Debug, Clone, PartialEq)]
pub struct BuildSummaryInput {
    pub question: String,
    pub application_hint: Option<String>,
}

impl BuildSummaryInput {
    pub fn new(question: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            application_hint: None,
        }
    }

    pub fn with_application_hint(mut self, hint: Option<impl Into<String>>) -> Self {
        self.application_hint = hint.map(Into::into);
        self
    }
}

/// Use case for summarizing one application
pub struct BuildSummaryUseCase<P: SessionProvider + ?Sized + 'static> {
    provider: Arc<P>,
    params: WorkflowParams,
}

impl<P: SessionProvider + ?Sized + 'static> BuildSummaryUseCase<P> {
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
    pub async fn execute(&self, input: BuildSummaryInput) -> Result<SummaryPayload, AggregationError> {
        self.execute_with_progress(input, &NoProgress).await
    }

    /// Execute the use case with progress callbacks
    ///
    /// The session is closed before returning, whatever the outcome.
    pub async fn execute_with_progress(
        &self,
        input: BuildSummaryInput,
        progress: &dyn WorkflowProgress,
    ) -> Result<SummaryPayload, AggregationError> {
        info!("Building summary for {:?}", input.question);

        let result = match open_session(self.provider.as_ref(), progress).await {
            Ok(session) => {
                let result = self.run(session.as_ref(), &input, progress).await;
                session.close().await;
                result
            }
            Err(e) => Err(e),
        };

        result.map_err(|source| AggregationError {
            workflow: Workflow::Summary,
            question: input.question.clone(),
            application_hint: input.application_hint.clone(),
            object_hint: None,
            source,
        })
    }

    async fn run(
        &self,
        session: &dyn ToolSession,
        input: &BuildSummaryInput,
        progress: &dyn WorkflowProgress,
    ) -> Result<SummaryPayload, WorkflowError> {
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

        progress.on_step_start(WorkflowStep::Gather);

        let app_call = |capability: Capability| {
            catalog
                .find(capability)
                .map(|tool| ToolCall::new(tool).with_arg("app_id", app_id.clone()))
        };

        let stats_call = app_call(Capability::Stats);
        let arch_call = app_call(Capability::ArchitecturalGraph)
            .map(|call| call.with_arg("granularity", self.params.granularity.clone()));
        let quality_call = app_call(Capability::QualityInsights);
        let packages_call = app_call(Capability::Packages);

        let (stats, architectural_graph, quality_insights, packages) = tokio::join!(
            invoke_optional(session, Capability::Stats, stats_call, progress),
            invoke_optional(session, Capability::ArchitecturalGraph, arch_call, progress),
            invoke_optional(session, Capability::QualityInsights, quality_call, progress),
            invoke_optional(session, Capability::Packages, packages_call, progress)
        );

        let limit = self.params.result_limit;
        let transactions_call =
            app_call(Capability::ApplicationTransactions).map(|call| call.with_arg("limit", limit));
        let transactions = invoke_optional(
            session,
            Capability::ApplicationTransactions,
            transactions_call,
            progress,
        )
        .await;

        let data_graphs_call =
            app_call(Capability::ApplicationDataGraphs).map(|call| call.with_arg("limit", limit));
        let data_graphs = invoke_optional(
            session,
            Capability::ApplicationDataGraphs,
            data_graphs_call,
            progress,
        )
        .await;

        progress.on_step_complete(WorkflowStep::Gather);

        Ok(SummaryPayload {
            question: input.question.clone(),
            selected_application: selected.application,
            stats,
            architectural_graph,
            quality_insights,
            packages,
            transactions,
            data_graphs,
            tool_names: catalog.names().to_vec(),
        })
    }
}
