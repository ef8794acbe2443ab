//! Render Report use case
//!
//! Turns an aggregated payload into natural-language text through the
//! [`LlmGateway`]. Stateless: one completion per report.

use crate::config::RenderParams;
use crate::ports::llm_gateway::{CompletionRequest, GatewayError, LlmGateway};
use crate::ports::progress::{NoProgress, WorkflowProgress, WorkflowStep};
use imaging_domain::{ImpactPayload, ReportKind, ReportPrompt, SummaryPayload};
use std::sync::Arc;
use thiserror::Error;
use tracing::info;

/// Errors that can occur while rendering a report
#[derive(Error, Debug)]
pub enum RenderError {
    #[error("Failed to render {kind} report: {source}")]
    Gateway {
        kind: ReportKind,
        #[source]
        source: GatewayError,
    },
}

/// Use case for rendering reports
pub struct RenderReportUseCase<G: LlmGateway + ?Sized + 'static> {
    gateway: Arc<G>,
    params: RenderParams,
}

impl<G: LlmGateway + ?Sized + 'static> RenderReportUseCase<G> {
    pub fn new(gateway: Arc<G>) -> Self {
        Self {
            gateway,
            params: RenderParams::default(),
        }
    }

    pub fn with_params(mut self, params: RenderParams) -> Self {
        self.params = params;
        self
    }

    pub async fn render_summary(&self, payload: &SummaryPayload) -> Result<String, RenderError> {
        self.render(ReportPrompt::summary(payload), &NoProgress).await
    }

    pub async fn render_impact(&self, payload: &ImpactPayload) -> Result<String, RenderError> {
        self.render(ReportPrompt::impact(payload), &NoProgress).await
    }

    /// Render a prepared prompt with progress callbacks
    pub async fn render(
        &self,
        prompt: ReportPrompt,
        progress: &dyn WorkflowProgress,
    ) -> Result<String, RenderError> {
        progress.on_step_start(WorkflowStep::Render);
        info!("Rendering {} report with {}", prompt.kind, self.gateway.model());

        let request = CompletionRequest::new(prompt.system, prompt.user)
            .with_max_tokens(self.params.max_tokens(prompt.kind))
            .with_temperature(self.params.temperature);

        let text = self
            .gateway
            .complete(&request)
            .await
            .map_err(|source| RenderError::Gateway {
                kind: prompt.kind,
                source,
            })?;

        progress.on_step_complete(WorkflowStep::Render);
        Ok(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use imaging_domain::Application;
    use serde_json::json;
    use std::sync::Mutex;

    struct MockGateway {
        requests: Mutex<Vec<CompletionRequest>>,
        fail: bool,
    }

    impl MockGateway {
        fn new(fail: bool) -> Self {
            Self {
                requests: Mutex::new(Vec::new()),
                fail,
            }
        }
    }

    #[async_trait]
    impl LlmGateway for MockGateway {
        async fn complete(&self, request: &CompletionRequest) -> Result<String, GatewayError> {
            self.requests.lock().unwrap().push(request.clone());
            if self.fail {
                return Err(GatewayError::RequestFailed("overloaded".to_string()));
            }
            Ok("## Overview\nPayments is a Java application.".to_string())
        }

        fn model(&self) -> &str {
            "mock-model"
        }
    }

    fn summary() -> SummaryPayload {
        SummaryPayload {
            question: "Summarize Payments".to_string(),
            selected_application: Application::new("app1", "Payments"),
            stats: Some(json!({"loc": 120000})),
            architectural_graph: None,
            quality_insights: None,
            packages: None,
            transactions: None,
            data_graphs: None,
            tool_names: vec![],
        }
    }

    #[tokio::test]
    async fn test_render_summary() {
        let gateway = Arc::new(MockGateway::new(false));
        let use_case = RenderReportUseCase::new(gateway.clone());

        let text = use_case.render_summary(&summary()).await.unwrap();
        assert!(text.contains("Overview"));

        let requests = gateway.requests.lock().unwrap();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].max_tokens, 1200);
        assert!(requests[0].prompt.contains("120000"));
        assert_eq!(requests[0].system, ReportPrompt::summary_system());
    }

    #[tokio::test]
    async fn test_render_impact_uses_impact_budget() {
        let gateway = Arc::new(MockGateway::new(false));
        let use_case = RenderReportUseCase::new(gateway.clone());

        let payload = ImpactPayload {
            question: "What breaks?".to_string(),
            selected_application: Application::new("app1", "Payments"),
            object_hint: "OrderService".to_string(),
            object_details: json!({"id": "obj-123"}),
            transactions_using_object: None,
            data_graphs_involving_object: None,
            inter_applications_dependencies: None,
            tool_names: vec![],
        };
        use_case.render_impact(&payload).await.unwrap();

        let requests = gateway.requests.lock().unwrap();
        assert_eq!(requests[0].max_tokens, 1400);
        assert!(requests[0].prompt.contains("obj-123"));
    }

    #[tokio::test]
    async fn test_gateway_failure() {
        let use_case = RenderReportUseCase::new(Arc::new(MockGateway::new(true)));

        let err = use_case.render_summary(&summary()).await.unwrap_err();
        assert!(err.to_string().contains("summary report"));
        assert!(err.to_string().contains("overloaded"));
    }
}
