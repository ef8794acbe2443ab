//! Workflow errors
//!
//! Errors gain context as they cross each boundary: a [`SessionError`] from
//! the port becomes a [`WorkflowError`] naming the failed step, which becomes
//! an [`AggregationError`] naming the workflow and its inputs.

use super::build_impact::ObjectResolutionError;
use super::select_application::SelectionError;
use crate::ports::tool_session::SessionError;
use thiserror::Error;

/// Which aggregation workflow was running
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Workflow {
    Summary,
    Impact,
}

impl Workflow {
    pub fn as_str(&self) -> &'static str {
        match self {
            Workflow::Summary => "summary",
            Workflow::Impact => "impact",
        }
    }
}

impl std::fmt::Display for Workflow {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Fatal failure of a single workflow step
#[derive(Error, Debug)]
pub enum WorkflowError {
    #[error("Failed to open tool session: {0}")]
    OpenSession(#[source] SessionError),

    #[error("Failed to list tools: {0}")]
    ListTools(#[source] SessionError),

    #[error("Tool server advertised no tools")]
    NoTools,

    #[error("Application selection failed: {0}")]
    Selection(#[from] SelectionError),

    #[error("Object resolution failed: {0}")]
    ObjectResolution(#[from] ObjectResolutionError),
}

/// Top-level workflow failure, carrying the inputs that were in flight
#[derive(Error, Debug)]
#[error(
    "{workflow} workflow failed (question: {question:?}, application hint: {}, object: {}): {source}",
    .application_hint.as_deref().unwrap_or("none"),
    .object_hint.as_deref().unwrap_or("none")
)]
pub struct AggregationError {
    pub workflow: Workflow,
    pub question: String,
    pub application_hint: Option<String>,
    pub object_hint: Option<String>,
    #[source]
    pub source: WorkflowError,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_aggregation_error_is_self_describing() {
        let error = AggregationError {
            workflow: Workflow::Summary,
            question: "Summarize Payments".to_string(),
            application_hint: Some("Payments".to_string()),
            object_hint: None,
            source: WorkflowError::NoTools,
        };
        let message = error.to_string();
        assert!(message.starts_with("summary workflow failed"));
        assert!(message.contains("\"Summarize Payments\""));
        assert!(message.contains("application hint: Payments"));
        assert!(message.contains("object: none"));
        assert!(message.contains("advertised no tools"));
    }

    #[test]
    fn test_open_failure_names_workflow() {
        let error = AggregationError {
            workflow: Workflow::Impact,
            question: "q".to_string(),
            application_hint: None,
            object_hint: Some("X".to_string()),
            source: WorkflowError::OpenSession(SessionError::ConnectionError("refused".into())),
        };
        assert!(error.to_string().contains("refused"));
        assert!(error.to_string().starts_with("impact workflow failed"));
    }
}
