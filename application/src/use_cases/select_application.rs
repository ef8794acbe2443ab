//! Application selection step
//!
//! Enumerates applications through the mandatory `applications` capability,
//! normalizes the result and picks the one in scope. Selection is
//! best-effort: a hint that matches nothing degrades to the first
//! application rather than failing.

use crate::ports::progress::{WorkflowProgress, WorkflowStep};
use crate::ports::tool_session::{SessionError, ToolSession};
use imaging_domain::{
    Application, Capability, SelectionMethod, ToolCall, ToolCatalog, match_key,
    normalize_applications, select_application as choose_application,
};
use thiserror::Error;
use tracing::{debug, info};

/// Errors that can occur while selecting the application
#[derive(Error, Debug)]
pub enum SelectionError {
    #[error("'{0}' tool not found among advertised tools")]
    CapabilityNotFound(Capability),

    #[error("Failed to enumerate applications via '{tool}': {source}")]
    CatalogCall {
        tool: String,
        #[source]
        source: SessionError,
    },

    #[error("No applications returned by '{0}'")]
    EmptyCatalog(String),
}

/// The application a request is about
#[derive(Debug, Clone, PartialEq)]
pub struct SelectedApplication {
    pub application: Application,
    /// Tool used to enumerate applications
    pub tool: String,
    pub method: SelectionMethod,
}

/// Enumerate, normalize and select.
pub async fn select_application(
    session: &dyn ToolSession,
    catalog: &ToolCatalog,
    question: &str,
    hint: Option<&str>,
    progress: &dyn WorkflowProgress,
) -> Result<SelectedApplication, SelectionError> {
    progress.on_step_start(WorkflowStep::SelectApplication);

    let tool = catalog
        .find(Capability::Applications)
        .ok_or(SelectionError::CapabilityNotFound(Capability::Applications))?;

    let raw = session
        .call_tool(&ToolCall::new(tool))
        .await
        .map_err(|source| SelectionError::CatalogCall {
            tool: tool.to_string(),
            source,
        })?;

    let applications = normalize_applications(&raw);
    debug!("Normalized {} applications from '{}'", applications.len(), tool);

    let key = match_key(question, hint);
    let choice = choose_application(&applications, key)
        .ok_or_else(|| SelectionError::EmptyCatalog(tool.to_string()))?;

    info!(
        "Selected application '{}' ({:?}, key {:?})",
        choice.application.name, choice.method, key
    );
    progress.on_step_complete(WorkflowStep::SelectApplication);

    Ok(SelectedApplication {
        application: choice.application.clone(),
        tool: tool.to_string(),
        method: choice.method,
    })
}
