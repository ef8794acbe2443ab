//! Shared utilities for use cases.
//!
//! Session-scoped helpers used by both aggregation workflows (BuildSummary,
//! BuildImpact).

use super::error::WorkflowError;
use crate::ports::progress::{SlotOutcome, WorkflowProgress, WorkflowStep};
use crate::ports::tool_session::{SessionProvider, ToolSession};
use imaging_domain::{Capability, ToolCall, ToolCatalog, is_empty_value};
use serde_json::Value;
use tracing::{debug, info, warn};

/// Open a session for one request.
///
/// Callers own the returned session and must `close` it on every exit path.
pub(crate) async fn open_session<P>(
    provider: &P,
    progress: &dyn WorkflowProgress,
) -> Result<Box<dyn ToolSession>, WorkflowError>
where
    P: SessionProvider + ?Sized,
{
    progress.on_step_start(WorkflowStep::Connect);
    let session = provider.open().await.map_err(WorkflowError::OpenSession)?;
    debug!("Tool session opened on {}", provider.endpoint());
    progress.on_step_complete(WorkflowStep::Connect);
    Ok(session)
}

/// List advertised tools once for the request.
///
/// An empty list is fatal: nothing useful can be resolved against it.
pub(crate) async fn list_catalog(
    session: &dyn ToolSession,
    progress: &dyn WorkflowProgress,
) -> Result<ToolCatalog, WorkflowError> {
    progress.on_step_start(WorkflowStep::ListTools);
    let names = session.list_tools().await.map_err(WorkflowError::ListTools)?;
    if names.is_empty() {
        return Err(WorkflowError::NoTools);
    }
    info!("Tool server advertises {} tools", names.len());
    progress.on_step_complete(WorkflowStep::ListTools);
    Ok(ToolCatalog::new(names))
}

/// Invoke an optional capability, converting absence and failure to `None`.
///
/// `call` is `None` when the capability did not resolve to any tool.
pub(crate) async fn invoke_optional(
    session: &dyn ToolSession,
    capability: Capability,
    call: Option<ToolCall>,
    progress: &dyn WorkflowProgress,
) -> Option<Value> {
    let Some(call) = call else {
        progress.on_capability_complete(capability, SlotOutcome::Unavailable);
        return None;
    };

    debug!("Calling {}", call);
    match session.call_tool(&call).await {
        Ok(Value::Null) => {
            progress.on_capability_complete(capability, SlotOutcome::Empty);
            None
        }
        Ok(value) => {
            let outcome = if is_empty_value(&value) {
                SlotOutcome::Empty
            } else {
                SlotOutcome::Populated
            };
            progress.on_capability_complete(capability, outcome);
            Some(value)
        }
        Err(e) => {
            warn!(
                "Capability '{}' ({}) failed: {}; continuing without it.",
                capability, call.tool_name, e
            );
            progress.on_capability_complete(capability, SlotOutcome::Failed);
            None
        }
    }
}
