//! Inspect Server use case
//!
//! Opens a session, lists the advertised tools and reports how each
//! capability resolves against them. Used by health checks and the `tools`
//! command. An empty tool list is reported, not treated as an error.

use super::error::WorkflowError;
use super::shared::open_session;
use crate::ports::progress::{NoProgress, WorkflowProgress, WorkflowStep};
use crate::ports::tool_session::SessionProvider;
use imaging_domain::{Capability, CapabilityBinding, ToolCatalog};
use std::sync::Arc;

/// What the tool server currently advertises
#[derive(Debug, Clone, PartialEq)]
pub struct ServerInventory {
    pub endpoint: String,
    pub tools: Vec<String>,
    pub bindings: Vec<CapabilityBinding>,
}

impl ServerInventory {
    pub fn missing_mandatory(&self) -> Vec<Capability> {
        self.bindings
            .iter()
            .filter(|b| b.capability.is_mandatory() && !b.is_available())
            .map(|b| b.capability)
            .collect()
    }
}

/// Use case for probing the tool server
pub struct InspectServerUseCase<P: SessionProvider + ?Sized + 'static> {
    provider: Arc<P>,
}

impl<P: SessionProvider + ?Sized + 'static> InspectServerUseCase<P> {
    pub fn new(provider: Arc<P>) -> Self {
        Self { provider }
    }

    pub async fn execute(&self) -> Result<ServerInventory, WorkflowError> {
        self.execute_with_progress(&NoProgress).await
    }

    pub async fn execute_with_progress(
        &self,
        progress: &dyn WorkflowProgress,
    ) -> Result<ServerInventory, WorkflowError> {
        let session = open_session(self.provider.as_ref(), progress).await?;

        progress.on_step_start(WorkflowStep::ListTools);
        let listed = session.list_tools().await;
        session.close().await;
        let tools = listed.map_err(WorkflowError::ListTools)?;
        progress.on_step_complete(WorkflowStep::ListTools);

        let catalog = ToolCatalog::new(tools);
        let bindings = Capability::ALL.iter().map(|c| catalog.bind(*c)).collect();

        Ok(ServerInventory {
            endpoint: self.provider.endpoint(),
            tools: catalog.names().to_vec(),
            bindings,
        })
    }
}
