//! Workflow parameters passed to capability calls.

use serde::{Deserialize, Serialize};

/// Arguments the workflows add to capability calls.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkflowParams {
    /// `limit` for list-returning capabilities (transactions, data graphs, ...)
    pub result_limit: u32,
    /// `granularity` for the architectural graph
    pub granularity: String,
}

impl Default for WorkflowParams {
    fn default() -> Self {
        Self {
            result_limit: 50,
            granularity: "components".to_string(),
        }
    }
}

impl WorkflowParams {
    pub fn with_result_limit(mut self, limit: u32) -> Self {
        self.result_limit = limit;
        self
    }

    pub fn with_granularity(mut self, granularity: impl Into<String>) -> Self {
        self.granularity = granularity.into();
        self
    }
}
