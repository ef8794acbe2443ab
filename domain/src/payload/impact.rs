//! Impact workflow payload

use crate::catalog::Application;
use crate::core::json::is_empty_value;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Everything gathered to assess the impact of changing one object.
///
/// `object_details` is always populated (resolution is mandatory); the
/// dependent sections are `null` when unavailable or failed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImpactPayload {
    pub question: String,
    pub selected_application: Application,
    pub object_hint: String,
    pub object_details: Value,
    pub transactions_using_object: Option<Value>,
    pub data_graphs_involving_object: Option<Value>,
    pub inter_applications_dependencies: Option<Value>,
    pub tool_names: Vec<String>,
}

impl ImpactPayload {
    /// Dependent sections in presentation order.
    pub fn sections(&self) -> [(&'static str, Option<&Value>); 3] {
        [
            ("transactions_using_object", self.transactions_using_object.as_ref()),
            ("data_graphs_involving_object", self.data_graphs_involving_object.as_ref()),
            (
                "inter_applications_dependencies",
                self.inter_applications_dependencies.as_ref(),
            ),
        ]
    }

    pub fn populated_sections(&self) -> Vec<&'static str> {
        self.sections()
            .into_iter()
            .filter(|(_, value)| value.is_some_and(|v| !is_empty_value(v)))
            .map(|(name, _)| name)
            .collect()
    }
}
