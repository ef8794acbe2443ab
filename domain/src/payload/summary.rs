//! Summary workflow payload

use crate::catalog::Application;
use crate::core::json::is_empty_value;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Everything gathered to summarize one application.
///
/// Every key is always serialized; unavailable or failed capabilities are
/// `null`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryPayload {
    pub question: String,
    pub selected_application: Application,
    pub stats: Option<Value>,
    pub architectural_graph: Option<Value>,
    pub quality_insights: Option<Value>,
    pub packages: Option<Value>,
    pub transactions: Option<Value>,
    pub data_graphs: Option<Value>,
    /// Every tool name the session advertised
    pub tool_names: Vec<String>,
}

impl SummaryPayload {
    /// Capability sections in presentation order.
    pub fn sections(&self) -> [(&'static str, Option<&Value>); 6] {
        [
            ("stats", self.stats.as_ref()),
            ("architectural_graph", self.architectural_graph.as_ref()),
            ("quality_insights", self.quality_insights.as_ref()),
            ("packages", self.packages.as_ref()),
            ("transactions", self.transactions.as_ref()),
            ("data_graphs", self.data_graphs.as_ref()),
        ]
    }

    /// Names of sections that carry data.
    pub fn populated_sections(&self) -> Vec<&'static str> {
        self.sections()
            .into_iter()
            .filter(|(_, value)| value.is_some_and(|v| !is_empty_value(v)))
            .map(|(name, _)| name)
            .collect()
    }
}
