//! Tool domain entities

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A single invocation of an advertised tool.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolCall {
    /// Resolved (advertised) tool name
    pub tool_name: String,
    /// Named arguments, sent as a JSON object
    #[serde(default)]
    pub arguments: Map<String, Value>,
}

impl ToolCall {
    pub fn new(tool_name: impl Into<String>) -> Self {
        Self {
            tool_name: tool_name.into(),
            arguments: Map::new(),
        }
    }

    pub fn with_arg(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.arguments.insert(key.into(), value.into());
        self
    }

    pub fn get_string(&self, key: &str) -> Option<&str> {
        self.arguments.get(key).and_then(Value::as_str)
    }

    pub fn get_u64(&self, key: &str) -> Option<u64> {
        self.arguments.get(key).and_then(Value::as_u64)
    }
}

impl std::fmt::Display for ToolCall {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}({})", self.tool_name, Value::Object(self.arguments.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_tool_call_builder() {
        let call = ToolCall::new("bb7_stats")
            .with_arg("app_id", "app1")
            .with_arg("limit", 50);

        assert_eq!(call.tool_name, "bb7_stats");
        assert_eq!(call.get_string("app_id"), Some("app1"));
        assert_eq!(call.get_u64("limit"), Some(50));
        assert_eq!(call.get_string("missing"), None);
    }

    #[test]
    fn test_with_arg_accepts_json_values() {
        let call = ToolCall::new("stats").with_arg("app_id", json!(42));
        assert_eq!(call.arguments["app_id"], json!(42));
    }

    #[test]
    fn test_display() {
        let call = ToolCall::new("stats").with_arg("app_id", "app1");
        assert_eq!(call.to_string(), r#"stats({"app_id":"app1"})"#);
    }
}
