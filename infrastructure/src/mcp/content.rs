//! Decoding of MCP tool results into plain JSON

use imaging_application::SessionError;
use serde_json::Value;

/// Convert a serialized `CallToolResult` into the value a workflow consumes.
///
/// Structured content wins. Otherwise the first content item is used: text is
/// parsed as JSON when possible and kept as a string when not, `data` payloads
/// are returned as-is. A result flagged `isError` becomes [`SessionError::ToolFailed`].
pub fn decode_tool_result(tool: &str, result: Value) -> Result<Value, SessionError> {
    if result.get("isError").and_then(Value::as_bool).unwrap_or(false) {
        return Err(SessionError::ToolFailed {
            tool: tool.to_string(),
            message: error_text(&result),
        });
    }

    if let Some(structured) = result.get("structuredContent").filter(|v| !v.is_null()) {
        return Ok(structured.clone());
    }

    let Some(first) = result
        .get("content")
        .and_then(Value::as_array)
        .and_then(|items| items.first())
    else {
        return Ok(Value::Null);
    };

    if let Some(text) = first.get("text").and_then(Value::as_str) {
        return Ok(serde_json::from_str(text).unwrap_or_else(|_| Value::String(text.to_string())));
    }
    if let Some(data) = first.get("data") {
        return Ok(data.clone());
    }
    Ok(first.clone())
}

fn error_text(result: &Value) -> String {
    let texts: Vec<&str> = result
        .get("content")
        .and_then(Value::as_array)
        .map(|items| items.iter().filter_map(|i| i.get("text").and_then(Value::as_str)).collect())
        .unwrap_or_default();

    if texts.is_empty() {
        "tool returned an error without details".to_string()
    } else {
        texts.join("\n")
    }
}
