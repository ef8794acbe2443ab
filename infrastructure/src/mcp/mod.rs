//! Imaging MCP client adapter
//!
//! Implements the tool session ports over MCP streamable HTTP.

mod content;
mod session;

pub use content::decode_tool_result;
pub use session::{McpSession, McpSessionProvider};
