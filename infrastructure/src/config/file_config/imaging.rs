//! Imaging server configuration from TOML (`[imaging]` section)

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::PathBuf;

/// Where and how to reach the Imaging MCP server.
///
/// The endpoint comes either from the inline `url`/`headers` or from an
/// MCP client config file (`mcp.json`) naming the server.
///
/// ```toml
/// [imaging]
/// mcp_config = "config/mcp.json"
/// url_override_env = "MCP_IMAGING_URL"
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileImagingConfig {
    /// Streamable HTTP endpoint, e.g. `http://imaging-mcp:8282/mcp/`
    pub url: Option<String>,
    /// Extra request headers, merged over those from `mcp_config`
    pub headers: BTreeMap<String, String>,
    /// Path to an MCP client config file (`{"servers": {...}}`)
    pub mcp_config: Option<PathBuf>,
    /// Server entry to read from `mcp_config`
    pub server_name: String,
    /// Environment variable that overrides the URL when set
    pub url_override_env: String,
    /// Environment variable substituted into `${input:...}` header placeholders
    pub api_key_env: String,
}

impl Default for FileImagingConfig {
    fn default() -> Self {
        Self {
            url: None,
            headers: BTreeMap::new(),
            mcp_config: None,
            server_name: "imaging".to_string(),
            url_override_env: "MCP_IMAGING_URL".to_string(),
            api_key_env: "IMAGING_API_KEY".to_string(),
        }
    }
}
