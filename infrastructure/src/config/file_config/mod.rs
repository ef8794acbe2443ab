//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and converted to application types where
//! a use case needs them.

mod imaging;
mod providers;

pub use imaging::FileImagingConfig;
pub use providers::FileAnthropicConfig;

use imaging_application::WorkflowParams;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Imaging MCP server endpoint
    pub imaging: FileImagingConfig,
    /// Report renderer settings
    pub anthropic: FileAnthropicConfig,
    /// Capability call parameters
    pub workflow: FileWorkflowConfig,
    /// HTTP server settings
    pub server: FileServerConfig,
    /// Log output settings
    pub logging: FileLoggingConfig,
}

impl FileConfig {
    /// The configuration as TOML, with secrets masked (for `show-config`).
    pub fn to_redacted_toml(&self) -> Result<String, toml::ser::Error> {
        let mut shown = self.clone();
        if shown.anthropic.api_key.is_some() {
            shown.anthropic.api_key = Some("***".to_string());
        }
        for value in shown.imaging.headers.values_mut() {
            if !value.is_empty() {
                *value = "***".to_string();
            }
        }
        toml::to_string_pretty(&shown)
    }
}

/// `[workflow]` section
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileWorkflowConfig {
    /// `limit` passed to list-returning capabilities
    pub result_limit: u32,
    /// `granularity` passed to the architectural graph
    pub granularity: String,
}

impl Default for FileWorkflowConfig {
    fn default() -> Self {
        let params = WorkflowParams::default();
        Self {
            result_limit: params.result_limit,
            granularity: params.granularity,
        }
    }
}

impl FileWorkflowConfig {
    pub fn to_params(&self) -> WorkflowParams {
        WorkflowParams::default()
            .with_result_limit(self.result_limit)
            .with_granularity(self.granularity.clone())
    }
}

/// `[server]` section
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for FileServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8000,
        }
    }
}

impl FileServerConfig {
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// `[logging]` section
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileLoggingConfig {
    /// Also write logs to this file (non-blocking)
    pub file: Option<PathBuf>,
    /// Default filter directive when neither `-v` nor `RUST_LOG` is given
    pub level: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_full_config() {
        let toml_str = r#"
[imaging]
url = "http://localhost:8282/mcp/"
headers = { "x-api-key" = "${input:imaging-key}" }

[anthropic]
model = "claude-3-5-haiku-latest"
summary_max_tokens = 900

[workflow]
result_limit = 20
granularity = "modules"

[server]
port = 9000

[logging]
file = "/tmp/imaging-copilot.log"
"#;

        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.imaging.url.as_deref(), Some("http://localhost:8282/mcp/"));
        assert_eq!(config.imaging.headers["x-api-key"], "${input:imaging-key}");
        assert_eq!(config.imaging.server_name, "imaging");
        assert_eq!(config.anthropic.model, "claude-3-5-haiku-latest");
        assert_eq!(config.anthropic.summary_max_tokens, 900);
        assert_eq!(config.anthropic.impact_max_tokens, 1400);
        assert_eq!(config.workflow.to_params().result_limit, 20);
        assert_eq!(config.workflow.to_params().granularity, "modules");
        assert_eq!(config.server.bind_address(), "0.0.0.0:9000");
        assert_eq!(
            config.logging.file,
            Some(PathBuf::from("/tmp/imaging-copilot.log"))
        );
    }

    #[test]
    fn test_redacted_toml_masks_secrets() {
        let mut config = FileConfig::default();
        config.anthropic.api_key = Some("sk-secret".to_string());
        config
            .imaging
            .headers
            .insert("x-api-key".to_string(), "imaging-secret".to_string());

        let shown = config.to_redacted_toml().unwrap();
        assert!(!shown.contains("sk-secret"));
        assert!(!shown.contains("imaging-secret"));
        assert!(shown.contains("[workflow]"));
    }

    #[test]
    fn test_empty_config_uses_defaults() {
        let config: FileConfig = toml::from_str("").unwrap();
        assert_eq!(config, FileConfig::default());
        assert_eq!(config.workflow.result_limit, 50);
        assert_eq!(config.workflow.granularity, "components");
        assert_eq!(config.server.port, 8000);
    }
}
