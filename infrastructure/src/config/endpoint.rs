//! Imaging endpoint resolution
//!
//! Combines the `[imaging]` section, an optional MCP client config file and
//! the environment into the URL and headers used to open sessions.

use super::file_config::FileImagingConfig;
use serde::Deserialize;
use std::collections::{BTreeMap, HashMap};
use std::path::PathBuf;
use thiserror::Error;
use tracing::{debug, warn};

/// Header values starting with this prefix are replaced by the API key.
const INPUT_PLACEHOLDER_PREFIX: &str = "${input:";

/// Configuration errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read MCP config {}: {source}", .path.display())]
    ReadMcpConfig {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid MCP config {}: {source}", .path.display())]
    ParseMcpConfig {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("No '{0}' server found in MCP config")]
    MissingServer(String),

    #[error("Expected 'http' type for '{name}' server in MCP config, found '{found}'")]
    UnsupportedTransport { name: String, found: String },

    #[error("Imaging MCP base URL missing from config")]
    MissingUrl,

    #[error("Invalid header '{name}': {message}")]
    InvalidHeader { name: String, message: String },

    #[error("Anthropic API key not set (expected env var {0})")]
    MissingApiKey(String),

    #[error("Failed to build HTTP client: {0}")]
    HttpClient(String),

    #[error("Failed to load configuration: {0}")]
    Load(#[from] Box<figment::Error>),
}

/// MCP client config file (`mcp.json`)
#[derive(Debug, Clone, Default, Deserialize)]
pub struct McpConfigFile {
    #[serde(default)]
    pub servers: HashMap<String, McpServerEntry>,
}

/// One server entry in `mcp.json`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct McpServerEntry {
    #[serde(rename = "type")]
    pub transport: Option<String>,
    pub url: Option<String>,
    #[serde(default)]
    pub headers: BTreeMap<String, String>,
}

/// A resolved Imaging endpoint
#[derive(Clone, PartialEq, Eq)]
pub struct ImagingEndpoint {
    pub url: String,
    pub headers: BTreeMap<String, String>,
}

impl ImagingEndpoint {
    /// Header names with values masked, for display.
    pub fn redacted_headers(&self) -> BTreeMap<String, String> {
        self.headers
            .iter()
            .map(|(name, value)| {
                let masked = if value.is_empty() { "(empty)" } else { "***" };
                (name.clone(), masked.to_string())
            })
            .collect()
    }
}

impl std::fmt::Debug for ImagingEndpoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ImagingEndpoint")
            .field("url", &self.url)
            .field("headers", &self.redacted_headers())
            .finish()
    }
}

impl FileImagingConfig {
    /// Resolve the endpoint against the process environment.
    pub fn resolve_endpoint(&self) -> Result<ImagingEndpoint, ConfigError> {
        self.resolve_endpoint_with(|name| std::env::var(name).ok())
    }

    /// Resolve the endpoint with an explicit environment lookup.
    ///
    /// URL priority: override env var, inline `url`, `mcp_config` entry.
    /// Inline headers are merged over the file's.
    pub fn resolve_endpoint_with(
        &self,
        env: impl Fn(&str) -> Option<String>,
    ) -> Result<ImagingEndpoint, ConfigError> {
        let mut url = None;
        let mut headers = BTreeMap::new();

        if let Some(path) = &self.mcp_config {
            let entry = self.load_server_entry(path)?;
            url = entry.url;
            headers = entry.headers;
        }

        if let Some(inline) = self.url.as_ref().filter(|u| !u.trim().is_empty()) {
            url = Some(inline.clone());
        }
        headers.extend(self.headers.clone());

        if let Some(override_url) = env(&self.url_override_env).filter(|u| !u.trim().is_empty()) {
            debug!("Imaging URL overridden by {}", self.url_override_env);
            url = Some(override_url);
        }

        let api_key = env(&self.api_key_env);
        for (name, value) in headers.iter_mut() {
            if value.starts_with(INPUT_PLACEHOLDER_PREFIX) {
                if api_key.is_none() {
                    warn!(
                        "Header '{}' expects {} but it is not set; sending an empty value",
                        name, self.api_key_env
                    );
                }
                *value = api_key.clone().unwrap_or_default();
            }
        }

        let url = url
            .map(|u| u.trim().to_string())
            .filter(|u| !u.is_empty())
            .ok_or(ConfigError::MissingUrl)?;

        Ok(ImagingEndpoint { url, headers })
    }

    fn load_server_entry(&self, path: &PathBuf) -> Result<McpServerEntry, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::ReadMcpConfig {
            path: path.clone(),
            source,
        })?;
        let file: McpConfigFile =
            serde_json::from_str(&content).map_err(|source| ConfigError::ParseMcpConfig {
                path: path.clone(),
                source,
            })?;

        let entry = file
            .servers
            .get(&self.server_name)
            .cloned()
            .ok_or_else(|| ConfigError::MissingServer(self.server_name.clone()))?;

        match entry.transport.as_deref() {
            Some("http") => Ok(entry),
            other => Err(ConfigError::UnsupportedTransport {
                name: self.server_name.clone(),
                found: other.unwrap_or("none").to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn mcp_file(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    fn no_env(_: &str) -> Option<String> {
        None
    }

    #[test]
    fn test_inline_url() {
        let config = FileImagingConfig {
            url: Some("http://localhost:8282/mcp/".to_string()),
            ..Default::default()
        };
        let endpoint = config.resolve_endpoint_with(no_env).unwrap();
        assert_eq!(endpoint.url, "http://localhost:8282/mcp/");
        assert!(endpoint.headers.is_empty());
    }

    #[test]
    fn test_mcp_config_file_with_placeholder() {
        let file = mcp_file(
            r#"{"servers": {"imaging": {
                "type": "http",
                "url": "http://imaging:8282/mcp/",
                "headers": {"x-api-key": "${input:imaging-key}", "x-tenant": "acme"}
            }}}"#,
        );
        let config = FileImagingConfig {
            mcp_config: Some(file.path().to_path_buf()),
            ..Default::default()
        };

        let endpoint = config
            .resolve_endpoint_with(|name| (name == "IMAGING_API_KEY").then(|| "secret".to_string()))
            .unwrap();

        assert_eq!(endpoint.url, "http://imaging:8282/mcp/");
        assert_eq!(endpoint.headers["x-api-key"], "secret");
        assert_eq!(endpoint.headers["x-tenant"], "acme");
        assert!(!format!("{:?}", endpoint).contains("secret"));
    }

    #[test]
    fn test_url_override_env() {
        let file = mcp_file(r#"{"servers": {"imaging": {"type": "http", "url": "http://a/mcp/"}}}"#);
        let config = FileImagingConfig {
            mcp_config: Some(file.path().to_path_buf()),
            ..Default::default()
        };

        let endpoint = config
            .resolve_endpoint_with(|name| {
                (name == "MCP_IMAGING_URL").then(|| "http://imaging-mcp:8282/mcp/".to_string())
            })
            .unwrap();
        assert_eq!(endpoint.url, "http://imaging-mcp:8282/mcp/");
    }

    #[test]
    fn test_placeholder_without_key_is_empty() {
        let config = FileImagingConfig {
            url: Some("http://a/mcp/".to_string()),
            headers: BTreeMap::from([("x-api-key".to_string(), "${input:key}".to_string())]),
            ..Default::default()
        };
        let endpoint = config.resolve_endpoint_with(no_env).unwrap();
        assert_eq!(endpoint.headers["x-api-key"], "");
    }

    #[test]
    fn test_missing_server() {
        let file = mcp_file(r#"{"servers": {"other": {"type": "http", "url": "http://a"}}}"#);
        let config = FileImagingConfig {
            mcp_config: Some(file.path().to_path_buf()),
            ..Default::default()
        };
        let err = config.resolve_endpoint_with(no_env).unwrap_err();
        assert!(matches!(err, ConfigError::MissingServer(ref name) if name == "imaging"));
    }

    #[test]
    fn test_non_http_transport() {
        let file = mcp_file(r#"{"servers": {"imaging": {"type": "stdio", "url": "http://a"}}}"#);
        let config = FileImagingConfig {
            mcp_config: Some(file.path().to_path_buf()),
            ..Default::default()
        };
        let err = config.resolve_endpoint_with(no_env).unwrap_err();
        assert!(err.to_string().contains("found 'stdio'"));
    }

    #[test]
    fn test_missing_url() {
        let file = mcp_file(r#"{"servers": {"imaging": {"type": "http"}}}"#);
        let config = FileImagingConfig {
            mcp_config: Some(file.path().to_path_buf()),
            ..Default::default()
        };
        let err = config.resolve_endpoint_with(no_env).unwrap_err();
        assert!(matches!(err, ConfigError::MissingUrl));

        let err = FileImagingConfig::default().resolve_endpoint_with(no_env).unwrap_err();
        assert!(matches!(err, ConfigError::MissingUrl));
    }

    #[test]
    fn test_unreadable_or_invalid_file() {
        let config = FileImagingConfig {
            mcp_config: Some(PathBuf::from("/nonexistent/mcp.json")),
            ..Default::default()
        };
        assert!(matches!(
            config.resolve_endpoint_with(no_env).unwrap_err(),
            ConfigError::ReadMcpConfig { .. }
        ));

        let file = mcp_file("not json");
        let config = FileImagingConfig {
            mcp_config: Some(file.path().to_path_buf()),
            ..Default::default()
        };
        assert!(matches!(
            config.resolve_endpoint_with(no_env).unwrap_err(),
            ConfigError::ParseMcpConfig { .. }
        ));
    }
}
