//! Streamable HTTP MCP session
//!
//! Implements [`SessionProvider`] and [`ToolSession`] on top of the rmcp client.

use super::content::decode_tool_result;
use crate::config::{ConfigError, ImagingEndpoint};
use async_trait::async_trait;
use imaging_application::{SessionError, SessionProvider, ToolSession};
use imaging_domain::ToolCall;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use rmcp::model::CallToolRequestParam;
use rmcp::service::{Peer, RunningService};
use rmcp::transport::StreamableHttpClientTransport;
use rmcp::transport::streamable_http_client::StreamableHttpClientTransportConfig;
use rmcp::{RoleClient, ServiceExt};
use serde_json::Value;
use tokio::sync::Mutex;
use tracing::{debug, info, warn};

/// Opens a fresh MCP session against the Imaging server for every request.
pub struct McpSessionProvider {
    url: String,
    client: reqwest::Client,
}

impl McpSessionProvider {
    /// Build a provider whose HTTP client sends the endpoint's headers on every request.
    pub fn new(endpoint: &ImagingEndpoint) -> Result<Self, ConfigError> {
        let client = reqwest::Client::builder()
            .default_headers(header_map(endpoint)?)
            .build()
            .map_err(|e| ConfigError::HttpClient(e.to_string()))?;

        Ok(Self {
            url: endpoint.url.clone(),
            client,
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

fn header_map(endpoint: &ImagingEndpoint) -> Result<HeaderMap, ConfigError> {
    let mut headers = HeaderMap::new();
    for (name, value) in &endpoint.headers {
        let invalid = |message: String| ConfigError::InvalidHeader {
            name: name.clone(),
            message,
        };
        let header_name =
            HeaderName::from_bytes(name.as_bytes()).map_err(|e| invalid(e.to_string()))?;
        let mut header_value = HeaderValue::from_str(value).map_err(|e| invalid(e.to_string()))?;
        header_value.set_sensitive(true);
        headers.insert(header_name, header_value);
    }
    Ok(headers)
}

#[async_trait]
impl SessionProvider for McpSessionProvider {
    async fn open(&self) -> Result<Box<dyn ToolSession>, SessionError> {
        debug!("Opening MCP session: {}", self.url);

        let transport = StreamableHttpClientTransport::with_client(
            self.client.clone(),
            StreamableHttpClientTransportConfig::with_uri(self.url.clone()),
        );

        let service = ()
            .serve(transport)
            .await
            .map_err(|e| SessionError::ConnectionError(format!("{}: {}", self.url, e)))?;

        info!("MCP session opened: {}", self.url);

        Ok(Box::new(McpSession {
            peer: service.peer().clone(),
            service: Mutex::new(Some(service)),
        }))
    }

    fn endpoint(&self) -> String {
        self.url.clone()
    }
}

/// An initialized MCP client session.
///
/// Calls go through a cloned [`Peer`], so several may be in flight at once.
pub struct McpSession {
    peer: Peer<RoleClient>,
    service: Mutex<Option<RunningService<RoleClient, ()>>>,
}

#[async_trait]
impl ToolSession for McpSession {
    async fn list_tools(&self) -> Result<Vec<String>, SessionError> {
        let tools = self
            .peer
            .list_all_tools()
            .await
            .map_err(|e| SessionError::ListFailed(e.to_string()))?;

        Ok(tools.into_iter().map(|tool| tool.name.to_string()).collect())
    }

    async fn call_tool(&self, call: &ToolCall) -> Result<Value, SessionError> {
        debug!("Calling tool {}", call);

        let result = self
            .peer
            .call_tool(CallToolRequestParam {
                name: call.tool_name.clone().into(),
                arguments: Some(call.arguments.clone()),
            })
            .await
            .map_err(|e| SessionError::CallFailed {
                tool: call.tool_name.clone(),
                message: e.to_string(),
            })?;

        let raw = serde_json::to_value(&result).map_err(|e| SessionError::CallFailed {
            tool: call.tool_name.clone(),
            message: format!("undecodable result: {}", e),
        })?;

        decode_tool_result(&call.tool_name, raw)
    }

    async fn close(&self) {
        let Some(service) = self.service.lock().await.take() else {
            return;
        };
        if let Err(e) = service.cancel().await {
            warn!("Error while closing MCP session: {}", e);
        } else {
            debug!("MCP session closed");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    fn endpoint(headers: &[(&str, &str)]) -> ImagingEndpoint {
        ImagingEndpoint {
            url: "http://localhost:8282/mcp/".to_string(),
            headers: headers
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect::<BTreeMap<_, _>>(),
        }
    }

    #[test]
    fn test_header_map() {
        let headers = header_map(&endpoint(&[("x-api-key", "secret"), ("x-tenant", "acme")])).unwrap();
        assert_eq!(headers.len(), 2);
        assert_eq!(headers["x-tenant"], "acme");
        assert!(headers["x-api-key"].is_sensitive());
    }

    #[test]
    fn test_invalid_header_name() {
        let err = header_map(&endpoint(&[("bad header", "v")])).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidHeader { ref name, .. } if name == "bad header"));
    }

    #[test]
    fn test_invalid_header_value() {
        assert!(McpSessionProvider::new(&endpoint(&[("x-api-key", "line\nbreak")])).is_err());
    }

    #[test]
    fn test_provider_endpoint() {
        let provider = McpSessionProvider::new(&endpoint(&[])).unwrap();
        assert_eq!(provider.endpoint(), "http://localhost:8282/mcp/");
        assert_eq!(provider.url(), "http://localhost:8282/mcp/");
    }

    #[tokio::test]
    async fn test_open_unreachable_server_fails() {
        let provider = McpSessionProvider::new(&ImagingEndpoint {
            url: "http://127.0.0.1:9/mcp/".to_string(),
            headers: BTreeMap::new(),
        })
        .unwrap();
        let result = provider.open().await;
        assert!(matches!(result, Err(SessionError::ConnectionError(_))));
    }
}
