//! Tool session port
//!
//! Defines the interface for talking to an Imaging tool server. One session
//! is opened per request and closed when the request's workflow finishes.

use async_trait::async_trait;
use imaging_domain::ToolCall;
use serde_json::Value;
use thiserror::Error;

/// Errors that can occur while talking to the tool server
#[derive(Error, Debug)]
pub enum SessionError {
    #[error("Connection error: {0}")]
    ConnectionError(String),

    #[error("Failed to list tools: {0}")]
    ListFailed(String),

    #[error("Call to '{tool}' failed: {message}")]
    CallFailed { tool: String, message: String },

    #[error("Tool '{tool}' reported an error: {message}")]
    ToolFailed { tool: String, message: String },

    #[error("Transport closed")]
    TransportClosed,
}

/// Factory for tool sessions
///
/// Implementations (adapters) live in the infrastructure layer.
#[async_trait]
pub trait SessionProvider: Send + Sync {
    /// Open a new session. Failure is fatal to the request.
    async fn open(&self) -> Result<Box<dyn ToolSession>, SessionError>;

    /// Human-readable description of the server (for logs and health checks)
    fn endpoint(&self) -> String {
        "tool server".to_string()
    }
}

/// An open session with the tool server
#[async_trait]
pub trait ToolSession: Send + Sync {
    /// Names of every advertised tool, in advertisement order.
    async fn list_tools(&self) -> Result<Vec<String>, SessionError>;

    /// Invoke a tool and return its decoded result.
    async fn call_tool(&self, call: &ToolCall) -> Result<Value, SessionError>;

    /// Release the session. Must be safe to call after a failure.
    async fn close(&self);
}
