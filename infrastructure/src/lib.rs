//! Infrastructure layer for imaging-copilot
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading.

pub mod anthropic;
pub mod config;
pub mod mcp;

// Re-export commonly used types
pub use anthropic::{AnthropicGateway, AnthropicSettings};
pub use config::{
    ConfigError, ConfigLoader, FileAnthropicConfig, FileConfig, FileImagingConfig,
    FileLoggingConfig, FileServerConfig, FileWorkflowConfig, ImagingEndpoint,
};
pub use mcp::{McpSession, McpSessionProvider};
