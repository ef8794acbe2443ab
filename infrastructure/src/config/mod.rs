//! Configuration file loading for imaging-copilot
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `IMAGING_COPILOT_*` environment variables
//! 2. `--config <path>` specified file
//! 3. Project root: `./imaging-copilot.toml` or `./.imaging-copilot.toml`
//! 4. Global: `~/.config/imaging-copilot/config.toml`
//! 5. Default values
//!
//! The Imaging endpoint itself may additionally come from an MCP client config
//! file (`mcp.json`), see [`endpoint`].

pub mod endpoint;
mod file_config;
mod loader;

pub use endpoint::{ConfigError, ImagingEndpoint, McpConfigFile, McpServerEntry};
pub use file_config::{
    FileAnthropicConfig, FileConfig, FileImagingConfig, FileLoggingConfig, FileServerConfig,
    FileWorkflowConfig,
};
pub use loader::{ConfigLoader, ENV_PREFIX};
