//! Capability domain module
//!
//! An Imaging server exposes its analyses as MCP tools, but the tool names are
//! not self-describing: the same capability may be advertised as `stats`,
//! `bb7_stats` or `imaging__stats` depending on the deployment. This module
//! maps abstract [`Capability`] values onto whatever a session advertises.
//!
//! ```text
//! ┌──────────────┐    ┌──────────────┐    ┌───────────────────┐
//! │ Capability   │───▶│ ToolCatalog  │───▶│ CapabilityBinding │
//! │ ("stats")    │    │ (advertised) │    │ stats → bb7_stats │
//! └──────────────┘    └──────────────┘    └───────────────────┘
//! ```
//!
//! - [`resolve_tool_name`] - pure exact → suffix → fuzzy resolution
//! - [`ToolCatalog`] - the per-request immutable set of advertised names

pub mod entities;
pub mod resolver;

pub use entities::{Capability, CapabilityBinding};
pub use resolver::{ToolCatalog, resolve_tool_name};
