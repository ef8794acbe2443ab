//! Domain layer for imaging-copilot
//!
//! This crate contains the pure logic of the copilot: no I/O, no async, no
//! knowledge of MCP or HTTP.
//!
//! # Core Concepts
//!
//! ## Capabilities
//!
//! An Imaging server advertises its analyses as tools whose names vary between
//! deployments. A [`Capability`] is the abstract analysis ("stats",
//! "object_details"); a [`ToolCatalog`] resolves it to the advertised name.
//!
//! ## Applications
//!
//! The `applications` capability returns data in many shapes. [`catalog`]
//! normalizes it into [`Application`] records and picks the one in scope.
//!
//! ## Payloads
//!
//! Workflows assemble a fixed-shape [`SummaryPayload`] or [`ImpactPayload`],
//! which [`ReportPrompt`] turns into a renderer prompt.

pub mod capability;
pub mod catalog;
pub mod core;
pub mod payload;
pub mod prompt;
pub mod tool;

pub use capability::{Capability, CapabilityBinding, ToolCatalog, resolve_tool_name};
pub use catalog::{
    Application, ApplicationChoice, SelectionMethod, match_key, normalize_app_id,
    normalize_applications, select_application,
};
pub use core::json::is_empty_value;
pub use payload::{ImpactPayload, OBJECT_PROBE_KEYS, SummaryPayload, object_identifier};
pub use prompt::{ReportKind, ReportPrompt};
pub use tool::ToolCall;
