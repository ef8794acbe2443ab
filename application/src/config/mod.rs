//! Application-level configuration.
//!
//! This module provides configuration types that control how use cases behave:
//!
//! - [`WorkflowParams`] - arguments shared by every capability call
//! - [`RenderParams`] - completion budgets for the report renderer

pub mod render_params;
pub mod workflow_params;

pub use render_params::RenderParams;
pub use workflow_params::WorkflowParams;
