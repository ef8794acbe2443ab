//! Prompt domain
//!
//! Templates that turn an aggregated payload into the system message and user
//! prompt sent to the report renderer.

mod template;

pub use template::{ReportKind, ReportPrompt};
