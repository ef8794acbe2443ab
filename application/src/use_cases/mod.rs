//! Use cases
//!
//! Application-level operations that orchestrate domain logic.

pub mod build_impact;
pub mod build_summary;
pub mod error;
pub mod inspect_server;
pub mod render_report;
pub mod select_application;
pub(crate) mod shared;

#[cfg(test)]
pub(crate) mod testing;
