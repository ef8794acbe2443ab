//! Application layer for imaging-copilot
//!
//! This crate contains use cases, port definitions, and application configuration.
//! It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::{RenderParams, WorkflowParams};
pub use ports::{
    llm_gateway::{CompletionRequest, GatewayError, LlmGateway},
    progress::{NoProgress, SlotOutcome, WorkflowProgress, WorkflowStep},
    tool_session::{SessionError, SessionProvider, ToolSession},
};
pub use use_cases::build_impact::{BuildImpactInput, BuildImpactUseCase, ObjectResolutionError};
pub use use_cases::build_summary::{BuildSummaryInput, BuildSummaryUseCase};
pub use use_cases::error::{AggregationError, Workflow, WorkflowError};
pub use use_cases::inspect_server::{InspectServerUseCase, ServerInventory};
pub use use_cases::render_report::{RenderError, RenderReportUseCase};
pub use use_cases::select_application::{SelectedApplication, SelectionError, select_application};
