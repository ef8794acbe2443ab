//! Progress notification port
//!
//! Defines the interface for reporting progress while a workflow runs.

use imaging_domain::Capability;

/// Coarse workflow steps, in execution order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorkflowStep {
    Connect,
    ListTools,
    SelectApplication,
    ResolveObject,
    Gather,
    Render,
}

impl WorkflowStep {
    pub fn as_str(&self) -> &'static str {
        match self {
            WorkflowStep::Connect => "Connecting to Imaging",
            WorkflowStep::ListTools => "Listing tools",
            WorkflowStep::SelectApplication => "Selecting application",
            WorkflowStep::ResolveObject => "Resolving object",
            WorkflowStep::Gather => "Gathering analyses",
            WorkflowStep::Render => "Rendering report",
        }
    }
}

impl std::fmt::Display for WorkflowStep {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// What happened to one optional capability slot
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlotOutcome {
    /// The tool returned data
    Populated,
    /// The tool answered with nothing
    Empty,
    /// No advertised tool matched the capability
    Unavailable,
    /// The call raised; the slot is null
    Failed,
}

/// Callback for progress updates during a workflow
///
/// Implementations live in the presentation layer.
pub trait WorkflowProgress: Send + Sync {
    /// Called when a step starts
    fn on_step_start(&self, step: WorkflowStep);

    /// Called when a step completes
    fn on_step_complete(&self, step: WorkflowStep);

    /// Called once per optional capability slot
    fn on_capability_complete(&self, _capability: Capability, _outcome: SlotOutcome) {}
}

/// No-op progress notifier for when progress reporting is not needed
pub struct NoProgress;

impl WorkflowProgress for NoProgress {
    fn on_step_start(&self, _step: WorkflowStep) {}
    fn on_step_complete(&self, _step: WorkflowStep) {}
}
