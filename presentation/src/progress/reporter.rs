//! Progress reporting for workflow execution

use colored::Colorize;
use imaging_application::{SlotOutcome, WorkflowProgress, WorkflowStep};
use imaging_domain::Capability;
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::Mutex;
use std::time::Duration;

/// Reports progress with a spinner per workflow step
pub struct ProgressReporter {
    spinner: Mutex<Option<ProgressBar>>,
}

impl ProgressReporter {
    pub fn new() -> Self {
        Self {
            spinner: Mutex::new(None),
        }
    }

    fn spinner_style() -> ProgressStyle {
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {prefix:.bold.cyan} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
    }

    fn outcome_mark(outcome: SlotOutcome) -> String {
        match outcome {
            SlotOutcome::Populated => "v".green().to_string(),
            SlotOutcome::Empty => "o".yellow().to_string(),
            SlotOutcome::Unavailable => "-".dimmed().to_string(),
            SlotOutcome::Failed => "x".red().to_string(),
        }
    }
}

impl Default for ProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl WorkflowProgress for ProgressReporter {
    fn on_step_start(&self, step: WorkflowStep) {
        let pb = ProgressBar::new_spinner();
        pb.set_style(Self::spinner_style());
        pb.set_prefix(step.as_str());
        pb.set_message("...");
        pb.enable_steady_tick(Duration::from_millis(100));

        if let Ok(mut slot) = self.spinner.lock()
            && let Some(previous) = slot.replace(pb)
        {
            previous.finish_and_clear();
        }
    }

    fn on_step_complete(&self, step: WorkflowStep) {
        if let Ok(mut slot) = self.spinner.lock()
            && let Some(pb) = slot.take()
        {
            pb.finish_with_message(format!("{}", "done".green()));
            tracing::trace!("{} complete", step);
        }
    }

    fn on_capability_complete(&self, capability: Capability, outcome: SlotOutcome) {
        if let Ok(slot) = self.spinner.lock()
            && let Some(pb) = slot.as_ref()
        {
            pb.set_message(format!("{} {}", Self::outcome_mark(outcome), capability));
        }
    }
}

/// Simple text-based progress (no fancy UI)
pub struct SimpleProgress;

impl WorkflowProgress for SimpleProgress {
    fn on_step_start(&self, step: WorkflowStep) {
        eprintln!("{} {}", "->".cyan(), step.as_str().bold());
    }

    fn on_step_complete(&self, _step: WorkflowStep) {}

    fn on_capability_complete(&self, capability: Capability, outcome: SlotOutcome) {
        let note = match outcome {
            SlotOutcome::Populated => "",
            SlotOutcome::Empty => " (empty)",
            SlotOutcome::Unavailable => " (not offered)",
            SlotOutcome::Failed => " (failed)",
        };
        eprintln!("  {} {}{}", ProgressReporter::outcome_mark(outcome), capability, note);
    }
}
