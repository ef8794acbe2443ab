//! Renderer parameters.

use imaging_domain::ReportKind;
use serde::{Deserialize, Serialize};

/// Completion settings for each report kind.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderParams {
    pub summary_max_tokens: u32,
    pub impact_max_tokens: u32,
    pub temperature: f32,
}

impl Default for RenderParams {
    fn default() -> Self {
        Self {
            summary_max_tokens: ReportKind::Summary.default_max_tokens(),
            impact_max_tokens: ReportKind::Impact.default_max_tokens(),
            temperature: 0.2,
        }
    }
}

impl RenderParams {
    pub fn max_tokens(&self, kind: ReportKind) -> u32 {
        match kind {
            ReportKind::Summary => self.summary_max_tokens,
            ReportKind::Impact => self.impact_max_tokens,
        }
    }
}
