//! Prompt templates for the summary and impact reports

use crate::core::string::truncate;
use crate::payload::{ImpactPayload, SummaryPayload};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Upper bound on the rendered size of a single JSON section.
const MAX_SECTION_CHARS: usize = 24_000;

/// Which report is being rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportKind {
    Summary,
    Impact,
}

impl ReportKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReportKind::Summary => "summary",
            ReportKind::Impact => "impact",
        }
    }

    /// Completion budget for this report.
    pub fn default_max_tokens(&self) -> u32 {
        match self {
            ReportKind::Summary => 1200,
            ReportKind::Impact => 1400,
        }
    }
}

impl std::fmt::Display for ReportKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A ready-to-send prompt pair.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportPrompt {
    pub kind: ReportKind,
    pub system: &'static str,
    pub user: String,
}

impl ReportPrompt {
    pub fn summary(payload: &SummaryPayload) -> Self {
        Self {
            kind: ReportKind::Summary,
            system: Self::summary_system(),
            user: Self::summary_prompt(payload),
        }
    }

    pub fn impact(payload: &ImpactPayload) -> Self {
        Self {
            kind: ReportKind::Impact,
            system: Self::impact_system(),
            user: Self::impact_prompt(payload),
        }
    }

    /// System prompt for the application summary
    pub fn summary_system() -> &'static str {
        "You are the Imaging Technical Copilot. \
Produce an accurate, concise technical summary for the selected application, \
grounded ONLY in the provided Imaging data. If something is missing, say it's unavailable."
    }

    /// User prompt for the application summary
    pub fn summary_prompt(payload: &SummaryPayload) -> String {
        format!(
            r#"Question:
{question}

Application (selected):
{application}

Key Data:
- Stats: {stats}
- Architectural Graph: {arch}
- Quality Insights: {quality}
- Packages / Technologies: {packages}
- Transactions: {transactions}
- Data Graphs: {data_graphs}

Instructions:
1) Start with a 2-3 sentence Overview.
2) Sections with bullets: Technologies, Architecture, Data Flows, Dependencies, Key Risks/Hotspots, Next Steps.
3) Reference concrete components where available; be explicit when info is not available."#,
            question = payload.question,
            application = json_section(&payload.selected_application),
            stats = optional_section(payload.stats.as_ref()),
            arch = optional_section(payload.architectural_graph.as_ref()),
            quality = optional_section(payload.quality_insights.as_ref()),
            packages = optional_section(payload.packages.as_ref()),
            transactions = optional_section(payload.transactions.as_ref()),
            data_graphs = optional_section(payload.data_graphs.as_ref()),
        )
    }

    /// System prompt for the impact report
    pub fn impact_system() -> &'static str {
        "You are the Imaging Technical Copilot. Create an impact analysis report for a code change. \
Ground ONLY in provided Imaging data. Be conservative: call out potential breakages, tests to run, and approvals."
    }

    /// User prompt for the impact report
    pub fn impact_prompt(payload: &ImpactPayload) -> String {
        format!(
            r#"Question:
{question}

Application:
{application}

Object Details:
{object}

Transactions Using Object:
{transactions}

Data Graphs Involving Object:
{data_graphs}

Inter-Application Dependencies:
{dependencies}

Report format:
1) Scope: object(s) and application in scope; assumptions.
2) Direct Impacts: callers/callees, immediate dependencies.
3) Transaction Risks: user-facing transactions affected and why.
4) Data Impacts: tables/files/APIs touched and consistency concerns.
5) Cross-App Impacts: upstream/downstream apps; integration points.
6) Testing Plan: transactions to exercise; edge cases; data checks.
7) Controls/Approvals: security, PII, licensing, rollout/rollback suggestions.
If data is missing, say 'Not available from Imaging data.'"#,
            question = payload.question,
            application = json_section(&payload.selected_application),
            object = json_section(&payload.object_details),
            transactions = optional_section(payload.transactions_using_object.as_ref()),
            data_graphs = optional_section(payload.data_graphs_involving_object.as_ref()),
            dependencies = optional_section(payload.inter_applications_dependencies.as_ref()),
        )
    }
}

fn json_section<T: Serialize>(value: &T) -> String {
    let rendered = serde_json::to_string_pretty(value).unwrap_or_else(|e| format!("<unserializable: {}>", e));
    truncate(&rendered, MAX_SECTION_CHARS)
}

fn optional_section(value: Option<&Value>) -> String {
    match value {
        Some(Value::Null) | None => "N/A".to_string(),
        Some(v) => json_section(v),
    }
}
